//! # Simple Press
//!
//! A minimal static publishing pipeline for multi-section article sites.
//! Your filesystem is the data source: one subdirectory per section, one
//! Markdown file per article, YAML front matter for metadata.
//!
//! # Architecture: Read-Through Pipeline
//!
//! Every operation is a fresh projection of the directory state: no cache,
//! no database, no index file. Data flows through five small stages:
//!
//! ```text
//! content/posts/  →  discover  →  parse  →  derive  →  { catalog | resolve }  →  convert
//!                    (store)      (article)             (catalog / resolve)      (render)
//! ```
//!
//! The separation exists for three reasons:
//!
//! - **Freshness**: no cache means listings always reflect the current
//!   source tree; editing a file and re-running is the whole workflow.
//! - **Testability**: parsing and derivation are pure functions from file
//!   contents to structs, so tests exercise pipeline logic with plain
//!   strings or a tempdir fixture tree.
//! - **Independence**: catalog building and slug resolution share the
//!   store and parser but fail differently (loud for listings, soft for
//!   lookups), and keeping them apart keeps those policies apart.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`store`] | Source discovery — per-section file listing and reads, missing directories tolerated |
//! | [`article`] | Data model — sections, front-matter parsing with defaults, reading-time derivation |
//! | [`catalog`] | Aggregate listings — date-descending, stable ordering across sections |
//! | [`resolve`] | Slug lookup — fixed-priority fallback chain across sections |
//! | [`render`] | Markdown → HTML fragment conversion |
//! | [`config`] | `config.toml` loading and validation |
//! | [`output`] | CLI output formatting — tree-based display of catalog results |
//!
//! # Design Decisions
//!
//! ## Lexicographic Date Ordering
//!
//! Catalogs sort by comparing publish-date *strings* descending. Uniform
//! ISO-8601 dates sort chronologically under lexicographic comparison, and
//! the corpus convention is ISO-8601, so the pipeline deliberately skips
//! calendar parsing. Authors who mix date formats get degraded ordering,
//! not an error. Real date handling would silently reorder existing sites,
//! so the assumption is documented instead of fixed.
//!
//! ## Front Matter Is Never Fatal
//!
//! A missing, unclosed, or syntactically invalid metadata block yields an
//! article with every field defaulted and the entire file as body. Authors
//! lose metadata, never content. The only hard failures during listing are
//! IO failures, which abort the build; a partial catalog would silently
//! hide articles.
//!
//! ## Fallback Resolution
//!
//! Unscoped lookups walk the sections in a fixed priority order (science,
//! life, poetry) and treat every per-section failure, missing file and
//! unreadable file alike, as "try the next section". One corrupt file cannot
//! shadow a same-named article elsewhere, and only full exhaustion reports
//! not-found. This is a failover chain, not error suppression: the
//! aggregate listing path still fails loud.
//!
//! ## No Sanitization for Trusted Authors
//!
//! Raw HTML in article bodies passes through conversion unescaped. The
//! content root is an editorial input, never user-submitted, and authors
//! rely on inline `<figure>`/`<aside>` markup. This makes the source tree
//! a trust boundary: publishing an untrusted tree is out of contract.

pub mod article;
pub mod catalog;
pub mod config;
pub mod output;
pub mod render;
pub mod resolve;
pub mod store;

#[cfg(test)]
pub(crate) mod test_helpers;
