//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every article is its semantic identity (positional index, title,
//! reading time), with the filesystem path shown as secondary context via an
//! indented `Source:` line. The listing reads as a content inventory while
//! still letting users trace entries back to specific files.
//!
//! # Output Format
//!
//! ## List
//!
//! ```text
//! Catalog (all) - 5 articles
//! 001 The Signal in the Noise (3 min read)
//!     Source: science/signal-in-the-noise.md
//!     2024-06-01T09:00:00.000Z · M. Okafor
//!     On measurement error and attention.
//! 002 Echoes
//!     ...
//! ```
//!
//! ## Show
//!
//! ```text
//! Echoes (science) - 2 min read
//!     Source: science/echoes.md
//!     2024-03-10 · Anonymous
//!     Tags: memory, sound
//!
//! <raw markdown body>
//! ```
//!
//! # Architecture
//!
//! Each surface has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::article::{Article, ArticleMetadata, Scope};

const EXCERPT_DISPLAY_MAX: usize = 72;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn indent(line: impl AsRef<str>) -> String {
    format!("    {}", line.as_ref())
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_excerpt(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    }
}

/// Relative source path for display: `<section>/<slug>.md`.
fn source_line(meta: &ArticleMetadata) -> String {
    format!("Source: {}/{}.md", meta.section, meta.slug)
}

/// One catalog entry: header line plus indented context lines.
fn entry_lines(index: usize, meta: &ArticleMetadata) -> Vec<String> {
    let mut lines = vec![format!(
        "{} {} ({})",
        format_index(index),
        meta.title,
        meta.read_time
    )];
    lines.push(indent(source_line(meta)));
    lines.push(indent(format!("{} · {}", meta.date, meta.author)));
    if !meta.excerpt.is_empty() {
        lines.push(indent(truncate_excerpt(&meta.excerpt, EXCERPT_DISPLAY_MAX)));
    }
    lines
}

/// Format a catalog listing for a scope.
pub fn format_catalog(scope: Scope, entries: &[ArticleMetadata]) -> Vec<String> {
    let noun = if entries.len() == 1 {
        "article"
    } else {
        "articles"
    };
    let mut lines = vec![format!("Catalog ({scope}) - {} {noun}", entries.len())];
    for (i, meta) in entries.iter().enumerate() {
        lines.extend(entry_lines(i + 1, meta));
    }
    lines
}

/// Format a resolved article: metadata header, blank line, raw body.
pub fn format_article(article: &Article) -> Vec<String> {
    let meta = &article.meta;
    let mut lines = vec![format!(
        "{} ({}) - {}",
        meta.title, meta.section, meta.read_time
    )];
    lines.push(indent(source_line(meta)));
    lines.push(indent(format!("{} · {}", meta.date, meta.author)));
    if !meta.tags.is_empty() {
        lines.push(indent(format!("Tags: {}", meta.tags.join(", "))));
    }
    lines.push(String::new());
    lines.extend(article.body.lines().map(String::from));
    lines
}

pub fn print_catalog(scope: Scope, entries: &[ArticleMetadata]) {
    for line in format_catalog(scope, entries) {
        println!("{line}");
    }
}

pub fn print_article(article: &Article) {
    for line in format_article(article) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::Section;

    fn meta(slug: &str, title: &str) -> ArticleMetadata {
        ArticleMetadata {
            slug: slug.to_string(),
            title: title.to_string(),
            date: "2024-06-01".to_string(),
            excerpt: String::new(),
            author: "Anonymous".to_string(),
            cover_image: None,
            tags: vec![],
            read_time: "1 min read".to_string(),
            section: Section::Science,
        }
    }

    #[test]
    fn catalog_header_counts_entries() {
        let entries = vec![meta("a", "A"), meta("b", "B")];
        let lines = format_catalog(Scope::All, &entries);
        assert_eq!(lines[0], "Catalog (all) - 2 articles");
    }

    #[test]
    fn singular_noun_for_one_entry() {
        let lines = format_catalog(Scope::Section(Section::Science), &[meta("a", "A")]);
        assert_eq!(lines[0], "Catalog (science) - 1 article");
    }

    #[test]
    fn entry_header_has_index_title_read_time() {
        let lines = format_catalog(Scope::All, &[meta("a", "The Article")]);
        assert_eq!(lines[1], "001 The Article (1 min read)");
    }

    #[test]
    fn source_shown_as_context_line() {
        let lines = format_catalog(Scope::All, &[meta("the-slug", "T")]);
        assert!(lines.contains(&"    Source: science/the-slug.md".to_string()));
    }

    #[test]
    fn excerpt_line_only_when_present() {
        let mut with = meta("a", "A");
        with.excerpt = "Short note.".to_string();
        let lines = format_catalog(Scope::All, &[with]);
        assert!(lines.contains(&"    Short note.".to_string()));

        let without = format_catalog(Scope::All, &[meta("a", "A")]);
        assert_eq!(without.len(), 4); // header + entry header + 2 context lines
    }

    #[test]
    fn long_excerpt_truncated_with_ellipsis() {
        let mut m = meta("a", "A");
        m.excerpt = "x".repeat(100);
        let lines = format_catalog(Scope::All, &[m]);
        let excerpt_line = lines.last().unwrap();
        assert!(excerpt_line.ends_with("..."));
        assert!(excerpt_line.len() < 100);
    }

    #[test]
    fn article_view_ends_with_body() {
        let article = Article {
            meta: meta("a", "A"),
            body: "line one\nline two".to_string(),
        };
        let lines = format_article(&article);
        assert_eq!(lines.last().unwrap(), "line two");
        assert!(lines.contains(&String::new())); // blank separator
    }
}
