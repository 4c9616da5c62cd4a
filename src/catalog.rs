//! Catalog building: aggregate listings across sections.
//!
//! A catalog is computed fresh on every call: a pure projection of the
//! directory state with no cache in between, so listings always reflect the
//! current sources.
//!
//! ## Ordering
//!
//! Entries sort by publish date descending, comparing the date *strings*
//! lexicographically. Uniform ISO-8601 dates sort chronologically under this
//! comparison; that equivalence is a documented assumption of the corpus,
//! not generic date handling. Mixed formats degrade silently and on
//! purpose. Equal dates keep discovery order (per-section name order, then
//! section priority order), which a stable sort preserves across calls.
//!
//! ## Failure policy
//!
//! Listing fails loud: any unreadable source aborts the build, because a
//! partial listing silently hides content. Contrast with
//! [`crate::resolve`], which swallows per-section failures while hunting
//! for a single article.

use crate::article::{Article, ArticleMetadata, Scope, Section};
use crate::store::{self, ContentStore};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the ordered catalog for a scope.
///
/// Concrete section: that section's articles only. [`Scope::All`]: every
/// section in priority order, concatenated, then sorted once. A missing
/// section directory contributes zero entries.
pub fn build_catalog(
    store: &ContentStore,
    scope: Scope,
) -> Result<Vec<ArticleMetadata>, CatalogError> {
    let mut entries = Vec::new();
    match scope {
        Scope::Section(section) => collect_section(store, section, &mut entries)?,
        Scope::All => {
            for section in Section::ALL {
                collect_section(store, section, &mut entries)?;
            }
        }
    }

    // Stable sort: equal dates keep discovery order.
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(entries)
}

fn collect_section(
    store: &ContentStore,
    section: Section,
    entries: &mut Vec<ArticleMetadata>,
) -> Result<(), CatalogError> {
    for file_name in store.source_files(section)? {
        let slug = store::slug_from_file_name(&file_name);
        let raw = store.read_source(section, &slug)?;
        entries.push(Article::from_source(&raw, slug, section).into_metadata());
    }
    Ok(())
}

/// Every slug across every section, in section priority order.
///
/// Unsorted and unfiltered for duplicates: this is the static-route
/// enumeration surface, and a slug shared by two sections appears twice.
pub fn list_slugs(store: &ContentStore) -> Result<Vec<String>, CatalogError> {
    let mut slugs = Vec::new();
    for section in Section::ALL {
        for file_name in store.source_files(section)? {
            slugs.push(store::slug_from_file_name(&file_name));
        }
    }
    Ok(slugs)
}
