//! Slug resolution: locate one article, optionally scoped to a section.
//!
//! Unscoped resolution walks [`Section::ALL`] in priority order and returns
//! the first section that produces the article. Slugs are only unique within
//! a section, so the priority order is the tiebreak when two sections carry
//! the same slug: science beats life beats poetry.
//!
//! ## Fallback, not error suppression
//!
//! Each step of the chain treats any failure (no such file, unreadable
//! file) as "this section does not have it" and moves on. One corrupt file
//! in one section must not block resolution of a same-named article in the
//! next. Only exhausting every applicable section yields `None`, which is
//! the caller's distinct not-found signal (render a 404, not an error page).
//! The fail-loud counterpart for aggregate listings lives in
//! [`crate::catalog`].

use crate::article::{Article, Section};
use crate::store::ContentStore;

/// Resolve a slug to a full article.
///
/// `scope` limits the search to one section; `None` searches all sections
/// in priority order and returns the first match. `None` as a result means
/// no applicable section has a readable article with this slug.
pub fn resolve_article(
    store: &ContentStore,
    slug: &str,
    scope: Option<Section>,
) -> Option<Article> {
    let sections = match scope {
        Some(section) => vec![section],
        None => Section::ALL.to_vec(),
    };

    for section in sections {
        // Read failure of any kind degrades to "try the next section".
        if let Ok(raw) = store.read_source(section, slug) {
            return Some(Article::from_source(&raw, slug, section));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn resolves_scoped_article() {
        let tmp = setup_fixtures();
        let store = ContentStore::new(tmp.path());

        let article = resolve_article(&store, "small-rituals", Some(Section::Life)).unwrap();
        assert_eq!(article.meta.section, Section::Life);
        assert!(!article.body.is_empty());
    }

    #[test]
    fn scoped_lookup_ignores_other_sections() {
        let tmp = setup_fixtures();
        let store = ContentStore::new(tmp.path());

        // signal-in-the-noise lives in science only
        assert!(resolve_article(&store, "signal-in-the-noise", Some(Section::Poetry)).is_none());
    }

    #[test]
    fn unscoped_duplicate_slug_resolves_to_priority_section() {
        let tmp = setup_fixtures();
        let store = ContentStore::new(tmp.path());

        // fixtures carry echoes.md in both science and life
        let article = resolve_article(&store, "echoes", None).unwrap();
        assert_eq!(article.meta.section, Section::Science);

        let scoped = resolve_article(&store, "echoes", Some(Section::Life)).unwrap();
        assert_eq!(scoped.meta.section, Section::Life);
    }

    #[test]
    fn unknown_slug_is_none_not_error() {
        let tmp = setup_fixtures();
        let store = ContentStore::new(tmp.path());
        assert!(resolve_article(&store, "no-such-article", None).is_none());
    }

    #[test]
    fn unreadable_source_in_one_section_falls_through_to_next() {
        let tmp = TempDir::new().unwrap();
        // science/dup.md is a directory: exists, cannot be read as a file
        fs::create_dir_all(tmp.path().join("science/dup.md")).unwrap();
        write_article(tmp.path(), "life", "dup", "2024-05-05", "life wins");
        let store = ContentStore::new(tmp.path());

        let article = resolve_article(&store, "dup", None).unwrap();
        assert_eq!(article.meta.section, Section::Life);
    }

    #[test]
    fn unreadable_source_everywhere_is_none() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("science/dup.md")).unwrap();
        let store = ContentStore::new(tmp.path());
        assert!(resolve_article(&store, "dup", None).is_none());
    }

    #[test]
    fn resolved_article_keeps_raw_body() {
        let tmp = TempDir::new().unwrap();
        write_article(tmp.path(), "poetry", "verse", "2024-02-14", "*lines* unrendered");
        let store = ContentStore::new(tmp.path());

        let article = resolve_article(&store, "verse", None).unwrap();
        // Body is pre-conversion Markdown
        assert!(article.body.contains("*lines*"));
    }
}
