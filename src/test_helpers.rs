//! Shared test utilities for the simple-press test suite.
//!
//! Provides fixture setup and lookup helpers for catalog-level data.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let store = ContentStore::new(tmp.path());
//! let catalog = build_catalog(&store, Scope::All).unwrap();
//!
//! let entry = find_entry(&catalog, "signal-in-the-noise");
//! assert_eq!(entry.read_time, "1 min read");
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::article::ArticleMetadata;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/posts/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures. The fixture tree covers all three sections and
/// deliberately includes a slug duplicated across science and life
/// (`echoes`) plus a reserved `template.md`.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/posts");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Write a minimal article under `<root>/<section>/<slug>.md`, creating the
/// section directory as needed. For tests that build ad-hoc trees.
pub fn write_article(root: &Path, section: &str, slug: &str, date: &str, body: &str) {
    let dir = root.join(section);
    std::fs::create_dir_all(&dir).unwrap();
    let contents = format!("---\ntitle: {slug}\ndate: \"{date}\"\n---\n{body}\n");
    std::fs::write(dir.join(format!("{slug}.md")), contents).unwrap();
}

// =========================================================================
// Catalog lookups — panics with a clear message on miss
// =========================================================================

/// Find a catalog entry by slug. Panics if not found.
pub fn find_entry<'a>(catalog: &'a [ArticleMetadata], slug: &str) -> &'a ArticleMetadata {
    catalog
        .iter()
        .find(|e| e.slug == slug)
        .unwrap_or_else(|| {
            let slugs: Vec<&str> = catalog.iter().map(|e| e.slug.as_str()).collect();
            panic!("entry '{slug}' not found. Available: {slugs:?}")
        })
}

/// All slugs in catalog order.
pub fn entry_slugs(catalog: &[ArticleMetadata]) -> Vec<&str> {
    catalog.iter().map(|e| e.slug.as_str()).collect()
}
