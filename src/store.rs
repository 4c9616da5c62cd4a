//! Source file discovery and reads.
//!
//! The content root holds one subdirectory per section:
//!
//! ```text
//! content/posts/                   # Content root
//! ├── science/
//! │   ├── signal-in-the-noise.md
//! │   └── template.md              # Reserved skeleton, never discovered
//! ├── life/
//! │   └── small-rituals.md
//! └── poetry/                      # Absent subdirectories are fine too
//! ```
//!
//! The store is a read-only view: it never writes, never caches, and every
//! call reflects the directory state at that moment. A missing section
//! directory is a valid, empty section, not an error.
//!
//! Discovery filters on file *names* only (`.md` extension, minus the
//! reserved `template.md`), without stat calls. An entry that matches by
//! name but cannot be read surfaces as a read error downstream, where the
//! caller decides between failing loud (catalog) and falling through
//! (resolution).

use crate::article::Section;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File extension for article sources.
pub const SOURCE_EXTENSION: &str = "md";

/// Reserved skeleton file, excluded from every discovery operation.
pub const TEMPLATE_FILE: &str = "template.md";

/// Read-only handle on the content root.
///
/// The root is threaded in explicitly: from [`crate::config::SiteConfig`]
/// in the CLI, or a fixture tree in tests. No process-wide path state.
#[derive(Debug, Clone)]
pub struct ContentStore {
    root: PathBuf,
}

impl ContentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding a section's sources.
    pub fn section_dir(&self, section: Section) -> PathBuf {
        self.root.join(section.as_str())
    }

    /// Full path of one article source.
    pub fn source_path(&self, section: Section, slug: &str) -> PathBuf {
        self.section_dir(section)
            .join(format!("{slug}.{SOURCE_EXTENSION}"))
    }

    /// Candidate source file names under a section, sorted by name.
    ///
    /// A missing section directory yields `Ok(vec![])`; any other IO failure
    /// propagates. The sort makes discovery order deterministic, which is
    /// what keeps equal-date catalog ordering stable across calls.
    pub fn source_files(&self, section: Section) -> io::Result<Vec<String>> {
        let dir = self.section_dir(section);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|name| is_source_name(name))
            .collect();

        names.sort();
        Ok(names)
    }

    /// Read one article source in full.
    pub fn read_source(&self, section: Section, slug: &str) -> io::Result<String> {
        fs::read_to_string(self.source_path(section, slug))
    }
}

/// Name-level filter for discovery: `.md` files except the reserved template.
///
/// The extension match is exact, not case-folded: reads reconstruct the path
/// as `<slug>.md`, so a file only counts as a source if that is its name.
fn is_source_name(name: &str) -> bool {
    if name == TEMPLATE_FILE {
        return false;
    }
    Path::new(name)
        .extension()
        .map(|ext| ext == SOURCE_EXTENSION)
        .unwrap_or(false)
}

/// Strip the source extension from a file name, yielding the slug.
pub fn slug_from_file_name(name: &str) -> String {
    Path::new(name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_string())
}
