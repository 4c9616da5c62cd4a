//! Article data model, front-matter parsing, and derived fields.
//!
//! A source file is a Markdown document with an optional YAML front-matter
//! block fenced by `---` lines:
//!
//! ```text
//! ---
//! title: The Signal in the Noise
//! date: "2024-06-01T09:00:00.000Z"
//! excerpt: What measurement error teaches about attention.
//! author: M. Okafor
//! coverImage: /images/signal.jpg
//! tags: [perception, noise]
//! ---
//!
//! Body in **Markdown** follows.
//! ```
//!
//! Every field is optional. Missing fields take documented defaults; a file
//! with no front matter at all is entirely body. Parsing is total: a
//! malformed block (unclosed fence, invalid YAML) also degrades to defaults
//! with the full file contents as body, never an error.
//!
//! ## Derived fields
//!
//! - `read_time`: `ceil(words / 200)` minutes, where words is the count of
//!   whitespace-delimited tokens in the body. An empty or whitespace-only
//!   body counts zero words and reads "0 min read".
//! - `section`: attached from the directory the file was discovered under.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Reading speed assumed by the `read_time` estimate, in words per minute.
const WORDS_PER_MINUTE: usize = 200;

/// A content section. Each section is a subdirectory under the content root.
///
/// The set is closed: articles live in exactly one of these three sections.
/// The query-only "all" scope is [`Scope::All`], never a storage location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Science,
    Life,
    Poetry,
}

impl Section {
    /// All sections in canonical priority order: science, life, poetry.
    ///
    /// This order is load-bearing twice over: it is the enumeration order for
    /// "all"-scoped listings before sorting, and the search order for
    /// unscoped slug resolution. When two sections contain the same slug,
    /// the earlier section wins.
    pub const ALL: [Section; 3] = [Section::Science, Section::Life, Section::Poetry];

    /// Directory name under the content root, also the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Science => "science",
            Section::Life => "life",
            Section::Poetry => "poetry",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section '{0}' (expected science, life, or poetry)")]
pub struct ParseSectionError(String);

impl FromStr for Section {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "science" => Ok(Section::Science),
            "life" => Ok(Section::Life),
            "poetry" => Ok(Section::Poetry),
            other => Err(ParseSectionError(other.to_string())),
        }
    }
}

/// A catalog query scope: one concrete section, or all of them.
///
/// `All` exists only as a query parameter. Nothing is ever stored under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    All,
    Section(Section),
}

impl From<Option<Section>> for Scope {
    fn from(section: Option<Section>) -> Self {
        section.map_or(Scope::All, Scope::Section)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::All => f.write_str("all"),
            Scope::Section(s) => s.fmt(f),
        }
    }
}

/// Resolved front matter: every field populated, defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontMatter {
    pub title: String,
    pub date: String,
    pub excerpt: String,
    pub author: String,
    pub cover_image: Option<String>,
    pub tags: Vec<String>,
}

impl Default for FrontMatter {
    fn default() -> Self {
        RawFrontMatter::default().resolve()
    }
}

/// Front matter as authors actually write it: sparse, camelCase keys,
/// unknown keys tolerated. Resolved into [`FrontMatter`] with defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawFrontMatter {
    title: Option<String>,
    date: Option<String>,
    excerpt: Option<String>,
    author: Option<String>,
    #[serde(rename = "coverImage")]
    cover_image: Option<String>,
    tags: Option<Vec<String>>,
}

impl RawFrontMatter {
    fn resolve(self) -> FrontMatter {
        FrontMatter {
            title: or_default(self.title, "Untitled"),
            date: self
                .date
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(now_iso8601),
            excerpt: self.excerpt.unwrap_or_default(),
            author: or_default(self.author, "Anonymous"),
            cover_image: self.cover_image.filter(|c| !c.trim().is_empty()),
            tags: self.tags.unwrap_or_default(),
        }
    }
}

/// First non-empty value wins: the author's entry if present and non-blank,
/// the documented default otherwise.
fn or_default(value: Option<String>, default: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Current time as an ISO-8601 string, the default for a missing `date`.
/// Matches the rest of the corpus's date format so lexicographic ordering
/// keeps working (see [`crate::catalog`]).
fn now_iso8601() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// Split raw file contents into resolved front matter and body.
///
/// Total: never fails. Missing or malformed front matter yields all defaults
/// and the entire contents as body.
pub fn split_front_matter(raw: &str) -> (FrontMatter, String) {
    if let Some((block, body)) = extract_block(raw)
        && let Some(front) = parse_block(block)
    {
        return (front, body.to_string());
    }
    (FrontMatter::default(), raw.to_string())
}

/// Extract the fenced metadata block, if the file opens with one.
///
/// The opening fence must be the very first line; the closing fence is the
/// next line consisting solely of `---`. Returns (block, body-after-fence).
fn extract_block(raw: &str) -> Option<(&str, &str)> {
    let rest = raw
        .strip_prefix("---\r\n")
        .or_else(|| raw.strip_prefix("---\n"))?;

    let mut pos = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\n', '\r']) == "---" {
            return Some((&rest[..pos], &rest[pos + line.len()..]));
        }
        pos += line.len();
    }
    None
}

fn parse_block(block: &str) -> Option<FrontMatter> {
    if block.trim().is_empty() {
        // An empty block is well-formed; YAML would call it null.
        return Some(FrontMatter::default());
    }
    serde_yaml::from_str::<RawFrontMatter>(block)
        .ok()
        .map(RawFrontMatter::resolve)
}

/// Count whitespace-delimited words in a body.
///
/// Empty and whitespace-only bodies count zero words; `split_whitespace`
/// yields no tokens for such input, where a naive single-separator split
/// would yield one empty token.
pub fn word_count(body: &str) -> usize {
    body.split_whitespace().count()
}

/// Reading-time label for a word count: `"<N> min read"` at 200 words/min,
/// rounded up. Zero words reads "0 min read".
pub fn read_time_label(words: usize) -> String {
    format!("{} min read", words.div_ceil(WORDS_PER_MINUTE))
}

/// Listing-level view of an article: everything but the body.
///
/// This is the unit returned by catalog operations and serialized for
/// `list --json` output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleMetadata {
    pub slug: String,
    pub title: String,
    /// Publish date as written by the author (ISO-8601 by convention).
    pub date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub excerpt: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Derived: `"<N> min read"`.
    pub read_time: String,
    pub section: Section,
}

/// A fully resolved article: metadata plus the raw Markdown body.
///
/// The body is post-front-matter, pre-conversion. Feed it to
/// [`crate::render::convert_body`] for HTML.
#[derive(Debug, Clone, Serialize)]
pub struct Article {
    #[serde(flatten)]
    pub meta: ArticleMetadata,
    pub body: String,
}

impl Article {
    /// Assemble an article from raw file contents. Pure: parsing, defaults,
    /// and derivation only; discovery and reads live in [`crate::store`].
    pub fn from_source(raw: &str, slug: impl Into<String>, section: Section) -> Article {
        let (front, body) = split_front_matter(raw);
        let read_time = read_time_label(word_count(&body));
        Article {
            meta: ArticleMetadata {
                slug: slug.into(),
                title: front.title,
                date: front.date,
                excerpt: front.excerpt,
                author: front.author,
                cover_image: front.cover_image,
                tags: front.tags,
                read_time,
                section,
            },
            body,
        }
    }

    /// Discard the body, keeping the listing-level view.
    pub fn into_metadata(self) -> ArticleMetadata {
        self.meta
    }
}
