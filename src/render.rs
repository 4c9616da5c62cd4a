//! Markdown → HTML conversion for article bodies.
//!
//! Produces a bare HTML fragment for the page layer to embed, with no
//! document shell or styling. Conversion is context-free and pure: the output
//! depends only on the body string, so independent articles can be
//! converted concurrently without coordination (the `check` command does
//! exactly that).
//!
//! ## Trust boundary
//!
//! Raw HTML embedded in a source body passes through **unescaped**. Authors
//! are trusted; the content root is never user-submitted. Escaping here
//! would break deliberate inline markup (`<figure>`, `<aside>`, embeds)
//! that the corpus relies on.

use pulldown_cmark::{Options, Parser, html};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("markup conversion failed: {0}")]
    Write(#[from] std::fmt::Error),
}

/// Extensions beyond CommonMark that article bodies may use.
fn markdown_options() -> Options {
    let mut options = Options::empty();
    options.insert(
        Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS,
    );
    options
}

/// Convert a Markdown body to an HTML fragment.
///
/// Fails only if writing the output fails; there is no partial output. A
/// conversion either completes or the error propagates to the caller.
pub fn convert_body(body: &str) -> Result<String, RenderError> {
    let parser = Parser::new_ext(body, markdown_options());
    let mut out = String::with_capacity(body.len() * 3 / 2);
    html::write_html_fmt(&mut out, parser)?;
    Ok(out)
}
