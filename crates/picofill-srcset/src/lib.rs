//! Picofill Srcset
//!
//! Parsing of density-annotated source lists (`"a.gif, b.gif 2x"`) and
//! selection of the best candidate for a display density.

mod parse;
mod resolve;

pub use parse::parse;
pub use resolve::resolve;

/// One parsed source candidate: a URL tagged with the display density it
/// is intended for.
#[derive(Debug, Clone, PartialEq)]
pub struct SrcCandidate {
    /// Intended display density (1.0 for standard displays)
    pub density: f64,
    /// Image URL, kept opaque
    pub url: String,
}

/// Selection was asked to pick from an empty candidate list. The caller
/// falls back to a fixed or default source instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no srcset candidates to select from")]
pub struct NoCandidateError;
