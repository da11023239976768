//! Picofill Media
//!
//! Media-condition matching. The engine never implements the media-query
//! grammar itself: conditions are opaque strings handed to a host-provided
//! [`MediaEvaluator`]. A host without one gets the legacy single-source
//! behavior upstream.

mod viewport;

pub use viewport::ViewportMedia;

/// Host capability for evaluating a media condition string.
pub trait MediaEvaluator {
    /// Does the condition currently match?
    fn matches(&self, query: &str) -> bool;
}

/// Wraps the host's condition evaluator, if it has one.
pub struct MediaMatcher {
    evaluator: Option<Box<dyn MediaEvaluator>>,
}

impl MediaMatcher {
    pub fn new(evaluator: Option<Box<dyn MediaEvaluator>>) -> Self {
        Self { evaluator }
    }

    /// Whether the host can evaluate media conditions at all.
    ///
    /// Probed once at engine construction; a `false` here sends the
    /// whole engine down the legacy default-source path instead of
    /// being consulted per group.
    pub fn supported(&self) -> bool {
        self.evaluator.is_some()
    }

    /// Does this condition currently match?
    ///
    /// An absent condition is the unconditional group and always
    /// matches. A conditioned group on a host without an evaluator
    /// never matches.
    pub fn matches(&self, query: Option<&str>) -> bool {
        match (query, &self.evaluator) {
            (None, _) => true,
            (Some(q), Some(evaluator)) => evaluator.matches(q),
            (Some(_), None) => false,
        }
    }
}
