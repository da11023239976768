//! Source groups
//!
//! One `source` declaration within a placeholder: an optional media
//! condition gating either a density-annotated candidate list or a
//! single fixed source.

use picofill_dom::{DomTree, NodeId};
use picofill_srcset::{self as srcset, SrcCandidate};

/// One conditional source declaration within a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceGroup {
    /// Media condition gating this group; absent means unconditional
    pub media: Option<String>,
    /// Density-annotated candidates, ascending, densities unique
    pub candidates: Vec<SrcCandidate>,
    /// Single fixed source, consulted only when `candidates` is empty
    pub fixed: Option<String>,
}

impl SourceGroup {
    /// The source this group offers at the given display density, if any.
    ///
    /// A non-empty candidate list takes precedence over the fixed source;
    /// the fixed source is the fallback for groups declared without a
    /// density descriptor.
    pub fn select(&self, pixel_ratio: f64) -> Option<&str> {
        match srcset::resolve(&self.candidates, pixel_ratio) {
            Ok(url) => Some(url),
            Err(_) => self.fixed.as_deref(),
        }
    }
}

/// Collect the `source` declarations under a placeholder, in document order.
pub(crate) fn collect_groups(tree: &DomTree, picture: NodeId) -> Vec<SourceGroup> {
    tree.elements_by_tag(picture, "source")
        .into_iter()
        .map(|source| SourceGroup {
            media: tree.attr(source, "media").map(str::to_string),
            candidates: tree
                .attr(source, "srcset")
                .map(srcset::parse)
                .unwrap_or_default(),
            fixed: tree.attr(source, "src").map(str::to_string),
        })
        .collect()
}
