//! Picofill DOM - Arena document tree
//!
//! The document tree the resolution engine operates on. Nodes live in a
//! flat arena and reference each other by `NodeId`, so traversal and
//! mutation never invalidate handles held by callers.

mod document;
mod node;
mod tree;

pub use document::Document;
pub use node::{Attribute, ElementData, Node, NodeData, TextData};
pub use tree::{Children, Descendants, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this id refers to an actual slot
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }
}

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomError {
    /// Node not found
    NotFound,
    /// Hierarchy error (e.g., inserting ancestor)
    HierarchyRequest,
    /// Invalid node type
    InvalidNodeType,
    /// Node is not a child
    NotAChild,
}

impl std::fmt::Display for DomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Node not found"),
            Self::HierarchyRequest => write!(f, "Hierarchy request error"),
            Self::InvalidNodeType => write!(f, "Invalid node type"),
            Self::NotAChild => write!(f, "Node is not a child"),
        }
    }
}

impl std::error::Error for DomError {}
