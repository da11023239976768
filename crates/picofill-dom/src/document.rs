//! Document - High-level document API

use crate::{DomTree, NodeId};

/// A document: a tree plus the cached skeleton elements
pub struct Document {
    tree: DomTree,
    url: String,
    html_element: NodeId,
    body_element: NodeId,
}

impl Document {
    /// Create a new document with the html/body skeleton in place
    pub fn new(url: &str) -> Self {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let body = tree.create_element("body");
        tree.append_child(tree.root(), html).expect("fresh tree");
        tree.append_child(html, body).expect("fresh tree");

        Self {
            tree,
            url: url.to_string(),
            html_element: html,
            body_element: body,
        }
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the `html` element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get the `body` element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}
