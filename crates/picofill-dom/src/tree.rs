//! DOM Tree (arena-based allocation)
//!
//! Core node manipulation: append, remove, replace, subtree traversal.

use crate::{DomError, DomResult, Node, NodeId};

/// Arena-based DOM tree
///
/// Slot 0 is always the document node. Detached nodes stay in the arena
/// until the tree is dropped; their ids remain valid but unreachable.
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
        }
    }

    /// The document node
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize)
    }

    /// Number of nodes in the arena (including detached ones)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element node
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.alloc(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.alloc(Node::text(content.to_string()))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, content: &str) -> NodeId {
        self.alloc(Node::comment(content.to_string()))
    }

    // === Structure ===

    /// Append `child` as the last child of `parent`
    ///
    /// A child that is already attached elsewhere is detached first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.check_insertion(parent, child)?;
        self.detach(child)?;

        let last = self.get(parent).ok_or(DomError::NotFound)?.last_child;
        if last.is_valid() {
            self.node_mut(last)?.next_sibling = child;
            let node = self.node_mut(child)?;
            node.prev_sibling = last;
            node.parent = parent;
        } else {
            self.node_mut(child)?.parent = parent;
            self.node_mut(parent)?.first_child = child;
        }
        self.node_mut(parent)?.last_child = child;
        Ok(child)
    }

    /// Remove `child` from `parent`, leaving it detached in the arena
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        if self.get(parent).is_none() {
            return Err(DomError::NotFound);
        }
        if self.get(child).ok_or(DomError::NotFound)?.parent != parent {
            return Err(DomError::NotAChild);
        }
        self.detach(child)?;
        Ok(child)
    }

    /// Replace `old_child` with `new_child` at the same position
    pub fn replace_child(
        &mut self,
        parent: NodeId,
        new_child: NodeId,
        old_child: NodeId,
    ) -> DomResult<NodeId> {
        if self.get(old_child).ok_or(DomError::NotFound)?.parent != parent {
            return Err(DomError::NotAChild);
        }
        if new_child == old_child {
            return Ok(old_child);
        }
        self.check_insertion(parent, new_child)?;
        self.detach(new_child)?;

        let (prev, next) = {
            let old = self.get(old_child).ok_or(DomError::NotFound)?;
            (old.prev_sibling, old.next_sibling)
        };
        {
            let node = self.node_mut(new_child)?;
            node.parent = parent;
            node.prev_sibling = prev;
            node.next_sibling = next;
        }
        if prev.is_valid() {
            self.node_mut(prev)?.next_sibling = new_child;
        } else {
            self.node_mut(parent)?.first_child = new_child;
        }
        if next.is_valid() {
            self.node_mut(next)?.prev_sibling = new_child;
        } else {
            self.node_mut(parent)?.last_child = new_child;
        }
        {
            let old = self.node_mut(old_child)?;
            old.parent = NodeId::NONE;
            old.prev_sibling = NodeId::NONE;
            old.next_sibling = NodeId::NONE;
        }
        Ok(old_child)
    }

    /// Unlink a node from its parent and siblings
    fn detach(&mut self, id: NodeId) -> DomResult<()> {
        let (parent, prev, next) = {
            let node = self.get(id).ok_or(DomError::NotFound)?;
            (node.parent, node.prev_sibling, node.next_sibling)
        };
        if !parent.is_valid() {
            return Ok(());
        }
        if prev.is_valid() {
            self.node_mut(prev)?.next_sibling = next;
        } else {
            self.node_mut(parent)?.first_child = next;
        }
        if next.is_valid() {
            self.node_mut(next)?.prev_sibling = prev;
        } else {
            self.node_mut(parent)?.last_child = prev;
        }
        let node = self.node_mut(id)?;
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
        Ok(())
    }

    fn check_insertion(&self, parent: NodeId, child: NodeId) -> DomResult<()> {
        if self.get(parent).is_none() || self.get(child).is_none() {
            return Err(DomError::NotFound);
        }
        // Inserting a node into itself or one of its descendants would
        // disconnect the subtree from the tree.
        let mut cursor = parent;
        while cursor.is_valid() {
            if cursor == child {
                return Err(DomError::HierarchyRequest);
            }
            cursor = self.get(cursor).map_or(NodeId::NONE, |n| n.parent);
        }
        Ok(())
    }

    fn node_mut(&mut self, id: NodeId) -> DomResult<&mut Node> {
        self.get_mut(id).ok_or(DomError::NotFound)
    }

    // === Traversal ===

    /// Parent of a node, if attached
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.get(id)?.parent;
        parent.is_valid().then_some(parent)
    }

    /// Iterate the direct children of a node
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(id).map_or(NodeId::NONE, |n| n.first_child),
        }
    }

    /// Iterate every node below `root` in document (preorder) order
    pub fn descendants(&self, root: NodeId) -> Descendants<'_> {
        let mut stack = Vec::new();
        if let Some(node) = self.get(root) {
            if node.first_child.is_valid() {
                stack.push(node.first_child);
            }
        }
        Descendants { tree: self, stack }
    }

    /// Element descendants of `root` with the given tag, in document order
    pub fn elements_by_tag(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
        self.descendants(root)
            .filter(|(_, node)| node.as_element().is_some_and(|e| e.tag == tag))
            .map(|(id, _)| id)
            .collect()
    }

    // === Attributes ===

    /// Tag name of an element node
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.get(id)?.as_element().map(|e| e.tag.as_str())
    }

    /// Attribute value of an element node
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id)?.as_element()?.attr(name)
    }

    /// Set an attribute on an element node
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        self.node_mut(id)?
            .as_element_mut()
            .ok_or(DomError::InvalidNodeType)?
            .set_attr(name, value);
        Ok(())
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over direct children
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.next.is_valid() {
            return None;
        }
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

/// Preorder iterator over a subtree, excluding the subtree root itself
pub struct Descendants<'a> {
    tree: &'a DomTree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.get(id)?;
        // Sibling first so the child is popped before it.
        if node.next_sibling.is_valid() {
            self.stack.push(node.next_sibling);
        }
        if node.first_child.is_valid() {
            self.stack.push(node.first_child);
        }
        Some((id, node))
    }
}
