//! Parsed-source cache
//!
//! Placeholder identity is a side table from node id to a monotonically
//! assigned token, and parsed groups are stored per token. Nothing is
//! ever written back into the host tree. Entries for nodes that leave
//! the document linger until `reset`; that staleness is bounded by the
//! owning engine's lifetime.

use std::collections::HashMap;

use picofill_dom::{DomTree, NodeId};

use crate::sources::{SourceGroup, collect_groups};

/// Stable identity token for a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheToken(u32);

/// Memoizes the parsed source groups of every placeholder seen so far.
#[derive(Debug, Default)]
pub struct SourceCache {
    tokens: HashMap<NodeId, CacheToken>,
    entries: HashMap<CacheToken, Vec<SourceGroup>>,
    next_token: u32,
}

impl SourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached groups for `picture`, parsing (and storing) on a miss.
    ///
    /// With `read_from_cache` false the placeholder is re-parsed and the
    /// stored entry overwritten in place, under the same token.
    pub fn get_or_parse(
        &mut self,
        tree: &DomTree,
        picture: NodeId,
        read_from_cache: bool,
    ) -> &[SourceGroup] {
        let token = self.token_for(picture);
        if !read_from_cache || !self.entries.contains_key(&token) {
            self.entries.insert(token, collect_groups(tree, picture));
        }
        &self.entries[&token]
    }

    /// The token assigned to a node, if it has been seen.
    pub fn token_of(&self, picture: NodeId) -> Option<CacheToken> {
        self.tokens.get(&picture).copied()
    }

    /// Drop one entry; the next pass re-parses that placeholder.
    pub fn invalidate(&mut self, token: CacheToken) {
        self.entries.remove(&token);
    }

    /// Drop everything and restart token assignment.
    pub fn reset(&mut self) {
        self.tokens.clear();
        self.entries.clear();
        self.next_token = 0;
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn token_for(&mut self, picture: NodeId) -> CacheToken {
        *self.tokens.entry(picture).or_insert_with(|| {
            let token = CacheToken(self.next_token);
            self.next_token += 1;
            token
        })
    }
}
