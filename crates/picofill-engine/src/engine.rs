//! Picture resolution engine
//!
//! Walks placeholders, narrows each one to the applicable source group,
//! picks the density tier, and materializes the result. One instance
//! owns its cache and capability flags; independent instances never
//! share state.

use std::time::{Duration, Instant};

use picofill_dom::{Document, DomResult, DomTree, NodeId};
use picofill_media::{MediaEvaluator, MediaMatcher};

use crate::cache::{CacheToken, SourceCache};
use crate::capabilities::HostCapabilities;
use crate::materialize::{ImageMaterializer, ResolvedImage};
use crate::schedule::ResizeDebouncer;

/// The responsive-image engine.
///
/// Placeholders are `picture` elements carrying `data-default-src` and
/// `data-alt`, with `source` children declaring `media`, `srcset`, and
/// `src` attributes.
pub struct Picofill {
    caps: HostCapabilities,
    matcher: MediaMatcher,
    pixel_ratio: f64,
    cache: SourceCache,
    materializer: ImageMaterializer,
    debouncer: ResizeDebouncer,
    listeners_active: bool,
}

impl Picofill {
    /// Build an engine for a host with the given capabilities.
    ///
    /// `evaluator` is the host's media-condition oracle; passing `None`
    /// (or capabilities without media-query support) selects the legacy
    /// default-source behavior. A non-positive `pixel_ratio` falls back
    /// to 1.
    pub fn new(
        caps: HostCapabilities,
        evaluator: Option<Box<dyn MediaEvaluator>>,
        pixel_ratio: f64,
    ) -> Self {
        let evaluator = if caps.media_queries { evaluator } else { None };
        Self {
            matcher: MediaMatcher::new(evaluator),
            materializer: ImageMaterializer::new(caps.inline_append),
            pixel_ratio: normalize_ratio(pixel_ratio),
            cache: SourceCache::new(),
            debouncer: ResizeDebouncer::default(),
            listeners_active: false,
            caps,
        }
    }

    /// Override the debounce quiet period (default 100ms).
    pub fn with_quiet_period(mut self, quiet: Duration) -> Self {
        self.debouncer = ResizeDebouncer::new(quiet);
        self
    }

    /// Reset cached state and register the ready/resize triggers.
    ///
    /// Safe to call repeatedly: the cache is cleared each time, the
    /// listeners are registered exactly once.
    pub fn initialize(&mut self) {
        self.cache.reset();
        self.debouncer.cancel();
        if !self.listeners_active {
            self.listeners_active = true;
            tracing::debug!("ready/resize listeners registered");
        }
    }

    /// Whether the ready/resize triggers have been registered.
    pub fn listeners_active(&self) -> bool {
        self.listeners_active
    }

    /// Display density currently used for tier selection.
    pub fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    /// Update the display density (zoom, window moved across displays).
    /// Takes effect on the next pass.
    pub fn set_pixel_ratio(&mut self, pixel_ratio: f64) {
        self.pixel_ratio = normalize_ratio(pixel_ratio);
    }

    /// The token identifying a placeholder in the cache, if it has been
    /// resolved before. Feed it to [`invalidate`](Self::invalidate) to
    /// force a re-parse on the next pass.
    pub fn cache_token(&self, picture: NodeId) -> Option<CacheToken> {
        self.cache.token_of(picture)
    }

    /// Drop one placeholder's cached source groups.
    pub fn invalidate(&mut self, token: CacheToken) {
        self.cache.invalidate(token);
    }

    /// Ready signal: resolve the whole document once.
    pub fn document_ready(&mut self, doc: &mut Document) -> usize {
        tracing::debug!("document ready, resolving all placeholders");
        self.resolve(doc, None, true)
    }

    /// Resize signal: (re)arm the debounce deadline.
    pub fn viewport_resized(&mut self, now: Instant) {
        if self.caps.native_picture {
            return;
        }
        self.debouncer.note_resize(now);
    }

    /// Run the debounced whole-document pass if its quiet period has
    /// elapsed. Returns the processed count when a pass ran.
    pub fn poll(&mut self, doc: &mut Document, now: Instant) -> Option<usize> {
        if self.debouncer.fire_due(now) {
            Some(self.resolve(doc, None, true))
        } else {
            None
        }
    }

    /// Resolve every placeholder under `subtree` (whole document when
    /// `None`), returning how many were enumerated.
    ///
    /// A pass never fails as a whole: a placeholder the tree rejects
    /// edits for is logged and skipped.
    pub fn resolve(
        &mut self,
        doc: &mut Document,
        subtree: Option<NodeId>,
        read_from_cache: bool,
    ) -> usize {
        if self.caps.native_picture {
            return 0;
        }

        let root = subtree.unwrap_or(doc.tree().root());
        let pictures = doc.tree().elements_by_tag(root, "picture");

        for &picture in &pictures {
            if let Err(error) = self.resolve_one(doc.tree_mut(), picture, read_from_cache) {
                tracing::warn!("skipping placeholder {:?}: {}", picture, error);
            }
        }

        tracing::debug!("resolved {} placeholder(s)", pictures.len());
        pictures.len()
    }

    fn resolve_one(
        &mut self,
        tree: &mut DomTree,
        picture: NodeId,
        read_from_cache: bool,
    ) -> DomResult<()> {
        let alt = tree.attr(picture, "data-alt").unwrap_or_default().to_string();
        let src = self.pick_source(tree, picture, read_from_cache);
        self.materializer
            .upsert(tree, picture, &ResolvedImage { src, alt })
    }

    /// The winning source for one placeholder, if any.
    fn pick_source(
        &mut self,
        tree: &DomTree,
        picture: NodeId,
        read_from_cache: bool,
    ) -> Option<String> {
        let default_src = tree.attr(picture, "data-default-src").map(str::to_string);

        // Legacy hosts skip group logic (and cache traffic) entirely.
        if !self.matcher.supported() {
            return default_src;
        }

        let groups = self.cache.get_or_parse(tree, picture, read_from_cache);
        let mut winner = None;
        for group in groups {
            if !self.matcher.matches(group.media.as_deref()) {
                continue;
            }
            // Later matching groups override earlier ones; a matching
            // group with nothing to offer leaves the winner standing.
            if let Some(url) = group.select(self.pixel_ratio) {
                winner = Some(url.to_string());
            }
        }
        winner.or(default_src)
    }
}

fn normalize_ratio(pixel_ratio: f64) -> f64 {
    if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
        pixel_ratio
    } else {
        1.0
    }
}
