//! Host capability flags

/// What the host environment supports, probed once and immutable after.
///
/// Every component reads these as configuration; nothing re-detects at
/// resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// Host renders `picture` natively. The engine becomes a no-op.
    pub native_picture: bool,
    /// Host can evaluate media conditions. Without this every
    /// placeholder resolves to its default source.
    pub media_queries: bool,
    /// Host allows appending the image inside the placeholder tag.
    /// When false the placeholder is rebuilt around the image instead.
    pub inline_append: bool,
}

impl HostCapabilities {
    /// A fully capable host that lacks only native `picture` support.
    pub fn full() -> Self {
        Self {
            native_picture: false,
            media_queries: true,
            inline_append: true,
        }
    }

    /// A legacy host: no media queries, no appending into the
    /// placeholder tag.
    pub fn legacy() -> Self {
        Self {
            native_picture: false,
            media_queries: false,
            inline_append: false,
        }
    }
}

impl Default for HostCapabilities {
    fn default() -> Self {
        Self::full()
    }
}
