//! Resize debouncing
//!
//! A continuous drag-resize fires a stream of events; the pass they
//! request only runs once the viewport has been quiet for the configured
//! period. Every further event cancels and reschedules the pending
//! deadline.

use std::time::{Duration, Instant};

/// Quiet period between the last resize event and the pass it fires.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(100);

/// Deadline-based stand-in for clear-timeout/set-timeout scheduling.
#[derive(Debug, Clone, Copy)]
pub struct ResizeDebouncer {
    quiet: Duration,
    deadline: Option<Instant>,
}

impl ResizeDebouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    /// Record a resize event: any pending deadline is replaced.
    pub fn note_resize(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet);
    }

    /// True exactly once per elapsed quiet period; clears the deadline.
    pub fn fire_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop any pending deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a pass is currently scheduled.
    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_only_after_quiet_period() {
        let mut debouncer = ResizeDebouncer::default();
        let t0 = Instant::now();

        debouncer.note_resize(t0);
        assert!(!debouncer.fire_due(t0));
        assert!(!debouncer.fire_due(t0 + Duration::from_millis(99)));
        assert!(debouncer.fire_due(t0 + Duration::from_millis(100)));

        // Fired once; nothing left pending.
        assert!(!debouncer.fire_due(t0 + Duration::from_millis(500)));
        assert!(!debouncer.pending());
    }

    #[test]
    fn test_further_resizes_reschedule() {
        let mut debouncer = ResizeDebouncer::default();
        let t0 = Instant::now();

        debouncer.note_resize(t0);
        debouncer.note_resize(t0 + Duration::from_millis(60));

        // The original deadline has passed but was cancelled by the
        // second event.
        assert!(!debouncer.fire_due(t0 + Duration::from_millis(110)));
        assert!(debouncer.fire_due(t0 + Duration::from_millis(160)));
    }

    #[test]
    fn test_cancel_drops_deadline() {
        let mut debouncer = ResizeDebouncer::new(Duration::from_millis(50));
        let t0 = Instant::now();

        debouncer.note_resize(t0);
        debouncer.cancel();
        assert!(!debouncer.fire_due(t0 + Duration::from_secs(1)));
    }
}
