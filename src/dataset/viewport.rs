// src/dataset/viewport.rs
//! Viewport watch on the trailing sentinel.
//!
//! The editor reports, once per frame, whether the sentinel below the last
//! visible row intersects the viewport. A [`SentinelWatch`] turns those level
//! observations into edge triggers: it fires on its first observation if the
//! sentinel is already visible, and afterwards only when the sentinel enters
//! the viewport again. Each report carries the row count the editor drew
//! above the sentinel; a watch only listens to reports for its own target,
//! so a frame drawn before a load or a reveal cannot trigger it. Watches are
//! RAII guards; dropping one releases its slot in the owning [`ViewportSignal`].

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use bevy::log::trace;

/// Where the sentinel sits: directly after `after_row` revealed rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentinelTarget {
    pub after_row: usize,
}

/// Source of watches. Counts live watches so callers can check that no
/// observer is left dangling.
#[derive(Debug, Clone, Default)]
pub struct ViewportSignal {
    live: Arc<AtomicUsize>,
}

impl ViewportSignal {
    pub fn watch(&self, target: SentinelTarget) -> SentinelWatch {
        self.live.fetch_add(1, Ordering::SeqCst);
        trace!("Viewport watch established on sentinel after row {}", target.after_row);
        SentinelWatch {
            target,
            last_intersecting: None,
            live: Arc::clone(&self.live),
        }
    }

    pub fn live_watches(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }
}

#[derive(Debug)]
pub struct SentinelWatch {
    target: SentinelTarget,
    last_intersecting: Option<bool>,
    live: Arc<AtomicUsize>,
}

impl SentinelWatch {
    /// Feeds one observation of the sentinel drawn after `after_row` rows.
    /// Returns `true` when this observation fires the trigger.
    pub fn observe(&mut self, after_row: usize, intersecting: bool) -> bool {
        if after_row != self.target.after_row {
            trace!(
                "Ignoring sentinel report after row {} (watching row {})",
                after_row, self.target.after_row
            );
            return false;
        }
        let fired = intersecting && self.last_intersecting != Some(true);
        self.last_intersecting = Some(intersecting);
        fired
    }
}

impl Drop for SentinelWatch {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
        trace!("Viewport watch on sentinel after row {} torn down", self.target.after_row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_observation_fires_when_already_visible() {
        let signal = ViewportSignal::default();
        let mut watch = signal.watch(SentinelTarget { after_row: 20 });
        assert!(watch.observe(20, true));
        assert!(!watch.observe(20, true));
        assert!(!watch.observe(20, true));
    }

    #[test]
    fn test_fires_again_only_on_reentry() {
        let signal = ViewportSignal::default();
        let mut watch = signal.watch(SentinelTarget { after_row: 0 });
        assert!(!watch.observe(0, false));
        assert!(watch.observe(0, true));
        assert!(!watch.observe(0, false));
        assert!(watch.observe(0, true));
    }

    #[test]
    fn test_reports_for_other_rows_are_ignored() {
        let signal = ViewportSignal::default();
        let mut watch = signal.watch(SentinelTarget { after_row: 20 });
        // Drawn before the rows existed.
        assert!(!watch.observe(0, true));
        // A stale report must not count as the first observation either.
        assert!(watch.observe(20, true));
        assert!(!watch.observe(40, false));
        assert!(!watch.observe(20, true));
    }

    #[test]
    fn test_drop_releases_slot() {
        let signal = ViewportSignal::default();
        assert_eq!(signal.live_watches(), 0);
        let first = signal.watch(SentinelTarget { after_row: 1 });
        assert_eq!(signal.live_watches(), 1);
        drop(first);
        assert_eq!(signal.live_watches(), 0);
    }
}
