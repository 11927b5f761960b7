// src/dataset/reveal.rs

use bevy::log::debug;

use super::viewport::{SentinelTarget, SentinelWatch, ViewportSignal};

pub const DEFAULT_REVEAL_INITIAL: usize = 20;
pub const DEFAULT_REVEAL_STEP: usize = 20;

/// Grows the visible prefix of the dataset each time the sentinel enters the viewport.
///
/// Holds at most one live [`SentinelWatch`]. The watch is replaced whenever
/// the dataset or the revealed count changes, so it always targets the
/// sentinel's current position, and it is dropped with the controller.
#[derive(Debug)]
pub struct RevealController {
    revealed: usize,
    initial: usize,
    step: usize,
    signal: ViewportSignal,
    watch: Option<SentinelWatch>,
}

impl Default for RevealController {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_INITIAL, DEFAULT_REVEAL_STEP)
    }
}

impl RevealController {
    pub fn new(initial: usize, step: usize) -> Self {
        Self {
            revealed: 0,
            initial,
            step: step.max(1),
            signal: ViewportSignal::default(),
            watch: None,
        }
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn visible_len(&self, dataset_len: usize) -> usize {
        self.revealed.min(dataset_len)
    }

    pub fn signal(&self) -> &ViewportSignal {
        &self.signal
    }

    pub fn is_armed(&self) -> bool {
        self.watch.is_some()
    }

    /// Starts over for a freshly loaded dataset of `dataset_len` records.
    pub fn reset(&mut self, dataset_len: usize) {
        self.revealed = self.initial.min(dataset_len);
        self.rearm();
    }

    /// Reveals one more step. Returns `true` if the count grew.
    pub fn advance(&mut self, dataset_len: usize) -> bool {
        let next = self.revealed.saturating_add(self.step).min(dataset_len);
        if next <= self.revealed {
            return false;
        }
        debug!("Revealing rows {}..{} of {}", self.revealed, next, dataset_len);
        self.revealed = next;
        self.rearm();
        true
    }

    /// Routes one sentinel observation through the live watch. Returns `true`
    /// when the watch fired; the caller decides whether to advance.
    /// Without a live watch nothing fires.
    pub fn watch_fired(&mut self, after_row: usize, intersecting: bool) -> bool {
        match self.watch.as_mut() {
            Some(watch) => watch.observe(after_row, intersecting),
            None => false,
        }
    }

    /// Tears down the live watch without establishing a new one.
    pub fn disarm(&mut self) {
        self.watch = None;
    }

    fn rearm(&mut self) {
        // Old watch goes first so two are never live at once.
        self.watch = None;
        self.watch = Some(self.signal.watch(SentinelTarget { after_row: self.revealed }));
    }
}
