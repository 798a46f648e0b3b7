//! Pointer tracker: remembers the latest move coordinates, nothing more.

use super::events::PointerSample;

#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    sample: PointerSample,
    moves: u64,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a move. Returns true when the coordinates changed.
    pub fn record(&mut self, position: PointerSample) -> bool {
        let changed = self.moves == 0 || position != self.sample;
        self.sample = position;
        self.moves += 1;
        changed
    }

    pub fn sample(&self) -> PointerSample {
        self.sample
    }

    pub fn has_moved(&self) -> bool {
        self.moves > 0
    }

    pub fn move_count(&self) -> u64 {
        self.moves
    }
}
