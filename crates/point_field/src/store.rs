//! The growing point sequence with the live cursor at slot 0.
//!
//! The store is append-only except for slot 0, which always exists and is
//! rewritten in place on every pointer-motion event. Indices >= 1 are
//! immutable once written and are never removed; the sequence only grows.
use glam::DVec2;

/// Insertion-ordered point sequence. Never empty: slot 0 is the cursor.
#[derive(Clone, Debug)]
pub struct PointStore {
    points: Vec<DVec2>,
}

impl PointStore {
    /// Create a store holding only the default cursor at the origin.
    pub fn new() -> Self {
        Self {
            points: vec![DVec2::ZERO],
        }
    }

    /// The live cursor position (slot 0).
    pub fn cursor(&self) -> DVec2 {
        self.points[0]
    }

    /// Overwrite the cursor in place. Always succeeds; idempotent for
    /// repeated identical positions.
    pub fn set_cursor(&mut self, position: DVec2) {
        self.points[0] = position;
    }

    /// Append a burst to the end of the sequence. Reallocation may occur,
    /// but the cursor stays at slot 0 and existing indices keep their
    /// points.
    pub fn append_burst(&mut self, burst: &[DVec2]) {
        self.points.extend_from_slice(burst);
    }

    /// Number of points currently stored (monotone non-decreasing).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: the store is seeded with the cursor and never shrinks.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// A fixed-length view over the current sequence for one frame's render
    /// pass. The borrow guarantees no append can happen while a pass reads
    /// it; the pass must not re-read the store mid-frame.
    pub fn snapshot(&self) -> &[DVec2] {
        &self.points
    }
}

impl Default for PointStore {
    fn default() -> Self {
        Self::new()
    }
}
