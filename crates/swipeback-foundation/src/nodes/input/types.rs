/// Phase of one pointer sample within a touch sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    /// The host abandoned the sequence (e.g. a parent claimed it).
    Cancel,
}

/// A single pointer input sample in surface-local whole pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerSample {
    pub x: i32,
    pub y: i32,
    pub phase: PointerPhase,
}

impl PointerSample {
    pub const fn new(x: i32, y: i32, phase: PointerPhase) -> Self {
        Self { x, y, phase }
    }

    pub const fn down(x: i32, y: i32) -> Self {
        Self::new(x, y, PointerPhase::Down)
    }

    pub const fn moved(x: i32, y: i32) -> Self {
        Self::new(x, y, PointerPhase::Move)
    }

    pub const fn up(x: i32, y: i32) -> Self {
        Self::new(x, y, PointerPhase::Up)
    }

    pub const fn cancel(x: i32, y: i32) -> Self {
        Self::new(x, y, PointerPhase::Cancel)
    }

    /// Same coordinates with a different phase.
    pub fn with_phase(self, phase: PointerPhase) -> Self {
        Self { phase, ..self }
    }
}
