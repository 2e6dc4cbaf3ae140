//! Fixed-duration scroll runs driven one frame at a time.

/// One linear settle run between two horizontal offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationRun {
    start_offset: i32,
    delta_offset: i32,
    duration_ms: u64,
    elapsed_ms: u64,
}

impl AnimationRun {
    pub fn new(from: i32, to: i32, duration_ms: u64) -> Self {
        Self {
            start_offset: from,
            delta_offset: to - from,
            duration_ms,
            elapsed_ms: 0,
        }
    }

    pub fn start_offset(&self) -> i32 {
        self.start_offset
    }

    pub fn target(&self) -> i32 {
        self.start_offset + self.delta_offset
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Offset `elapsed_ms` after the run started. Clamped at the target.
    pub fn step(&self, elapsed_ms: u64) -> i32 {
        if self.is_complete(elapsed_ms) {
            return self.target();
        }
        let travelled = self.delta_offset as i64 * elapsed_ms as i64 / self.duration_ms as i64;
        self.start_offset + travelled as i32
    }

    pub fn is_complete(&self, elapsed_ms: u64) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

/// Frame produced by [`ScrollAnimator::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollFrame {
    pub offset: i32,
    /// True on the single frame that completes the run.
    pub finished: bool,
}

/// Owns at most one [`AnimationRun`].
///
/// Starting a run while another is active replaces it; nothing is queued or
/// blended. The completing frame reports the exact target and `finished`, after
/// which the run is dropped so completion can't be observed twice.
#[derive(Debug, Default)]
pub struct ScrollAnimator {
    run: Option<AnimationRun>,
}

impl ScrollAnimator {
    pub fn new() -> Self {
        Self { run: None }
    }

    pub fn start(&mut self, from: i32, to: i32, duration_ms: u64) {
        if let Some(previous) = self.run.take() {
            log::debug!(
                "replacing scroll run toward {} after {}ms",
                previous.target(),
                previous.elapsed_ms()
            );
        }
        self.run = Some(AnimationRun::new(from, to, duration_ms));
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    pub fn run(&self) -> Option<&AnimationRun> {
        self.run.as_ref()
    }

    /// Target offset of the active run.
    pub fn target(&self) -> Option<i32> {
        self.run.as_ref().map(AnimationRun::target)
    }

    /// Drops the active run without reporting completion.
    pub fn abort(&mut self) -> Option<AnimationRun> {
        self.run.take()
    }

    /// Advances the active run by `delta_ms` and returns the new offset.
    pub fn advance(&mut self, delta_ms: u64) -> Option<ScrollFrame> {
        let run = self.run.as_mut()?;
        run.elapsed_ms = run.elapsed_ms.saturating_add(delta_ms);
        if run.is_complete(run.elapsed_ms) {
            let target = run.target();
            self.run = None;
            return Some(ScrollFrame {
                offset: target,
                finished: true,
            });
        }
        Some(ScrollFrame {
            offset: run.step(run.elapsed_ms),
            finished: false,
        })
    }
}

#[cfg(test)]
#[path = "tests/scroller_tests.rs"]
mod tests;
