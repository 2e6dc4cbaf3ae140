//! Edge-swipe dismiss gesture recogniser.
//!
//! Runs in two phases, mirroring how a container view sees touches:
//!
//! - **interception** ([`EdgeSwipeGesture::intercept`]) decides, before any
//!   descendant sees the event, whether the container claims the sequence;
//! - **handling** ([`EdgeSwipeGesture::handle`]) turns the claimed sequence into
//!   offsets and decides the settle outcome on release.
//!
//! Both phases share one [`GestureState`]. A sequence is claimed when it went
//! down inside the edge activation zone and a Move is more horizontal than
//! vertical. Deltas are always measured against the previous sample, never the
//! down point, so a drag that starts vertical can still be claimed once it turns
//! horizontal.

use crate::gesture_constants::{DISMISS_THRESHOLD_DIVISOR, EDGE_ZONE_DIVISOR};
use crate::nodes::input::types::{PointerPhase, PointerSample};

/// Width of the band at the left edge where a Down may start a dismiss.
///
/// An unmeasured surface has no zone, so nothing can be claimed before layout.
pub fn edge_activation_zone(surface_width: Option<i32>) -> i32 {
    surface_width.map_or(0, |width| width.max(0) / EDGE_ZONE_DIVISOR)
}

/// Where the offset settles after release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettleOutcome {
    ReturnToRest,
    FlyOffDismiss,
}

impl SettleOutcome {
    /// Outcome for a release at `offset` on a surface `width` wide.
    ///
    /// Exactly half the width counts as a dismiss.
    pub fn decide(offset: i32, width: i32) -> Self {
        if -offset < width / DISMISS_THRESHOLD_DIVISOR {
            SettleOutcome::ReturnToRest
        } else {
            SettleOutcome::FlyOffDismiss
        }
    }

    pub fn target_offset(&self, width: i32) -> i32 {
        match self {
            SettleOutcome::ReturnToRest => 0,
            SettleOutcome::FlyOffDismiss => -width,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GesturePhase {
    #[default]
    Idle,
    Tracking,
    Claimed,
}

/// Per-sequence tracking data, re-initialised on every Down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GestureState {
    pub down_x: i32,
    pub last_x: i32,
    pub last_y: i32,
    pub claimed: bool,
}

/// Result of feeding a sample to the handling phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureUpdate {
    /// Nothing to apply.
    Ignored,
    /// Sequence is being tracked but not claimed.
    Tracking,
    /// Claimed drag moved; apply the new offset.
    Dragged { offset: i32 },
    /// Claimed drag released at `offset`; settle toward `outcome`.
    Released { offset: i32, outcome: SettleOutcome },
    /// Sequence abandoned; no animation.
    Cancelled,
}

#[derive(Debug, Default)]
pub struct EdgeSwipeGesture {
    phase: GesturePhase,
    state: GestureState,
}

impl EdgeSwipeGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_claimed(&self) -> bool {
        self.phase == GesturePhase::Claimed
    }

    pub fn reset(&mut self) {
        self.phase = GesturePhase::Idle;
        self.state = GestureState::default();
    }

    /// Interception phase: should the container claim this sequence?
    ///
    /// Never claims on Down. Once claimed, every later sample (including the
    /// release) answers `true` so the handling phase owns the rest of the
    /// sequence; the claiming sample's delta is left for [`Self::handle`].
    pub fn intercept(&mut self, sample: PointerSample, surface_width: Option<i32>) -> bool {
        match (sample.phase, self.phase) {
            (PointerPhase::Down, _) => {
                self.begin(sample);
                false
            }
            (PointerPhase::Move, GesturePhase::Idle) => {
                log::debug!("move without down at ({}, {}); starting there", sample.x, sample.y);
                self.begin(sample);
                false
            }
            (PointerPhase::Move, GesturePhase::Tracking) => {
                if self.try_claim(sample, surface_width) {
                    true
                } else {
                    self.track(sample);
                    false
                }
            }
            (PointerPhase::Move, GesturePhase::Claimed) => true,
            (PointerPhase::Up, GesturePhase::Claimed) => true,
            (PointerPhase::Up, _) | (PointerPhase::Cancel, _) => {
                self.reset();
                false
            }
        }
    }

    /// Handling phase: apply the sequence to `offset`.
    ///
    /// Works whether or not [`Self::intercept`] ran first: a host that routes
    /// every sample straight here gets the same claim test on Move.
    pub fn handle(
        &mut self,
        sample: PointerSample,
        surface_width: Option<i32>,
        offset: i32,
    ) -> GestureUpdate {
        match sample.phase {
            PointerPhase::Down => {
                self.begin(sample);
                GestureUpdate::Tracking
            }
            PointerPhase::Move => match self.phase {
                GesturePhase::Idle => {
                    log::debug!("move without down at ({}, {}); starting there", sample.x, sample.y);
                    self.begin(sample);
                    GestureUpdate::Tracking
                }
                GesturePhase::Tracking => {
                    if self.try_claim(sample, surface_width) {
                        self.drag(sample, surface_width, offset)
                    } else {
                        self.track(sample);
                        GestureUpdate::Tracking
                    }
                }
                GesturePhase::Claimed => self.drag(sample, surface_width, offset),
            },
            PointerPhase::Up => {
                let was_claimed = self.is_claimed();
                self.reset();
                match (was_claimed, surface_width) {
                    (true, Some(width)) => GestureUpdate::Released {
                        offset,
                        outcome: SettleOutcome::decide(offset, width),
                    },
                    (true, None) => {
                        log::warn!("claimed drag released before layout; returning to rest");
                        GestureUpdate::Released {
                            offset,
                            outcome: SettleOutcome::ReturnToRest,
                        }
                    }
                    (false, _) => GestureUpdate::Ignored,
                }
            }
            PointerPhase::Cancel => {
                self.reset();
                GestureUpdate::Cancelled
            }
        }
    }

    fn begin(&mut self, sample: PointerSample) {
        self.phase = GesturePhase::Tracking;
        self.state = GestureState {
            down_x: sample.x,
            last_x: sample.x,
            last_y: sample.y,
            claimed: false,
        };
    }

    fn track(&mut self, sample: PointerSample) {
        self.state.last_x = sample.x;
        self.state.last_y = sample.y;
    }

    fn try_claim(&mut self, sample: PointerSample, surface_width: Option<i32>) -> bool {
        let delta_x = sample.x - self.state.last_x;
        let delta_y = sample.y - self.state.last_y;
        let in_zone = self.state.down_x < edge_activation_zone(surface_width);
        if in_zone && delta_x.abs() > delta_y.abs() {
            log::trace!("claimed edge swipe from x={}", self.state.down_x);
            self.phase = GesturePhase::Claimed;
            self.state.claimed = true;
            true
        } else {
            false
        }
    }

    fn drag(
        &mut self,
        sample: PointerSample,
        surface_width: Option<i32>,
        offset: i32,
    ) -> GestureUpdate {
        let right_moved_x = self.state.last_x - sample.x;
        let candidate = offset.saturating_sub(right_moved_x);
        self.track(sample);
        GestureUpdate::Dragged {
            offset: clamp_offset(candidate, surface_width),
        }
    }
}

/// Keeps `offset` within `[-width, 0]`: never right of rest, never further
/// left than fully off-screen.
fn clamp_offset(offset: i32, surface_width: Option<i32>) -> i32 {
    let min = surface_width.map_or(0, |width| -width.max(0));
    offset.clamp(min, 0)
}

#[cfg(test)]
#[path = "tests/edge_swipe_tests.rs"]
mod tests;
