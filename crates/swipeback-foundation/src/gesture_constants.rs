//! Shared constants for the edge-swipe dismiss gesture.
//!
//! Thresholds are derived from the measured surface width and are compile-time
//! values; hosts scale only the shadow width by display density.

use swipeback_ui_graphics::Dp;

/// A Down is eligible to start a dismiss gesture when `x < width / EDGE_ZONE_DIVISOR`.
pub const EDGE_ZONE_DIVISOR: i32 = 10;

/// Released drags of at least `width / DISMISS_THRESHOLD_DIVISOR` fly off and
/// dismiss; shorter ones return to rest.
pub const DISMISS_THRESHOLD_DIVISOR: i32 = 2;

/// Duration of the post-release settle run.
pub const SETTLE_DURATION_MS: u64 = 300;

/// Width of the edge shadow drawn beside the dragged content.
pub const SHADOW_WIDTH: Dp = Dp(16.0);
