//! Animation system for Swipeback
//!
//! Time-based interpolation for the post-release settle run and the
//! enter/exit transition pairs played on screen navigation.

mod animation;
mod scroller;
mod transition;

pub use animation::{AnimationSpec, Easing, Lerp};
pub use scroller::{AnimationRun, ScrollAnimator, ScrollFrame};
pub use transition::{ScreenTransition, SlideTransition, TransitionStyle};
