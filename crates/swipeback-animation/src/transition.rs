//! Enter/exit animation pairs played when a screen is opened or closed.
//!
//! Translations are expressed as fractions of the screen width so a pair can
//! be evaluated against any surface size.

use swipeback_ui_graphics::GraphicsLayer;

use crate::animation::{AnimationSpec, Easing, Lerp};

/// Horizontal slide with an optional alpha ramp, applied to one screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideTransition {
    pub from_x_fraction: f32,
    pub to_x_fraction: f32,
    pub from_alpha: f32,
    pub to_alpha: f32,
    pub spec: AnimationSpec,
}

impl SlideTransition {
    pub fn slide(from_x_fraction: f32, to_x_fraction: f32, spec: AnimationSpec) -> Self {
        Self {
            from_x_fraction,
            to_x_fraction,
            from_alpha: 1.0,
            to_alpha: 1.0,
            spec,
        }
    }

    pub fn with_alpha(mut self, from_alpha: f32, to_alpha: f32) -> Self {
        self.from_alpha = from_alpha;
        self.to_alpha = to_alpha;
        self
    }

    /// Layer transform `elapsed_millis` into the transition on a screen `width` wide.
    pub fn layer_at(&self, elapsed_millis: u64, width: f32) -> GraphicsLayer {
        let progress = self.spec.progress(elapsed_millis);
        GraphicsLayer {
            alpha: self.from_alpha.lerp(&self.to_alpha, progress),
            translation_x: (self.from_x_fraction * width)
                .lerp(&(self.to_x_fraction * width), progress),
            translation_y: 0.0,
        }
    }

    pub fn is_finished(&self, elapsed_millis: u64) -> bool {
        self.spec.is_finished(elapsed_millis)
    }
}

/// The pair played together: `enter` on the screen becoming visible, `exit` on
/// the one going away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTransition {
    pub enter: SlideTransition,
    pub exit: SlideTransition,
}

impl ScreenTransition {
    pub fn is_finished(&self, elapsed_millis: u64) -> bool {
        self.enter.is_finished(elapsed_millis) && self.exit.is_finished(elapsed_millis)
    }
}

const TRANSITION_MILLIS: u64 = 300;
const PUSHED_OFFSET_FRACTION: f32 = -1.0 / 3.0;
const PUSHED_ALPHA: f32 = 0.7;

/// Which transition family a navigator plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionStyle {
    /// New screens enter from the right while the previous one is pushed left
    /// and dimmed. Closing slides the top screen off to the left, matching a
    /// completed dismiss gesture.
    #[default]
    Slide,
    /// Symmetric fade-slide for plain navigation.
    Plain,
}

impl TransitionStyle {
    pub fn open(&self) -> ScreenTransition {
        let spec = AnimationSpec::tween(TRANSITION_MILLIS, Easing::FastOutSlowInEasing);
        let fade_in = AnimationSpec::tween(TRANSITION_MILLIS, Easing::LinearOutSlowInEasing);
        match self {
            TransitionStyle::Slide => ScreenTransition {
                enter: SlideTransition::slide(1.0, 0.0, spec),
                exit: SlideTransition::slide(0.0, PUSHED_OFFSET_FRACTION, spec)
                    .with_alpha(1.0, PUSHED_ALPHA),
            },
            TransitionStyle::Plain => ScreenTransition {
                enter: SlideTransition::slide(0.1, 0.0, fade_in).with_alpha(0.0, 1.0),
                exit: SlideTransition::slide(0.0, 0.0, spec),
            },
        }
    }

    pub fn close(&self) -> ScreenTransition {
        let spec = AnimationSpec::tween(TRANSITION_MILLIS, Easing::FastOutSlowInEasing);
        let fade_out = AnimationSpec::tween(TRANSITION_MILLIS, Easing::FastOutLinearEasing);
        match self {
            TransitionStyle::Slide => ScreenTransition {
                enter: SlideTransition::slide(PUSHED_OFFSET_FRACTION, 0.0, spec)
                    .with_alpha(PUSHED_ALPHA, 1.0),
                exit: SlideTransition::slide(0.0, -1.0, spec),
            },
            TransitionStyle::Plain => ScreenTransition {
                enter: SlideTransition::slide(0.0, 0.0, spec),
                exit: SlideTransition::slide(0.0, 0.1, fade_out).with_alpha(1.0, 0.0),
            },
        }
    }
}

#[cfg(test)]
#[path = "tests/transition_tests.rs"]
mod tests;
