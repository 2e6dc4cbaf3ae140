//! Slide-to-dismiss UI for Swipeback
//!
//! A [`DismissalSurface`] wraps a screen's root content, claims edge swipes
//! away from that content, drags it with an edge shadow and, when released far
//! enough, settles it off-screen and asks the host to close the screen. The
//! [`ScreenNavigator`] makes programmatic navigation play the same transitions.

mod dismissal_surface;
mod navigation;
mod screen;
mod shadow;

pub use dismissal_surface::{DismissalSurface, SurfaceConfig};
pub use navigation::{ScreenHost, ScreenNavigator};
pub use screen::{BindError, ContentRef, Screen, ScreenCloser, ScreenContent, ScreenId};
pub use shadow::ShadowRenderer;

pub use swipeback_animation::{ScreenTransition, SlideTransition, TransitionStyle};
pub use swipeback_foundation::{PointerPhase, PointerSample, SettleOutcome};
pub use swipeback_ui_graphics::{DrawPrimitive, DrawScope, DrawScopeDefault, Rect, Size};
