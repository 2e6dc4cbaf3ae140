//! Screen transitions shared by gesture dismissal and programmatic navigation.

use swipeback_animation::{ScreenTransition, TransitionStyle};

use crate::screen::{ScreenCloser, ScreenId};

/// The host's screen stack operations.
pub trait ScreenHost {
    fn open(&mut self, screen: ScreenId);
    /// Must tolerate screens that are already closed.
    fn close(&mut self, screen: ScreenId);
    fn play_transition(&mut self, transition: ScreenTransition);
}

/// Wraps a [`ScreenHost`] so every open and close plays the style's
/// enter/exit pair.
///
/// Gesture dismissal reaches the host through the [`ScreenCloser`] impl, which
/// is the same `close_screen` a back button calls.
pub struct ScreenNavigator<H: ScreenHost> {
    host: H,
    style: TransitionStyle,
}

impl<H: ScreenHost> ScreenNavigator<H> {
    pub fn new(host: H, style: TransitionStyle) -> Self {
        Self { host, style }
    }

    pub fn style(&self) -> TransitionStyle {
        self.style
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn open_screen(&mut self, screen: ScreenId) {
        log::debug!("opening {screen}");
        self.host.open(screen);
        self.host.play_transition(self.style.open());
    }

    pub fn close_screen(&mut self, screen: ScreenId) {
        log::debug!("closing {screen}");
        self.host.close(screen);
        self.host.play_transition(self.style.close());
    }
}

impl<H: ScreenHost> ScreenCloser for ScreenNavigator<H> {
    fn close_screen(&mut self, screen: ScreenId) {
        ScreenNavigator::close_screen(self, screen);
    }
}

#[cfg(test)]
#[path = "tests/navigation_tests.rs"]
mod tests;
