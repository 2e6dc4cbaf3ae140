//! Contracts between the dismissal surface and the host that owns screens.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use swipeback_foundation::PointerSample;
use swipeback_ui_graphics::DrawScope;

/// Stable handle for a screen in a host-owned registry.
///
/// The surface keeps only this id, never the screen itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScreenId(pub u64);

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "screen#{}", self.0)
    }
}

/// Visual content hosted by a screen: receives pointer samples and paints.
pub trait ScreenContent {
    /// Returns true when the sample was consumed.
    fn on_pointer(&mut self, sample: PointerSample) -> bool;
    fn draw(&self, scope: &mut dyn DrawScope);
}

pub type ContentRef = Rc<RefCell<dyn ScreenContent>>;

/// The part of a host screen a surface binds to: its root content slot.
pub trait Screen {
    fn id(&self) -> ScreenId;
    fn take_root(&mut self) -> Option<ContentRef>;
    fn set_root(&mut self, root: ContentRef);
}

/// Receives the close request when a dismiss settles off-screen.
pub trait ScreenCloser {
    /// Closing an already-closed screen must be a no-op.
    fn close_screen(&mut self, screen: ScreenId);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    MissingRoot { screen: ScreenId },
    AlreadyBound { screen: ScreenId },
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindError::MissingRoot { screen } => write!(f, "{screen} has no root content to wrap"),
            BindError::AlreadyBound { screen } => {
                write!(f, "{screen} is already wrapped by this surface")
            }
        }
    }
}

impl std::error::Error for BindError {}
