pub mod gestures;
pub mod types;

pub use types::{PointerPhase, PointerSample};

pub mod prelude {
    pub use super::gestures::{EdgeSwipeGesture, GestureUpdate, SettleOutcome};
    pub use super::types::{PointerPhase, PointerSample};
}
