//! Foundation elements for Swipeback: pointer input and gesture recognition

pub mod gesture_constants;
pub mod nodes;

pub use nodes::input::gestures::{
    edge_activation_zone, EdgeSwipeGesture, GesturePhase, GestureState, GestureUpdate,
    SettleOutcome,
};
pub use nodes::input::{PointerPhase, PointerSample};

pub mod prelude {
    pub use crate::gesture_constants::*;
    pub use crate::nodes::input::prelude::*;
}
