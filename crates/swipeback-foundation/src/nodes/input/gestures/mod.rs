pub mod edge_swipe;

pub use edge_swipe::{
    edge_activation_zone, EdgeSwipeGesture, GesturePhase, GestureState, GestureUpdate,
    SettleOutcome,
};
