//! Testing utilities and harness for Swipeback

pub mod doubles;
pub mod robot;
pub mod robot_assertions;

pub use doubles::{RecordingCloser, RecordingContent, RecordingHost, TestScreen};
pub use robot::*;

pub mod prelude {
    pub use crate::doubles::*;
    pub use crate::robot::*;
    pub use crate::robot_assertions;
}
