//! Pure math/data for drawing & units in Swipeback
//!
//! This crate contains geometry primitives, color definitions, brushes,
//! draw recording and unit types shared by the gesture and host crates.

mod brush;
mod color;
mod geometry;
mod unit;

pub use brush::*;
pub use color::*;
pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::brush::Brush;
    pub use crate::color::Color;
    pub use crate::geometry::{DrawPrimitive, DrawScope, GraphicsLayer, Point, Rect, Size};
    pub use crate::unit::Dp;
}
