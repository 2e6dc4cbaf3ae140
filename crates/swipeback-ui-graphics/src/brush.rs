//! Brush definitions for painting (solid colors, gradients)

use crate::color::Color;

#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    /// Evenly spaced stops from the left edge to the right edge.
    HorizontalGradient { colors: Vec<Color> },
}

impl Brush {
    pub fn solid(color: Color) -> Self {
        Brush::Solid(color)
    }

    pub fn horizontal_gradient(colors: Vec<Color>) -> Self {
        Brush::HorizontalGradient { colors }
    }
}
