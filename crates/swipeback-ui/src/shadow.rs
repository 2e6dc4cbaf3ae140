use swipeback_ui_graphics::{Brush, Color, Dp, DrawScope, Rect};

const SHADOW_ALPHA: f32 = 0.25;

/// Paints the edge shadow just left of the content's left edge.
///
/// Stateless apart from its resolved width; drawn in the content's local space
/// so the content translation carries it along.
#[derive(Clone, Debug, PartialEq)]
pub struct ShadowRenderer {
    width_px: i32,
    brush: Brush,
}

impl ShadowRenderer {
    pub fn new(shadow_width: Dp, density: f32) -> Self {
        Self {
            width_px: shadow_width.to_whole_px(density),
            brush: Brush::horizontal_gradient(vec![
                Color::TRANSPARENT,
                Color::BLACK.with_alpha(SHADOW_ALPHA),
            ]),
        }
    }

    pub fn width(&self) -> i32 {
        self.width_px
    }

    /// Shadow bounds in the content's local space for a surface `height` tall.
    pub fn bounds(&self, height: i32) -> Rect {
        Rect::new(
            -(self.width_px as f32),
            0.0,
            self.width_px as f32,
            height as f32,
        )
    }

    pub fn draw(&self, scope: &mut dyn DrawScope, height: i32) {
        scope.draw_rect_at(self.bounds(height), self.brush.clone());
    }
}
