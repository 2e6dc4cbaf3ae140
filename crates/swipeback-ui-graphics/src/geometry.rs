//! Geometric primitives and draw recording: Point, Size, Rect, GraphicsLayer, DrawScope

use crate::Brush;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width,
            height: self.height,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && y >= self.y && x <= self.x + self.width && y <= self.y + self.height
    }
}

/// Per-layer transform applied by the compositor: used for screen transitions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphicsLayer {
    pub alpha: f32,
    pub translation_x: f32,
    pub translation_y: f32,
}

impl Default for GraphicsLayer {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            translation_x: 0.0,
            translation_y: 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawPrimitive {
    Rect { rect: Rect, brush: Brush },
}

impl DrawPrimitive {
    pub fn rect(&self) -> Rect {
        match self {
            DrawPrimitive::Rect { rect, .. } => *rect,
        }
    }
}

/// Records draw primitives in the local space of whatever is being painted.
///
/// `translate` pushes an offset applied to every subsequent primitive until the
/// matching `restore`. Translations nest.
pub trait DrawScope {
    fn size(&self) -> Size;
    fn draw_rect(&mut self, brush: Brush);
    /// Draws a rectangle at the specified position and size.
    fn draw_rect_at(&mut self, rect: Rect, brush: Brush);
    fn translate(&mut self, dx: f32, dy: f32);
    fn restore(&mut self);
}

#[derive(Default)]
pub struct DrawScopeDefault {
    size: Size,
    origin: Point,
    saved: Vec<Point>,
    primitives: Vec<DrawPrimitive>,
}

impl DrawScopeDefault {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            origin: Point::ZERO,
            saved: Vec::new(),
            primitives: Vec::new(),
        }
    }

    pub fn primitives(&self) -> &[DrawPrimitive] {
        &self.primitives
    }

    pub fn into_primitives(self) -> Vec<DrawPrimitive> {
        self.primitives
    }
}

impl DrawScope for DrawScopeDefault {
    fn size(&self) -> Size {
        self.size
    }

    fn draw_rect(&mut self, brush: Brush) {
        let rect = Rect::from_size(self.size);
        self.draw_rect_at(rect, brush);
    }

    fn draw_rect_at(&mut self, rect: Rect, brush: Brush) {
        self.primitives.push(DrawPrimitive::Rect {
            rect: rect.translate(self.origin.x, self.origin.y),
            brush,
        });
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.saved.push(self.origin);
        self.origin = Point::new(self.origin.x + dx, self.origin.y + dy);
    }

    fn restore(&mut self) {
        // Unbalanced restores keep the root origin.
        if let Some(origin) = self.saved.pop() {
            self.origin = origin;
        }
    }
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
