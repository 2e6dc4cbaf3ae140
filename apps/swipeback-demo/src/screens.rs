//! Demo screen content: a screen with one button and a horizontal pager.

use swipeback_foundation::{PointerPhase, PointerSample};
use swipeback_ui::ScreenContent;
use swipeback_ui_graphics::{Brush, Color, DrawScope, Rect};

/// Full-screen background with a single tappable button.
pub struct ButtonScreen {
    label: &'static str,
    background: Color,
    button: Rect,
    pressed: bool,
    clicks: usize,
}

impl ButtonScreen {
    pub fn new(label: &'static str, background: Color, button: Rect) -> Self {
        Self {
            label,
            background,
            button,
            pressed: false,
            clicks: 0,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn button(&self) -> Rect {
        self.button
    }

    pub fn clicks(&self) -> usize {
        self.clicks
    }
}

impl ScreenContent for ButtonScreen {
    fn on_pointer(&mut self, sample: PointerSample) -> bool {
        let inside = self.button.contains(sample.x as f32, sample.y as f32);
        match sample.phase {
            PointerPhase::Down => {
                self.pressed = inside;
                inside
            }
            PointerPhase::Move => self.pressed,
            PointerPhase::Up => {
                let was_pressed = std::mem::take(&mut self.pressed);
                if was_pressed && inside {
                    self.clicks += 1;
                    log::info!("{} button clicked", self.label);
                }
                was_pressed
            }
            PointerPhase::Cancel => {
                self.pressed = false;
                false
            }
        }
    }

    fn draw(&self, scope: &mut dyn DrawScope) {
        scope.draw_rect(Brush::solid(self.background));
        let button_color = if self.pressed {
            Color::rgb(0.2, 0.4, 0.8)
        } else {
            Color::rgb(0.3, 0.5, 0.9)
        };
        scope.draw_rect_at(self.button, Brush::solid(button_color));
    }
}

/// Pages swiped horizontally anywhere on screen; competes with the edge swipe.
pub struct PagerScreen {
    pages: usize,
    current: usize,
    page_width: i32,
    drag_from: Option<i32>,
    drag_offset: i32,
}

impl PagerScreen {
    pub fn new(pages: usize, page_width: i32) -> Self {
        Self {
            pages: pages.max(1),
            current: 0,
            page_width,
            drag_from: None,
            drag_offset: 0,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current
    }

    pub fn page_count(&self) -> usize {
        self.pages
    }

    fn page_color(page: usize) -> Color {
        let shade = 255 / (page as u8).saturating_add(1);
        Color::from_rgba_u8(shade, shade, 255, 255)
    }

    fn settle_page(&mut self) {
        let threshold = self.page_width / 4;
        if self.drag_offset <= -threshold && self.current + 1 < self.pages {
            self.current += 1;
        } else if self.drag_offset >= threshold && self.current > 0 {
            self.current -= 1;
        }
        log::debug!("pager settled on page {}", self.current);
        self.drag_offset = 0;
    }
}

impl ScreenContent for PagerScreen {
    fn on_pointer(&mut self, sample: PointerSample) -> bool {
        match sample.phase {
            PointerPhase::Down => {
                self.drag_from = Some(sample.x);
                self.drag_offset = 0;
            }
            PointerPhase::Move => {
                if let Some(from) = self.drag_from {
                    self.drag_offset = sample.x - from;
                }
            }
            PointerPhase::Up => {
                if self.drag_from.take().is_some() {
                    self.settle_page();
                }
            }
            PointerPhase::Cancel => {
                self.drag_from = None;
                self.drag_offset = 0;
            }
        }
        true
    }

    fn draw(&self, scope: &mut dyn DrawScope) {
        let size = scope.size();
        for page in 0..self.pages {
            let left = (page as i32 - self.current as i32) * self.page_width + self.drag_offset;
            let rect = Rect::new(left as f32, 0.0, self.page_width as f32, size.height);
            scope.draw_rect_at(rect, Brush::solid(Self::page_color(page)));
        }
    }
}
