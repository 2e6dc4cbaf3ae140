//! Robot testing framework for end-to-end swipe testing
//!
//! Drives a headless [`AppShell`] the way a finger and a display clock would:
//! pointer sequences in, fixed-size frames out.
//!
//! # Example
//!
//! ```
//! use swipeback_testing::{RecordingContent, RobotTestRule};
//!
//! let mut robot = RobotTestRule::new(1000, 600);
//! let screen = robot.push(RecordingContent::consuming());
//!
//! robot.edge_swipe(50, 300, -600);
//! robot.wait_for_idle();
//!
//! assert!(!robot.is_open(screen));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use swipeback_animation::TransitionStyle;
use swipeback_app_shell::AppShell;
use swipeback_ui::{ContentRef, ScreenContent, ScreenId, SurfaceConfig};
use swipeback_ui_graphics::Rect;

/// Length of one simulated display frame.
pub const FRAME_MILLIS: u64 = 16;

const DRAG_STEPS: i32 = 10;
const MAX_IDLE_FRAMES: usize = 1000;

/// Programmatic control over a headless shell.
pub struct RobotTestRule {
    shell: AppShell,
}

impl RobotTestRule {
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_style(width, height, TransitionStyle::Slide)
    }

    pub fn with_style(width: i32, height: i32, style: TransitionStyle) -> Self {
        Self {
            shell: AppShell::new(width, height, style),
        }
    }

    /// Pushes `content` with the default surface configuration and lets the
    /// open transition finish.
    pub fn push<C: ScreenContent + 'static>(&mut self, content: Rc<RefCell<C>>) -> ScreenId {
        self.push_with(content, SurfaceConfig::default())
    }

    pub fn push_with<C: ScreenContent + 'static>(
        &mut self,
        content: Rc<RefCell<C>>,
        config: SurfaceConfig,
    ) -> ScreenId {
        let content: ContentRef = content;
        let id = match self.shell.push_screen(content, config) {
            Ok(id) => id,
            Err(err) => panic!("push_screen failed: {err}"),
        };
        self.wait_for_idle();
        id
    }

    pub fn viewport_size(&self) -> (i32, i32) {
        self.shell.viewport()
    }

    pub fn set_viewport(&mut self, width: i32, height: i32) {
        self.shell.resize(width, height);
    }

    /// Runs frames covering `millis`, one [`FRAME_MILLIS`] at a time with a
    /// shorter final frame when needed.
    pub fn advance_time(&mut self, millis: u64) {
        let mut remaining = millis;
        while remaining > 0 {
            let step = remaining.min(FRAME_MILLIS);
            self.shell.frame(step);
            remaining -= step;
        }
    }

    /// Runs frames until nothing is animating.
    pub fn wait_for_idle(&mut self) {
        for _ in 0..MAX_IDLE_FRAMES {
            if !self.shell.needs_frame() {
                return;
            }
            self.shell.frame(FRAME_MILLIS);
        }
        panic!("shell still animating after {MAX_IDLE_FRAMES} frames");
    }

    /// Press at `(from_x, y)`, move horizontally to `to_x` in even steps and
    /// release. Does not run any frames.
    pub fn edge_swipe(&mut self, from_x: i32, y: i32, to_x: i32) {
        self.drag(from_x, y, to_x, y);
    }

    /// Pointer down, stepped moves and up without running frames.
    pub fn drag(&mut self, from_x: i32, from_y: i32, to_x: i32, to_y: i32) {
        self.mouse_move(from_x, from_y);
        self.mouse_down();
        for i in 1..=DRAG_STEPS {
            let x = from_x + (to_x - from_x) * i / DRAG_STEPS;
            let y = from_y + (to_y - from_y) * i / DRAG_STEPS;
            self.mouse_move(x, y);
        }
        self.mouse_up();
    }

    pub fn mouse_move(&mut self, x: i32, y: i32) -> bool {
        self.shell.set_cursor(x, y)
    }

    pub fn mouse_down(&mut self) -> bool {
        self.shell.pointer_pressed()
    }

    pub fn mouse_up(&mut self) -> bool {
        self.shell.pointer_released()
    }

    pub fn cancel(&mut self) {
        self.shell.cancel_gesture();
    }

    pub fn top(&self) -> Option<ScreenId> {
        self.shell.top()
    }

    pub fn is_open(&self, id: ScreenId) -> bool {
        self.shell.stack().contains(id)
    }

    /// Current horizontal offset of `id`'s surface; zero without one.
    pub fn offset_of(&self, id: ScreenId) -> i32 {
        self.shell
            .surface(id)
            .map_or(0, |surface| surface.borrow().offset())
    }

    /// Bounds of every primitive the top screen paints.
    pub fn rendered_rects(&self) -> Vec<Rect> {
        self.shell.render().iter().map(|p| p.rect()).collect()
    }

    pub fn shell(&self) -> &AppShell {
        &self.shell
    }

    /// Get access to the underlying app shell for advanced scenarios.
    pub fn shell_mut(&mut self) -> &mut AppShell {
        &mut self.shell
    }
}
