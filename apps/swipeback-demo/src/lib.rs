//! Headless Swipeback demo
//!
//! A main screen whose button opens a second screen, plus a pager screen
//! whose own horizontal paging coexists with the edge swipe. Everything is
//! driven through [`AppShell`] with scripted pointer input.

pub mod screens;

use std::cell::RefCell;
use std::rc::Rc;

use swipeback_animation::TransitionStyle;
use swipeback_app_shell::{AppShell, ShellError};
use swipeback_ui::{ContentRef, ScreenId, SurfaceConfig};
use swipeback_ui_graphics::{Color, Rect};

use crate::screens::{ButtonScreen, PagerScreen};

pub const FRAME_MILLIS: u64 = 16;
const SWIPE_STEPS: i32 = 12;
const MAX_SETTLE_FRAMES: usize = 600;

pub struct DemoApp {
    shell: AppShell,
    density: f32,
    main: Rc<RefCell<ButtonScreen>>,
    main_id: ScreenId,
    handled_clicks: usize,
}

impl DemoApp {
    pub fn new(width: i32, height: i32, density: f32) -> Result<Self, ShellError> {
        let mut shell = AppShell::new(width, height, TransitionStyle::Slide);
        let button = Rect::new(
            width as f32 * 0.25,
            height as f32 * 0.45,
            width as f32 * 0.5,
            height as f32 * 0.1,
        );
        let main = Rc::new(RefCell::new(ButtonScreen::new(
            "main",
            Color::WHITE,
            button,
        )));
        let content: ContentRef = main.clone();
        let main_id =
            shell.push_screen(content, SurfaceConfig::default().with_density(density))?;

        let mut app = Self {
            shell,
            density,
            main,
            main_id,
            handled_clicks: 0,
        };
        app.settle();
        Ok(app)
    }

    pub fn shell(&self) -> &AppShell {
        &self.shell
    }

    pub fn main_id(&self) -> ScreenId {
        self.main_id
    }

    fn config(&self) -> SurfaceConfig {
        SurfaceConfig::default().with_density(self.density)
    }

    /// Taps at `(x, y)`; a click on the main button opens the second screen.
    pub fn tap(&mut self, x: i32, y: i32) -> Result<Option<ScreenId>, ShellError> {
        self.shell.set_cursor(x, y);
        self.shell.pointer_pressed();
        self.shell.pointer_released();

        let clicks = self.main.borrow().clicks();
        if clicks == self.handled_clicks || self.shell.top() != Some(self.main_id) {
            return Ok(None);
        }
        self.handled_clicks = clicks;
        self.open_second().map(Some)
    }

    /// Center of the main button.
    pub fn main_button_center(&self) -> (i32, i32) {
        let button = self.main.borrow().button();
        (
            (button.x + button.width / 2.0) as i32,
            (button.y + button.height / 2.0) as i32,
        )
    }

    pub fn open_second(&mut self) -> Result<ScreenId, ShellError> {
        let (width, height) = self.shell.viewport();
        let button = Rect::new(
            width as f32 * 0.25,
            height as f32 * 0.7,
            width as f32 * 0.5,
            height as f32 * 0.1,
        );
        let second: ContentRef = Rc::new(RefCell::new(ButtonScreen::new(
            "second",
            Color::rgb(0.95, 0.95, 0.8),
            button,
        )));
        let id = self.shell.push_screen(second, self.config())?;
        self.settle();
        Ok(id)
    }

    pub fn open_pager(
        &mut self,
        pages: usize,
    ) -> Result<(ScreenId, Rc<RefCell<PagerScreen>>), ShellError> {
        let (width, _) = self.shell.viewport();
        let pager = Rc::new(RefCell::new(PagerScreen::new(pages, width)));
        let content: ContentRef = pager.clone();
        let id = self.shell.push_screen(content, self.config())?;
        self.settle();
        Ok((id, pager))
    }

    /// Horizontal finger drag along `y`, released at `to_x`, then settled.
    ///
    /// Coordinates are surface-local, so a dismiss swipe runs past the left
    /// edge into negative x.
    pub fn swipe(&mut self, from_x: i32, to_x: i32, y: i32) {
        self.shell.set_cursor(from_x, y);
        self.shell.pointer_pressed();
        for step in 1..=SWIPE_STEPS {
            let x = from_x + (to_x - from_x) * step / SWIPE_STEPS;
            self.shell.set_cursor(x, y);
            self.shell.frame(FRAME_MILLIS);
        }
        self.shell.pointer_released();
        self.settle();
    }

    /// Back button: closes the top screen with the same transition a swipe plays.
    pub fn back(&mut self) -> Option<ScreenId> {
        let closed = self.shell.pop_screen();
        self.settle();
        closed
    }

    /// Runs frames until nothing is animating.
    pub fn settle(&mut self) -> usize {
        let mut frames = 0;
        while self.shell.needs_frame() && frames < MAX_SETTLE_FRAMES {
            self.shell.frame(FRAME_MILLIS);
            frames += 1;
        }
        if frames == MAX_SETTLE_FRAMES {
            log::warn!("shell still animating after {frames} frames");
        }
        frames
    }
}

#[cfg(test)]
#[path = "tests/demo_tests.rs"]
mod tests;
