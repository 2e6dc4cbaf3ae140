//! Application orchestration shell for Swipeback
//!
//! A reference host: owns the screen stack, wraps each screen in a
//! [`DismissalSurface`], routes pointer input to the top screen, drives
//! per-frame settle ticks and paints the top screen.

mod stack;

pub use stack::{ActiveTransition, ScreenEntry, StackHost, TRANSITION_HISTORY};

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

// Use web_time for cross-platform time support (native + WASM) - compatible with winit
use web_time::Instant;

use swipeback_animation::{ScreenTransition, TransitionStyle};
use swipeback_foundation::{PointerPhase, PointerSample};
use swipeback_ui::{
    BindError, ContentRef, DismissalSurface, ScreenCloser, ScreenId, ScreenNavigator,
    SurfaceConfig,
};
use swipeback_ui_graphics::{DrawPrimitive, DrawScope, DrawScopeDefault, Size};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    UnknownScreen { id: ScreenId },
    Bind(BindError),
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::UnknownScreen { id } => write!(f, "{id} is not on the stack"),
            ShellError::Bind(err) => write!(f, "failed to bind dismissal surface: {err}"),
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShellError::Bind(err) => Some(err),
            ShellError::UnknownScreen { .. } => None,
        }
    }
}

impl From<BindError> for ShellError {
    fn from(err: BindError) -> Self {
        ShellError::Bind(err)
    }
}

/// Collects closes requested while surfaces are being ticked; they are applied
/// once no surface is borrowed.
#[derive(Default)]
struct PendingCloses(Vec<ScreenId>);

impl ScreenCloser for PendingCloses {
    fn close_screen(&mut self, screen: ScreenId) {
        self.0.push(screen);
    }
}

pub struct AppShell {
    navigator: ScreenNavigator<StackHost>,
    next_id: u64,
    viewport: (i32, i32),
    cursor: (i32, i32),
    pressed: bool,
    last_frame: Option<Instant>,
}

impl AppShell {
    pub fn new(width: i32, height: i32, style: TransitionStyle) -> Self {
        Self {
            navigator: ScreenNavigator::new(StackHost::new(), style),
            next_id: 1,
            viewport: (width, height),
            cursor: (0, 0),
            pressed: false,
            last_frame: None,
        }
    }

    pub fn viewport(&self) -> (i32, i32) {
        self.viewport
    }

    pub fn stack(&self) -> &StackHost {
        self.navigator.host()
    }

    pub fn len(&self) -> usize {
        self.stack().len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack().is_empty()
    }

    pub fn top(&self) -> Option<ScreenId> {
        self.stack().top().map(ScreenEntry::id)
    }

    pub fn surface(&self, id: ScreenId) -> Option<Rc<RefCell<DismissalSurface>>> {
        self.stack().get(id).and_then(|entry| entry.surface().cloned())
    }

    pub fn transitions(&self) -> &[ScreenTransition] {
        self.stack().played_transitions()
    }

    /// Registers `content` as a new top screen and opens it.
    ///
    /// With sliding enabled the content is wrapped in a dismissal surface
    /// sized to the viewport.
    pub fn push_screen(
        &mut self,
        content: ContentRef,
        config: SurfaceConfig,
    ) -> Result<ScreenId, ShellError> {
        let id = ScreenId(self.next_id);
        self.next_id += 1;

        let mut entry = ScreenEntry::new(id, content);
        if config.sliding_enabled {
            let surface = Rc::new(RefCell::new(DismissalSurface::new(config)));
            DismissalSurface::bind(&surface, &mut entry)?;
            surface
                .borrow_mut()
                .set_size(self.viewport.0, self.viewport.1);
            entry.set_surface(surface);
        }

        self.navigator.host_mut().insert(entry);
        self.navigator.open_screen(id);
        Ok(id)
    }

    /// Programmatic close; plays the same transition as a dismiss gesture.
    ///
    /// Closing a screen that is already gone is a no-op. Ids this shell never
    /// issued are rejected.
    pub fn close(&mut self, id: ScreenId) -> Result<(), ShellError> {
        if self.stack().contains(id) {
            self.navigator.close_screen(id);
            return Ok(());
        }
        if id.0 == 0 || id.0 >= self.next_id {
            return Err(ShellError::UnknownScreen { id });
        }
        log::debug!("{id} already closed");
        Ok(())
    }

    /// Closes the top screen, as a back button would.
    pub fn pop_screen(&mut self) -> Option<ScreenId> {
        let id = self.top()?;
        self.navigator.close_screen(id);
        Some(id)
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        self.viewport = (width, height);
        for surface in self.stack().surfaces() {
            surface.borrow_mut().set_size(width, height);
        }
    }

    /// Delivers a sample to the top screen's root.
    pub fn pointer(&mut self, sample: PointerSample) -> bool {
        match self.stack().top().and_then(|entry| entry.root().cloned()) {
            Some(root) => root.borrow_mut().on_pointer(sample),
            None => {
                log::trace!("pointer sample with no screen open");
                false
            }
        }
    }

    /// Moves the cursor; while pressed this is a drag Move.
    pub fn set_cursor(&mut self, x: i32, y: i32) -> bool {
        self.cursor = (x, y);
        if self.pressed {
            self.pointer(PointerSample::new(x, y, PointerPhase::Move))
        } else {
            false
        }
    }

    pub fn pointer_pressed(&mut self) -> bool {
        self.pressed = true;
        self.pointer(PointerSample::down(self.cursor.0, self.cursor.1))
    }

    pub fn pointer_released(&mut self) -> bool {
        if !self.pressed {
            return false;
        }
        self.pressed = false;
        self.pointer(PointerSample::up(self.cursor.0, self.cursor.1))
    }

    /// Abandons the current touch sequence.
    pub fn cancel_gesture(&mut self) {
        if self.pressed {
            self.pressed = false;
            self.pointer(PointerSample::cancel(self.cursor.0, self.cursor.1));
        }
    }

    pub fn needs_frame(&self) -> bool {
        self.stack().active_transition().is_some()
            || self
                .stack()
                .surfaces()
                .iter()
                .any(|surface| surface.borrow().is_animating())
    }

    /// Advances settle runs and transitions by `delta_ms`, then applies any
    /// closes requested by completed dismissals.
    pub fn frame(&mut self, delta_ms: u64) {
        let mut closes = PendingCloses::default();
        for surface in self.stack().surfaces() {
            surface.borrow_mut().tick(delta_ms, &mut closes);
        }
        self.navigator.host_mut().advance_transition(delta_ms);

        for id in closes.0 {
            if let Err(err) = self.close(id) {
                log::warn!("dismissed surface reported a foreign screen: {err}");
            }
        }
    }

    /// [`Self::frame`] with the delta measured from the previous call.
    pub fn frame_now(&mut self) {
        let now = Instant::now();
        let delta_ms = self
            .last_frame
            .map(|last| now.duration_since(last).as_millis() as u64)
            .unwrap_or(0);
        self.last_frame = Some(now);
        self.frame(delta_ms);
    }

    /// Paints the top screen, offset by the entering half of an active transition.
    pub fn render(&self) -> Vec<DrawPrimitive> {
        let size = Size::new(self.viewport.0 as f32, self.viewport.1 as f32);
        let mut scope = DrawScopeDefault::new(size);
        let Some(entry) = self.stack().top() else {
            return Vec::new();
        };

        let layer = self
            .stack()
            .active_transition()
            .map(|active| {
                active
                    .transition
                    .enter
                    .layer_at(active.elapsed_ms, size.width)
            })
            .unwrap_or_default();
        scope.translate(layer.translation_x, layer.translation_y);
        match entry.surface() {
            Some(surface) => surface.borrow_mut().paint(&mut scope),
            None => {
                if let Some(root) = entry.root() {
                    root.borrow().draw(&mut scope);
                }
            }
        }
        scope.restore();
        scope.into_primitives()
    }
}

#[cfg(test)]
#[path = "tests/app_shell_tests.rs"]
mod tests;
