//! The slide-to-dismiss wrapper installed as a screen's root content.

use std::cell::RefCell;
use std::rc::Rc;

use swipeback_animation::ScrollAnimator;
use swipeback_foundation::gesture_constants::{SETTLE_DURATION_MS, SHADOW_WIDTH};
use swipeback_foundation::{
    EdgeSwipeGesture, GestureUpdate, PointerPhase, PointerSample, SettleOutcome,
};
use swipeback_ui_graphics::{Dp, DrawScope, Size};

use crate::screen::{BindError, ContentRef, Screen, ScreenCloser, ScreenContent, ScreenId};
use crate::shadow::ShadowRenderer;

/// Construction-time options for a [`DismissalSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceConfig {
    /// Display density used to scale the shadow.
    pub density: f32,
    /// When false the surface never claims a gesture and only forwards events.
    pub sliding_enabled: bool,
    pub shadow_width: Dp,
    pub settle_duration_ms: u64,
}

impl SurfaceConfig {
    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    pub fn with_sliding_enabled(mut self, enabled: bool) -> Self {
        self.sliding_enabled = enabled;
        self
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            density: 1.0,
            sliding_enabled: true,
            shadow_width: SHADOW_WIDTH,
            settle_duration_ms: SETTLE_DURATION_MS,
        }
    }
}

/// Which layer receives the rest of the current touch sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Routing {
    /// Interception still runs before the wrapped content sees each sample.
    Content,
    /// The surface handles every sample: it claimed the sequence, or the
    /// content declined the Down.
    Surface,
}

pub struct DismissalSurface {
    config: SurfaceConfig,
    shadow: ShadowRenderer,
    gesture: EdgeSwipeGesture,
    animator: ScrollAnimator,
    settling: Option<SettleOutcome>,
    offset_x: i32,
    width: Option<i32>,
    height: Option<i32>,
    screen: Option<ScreenId>,
    content: Option<ContentRef>,
    routing: Routing,
    needs_redraw: bool,
}

impl DismissalSurface {
    pub fn new(config: SurfaceConfig) -> Self {
        Self {
            shadow: ShadowRenderer::new(config.shadow_width, config.density),
            config,
            gesture: EdgeSwipeGesture::new(),
            animator: ScrollAnimator::new(),
            settling: None,
            offset_x: 0,
            width: None,
            height: None,
            screen: None,
            content: None,
            routing: Routing::Content,
            needs_redraw: false,
        }
    }

    /// Wraps `screen`'s root content in `surface` and installs the surface as
    /// the new root.
    ///
    /// The wrapped content keeps its own layout; the surface only adds an
    /// interception and paint layer above it.
    pub fn bind(surface: &Rc<RefCell<Self>>, screen: &mut dyn Screen) -> Result<(), BindError> {
        let id = screen.id();
        let content = screen
            .take_root()
            .ok_or(BindError::MissingRoot { screen: id })?;

        if Rc::as_ptr(&content) as *const () == Rc::as_ptr(surface) as *const () {
            screen.set_root(content);
            return Err(BindError::AlreadyBound { screen: id });
        }

        surface.borrow_mut().attach(id, content);
        let root: ContentRef = surface.clone();
        screen.set_root(root);
        log::debug!("dismissal surface bound to {id}");
        Ok(())
    }

    fn attach(&mut self, screen: ScreenId, content: ContentRef) {
        self.screen = Some(screen);
        self.content = Some(content);
        self.gesture.reset();
        self.routing = Routing::Content;
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    pub fn screen(&self) -> Option<ScreenId> {
        self.screen
    }

    pub fn content(&self) -> Option<&ContentRef> {
        self.content.as_ref()
    }

    pub fn is_bound(&self) -> bool {
        self.content.is_some()
    }

    pub fn offset(&self) -> i32 {
        self.offset_x
    }

    pub fn size(&self) -> Option<(i32, i32)> {
        self.width.zip(self.height)
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// Outcome the active settle run is heading toward.
    pub fn settle_target(&self) -> Option<SettleOutcome> {
        self.settling
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_claimed()
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    pub fn set_size(&mut self, width: i32, height: i32) {
        if width <= 0 || height <= 0 {
            log::warn!("ignoring unusable surface size {width}x{height}");
            self.width = None;
            self.height = None;
            return;
        }
        let resized = self.width != Some(width);
        self.width = Some(width);
        self.height = Some(height);
        self.apply_offset(self.offset_x);
        if resized && self.settling == Some(SettleOutcome::FlyOffDismiss) {
            self.retarget_dismiss(width);
        }
    }

    pub fn on_layout(&mut self, size: Size) {
        self.set_size(size.width as i32, size.height as i32);
    }

    /// Interception phase: claim this sample's sequence away from the content?
    ///
    /// New gestures are refused while a settle run is in flight.
    pub fn on_intercept_touch(&mut self, sample: PointerSample) -> bool {
        if !self.config.sliding_enabled {
            return false;
        }
        if self.animator.is_running() {
            if sample.phase == PointerPhase::Down {
                log::trace!("settle in flight; not tracking new sequence");
            }
            return false;
        }
        self.gesture.intercept(sample, self.width)
    }

    /// Handling phase: drags the content and starts the settle run on release.
    ///
    /// Always consumes once bound.
    pub fn on_touch(&mut self, sample: PointerSample) -> bool {
        if self.content.is_none() {
            return false;
        }
        if !self.config.sliding_enabled || self.animator.is_running() {
            return true;
        }

        match self.gesture.handle(sample, self.width, self.offset_x) {
            GestureUpdate::Dragged { offset } => self.apply_offset(offset),
            GestureUpdate::Released { outcome, .. } => self.start_settle(outcome),
            GestureUpdate::Cancelled => log::trace!("gesture cancelled at {}", self.offset_x),
            GestureUpdate::Ignored | GestureUpdate::Tracking => {}
        }
        true
    }

    /// Routes one sample the way a container view dispatches touches.
    ///
    /// Interception runs first while the content owns the sequence. The first
    /// claimed sample sends the content a single `Cancel` and is handled here,
    /// along with the rest of the sequence. A Down the content does not consume
    /// also hands the sequence to this surface.
    pub fn dispatch_pointer(&mut self, sample: PointerSample) -> bool {
        if sample.phase == PointerPhase::Down {
            self.routing = Routing::Content;
        }

        let consumed = match self.routing {
            Routing::Surface => self.on_touch(sample),
            Routing::Content => {
                if self.on_intercept_touch(sample) {
                    self.routing = Routing::Surface;
                    self.forward_to_content(sample.with_phase(PointerPhase::Cancel));
                    self.on_touch(sample)
                } else {
                    let consumed = self.forward_to_content(sample);
                    if sample.phase == PointerPhase::Down && !consumed {
                        self.routing = Routing::Surface;
                        self.on_touch(sample)
                    } else {
                        consumed
                    }
                }
            }
        };

        if matches!(sample.phase, PointerPhase::Up | PointerPhase::Cancel) {
            self.routing = Routing::Content;
        }
        consumed
    }

    fn forward_to_content(&mut self, sample: PointerSample) -> bool {
        match &self.content {
            Some(content) => content.borrow_mut().on_pointer(sample),
            None => false,
        }
    }

    fn start_settle(&mut self, outcome: SettleOutcome) {
        let width = self.width.unwrap_or(0);
        let target = outcome.target_offset(width);
        log::debug!(
            "released at {} of {}; settling {:?} toward {}",
            self.offset_x,
            width,
            outcome,
            target
        );
        self.settling = Some(outcome);
        self.animator
            .start(self.offset_x, target, self.config.settle_duration_ms);
        self.needs_redraw = true;
    }

    /// Points an in-flight dismiss run at the new `-width`, keeping its remaining time.
    fn retarget_dismiss(&mut self, width: i32) {
        let remaining = self
            .animator
            .run()
            .map_or(0, |run| run.duration_ms().saturating_sub(run.elapsed_ms()));
        log::debug!(
            "resized to {width} while dismissing; retargeting from {} over {remaining}ms",
            self.offset_x
        );
        self.animator.start(self.offset_x, -width, remaining);
    }

    /// Advances the settle run by one frame of `delta_ms`.
    ///
    /// Returns true while more frames are needed. When a dismiss run completes
    /// the bound screen is closed through `closer`, once.
    pub fn tick(&mut self, delta_ms: u64, closer: &mut dyn ScreenCloser) -> bool {
        let Some(frame) = self.animator.advance(delta_ms) else {
            return false;
        };
        self.apply_offset(frame.offset);
        if !frame.finished {
            return true;
        }

        if self.settling.take() == Some(SettleOutcome::FlyOffDismiss) {
            match self.screen {
                Some(screen) => {
                    log::debug!("dismiss settled; closing {screen}");
                    closer.close_screen(screen);
                }
                None => log::warn!("dismiss settled on an unbound surface"),
            }
        }
        false
    }

    /// Draws the wrapped content at the current offset, then the edge shadow.
    pub fn paint(&mut self, scope: &mut dyn DrawScope) {
        self.needs_redraw = false;
        self.draw_layers(scope);
    }

    fn draw_layers(&self, scope: &mut dyn DrawScope) {
        scope.translate(self.offset_x as f32, 0.0);
        if let Some(content) = &self.content {
            content.borrow().draw(scope);
        }
        if let Some(height) = self.height {
            self.shadow.draw(scope, height);
        }
        scope.restore();
    }

    fn apply_offset(&mut self, offset: i32) {
        let min = self.width.map_or(0, |width| -width);
        let clamped = offset.clamp(min, 0);
        if clamped != self.offset_x {
            self.offset_x = clamped;
            self.needs_redraw = true;
        }
    }
}

impl ScreenContent for DismissalSurface {
    fn on_pointer(&mut self, sample: PointerSample) -> bool {
        self.dispatch_pointer(sample)
    }

    fn draw(&self, scope: &mut dyn DrawScope) {
        self.draw_layers(scope);
    }
}

#[cfg(test)]
#[path = "tests/dismissal_surface_tests.rs"]
mod tests;
