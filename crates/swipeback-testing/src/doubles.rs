//! Recording stand-ins for screen content and host collaborators.

use std::cell::RefCell;
use std::rc::Rc;

use swipeback_animation::ScreenTransition;
use swipeback_foundation::PointerSample;
use swipeback_ui::{ContentRef, Screen, ScreenCloser, ScreenContent, ScreenHost, ScreenId};
use swipeback_ui_graphics::{Brush, Color, DrawScope};

/// Content that records every sample it receives and fills its bounds.
pub struct RecordingContent {
    seen: Vec<PointerSample>,
    consumes: bool,
}

impl RecordingContent {
    /// Content that consumes every sample, as a scrollable list would.
    pub fn consuming() -> Rc<RefCell<Self>> {
        Self::build(true)
    }

    /// Content with no touch handling of its own.
    pub fn passive() -> Rc<RefCell<Self>> {
        Self::build(false)
    }

    fn build(consumes: bool) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            seen: Vec::new(),
            consumes,
        }))
    }

    pub fn seen(&self) -> &[PointerSample] {
        &self.seen
    }

    pub fn clear(&mut self) {
        self.seen.clear();
    }
}

impl ScreenContent for RecordingContent {
    fn on_pointer(&mut self, sample: PointerSample) -> bool {
        self.seen.push(sample);
        self.consumes
    }

    fn draw(&self, scope: &mut dyn DrawScope) {
        scope.draw_rect(Brush::solid(Color::WHITE));
    }
}

/// Minimal [`Screen`] holding a root slot.
pub struct TestScreen {
    pub id: ScreenId,
    pub root: Option<ContentRef>,
}

impl TestScreen {
    pub fn new(id: u64, root: ContentRef) -> Self {
        Self {
            id: ScreenId(id),
            root: Some(root),
        }
    }

    pub fn empty(id: u64) -> Self {
        Self {
            id: ScreenId(id),
            root: None,
        }
    }
}

impl Screen for TestScreen {
    fn id(&self) -> ScreenId {
        self.id
    }

    fn take_root(&mut self) -> Option<ContentRef> {
        self.root.take()
    }

    fn set_root(&mut self, root: ContentRef) {
        self.root = Some(root);
    }
}

/// Host event log entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    Opened(ScreenId),
    Closed(ScreenId),
    Transition(ScreenTransition),
}

/// [`ScreenHost`] that only records what it was asked to do.
#[derive(Default)]
pub struct RecordingHost {
    pub events: Vec<HostEvent>,
}

impl RecordingHost {
    pub fn closed(&self) -> Vec<ScreenId> {
        self.events
            .iter()
            .filter_map(|event| match event {
                HostEvent::Closed(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    pub fn transitions(&self) -> Vec<ScreenTransition> {
        self.events
            .iter()
            .filter_map(|event| match event {
                HostEvent::Transition(transition) => Some(*transition),
                _ => None,
            })
            .collect()
    }
}

impl ScreenHost for RecordingHost {
    fn open(&mut self, screen: ScreenId) {
        self.events.push(HostEvent::Opened(screen));
    }

    fn close(&mut self, screen: ScreenId) {
        self.events.push(HostEvent::Closed(screen));
    }

    fn play_transition(&mut self, transition: ScreenTransition) {
        self.events.push(HostEvent::Transition(transition));
    }
}

#[derive(Default)]
pub struct RecordingCloser {
    pub closed: Vec<ScreenId>,
}

impl ScreenCloser for RecordingCloser {
    fn close_screen(&mut self, screen: ScreenId) {
        self.closed.push(screen);
    }
}
