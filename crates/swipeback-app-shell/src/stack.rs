//! Host-owned screen registry.
//!
//! Screens are kept in push order; the last entry is on top. Dismissal
//! surfaces refer back to entries only by [`ScreenId`].

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use swipeback_animation::ScreenTransition;
use swipeback_ui::{ContentRef, DismissalSurface, Screen, ScreenHost, ScreenId};

pub struct ScreenEntry {
    id: ScreenId,
    root: Option<ContentRef>,
    surface: Option<Rc<RefCell<DismissalSurface>>>,
    opened: bool,
}

impl ScreenEntry {
    pub(crate) fn new(id: ScreenId, content: ContentRef) -> Self {
        Self {
            id,
            root: Some(content),
            surface: None,
            opened: false,
        }
    }

    pub fn id(&self) -> ScreenId {
        self.id
    }

    pub fn root(&self) -> Option<&ContentRef> {
        self.root.as_ref()
    }

    pub fn surface(&self) -> Option<&Rc<RefCell<DismissalSurface>>> {
        self.surface.as_ref()
    }

    pub(crate) fn set_surface(&mut self, surface: Rc<RefCell<DismissalSurface>>) {
        self.surface = Some(surface);
    }

    pub fn is_opened(&self) -> bool {
        self.opened
    }
}

impl Screen for ScreenEntry {
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

/// Transitions kept for inspection; older ones are dropped.
pub const TRANSITION_HISTORY: usize = 32;

/// A transition being played, with the time it has run for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveTransition {
    pub transition: ScreenTransition,
    pub elapsed_ms: u64,
}

#[derive(Default)]
pub struct StackHost {
    screens: IndexMap<ScreenId, ScreenEntry>,
    active: Option<ActiveTransition>,
    played: Vec<ScreenTransition>,
}

impl StackHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, entry: ScreenEntry) {
        self.screens.insert(entry.id, entry);
    }

    pub fn get(&self, id: ScreenId) -> Option<&ScreenEntry> {
        self.screens.get(&id)
    }

    pub fn contains(&self, id: ScreenId) -> bool {
        self.screens.contains_key(&id)
    }

    pub fn top(&self) -> Option<&ScreenEntry> {
        self.screens.last().map(|(_, entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    pub fn surfaces(&self) -> Vec<Rc<RefCell<DismissalSurface>>> {
        self.screens
            .values()
            .filter_map(|entry| entry.surface.clone())
            .collect()
    }

    pub fn active_transition(&self) -> Option<ActiveTransition> {
        self.active
    }

    /// The last [`TRANSITION_HISTORY`] transitions played, oldest first.
    pub fn played_transitions(&self) -> &[ScreenTransition] {
        &self.played
    }

    pub(crate) fn advance_transition(&mut self, delta_ms: u64) {
        if let Some(active) = self.active.as_mut() {
            active.elapsed_ms = active.elapsed_ms.saturating_add(delta_ms);
            if active.transition.is_finished(active.elapsed_ms) {
                self.active = None;
            }
        }
    }
}

impl ScreenHost for StackHost {
    fn open(&mut self, screen: ScreenId) {
        match self.screens.get_mut(&screen) {
            Some(entry) => entry.opened = true,
            None => log::warn!("open requested for unregistered {screen}"),
        }
    }

    fn close(&mut self, screen: ScreenId) {
        if self.screens.shift_remove(&screen).is_none() {
            log::debug!("{screen} already closed");
        }
    }

    fn play_transition(&mut self, transition: ScreenTransition) {
        self.active = Some(ActiveTransition {
            transition,
            elapsed_ms: 0,
        });
        if self.played.len() == TRANSITION_HISTORY {
            self.played.remove(0);
        }
        self.played.push(transition);
    }
}
