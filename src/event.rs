//! Carousel lifecycle events and listener dispatch.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Event emitted by the engine on the control context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CarouselEvent {
    /// Active index changed (settle completion or programmatic navigation)
    IndexChanged { index: usize },
    /// A drag crossed the activation threshold
    ScrollStart,
    /// A gesture, fling or animated navigation settled
    ScrollEnd { index: usize },
    /// Auto-play started
    AutoPlayStarted,
    /// Auto-play stopped
    AutoPlayStopped,
    /// The engine was destroyed
    Destroyed,
}

impl CarouselEvent {
    /// The discriminant of this event
    #[inline]
    pub fn event_type(&self) -> EventType {
        match self {
            Self::IndexChanged { .. } => EventType::IndexChanged,
            Self::ScrollStart => EventType::ScrollStart,
            Self::ScrollEnd { .. } => EventType::ScrollEnd,
            Self::AutoPlayStarted => EventType::AutoPlayStarted,
            Self::AutoPlayStopped => EventType::AutoPlayStopped,
            Self::Destroyed => EventType::Destroyed,
        }
    }
}

/// Event discriminant used for listener filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    IndexChanged,
    ScrollStart,
    ScrollEnd,
    AutoPlayStarted,
    AutoPlayStopped,
    Destroyed,
}

impl EventType {
    /// Get the name of this event type
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::IndexChanged => "index_changed",
            Self::ScrollStart => "scroll_start",
            Self::ScrollEnd => "scroll_end",
            Self::AutoPlayStarted => "auto_play_started",
            Self::AutoPlayStopped => "auto_play_stopped",
            Self::Destroyed => "destroyed",
        }
    }
}

type Listener = Box<dyn FnMut(&CarouselEvent)>;

/// Synchronous event dispatcher with id-keyed subscriptions
pub struct EventDispatcher {
    listeners: Vec<(u64, Option<EventType>, Listener)>,
    next_id: u64,
}

impl EventDispatcher {
    /// Create an empty dispatcher
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Subscribe a listener, optionally filtered to one event type.
    /// Returns an id for later unsubscription.
    pub fn subscribe(
        &mut self,
        filter: Option<EventType>,
        listener: impl FnMut(&CarouselEvent) + 'static,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, filter, Box::new(listener)));
        id
    }

    /// Remove a listener by id. Returns whether a listener was removed.
    pub fn unsubscribe(&mut self, id: u64) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Dispatch an event to every matching listener in subscription order
    pub fn dispatch(&mut self, event: &CarouselEvent) {
        let event_type = event.event_type();
        for (_, filter, listener) in &mut self.listeners {
            if filter.map_or(true, |f| f == event_type) {
                listener(event);
            }
        }
    }

    /// Number of subscribed listeners
    #[inline]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listeners are subscribed
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Drop all listeners
    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
