//! Game Events
//!
//! The simulation never talks to the audio backend directly. It pushes
//! sound cues into a queue during the tick and the presentation layer
//! drains them once per frame, fire-and-forget.

/// A queue for events of a single type.
/// Events are collected during the tick and drained at specific points.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    /// Check if there are any events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of events in queue
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Clear all events without processing
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A discrete sound effect trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Player left the ground
    Jump,
    /// Player collected a boost power-up
    Boost,
}

/// Container for all queues the world emits into.
pub struct Events {
    pub sounds: EventQueue<SoundCue>,
}

impl Events {
    pub fn new() -> Self {
        Self {
            sounds: EventQueue::new(),
        }
    }

    /// Clear every queue. Call when discarding a session.
    pub fn clear_all(&mut self) {
        self.sounds.clear();
    }
}

impl Default for Events {
    fn default() -> Self {
        Self::new()
    }
}
