//! Simulation Core
//!
//! Everything that happens between reading input and handing a draw list
//! to the renderer: player physics, platform/power-up/mob lifecycles,
//! collision resolution, world scrolling, and scoring.
//!
//! Key concepts:
//! - Arena + Handle: per-kind owning containers with generational indices
//! - World: the container for all entities plus session state
//! - Events: sound cues queued for the presentation layer
//!
//! Design philosophy:
//! - A closed set of entity kinds, no open-ended dynamic dispatch
//! - The world drives every entity; nothing calls back into the loop
//! - No wall clock, no I/O: fully deterministic under a seeded RNG

pub mod arena;
pub mod config;
pub mod event;
pub mod mob;
pub mod platform;
pub mod player;
pub mod powerup;
pub mod sprite;
pub mod world;

// Re-export main types
pub use arena::{Arena, Handle};
pub use event::{Events, SoundCue};
pub use player::Player;
pub use sprite::Sprite;
pub use world::{DrawItem, TickInput, TickOutcome, World};
