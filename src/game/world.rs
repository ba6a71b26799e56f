//! Game World
//!
//! The world owns the player, one arena per entity kind, and the session
//! state (score, mob spawn timer, simulation clock). `update` advances the
//! whole simulation by exactly one fixed tick; the step order matters
//! because later steps read positions written by earlier ones.
//!
//! The world never touches the window, audio, or wall clock, so the entire
//! simulation runs headless under tests with a seeded RNG.

use macroquad::math::Rect;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::arena::{Arena, Handle};
use super::config::*;
use super::event::{Events, SoundCue};
use super::mob::Mob;
use super::platform::Platform;
use super::player::Player;
use super::powerup::{PowerUp, PowerUpKind};
use super::sprite::Sprite;

/// Movement keys plus the jump edges, sampled once per tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Jump key went down this tick
    pub jump_pressed: bool,
    /// Jump key came up this tick
    pub jump_released: bool,
}

/// What one tick decided about the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// Terminal condition fired: mob contact or platform exhaustion
    GameOver,
}

/// One entry of the layer-ordered render list.
#[derive(Debug, Clone, Copy)]
pub struct DrawItem {
    pub sprite: Sprite,
    pub rect: Rect,
    pub layer: i32,
    pub flip_x: bool,
}

/// Per-session bookkeeping, reset on every new game.
pub struct Session {
    /// Monotone non-decreasing score
    pub score: u32,
    /// Simulation time of the last mob spawn (ms)
    pub mob_timer: f64,
}

pub struct World {
    pub player: Player,
    pub platforms: Arena<Platform>,
    pub powerups: Arena<PowerUp>,
    pub mobs: Arena<Mob>,
    pub session: Session,
    pub events: Events,
    clock_ms: f64,
    rng: StdRng,
}

impl World {
    /// Fresh session with entropy-seeded randomness.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Fresh session with deterministic randomness (tests, replays).
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        let mut world = Self {
            player: Player::new(),
            platforms: Arena::new(),
            powerups: Arena::new(),
            mobs: Arena::new(),
            session: Session {
                score: 0,
                mob_timer: 0.0,
            },
            events: Events::new(),
            clock_ms: 0.0,
            rng,
        };
        for (x, y) in PLATFORM_SEEDS {
            world.spawn_platform(x, y);
        }
        world
    }

    /// Simulation time in milliseconds (ticks * TICK_MS).
    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    /// Insert a platform, rolling for an attached power-up.
    pub fn spawn_platform(&mut self, x: f32, y: f32) -> Handle {
        let platform = Platform::new(x, y, &mut self.rng);
        let rect = platform.rect;
        let handle = self.platforms.insert(platform);
        if self.rng.gen_range(0..100u32) < POW_SPAWN_PCT {
            self.powerups.insert(PowerUp::new(handle, &rect));
        }
        handle
    }

    /// Advance the simulation by one fixed tick.
    pub fn update(&mut self, input: TickInput) -> TickOutcome {
        self.clock_ms += TICK_MS;

        // Discrete jump edges arrive with the snapshot
        if input.jump_pressed {
            self.try_jump();
        }
        if input.jump_released {
            self.player.jump_cut();
        }

        // 1. every entity moves exactly once
        self.player.update(self.clock_ms, input.left, input.right);
        for (_, mob) in self.mobs.iter_mut() {
            mob.update();
        }
        self.mobs.retain(|_, mob| !mob.offscreen());
        self.update_powerups();

        // 2. time-based mob spawning
        self.spawn_mobs();

        // 3. touching a mob ends the session outright (the mob survives)
        let player_rect = self.player.rect;
        if self.mobs.iter().any(|(_, mob)| mob.rect.overlaps(&player_rect)) {
            return TickOutcome::GameOver;
        }

        // 4. land on a platform, descending only
        self.resolve_landing();

        // 5. scroll the world while the player rides the top quarter
        self.scroll_world();

        // 6. power-up pickup
        self.collect_powerups();

        // 7. fell off the bottom: sweep the debris up and away
        self.sweep_after_fall();

        // 8. no ground left to land on
        let out_of_platforms = self.platforms.is_empty();

        // 9. keep the platform population topped up
        self.replenish_platforms();

        if out_of_platforms {
            return TickOutcome::GameOver;
        }
        TickOutcome::Continue
    }

    /// Jump if the ground probe finds a platform underfoot.
    pub fn try_jump(&mut self) {
        if self.player.jump(&self.platforms) {
            self.events.sounds.send(SoundCue::Jump);
        }
    }

    /// Layer-ordered render list, recomputed per frame. Sort is stable, so
    /// entities on the same layer keep their arena order.
    pub fn draw_list(&self) -> Vec<DrawItem> {
        let mut items = Vec::with_capacity(
            1 + self.platforms.len() + self.powerups.len() + self.mobs.len(),
        );
        for (_, plat) in self.platforms.iter() {
            items.push(DrawItem {
                sprite: plat.sprite,
                rect: plat.rect,
                layer: PLATFORM_LAYER,
                flip_x: false,
            });
        }
        for (_, pow) in self.powerups.iter() {
            items.push(DrawItem {
                sprite: pow.sprite(),
                rect: pow.rect,
                layer: POW_LAYER,
                flip_x: false,
            });
        }
        for (_, mob) in self.mobs.iter() {
            items.push(DrawItem {
                sprite: mob.sprite(),
                rect: mob.rect,
                layer: MOB_LAYER,
                flip_x: false,
            });
        }
        items.push(DrawItem {
            sprite: self.player.sprite(),
            rect: self.player.rect,
            layer: PLAYER_LAYER,
            flip_x: self.player.flip_x,
        });
        items.sort_by_key(|item| item.layer);
        items
    }

    // =========================================================================
    // Tick steps
    // =========================================================================

    /// Power-ups ride their platform and vanish with it.
    fn update_powerups(&mut self) {
        let platforms = &self.platforms;
        self.powerups.retain(|_, pow| match platforms.get(pow.platform) {
            Some(plat) => {
                pow.attach_to(&plat.rect);
                true
            }
            None => false,
        });
    }

    /// Spawn a mob when the interval (plus jitter) has elapsed.
    fn spawn_mobs(&mut self) {
        let jitter = MOB_FREQ_JITTER_MS[self.rng.gen_range(0..MOB_FREQ_JITTER_MS.len())];
        if self.clock_ms - self.session.mob_timer > MOB_FREQ_MS + jitter {
            self.session.mob_timer = self.clock_ms;
            let mob = Mob::new(&mut self.rng);
            self.mobs.insert(mob);
        }
    }

    /// Of all platforms overlapping a descending player, pick the one with
    /// the greatest bottom edge (nearest the feet; ties keep the first).
    /// Landing additionally needs the player inside a 10 px horizontal
    /// tolerance band and strictly above the platform's vertical center,
    /// so passing through from below or beside doesn't snap.
    fn resolve_landing(&mut self) {
        if self.player.vel.y <= 0.0 {
            return;
        }

        let player_rect = self.player.rect;
        let mut lowest: Option<Rect> = None;
        for (_, plat) in self.platforms.iter() {
            if plat.rect.overlaps(&player_rect) {
                let lower = lowest.map_or(true, |r| plat.rect.bottom() > r.bottom());
                if lower {
                    lowest = Some(plat.rect);
                }
            }
        }

        if let Some(rect) = lowest {
            let in_band = self.player.pos.x > rect.left() - 10.0
                && self.player.pos.x < rect.right() + 10.0;
            let above_center = self.player.pos.y < rect.y + rect.h / 2.0;
            if in_band && above_center {
                self.player.pos.y = rect.top();
                self.player.vel.y = 0.0;
                self.player.jumping = false;
            }
        }
    }

    /// The world scrolls instead of a camera: when the player's top edge
    /// reaches the top quarter, push everything down at a rate tied to the
    /// player's upward speed (floor of 2). Platforms pushed off the bottom
    /// are removed and score.
    fn scroll_world(&mut self) {
        if self.player.rect.top() > HEIGHT / 4.0 {
            return;
        }

        let shift = self.player.vel.y.abs().max(2.0);
        self.player.pos.y += shift;
        for (_, mob) in self.mobs.iter_mut() {
            mob.rect.y += shift;
        }
        for (_, plat) in self.platforms.iter_mut() {
            plat.rect.y += shift;
        }

        let mut scrolled_off = 0u32;
        self.platforms.retain(|_, plat| {
            if plat.rect.top() >= HEIGHT {
                scrolled_off += 1;
                false
            } else {
                true
            }
        });
        self.session.score += SCORE_PER_PLATFORM * scrolled_off;
    }

    /// Overlapping power-ups are collected unconditionally; the effect
    /// depends on the kind.
    fn collect_powerups(&mut self) {
        let player_rect = self.player.rect;
        let mut boosted = false;
        self.powerups.retain(|_, pow| {
            if pow.rect.overlaps(&player_rect) {
                if pow.kind == PowerUpKind::Boost {
                    boosted = true;
                }
                false
            } else {
                true
            }
        });

        if boosted {
            self.events.sounds.send(SoundCue::Boost);
            self.player.vel.y = -BOOST_POWER;
            self.player.jumping = false;
        }
    }

    /// Once the player drops below the bottom edge, shift the remaining
    /// entities upward each tick and cull what leaves the top. The session
    /// actually ends when the last platform is gone, not here.
    fn sweep_after_fall(&mut self) {
        if self.player.rect.bottom() <= HEIGHT {
            return;
        }

        let shift = self.player.vel.y.max(10.0);
        for (_, plat) in self.platforms.iter_mut() {
            plat.rect.y -= shift;
        }
        for (_, pow) in self.powerups.iter_mut() {
            pow.rect.y -= shift;
        }
        for (_, mob) in self.mobs.iter_mut() {
            mob.rect.y -= shift;
        }
        self.platforms.retain(|_, plat| plat.rect.bottom() >= 0.0);
        self.powerups.retain(|_, pow| pow.rect.bottom() >= 0.0);
        self.mobs.retain(|_, mob| mob.rect.bottom() >= 0.0);
    }

    /// Top the platform count back up to the target, spawning just above
    /// the visible top so new platforms scroll into view.
    fn replenish_platforms(&mut self) {
        while self.platforms.len() < PLATFORM_TARGET {
            let width = self.rng.gen_range(50..100);
            let x = self.rng.gen_range(0..(WIDTH as i32 - width)) as f32;
            let y = self.rng.gen_range(-75..-30) as f32;
            self.spawn_platform(x, y);
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
