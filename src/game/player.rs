//! Player
//!
//! Acceleration-based horizontal movement with exponential friction
//! damping, re-applied (not accumulated) gravity, variable-height jumps,
//! and a small walk/idle animation state machine.
//!
//! The bounding box is anchored mid-bottom on `pos`, so swapping animation
//! frames of different sizes keeps the feet planted.

use macroquad::math::{vec2, Rect, Vec2};

use super::arena::Arena;
use super::config::*;
use super::platform::Platform;
use super::sprite::Sprite;

const STAND_FRAMES: [Sprite; 2] = [Sprite::PlayerStand0, Sprite::PlayerStand1];
const WALK_FRAMES: [Sprite; 2] = [Sprite::PlayerWalk0, Sprite::PlayerWalk1];

pub struct Player {
    /// Mid-bottom anchor point (feet position)
    pub pos: Vec2,
    pub vel: Vec2,
    pub acc: Vec2,
    /// Bounding box, recomputed from `pos` and the current frame each tick
    pub rect: Rect,
    pub jumping: bool,
    pub walking: bool,
    /// Mirror the sprite horizontally (walking left)
    pub flip_x: bool,
    sprite: Sprite,
    current_frame: usize,
    last_frame_ms: f64,
}

impl Player {
    pub fn new() -> Self {
        let mut player = Self {
            pos: vec2(40.0, HEIGHT - 100.0),
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            rect: Rect::new(0.0, 0.0, 0.0, 0.0),
            jumping: false,
            walking: false,
            flip_x: false,
            sprite: STAND_FRAMES[0],
            current_frame: 0,
            last_frame_ms: 0.0,
        };
        player.sync_rect();
        player
    }

    /// The animation frame currently shown.
    pub fn sprite(&self) -> Sprite {
        self.sprite
    }

    /// One full tick: animation, input, then motion integration.
    pub fn update(&mut self, now_ms: f64, left: bool, right: bool) {
        self.animate(now_ms);
        self.apply_input(left, right);
        self.integrate();
    }

    /// Reset acceleration to gravity and apply the movement keys.
    /// Both keys held cancel out, same as neither.
    pub fn apply_input(&mut self, left: bool, right: bool) {
        self.acc = vec2(0.0, PLAYER_GRAV);
        if left && !right {
            self.acc.x = -PLAYER_ACC;
        }
        if right && !left {
            self.acc.x = PLAYER_ACC;
        }
    }

    /// Equations of motion for one tick. `apply_input` must run first so
    /// gravity is fresh rather than accumulated.
    pub fn integrate(&mut self) {
        // Friction damps horizontal speed exponentially
        self.acc.x += self.vel.x * PLAYER_FRICTION;
        self.vel += self.acc;
        // Dead-zone so friction can actually bring us to a stop
        if self.vel.x.abs() < PLAYER_DEAD_ZONE {
            self.vel.x = 0.0;
        }
        self.pos += self.vel + 0.5 * self.acc;

        // Wrap around the sides of the screen
        let half_w = self.rect.w / 2.0;
        if self.pos.x > WIDTH + half_w {
            self.pos.x = -half_w;
        }
        if self.pos.x < -half_w {
            self.pos.x = WIDTH + half_w;
        }

        self.sync_rect();
    }

    /// Jump, but only when standing on a platform: probe by nudging the
    /// bounding box 2 px down and testing overlap, then restoring it.
    /// Returns true if the jump happened (caller emits the sound cue).
    pub fn jump(&mut self, platforms: &Arena<Platform>) -> bool {
        let mut probe = self.rect;
        probe.y += 2.0;
        let grounded = platforms.iter().any(|(_, plat)| probe.overlaps(&plat.rect));

        if grounded && !self.jumping {
            self.jumping = true;
            self.vel.y = -PLAYER_JUMP;
            self.set_frame(Sprite::PlayerJump);
            true
        } else {
            false
        }
    }

    /// Variable jump height: releasing the jump key early truncates upward
    /// velocity. Never touches descent.
    pub fn jump_cut(&mut self) {
        if self.jumping && self.vel.y < -3.0 {
            self.vel.y = -3.0;
        }
    }

    /// Walk/idle frame cycling on a timer (180 ms walking, 350 ms idle).
    fn animate(&mut self, now_ms: f64) {
        self.walking = self.vel.x != 0.0;

        if self.walking && now_ms - self.last_frame_ms > WALK_FRAME_MS {
            self.last_frame_ms = now_ms;
            self.current_frame = (self.current_frame + 1) % WALK_FRAMES.len();
            self.flip_x = self.vel.x < 0.0;
            self.set_frame(WALK_FRAMES[self.current_frame]);
        }

        if !self.jumping && !self.walking && now_ms - self.last_frame_ms > IDLE_FRAME_MS {
            self.last_frame_ms = now_ms;
            self.current_frame = (self.current_frame + 1) % STAND_FRAMES.len();
            self.flip_x = false;
            self.set_frame(STAND_FRAMES[self.current_frame]);
        }
    }

    fn set_frame(&mut self, sprite: Sprite) {
        self.sprite = sprite;
        self.sync_rect();
    }

    /// Re-anchor the bounding box mid-bottom on `pos` with the current
    /// frame's size.
    fn sync_rect(&mut self) {
        let size = self.sprite.size();
        self.rect = Rect::new(self.pos.x - size.x / 2.0, self.pos.y - size.y, size.x, size.y);
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform_under(player: &Player) -> Arena<Platform> {
        let mut platforms = Arena::new();
        platforms.insert(Platform::from_parts(
            Rect::new(player.pos.x - 50.0, player.pos.y, 100.0, 20.0),
            Sprite::PlatformSmall,
        ));
        platforms
    }

    #[test]
    fn test_input_sets_acceleration() {
        let mut player = Player::new();

        player.apply_input(true, false);
        assert_eq!(player.acc.x, -PLAYER_ACC);
        assert_eq!(player.acc.y, PLAYER_GRAV);

        player.apply_input(false, true);
        assert_eq!(player.acc.x, PLAYER_ACC);

        // Both or neither cancel out
        player.apply_input(true, true);
        assert_eq!(player.acc.x, 0.0);
        player.apply_input(false, false);
        assert_eq!(player.acc.x, 0.0);
    }

    #[test]
    fn test_dead_zone_stops_drift() {
        let mut player = Player::new();
        player.vel.x = 0.05;
        player.apply_input(false, false);
        player.integrate();
        assert_eq!(player.vel.x, 0.0);
    }

    #[test]
    fn test_wrap_right_edge() {
        let mut player = Player::new();
        let half_w = player.rect.w / 2.0;
        player.pos.x = WIDTH + half_w + 1.0;
        player.apply_input(false, false);
        player.integrate();
        assert!(player.pos.x >= -half_w && player.pos.x < WIDTH + half_w);
        assert!(player.pos.x < WIDTH / 2.0, "should reappear on the left");
    }

    #[test]
    fn test_wrap_left_edge() {
        let mut player = Player::new();
        let half_w = player.rect.w / 2.0;
        player.pos.x = -half_w - 1.0;
        player.apply_input(false, false);
        player.integrate();
        assert!(player.pos.x > WIDTH / 2.0, "should reappear on the right");
    }

    #[test]
    fn test_jump_requires_ground() {
        let mut player = Player::new();
        let empty: Arena<Platform> = Arena::new();

        assert!(!player.jump(&empty));
        assert!(!player.jumping);
        assert_eq!(player.vel.y, 0.0);
    }

    #[test]
    fn test_jump_from_platform() {
        let mut player = Player::new();
        let platforms = platform_under(&player);

        assert!(player.jump(&platforms));
        assert!(player.jumping);
        assert_eq!(player.vel.y, -PLAYER_JUMP);

        // Already airborne: no double jump
        assert!(!player.jump(&platforms));
    }

    #[test]
    fn test_jump_cut_clamps_ascent() {
        let mut player = Player::new();
        player.jumping = true;
        player.vel.y = -20.0;
        player.jump_cut();
        assert_eq!(player.vel.y, -3.0);

        // Idempotent once at or above the clamp
        player.vel.y = -2.0;
        player.jump_cut();
        assert_eq!(player.vel.y, -2.0);
    }

    #[test]
    fn test_jump_cut_ignores_descent() {
        let mut player = Player::new();
        player.jumping = true;
        player.vel.y = 5.0;
        player.jump_cut();
        assert_eq!(player.vel.y, 5.0);
    }

    #[test]
    fn test_walk_animation_flips_with_direction() {
        let mut player = Player::new();
        player.vel.x = -2.0;
        player.animate(WALK_FRAME_MS + 1.0);
        assert!(player.walking);
        assert!(player.flip_x);
        assert!(WALK_FRAMES.contains(&player.sprite()));
    }

    #[test]
    fn test_idle_animation_cycles() {
        let mut player = Player::new();
        let first = player.sprite();
        player.animate(IDLE_FRAME_MS + 1.0);
        assert!(!player.walking);
        assert_ne!(player.sprite(), first);
        assert!(STAND_FRAMES.contains(&player.sprite()));
    }
}
