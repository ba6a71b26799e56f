//! Mobs
//!
//! Hazard entities that spawn along the top of the screen and descend at a
//! constant per-instance speed while wobbling horizontally. The wobble is
//! a drift velocity that accelerates until it passes +/-3, at which point
//! the drift acceleration flips sign. The wing pose follows the drift
//! acceleration's sign (cosmetic only).

use macroquad::math::Rect;
use rand::Rng;

use super::config::WIDTH;
use super::sprite::Sprite;

/// How far past the screen edges a mob may live
const OFFSCREEN_MARGIN: f32 = 100.0;

/// Drift velocity magnitude at which the wobble reverses
const DRIFT_LIMIT: f32 = 3.0;

pub struct Mob {
    pub rect: Rect,
    /// Constant descent speed
    pub vy: f32,
    /// Horizontal drift velocity, bounded to [-3, 3]
    pub vx: f32,
    /// Drift acceleration, sign flips at the bounds
    pub dx: f32,
}

impl Mob {
    /// Spawn somewhere in the left half of the screen, at the top bound,
    /// with a random descent speed. The wobble never carries a mob more
    /// than a couple dozen pixels from its spawn column, so the spawn
    /// range is what decides where mobs threaten.
    pub fn new(rng: &mut impl Rng) -> Self {
        // Drift acceleration starts positive, so the spawn pose is wings-down
        let size = Sprite::MobWingsDown.size();
        let x = rng.gen_range(0..(WIDTH as i32 / 2)) as f32;
        Self {
            rect: Rect::new(x, 0.0, size.x, size.y),
            vy: rng.gen_range(1..4) as f32,
            vx: 0.0,
            dx: 0.5,
        }
    }

    pub fn update(&mut self) {
        self.rect.y += self.vy;

        self.vx += self.dx;
        if self.vx > DRIFT_LIMIT || self.vx < -DRIFT_LIMIT {
            self.dx = -self.dx;
        }

        // Pose swap recenters the rect since the two cells differ in size
        let center_x = self.rect.x + self.rect.w / 2.0;
        let center_y = self.rect.y + self.rect.h / 2.0;
        let size = self.sprite().size();
        self.rect = Rect::new(
            center_x - size.x / 2.0,
            center_y - size.y / 2.0,
            size.x,
            size.y,
        );

        self.rect.x += self.vx;
    }

    pub fn sprite(&self) -> Sprite {
        if self.dx < 0.0 {
            Sprite::MobWingsUp
        } else {
            Sprite::MobWingsDown
        }
    }

    /// Fully outside the horizontal bounds, margin included.
    pub fn offscreen(&self) -> bool {
        self.rect.left() > WIDTH + OFFSCREEN_MARGIN || self.rect.right() < -OFFSCREEN_MARGIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawns_in_left_half() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let mob = Mob::new(&mut rng);
            assert!(mob.rect.x >= 0.0 && mob.rect.x < WIDTH / 2.0);
            assert_eq!(mob.rect.y, 0.0);
            assert!(mob.vy >= 1.0 && mob.vy <= 3.0);
            assert!(!mob.offscreen());
        }
    }

    #[test]
    fn test_crosses_the_visible_field() {
        use crate::game::config::HEIGHT;

        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let mut mob = Mob::new(&mut rng);
            let mut seen = false;
            while mob.rect.top() < HEIGHT && !mob.offscreen() {
                if mob.rect.right() > 0.0 && mob.rect.left() < WIDTH {
                    seen = true;
                }
                mob.update();
            }
            assert!(seen, "every mob passes through the visible screen band");
        }
    }

    #[test]
    fn test_drift_stays_bounded() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut mob = Mob::new(&mut rng);
        let mut saw_reversal = false;
        let mut prev_dx = mob.dx;

        for _ in 0..200 {
            mob.update();
            assert!(mob.vx.abs() <= DRIFT_LIMIT + 0.5);
            if mob.dx != prev_dx {
                saw_reversal = true;
            }
            prev_dx = mob.dx;
        }
        assert!(saw_reversal);
    }

    #[test]
    fn test_descends_every_tick() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut mob = Mob::new(&mut rng);
        let y0 = mob.rect.y;
        mob.update();
        assert_eq!(mob.rect.y, y0 + mob.vy);
    }

    #[test]
    fn test_offscreen_margin() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut mob = Mob::new(&mut rng);

        mob.rect.x = WIDTH + 101.0;
        assert!(mob.offscreen());

        mob.rect.x = -100.0 - mob.rect.w - 1.0;
        assert!(mob.offscreen());

        mob.rect.x = WIDTH / 2.0;
        assert!(!mob.offscreen());
    }
}
