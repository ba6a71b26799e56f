//! Platforms
//!
//! Passive horizontal surfaces. A platform never moves itself; the world
//! shifts its rect during scroll events and removes it when it leaves the
//! screen. The visual variant also decides the bounding box size.

use macroquad::math::Rect;
use rand::Rng;

use super::sprite::Sprite;

const VARIANTS: [Sprite; 2] = [Sprite::PlatformWide, Sprite::PlatformSmall];

pub struct Platform {
    pub rect: Rect,
    pub sprite: Sprite,
}

impl Platform {
    /// New platform at (x, y) with a random visual variant.
    pub fn new(x: f32, y: f32, rng: &mut impl Rng) -> Self {
        let sprite = VARIANTS[rng.gen_range(0..VARIANTS.len())];
        let size = sprite.size();
        Self {
            rect: Rect::new(x, y, size.x, size.y),
            sprite,
        }
    }

    /// Build from an explicit bounding box (test fixtures).
    pub fn from_parts(rect: Rect, sprite: Sprite) -> Self {
        Self { rect, sprite }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rect_matches_variant() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let plat = Platform::new(10.0, 20.0, &mut rng);
            assert_eq!(plat.rect.x, 10.0);
            assert_eq!(plat.rect.y, 20.0);
            let size = plat.sprite.size();
            assert_eq!(plat.rect.w, size.x);
            assert_eq!(plat.rect.h, size.y);
        }
    }
}
