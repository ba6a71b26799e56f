//! Power-ups
//!
//! A power-up sits a fixed gap above its platform and holds a non-owning
//! [`Handle`] back to it. The world re-attaches it every tick and despawns
//! it as soon as the platform handle stops resolving, so a power-up never
//! outlives its platform by more than one tick.

use macroquad::math::Rect;

use super::arena::Handle;
use super::sprite::Sprite;

/// Gap between the platform top and the power-up's bottom edge
const PLATFORM_GAP: f32 = 5.0;

/// What collecting the power-up does. Single variant today; the world
/// matches on it so new kinds only need an arm there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    /// Launch the player upward much harder than a jump
    Boost,
}

pub struct PowerUp {
    pub rect: Rect,
    pub kind: PowerUpKind,
    /// The platform this power-up rides on (non-owning)
    pub platform: Handle,
}

impl PowerUp {
    pub fn new(platform: Handle, platform_rect: &Rect) -> Self {
        let size = Sprite::BoostPow.size();
        let mut pow = Self {
            rect: Rect::new(0.0, 0.0, size.x, size.y),
            kind: PowerUpKind::Boost,
            platform,
        };
        pow.attach_to(platform_rect);
        pow
    }

    /// Re-center above the platform's current top edge.
    pub fn attach_to(&mut self, platform_rect: &Rect) {
        self.rect.x = platform_rect.x + platform_rect.w / 2.0 - self.rect.w / 2.0;
        self.rect.y = platform_rect.y - PLATFORM_GAP - self.rect.h;
    }

    pub fn sprite(&self) -> Sprite {
        match self.kind {
            PowerUpKind::Boost => Sprite::BoostPow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::arena::Arena;

    #[test]
    fn test_sits_above_platform_center() {
        let mut arena: Arena<Rect> = Arena::new();
        let plat_rect = Rect::new(100.0, 400.0, 190.0, 47.0);
        let handle = arena.insert(plat_rect);

        let pow = PowerUp::new(handle, &plat_rect);
        let center_x = pow.rect.x + pow.rect.w / 2.0;
        assert_eq!(center_x, 195.0);
        assert_eq!(pow.rect.y + pow.rect.h, plat_rect.y - PLATFORM_GAP);
    }

    #[test]
    fn test_tracks_moved_platform() {
        let mut plat_rect = Rect::new(0.0, 100.0, 100.0, 50.0);
        let mut arena: Arena<Rect> = Arena::new();
        let handle = arena.insert(plat_rect);

        let mut pow = PowerUp::new(handle, &plat_rect);
        plat_rect.y += 40.0;
        pow.attach_to(&plat_rect);
        assert_eq!(pow.rect.y + pow.rect.h, plat_rect.y - PLATFORM_GAP);
    }
}
