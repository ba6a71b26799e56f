//! Sprite Metadata
//!
//! Every spritesheet cell the game draws, as a closed enum. Each variant
//! knows its source rectangle on the sheet and its on-screen size (half the
//! sheet cell - the art is authored at 2x).
//!
//! The simulation only ever reads sizes; the renderer reads source rects.
//! That keeps the update loop free of any texture handling.

use macroquad::math::{vec2, Rect, Vec2};

/// A drawable cell on the spritesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    PlayerStand0,
    PlayerStand1,
    PlayerWalk0,
    PlayerWalk1,
    PlayerJump,
    PlatformWide,
    PlatformSmall,
    BoostPow,
    MobWingsUp,
    MobWingsDown,
}

impl Sprite {
    /// Source cell on the spritesheet, in full-resolution sheet pixels.
    pub const fn sheet_rect(self) -> Rect {
        match self {
            Sprite::PlayerStand0 => cell(614.0, 1063.0, 120.0, 191.0),
            Sprite::PlayerStand1 => cell(690.0, 406.0, 120.0, 201.0),
            Sprite::PlayerWalk0 => cell(678.0, 860.0, 120.0, 201.0),
            Sprite::PlayerWalk1 => cell(692.0, 1458.0, 120.0, 207.0),
            Sprite::PlayerJump => cell(382.0, 763.0, 150.0, 181.0),
            Sprite::PlatformWide => cell(0.0, 288.0, 380.0, 94.0),
            Sprite::PlatformSmall => cell(213.0, 1662.0, 201.0, 100.0),
            Sprite::BoostPow => cell(820.0, 1805.0, 71.0, 70.0),
            Sprite::MobWingsUp => cell(566.0, 510.0, 122.0, 139.0),
            Sprite::MobWingsDown => cell(568.0, 1534.0, 122.0, 135.0),
        }
    }

    /// On-screen size: half the sheet cell, truncated to whole pixels.
    pub fn size(self) -> Vec2 {
        let src = self.sheet_rect();
        vec2((src.w / 2.0).floor(), (src.h / 2.0).floor())
    }
}

const fn cell(x: f32, y: f32, w: f32, h: f32) -> Rect {
    Rect { x, y, w, h }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes_are_half_resolution() {
        assert_eq!(Sprite::PlayerStand0.size(), vec2(60.0, 95.0));
        assert_eq!(Sprite::PlatformWide.size(), vec2(190.0, 47.0));
        assert_eq!(Sprite::PlatformSmall.size(), vec2(100.0, 50.0));
        assert_eq!(Sprite::BoostPow.size(), vec2(35.0, 35.0));
        // Odd cell heights truncate
        assert_eq!(Sprite::PlayerWalk1.size(), vec2(60.0, 103.0));
        assert_eq!(Sprite::MobWingsUp.size(), vec2(61.0, 69.0));
    }
}
