//! Drawing
//!
//! Plays back the world's layer-ordered draw list against the spritesheet
//! and renders the HUD text. Text anchors at mid-top.

use macroquad::prelude::*;

use crate::assets::Assets;
use crate::game::config::WIDTH;
use crate::game::{DrawItem, World};

/// Background fill color
pub const BGCOLOR: Color = Color::new(0.0, 155.0 / 255.0, 155.0 / 255.0, 1.0);

/// Draw one frame of the playing screen.
pub fn draw_world(assets: &Assets, world: &World) {
    clear_background(BGCOLOR);
    for item in world.draw_list() {
        draw_sprite(assets, &item);
    }
    draw_text_centered(&world.session.score.to_string(), 22, WHITE, WIDTH / 2.0, 15.0);
}

fn draw_sprite(assets: &Assets, item: &DrawItem) {
    draw_texture_ex(
        &assets.spritesheet,
        item.rect.x,
        item.rect.y,
        WHITE,
        DrawTextureParams {
            source: Some(item.sprite.sheet_rect()),
            dest_size: Some(vec2(item.rect.w, item.rect.h)),
            flip_x: item.flip_x,
            ..Default::default()
        },
    );
}

/// Draw text with its top edge at `top_y`, horizontally centered on
/// `center_x`.
pub fn draw_text_centered(text: &str, size: u16, color: Color, center_x: f32, top_y: f32) {
    let dims = measure_text(text, None, size, 1.0);
    draw_text(
        text,
        center_x - dims.width / 2.0,
        top_y + dims.offset_y,
        size as f32,
        color,
    );
}
