//! Screens
//!
//! The top-level state machine: start screen, playing, game over. The
//! waiting screens are plain states polled by the same frame loop as
//! gameplay, not separate blocking loops.

use macroquad::prelude::*;

use crate::game::config::{HEIGHT, TITLE, WIDTH};
use crate::render::{draw_text_centered, BGCOLOR};

/// The top-level screens (fixed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Playing,
    GameOver,
}

/// Splash screen: title, controls, stored high score.
pub fn draw_start_screen(high_score: u32) {
    clear_background(BGCOLOR);
    draw_text_centered(TITLE, 48, WHITE, WIDTH / 2.0, HEIGHT / 4.0);
    draw_text_centered(
        "Arrows to move, Space to jump",
        22,
        WHITE,
        WIDTH / 2.0,
        HEIGHT / 2.0,
    );
    draw_text_centered(
        "Press a key to play",
        22,
        WHITE,
        WIDTH / 2.0,
        HEIGHT * 3.0 / 4.0,
    );
    draw_text_centered(
        &format!("High Score: {high_score}"),
        22,
        WHITE,
        WIDTH / 2.0,
        15.0,
    );
}

/// Game-over screen: final score, replay prompt, high-score line.
pub fn draw_game_over_screen(score: u32, high_score: u32, new_high_score: bool) {
    clear_background(BGCOLOR);
    draw_text_centered("GAME OVER", 48, WHITE, WIDTH / 2.0, HEIGHT / 4.0);
    draw_text_centered(&format!("Score: {score}"), 22, WHITE, WIDTH / 2.0, HEIGHT / 2.0);
    draw_text_centered(
        "Press a key to play again",
        22,
        WHITE,
        WIDTH / 2.0,
        HEIGHT * 3.0 / 4.0,
    );
    if new_high_score {
        draw_text_centered("NEW HIGH SCORE!", 22, WHITE, WIDTH / 2.0, HEIGHT / 2.0 + 40.0);
    } else {
        draw_text_centered(
            &format!("High Score: {high_score}"),
            22,
            WHITE,
            WIDTH / 2.0,
            HEIGHT / 2.0 + 40.0,
        );
    }
}
