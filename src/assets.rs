//! Asset loading
//!
//! Everything lives under `assets/` relative to the working directory: one
//! spritesheet the whole game draws from, two effect sounds, and two music
//! loops. All of it is loaded up front; a missing file is fatal at startup
//! (the caller prints the error and exits).

use macroquad::audio::{load_sound, Sound};
use macroquad::prelude::*;

const SPRITESHEET: &str = "assets/spritesheet_jumper.png";
const JUMP_SOUND: &str = "assets/jump.wav";
const BOOST_SOUND: &str = "assets/boost.wav";
const GAMEPLAY_MUSIC: &str = "assets/happy_tune.wav";
const MENU_MUSIC: &str = "assets/yippee.wav";

pub struct Assets {
    pub spritesheet: Texture2D,
    pub jump_sound: Sound,
    pub boost_sound: Sound,
    /// Looping track for the playing screen
    pub gameplay_music: Sound,
    /// Looping track for the start and game-over screens
    pub menu_music: Sound,
}

impl Assets {
    /// Load every asset the game needs.
    pub async fn load() -> Result<Assets, macroquad::Error> {
        let spritesheet = load_texture(SPRITESHEET).await?;
        // Pixel art: no smoothing when scaled
        spritesheet.set_filter(FilterMode::Nearest);

        Ok(Assets {
            spritesheet,
            jump_sound: load_sound(JUMP_SOUND).await?,
            boost_sound: load_sound(BOOST_SOUND).await?,
            gameplay_music: load_sound(GAMEPLAY_MUSIC).await?,
            menu_music: load_sound(MENU_MUSIC).await?,
        })
    }
}
