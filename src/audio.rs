//! Audio playback
//!
//! Thin wrapper over macroquad's audio: fire-and-forget effect cues from
//! the simulation's event queue, plus one looping music track per screen
//! with a stop-on-transition policy.

use macroquad::audio::{play_sound, play_sound_once, stop_sound, PlaySoundParams, Sound};

use crate::assets::Assets;
use crate::game::SoundCue;

const MUSIC_VOLUME: f32 = 0.6;

/// Which looping track a screen plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicTrack {
    /// Start and game-over screens
    Menu,
    /// The playing screen
    Gameplay,
}

/// Owns whichever track is currently looping so transitions can stop it.
pub struct Jukebox {
    current: Option<Sound>,
}

impl Jukebox {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Stop the current loop and start the given track.
    pub fn play_track(&mut self, assets: &Assets, track: MusicTrack) {
        self.stop();
        let sound = match track {
            MusicTrack::Menu => &assets.menu_music,
            MusicTrack::Gameplay => &assets.gameplay_music,
        };
        play_sound(
            sound,
            PlaySoundParams {
                looped: true,
                volume: MUSIC_VOLUME,
            },
        );
        self.current = Some(sound.clone());
    }

    /// Stop the music, if any is playing.
    pub fn stop(&mut self) {
        if let Some(sound) = self.current.take() {
            stop_sound(&sound);
        }
    }

    /// Fire-and-forget effect playback.
    pub fn play_cue(&self, assets: &Assets, cue: SoundCue) {
        match cue {
            SoundCue::Jump => play_sound_once(&assets.jump_sound),
            SoundCue::Boost => play_sound_once(&assets.boost_sound),
        }
    }
}

impl Default for Jukebox {
    fn default() -> Self {
        Self::new()
    }
}
