//! Jumpy: a small vertical-scrolling platformer.
//!
//! Bounce between procedurally recycled platforms, dodge the mobs, grab
//! the boosts. The simulation runs on a fixed 60 Hz timestep under
//! `src/game/`; everything here is presentation glue.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod assets;
mod audio;
mod game;
mod input;
mod render;
mod scene;
mod storage;

use macroquad::prelude::*;

use assets::Assets;
use audio::{Jukebox, MusicTrack};
use game::config::{HEIGHT, TICK_MS, TITLE, WIDTH};
use game::{TickOutcome, World};
use scene::Screen;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("{TITLE} v{VERSION}"),
        window_width: WIDTH as i32,
        window_height: HEIGHT as i32,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    // Missing assets are fatal; there is nothing sensible to fall back to
    let assets = match Assets::load().await {
        Ok(assets) => assets,
        Err(e) => {
            eprintln!("Failed to load assets: {e}");
            std::process::exit(1);
        }
    };

    let high_score_file = storage::high_score_path();
    let mut high_score = storage::load_high_score(&high_score_file);
    println!("High score: {high_score}");

    let mut jukebox = Jukebox::new();
    let mut screen = Screen::Start;
    let mut world = World::new();
    let mut final_score = 0u32;
    let mut new_high_score = false;
    let mut accumulator = 0.0f64;
    let mut latch = input::EdgeLatch::default();

    // Route window-close through the quit signal so music stops cleanly
    prevent_quit();
    jukebox.play_track(&assets, MusicTrack::Menu);

    loop {
        let snapshot = input::poll();
        if snapshot.quit {
            break;
        }

        match screen {
            Screen::Start => {
                scene::draw_start_screen(high_score);
                if snapshot.any_key_released {
                    world = World::new();
                    accumulator = 0.0;
                    latch = input::EdgeLatch::default();
                    jukebox.play_track(&assets, MusicTrack::Gameplay);
                    screen = Screen::Playing;
                }
            }

            Screen::Playing => {
                // Fixed timestep: run as many whole ticks as the frame owes.
                // Jump edges are latched so a frame that owes no ticks
                // doesn't drop them; the first tick consumes them.
                accumulator += get_frame_time() as f64 * 1000.0;
                latch.absorb(&snapshot);
                let mut outcome = TickOutcome::Continue;
                while accumulator >= TICK_MS && outcome == TickOutcome::Continue {
                    accumulator -= TICK_MS;
                    outcome = world.update(latch.take_tick_input(&snapshot));
                }

                for cue in world.events.sounds.drain() {
                    jukebox.play_cue(&assets, cue);
                }

                render::draw_world(&assets, &world);

                if outcome == TickOutcome::GameOver {
                    final_score = world.session.score;
                    new_high_score = final_score > high_score;
                    if new_high_score {
                        high_score = final_score;
                        if let Err(e) = storage::save_high_score(&high_score_file, high_score) {
                            eprintln!("Failed to save high score: {e}");
                        }
                    }
                    jukebox.play_track(&assets, MusicTrack::Menu);
                    screen = Screen::GameOver;
                }
            }

            Screen::GameOver => {
                scene::draw_game_over_screen(final_score, high_score, new_high_score);
                if snapshot.any_key_released {
                    world = World::new();
                    accumulator = 0.0;
                    latch = input::EdgeLatch::default();
                    jukebox.play_track(&assets, MusicTrack::Gameplay);
                    screen = Screen::Playing;
                }
            }
        }

        next_frame().await;
    }

    jukebox.stop();
}
