//! Game options and tuning constants.

pub const TITLE: &str = "Jumpy!";

/// World dimensions in pixels
pub const WIDTH: f32 = 480.0;
pub const HEIGHT: f32 = 600.0;

/// Fixed simulation timestep (60 ticks per second)
pub const TICK_MS: f64 = 1000.0 / 60.0;

// Player properties
pub const PLAYER_ACC: f32 = 0.5;
pub const PLAYER_FRICTION: f32 = -0.12;
pub const PLAYER_GRAV: f32 = 0.8;
pub const PLAYER_JUMP: f32 = 20.0;

/// Horizontal speed below which velocity snaps to zero
pub const PLAYER_DEAD_ZONE: f32 = 0.1;

// Animation frame periods
pub const WALK_FRAME_MS: f64 = 180.0;
pub const IDLE_FRAME_MS: f64 = 350.0;

// Game properties
pub const BOOST_POWER: f32 = 400.0;
/// Percent chance a new platform carries a power-up (rolled against 0..100)
pub const POW_SPAWN_PCT: u32 = 400;
pub const MOB_FREQ_MS: f64 = 5000.0;
pub const MOB_FREQ_JITTER_MS: [f64; 5] = [-1000.0, -500.0, 0.0, 500.0, 1000.0];

/// Score awarded per platform scrolled off the bottom of the screen
pub const SCORE_PER_PLATFORM: u32 = 10;

/// Minimum number of live platforms; the world replenishes up to this
pub const PLATFORM_TARGET: usize = 6;

// Draw layers (higher draws on top)
pub const PLAYER_LAYER: i32 = 2;
pub const PLATFORM_LAYER: i32 = 1;
pub const POW_LAYER: i32 = 1;
pub const MOB_LAYER: i32 = 2;

/// Starting platform positions for a fresh session
pub const PLATFORM_SEEDS: [(f32, f32); 5] = [
    (0.0, HEIGHT - 60.0),
    (WIDTH / 2.0 - 50.0, HEIGHT * 3.0 / 4.0 - 50.0),
    (125.0, HEIGHT - 350.0),
    (350.0, 200.0),
    (175.0, 100.0),
];
