//! Fixed tuning constants
//!
//! The game has no CLI flags or config file; everything that could vary
//! is pinned here. Positions and sizes are in screen pixels.

pub const SCREEN_WIDTH: f32 = 1366.0;
pub const SCREEN_HEIGHT: f32 = 768.0;

pub const PLAYER_WIDTH: f32 = 90.0;
pub const PLAYER_HEIGHT: f32 = 100.0;

/// Pixels moved per frame along each pressed axis
pub const PLAYER_SPEED: f32 = 8.0;

/// Animals use a square bounding box
pub const ANIMAL_SIZE: f32 = 50.0;

/// Herd size at startup
pub const ANIMAL_COUNT: usize = 20;

pub const PLAYER_SPRITE: &str = "assets/player.png";

/// Animal sprite variants; any subset may be missing on disk
pub const ANIMAL_SPRITES: [&str; 4] = [
    "assets/pig.png",
    "assets/dog.png",
    "assets/cow.png",
    "assets/sheep.png",
];

/// Frame cap: 60 iterations per second
pub const TARGET_FRAME_TIME: f64 = 1.0 / 60.0;

/// Baseline anchor for the elapsed-time readout (top-left corner)
pub const TIMER_ANCHOR: (f32, f32) = (10.0, 36.0);
pub const TIMER_FONT_SIZE: f32 = 36.0;
