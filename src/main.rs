//! CORRAL: a keyboard-controlled therapeutic mini-game
//!
//! Steer the player sprite with the arrow keys and run into the animals to
//! round them up. Elapsed time is shown in the top-left corner. The game
//! runs until the window is closed; collecting every animal just leaves an
//! empty field.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod assets;
mod config;
mod game;
mod input;

use macroquad::prelude::*;

use assets::Sprites;
use config::{SCREEN_HEIGHT, SCREEN_WIDTH, TARGET_FRAME_TIME};
use game::{draw_frame, GameState};

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Corral v{}", VERSION),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Turn the window-close event into a pollable signal instead of an
    // immediate process exit, so the loop can stop on its own terms.
    prevent_quit();

    let sprites = Sprites::load().await;

    // Session clock origin: captured once, never reset
    let mut state = GameState::new(get_time(), sprites.animals.len());

    println!("=== CORRAL v{} ===", VERSION);

    while state.is_running() {
        // Track frame start time for FPS limiting
        let frame_start = get_time();

        if input::quit_requested() {
            state.stop();
            continue;
        }

        let intent = input::poll_intent();
        if !intent.is_idle() {
            state.move_player(intent.dx, intent.dy);
        }

        state.resolve_collisions();

        draw_frame(&state, &sprites, state.elapsed_secs(get_time()));

        // FPS limiting
        let elapsed = get_time() - frame_start;
        let remaining = TARGET_FRAME_TIME - elapsed;
        if remaining > 0.0 {
            // Native: use sleep for bulk, then spin-wait for precision
            #[cfg(not(target_arch = "wasm32"))]
            {
                let spin_margin = 0.002; // 2ms
                while get_time() - frame_start + spin_margin < TARGET_FRAME_TIME {
                    std::thread::sleep(std::time::Duration::from_millis(1));
                }
                // Spin-wait for precise timing
                while get_time() - frame_start < TARGET_FRAME_TIME {
                    std::hint::spin_loop();
                }
            }
            // WASM: just spin-wait (no thread::sleep available)
            #[cfg(target_arch = "wasm32")]
            {
                while get_time() - frame_start < TARGET_FRAME_TIME {
                    // Busy wait - browser will handle frame pacing
                }
            }
        }

        next_frame().await;
    }

    println!("Game over, thanks for playing!");
}
