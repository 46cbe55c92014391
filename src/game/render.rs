//! Render pass
//!
//! One strictly ordered immediate-mode pass per frame: background, animals,
//! player, timer. Animals are drawn before the player so the player occludes
//! anything it is standing on; the timer is drawn last so nothing covers it.

use macroquad::prelude::*;

use crate::assets::Sprites;
use crate::config::{ANIMAL_SIZE, PLAYER_HEIGHT, PLAYER_WIDTH, TIMER_ANCHOR, TIMER_FONT_SIZE};

use super::state::GameState;

/// Draw one frame of the current state. The caller presents the frame
/// afterwards with `next_frame()`.
pub fn draw_frame(state: &GameState, sprites: &Sprites, elapsed_secs: u64) {
    clear_background(WHITE);

    for animal in &state.animals {
        if let Some(texture) = sprites.animals.get(animal.sprite) {
            draw_texture_ex(
                texture,
                animal.x,
                animal.y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(ANIMAL_SIZE, ANIMAL_SIZE)),
                    ..Default::default()
                },
            );
        }
    }

    // Skipped gracefully when the sprite failed to load
    if let Some(texture) = &sprites.player {
        draw_texture_ex(
            texture,
            state.player.x,
            state.player.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(PLAYER_WIDTH, PLAYER_HEIGHT)),
                ..Default::default()
            },
        );
    }

    let (tx, ty) = TIMER_ANCHOR;
    draw_text(&format!("Time: {}", elapsed_secs), tx, ty, TIMER_FONT_SIZE, BLACK);
}
