//! Sprite loading
//!
//! The one error boundary in the game. A missing image file is converted
//! into a warning plus a "no image" slot at the load site; nothing here
//! ever stops the loop. With zero animal sprites on disk the game still
//! runs, just with an empty herd.

use macroquad::prelude::*;
use thiserror::Error;

use crate::config::{ANIMAL_SPRITES, PLAYER_SPRITE};

/// A sprite file that could not be loaded or decoded
#[derive(Debug, Error)]
#[error("could not load sprite '{path}': {reason}")]
pub struct AssetError {
    pub path: String,
    pub reason: String,
}

/// Load a single sprite from a fixed asset path.
pub async fn load_sprite(path: &str) -> Result<Texture2D, AssetError> {
    match load_texture(path).await {
        Ok(texture) => {
            texture.set_filter(FilterMode::Linear);
            Ok(texture)
        }
        Err(e) => Err(AssetError {
            path: path.to_string(),
            reason: e.to_string(),
        }),
    }
}

/// All textures the game draws. The player slot may be empty and the
/// animal list may hold any subset of the known variants.
pub struct Sprites {
    pub player: Option<Texture2D>,
    pub animals: Vec<Texture2D>,
}

impl Sprites {
    /// Load everything from the fixed asset paths, degrading per file.
    pub async fn load() -> Self {
        let player = match load_sprite(PLAYER_SPRITE).await {
            Ok(texture) => Some(texture),
            Err(e) => {
                println!("{}, the player will not be drawn", e);
                None
            }
        };

        let mut animals = Vec::new();
        for path in ANIMAL_SPRITES {
            match load_sprite(path).await {
                Ok(texture) => animals.push(texture),
                Err(e) => println!("{}, continuing without it", e),
            }
        }

        if animals.is_empty() {
            println!("No animal sprites loaded, no targets will appear");
        }

        Sprites { player, animals }
    }
}
