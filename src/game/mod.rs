//! Game state and per-frame systems
//!
//! Everything the frame loop owns lives here: the player, the animal herd,
//! the session clock origin and the Running/Stopped phase. Collision is a
//! plain AABB scan over a small fixed list; rendering is a single ordered
//! immediate-mode pass.

pub mod collision;
pub mod render;
pub mod state;

pub use collision::Aabb;
pub use render::draw_frame;
pub use state::{Animal, GameState, Phase, Player};
