//! Game state
//!
//! Everything the frame loop owns: the player, the animal herd, the
//! Running/Stopped phase and the session clock origin. All mutation goes
//! through methods here so the loop body stays a straight-line script.

use rand::Rng;

use crate::config::{
    ANIMAL_COUNT, ANIMAL_SIZE, PLAYER_HEIGHT, PLAYER_SPEED, PLAYER_WIDTH, SCREEN_HEIGHT,
    SCREEN_WIDTH,
};

use super::collision::Aabb;

/// Loop phase. `Running` until the window's quit signal arrives; there is
/// no win condition, an empty herd keeps looping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Running,
    Stopped,
}

/// The player-controlled sprite, positioned by its top-left corner
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub x: f32,
    pub y: f32,
}

impl Player {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.x, self.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }
}

/// A static collectible. `sprite` indexes into the shared slice of loaded
/// animal textures; the texture itself never changes for the animal's lifetime.
#[derive(Debug, Clone, Copy)]
pub struct Animal {
    pub sprite: usize,
    pub x: f32,
    pub y: f32,
}

impl Animal {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.x, self.y, ANIMAL_SIZE, ANIMAL_SIZE)
    }
}

/// Single-owner state for the whole session. Created once at loop entry,
/// mutated once per frame, dropped at process exit.
pub struct GameState {
    pub player: Player,
    pub animals: Vec<Animal>,
    pub phase: Phase,
    /// Session clock origin, in seconds on the monotonic clock. Never reset.
    pub started_at: f64,
}

impl GameState {
    /// Create the session state, spawning the herd with the global RNG.
    pub fn new(started_at: f64, sprite_variants: usize) -> Self {
        Self::with_rng(started_at, sprite_variants, &mut rand::thread_rng())
    }

    /// Like [`GameState::new`] but with a caller-supplied RNG so spawns
    /// are reproducible in tests.
    pub fn with_rng(started_at: f64, sprite_variants: usize, rng: &mut impl Rng) -> Self {
        let mut animals = Vec::new();
        // No sprite variants means no targets; the loop still runs.
        if sprite_variants > 0 {
            for _ in 0..ANIMAL_COUNT {
                animals.push(Animal {
                    sprite: rng.gen_range(0..sprite_variants),
                    x: rng.gen_range(0.0..=(SCREEN_WIDTH - ANIMAL_SIZE)),
                    y: rng.gen_range(0.0..=(SCREEN_HEIGHT - ANIMAL_SIZE)),
                });
            }
        }

        Self {
            player: Player {
                x: SCREEN_WIDTH / 2.0,
                y: SCREEN_HEIGHT / 2.0,
            },
            animals,
            phase: Phase::Running,
            started_at,
        }
    }

    /// Step the player by one frame's worth of movement and clamp to the
    /// screen. `dx`/`dy` are -1, 0 or 1 per axis; both axes step at full
    /// speed, so diagonal movement is faster than axial.
    pub fn move_player(&mut self, dx: f32, dy: f32) {
        self.player.x = (self.player.x + dx * PLAYER_SPEED).clamp(0.0, SCREEN_WIDTH - PLAYER_WIDTH);
        self.player.y =
            (self.player.y + dy * PLAYER_SPEED).clamp(0.0, SCREEN_HEIGHT - PLAYER_HEIGHT);
    }

    /// Remove every animal whose box overlaps the player's box, all in one
    /// pass. Returns how many were rounded up this frame.
    pub fn resolve_collisions(&mut self) -> usize {
        let player_box = self.player.aabb();
        let before = self.animals.len();
        self.animals.retain(|animal| !player_box.overlaps(&animal.aabb()));
        before - self.animals.len()
    }

    /// Whole seconds since the session started
    pub fn elapsed_secs(&self, now: f64) -> u64 {
        (now - self.started_at).max(0.0) as u64
    }

    pub fn stop(&mut self) {
        self.phase = Phase::Stopped;
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn empty_state() -> GameState {
        GameState::with_rng(0.0, 0, &mut seeded())
    }

    #[test]
    fn test_spawn_herd() {
        let state = GameState::with_rng(0.0, 4, &mut seeded());
        assert_eq!(state.animals.len(), ANIMAL_COUNT);
        for animal in &state.animals {
            assert!(animal.sprite < 4);
            assert!(animal.x >= 0.0 && animal.x <= SCREEN_WIDTH - ANIMAL_SIZE);
            assert!(animal.y >= 0.0 && animal.y <= SCREEN_HEIGHT - ANIMAL_SIZE);
        }
        assert!(state.is_running());
    }

    #[test]
    fn test_spawn_without_sprites_is_empty() {
        let state = empty_state();
        assert!(state.animals.is_empty());
        assert!(state.is_running());
    }

    #[test]
    fn test_move_clamps_to_screen() {
        let mut state = empty_state();

        // Hold left/up long enough to cross the whole screen
        for _ in 0..400 {
            state.move_player(-1.0, -1.0);
        }
        assert_eq!(state.player.x, 0.0);
        assert_eq!(state.player.y, 0.0);

        // And back to the far corner
        for _ in 0..400 {
            state.move_player(1.0, 1.0);
        }
        assert_eq!(state.player.x, SCREEN_WIDTH - PLAYER_WIDTH);
        assert_eq!(state.player.y, SCREEN_HEIGHT - PLAYER_HEIGHT);
    }

    #[test]
    fn test_move_step_is_unnormalized() {
        let mut state = empty_state();
        let (x0, y0) = (state.player.x, state.player.y);
        state.move_player(1.0, 1.0);
        // Full speed on both axes at once
        assert_eq!(state.player.x, x0 + PLAYER_SPEED);
        assert_eq!(state.player.y, y0 + PLAYER_SPEED);
    }

    #[test]
    fn test_axial_moves() {
        let mut state = empty_state();
        let (x0, y0) = (state.player.x, state.player.y);
        state.move_player(1.0, 0.0);
        assert_eq!((state.player.x, state.player.y), (x0 + PLAYER_SPEED, y0));
        state.move_player(0.0, -1.0);
        assert_eq!(
            (state.player.x, state.player.y),
            (x0 + PLAYER_SPEED, y0 - PLAYER_SPEED)
        );
    }

    #[test]
    fn test_collision_removes_overlapping_only() {
        let mut state = empty_state();
        state.player = Player { x: 0.0, y: 0.0 };
        state.animals = vec![
            Animal { sprite: 0, x: 0.0, y: 0.0 },        // overlaps
            Animal { sprite: 0, x: 40.0, y: 60.0 },      // overlaps
            Animal { sprite: 0, x: 1000.0, y: 1000.0 },  // far away
            Animal { sprite: 0, x: 90.0, y: 0.0 },       // touching edge only
        ];

        let removed = state.resolve_collisions();
        assert_eq!(removed, 2);
        assert_eq!(state.animals.len(), 2);
        assert_eq!(state.animals[0].x, 1000.0);
        assert_eq!(state.animals[1].x, 90.0);
    }

    #[test]
    fn test_collision_is_idempotent() {
        let mut state = empty_state();
        state.player = Player { x: 0.0, y: 0.0 };
        state.animals = vec![
            Animal { sprite: 0, x: 10.0, y: 10.0 },
            Animal { sprite: 0, x: 500.0, y: 500.0 },
        ];

        assert_eq!(state.resolve_collisions(), 1);
        // No movement in between: the second pass removes nothing
        assert_eq!(state.resolve_collisions(), 0);
        assert_eq!(state.animals.len(), 1);
    }

    #[test]
    fn test_herd_shrinks_monotonically() {
        let mut state = GameState::with_rng(0.0, 4, &mut seeded());
        let mut last = state.animals.len();
        // Sweep the player across the screen, resolving as we go
        for _ in 0..200 {
            state.move_player(-1.0, -1.0);
            state.resolve_collisions();
            assert!(state.animals.len() <= last);
            last = state.animals.len();
        }
    }

    #[test]
    fn test_elapsed_secs() {
        let state = GameState::with_rng(100.0, 0, &mut seeded());
        assert_eq!(state.elapsed_secs(100.0), 0);
        assert_eq!(state.elapsed_secs(103.7), 3);
        // A clock reading from before the origin never underflows
        assert_eq!(state.elapsed_secs(99.0), 0);
    }

    #[test]
    fn test_stop_transition() {
        let mut state = empty_state();
        assert!(state.is_running());
        state.stop();
        assert!(!state.is_running());
        assert_eq!(state.phase, Phase::Stopped);
    }
}
