/// Game configuration constants.
///
/// This module defines the arena dimensions, player speed and starting placement,
/// and the `GameConfig` value handed to players and rounds.
use crate::game::collision::SameAxisPolicy;
use crate::game::types::{Direction, Position};

/// Arena width in distance units.
pub const ARENA_WIDTH: f64 = 600.0;

/// Arena height in distance units.
pub const ARENA_HEIGHT: f64 = 600.0;

/// Player speed in distance units per second.
pub const PLAYER_SPEED: f64 = 300.0;

/// Where the local player starts a round.
pub const START_POSITION: Position = Position { x: 20.0, y: 200.0 };

/// Direction the local player faces at round start.
pub const START_DIRECTION: Direction = Direction::Right;

/// Same-orientation collision rule used unless overridden.
pub const SAME_AXIS_POLICY: SameAxisPolicy = SameAxisPolicy::ExactCoordinate;

/// Tunable gameplay parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub arena_width: f64,
    pub arena_height: f64,
    pub speed: f64,
    pub same_axis: SameAxisPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            speed: PLAYER_SPEED,
            same_axis: SAME_AXIS_POLICY,
        }
    }
}
