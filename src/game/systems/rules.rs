//! Collision rules evaluated after every movement step.

use serde::{Deserialize, Serialize};

use crate::config::game::GameConfig;
use crate::game::collision::first_intersection;
use crate::game::geometry::Segment;
use crate::game::types::Position;

/// A single collision trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    /// The position reached or crossed the arena boundary.
    Wall,
    /// The live segment hit one of the player's earlier segments.
    OwnTrail { segment: usize },
    /// The live segment hit a segment of the opponent's trail.
    OpponentTrail { segment: usize },
}

/// Boundary values count as outside.
pub fn hits_wall(position: Position, config: &GameConfig) -> bool {
    position.x <= 0.0
        || position.x >= config.arena_width
        || position.y <= 0.0
        || position.y >= config.arena_height
}

/// Evaluate wall, own-trail and opponent-trail rules, in that order.
///
/// `own` is the player's full trail with the live segment last. The live
/// segment is compared with the rest of `own` and with all of `opponent`.
/// Every rule that fires yields its own entry.
pub fn check_collisions(
    position: Position,
    own: &[Segment],
    opponent: Option<&[Segment]>,
    config: &GameConfig,
) -> Vec<Collision> {
    let mut collisions = Vec::new();

    if hits_wall(position, config) {
        collisions.push(Collision::Wall);
    }

    let Some((live, history)) = own.split_last() else {
        return collisions;
    };

    if let Some(segment) = first_intersection(live, history, config.same_axis) {
        collisions.push(Collision::OwnTrail { segment });
    }

    if let Some(segment) = opponent.and_then(|trail| first_intersection(live, trail, config.same_axis)) {
        collisions.push(Collision::OpponentTrail { segment });
    }

    collisions
}
