//! Game core: trail geometry, collision detection, the player agent and the
//! client-side round.

pub mod collision;
pub mod entities;
pub mod geometry;
pub mod round;
pub mod systems;
pub mod types;
