//! Game entities module.
//!
//! This module organizes the player agent and its spawn helpers.

pub mod player;

pub use player::*;
