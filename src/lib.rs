//! Two-player light-trail duel.
//!
//! `game` holds the deterministic core (trail geometry, collision detection,
//! the player agent and the client round); `server` holds matchmaking and the
//! match relay that run behind the WebSocket endpoint.

pub mod config;
pub mod error;
pub mod game;
pub mod server;
