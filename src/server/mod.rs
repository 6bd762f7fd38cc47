// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the main backend server components, including:
//! - Application state management
//! - HTTP/WebSocket routing and the per-connection session
//! - The text wire protocol
//! - Matchmaking (single waiting slot with expiry)
//! - Match sessions (move relay with direction inversion)

pub mod ai;
pub mod game_session;
pub mod matchmaking;
pub mod protocol;
pub mod router;
pub mod session;
pub mod state;
