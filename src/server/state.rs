// src/server/state.rs

//! Application state for the backend server.
//!
//! Owns the addresses of the lobby and the match registry. Built once at
//! startup and shared with every WebSocket handler.

use actix::{Actor, Addr};
use crate::config::server::ServerConfig;
use crate::server::game_session::server::MatchRegistry;
use crate::server::matchmaking::server::Lobby;
use crate::server::session::SessionRoutes;

/// Shared application state, injected into HTTP/WebSocket handlers.
pub struct AppState {
    /// Address of the lobby actor (single waiting slot, expiry timer).
    pub lobby: Addr<Lobby>,
    /// Address of the match registry (running matches, connection routing).
    pub matches: Addr<MatchRegistry>,
}

impl AppState {
    /// Start the lobby and match registry actors for this configuration.
    pub fn start(config: &ServerConfig) -> Self {
        let matches = MatchRegistry::new().start();
        let lobby = Lobby::new(matches.clone(), config.waiting_timeout).start();
        AppState { lobby, matches }
    }

    /// Routes handed to each new WebSocket session.
    pub fn routes(&self) -> SessionRoutes {
        SessionRoutes::new(&self.lobby, &self.matches)
    }
}
