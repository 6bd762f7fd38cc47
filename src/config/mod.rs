/// Main configuration module.
///
/// Re-exports submodules for game, matchmaking, AI and server configuration.
pub mod ai;
pub mod game;
pub mod matchmaking;
pub mod server;
