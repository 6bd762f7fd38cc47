//! Matchmaking module: the waiting room that pairs two players into a match.

pub mod messages;
pub mod server;
pub mod types;
