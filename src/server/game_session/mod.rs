//! Match sessions: the two-player relay and the registry of running matches.

pub mod messages;
pub mod server;

pub use server::{Match, MatchRegistry};
