use actix::prelude::*;
use uuid::Uuid;

use crate::game::types::Direction;
use crate::server::matchmaking::types::{ConnId, Peer};

pub type MatchId = Uuid;

/// What a peer can ask of its match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchCommand {
    /// The peer's player changed direction.
    Turn(Direction),
    /// The peer's round is over.
    Complete,
}

/// Message: start a match between two peers.
#[derive(Message)]
#[rtype(result = "MatchId")]
pub struct CreateMatch {
    pub first: Peer,
    pub second: Peer,
}

/// Message: a command from one of the match's peers.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct PeerCommand {
    pub from: ConnId,
    pub command: MatchCommand,
}

/// Message: a peer's connection closed.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct PeerLeft {
    pub conn: ConnId,
}

/// Completion signal emitted exactly once per match.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct MatchCompleted {
    pub id: MatchId,
}

/// Message: number of running matches.
#[derive(Message)]
#[rtype(result = "usize")]
pub struct ActiveMatches;
