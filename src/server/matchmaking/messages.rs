use actix::prelude::*;

use super::types::{ConnId, Peer};

/// Message: a connection asked for a multiplayer game.
#[derive(Message)]
#[rtype(result = "()")]
pub struct RequestMatch {
    pub peer: Peer,
}

/// Message: a connection went away.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Leave {
    pub conn: ConnId,
}

/// Message: which connection, if any, holds the waiting slot.
#[derive(Message)]
#[rtype(result = "Option<ConnId>")]
pub struct WaitingPeer;
