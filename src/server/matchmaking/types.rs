use std::fmt;

use actix::prelude::{Recipient, SendError};
use uuid::Uuid;

use crate::server::protocol::ServerMessage;

/// Unique identifier of a client connection.
pub type ConnId = Uuid;

/// A connection as seen by matchmaking and matches: an id plus somewhere to
/// deliver server frames.
#[derive(Clone)]
pub struct Peer {
    pub id: ConnId,
    pub addr: Recipient<ServerMessage>,
}

impl Peer {
    pub fn new(id: ConnId, addr: Recipient<ServerMessage>) -> Self {
        Self { id, addr }
    }
}

impl PartialEq for Peer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Peer {}

impl fmt::Debug for Peer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Peer").field(&self.id).finish()
    }
}

impl Peer {
    /// Deliver a frame. Returns `false` once the connection is gone.
    pub fn deliver(&self, msg: ServerMessage) -> bool {
        match self.addr.try_send(msg) {
            Ok(()) => true,
            Err(SendError::Full(msg)) => {
                self.addr.do_send(msg);
                true
            }
            Err(SendError::Closed(_)) => false,
        }
    }
}
