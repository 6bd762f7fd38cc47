/// Lobby actor.
///
/// Holds at most one waiting connection. A second request pairs the two into a
/// match through the match registry; a lone request expires after the waiting
/// timeout with an `expired` frame. The expiry timer is cancelled as soon as
/// the slot is paired or its owner leaves.

use actix::prelude::*;
use std::time::{Duration, Instant};
use log::{info, debug};

use super::messages::{Leave, RequestMatch, WaitingPeer};
use super::types::{ConnId, Peer};
use crate::server::game_session::messages::CreateMatch;
use crate::server::game_session::server::MatchRegistry;
use crate::server::protocol::ServerMessage;

/// The single pending-match placeholder.
struct WaitingSlot {
    peer: Peer,
    /// Distinguishes successive slots held by the same connection.
    token: u64,
    expires_at: Instant,
    timer: SpawnHandle,
}

pub struct Lobby {
    waiting: Option<WaitingSlot>,
    timeout: Duration,
    next_token: u64,
    matches: Addr<MatchRegistry>,
}

impl Lobby {
    pub fn new(matches: Addr<MatchRegistry>, timeout: Duration) -> Self {
        Self {
            waiting: None,
            timeout,
            next_token: 0,
            matches,
        }
    }

    /// Open the waiting slot for `peer` and arm its expiry timer.
    fn open_slot(&mut self, peer: Peer, ctx: &mut Context<Self>) {
        let token = self.next_token;
        self.next_token += 1;

        let timer = ctx.run_later(self.timeout, move |act, _ctx| {
            act.expire(token);
        });
        info!("[Lobby] Connection {} waiting for an opponent ({:?})", peer.id, self.timeout);
        self.waiting = Some(WaitingSlot {
            peer,
            token,
            expires_at: Instant::now() + self.timeout,
            timer,
        });
    }

    fn expire(&mut self, token: u64) {
        match self.waiting.take() {
            Some(slot) if slot.token == token => {
                info!("[Lobby] Connection {} expired without an opponent", slot.peer.id);
                slot.peer.deliver(ServerMessage::Expired);
            }
            other => {
                // Slot was paired or replaced; the timer should have been cancelled.
                self.waiting = other;
            }
        }
    }

    fn close_slot(&mut self, ctx: &mut Context<Self>) -> Option<Peer> {
        self.waiting.take().map(|slot| {
            ctx.cancel_future(slot.timer);
            slot.peer
        })
    }
}

impl Actor for Lobby {
    type Context = Context<Self>;
}

impl Handler<RequestMatch> for Lobby {
    type Result = ();

    fn handle(&mut self, msg: RequestMatch, ctx: &mut Self::Context) -> Self::Result {
        if let Some(slot) = self.waiting.as_ref().filter(|slot| slot.peer.id == msg.peer.id) {
            debug!(
                "[Lobby] Connection {} already waiting ({:?} left)",
                msg.peer.id,
                slot.expires_at.saturating_duration_since(Instant::now())
            );
            return;
        }

        match self.close_slot(ctx) {
            Some(waiting) => {
                info!("[Lobby] Pairing {} with {}", waiting.id, msg.peer.id);
                self.matches.do_send(CreateMatch {
                    first: waiting,
                    second: msg.peer,
                });
            }
            None => self.open_slot(msg.peer, ctx),
        }
    }
}

impl Handler<Leave> for Lobby {
    type Result = ();

    fn handle(&mut self, msg: Leave, ctx: &mut Self::Context) -> Self::Result {
        let holds_slot = self.waiting.as_ref().is_some_and(|slot| slot.peer.id == msg.conn);
        if holds_slot {
            self.close_slot(ctx);
            debug!("[Lobby] Waiting connection {} left", msg.conn);
        }
    }
}

impl Handler<WaitingPeer> for Lobby {
    type Result = Option<ConnId>;

    fn handle(&mut self, _msg: WaitingPeer, _ctx: &mut Self::Context) -> Self::Result {
        self.waiting.as_ref().map(|slot| slot.peer.id)
    }
}
