use actix::prelude::*;
use std::collections::HashMap;
use uuid::Uuid;
use log::{debug, info, warn};

use crate::game::types::Direction;
use crate::server::game_session::messages::{
    ActiveMatches, CreateMatch, MatchCommand, MatchCompleted, MatchId, PeerCommand, PeerLeft,
};
use crate::server::matchmaking::types::{ConnId, Peer};
use crate::server::protocol::ServerMessage;

/// A running two-player match.
///
/// Relays each peer's moves to the other with the direction inverted, since
/// the two players face each other from opposite sides of the arena. The first
/// `game complete` (or a departure) ends the match; nothing is relayed after.
pub struct Match {
    pub id: MatchId,
    peers: [Peer; 2],
    running: bool,
    on_complete: Recipient<MatchCompleted>,
}

impl Match {
    pub fn new(id: MatchId, first: Peer, second: Peer, on_complete: Recipient<MatchCompleted>) -> Self {
        Self {
            id,
            peers: [first, second],
            running: true,
            on_complete,
        }
    }

    /// The peer facing `conn`, or `None` if `conn` is not in this match.
    fn opponent_of(&self, conn: ConnId) -> Option<&Peer> {
        match &self.peers {
            [a, b] if a.id == conn => Some(b),
            [a, b] if b.id == conn => Some(a),
            _ => None,
        }
    }

    fn relay(&mut self, from: ConnId, direction: Direction, ctx: &mut Context<Self>) {
        let Some(target) = self.opponent_of(from) else {
            warn!("[Match] {} ignoring move from outsider {}", self.id, from);
            return;
        };
        let relayed = ServerMessage::turn(direction.opposite());
        debug!("[Match] {} relaying {:?} from {} as {}", self.id, direction, from, relayed);
        if !target.deliver(relayed) {
            warn!("[Match] {} could not reach {}", self.id, target.id);
            self.complete(ctx);
        }
    }

    /// Transition to complete. Only the first call has any effect.
    fn complete(&mut self, ctx: &mut Context<Self>) {
        if !self.running {
            return;
        }
        self.running = false;
        info!("[Match] {} complete", self.id);
        self.on_complete.do_send(MatchCompleted { id: self.id });
        ctx.stop();
    }
}

impl Actor for Match {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!("[Match] {} started: {} vs {}", self.id, self.peers[0].id, self.peers[1].id);
        let unreachable = self
            .peers
            .iter()
            .filter(|peer| !peer.deliver(ServerMessage::GameReady))
            .count();
        if unreachable > 0 {
            warn!("[Match] {} lost a peer before start", self.id);
            self.complete(ctx);
        }
    }
}

impl Handler<PeerCommand> for Match {
    type Result = ();

    fn handle(&mut self, msg: PeerCommand, ctx: &mut Context<Self>) -> Self::Result {
        if !self.running {
            debug!("[Match] {} already complete, dropping {:?}", self.id, msg.command);
            return;
        }
        match msg.command {
            MatchCommand::Turn(direction) => self.relay(msg.from, direction, ctx),
            MatchCommand::Complete => {
                if self.opponent_of(msg.from).is_some() {
                    self.complete(ctx);
                }
            }
        }
    }
}

impl Handler<PeerLeft> for Match {
    type Result = ();

    /// A departure ends the match as if the leaving peer had completed.
    fn handle(&mut self, msg: PeerLeft, ctx: &mut Context<Self>) -> Self::Result {
        if self.opponent_of(msg.conn).is_some() {
            info!("[Match] {} peer {} disconnected", self.id, msg.conn);
            self.complete(ctx);
        }
    }
}

/// Registry of running matches and the connection -> match routing table.
pub struct MatchRegistry {
    matches: HashMap<MatchId, Addr<Match>>,
    routes: HashMap<ConnId, MatchId>,
}

impl MatchRegistry {
    pub fn new() -> Self {
        Self {
            matches: HashMap::new(),
            routes: HashMap::new(),
        }
    }

    fn match_of(&self, conn: &ConnId) -> Option<&Addr<Match>> {
        self.routes.get(conn).and_then(|id| self.matches.get(id))
    }

    pub fn create_match(&mut self, first: Peer, second: Peer, ctx: &mut Context<Self>) -> MatchId {
        // A connection belongs to at most one match.
        for peer in [&first, &second] {
            if let Some(previous) = self.match_of(&peer.id) {
                previous.do_send(PeerLeft { conn: peer.id });
            }
        }

        let id = Uuid::new_v4();
        self.routes.insert(first.id, id);
        self.routes.insert(second.id, id);
        let addr = Match::new(id, first, second, ctx.address().recipient()).start();
        self.matches.insert(id, addr);
        id
    }
}

impl Default for MatchRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Actor for MatchRegistry {
    type Context = Context<Self>;
}

impl Handler<CreateMatch> for MatchRegistry {
    type Result = MessageResult<CreateMatch>;

    fn handle(&mut self, msg: CreateMatch, ctx: &mut Context<Self>) -> Self::Result {
        MessageResult(self.create_match(msg.first, msg.second, ctx))
    }
}

impl Handler<PeerCommand> for MatchRegistry {
    type Result = ();

    fn handle(&mut self, msg: PeerCommand, _: &mut Context<Self>) -> Self::Result {
        match self.match_of(&msg.from) {
            Some(addr) => addr.do_send(msg),
            None => debug!("[MatchRegistry] {} is not in a match, dropping {:?}", msg.from, msg.command),
        }
    }
}

impl Handler<PeerLeft> for MatchRegistry {
    type Result = ();

    fn handle(&mut self, msg: PeerLeft, _: &mut Context<Self>) -> Self::Result {
        if let Some(addr) = self.match_of(&msg.conn) {
            addr.do_send(msg);
        }
    }
}

impl Handler<MatchCompleted> for MatchRegistry {
    type Result = ();

    fn handle(&mut self, msg: MatchCompleted, _: &mut Context<Self>) -> Self::Result {
        if self.matches.remove(&msg.id).is_some() {
            self.routes.retain(|_, id| *id != msg.id);
            debug!("[MatchRegistry] Removed match {} ({} running)", msg.id, self.matches.len());
        }
    }
}

impl Handler<ActiveMatches> for MatchRegistry {
    type Result = usize;

    fn handle(&mut self, _: ActiveMatches, _: &mut Context<Self>) -> Self::Result {
        self.matches.len()
    }
}
