/// WebSocket session handler for one client.
///
/// `ClientSession` owns a single connection and writes server frames back to
/// the socket. Everything it does with a decoded frame lives in `Dispatcher`:
/// multiplayer requests go to the lobby, in-match commands go to the match
/// registry, and single-player rounds get one scripted AI move.
use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use log::{debug, info, warn};
use uuid::Uuid;

use crate::server::ai::ScriptedAi;
use crate::server::game_session::messages::{MatchCommand, PeerCommand, PeerLeft};
use crate::server::game_session::server::MatchRegistry;
use crate::server::matchmaking::messages::{Leave, RequestMatch};
use crate::server::matchmaking::server::Lobby;
use crate::server::matchmaking::types::{ConnId, Peer};
use crate::server::protocol::{ClientMessage, ServerMessage};
use crate::server::state::AppState;

/// Where a session sends what it decodes.
#[derive(Clone)]
pub struct SessionRoutes {
    pub request_match: Recipient<RequestMatch>,
    pub leave_lobby: Recipient<Leave>,
    pub command: Recipient<PeerCommand>,
    pub leave_match: Recipient<PeerLeft>,
}

impl SessionRoutes {
    pub fn new(lobby: &Addr<Lobby>, matches: &Addr<MatchRegistry>) -> Self {
        Self {
            request_match: lobby.clone().recipient(),
            leave_lobby: lobby.clone().recipient(),
            command: matches.clone().recipient(),
            leave_match: matches.clone().recipient(),
        }
    }
}

/// Per-connection protocol logic, independent of the transport actor.
pub struct Dispatcher {
    pub id: ConnId,
    routes: SessionRoutes,
    ai: ScriptedAi,
    /// Pending scripted AI move, if an AI round is running.
    ai_move: Option<SpawnHandle>,
}

impl Dispatcher {
    pub fn new(routes: SessionRoutes, ai: ScriptedAi) -> Self {
        Self {
            id: Uuid::new_v4(),
            routes,
            ai,
            ai_move: None,
        }
    }

    /// Decode one text frame and act on it. Unknown frames are logged and dropped.
    pub fn handle_text<A>(&mut self, text: &str, me: Recipient<ServerMessage>, ctx: &mut A::Context)
    where
        A: Actor,
        A::Context: AsyncContext<A>,
    {
        match ClientMessage::parse(text) {
            Ok(msg) => {
                debug!("[Session] {} received {:?}", self.id, msg);
                self.dispatch::<A>(msg, me, ctx);
            }
            Err(e) => warn!("[Session] {} {}", self.id, e),
        }
    }

    pub fn dispatch<A>(&mut self, msg: ClientMessage, me: Recipient<ServerMessage>, ctx: &mut A::Context)
    where
        A: Actor,
        A::Context: AsyncContext<A>,
    {
        match msg {
            ClientMessage::AiGame => {
                // An AI round replaces any multiplayer involvement.
                self.leave_multiplayer();
                self.start_ai_round::<A>(me, ctx);
            }
            ClientMessage::MultiplayerGame => {
                self.cancel_ai_move::<A>(ctx);
                self.routes.request_match.do_send(RequestMatch {
                    peer: Peer::new(self.id, me),
                });
            }
            ClientMessage::GameComplete => {
                self.cancel_ai_move::<A>(ctx);
                self.routes.command.do_send(PeerCommand {
                    from: self.id,
                    command: MatchCommand::Complete,
                });
            }
            turn => {
                if let Some(direction) = turn.turn() {
                    self.routes.command.do_send(PeerCommand {
                        from: self.id,
                        command: MatchCommand::Turn(direction),
                    });
                }
            }
        }
    }

    /// Release the waiting slot and end any running match.
    pub fn leave_multiplayer(&self) {
        self.routes.leave_lobby.do_send(Leave { conn: self.id });
        self.routes.leave_match.do_send(PeerLeft { conn: self.id });
    }

    fn cancel_ai_move<A>(&mut self, ctx: &mut A::Context)
    where
        A: Actor,
        A::Context: AsyncContext<A>,
    {
        if let Some(handle) = self.ai_move.take() {
            ctx.cancel_future(handle);
        }
    }

    fn start_ai_round<A>(&mut self, me: Recipient<ServerMessage>, ctx: &mut A::Context)
    where
        A: Actor,
        A::Context: AsyncContext<A>,
    {
        self.cancel_ai_move::<A>(ctx);
        let step = self.ai.next_move(&mut rand::rng());
        debug!("[Session] {} AI will turn {:?} in {:?}", self.id, step.direction, step.delay);
        let handle = ctx.run_later(step.delay, move |_, _| {
            me.do_send(ServerMessage::turn(step.direction));
        });
        self.ai_move = Some(handle);
    }
}

pub struct ClientSession {
    dispatcher: Dispatcher,
}

impl ClientSession {
    pub fn new(routes: SessionRoutes) -> Self {
        Self {
            dispatcher: Dispatcher::new(routes, ScriptedAi::default()),
        }
    }
}

impl Actor for ClientSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        info!("[Session] {} connected", self.dispatcher.id);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        info!("[Session] {} disconnected", self.dispatcher.id);
        self.dispatcher.leave_multiplayer();
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for ClientSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => {
                let me = ctx.address().recipient();
                self.dispatcher.handle_text::<Self>(&text, me, ctx);
            }
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Err(e) => {
                warn!("[Session] {} protocol error: {}", self.dispatcher.id, e);
                ctx.stop();
            }
            _ => (),
        }
    }
}

impl Handler<ServerMessage> for ClientSession {
    type Result = ();

    fn handle(&mut self, msg: ServerMessage, ctx: &mut Self::Context) {
        ctx.text(msg.to_string());
    }
}

/// WebSocket endpoint for game traffic.
pub async fn ws_connect(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    ws::start(ClientSession::new(data.routes()), &req, stream)
}
