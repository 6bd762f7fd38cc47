//! HTTP and WebSocket routing configuration.
//!
//! A single WebSocket endpoint carries the whole text protocol.

use actix_web::web;
use crate::server::session::ws_connect;

/// Configure the application's HTTP/WebSocket routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/wss")
            .to(ws_connect)
    );
}
