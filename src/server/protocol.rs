//! Text wire protocol.
//!
//! Every frame is one case-sensitive literal. Parsing and formatting are derived
//! with `strum`, so the literals below are the whole vocabulary.

use actix::prelude::*;
use strum::{Display, EnumString};

use crate::error::ProtocolError;
use crate::game::types::Direction;

/// Client -> server frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
pub enum ClientMessage {
    #[strum(to_string = "AI game please")]
    AiGame,
    #[strum(to_string = "multiplayer game please")]
    MultiplayerGame,
    #[strum(to_string = "playerTurnUp")]
    PlayerTurnUp,
    #[strum(to_string = "playerTurnDown")]
    PlayerTurnDown,
    #[strum(to_string = "playerTurnLeft")]
    PlayerTurnLeft,
    #[strum(to_string = "playerTurnRight")]
    PlayerTurnRight,
    #[strum(to_string = "game complete")]
    GameComplete,
}

impl ClientMessage {
    pub fn parse(text: &str) -> Result<Self, ProtocolError> {
        text.parse()
            .map_err(|_| ProtocolError::UnknownMessage(text.to_string()))
    }

    /// Direction of a move notification, if this is one.
    pub fn turn(self) -> Option<Direction> {
        match self {
            ClientMessage::PlayerTurnUp => Some(Direction::Up),
            ClientMessage::PlayerTurnDown => Some(Direction::Down),
            ClientMessage::PlayerTurnLeft => Some(Direction::Left),
            ClientMessage::PlayerTurnRight => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Server -> client frames.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[rtype(result = "()")]
pub enum ServerMessage {
    #[strum(to_string = "game ready")]
    GameReady,
    #[strum(to_string = "turnUp")]
    TurnUp,
    #[strum(to_string = "turnDown")]
    TurnDown,
    #[strum(to_string = "turnLeft")]
    TurnLeft,
    #[strum(to_string = "turnRight")]
    TurnRight,
    #[strum(to_string = "expired")]
    Expired,
}

impl ServerMessage {
    pub fn turn(direction: Direction) -> Self {
        match direction {
            Direction::Up => ServerMessage::TurnUp,
            Direction::Down => ServerMessage::TurnDown,
            Direction::Left => ServerMessage::TurnLeft,
            Direction::Right => ServerMessage::TurnRight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_literals_round_trip_through_display() {
        for (text, msg) in [
            ("AI game please", ClientMessage::AiGame),
            ("multiplayer game please", ClientMessage::MultiplayerGame),
            ("playerTurnLeft", ClientMessage::PlayerTurnLeft),
            ("game complete", ClientMessage::GameComplete),
        ] {
            assert_eq!(ClientMessage::parse(text), Ok(msg));
            assert_eq!(msg.to_string(), text);
        }
    }

    #[test]
    fn parsing_is_exact() {
        for text in ["Game complete", "game complete ", "turnUp", "", "PlayerTurnUp"] {
            assert_eq!(
                ClientMessage::parse(text),
                Err(ProtocolError::UnknownMessage(text.to_string()))
            );
        }
    }

    #[test]
    fn only_moves_carry_a_direction() {
        assert_eq!(ClientMessage::PlayerTurnDown.turn(), Some(Direction::Down));
        assert_eq!(ClientMessage::GameComplete.turn(), None);
        assert_eq!(ClientMessage::MultiplayerGame.turn(), None);
    }

    #[test]
    fn server_literals() {
        assert_eq!(ServerMessage::GameReady.to_string(), "game ready");
        assert_eq!(ServerMessage::Expired.to_string(), "expired");
        assert_eq!(ServerMessage::turn(Direction::Right).to_string(), "turnRight");
    }
}
