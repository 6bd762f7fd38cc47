//! A two-player round as simulated on a client.
//!
//! Each tick updates the local player and then the opponent, each against the
//! other's trail. The first tick that produces a collision settles the round.

use std::time::Instant;

use log::info;
use serde::Serialize;

use crate::config::game::GameConfig;
use crate::error::GameError;
use crate::game::entities::{spawn_local_player, spawn_opponent, Player};
use crate::game::geometry::Segment;
use crate::game::systems::Collision;
use crate::game::types::{Direction, Position, Turn};

/// Result of a round from the local player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Won,
    Lost,
    Draw,
}

pub struct Round {
    local: Player,
    opponent: Player,
    outcome: Option<Outcome>,
}

impl Round {
    pub fn new(config: GameConfig) -> Self {
        Self::with_players(spawn_local_player(config), spawn_opponent(config))
    }

    pub fn with_players(local: Player, opponent: Player) -> Self {
        Self {
            local,
            opponent,
            outcome: None,
        }
    }

    pub fn local(&self) -> &Player {
        &self.local
    }

    pub fn opponent(&self) -> &Player {
        &self.opponent
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Keyboard input for the local player.
    pub fn command_local(&mut self, command: &str) -> Result<Direction, GameError> {
        self.local.process_command(command)
    }

    /// A relayed `turnX` from the server, applied to the opponent.
    pub fn command_opponent(&mut self, command: &str) -> Result<Direction, GameError> {
        self.opponent.process_command(command)
    }

    pub fn tick(&mut self, now: Instant) -> Option<Outcome> {
        if self.outcome.is_some() {
            return self.outcome;
        }

        let local_hits = self.local.update(now, Some(&self.opponent));
        let opponent_hits = self.opponent.update(now, Some(&self.local));

        self.outcome = resolve(&local_hits, &opponent_hits);
        if let Some(outcome) = self.outcome {
            info!(
                "[Round] Round over: {:?} (local {:?}, opponent {:?})",
                outcome, local_hits, opponent_hits
            );
        }
        self.outcome
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            local: PlayerSnapshot::of(&self.local),
            opponent: PlayerSnapshot::of(&self.opponent),
            outcome: self.outcome,
        }
    }
}

fn resolve(local_hits: &[Collision], opponent_hits: &[Collision]) -> Option<Outcome> {
    match (local_hits.is_empty(), opponent_hits.is_empty()) {
        (true, true) => None,
        (false, true) => Some(Outcome::Lost),
        (true, false) => Some(Outcome::Won),
        (false, false) => Some(Outcome::Draw),
    }
}

/// Read-only view handed to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundSnapshot {
    pub local: PlayerSnapshot,
    pub opponent: PlayerSnapshot,
    pub outcome: Option<Outcome>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSnapshot {
    pub color: String,
    pub position: Position,
    pub direction: Direction,
    pub turns: Vec<Turn>,
    pub trail: Vec<Segment>,
}

impl PlayerSnapshot {
    fn of(player: &Player) -> Self {
        Self {
            color: player.color.clone(),
            position: player.position(),
            direction: player.direction(),
            turns: player.turns().to_vec(),
            trail: player.segments(),
        }
    }
}
