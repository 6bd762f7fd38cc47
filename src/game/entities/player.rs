//! Player agent.
//!
//! A `Player` is the only mutator of its own motion state. Commands record
//! turns, `update` moves the player and evaluates collisions, and every
//! collision trigger is pushed to the registered listeners.

use std::fmt;
use std::time::Instant;

use log::debug;

use crate::config::game::{GameConfig, START_DIRECTION, START_POSITION};
use crate::error::GameError;
use crate::game::geometry::{trail_segments, Segment};
use crate::game::systems::{advance, check_collisions, Collision};
use crate::game::types::{Direction, Position, Turn};

pub type PlayerId = u8;

type CollisionListener = Box<dyn FnMut(&Collision)>;

pub struct Player {
    pub id: PlayerId,
    pub color: String,
    initial_position: Position,
    initial_direction: Direction,
    position: Position,
    direction: Direction,
    turns: Vec<Turn>,
    last_updated: Option<Instant>,
    config: GameConfig,
    listeners: Vec<CollisionListener>,
}

impl Player {
    pub fn new(
        id: PlayerId,
        color: impl Into<String>,
        position: Position,
        direction: Direction,
        config: GameConfig,
    ) -> Self {
        Self {
            id,
            color: color.into(),
            initial_position: position,
            initial_direction: direction,
            position,
            direction,
            turns: Vec::new(),
            last_updated: None,
            config,
            listeners: Vec::new(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn initial_position(&self) -> Position {
        self.initial_position
    }

    pub fn initial_direction(&self) -> Direction {
        self.initial_direction
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Current trail, live segment last.
    pub fn segments(&self) -> Vec<Segment> {
        trail_segments(self.initial_position, self.initial_direction, &self.turns, self.position)
    }

    /// Register a listener called once per collision trigger.
    pub fn on_collision(&mut self, listener: impl FnMut(&Collision) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Adopt `direction` and record a turn at the current position.
    /// Turning to the current direction is recorded too.
    pub fn turn(&mut self, direction: Direction) {
        self.direction = direction;
        self.turns.push(Turn {
            direction,
            location: self.position,
        });
    }

    /// Apply a `turnUp` / `turnDown` / `turnLeft` / `turnRight` command.
    /// Unknown commands leave the player untouched.
    pub fn process_command(&mut self, command: &str) -> Result<Direction, GameError> {
        let direction = Direction::from_command(command)?;
        self.turn(direction);
        Ok(direction)
    }

    /// Advance by the time elapsed since the previous update (nothing on the
    /// first call), then evaluate wall, own-trail and opponent-trail collisions.
    pub fn update(&mut self, now: Instant, opponent: Option<&Player>) -> Vec<Collision> {
        let elapsed = self
            .last_updated
            .map(|last| now.saturating_duration_since(last).as_secs_f64())
            .unwrap_or(0.0);
        self.last_updated = Some(now);

        self.position = advance(self.position, self.direction, self.config.speed, elapsed);

        let own = self.segments();
        let opponent_trail = opponent.map(Player::segments);
        let collisions = check_collisions(self.position, &own, opponent_trail.as_deref(), &self.config);

        for collision in &collisions {
            debug!("[Player] Player {} collision {:?} at {:?}", self.id, collision, self.position);
            for listener in self.listeners.iter_mut() {
                listener(collision);
            }
        }
        collisions
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("id", &self.id)
            .field("color", &self.color)
            .field("position", &self.position)
            .field("direction", &self.direction)
            .field("turns", &self.turns.len())
            .finish()
    }
}

/// The local player at the configured start.
pub fn spawn_local_player(config: GameConfig) -> Player {
    Player::new(1, "yellow", START_POSITION, START_DIRECTION, config)
}

/// The opponent, point-mirrored from the local start and facing the other way.
pub fn spawn_opponent(config: GameConfig) -> Player {
    let position = START_POSITION.mirrored(config.arena_width, config.arena_height);
    Player::new(2, "cyan", position, START_DIRECTION.opposite(), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    #[test]
    fn first_update_does_not_move() {
        let mut player = spawn_local_player(GameConfig::default());
        let collisions = player.update(Instant::now(), None);
        assert!(collisions.is_empty());
        assert_eq!(player.position(), START_POSITION);
    }

    #[test]
    fn invalid_command_is_rejected_without_side_effects() {
        let mut player = spawn_local_player(GameConfig::default());
        let err = player.process_command("turnSideways").unwrap_err();
        assert_eq!(err, GameError::InvalidCommand("turnSideways".into()));
        assert!(player.turns().is_empty());
        assert_eq!(player.direction(), Direction::Right);
    }

    #[test]
    fn repeated_direction_is_recorded() {
        let mut player = spawn_local_player(GameConfig::default());
        player.process_command("turnRight").unwrap();
        player.process_command("turnRight").unwrap();
        assert_eq!(player.turns().len(), 2);
        assert_eq!(player.segments().len(), 3);
    }

    #[test]
    fn listeners_receive_each_trigger() {
        let config = GameConfig::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut player = Player::new(1, "yellow", Position::new(100.0, 300.0), Direction::Right, config);
        let sink = seen.clone();
        player.on_collision(move |collision| sink.borrow_mut().push(*collision));

        // Reversing onto its own line hits the previous segment.
        let t0 = Instant::now();
        player.update(t0, None);
        player.update(t0 + Duration::from_millis(500), None);
        player.turn(Direction::Left);
        player.update(t0 + Duration::from_millis(600), None);

        assert_eq!(*seen.borrow(), vec![Collision::OwnTrail { segment: 0 }]);
    }

    #[test]
    fn opponent_spawns_mirrored() {
        let opponent = spawn_opponent(GameConfig::default());
        assert_eq!(opponent.position(), Position::new(580.0, 400.0));
        assert_eq!(opponent.direction(), Direction::Left);
    }
}
