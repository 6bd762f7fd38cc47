use serde::{Deserialize, Serialize};

use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point reflection through the arena centre.
    pub fn mirrored(&self, width: f64, height: f64) -> Self {
        Self {
            x: width - self.x,
            y: height - self.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Parse a turn command (`turnUp`, `turnDown`, `turnLeft`, `turnRight`).
    pub fn from_command(command: &str) -> Result<Self, GameError> {
        match command {
            "turnUp" => Ok(Direction::Up),
            "turnDown" => Ok(Direction::Down),
            "turnLeft" => Ok(Direction::Left),
            "turnRight" => Ok(Direction::Right),
            other => Err(GameError::InvalidCommand(other.to_string())),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Unit step in screen coordinates (y grows downwards).
    pub fn unit(self) -> (f64, f64) {
        match self {
            Direction::Up => (0.0, -1.0),
            Direction::Down => (0.0, 1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Right => (1.0, 0.0),
        }
    }
}

/// A recorded direction change: the direction adopted and where it began.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub direction: Direction,
    pub location: Position,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_parse_case_sensitively() {
        assert_eq!(Direction::from_command("turnLeft"), Ok(Direction::Left));
        assert_eq!(
            Direction::from_command("turnleft"),
            Err(GameError::InvalidCommand("turnleft".into()))
        );
        assert!(Direction::from_command("up").is_err());
    }

    #[test]
    fn opposite_is_an_involution() {
        for direction in Direction::ALL {
            assert_ne!(direction.opposite(), direction);
            assert_eq!(direction.opposite().opposite(), direction);
            assert_eq!(direction.opposite().is_vertical(), direction.is_vertical());
        }
    }

    #[test]
    fn mirror_through_centre() {
        let p = Position::new(20.0, 200.0).mirrored(600.0, 600.0);
        assert_eq!(p, Position::new(580.0, 400.0));
    }
}
