//! Player movement system.
//!
//! This module advances a position along a direction.

use crate::game::types::{Direction, Position};

/// Move `speed * elapsed_secs` units from `position` along `direction`.
/// Returns the new position.
pub fn advance(position: Position, direction: Direction, speed: f64, elapsed_secs: f64) -> Position {
    let distance = speed * elapsed_secs;
    let (dx, dy) = direction.unit();
    Position {
        x: position.x + dx * distance,
        y: position.y + dy * distance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_in_screen_coordinates() {
        let start = Position::new(100.0, 100.0);
        assert_eq!(advance(start, Direction::Right, 300.0, 0.5), Position::new(250.0, 100.0));
        assert_eq!(advance(start, Direction::Left, 300.0, 0.5), Position::new(-50.0, 100.0));
        assert_eq!(advance(start, Direction::Up, 300.0, 0.25), Position::new(100.0, 25.0));
        assert_eq!(advance(start, Direction::Down, 300.0, 0.0), start);
    }
}
