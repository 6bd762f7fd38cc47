//! Trail geometry.
//!
//! A player's trail is never stored. It is rebuilt on demand from the initial
//! placement, the recorded turns and the current position, as a chronological
//! list of axis-aligned segments. The last segment is the live one.

use serde::{Deserialize, Serialize};

use crate::game::types::{Direction, Position, Turn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// Axis-aligned line occupied by a trail. Bounds are normalised so that
/// `top_y <= bottom_y` and `left_x <= right_x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "orientation", rename_all = "lowercase")]
pub enum Segment {
    Vertical { x: f64, top_y: f64, bottom_y: f64 },
    Horizontal { y: f64, left_x: f64, right_x: f64 },
}

impl Segment {
    /// Minimal segment covering travel in `direction` from `start` to `end`.
    /// The fixed coordinate is taken from `start`.
    pub fn between(direction: Direction, start: Position, end: Position) -> Self {
        if direction.is_vertical() {
            Segment::Vertical {
                x: start.x,
                top_y: start.y.min(end.y),
                bottom_y: start.y.max(end.y),
            }
        } else {
            Segment::Horizontal {
                y: start.y,
                left_x: start.x.min(end.x),
                right_x: start.x.max(end.x),
            }
        }
    }

    pub fn orientation(&self) -> Orientation {
        match self {
            Segment::Vertical { .. } => Orientation::Vertical,
            Segment::Horizontal { .. } => Orientation::Horizontal,
        }
    }

    /// Fixed coordinate followed by the normalised range along the travel axis.
    pub fn span(&self) -> (f64, f64, f64) {
        match *self {
            Segment::Vertical { x, top_y, bottom_y } => (x, top_y, bottom_y),
            Segment::Horizontal { y, left_x, right_x } => (y, left_x, right_x),
        }
    }
}

/// Rebuild a trail. The initial placement acts as a leading synthetic turn, so
/// the result always holds `turns.len() + 1` segments.
pub fn trail_segments(
    initial: Position,
    initial_direction: Direction,
    turns: &[Turn],
    current: Position,
) -> Vec<Segment> {
    let leading = Turn {
        direction: initial_direction,
        location: initial,
    };
    let starts: Vec<Turn> = std::iter::once(leading).chain(turns.iter().copied()).collect();

    starts
        .iter()
        .enumerate()
        .map(|(i, turn)| {
            let end = starts.get(i + 1).map(|next| next.location).unwrap_or(current);
            Segment::between(turn.direction, turn.location, end)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(direction: Direction, x: f64, y: f64) -> Turn {
        Turn {
            direction,
            location: Position::new(x, y),
        }
    }

    #[test]
    fn no_turns_gives_single_live_segment() {
        let segments = trail_segments(
            Position::new(20.0, 200.0),
            Direction::Right,
            &[],
            Position::new(320.0, 200.0),
        );
        assert_eq!(
            segments,
            vec![Segment::Horizontal { y: 200.0, left_x: 20.0, right_x: 320.0 }]
        );
    }

    #[test]
    fn bounds_are_normalised_for_reverse_travel() {
        let segments = trail_segments(
            Position::new(320.0, 200.0),
            Direction::Up,
            &[turn(Direction::Left, 320.0, 50.0)],
            Position::new(100.0, 50.0),
        );
        assert_eq!(
            segments,
            vec![
                Segment::Vertical { x: 320.0, top_y: 50.0, bottom_y: 200.0 },
                Segment::Horizontal { y: 50.0, left_x: 100.0, right_x: 320.0 },
            ]
        );
    }

    #[test]
    fn vertical_segment_at_x_zero_keeps_its_orientation() {
        let segments = trail_segments(
            Position::new(0.0, 10.0),
            Direction::Down,
            &[],
            Position::new(0.0, 40.0),
        );
        assert_eq!(segments[0].orientation(), Orientation::Vertical);
        assert_eq!(segments[0].span(), (0.0, 10.0, 40.0));
    }

    #[test]
    fn same_direction_turn_still_splits_the_trail() {
        let segments = trail_segments(
            Position::new(20.0, 200.0),
            Direction::Right,
            &[turn(Direction::Right, 100.0, 200.0)],
            Position::new(150.0, 200.0),
        );
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], Segment::Horizontal { y: 200.0, left_x: 20.0, right_x: 100.0 });
        assert_eq!(segments[1], Segment::Horizontal { y: 200.0, left_x: 100.0, right_x: 150.0 });
    }
}
