//! Scripted AI opponent.
//!
//! The AI makes exactly one move per round: after a random delay it turns the
//! opponent up or down.

use std::time::Duration;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::config::ai::{AI_MOVE_MAX_DELAY_MS, AI_MOVE_MIN_DELAY_MS};
use crate::game::types::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptedMove {
    pub delay: Duration,
    pub direction: Direction,
}

/// Delay window of the scripted move, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptedAi {
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for ScriptedAi {
    fn default() -> Self {
        Self {
            min_delay_ms: AI_MOVE_MIN_DELAY_MS,
            max_delay_ms: AI_MOVE_MAX_DELAY_MS,
        }
    }
}

impl ScriptedAi {
    pub fn next_move(&self, rng: &mut impl Rng) -> ScriptedMove {
        let delay = rng.random_range(self.min_delay_ms..=self.max_delay_ms);
        let direction = *[Direction::Up, Direction::Down]
            .choose(rng)
            .unwrap_or(&Direction::Up);
        ScriptedMove {
            delay: Duration::from_millis(delay),
            direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn moves_stay_within_the_script() {
        let ai = ScriptedAi::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let step = ai.next_move(&mut rng);
            assert!(step.delay >= Duration::from_millis(AI_MOVE_MIN_DELAY_MS));
            assert!(step.delay <= Duration::from_millis(AI_MOVE_MAX_DELAY_MS));
            assert!(step.direction.is_vertical());
        }
    }

    #[test]
    fn both_vertical_turns_occur() {
        let ai = ScriptedAi { min_delay_ms: 10, max_delay_ms: 10 };
        let mut rng = StdRng::seed_from_u64(11);
        let directions: Vec<Direction> = (0..64).map(|_| ai.next_move(&mut rng).direction).collect();
        assert!(directions.contains(&Direction::Up));
        assert!(directions.contains(&Direction::Down));
        assert!((0..8).all(|_| ai.next_move(&mut rng).delay == Duration::from_millis(10)));
    }
}
