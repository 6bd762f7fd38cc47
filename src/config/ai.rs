/// Scripted AI opponent timing.
///
/// The AI makes a single move after a random delay within this window.
pub const AI_MOVE_MIN_DELAY_MS: u64 = 500;

pub const AI_MOVE_MAX_DELAY_MS: u64 = 2_500;
