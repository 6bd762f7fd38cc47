/// Matchmaking configuration constants.
///
/// This module defines parameters for the waiting room.
pub const WAITING_SLOT_TIMEOUT_SECS: u64 = 300; // How long a lone player waits for an opponent.
