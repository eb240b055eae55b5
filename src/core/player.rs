//! Player identification.
//!
//! Players are numbered from 0. A game registers between 0 and
//! [`MAX_PLAYERS`] players; indices are only meaningful relative to the
//! engine's current `player_num`.

use serde::{Deserialize, Serialize};

/// Largest number of players an engine can register.
pub const MAX_PLAYERS: usize = u8::MAX as usize;

/// Player identifier supporting up to 255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check whether this player exists in a game with `player_num` players.
    #[must_use]
    pub const fn is_registered(self, player_num: usize) -> bool {
        self.index() < player_num
    }

    /// Iterate over all player IDs for a game with `player_num` players.
    ///
    /// ```
    /// use hexjump::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId(0), PlayerId(1), PlayerId(2)]);
    /// ```
    pub fn all(player_num: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_num.min(MAX_PLAYERS) as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}
