//! Piece kinds.
//!
//! A tile holds at most one piece. Player pieces belong to a registered
//! player; the two neutral kinds differ only in whether a jump may cross
//! them.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::{EngineError, PieceError};
use super::player::PlayerId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    /// A piece owned by a registered player.
    Player(PlayerId),
    /// A neutral piece that may be jumped over.
    Jumpable,
    /// A neutral piece that blocks any jump across it.
    Unjumpable,
}

impl PieceKind {
    /// Shorthand for `PieceKind::Player(PlayerId::new(index))`.
    #[must_use]
    pub const fn player(index: u8) -> Self {
        PieceKind::Player(PlayerId::new(index))
    }

    /// The owning player, for player pieces.
    #[must_use]
    pub const fn owner(self) -> Option<PlayerId> {
        match self {
            PieceKind::Player(p) => Some(p),
            _ => None,
        }
    }

    /// Whether a jump may pass over this piece.
    ///
    /// Player pieces are jumpable, including the one doing the jumping.
    #[must_use]
    pub const fn can_be_jumped(self) -> bool {
        !matches!(self, PieceKind::Unjumpable)
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PieceKind::Player(p) => write!(f, "{}", p.0),
            PieceKind::Jumpable => f.write_str("jumpable"),
            PieceKind::Unjumpable => f.write_str("unjumpable"),
        }
    }
}

/// Parses the textual tags used by interaction layers: `"jumpable"`,
/// `"unjumpable"`, or a decimal player index.
///
/// ```
/// use hexjump::core::{PieceKind, PlayerId};
///
/// assert_eq!("2".parse::<PieceKind>().unwrap(), PieceKind::Player(PlayerId(2)));
/// assert_eq!("Unjumpable".parse::<PieceKind>().unwrap(), PieceKind::Unjumpable);
/// assert!("queen".parse::<PieceKind>().is_err());
/// ```
impl FromStr for PieceKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        if tag.eq_ignore_ascii_case("jumpable") {
            return Ok(PieceKind::Jumpable);
        }
        if tag.eq_ignore_ascii_case("unjumpable") {
            return Ok(PieceKind::Unjumpable);
        }
        tag.parse::<u8>()
            .map(PieceKind::player)
            .map_err(|_| PieceError::UnknownKind { input: s.to_string() }.into())
    }
}
