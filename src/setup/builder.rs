//! Initial game setup.

use log::debug;

use super::shapes;
use crate::core::{Coord, EngineError, PieceKind, PlayerId, Result};
use crate::grid::CoordSet;
use crate::rules::GameEngine;

/// Builder describing a starting position.
///
/// Nothing is validated until [`GameSetup::build`], which replays the
/// setup through the engine's own checks and reports the first failure.
///
/// ## Example
///
/// ```
/// use hexjump::core::{Coord, PieceKind};
/// use hexjump::setup::{shapes, GameSetup};
///
/// let engine = GameSetup::new()
///     .board(shapes::hexagon(2))
///     .players(2)
///     .piece((0, 0), PieceKind::Unjumpable)
///     .piece((2, 0), PieceKind::player(0))
///     .piece((-2, 0), PieceKind::player(1))
///     .build()
///     .unwrap();
///
/// assert_eq!(engine.board().len(), 19);
/// assert_eq!(engine.piece_count(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameSetup {
    board: CoordSet,
    player_num: usize,
    pieces: Vec<(Coord, PieceKind)>,
    starting_player: Option<PlayerId>,
    // Deferred so the builder stays chainable; reported by `build`.
    error: Option<EngineError>,
}

impl GameSetup {
    pub fn new() -> Self {
        Self::default()
    }

    /// A star board with `players` players, each filling one point of the
    /// star and facing the opposite point.
    ///
    /// Points are assigned so that every player's opposite point is empty
    /// where possible: 2 players take points 0 and 3, 3 players take 0, 2
    /// and 4, 4 players take 0, 1, 3 and 4, 6 players take all points.
    ///
    /// Any other player count makes [`GameSetup::build`] fail with
    /// `InvalidArgument`.
    pub fn star(arm: u16, players: usize) -> Self {
        let points: &[usize] = match players {
            2 => &[0, 3],
            3 => &[0, 2, 4],
            4 => &[0, 1, 3, 4],
            6 => &[0, 1, 2, 3, 4, 5],
            _ => {
                return Self {
                    error: Some(EngineError::InvalidArgument {
                        name: "players",
                        value: i64::try_from(players).unwrap_or(i64::MAX),
                    }),
                    ..Self::default()
                }
            }
        };

        let mut setup = Self::new().board(shapes::star(arm)).players(players);
        for (player, &point) in points.iter().enumerate() {
            match shapes::star_point(arm, point) {
                Ok(tiles) => setup = setup.fill(&tiles, PieceKind::player(player as u8)),
                Err(err) => setup.error = Some(err),
            }
        }
        setup
    }

    /// Add tiles to the board.
    pub fn board(mut self, tiles: CoordSet) -> Self {
        self.board.union_with(&tiles);
        self
    }

    pub fn players(mut self, count: usize) -> Self {
        self.player_num = count;
        self
    }

    pub fn piece(mut self, at: impl Into<Coord>, kind: PieceKind) -> Self {
        self.pieces.push((at.into(), kind));
        self
    }

    pub fn pieces(mut self, pieces: impl IntoIterator<Item = (Coord, PieceKind)>) -> Self {
        self.pieces.extend(pieces);
        self
    }

    /// Place a piece of `kind` on every tile of `tiles`.
    pub fn fill(mut self, tiles: &CoordSet, kind: PieceKind) -> Self {
        self.pieces.extend(tiles.iter().map(|at| (at, kind)));
        self
    }

    /// Which player moves first (player 0 by default).
    pub fn starting_player(mut self, player: PlayerId) -> Self {
        self.starting_player = Some(player);
        self
    }

    /// Build the engine.
    ///
    /// Fails with the engine's error for the first invalid step: a piece
    /// off the board, two pieces on one tile, a piece or starting player
    /// for an unregistered player, or an invalid player count. A star
    /// preset with an unsupported player count fails before anything else.
    pub fn build(self) -> Result<GameEngine> {
        if let Some(err) = self.error {
            return Err(err);
        }
        let mut engine = GameEngine::new();
        engine.board_union(&self.board);
        if self.player_num > 0 {
            engine.player_add(self.player_num)?;
        }
        for (at, kind) in self.pieces {
            engine.piece_add(at, kind)?;
        }
        if let Some(player) = self.starting_player {
            engine.set_current_player(player)?;
        }
        debug!(
            "built game: {} tiles, {} pieces, {} players",
            engine.board().len(),
            engine.piece_count(),
            engine.player_num()
        );
        Ok(engine)
    }
}
