//! Game state engine.
//!
//! `GameEngine` owns the board (a `CoordSet` of tiles), the pieces (a
//! `CoordMap` from tile to `PieceKind`), the number of registered players,
//! and whose turn it is. Every mutation checks its preconditions before
//! touching state, so a failed call leaves the engine exactly as it was.
//!
//! ## Invariants
//!
//! - every piece stands on a board tile
//! - every player piece belongs to a registered player
//! - `current_player` is `None` exactly when no players are registered,
//!   otherwise it names a registered player
//!
//! ## Usage
//!
//! ```
//! use hexjump::core::{Coord, PieceKind, PlayerId};
//! use hexjump::rules::GameEngine;
//!
//! let mut engine = GameEngine::new();
//! engine.board_add_many((0..5).map(|x| Coord::new(x, 0))).unwrap();
//! engine.player_add(2).unwrap();
//! engine.piece_add((0, 0), PieceKind::player(0)).unwrap();
//! engine.piece_add((1, 0), PieceKind::Jumpable).unwrap();
//!
//! let route = engine.move_piece((0, 0), (2, 0)).unwrap();
//! assert_eq!(route.as_slice(), &[Coord::new(0, 0), Coord::new(2, 0)]);
//! assert_eq!(engine.current_player(), Some(PlayerId::new(1)));
//! ```

use log::{debug, trace};

use super::search::{self, Paths, Route};
use crate::core::{
    BoardError, Coord, EngineError, IntoCoord, PathError, PieceError, PieceKind, PlayerError,
    PlayerId, Result, MAX_PLAYERS,
};
use crate::grid::{CoordMap, CoordSet};

#[derive(Clone, Debug, Default)]
pub struct GameEngine {
    board: CoordSet,
    pieces: CoordMap<PieceKind>,
    player_num: usize,
    current_player: Option<PlayerId>,
}

impl GameEngine {
    /// Create an engine with no tiles, no pieces and no players.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Accessors ===

    /// A copy of the board. Mutating it does not affect the engine.
    #[must_use]
    pub fn board(&self) -> CoordSet {
        self.board.clone()
    }

    /// A copy of the piece map. Mutating it does not affect the engine.
    #[must_use]
    pub fn pieces(&self) -> CoordMap<PieceKind> {
        self.pieces.clone()
    }

    #[must_use]
    pub fn player_num(&self) -> usize {
        self.player_num
    }

    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.current_player
    }

    #[must_use]
    pub fn is_tile(&self, at: impl Into<Coord>) -> bool {
        self.board.contains(at)
    }

    #[must_use]
    pub fn piece_at(&self, at: impl Into<Coord>) -> Option<PieceKind> {
        self.pieces.get(at).copied()
    }

    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Tiles holding a piece of `player`, in placement order.
    pub fn pieces_of(&self, player: PlayerId) -> impl Iterator<Item = Coord> + '_ {
        self.pieces
            .iter()
            .filter(move |(_, kind)| kind.owner() == Some(player))
            .map(|(at, _)| at)
    }

    // === Board ===

    /// Add a tile. Adding an existing tile changes nothing.
    pub fn board_add(&mut self, at: impl Into<Coord>) -> &mut Self {
        self.board.insert(at);
        self
    }

    /// Add many tiles from raw input.
    ///
    /// Fails with `InvalidKey` if any element is malformed, in which case no
    /// tile is added.
    pub fn board_add_many<I>(&mut self, coords: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: IntoCoord,
    {
        self.board.try_extend(coords)
    }

    /// Add every tile of an existing set.
    pub fn board_union(&mut self, tiles: &CoordSet) -> &mut Self {
        self.board.union_with(tiles);
        self
    }

    /// Remove a tile. The tile must be empty; removing a missing tile is
    /// not an error.
    pub fn board_remove(&mut self, at: impl Into<Coord>) -> Result<()> {
        let at = at.into();
        if self.pieces.contains(at) {
            return Err(PieceError::BlocksTileRemoval { at }.into());
        }
        self.board.remove(at);
        Ok(())
    }

    /// Remove every tile matching `predicate`.
    ///
    /// Fails without removing anything if a matching tile holds a piece.
    pub fn board_remove_where(&mut self, mut predicate: impl FnMut(Coord) -> bool) -> Result<()> {
        let doomed: Vec<Coord> = self.board.iter().filter(|&at| predicate(at)).collect();
        if let Some(&at) = doomed.iter().find(|&&at| self.pieces.contains(at)) {
            return Err(PieceError::BlocksTileRemoval { at }.into());
        }
        for at in doomed {
            self.board.remove(at);
        }
        Ok(())
    }

    /// Remove every tile. Fails if any piece is still on the board.
    pub fn board_clear(&mut self) -> Result<()> {
        self.board_remove_where(|_| true)
    }

    // === Pieces ===

    /// Place a piece on an empty tile.
    ///
    /// Checks, in order: the tile exists (`Board`), the tile is empty
    /// (`Piece`), a player piece belongs to a registered player (`Player`).
    pub fn piece_add(&mut self, at: impl Into<Coord>, kind: PieceKind) -> Result<()> {
        let at = at.into();
        if !self.board.contains(at) {
            return Err(BoardError::OffBoard { at }.into());
        }
        if self.pieces.contains(at) {
            return Err(PieceError::Occupied { at }.into());
        }
        if let PieceKind::Player(player) = kind {
            if !player.is_registered(self.player_num) {
                return Err(PlayerError::OutOfRange {
                    player,
                    player_num: self.player_num,
                }
                .into());
            }
        }
        self.pieces.insert(at, kind);
        Ok(())
    }

    /// Remove the piece at `at`, if any, returning it.
    pub fn piece_remove(&mut self, at: impl Into<Coord>) -> Option<PieceKind> {
        self.pieces.remove(at)
    }

    /// Remove every piece matching `predicate`.
    pub fn piece_remove_where(&mut self, mut predicate: impl FnMut(Coord, PieceKind) -> bool) {
        self.pieces.retain(|at, kind| !predicate(at, *kind));
    }

    pub fn piece_clear(&mut self) {
        self.pieces.clear();
    }

    // === Players ===

    /// Register `n` more players. The first registration makes player 0
    /// current.
    pub fn player_add(&mut self, n: usize) -> Result<()> {
        let total = self.player_num.checked_add(n).filter(|&t| t <= MAX_PLAYERS);
        let total = match total {
            Some(total) if n > 0 => total,
            _ => return Err(invalid_count(n)),
        };
        if self.player_num == 0 {
            self.current_player = Some(PlayerId::new(0));
        }
        self.player_num = total;
        debug!("registered {} players, now {}", n, total);
        Ok(())
    }

    /// Unregister the `n` highest-indexed players.
    ///
    /// Fails if any of them still has a piece on the board. If the current
    /// player is removed, turn passes to player 0.
    pub fn player_pop(&mut self, n: usize) -> Result<()> {
        if n == 0 {
            return Err(invalid_count(n));
        }
        let remaining = self.player_num - n.min(self.player_num);

        let blocking = self
            .pieces
            .iter()
            .find_map(|(at, kind)| {
                kind.owner()
                    .filter(|p| !p.is_registered(remaining))
                    .map(|p| (at, p))
            });
        if let Some((at, player)) = blocking {
            return Err(PlayerError::PiecesRemain { player, at }.into());
        }

        self.player_num = remaining;
        self.current_player = match self.current_player {
            _ if remaining == 0 => None,
            Some(p) if p.is_registered(remaining) => Some(p),
            _ => Some(PlayerId::new(0)),
        };
        debug!("removed players, now {} (current {:?})", remaining, self.current_player);
        Ok(())
    }

    /// Pass the turn to the next player, wrapping around.
    pub fn player_next(&mut self) -> Result<PlayerId> {
        let current = self.current_player.ok_or(PlayerError::NoPlayers)?;
        let next = PlayerId::new(((current.index() + 1) % self.player_num) as u8);
        self.current_player = Some(next);
        Ok(next)
    }

    pub fn set_current_player(&mut self, player: PlayerId) -> Result<()> {
        if self.player_num == 0 {
            return Err(PlayerError::NoPlayers.into());
        }
        if !player.is_registered(self.player_num) {
            return Err(PlayerError::OutOfRange {
                player,
                player_num: self.player_num,
            }
            .into());
        }
        self.current_player = Some(player);
        debug!("current player set to {}", player);
        Ok(())
    }

    // === Movement ===

    /// Every tile reachable from `at` by a jump chain or a single step.
    ///
    /// A purely geometric query: `at` must be a tile, but need not hold a
    /// piece, and turn order is ignored.
    pub fn paths(&self, at: impl Into<Coord>) -> Result<Paths> {
        let at = at.into();
        if !self.board.contains(at) {
            return Err(BoardError::OffBoard { at }.into());
        }
        Ok(search::search(&self.board, &self.pieces, at))
    }

    /// Move the current player's piece from `from` to `to` and pass the turn.
    ///
    /// Returns the route taken, `from` and `to` inclusive. Checks, in order:
    /// 1. a piece stands on `from` (`Piece`)
    /// 2. it belongs to the current player (`Player`)
    /// 3. `from != to` (`Path`; use `player_next` to pass)
    /// 4. `to` is reachable; otherwise `Board` if off-board, `Piece` if
    ///    occupied, `Path` if simply out of reach
    pub fn move_piece(&mut self, from: impl Into<Coord>, to: impl Into<Coord>) -> Result<Route> {
        let (from, to) = (from.into(), to.into());
        let result = self.try_move(from, to);
        match &result {
            Ok(route) => debug!(
                "moved {} -> {} in {} hops, {:?} to play",
                from,
                to,
                route.len() - 1,
                self.current_player
            ),
            Err(err) => trace!("rejected move {} -> {}: {}", from, to, err),
        }
        result
    }

    fn try_move(&mut self, from: Coord, to: Coord) -> Result<Route> {
        let kind = self.piece_at(from).ok_or(PieceError::Empty { at: from })?;
        let current = self.current_player.ok_or(PlayerError::NoPlayers)?;
        if kind != PieceKind::Player(current) {
            return Err(PlayerError::NotYourPiece { at: from, current }.into());
        }
        if from == to {
            return Err(PathError::SameTile { at: from }.into());
        }

        let paths = self.paths(from)?;
        let Some(route) = paths.route_to(to) else {
            return Err(self.unreachable_reason(from, to));
        };

        self.player_next()?;
        self.pieces.remove(from);
        self.pieces.insert(to, kind);
        Ok(route)
    }

    fn unreachable_reason(&self, from: Coord, to: Coord) -> EngineError {
        if !self.board.contains(to) {
            BoardError::OffBoard { at: to }.into()
        } else if self.pieces.contains(to) {
            PieceError::Occupied { at: to }.into()
        } else {
            PathError::Unreachable { from, to }.into()
        }
    }

    // === Validation ===

    /// Re-check every state invariant.
    ///
    /// The mutation API maintains these already; this is for tests and for
    /// callers that want a cheap sanity check.
    pub fn validate(&self) -> Result<()> {
        for (at, kind) in self.pieces.iter() {
            if !self.board.contains(at) {
                return Err(BoardError::OffBoard { at }.into());
            }
            if let Some(player) = kind.owner() {
                if !player.is_registered(self.player_num) {
                    return Err(PlayerError::OutOfRange {
                        player,
                        player_num: self.player_num,
                    }
                    .into());
                }
            }
        }
        match self.current_player {
            None if self.player_num > 0 => Err(PlayerError::OutOfRange {
                player: PlayerId::new(0),
                player_num: self.player_num,
            }
            .into()),
            Some(_) if self.player_num == 0 => Err(PlayerError::NoPlayers.into()),
            Some(p) if !p.is_registered(self.player_num) => Err(PlayerError::OutOfRange {
                player: p,
                player_num: self.player_num,
            }
            .into()),
            _ => Ok(()),
        }
    }
}

fn invalid_count(n: usize) -> EngineError {
    EngineError::InvalidArgument {
        name: "n",
        value: i64::try_from(n).unwrap_or(i64::MAX),
    }
}
