//! Game state engine tests.
//!
//! These tests drive `GameEngine` the way an interaction layer would:
//! set up a board, register players, place pieces, then move.

use hexjump::core::{
    BoardError, Coord, EngineError, ErrorKind, PathError, PieceError, PieceKind, PlayerError,
    PlayerId,
};
use hexjump::rules::GameEngine;
use hexjump::setup::{shapes, GameSetup};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn c(x: i32, y: i32) -> Coord {
    Coord::new(x, y)
}

/// A radius-3 hexagon with two players and nothing on it.
fn two_player_hexagon() -> GameEngine {
    GameSetup::new()
        .board(shapes::hexagon(3))
        .players(2)
        .build()
        .unwrap()
}

// =============================================================================
// Board and pieces
// =============================================================================

/// Test that adding a tile twice is the same as adding it once.
#[test]
fn test_board_add_idempotent() {
    let mut once = GameEngine::new();
    once.board_add((1, 1));
    let mut twice = GameEngine::new();
    twice.board_add((1, 1)).board_add((1, 1));

    assert_eq!(once.board(), twice.board());
}

/// Test that removing an absent piece is a no-op.
#[test]
fn test_piece_remove_absent() {
    let mut engine = two_player_hexagon();
    let before = engine.pieces();
    assert_eq!(engine.piece_remove((0, 0)), None);
    assert_eq!(engine.piece_remove((50, 50)), None);
    assert_eq!(engine.pieces(), before);
}

/// Test that malformed raw tiles are rejected as a whole.
#[test]
fn test_board_add_many_rejects_malformed() {
    let mut engine = GameEngine::new();
    let err = engine
        .board_add_many(vec![vec![0i64, 0], vec![1, 0], vec![2, 0, 0]])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidKey);
    assert!(engine.board().is_empty());

    engine.board_add_many(vec![[0i64, 0], [1, 0]]).unwrap();
    assert_eq!(engine.board().len(), 2);
}

/// Test that copies returned by getters never alias engine storage.
#[test]
fn test_getters_return_copies() {
    let mut engine = two_player_hexagon();
    engine.piece_add((0, 0), PieceKind::player(0)).unwrap();

    let mut board = engine.board();
    let mut pieces = engine.pieces();
    board.clear();
    pieces.insert((0, 0), PieceKind::Unjumpable);
    pieces.insert((99, 99), PieceKind::Jumpable);

    assert_eq!(engine.board().len(), 37);
    assert_eq!(engine.piece_at((0, 0)), Some(PieceKind::player(0)));
    assert_eq!(engine.piece_count(), 1);
    assert!(engine.validate().is_ok());
}

/// Test that a piece must be removed before its tile.
#[test]
fn test_tile_removal_needs_empty_tile() {
    let mut engine = two_player_hexagon();
    engine.piece_add((1, 1), PieceKind::Jumpable).unwrap();

    let err = engine.board_remove_where(|at| at.y == 1).unwrap_err();
    assert_eq!(err, EngineError::Piece(PieceError::BlocksTileRemoval { at: c(1, 1) }));

    engine.piece_remove_where(|at, _| at.y == 1);
    engine.board_remove_where(|at| at.y == 1).unwrap();
    assert!(!engine.is_tile((1, 1)));
    assert!(engine.is_tile((1, 0)));
}

// =============================================================================
// Players
// =============================================================================

/// Test that popping a player with a piece on the board fails until the
/// piece is removed, and that the turn falls back to player 0.
#[test]
fn test_player_removal_guard() {
    init_logging();
    let mut engine = GameSetup::new()
        .board(shapes::hexagon(2))
        .players(3)
        .piece((1, 0), PieceKind::player(2))
        .starting_player(PlayerId::new(2))
        .build()
        .unwrap();

    let err = engine.player_pop(1).unwrap_err();
    assert_eq!(
        err,
        EngineError::Player(PlayerError::PiecesRemain {
            player: PlayerId::new(2),
            at: c(1, 0)
        })
    );
    assert_eq!(engine.player_num(), 3);

    engine.piece_remove((1, 0));
    engine.player_pop(1).unwrap();
    assert_eq!(engine.player_num(), 2);
    assert_eq!(engine.current_player(), Some(PlayerId::new(0)));
}

/// Test that popping players keeps the current player when still valid.
#[test]
fn test_player_pop_keeps_valid_current() {
    let mut engine = GameEngine::new();
    engine.player_add(4).unwrap();
    engine.set_current_player(PlayerId::new(1)).unwrap();
    engine.player_pop(2).unwrap();
    assert_eq!(engine.current_player(), Some(PlayerId::new(1)));
}

/// Test that pieces of players below the popped range do not block.
#[test]
fn test_player_pop_ignores_lower_players() {
    let mut engine = two_player_hexagon();
    engine.player_add(1).unwrap();
    engine.piece_add((0, 0), PieceKind::player(0)).unwrap();
    engine.piece_add((1, 0), PieceKind::player(1)).unwrap();

    engine.player_pop(1).unwrap();
    let err = engine.player_pop(1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Player);
}

// =============================================================================
// Moves
// =============================================================================

/// Test that a legal move passes the turn.
#[test]
fn test_move_transitions_turn() {
    init_logging();
    let mut engine = two_player_hexagon();
    engine.piece_add((0, 0), PieceKind::player(0)).unwrap();
    engine.piece_add((0, 2), PieceKind::player(1)).unwrap();
    assert_eq!(engine.current_player(), Some(PlayerId::new(0)));

    let route = engine.move_piece((0, 0), (1, 0)).unwrap();
    assert_eq!(route.as_slice(), &[c(0, 0), c(1, 0)]);
    assert_eq!(engine.current_player(), Some(PlayerId::new(1)));
    assert_eq!(engine.piece_at((1, 0)), Some(PieceKind::player(0)));
    assert_eq!(engine.piece_at((0, 0)), None);

    engine.move_piece((0, 2), (0, 1)).unwrap();
    assert_eq!(engine.current_player(), Some(PlayerId::new(0)));
}

/// Test that a multi-jump move returns the whole route.
#[test]
fn test_move_returns_jump_route() {
    let mut engine = two_player_hexagon();
    engine.piece_add((-3, 0), PieceKind::player(0)).unwrap();
    engine.piece_add((-2, 0), PieceKind::Jumpable).unwrap();
    engine.piece_add((0, 0), PieceKind::player(1)).unwrap();
    engine.piece_add((2, 0), PieceKind::Jumpable).unwrap();

    let route = engine.move_piece((-3, 0), (3, 0)).unwrap();
    assert_eq!(route.as_slice(), &[c(-3, 0), c(-1, 0), c(1, 0), c(3, 0)]);
    assert_eq!(engine.piece_at((3, 0)), Some(PieceKind::player(0)));
    assert!(engine.validate().is_ok());
}

/// Test that an empty source is reported before anything else.
#[test]
fn test_move_from_empty_tile() {
    let mut engine = two_player_hexagon();
    let err = engine.move_piece((0, 0), (40, 40)).unwrap_err();
    assert_eq!(err, EngineError::Piece(PieceError::Empty { at: c(0, 0) }));

    let err = engine.move_piece((40, 40), (0, 0)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Piece);
}

/// Test that moving an opponent's or a neutral piece is a player error.
#[test]
fn test_move_wrong_owner() {
    let mut engine = two_player_hexagon();
    engine.piece_add((0, 0), PieceKind::player(1)).unwrap();
    engine.piece_add((2, 0), PieceKind::Jumpable).unwrap();

    let err = engine.move_piece((0, 0), (0, 0)).unwrap_err();
    assert_eq!(
        err,
        EngineError::Player(PlayerError::NotYourPiece {
            at: c(0, 0),
            current: PlayerId::new(0)
        })
    );
    assert_eq!(engine.move_piece((2, 0), (3, 0)).unwrap_err().kind(), ErrorKind::Player);
}

/// Test that moving onto the same tile is a path error.
#[test]
fn test_move_to_same_tile() {
    let mut engine = two_player_hexagon();
    engine.piece_add((0, 0), PieceKind::player(0)).unwrap();

    let err = engine.move_piece((0, 0), (0, 0)).unwrap_err();
    assert_eq!(err, EngineError::Path(PathError::SameTile { at: c(0, 0) }));
    assert_eq!(engine.current_player(), Some(PlayerId::new(0)));
}

/// Test the three reasons an unreached destination is rejected.
#[test]
fn test_move_unreached_destination() {
    let mut engine = two_player_hexagon();
    engine.piece_add((0, 0), PieceKind::player(0)).unwrap();
    engine.piece_add((1, 0), PieceKind::player(1)).unwrap();
    engine.piece_add((2, 0), PieceKind::Jumpable).unwrap();

    assert_eq!(
        engine.move_piece((0, 0), (10, 0)).unwrap_err(),
        EngineError::Board(BoardError::OffBoard { at: c(10, 0) })
    );
    assert_eq!(
        engine.move_piece((0, 0), (2, 0)).unwrap_err(),
        EngineError::Piece(PieceError::Occupied { at: c(2, 0) })
    );
    assert_eq!(
        engine.move_piece((0, 0), (3, 0)).unwrap_err(),
        EngineError::Path(PathError::Unreachable {
            from: c(0, 0),
            to: c(3, 0)
        })
    );
    assert_eq!(engine.current_player(), Some(PlayerId::new(0)));
    assert_eq!(engine.piece_count(), 3);
}

/// Test that explicit passing uses `player_next`.
#[test]
fn test_pass_with_player_next() {
    let mut engine = two_player_hexagon();
    assert_eq!(engine.player_next().unwrap(), PlayerId::new(1));
    assert_eq!(engine.player_next().unwrap(), PlayerId::new(0));
}

/// Test a few turns on a full star board.
#[test]
fn test_star_opening_moves() {
    init_logging();
    let mut engine = GameSetup::star(4, 2).build().unwrap();

    for _ in 0..6 {
        let player = engine.current_player().unwrap();
        let (from, to) = engine
            .pieces_of(player)
            .find_map(|from| {
                let paths = engine.paths(from).ok()?;
                let to = paths.destinations().next()?;
                Some((from, to))
            })
            .expect("some piece can move");

        let route = engine.move_piece(from, to).unwrap();
        assert_eq!(route.first(), Some(&from));
        assert_eq!(route.last(), Some(&to));
        assert!(engine.validate().is_ok());
    }
    assert_eq!(engine.piece_count(), 20);
}
