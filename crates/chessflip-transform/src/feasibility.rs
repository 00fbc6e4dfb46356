//! Deciding up front whether a symmetry can keep a game legal.
//!
//! Two checks run at different granularities. The per-game check looks at
//! the starting board once; the per-move check replays the source game and
//! inspects each move on the board it was played from.

use chessflip_core::{Board, MoveError};
use chessflip_pgn::Game;

use crate::symmetry::Symmetry;

/// Why a (game, symmetry) pair produced no output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InfeasibleReason {
    /// The game castles, and the symmetry swaps the king and queen sides.
    #[error("castling at ply {ply} cannot survive a file flip")]
    Castling {
        /// One-based ply of the first castling move.
        ply: usize,
    },

    /// The starting board has pawns, which would walk backwards.
    #[error("{count} pawn(s) on the starting board")]
    PawnsPresent {
        /// Number of pawns on the starting board.
        count: u32,
    },

    /// The board refused a move while replaying.
    #[error("move at ply {ply} rejected: {source}")]
    Rejected {
        /// One-based ply of the rejected move.
        ply: usize,
        /// The board's verdict.
        source: MoveError,
    },
}

/// Per-game check: pawns on the starting board rule out `symmetry` when it
/// flips ranks without swapping colors.
pub fn check_initial_board(symmetry: Symmetry, board: &Board) -> Result<(), InfeasibleReason> {
    if symmetry.forbids_pawns() && board.has_pawns() {
        return Err(InfeasibleReason::PawnsPresent {
            count: board.pawn_count(),
        });
    }
    Ok(())
}

/// Per-move check: any castling move rules out `symmetry` when it flips
/// files.
///
/// The source game is replayed to know the board before each move. A source
/// move the board refuses is reported as [`InfeasibleReason::Rejected`].
pub fn check_moves(symmetry: Symmetry, game: &Game) -> Result<(), InfeasibleReason> {
    if !symmetry.forbids_castling() {
        return Ok(());
    }

    let mut board = game.initial_board;
    for (index, &mv) in game.moves.iter().enumerate() {
        let ply = index + 1;
        if board.is_castling(mv) {
            return Err(InfeasibleReason::Castling { ply });
        }
        board = board
            .play(mv)
            .map_err(|source| InfeasibleReason::Rejected { ply, source })?;
    }
    Ok(())
}

/// Run both checks, the per-game one first.
pub fn check(symmetry: Symmetry, game: &Game) -> Result<(), InfeasibleReason> {
    check_initial_board(symmetry, &game.initial_board)?;
    check_moves(symmetry, game)
}

#[cfg(test)]
mod tests {
    use chessflip_core::{Board, Move, Square};
    use chessflip_pgn::{Game, Headers};

    use super::{InfeasibleReason, check, check_initial_board, check_moves};
    use crate::symmetry::Symmetry;

    fn game(fen: &str, moves: &[Move]) -> Game {
        let mut game = Game::new(Headers::with_roster(), fen.parse().unwrap());
        game.moves.extend_from_slice(moves);
        game
    }

    #[test]
    fn pawns_block_rank_flips_only() {
        let board = Board::starting_position();
        assert_eq!(
            check_initial_board(Symmetry::VerticalFlip, &board),
            Err(InfeasibleReason::PawnsPresent { count: 16 })
        );
        assert!(check_initial_board(Symmetry::Rotate, &board).is_err());
        assert!(check_initial_board(Symmetry::Mirror, &board).is_ok());
        assert!(check_initial_board(Symmetry::HorizontalFlip, &board).is_ok());
    }

    #[test]
    fn castling_blocks_file_flips_only() {
        let castles = game(
            "4k3/8/8/8/8/8/8/4K2R w K - 0 1",
            &[Move::new(Square::E1, Square::G1)],
        );
        assert_eq!(
            check_moves(Symmetry::HorizontalFlip, &castles),
            Err(InfeasibleReason::Castling { ply: 1 })
        );
        assert!(check_moves(Symmetry::Rotate, &castles).is_err());
        assert!(check_moves(Symmetry::Mirror, &castles).is_ok());
        assert!(check_moves(Symmetry::VerticalFlip, &castles).is_ok());
    }

    #[test]
    fn castling_reported_at_first_occurrence() {
        let moves = [
            Move::new(Square::H1, Square::H2),
            Move::new(Square::E8, Square::G8),
        ];
        let castles = game("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", &moves);
        assert_eq!(
            check_moves(Symmetry::HorizontalFlip, &castles),
            Err(InfeasibleReason::Castling { ply: 2 })
        );
    }

    #[test]
    fn pawn_check_runs_first() {
        let castles = game(
            "4k3/4p3/8/8/8/8/8/4K2R w K - 0 1",
            &[Move::new(Square::E1, Square::G1)],
        );
        assert_eq!(
            check(Symmetry::Rotate, &castles),
            Err(InfeasibleReason::PawnsPresent { count: 1 })
        );
    }

    #[test]
    fn broken_source_game_is_rejected() {
        let broken = game(
            "4k3/8/8/8/8/8/8/4K2R w K - 0 1",
            &[Move::new(Square::H1, Square::A8)],
        );
        assert!(matches!(
            check_moves(Symmetry::HorizontalFlip, &broken),
            Err(InfeasibleReason::Rejected { ply: 1, .. })
        ));
    }
}
