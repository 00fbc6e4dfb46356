//! Rebuilding a legal game on a transformed board.

use tracing::{debug, trace};

use chessflip_pgn::Game;

use crate::error::TransformError;
use crate::feasibility::{self, InfeasibleReason};
use crate::headers::project_headers;
use crate::moves::transform_move;
use crate::symmetry::Symmetry;

/// A (game, symmetry) pair that produced no output, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Infeasible<'a> {
    pub symmetry: Symmetry,
    pub source: &'a Game,
    pub reason: InfeasibleReason,
}

/// Result of transforming one game under one symmetry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformOutcome<'a> {
    /// A new game, legal from its own starting board.
    Transformed(Game),
    /// The symmetry cannot keep this game legal. Nothing was produced.
    Infeasible(Infeasible<'a>),
}

impl TransformOutcome<'_> {
    /// The transformed game, if there is one.
    pub fn game(&self) -> Option<&Game> {
        match self {
            TransformOutcome::Transformed(game) => Some(game),
            TransformOutcome::Infeasible(_) => None,
        }
    }

    /// The reason for infeasibility, if any.
    pub fn reason(&self) -> Option<&InfeasibleReason> {
        match self {
            TransformOutcome::Transformed(_) => None,
            TransformOutcome::Infeasible(infeasible) => Some(&infeasible.reason),
        }
    }

    pub fn is_transformed(&self) -> bool {
        matches!(self, TransformOutcome::Transformed(_))
    }
}

/// Transform `game` under `symmetry`.
///
/// Headers are projected first, then the starting board is transformed and
/// the feasibility checks run. Each source move is then mapped through the
/// symmetry's square map and played on the transformed board; a move the
/// board refuses makes the whole pair infeasible. The source game is never
/// modified and no partial game is ever returned.
///
/// # Errors
///
/// Returns [`TransformError::MissingHeader`] if the source lacks a required
/// tag. Infeasibility is reported through [`TransformOutcome::Infeasible`].
pub fn transform_game(game: &Game, symmetry: Symmetry) -> Result<TransformOutcome<'_>, TransformError> {
    let headers = project_headers(&game.headers)?;
    let initial_board = symmetry.transform_board(&game.initial_board);

    let infeasible = |reason: InfeasibleReason| {
        debug!(%symmetry, %reason, "transform infeasible");
        Ok(TransformOutcome::Infeasible(Infeasible {
            symmetry,
            source: game,
            reason,
        }))
    };

    if let Err(reason) = feasibility::check(symmetry, game) {
        return infeasible(reason);
    }

    let square_map = symmetry.square_map();
    let mut board = initial_board;
    let mut moves = Vec::with_capacity(game.moves.len());
    for (index, &mv) in game.moves.iter().enumerate() {
        let mapped = transform_move(mv, square_map);
        board = match board.play(mapped) {
            Ok(next) => next,
            Err(source) => {
                return infeasible(InfeasibleReason::Rejected {
                    ply: index + 1,
                    source,
                });
            }
        };
        moves.push(mapped);
    }

    trace!(%symmetry, plies = moves.len(), "transform complete");
    let mut transformed = Game::new(headers, initial_board);
    transformed.moves = moves;
    Ok(TransformOutcome::Transformed(transformed))
}
