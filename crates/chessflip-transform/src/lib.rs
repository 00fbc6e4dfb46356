//! Symmetry transforms of recorded chess games.
//!
//! A game is mapped square by square onto a mirrored, flipped or rotated
//! board and then replayed move by move, so every produced game is legal in
//! its own right. Pairs of game and symmetry that cannot stay legal come back
//! as [`TransformOutcome::Infeasible`].

pub mod coords;
pub mod error;
pub mod feasibility;
pub mod headers;
pub mod moves;
pub mod reconstruct;
pub mod stats;
pub mod symmetry;

pub use error::TransformError;
pub use feasibility::InfeasibleReason;
pub use headers::project_headers;
pub use moves::transform_move;
pub use reconstruct::{Infeasible, TransformOutcome, transform_game};
pub use stats::TransformStats;
pub use symmetry::Symmetry;
