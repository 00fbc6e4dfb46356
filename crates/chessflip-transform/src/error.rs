//! Errors that abort a transform outright.

/// Errors from transforming a game.
///
/// An infeasible symmetry is not an error; see
/// [`TransformOutcome::Infeasible`](crate::TransformOutcome::Infeasible).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    /// The source game lacks a tag that every output game must carry.
    #[error("source game has no \"{name}\" header")]
    MissingHeader {
        /// The missing tag name.
        name: &'static str,
    },
}
