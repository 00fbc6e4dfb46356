//! Carrying game metadata over to a transformed game.

use chessflip_pgn::Headers;

use crate::error::TransformError;

/// Tags every transformed game copies from its source, in output order.
pub const REQUIRED_HEADERS: [&str; 7] = ["Event", "Site", "Date", "Round", "White", "Black", "Result"];

/// Optional tags copied when present.
pub const OPTIONAL_HEADERS: [&str; 1] = ["PlyCount"];

/// Build the tag set of a transformed game from its source's tags.
///
/// Only [`REQUIRED_HEADERS`] and [`OPTIONAL_HEADERS`] are copied. Setup tags
/// are not: the writer derives them from the transformed starting board.
///
/// # Errors
///
/// Returns [`TransformError::MissingHeader`] if a required tag is absent.
pub fn project_headers(source: &Headers) -> Result<Headers, TransformError> {
    let mut projected = Headers::new();
    for name in REQUIRED_HEADERS {
        let value = source
            .get(name)
            .ok_or(TransformError::MissingHeader { name })?;
        projected.set(name, value);
    }
    for name in OPTIONAL_HEADERS {
        if let Some(value) = source.get(name) {
            projected.set(name, value);
        }
    }
    Ok(projected)
}
