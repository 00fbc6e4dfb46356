//! PGN export.

use std::io::Write;

use chessflip_core::{Board, Color};

use crate::error::PgnError;
use crate::game::{Game, ROSTER};

/// Movetext lines are wrapped before this column.
const LINE_WIDTH: usize = 80;

/// Write `game` as PGN: the tag section, a blank line, then the movetext
/// ending with the result token. No trailing newline is written.
///
/// The seven-tag roster comes first, filled with defaults where missing.
/// A game that does not start from the standard position gets `SetUp` and
/// `FEN` tags describing its initial board.
///
/// # Errors
///
/// Returns [`PgnError::Io`] if writing fails, or [`PgnError::IllegalMove`]
/// if the main line does not replay from the initial board.
pub fn write_game<W: Write>(writer: &mut W, game: &Game) -> Result<(), PgnError> {
    let text = game_to_string(game)?;
    writer.write_all(text.as_bytes())?;
    Ok(())
}

/// Render `game` as PGN text. See [`write_game`].
pub fn game_to_string(game: &Game) -> Result<String, PgnError> {
    let mut out = String::new();

    for (name, default) in ROSTER {
        push_tag(&mut out, name, game.headers.get(name).unwrap_or(default));
    }
    if game.initial_board != Board::starting_position() {
        push_tag(&mut out, "SetUp", "1");
        push_tag(&mut out, "FEN", &game.initial_board.to_string());
    }
    for (name, value) in game.headers.iter() {
        let is_roster = ROSTER.iter().any(|(roster, _)| *roster == name);
        if !is_roster && name != "SetUp" && name != "FEN" {
            push_tag(&mut out, name, value);
        }
    }
    out.push('\n');

    let mut tokens = movetext_tokens(game)?;
    tokens.push(game.result().to_string());
    wrap_tokens(&mut out, &tokens);
    Ok(out)
}

fn push_tag(out: &mut String, name: &str, value: &str) {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    out.push_str(&format!("[{name} \"{escaped}\"]\n"));
}

/// SAN tokens with move numbers, in the order they are written.
fn movetext_tokens(game: &Game) -> Result<Vec<String>, PgnError> {
    let mut tokens = Vec::with_capacity(game.moves.len() * 3 / 2 + 1);
    let mut board = game.initial_board;

    for (index, &mv) in game.moves.iter().enumerate() {
        let number = board.fullmove_number();
        match board.side_to_move() {
            Color::White => tokens.push(format!("{number}.")),
            Color::Black if index == 0 => tokens.push(format!("{number}...")),
            Color::Black => {}
        }
        tokens.push(board.san(mv));
        board = board
            .play(mv)
            .map_err(|source| PgnError::IllegalMove {
                ply: index + 1,
                source,
            })?;
    }
    Ok(tokens)
}

fn wrap_tokens(out: &mut String, tokens: &[String]) {
    let mut line_len = 0usize;
    for token in tokens {
        if line_len > 0 && line_len + 1 + token.len() > LINE_WIDTH {
            out.push('\n');
            line_len = 0;
        }
        if line_len > 0 {
            out.push(' ');
            line_len += 1;
        }
        out.push_str(token);
        line_len += token.len();
    }
}

#[cfg(test)]
mod tests {
    use chessflip_core::{Board, Move, Square};

    use super::{game_to_string, wrap_tokens};
    use crate::game::{Game, Headers};

    #[test]
    fn roster_defaults_and_movetext() {
        let mut game = Game::new(Headers::new(), Board::starting_position());
        game.moves.push(Move::new(Square::E2, Square::E4));
        game.moves.push(Move::new(Square::E7, Square::E5));
        game.moves.push(Move::new(Square::G1, Square::F3));
        let text = game_to_string(&game).unwrap();
        assert_eq!(
            text,
            "[Event \"?\"]\n[Site \"?\"]\n[Date \"????.??.??\"]\n[Round \"?\"]\n\
             [White \"?\"]\n[Black \"?\"]\n[Result \"*\"]\n\n1. e4 e5 2. Nf3 *"
        );
    }

    #[test]
    fn setup_tags_for_custom_start() {
        let board: Board = "4k3/8/8/8/8/8/8/4K2R b K - 0 7".parse().unwrap();
        let mut headers = Headers::with_roster();
        headers.set("PlyCount", "2");
        headers.set("Result", "1-0");
        let mut game = Game::new(headers, board);
        game.moves.push(Move::new(Square::E8, Square::D7));
        game.moves.push(Move::new(Square::E1, Square::G1));
        let text = game_to_string(&game).unwrap();
        assert!(text.contains("[Result \"1-0\"]\n[SetUp \"1\"]\n[FEN \"4k3/8/8/8/8/8/8/4K2R b K - 0 7\"]\n[PlyCount \"2\"]\n"));
        assert!(text.ends_with("\n\n7... Kd7 8. O-O 1-0"));
    }

    #[test]
    fn escapes_tag_values() {
        let mut headers = Headers::with_roster();
        headers.set("Event", "A \"quoted\" \\ event");
        let text = game_to_string(&Game::new(headers, Board::starting_position())).unwrap();
        assert!(text.starts_with("[Event \"A \\\"quoted\\\" \\\\ event\"]\n"));
    }

    #[test]
    fn wraps_at_eighty_columns() {
        let tokens: Vec<String> = (0..30).map(|i| format!("tok{i:02}")).collect();
        let mut out = String::new();
        wrap_tokens(&mut out, &tokens);
        assert!(out.lines().count() > 1);
        assert!(out.lines().all(|line| line.len() <= 80));
        assert_eq!(out.split_whitespace().count(), 30);
    }
}
