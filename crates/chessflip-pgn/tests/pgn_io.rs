//! Integration tests for PGN reading and writing.
//!
//! Covers movetext features the reader must skip (comments, variations,
//! NAGs), custom starting positions, multi-game streams, and the writer's
//! output reading back to the same game.

use std::io::Cursor;

use chessflip_core::{Board, Move, Square};
use chessflip_pgn::{Game, PgnError, PgnReader, game_to_string, write_game};

const ANNOTATED: &str = r#"[Event "Club Championship"]
[Site "Springfield"]
[Date "2024.03.01"]
[Round "4"]
[White "Alpha"]
[Black "Beta"]
[Result "1-0"]
[PlyCount "5"]

1. e4 {King's pawn} e5 2. Nf3!? (2. f4 exf4 {gambit}) Nc6 $1 ; line comment
3. Bb5 1-0
"#;

const TWO_GAMES: &str = "[Event \"One\"]\n\n1. d4 d5 *\n\n[Event \"Two\"]\n\n1. c4 1/2-1/2\n";

fn read_all(text: &str) -> Vec<Result<Game, PgnError>> {
    PgnReader::new(Cursor::new(text.as_bytes())).collect()
}

fn read_one(text: &str) -> Game {
    let mut games = read_all(text);
    assert_eq!(games.len(), 1, "expected exactly one game");
    games.remove(0).unwrap()
}

// ── Reading ──────────────────────────────────────────────────────────────────

#[test]
fn skips_comments_variations_and_nags() {
    let game = read_one(ANNOTATED);
    let uci: Vec<String> = game.moves.iter().map(|mv| mv.to_uci()).collect();
    assert_eq!(uci, ["e2e4", "e7e5", "g1f3", "b8c6", "f1b5"]);
    assert_eq!(game.headers.get("White"), Some("Alpha"));
    assert_eq!(game.headers.get("PlyCount"), Some("5"));
    assert_eq!(game.result(), "1-0");
}

#[test]
fn reads_multiple_games() {
    let games: Vec<Game> = read_all(TWO_GAMES).into_iter().map(Result::unwrap).collect();
    assert_eq!(games.len(), 2);
    assert_eq!(games[0].headers.get("Event"), Some("One"));
    assert_eq!(games[0].moves.len(), 2);
    assert_eq!(games[1].headers.get("Event"), Some("Two"));
    assert_eq!(games[1].moves, vec![Move::new(Square::C2, Square::C4)]);
    assert_eq!(games[1].result(), "1/2-1/2");
}

#[test]
fn blank_line_ends_tagless_game() {
    let games: Vec<Game> = read_all("1. e4 e5 *\n\n1. d4 d5 *\n")
        .into_iter()
        .map(Result::unwrap)
        .collect();
    assert_eq!(games.len(), 2);
    assert_eq!(games[0].moves[0], Move::new(Square::E2, Square::E4));
    assert_eq!(games[1].moves[0], Move::new(Square::D2, Square::D4));
}

#[test]
fn blank_line_inside_comment_keeps_game_open() {
    let game = read_one("1. e4 {first line\n\nsecond line} e5 *\n");
    assert_eq!(game.moves.len(), 2);
}

#[test]
fn comment_may_follow_result() {
    let game = read_one("1. e4 1-0 {White resigns? no, Black did}\n");
    assert_eq!(game.result(), "1-0");
}

#[test]
fn fills_roster_defaults() {
    let game = read_one("1. e4 *\n");
    assert_eq!(game.headers.get("Event"), Some("?"));
    assert_eq!(game.headers.get("Date"), Some("????.??.??"));
    assert_eq!(game.result(), "*");
    let names: Vec<&str> = game.headers.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["Event", "Site", "Date", "Round", "White", "Black", "Result"]);
}

#[test]
fn movetext_result_fills_unknown_result_tag() {
    let game = read_one("[Event \"x\"]\n\n1. f3 e5 2. g4 Qh4# 0-1\n");
    assert_eq!(game.result(), "0-1");
}

#[test]
fn honours_fen_tag() {
    let text = "[SetUp \"1\"]\n[FEN \"4k3/8/8/8/8/8/8/R3K3 b Q - 0 12\"]\n\n12... Kd7 13. O-O-O+ *\n";
    let game = read_one(text);
    let expected: Board = "4k3/8/8/8/8/8/8/R3K3 b Q - 0 12".parse().unwrap();
    assert_eq!(game.initial_board, expected);
    assert_eq!(game.moves[1], Move::new(Square::E1, Square::C1));
}

#[test]
fn strips_byte_order_mark() {
    let game = read_one("\u{feff}[Event \"Bom\"]\n\n1. e4 *\n");
    assert_eq!(game.headers.get("Event"), Some("Bom"));
}

#[test]
fn accepts_zero_castling_and_crlf() {
    let text = "[Event \"x\"]\r\n\r\n1. e4 e5 2. Nf3 Nc6 3. Bc4 Bc5 4. 0-0 *\r\n";
    let game = read_one(text);
    assert_eq!(game.moves.last(), Some(&Move::new(Square::E1, Square::G1)));
}

#[test]
fn empty_input_has_no_games() {
    assert!(read_all("").is_empty());
    assert!(read_all("\n\n  \n").is_empty());
}

// ── Errors ───────────────────────────────────────────────────────────────────

#[test]
fn illegal_san_reports_ply() {
    let err = read_all("1. e4 e5 2. Ke3 *\n").remove(0).unwrap_err();
    assert!(matches!(err, PgnError::InvalidSan { ply: 3, .. }), "{err}");
}

#[test]
fn malformed_tag_reports_line() {
    let err = read_all("[Event \"ok\"]\n[Site broken]\n\n1. e4 *\n")
        .remove(0)
        .unwrap_err();
    assert!(matches!(err, PgnError::MalformedTag { line: 2, .. }), "{err}");
}

#[test]
fn bad_fen_tag() {
    let err = read_all("[FEN \"not a fen\"]\n\n*\n").remove(0).unwrap_err();
    assert!(matches!(err, PgnError::InvalidFen { .. }), "{err}");
}

#[test]
fn moves_after_result_are_reported() {
    let err = read_all("1. e4 e5 * 1. d4 d5 *\n").remove(0).unwrap_err();
    assert!(
        matches!(&err, PgnError::TextAfterResult { line: 1, text } if text == "1."),
        "{err}"
    );
}

#[test]
fn unterminated_comment() {
    let err = read_all("1. e4 {never closed\n").remove(0).unwrap_err();
    assert!(matches!(err, PgnError::UnterminatedComment { line: 1 }), "{err}");
}

// ── Writing ──────────────────────────────────────────────────────────────────

#[test]
fn written_game_reads_back() {
    let game = read_one(ANNOTATED);
    let text = game_to_string(&game).unwrap();
    let again = read_one(&text);
    assert_eq!(again, game);
}

#[test]
fn written_setup_game_reads_back() {
    let text = "[SetUp \"1\"]\n[FEN \"4k3/8/8/8/8/8/8/R3K3 b Q - 0 12\"]\n\n12... Kd7 13. O-O-O+ *\n";
    let game = read_one(text);
    let mut out = Vec::new();
    write_game(&mut out, &game).unwrap();
    let written = String::from_utf8(out).unwrap();
    assert!(written.contains("12... Kd7 13. O-O-O+ *"));
    assert_eq!(read_one(&written), game);
}
