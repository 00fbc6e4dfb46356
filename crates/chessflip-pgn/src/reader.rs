//! Streaming PGN reader.
//!
//! Games are read one at a time from any [`BufRead`]. Only the main line is
//! kept: comments, variations and NAGs are skipped.

use std::io::BufRead;

use tracing::debug;

use chessflip_core::{Board, Move};

use crate::error::PgnError;
use crate::game::{Game, Headers};

/// Movetext tokens that end a game.
const RESULTS: [&str; 4] = ["1-0", "0-1", "1/2-1/2", "*"];

/// Reads games from a PGN stream.
///
/// Iterating yields one `Result<Game, PgnError>` per game and stops at the
/// end of input.
pub struct PgnReader<R> {
    reader: R,
    line_no: usize,
    /// A tag line that already belongs to the next game.
    peeked: Option<(usize, String)>,
}

/// Raw sections of one game before interpretation.
#[derive(Default)]
struct RawGame {
    tags: Vec<(usize, String)>,
    movetext: String,
    movetext_line: usize,
}

impl<R: BufRead> PgnReader<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            peeked: None,
        }
    }

    /// Read the next game, or `None` at the end of input.
    pub fn read_game(&mut self) -> Result<Option<Game>, PgnError> {
        let Some(raw) = self.read_raw()? else {
            return Ok(None);
        };
        let first_line = raw.tags.first().map_or(raw.movetext_line, |(line, _)| *line);

        let mut headers = Headers::with_roster();
        for (line, text) in &raw.tags {
            let (name, value) = parse_tag(text).ok_or_else(|| PgnError::MalformedTag {
                line: *line,
                text: text.clone(),
            })?;
            headers.set(name, value);
        }

        let initial_board = match headers.get("FEN") {
            Some(fen) => fen.parse::<Board>().map_err(|source| PgnError::InvalidFen {
                fen: fen.to_string(),
                source,
            })?,
            None => Board::starting_position(),
        };

        let mut game = Game::new(headers, initial_board);
        let result = parse_movetext(&raw.movetext, raw.movetext_line, &mut game)?;
        if let Some(result) = result.filter(|_| game.result() == "*") {
            game.headers.set("Result", result);
        }

        debug!(
            line = first_line,
            plies = game.ply_count(),
            "read game"
        );
        Ok(Some(game))
    }

    fn next_line(&mut self) -> Result<Option<(usize, String)>, PgnError> {
        if let Some(peeked) = self.peeked.take() {
            return Ok(Some(peeked));
        }
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        if self.line_no == 1 && buf.starts_with('\u{feff}') {
            buf.drain(..'\u{feff}'.len_utf8());
        }
        let trimmed_len = buf.trim_end_matches(['\r', '\n']).len();
        buf.truncate(trimmed_len);
        Ok(Some((self.line_no, buf)))
    }

    /// Collect the tag lines and movetext of one game.
    fn read_raw(&mut self) -> Result<Option<RawGame>, PgnError> {
        let mut raw = RawGame::default();
        let mut tags_closed = false;
        let mut in_comment = false;

        while let Some((line_no, line)) = self.next_line()? {
            let trimmed = line.trim();

            if !in_comment && trimmed.starts_with('[') {
                if tags_closed || !raw.movetext.is_empty() {
                    self.peeked = Some((line_no, line));
                    break;
                }
                raw.tags.push((line_no, trimmed.to_string()));
                continue;
            }

            if raw.movetext.is_empty() {
                if trimmed.is_empty() || trimmed.starts_with('%') {
                    tags_closed |= !raw.tags.is_empty();
                    continue;
                }
                raw.movetext_line = line_no;
            } else if trimmed.is_empty() && !in_comment {
                break;
            }

            in_comment = scan_comment_state(&line, in_comment);
            raw.movetext.push_str(&line);
            raw.movetext.push('\n');
        }

        if raw.tags.is_empty() && raw.movetext.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(raw))
    }
}

impl<R: BufRead> Iterator for PgnReader<R> {
    type Item = Result<Game, PgnError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_game().transpose()
    }
}

/// Whether a `{` comment is still open at the end of `line`.
fn scan_comment_state(line: &str, mut in_comment: bool) -> bool {
    for c in line.chars() {
        match (in_comment, c) {
            (true, '}') => in_comment = false,
            (false, '{') => in_comment = true,
            (false, ';') => break,
            _ => {}
        }
    }
    in_comment
}

/// Parse `[Name "value"]`, undoing `\"` and `\\` escapes in the value.
fn parse_tag(line: &str) -> Option<(String, String)> {
    let inner = line.strip_prefix('[')?.trim_start();
    let name_end = inner.find(|c: char| c.is_whitespace() || c == '"')?;
    let (name, rest) = inner.split_at(name_end);
    if name.is_empty() {
        return None;
    }

    let mut chars = rest.trim_start().strip_prefix('"')?.chars();
    let mut value = String::new();
    loop {
        match chars.next()? {
            '"' => break,
            '\\' => match chars.next()? {
                c @ ('"' | '\\') => value.push(c),
                other => {
                    value.push('\\');
                    value.push(other);
                }
            },
            c => value.push(c),
        }
    }

    chars
        .as_str()
        .trim_start()
        .starts_with(']')
        .then(|| (name.to_string(), value))
}

/// Walk the movetext, playing main-line moves into `game`. Returns the
/// result token if one was found.
///
/// Only comments may follow the result token.
fn parse_movetext(text: &str, first_line: usize, game: &mut Game) -> Result<Option<String>, PgnError> {
    let mut board = game.initial_board;
    let mut line = first_line;
    let mut variation_depth = 0usize;
    let mut result: Option<String> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        match c {
            '\n' => line += 1,
            c if result.is_some() && !c.is_whitespace() && c != '{' && c != ';' => {
                let stray = text[start..].split_whitespace().next().unwrap_or_default();
                return Err(PgnError::TextAfterResult {
                    line,
                    text: stray.to_string(),
                });
            }
            '{' => {
                let opened = line;
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, '\n')) => line += 1,
                        Some(_) => {}
                        None => return Err(PgnError::UnterminatedComment { line: opened }),
                    }
                }
            }
            ';' => {
                if chars.by_ref().any(|(_, ch)| ch == '\n') {
                    line += 1;
                }
            }
            '(' => variation_depth += 1,
            ')' => variation_depth = variation_depth.saturating_sub(1),
            '$' => {
                while chars.next_if(|(_, ch)| ch.is_ascii_digit()).is_some() {}
            }
            c if c.is_whitespace() => {}
            _ => {
                let end = text[start..]
                    .find(|ch: char| ch.is_whitespace() || "{}();$".contains(ch))
                    .map_or(text.len(), |offset| start + offset);
                while chars.next_if(|&(i, _)| i < end).is_some() {}

                if variation_depth > 0 {
                    continue;
                }
                let token = &text[start..end];
                if RESULTS.contains(&token) {
                    result = Some(token.to_string());
                    continue;
                }
                let san = strip_move_number(token);
                if san.is_empty() {
                    continue;
                }

                let ply = game.moves.len() + 1;
                let mv: Move = board
                    .parse_san(san)
                    .map_err(|source| PgnError::InvalidSan { ply, source })?;
                board = board
                    .play(mv)
                    .map_err(|source| PgnError::IllegalMove { ply, source })?;
                game.moves.push(mv);
            }
        }
    }
    Ok(result)
}

/// Drop a leading move number such as `12.` or `12...` from a token.
fn strip_move_number(token: &str) -> &str {
    if token.starts_with("0-0") {
        return token;
    }
    token
        .trim_start_matches(|c: char| c.is_ascii_digit())
        .trim_start_matches('.')
}
