//! The game model: tag pairs, a starting position, and the main line.

use chessflip_core::{Board, Move, MoveError};

/// The seven-tag roster with the defaults used when a tag is absent.
pub const ROSTER: [(&str, &str); 7] = [
    ("Event", "?"),
    ("Site", "?"),
    ("Date", "????.??.??"),
    ("Round", "?"),
    ("White", "?"),
    ("Black", "?"),
    ("Result", "*"),
];

/// Ordered tag pairs. Setting an existing name replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    pairs: Vec<(String, String)>,
}

impl Headers {
    /// Create an empty tag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tag set holding the seven-tag roster with default values.
    pub fn with_roster() -> Self {
        let mut headers = Self::new();
        for (name, value) in ROSTER {
            headers.set(name, value);
        }
        headers
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set `name` to `value`, keeping the original position if it exists.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => *slot = value,
            None => self.pairs.push((name, value)),
        }
    }

    /// Remove `name`, returning its value if it was present.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.pairs.iter().position(|(key, _)| key == name)?;
        Some(self.pairs.remove(index).1)
    }

    /// Iterate over tag pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// A recorded game: tags, the position it starts from, and its main line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub headers: Headers,
    pub initial_board: Board,
    pub moves: Vec<Move>,
}

impl Game {
    /// Create a game with no moves.
    pub fn new(headers: Headers, initial_board: Board) -> Self {
        Self {
            headers,
            initial_board,
            moves: Vec::new(),
        }
    }

    /// Number of half-moves in the main line.
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    /// Replay the main line and return the board before each move, followed
    /// by the final board.
    pub fn positions(&self) -> Result<Vec<Board>, MoveError> {
        let mut boards = Vec::with_capacity(self.moves.len() + 1);
        let mut board = self.initial_board;
        boards.push(board);
        for &mv in &self.moves {
            board = board.play(mv)?;
            boards.push(board);
        }
        Ok(boards)
    }

    /// The `Result` tag, or `*` when it is absent.
    pub fn result(&self) -> &str {
        self.headers.get("Result").unwrap_or("*")
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Headers::with_roster(), Board::starting_position())
    }
}

#[cfg(test)]
mod tests {
    use chessflip_core::{Board, Move, Square};

    use super::{Game, Headers};

    #[test]
    fn set_replaces_in_place() {
        let mut headers = Headers::with_roster();
        headers.set("Annotator", "me");
        headers.set("Event", "Casual");
        let names: Vec<&str> = headers.iter().map(|(k, _)| k).collect();
        assert_eq!(names[0], "Event");
        assert_eq!(names.last(), Some(&"Annotator"));
        assert_eq!(headers.get("Event"), Some("Casual"));
        assert_eq!(headers.len(), 8);
    }

    #[test]
    fn remove_returns_value() {
        let mut headers = Headers::new();
        headers.set("PlyCount", "3");
        assert_eq!(headers.remove("PlyCount"), Some("3".to_string()));
        assert!(headers.is_empty());
        assert_eq!(headers.remove("PlyCount"), None);
    }

    #[test]
    fn positions_replays_main_line() {
        let mut game = Game::default();
        game.moves.push(Move::new(Square::E2, Square::E4));
        game.moves.push(Move::new(Square::E7, Square::E5));
        let boards = game.positions().unwrap();
        assert_eq!(boards.len(), 3);
        assert_eq!(boards[0], Board::starting_position());
        assert_eq!(boards[2].fullmove_number(), 2);
        assert_eq!(game.ply_count(), 2);
        assert_eq!(game.result(), "*");
    }

    #[test]
    fn positions_reports_illegal_move() {
        let mut game = Game::default();
        game.moves.push(Move::new(Square::E2, Square::E5));
        assert!(game.positions().is_err());
    }
}
