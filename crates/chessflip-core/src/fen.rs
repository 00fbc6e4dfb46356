//! FEN string parsing and serialization for [`Board`].

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::FenError;
use crate::file::File;
use crate::piece::Piece;
use crate::rank::Rank;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl FromStr for Board {
    type Err = FenError;

    /// Parse a FEN string. The two move counters may be omitted and default
    /// to `0` and `1`.
    fn from_str(fen: &str) -> Result<Board, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if !(4..=6).contains(&fields.len()) {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let mut board = Board::empty();
        parse_placement(&mut board, fields[0])?;

        let side_to_move = Color::from_fen(fields[1]).ok_or_else(|| FenError::InvalidColor {
            found: fields[1].to_string(),
        })?;
        board.set_side_to_move(side_to_move);

        board.set_castling(CastleRights::from_fen(fields[2])?);

        let en_passant = match fields[3] {
            "-" => None,
            text => Some(
                Square::from_algebraic(text)
                    .filter(|sq| sq.rank() == en_passant_rank(side_to_move))
                    .ok_or_else(|| FenError::InvalidEnPassant {
                        found: text.to_string(),
                    })?,
            ),
        };
        board.set_en_passant(en_passant);

        board.set_halfmove_clock(parse_counter(fields.get(4), "halfmove clock", 0)?);
        board.set_fullmove_number(parse_counter(fields.get(5), "fullmove number", 1)?);

        board.validate()?;
        Ok(board)
    }
}

/// The rank an en passant target sits on when `side_to_move` is to move.
fn en_passant_rank(side_to_move: Color) -> Rank {
    match side_to_move {
        Color::White => Rank::Rank6,
        Color::Black => Rank::Rank3,
    }
}

fn parse_placement(board: &mut Board, placement: &str) -> Result<(), FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    // FEN lists rank 8 first.
    for (rank_index, (rank_str, rank)) in ranks.iter().zip(Rank::ALL.into_iter().rev()).enumerate() {
        let mut file_index: usize = 0;
        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                file_index += digit as usize;
                continue;
            }

            let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
            let Some(&file) = File::ALL.get(file_index) else {
                return Err(FenError::BadRankLength {
                    rank_index,
                    length: file_index + 1,
                });
            };
            board.put(Square::new(rank, file), piece);
            file_index += 1;
        }

        if file_index != 8 {
            return Err(FenError::BadRankLength {
                rank_index,
                length: file_index,
            });
        }
    }
    Ok(())
}

fn parse_counter(field: Option<&&str>, name: &'static str, default: u16) -> Result<u16, FenError> {
    match field {
        None => Ok(default),
        Some(text) => text.parse::<u16>().map_err(|_| FenError::InvalidMoveCounter {
            field: name,
            found: text.to_string(),
        }),
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rank) in Rank::ALL.into_iter().rev().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            let mut empty_count = 0u8;
            for file in File::ALL {
                match self.colored_piece_on(Square::new(rank, file)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{}", piece.fen_char())?;
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
        }

        write!(f, " {} {} ", self.side_to_move(), self.castling())?;
        match self.en_passant() {
            Some(sq) => write!(f, "{sq}")?,
            None => write!(f, "-")?,
        }
        write!(f, " {} {}", self.halfmove_clock(), self.fullmove_number())
    }
}
