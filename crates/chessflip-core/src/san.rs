//! Standard Algebraic Notation: rendering moves and resolving text to moves.

use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::error::SanError;
use crate::file::File;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::Square;

impl Board {
    /// Render a legal move in SAN, with a `+` or `#` suffix when it checks.
    ///
    /// Disambiguation is minimal: the source file if that suffices, else the
    /// source rank, else both.
    pub fn san(&self, mv: Move) -> String {
        let mut san = String::new();

        if let Some(side) = self.castle_side(mv) {
            san.push_str(side.san());
        } else {
            let Some(kind) = self.piece_on(mv.source()) else {
                return mv.to_uci();
            };
            let capture = self.is_capture(mv);

            if kind == PieceKind::Pawn {
                if capture {
                    san.push(mv.source().file().to_char());
                }
            } else {
                san.push(kind.san_char());
                san.push_str(&self.disambiguation(mv, kind));
            }

            if capture {
                san.push('x');
            }
            san.push_str(&mv.dest().to_string());

            if let Some(promo) = mv.promotion() {
                san.push('=');
                san.push(promo.san_char());
            }
        }

        let after = self.make_move(mv);
        if after.is_check() {
            san.push(if after.legal_moves().is_empty() { '#' } else { '+' });
        }
        san
    }

    fn disambiguation(&self, mv: Move, kind: PieceKind) -> String {
        let rivals: Vec<Square> = self
            .legal_moves()
            .iter()
            .filter(|other| {
                other.dest() == mv.dest()
                    && other.source() != mv.source()
                    && self.piece_on(other.source()) == Some(kind)
                    && !self.is_castling(**other)
            })
            .map(|other| other.source())
            .collect();

        let src = mv.source();
        if rivals.is_empty() {
            String::new()
        } else if rivals.iter().all(|sq| sq.file() != src.file()) {
            src.file().to_char().to_string()
        } else if rivals.iter().all(|sq| sq.rank() != src.rank()) {
            src.rank().to_char().to_string()
        } else {
            src.to_string()
        }
    }

    /// Resolve SAN text to the unique legal move it names.
    ///
    /// Accepts `0-0` for `O-O`, a promotion without `=`, and trailing check
    /// or annotation marks.
    ///
    /// # Errors
    ///
    /// [`SanError::Syntax`] if the text is not SAN, [`SanError::NoMatch`] if
    /// no legal move fits, [`SanError::Ambiguous`] if several do.
    pub fn parse_san(&self, text: &str) -> Result<Move, SanError> {
        let core = text.trim_end_matches(['+', '#', '!', '?']);

        let castle = match core {
            "O-O" | "0-0" => Some(CastleSide::KingSide),
            "O-O-O" | "0-0-0" => Some(CastleSide::QueenSide),
            _ => None,
        };
        if let Some(side) = castle {
            return self
                .legal_moves()
                .iter()
                .copied()
                .find(|&mv| self.castle_side(mv) == Some(side))
                .ok_or_else(|| SanError::NoMatch {
                    san: text.to_string(),
                });
        }

        let pattern = SanPattern::parse(core).ok_or_else(|| SanError::Syntax {
            san: text.to_string(),
        })?;

        let matches: Vec<Move> = self
            .legal_moves()
            .iter()
            .copied()
            .filter(|&mv| pattern.matches(self, mv))
            .collect();

        match matches.as_slice() {
            [mv] => Ok(*mv),
            [] => Err(SanError::NoMatch {
                san: text.to_string(),
            }),
            many => Err(SanError::Ambiguous {
                san: text.to_string(),
                count: many.len(),
            }),
        }
    }
}

/// The constraints a non-castling SAN token places on a move.
#[derive(Debug, PartialEq, Eq)]
struct SanPattern {
    kind: PieceKind,
    from_file: Option<File>,
    from_rank: Option<Rank>,
    dest: Square,
    promotion: Option<PieceKind>,
}

impl SanPattern {
    fn parse(core: &str) -> Option<SanPattern> {
        if !core.is_ascii() || core.len() < 2 {
            return None;
        }

        let (kind, rest) = match core.chars().next().and_then(PieceKind::from_san_char) {
            Some(kind) => (kind, &core[1..]),
            None => (PieceKind::Pawn, core),
        };

        let (body, promotion) = match rest.split_once('=') {
            Some((body, promo)) => (body, Some(parse_promotion(promo)?)),
            None => match rest.chars().last().and_then(PieceKind::from_san_char) {
                Some(_) if kind == PieceKind::Pawn => {
                    (&rest[..rest.len() - 1], Some(parse_promotion(&rest[rest.len() - 1..])?))
                }
                _ => (rest, None),
            },
        };

        let squares: String = body.chars().filter(|&c| c != 'x' && c != '-').collect();
        if squares.len() < 2 || squares.len() > 4 {
            return None;
        }
        let (hint, dest) = squares.split_at(squares.len() - 2);
        let dest = Square::from_algebraic(dest)?;

        let mut from_file = None;
        let mut from_rank = None;
        for c in hint.chars() {
            if let Some(file) = File::from_char(c).filter(|_| from_file.is_none() && from_rank.is_none()) {
                from_file = Some(file);
            } else if let Some(rank) = Rank::from_char(c).filter(|_| from_rank.is_none()) {
                from_rank = Some(rank);
            } else {
                return None;
            }
        }

        Some(SanPattern {
            kind,
            from_file,
            from_rank,
            dest,
            promotion,
        })
    }

    fn matches(&self, board: &Board, mv: Move) -> bool {
        mv.dest() == self.dest
            && mv.promotion() == self.promotion
            && board.piece_on(mv.source()) == Some(self.kind)
            && !board.is_castling(mv)
            && self.from_file.is_none_or(|file| mv.source().file() == file)
            && self.from_rank.is_none_or(|rank| mv.source().rank() == rank)
    }
}

fn parse_promotion(text: &str) -> Option<PieceKind> {
    let mut chars = text.chars();
    let kind = chars.next().and_then(PieceKind::from_san_char)?;
    (chars.next().is_none() && PieceKind::PROMOTIONS.contains(&kind)).then_some(kind)
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::chess_move::Move;
    use crate::error::SanError;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    fn board(fen: &str) -> Board {
        fen.parse().unwrap()
    }

    #[test]
    fn renders_opening_moves() {
        let b = Board::starting_position();
        assert_eq!(b.san(Move::new(Square::E2, Square::E4)), "e4");
        assert_eq!(b.san(Move::new(Square::G1, Square::F3)), "Nf3");
    }

    #[test]
    fn renders_castling_and_checks() {
        let b = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert_eq!(b.san(Move::new(Square::E1, Square::G1)), "O-O");
        assert_eq!(b.san(Move::new(Square::E1, Square::C1)), "O-O-O");
        assert_eq!(b.san(Move::new(Square::A1, Square::A8)), "Rxa8+");
    }

    #[test]
    fn renders_mate() {
        let b = board("rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2");
        assert_eq!(b.san(Move::new(Square::D8, Square::H4)), "Qh4#");
    }

    #[test]
    fn renders_pawn_capture_and_promotion() {
        let b = board("3r3k/4P3/8/8/8/8/8/K7 w - - 0 1");
        assert_eq!(
            b.san(Move::new_promotion(Square::E7, Square::D8, PieceKind::Queen)),
            "exd8=Q+"
        );
        assert_eq!(
            b.san(Move::new_promotion(Square::E7, Square::E8, PieceKind::Rook)),
            "e8=R+"
        );
    }

    #[test]
    fn renders_en_passant_as_capture() {
        let b = board("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
        assert_eq!(b.san(Move::new(Square::E5, Square::F6)), "exf6");
    }

    #[test]
    fn disambiguates_by_file_then_rank() {
        let b = board("4k3/8/8/8/8/8/4K3/R6R w - - 0 1");
        assert_eq!(b.san(Move::new(Square::A1, Square::D1)), "Rad1");
        let b = board("4k3/R7/8/8/8/8/8/R3K3 w - - 0 1");
        assert_eq!(b.san(Move::new(Square::A1, Square::A4)), "R1a4");
    }

    #[test]
    fn parses_common_forms() {
        let b = Board::starting_position();
        assert_eq!(b.parse_san("e4").unwrap(), Move::new(Square::E2, Square::E4));
        assert_eq!(b.parse_san("Nf3").unwrap(), Move::new(Square::G1, Square::F3));
        assert_eq!(b.parse_san("Nf3!?").unwrap(), Move::new(Square::G1, Square::F3));
    }

    #[test]
    fn parses_castling_variants() {
        let b = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert_eq!(b.parse_san("O-O").unwrap(), Move::new(Square::E1, Square::G1));
        assert_eq!(b.parse_san("0-0-0").unwrap(), Move::new(Square::E1, Square::C1));
    }

    #[test]
    fn parses_promotion_with_and_without_equals() {
        let b = board("3r3k/4P3/8/8/8/8/8/K7 w - - 0 1");
        let queen = Move::new_promotion(Square::E7, Square::D8, PieceKind::Queen);
        assert_eq!(b.parse_san("exd8=Q").unwrap(), queen);
        assert_eq!(b.parse_san("exd8Q").unwrap(), queen);
        assert!(matches!(b.parse_san("e8"), Err(SanError::NoMatch { .. })));
    }

    #[test]
    fn reports_ambiguity_and_garbage() {
        let b = board("4k3/8/8/8/8/8/4K3/R6R w - - 0 1");
        assert!(matches!(
            b.parse_san("Rd1"),
            Err(SanError::Ambiguous { count: 2, .. })
        ));
        assert_eq!(b.parse_san("Rhf1").unwrap(), Move::new(Square::H1, Square::F1));
        assert!(matches!(b.parse_san("Zz9"), Err(SanError::Syntax { .. })));
        assert_eq!(b.parse_san("Kd3").unwrap(), Move::new(Square::E2, Square::D3));
        assert!(matches!(b.parse_san("Ke4"), Err(SanError::NoMatch { .. })));
    }

    #[test]
    fn san_round_trips_through_parse() {
        let b = board("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
        for &mv in b.legal_moves().iter() {
            assert_eq!(b.parse_san(&b.san(mv)).unwrap(), mv, "{}", b.san(mv));
        }
    }
}
