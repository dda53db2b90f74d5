//! Static opening book
//!
//! Three short developing lines for White, each answered by a scripted
//! response line for Black. Lines are looked up by name; the selector keeps
//! its own cursor into the line it is following.
//!
//! Every entry carries a precondition: the source square must still hold the
//! expected piece, the destination must be empty and the piece must actually
//! be able to get there. When the position has drifted away from the script
//! the book answers [`BookProbe::Mismatch`] and the caller plays on its own.

use crate::board::Position;
use crate::constants::*;
use crate::move_gen::moves_from;
use crate::types::*;
use rand::Rng;

/// One scripted move together with the piece expected on its source square
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookMove {
    pub mv: Move,
    pub piece: i8,
}

impl BookMove {
    const fn new(from: Square, to: Square, piece: i8) -> Self {
        BookMove {
            mv: Move::from_squares(from, to),
            piece,
        }
    }

    /// True if the scripted move can still be played in `position`
    pub fn matches(&self, position: &Position) -> bool {
        let (from_row, from_col) = self.mv.from();
        let (to_row, to_col) = self.mv.to();

        position.get(from_row, from_col) == self.piece
            && position.is_empty(to_row, to_col)
            && moves_from(position, from_row, from_col).contains(&(to_row, to_col))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningLine {
    pub name: &'static str,
    pub moves: &'static [BookMove],
}

impl OpeningLine {
    pub fn first_move(&self) -> Option<Move> {
        self.moves.first().map(|entry| entry.mv)
    }
}

/// Result of asking the book for the next move of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookProbe {
    /// The scripted move is playable
    Hit(Move),
    /// The scripted move no longer fits the position
    Mismatch,
    /// The line has no entry at this cursor (or does not exist)
    Exhausted,
}

pub const KINGS_PAWN: &str = "King's Pawn";
pub const QUEENS_PAWN: &str = "Queen's Pawn";
pub const KNIGHT_DEVELOPMENT: &str = "Knight Development";

const WHITE_LINES: [OpeningLine; 3] = [
    OpeningLine {
        name: KINGS_PAWN,
        moves: &[
            BookMove::new((1, 4), (2, 4), W_PAWN),
            BookMove::new((0, 6), (2, 5), W_KNIGHT),
            BookMove::new((0, 5), (3, 2), W_BISHOP),
        ],
    },
    OpeningLine {
        name: QUEENS_PAWN,
        moves: &[
            BookMove::new((1, 3), (2, 3), W_PAWN),
            BookMove::new((0, 6), (2, 5), W_KNIGHT),
            BookMove::new((0, 2), (3, 5), W_BISHOP),
        ],
    },
    OpeningLine {
        name: KNIGHT_DEVELOPMENT,
        moves: &[
            BookMove::new((0, 6), (2, 5), W_KNIGHT),
            BookMove::new((1, 6), (2, 6), W_PAWN),
            BookMove::new((0, 5), (1, 6), W_BISHOP),
        ],
    },
];

// Black's answers, keyed by the name of the line White is playing
const BLACK_RESPONSES: [OpeningLine; 3] = [
    OpeningLine {
        name: KINGS_PAWN,
        moves: &[
            BookMove::new((6, 4), (5, 4), B_PAWN),
            BookMove::new((7, 6), (5, 5), B_KNIGHT),
            BookMove::new((7, 5), (4, 2), B_BISHOP),
        ],
    },
    OpeningLine {
        name: QUEENS_PAWN,
        moves: &[
            BookMove::new((6, 3), (5, 3), B_PAWN),
            BookMove::new((7, 6), (5, 5), B_KNIGHT),
            BookMove::new((7, 2), (4, 5), B_BISHOP),
        ],
    },
    OpeningLine {
        name: KNIGHT_DEVELOPMENT,
        moves: &[
            BookMove::new((7, 6), (5, 5), B_KNIGHT),
            BookMove::new((6, 6), (5, 6), B_PAWN),
            BookMove::new((7, 5), (6, 6), B_BISHOP),
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct OpeningBook {
    lines: &'static [OpeningLine],
    responses: &'static [OpeningLine],
}

impl Default for OpeningBook {
    fn default() -> Self {
        OpeningBook::standard()
    }
}

impl OpeningBook {
    pub const fn standard() -> Self {
        OpeningBook {
            lines: &WHITE_LINES,
            responses: &BLACK_RESPONSES,
        }
    }

    /// Lines available to the side that moves first
    pub fn lines(&self) -> &'static [OpeningLine] {
        self.lines
    }

    pub fn line(&self, name: &str) -> Option<&'static OpeningLine> {
        self.lines.iter().find(|line| line.name == name)
    }

    /// Response line for the second side against the named opening
    pub fn response_to(&self, name: &str) -> Option<&'static OpeningLine> {
        self.responses.iter().find(|line| line.name == name)
    }

    /// Pick one of the first-side lines uniformly at random
    pub fn choose_line<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&'static OpeningLine> {
        if self.lines.is_empty() {
            return None;
        }
        let lines: &'static [OpeningLine] = self.lines;
        lines.get(rng.random_range(0..lines.len()))
    }

    /// Entry `cursor` of `line`, checked against the live position
    pub fn probe(line: &OpeningLine, cursor: usize, position: &Position) -> BookProbe {
        match line.moves.get(cursor) {
            Some(entry) if entry.matches(position) => BookProbe::Hit(entry.mv),
            Some(_) => BookProbe::Mismatch,
            None => BookProbe::Exhausted,
        }
    }

    /// Name the opening the first side is playing
    ///
    /// Prefers the opponent's most recent move, matched against each line's
    /// first move. Without one, falls back to looking for the first move's
    /// result on the board: the piece on its destination and the source empty.
    pub fn identify_opening(
        &self,
        last_move: Option<&Move>,
        position: &Position,
    ) -> Option<&'static str> {
        if let Some(last) = last_move {
            return self
                .lines
                .iter()
                .find(|line| line.first_move().as_ref() == Some(last))
                .map(|line| line.name);
        }

        self.lines
            .iter()
            .find(|line| {
                line.moves.first().is_some_and(|entry| {
                    let (from_row, from_col) = entry.mv.from();
                    let (to_row, to_col) = entry.mv.to();
                    position.get(to_row, to_col) == entry.piece
                        && position.is_empty(from_row, from_col)
                })
            })
            .map(|line| line.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn play_line(position: &mut Position, line: &OpeningLine) {
        for entry in line.moves {
            assert!(
                entry.matches(position),
                "{} entry {} should be playable",
                line.name,
                entry.mv
            );
            position.apply_move(&entry.mv);
        }
    }

    #[test]
    fn test_three_distinct_first_moves() {
        let book = OpeningBook::standard();
        let firsts: Vec<String> = book
            .lines()
            .iter()
            .filter_map(|line| line.first_move())
            .map(|mv| mv.to_string())
            .collect();

        assert_eq!(firsts, vec!["e2e3", "d2d3", "g1f3"]);
    }

    #[test]
    fn test_every_line_has_a_response() {
        let book = OpeningBook::standard();
        for line in book.lines() {
            let response = book.response_to(line.name);
            assert!(response.is_some(), "no response to {}", line.name);
            assert!(!line.moves.is_empty() && line.moves.len() <= 3);
        }
    }

    #[test]
    fn test_lines_and_responses_play_out_interleaved() {
        let book = OpeningBook::standard();
        for line in book.lines() {
            let response = book.response_to(line.name).expect("response line");
            let mut position = Position::starting();
            for (white, black) in line.moves.iter().zip(response.moves) {
                assert!(white.matches(&position), "{}: {}", line.name, white.mv);
                position.apply_move(&white.mv);
                assert!(black.matches(&position), "{}: {}", line.name, black.mv);
                position.apply_move(&black.mv);
            }
        }
    }

    #[test]
    fn test_probe_reports_mismatch_and_exhaustion() {
        let book = OpeningBook::standard();
        let line = book.line(KINGS_PAWN).expect("line exists");

        let mut position = Position::starting();
        assert_eq!(
            OpeningBook::probe(line, 0, &position),
            BookProbe::Hit(Move::new(1, 4, 2, 4))
        );

        // Destination occupied
        position.set(2, 4, B_KNIGHT);
        assert_eq!(OpeningBook::probe(line, 0, &position), BookProbe::Mismatch);

        // Source moved away
        let mut position = Position::starting();
        position.set(0, 6, 0);
        assert_eq!(OpeningBook::probe(line, 1, &position), BookProbe::Mismatch);

        assert_eq!(OpeningBook::probe(line, 3, &position), BookProbe::Exhausted);
    }

    #[test]
    fn test_bishop_entry_needs_clear_path() {
        let book = OpeningBook::standard();
        let line = book.line(KINGS_PAWN).expect("line exists");
        let position = Position::starting();

        // Bc4 is blocked by the e2 pawn until e3 is played
        assert_eq!(OpeningBook::probe(line, 2, &position), BookProbe::Mismatch);

        let mut position = position;
        play_line(&mut position, line);
        assert_eq!(position.get(3, 2), W_BISHOP);
    }

    #[test]
    fn test_identify_opening_from_last_move() {
        let book = OpeningBook::standard();
        let position = Position::starting();

        assert_eq!(
            book.identify_opening(Some(&Move::new(1, 3, 2, 3)), &position),
            Some(QUEENS_PAWN)
        );
        assert_eq!(
            book.identify_opening(Some(&Move::new(0, 6, 2, 5)), &position),
            Some(KNIGHT_DEVELOPMENT)
        );
        assert_eq!(
            book.identify_opening(Some(&Move::new(1, 0, 2, 0)), &position),
            None
        );
    }

    #[test]
    fn test_identify_opening_from_board_pattern() {
        let book = OpeningBook::standard();
        let position = Position::starting().after_move(&Move::new(1, 4, 2, 4));

        assert_eq!(book.identify_opening(None, &position), Some(KINGS_PAWN));
        assert_eq!(book.identify_opening(None, &Position::starting()), None);
    }

    #[test]
    fn test_choose_line_covers_every_line() {
        let book = OpeningBook::standard();
        let mut seen = std::collections::HashSet::new();
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let line = book.choose_line(&mut rng).expect("book has lines");
            seen.insert(line.name);
        }
        assert_eq!(seen.len(), 3);
    }
}
