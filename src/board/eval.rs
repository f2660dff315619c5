//! Position evaluation: material count plus a small mobility term.

use super::{Board, Color, Piece};

impl Board {
    /// Evaluate the position in centipawns from White's perspective.
    ///
    /// Material is summed per piece kind from the bitboard popcounts, then a
    /// one-point-per-move mobility bonus is added for the side to move,
    /// signed by color. Deterministic and independent of piece ordering.
    #[must_use]
    pub fn evaluate(&mut self) -> i32 {
        let mut score = 0;
        for color in Color::BOTH {
            for piece in Piece::ALL {
                let count = self.pieces[color.index()][piece.index()].popcount() as i32;
                score += color.sign() * piece.value() * count;
            }
        }

        let mobility = self.generate_moves().len() as i32;
        score + self.side_to_move.sign() * mobility
    }
}
