//! Piece placement primitives and reversible move execution.

use super::state::UndoRecord;
use super::{
    bit_for_square, Board, Color, Move, Piece, Square, CASTLE_BLACK_K, CASTLE_BLACK_Q,
    CASTLE_WHITE_K, CASTLE_WHITE_Q,
};

impl Board {
    // The three placement primitives below are the only code that touches
    // the bitboards; each keeps piece board, color occupancy, and total
    // occupancy consistent as one step.

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let bit = bit_for_square(sq).0;
        let c_idx = color.index();
        self.pieces[c_idx][piece.index()].0 |= bit;
        self.occupied[c_idx].0 |= bit;
        self.all_occupied.0 |= bit;
    }

    pub(crate) fn remove_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let bit = bit_for_square(sq).0;
        let c_idx = color.index();
        self.pieces[c_idx][piece.index()].0 &= !bit;
        self.occupied[c_idx].0 &= !bit;
        self.all_occupied.0 &= !bit;
    }

    pub(crate) fn move_piece(&mut self, from: Square, to: Square, color: Color, piece: Piece) {
        let mask = bit_for_square(from).0 | bit_for_square(to).0;
        let c_idx = color.index();
        self.pieces[c_idx][piece.index()].0 ^= mask;
        self.occupied[c_idx].0 ^= mask;
        self.all_occupied.0 ^= mask;
    }

    /// The color and piece on a square, or `None` when empty.
    pub(crate) fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        let bit = bit_for_square(sq).0;
        if self.all_occupied.0 & bit == 0 {
            return None;
        }
        let color = if self.occupied[0].0 & bit != 0 {
            Color::White
        } else {
            Color::Black
        };
        for piece in Piece::ALL {
            if self.pieces[color.index()][piece.index()].0 & bit != 0 {
                return Some((color, piece));
            }
        }
        None
    }

    pub(crate) fn is_empty_square(&self, sq: Square) -> bool {
        self.all_occupied.0 & bit_for_square(sq).0 == 0
    }

    /// The piece type on a square, without its color.
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// The color of the piece on a square.
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    pub(crate) fn has_kingside_right(&self, color: Color) -> bool {
        self.castling_rights & kingside_bit(color) != 0
    }

    pub(crate) fn has_queenside_right(&self, color: Color) -> bool {
        self.castling_rights & queenside_bit(color) != 0
    }

    fn clear_rook_right(&mut self, color: Color, corner: Square) {
        let back_rank = color.back_rank();
        if corner == Square::new(back_rank, 7) {
            self.castling_rights &= !kingside_bit(color);
        } else if corner == Square::new(back_rank, 0) {
            self.castling_rights &= !queenside_bit(color);
        }
    }

    /// Execute a move and push the matching undo record.
    ///
    /// The move must come from this position's move generation (or an
    /// equivalent legal source); `make_move` trusts its geometry.
    ///
    /// # Panics
    /// Panics if the source square is empty.
    pub fn make_move(&mut self, mv: Move) {
        let us = self.side_to_move;
        let them = us.opponent();
        let from = mv.from();
        let to = mv.to();

        let (_, moving_piece) = self
            .piece_at(from)
            .expect("make_move from an empty square");

        let mut record = UndoRecord {
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
            halfmove_clock: self.halfmove_clock,
            moved_piece: moving_piece,
            from,
            to,
            captured: None,
            promoted_to: None,
            was_en_passant: mv.is_en_passant(),
        };

        if mv.is_en_passant() {
            // The captured pawn sits beside the mover, one rank behind the
            // target square.
            let capture_sq = Square::new(from.rank(), to.file());
            self.remove_piece(capture_sq, them, Piece::Pawn);
            record.captured = Some(Piece::Pawn);
            self.move_piece(from, to, us, Piece::Pawn);
            self.halfmove_clock = 0;
        } else {
            if self.occupied[them.index()].0 & bit_for_square(to).0 != 0 {
                let (_, victim) = self.piece_at(to).expect("occupied target square");
                self.remove_piece(to, them, victim);
                record.captured = Some(victim);
                self.halfmove_clock = 0;
            } else if moving_piece == Piece::Pawn {
                self.halfmove_clock = 0;
            } else {
                self.halfmove_clock += 1;
            }
            self.move_piece(from, to, us, moving_piece);
        }

        if let Some(promo) = mv.promotion_piece() {
            self.remove_piece(to, us, Piece::Pawn);
            self.set_piece(to, us, promo);
            record.promoted_to = Some(promo);
        }

        if mv.is_castling() {
            // King already landed on its destination; relocate the rook.
            let (rook_from, rook_to) = if to.file() == 6 { (7, 5) } else { (0, 3) };
            self.move_piece(
                Square::new(to.rank(), rook_from),
                Square::new(to.rank(), rook_to),
                us,
                Piece::Rook,
            );
        }

        if moving_piece == Piece::King {
            self.castling_rights &= !(kingside_bit(us) | queenside_bit(us));
        } else if moving_piece == Piece::Rook {
            self.clear_rook_right(us, from);
        }
        if record.captured == Some(Piece::Rook) && !mv.is_en_passant() {
            self.clear_rook_right(them, to);
        }

        self.en_passant_target = None;
        if moving_piece == Piece::Pawn && from.rank().abs_diff(to.rank()) == 2 {
            let passed_rank = usize::midpoint(from.rank(), to.rank());
            self.en_passant_target = Some(Square::new(passed_rank, from.file()));
        }

        if us == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = them;
        self.undo_stack.push(record);
    }

    /// Reverse the most recent `make_move`, restoring every field exactly.
    ///
    /// # Panics
    /// Panics if no move has been made on this board.
    pub fn unmake_move(&mut self) {
        let record = self
            .undo_stack
            .pop()
            .expect("unmake_move without a prior make_move");

        self.side_to_move = self.side_to_move.opponent();
        let us = self.side_to_move;
        let them = us.opponent();

        self.castling_rights = record.castling_rights;
        self.en_passant_target = record.en_passant_target;
        self.halfmove_clock = record.halfmove_clock;

        let from = record.from;
        let to = record.to;

        if let Some(promo) = record.promoted_to {
            self.remove_piece(to, us, promo);
            self.set_piece(to, us, Piece::Pawn);
        }

        // A king that traveled two files was a castle; walk the rook home.
        if record.moved_piece == Piece::King && from.file().abs_diff(to.file()) == 2 {
            let (rook_orig, rook_moved) = if to.file() == 6 { (7, 5) } else { (0, 3) };
            self.move_piece(
                Square::new(to.rank(), rook_moved),
                Square::new(to.rank(), rook_orig),
                us,
                Piece::Rook,
            );
        }

        self.move_piece(to, from, us, record.moved_piece);

        if let Some(captured) = record.captured {
            if record.was_en_passant {
                self.set_piece(Square::new(from.rank(), to.file()), them, Piece::Pawn);
            } else {
                self.set_piece(to, them, captured);
            }
        }

        if us == Color::Black {
            self.fullmove_number -= 1;
        }
    }
}

fn kingside_bit(color: Color) -> u8 {
    match color {
        Color::White => CASTLE_WHITE_K,
        Color::Black => CASTLE_BLACK_K,
    }
}

fn queenside_bit(color: Color) -> u8 {
    match color {
        Color::White => CASTLE_WHITE_Q,
        Color::Black => CASTLE_BLACK_Q,
    }
}
