//! Pawn move generation: set-wise pushes, file-masked captures, promotion
//! fan-out, en passant.

use super::super::attack_tables::PAWN_ATTACKS;
use super::super::{Bitboard, Board, Color, Move, MoveList, Piece, Square, PROMOTION_PIECES};

fn push_pawn_move(moves: &mut MoveList, from: Square, to: Square, capture: bool, promo_rank: usize) {
    if to.rank() == promo_rank {
        for promo in PROMOTION_PIECES {
            moves.push(Move::promotion(from, to, promo));
        }
    } else if capture {
        moves.push(Move::capture(from, to));
    } else {
        moves.push(Move::quiet(from, to));
    }
}

impl Board {
    pub(crate) fn generate_pawn_moves(&self, moves: &mut MoveList) {
        let us = self.side_to_move;
        let pawns = self.pieces[us.index()][Piece::Pawn.index()];
        let empty = self.all_occupied.not();
        let enemies = self.occupied[us.opponent().index()];
        let promo_rank = us.promotion_rank();

        match us {
            Color::White => {
                let single = pawns.shift_north().and(empty);
                for to in single.iter() {
                    let from = Square::from_index(to.index() - 8);
                    push_pawn_move(moves, from, to, false, promo_rank);
                }

                // The intermediate square is the rank-3 subset of the
                // single-push set, so both squares are known empty.
                let double = single.and(Bitboard::RANK_3).shift_north().and(empty);
                for to in double.iter() {
                    let from = Square::from_index(to.index() - 16);
                    moves.push(Move::quiet(from, to));
                }

                let west_caps = pawns.shift_north_west().and(enemies);
                for to in west_caps.iter() {
                    let from = Square::from_index(to.index() - 7);
                    push_pawn_move(moves, from, to, true, promo_rank);
                }

                let east_caps = pawns.shift_north_east().and(enemies);
                for to in east_caps.iter() {
                    let from = Square::from_index(to.index() - 9);
                    push_pawn_move(moves, from, to, true, promo_rank);
                }
            }
            Color::Black => {
                let single = pawns.shift_south().and(empty);
                for to in single.iter() {
                    let from = Square::from_index(to.index() + 8);
                    push_pawn_move(moves, from, to, false, promo_rank);
                }

                let double = single.and(Bitboard::RANK_6).shift_south().and(empty);
                for to in double.iter() {
                    let from = Square::from_index(to.index() + 16);
                    moves.push(Move::quiet(from, to));
                }

                let west_caps = pawns.shift_south_west().and(enemies);
                for to in west_caps.iter() {
                    let from = Square::from_index(to.index() + 9);
                    push_pawn_move(moves, from, to, true, promo_rank);
                }

                let east_caps = pawns.shift_south_east().and(enemies);
                for to in east_caps.iter() {
                    let from = Square::from_index(to.index() + 7);
                    push_pawn_move(moves, from, to, true, promo_rank);
                }
            }
        }

        if let Some(ep) = self.en_passant_target {
            // The pawns able to capture en passant are exactly those a pawn
            // of the opposite color on the target square would attack.
            let sources = Bitboard(PAWN_ATTACKS[us.opponent().index()][ep.index()]).and(pawns);
            for from in sources.iter() {
                moves.push(Move::en_passant(from, ep));
            }
        }
    }
}
