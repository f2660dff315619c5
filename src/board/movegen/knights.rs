use super::super::attack_tables::KNIGHT_ATTACKS;
use super::super::{Bitboard, Board, Move, MoveList, Piece};

impl Board {
    pub(crate) fn generate_knight_moves(&self, moves: &mut MoveList) {
        let us = self.side_to_move;
        let own = self.occupied[us.index()];
        let enemies = self.occupied[us.opponent().index()];

        for from in self.pieces[us.index()][Piece::Knight.index()].iter() {
            let targets = Bitboard(KNIGHT_ATTACKS[from.index()]).and(own.not());
            for to in targets.iter() {
                if enemies.contains(to) {
                    moves.push(Move::capture(from, to));
                } else {
                    moves.push(Move::quiet(from, to));
                }
            }
        }
    }
}
