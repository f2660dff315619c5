use super::super::attack_tables::{bishop_attacks, queen_attacks, rook_attacks};
use super::super::{Bitboard, Board, Move, MoveList, Piece};

/// Sliding piece kinds for move generation.
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    fn piece(self) -> Piece {
        match self {
            SliderType::Bishop => Piece::Bishop,
            SliderType::Rook => Piece::Rook,
            SliderType::Queen => Piece::Queen,
        }
    }

    fn attacks(self, from_idx: usize, occupancy: u64) -> u64 {
        match self {
            SliderType::Bishop => bishop_attacks(from_idx, occupancy),
            SliderType::Rook => rook_attacks(from_idx, occupancy),
            SliderType::Queen => queen_attacks(from_idx, occupancy),
        }
    }
}

impl Board {
    pub(crate) fn generate_slider_moves(&self, slider: SliderType, moves: &mut MoveList) {
        let us = self.side_to_move;
        let own = self.occupied[us.index()];
        let enemies = self.occupied[us.opponent().index()];

        for from in self.pieces[us.index()][slider.piece().index()].iter() {
            let raw = slider.attacks(from.index(), self.all_occupied.0);
            let targets = Bitboard(raw).and(own.not());
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
