//! Board module tests.
//!
//! Organized by category:
//! - `perft.rs` - move-count enumeration against known totals
//! - `make_unmake.rs` - make/unmake round trips and state restoration
//! - `edge_cases.rs` - special positions and special moves
//! - `attacks.rs` - attack predicate cross-checks
//! - `proptest.rs` - property-based tests


use super::{Board, Color, Piece};

/// Assert the structural invariants every reachable position must satisfy.
pub(crate) fn assert_board_invariants(board: &Board) {
    // The twelve piece bitboards are pairwise disjoint.
    let mut seen = 0u64;
    for color in Color::BOTH {
        for piece in Piece::ALL {
            let bb = board.pieces[color.index()][piece.index()].0;
            assert_eq!(seen & bb, 0, "overlapping piece bitboards");
            seen |= bb;
        }
    }

    // Occupancies are unions of their piece boards.
    for color in Color::BOTH {
        let mut union = 0u64;
        for piece in Piece::ALL {
            union |= board.pieces[color.index()][piece.index()].0;
        }
        assert_eq!(board.occupied[color.index()].0, union, "occupancy mismatch");
    }
    assert_eq!(
        board.all_occupied.0,
        board.occupied[0].0 | board.occupied[1].0,
        "total occupancy mismatch"
    );

    // Exactly one king per color.
    for color in Color::BOTH {
        assert_eq!(
            board.pieces[color.index()][Piece::King.index()].popcount(),
            1,
            "{color} must have exactly one king"
        );
    }

    // A set en passant target sits on the rank a pawn just passed over,
    // with the double-advanced opponent pawn directly behind it.
    if let Some(ep) = board.en_passant_target {
        match board.side_to_move {
            Color::White => {
                assert_eq!(ep.rank(), 5, "white-to-move ep target must be on rank 6");
                let pawn_sq = super::Square::new(4, ep.file());
                assert_eq!(
                    board.piece_at(pawn_sq),
                    Some((Color::Black, Piece::Pawn)),
                    "black pawn must stand behind the ep target"
                );
            }
            Color::Black => {
                assert_eq!(ep.rank(), 2, "black-to-move ep target must be on rank 3");
                let pawn_sq = super::Square::new(3, ep.file());
                assert_eq!(
                    board.piece_at(pawn_sq),
                    Some((Color::White, Piece::Pawn)),
                    "white pawn must stand behind the ep target"
                );
            }
        }
    }
}
