use super::*;
use crate::square::Square;
use std::str::FromStr;

#[test]
fn new_board_matches_start_fen() {
    let b = Board::new();
    assert_eq!(
        b.to_fen(),
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
    );
}

#[test]
fn piece_on_sq_agrees_with_bitboards() {
    let b = Board::new();
    for sq_idx in 0..64u8 {
        let sq = Square::from_index(sq_idx);
        match b.piece_at(sq) {
            Some((color, piece)) => {
                assert_ne!(b.bb(color, piece) & (1u64 << sq_idx), 0);
            }
            None => {
                for &c in &[Color::White, Color::Black] {
                    for &p in &[
                        Piece::Pawn,
                        Piece::Knight,
                        Piece::Bishop,
                        Piece::Rook,
                        Piece::Queen,
                        Piece::King,
                    ] {
                        assert_eq!(b.bb(c, p) & (1u64 << sq_idx), 0);
                    }
                }
            }
        }
    }
}

#[test]
fn incremental_hash_matches_full_recompute() {
    let b = Board::from_str("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
        .unwrap();
    assert_eq!(b.zobrist, b.compute_zobrist_full());
}

#[test]
fn king_square_matches_bitboard() {
    let b = Board::new();
    assert_eq!(b.king_square(Color::White).index(), 4);
    assert_eq!(b.king_square(Color::Black).index(), 60);
}

#[test]
fn validate_detects_no_overlap_on_fresh_board() {
    let b = Board::new();
    assert!(b.validate().is_ok());
}

#[test]
fn fresh_board_has_no_repetition() {
    let b = Board::new();
    assert!(!b.is_repetition());
}

#[test]
fn psq_and_non_pawn_material_match_full_recompute() {
    use crate::search::eval::{get_piece_value, get_psqt, mirror_vert};

    fn recompute(b: &Board) -> ([i32; 2], [i32; 2]) {
        let mut psq = [0i32, 0i32];
        let mut non_pawn_material = [0i32, 0i32];
        for &color in &[Color::White, Color::Black] {
            let sign = if color == Color::White { 1 } else { -1 };
            let ci = color as usize;
            for &piece in &[
                Piece::Pawn,
                Piece::Knight,
                Piece::Bishop,
                Piece::Rook,
                Piece::Queen,
                Piece::King,
            ] {
                let (mg_val, eg_val) = get_piece_value(piece);
                let (mg_table, eg_table) = get_psqt(piece);
                let mut bb = b.bb(color, piece);
                while bb != 0 {
                    let sq = bb.trailing_zeros() as u8;
                    bb &= bb - 1;
                    let table_sq = if color == Color::White {
                        mirror_vert(sq)
                    } else {
                        sq as usize
                    };
                    psq[0] += sign * (mg_val + mg_table[table_sq]);
                    psq[1] += sign * (eg_val + eg_table[table_sq]);
                    if matches!(piece, Piece::Knight | Piece::Bishop | Piece::Rook | Piece::Queen)
                    {
                        non_pawn_material[ci] += mg_val;
                    }
                }
            }
        }
        (psq, non_pawn_material)
    }

    for fen in [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    ] {
        let b = Board::from_str(fen).unwrap();
        let (psq, non_pawn_material) = recompute(&b);
        assert_eq!(b.psq, psq, "psq mismatch for {fen}");
        assert_eq!(
            b.non_pawn_material, non_pawn_material,
            "non_pawn_material mismatch for {fen}"
        );
    }
}
