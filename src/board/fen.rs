// src/board/fen.rs
// Parsing and serialization for the standard six-field FEN record.
// Fields 5-6 (halfmove clock, fullmove number) are accepted but optional,
// matching engines that are only ever driven through a UCI front end.

use super::fen_tables::{CHAR_TO_PC, PC_TO_CHAR};
use super::{Board, CASTLE_BK, CASTLE_BQ, CASTLE_WK, CASTLE_WQ, Color, Piece};
use crate::square::Square;

impl Board {
    /// Overwrite `self` with the position described by `fen`.
    pub fn set_fen(&mut self, fen: &str) -> Result<(), String> {
        let fen = fen.trim();
        let mut fields = fen.split_whitespace();

        let placement = fields.next().ok_or("FEN missing piece placement field")?;
        let stm = fields.next().unwrap_or("w");
        let castling = fields.next().unwrap_or("-");
        let ep = fields.next().unwrap_or("-");
        let halfmove = fields.next().unwrap_or("0");
        let fullmove = fields.next().unwrap_or("1");

        let mut board = Board::new_empty();

        // 1) Piece placement, ranks 8 -> 1, files a -> h within each rank.
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(format!(
                "FEN piece placement must have 8 ranks, got {}",
                ranks.len()
            ));
        }
        for (rank_from_top, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_from_top;
            let mut file = 0usize;
            for ch in rank_str.chars() {
                if let Some(skip) = ch.to_digit(10) {
                    file += skip as usize;
                    if file > 8 {
                        return Err(format!("FEN rank '{}' overflows the board", rank_str));
                    }
                    continue;
                }
                if file >= 8 {
                    return Err(format!("FEN rank '{}' overflows the board", rank_str));
                }
                let (piece, color) = CHAR_TO_PC[ch as usize]
                    .ok_or_else(|| format!("Invalid FEN piece glyph '{}'", ch))?;
                let sq = rank * 8 + file;
                let bb = board.bb(color, piece) | (1u64 << sq);
                board.set_bb(color, piece, bb);
                file += 1;
            }
            if file != 8 {
                return Err(format!("FEN rank '{}' does not cover 8 files", rank_str));
            }
        }

        // 2) Side to move.
        board.side_to_move = match stm {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(format!("Invalid side-to-move field '{}'", other)),
        };

        // 3) Castling rights.
        board.castling_rights = 0;
        if castling != "-" {
            for ch in castling.chars() {
                board.castling_rights |= match ch {
                    'K' => CASTLE_WK,
                    'Q' => CASTLE_WQ,
                    'k' => CASTLE_BK,
                    'q' => CASTLE_BQ,
                    other => return Err(format!("Invalid castling glyph '{}'", other)),
                };
            }
        }

        // 4) En-passant target square.
        board.en_passant = if ep == "-" {
            None
        } else {
            let bytes = ep.as_bytes();
            if bytes.len() != 2 {
                return Err(format!("Invalid en-passant field '{}'", ep));
            }
            let file = bytes[0].wrapping_sub(b'a');
            let rank = bytes[1].wrapping_sub(b'1');
            if file > 7 || rank > 7 {
                return Err(format!("Invalid en-passant field '{}'", ep));
            }
            Some(Square::from_index(rank * 8 + file))
        };

        // 5-6) Optional move counters.
        board.halfmove_clock = halfmove.parse().unwrap_or(0);
        board.fullmove_number = fullmove.parse().unwrap_or(1);

        board.history.clear();
        board.refresh_zobrist();

        *self = board;
        Ok(())
    }

    /// Serialize the current position to a six-field FEN string.
    pub fn to_fen(&self) -> String {
        let mut out = String::with_capacity(64);

        for rank_from_top in 0..8 {
            let rank = 7 - rank_from_top;
            let mut empty_run = 0u8;
            for file in 0..8 {
                let sq = Square::from_index((rank * 8 + file) as u8);
                match self.piece_at(sq) {
                    None => empty_run += 1,
                    Some((color, piece)) => {
                        if empty_run > 0 {
                            out.push((b'0' + empty_run) as char);
                            empty_run = 0;
                        }
                        let idx = (color as usize) * 6 + (piece as usize);
                        out.push(PC_TO_CHAR[idx]);
                    }
                }
            }
            if empty_run > 0 {
                out.push((b'0' + empty_run) as char);
            }
            if rank_from_top != 7 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(if self.side_to_move == Color::White {
            'w'
        } else {
            'b'
        });

        out.push(' ');
        if self.castling_rights == 0 {
            out.push('-');
        } else {
            if self.has_castling(CASTLE_WK) {
                out.push('K');
            }
            if self.has_castling(CASTLE_WQ) {
                out.push('Q');
            }
            if self.has_castling(CASTLE_BK) {
                out.push('k');
            }
            if self.has_castling(CASTLE_BQ) {
                out.push('q');
            }
        }

        out.push(' ');
        match self.en_passant {
            Some(sq) => out.push_str(&sq.to_string()),
            None => out.push('-'),
        }

        out.push(' ');
        out.push_str(&self.halfmove_clock.to_string());
        out.push(' ');
        out.push_str(&self.fullmove_number.to_string());

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn start_position_round_trips() {
        let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        let board = Board::from_str(fen).expect("valid fen");
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn kiwipete_round_trips() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        let board = Board::from_str(fen).expect("valid fen");
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn en_passant_field_round_trips() {
        let fen = "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3";
        let board = Board::from_str(fen).expect("valid fen");
        assert_eq!(board.en_passant.map(|s| s.to_string()), Some("d6".into()));
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn rejects_malformed_rank() {
        let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBN w KQkq - 0 1";
        assert!(Board::from_str(fen).is_err());
    }

    #[test]
    fn missing_halfmove_fields_default() {
        let fen = "8/8/8/8/8/8/8/4K2k w - -";
        let board = Board::from_str(fen).expect("valid fen");
        assert_eq!(board.halfmove_clock, 0);
        assert_eq!(board.fullmove_number, 1);
    }
}
