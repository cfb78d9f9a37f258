use crate::bitboard::BitboardExt;

/// Clears and returns the least-significant set bit's index.
#[inline(always)]
pub fn pop_lsb(bb: &mut u64) -> u8 {
    let idx = bb.lsb();
    *bb &= *bb - 1;
    idx
}

#[inline(always)]
pub fn square_index(rank: usize, file: usize) -> usize {
    rank * 8 + file
}
