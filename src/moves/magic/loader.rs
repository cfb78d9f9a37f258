use once_cell::sync::OnceCell;

use super::precompute::{MagicTableSeed, generate_magic_tables};
use super::structs::MagicTables;

const DETERMINISTIC_SEED: u64 = 0x45;

static TABLES: OnceCell<MagicTables> = OnceCell::new();

fn build() -> MagicTables {
    let seed = if cfg!(feature = "deterministic_magic") {
        MagicTableSeed::Fixed(DETERMINISTIC_SEED)
    } else {
        MagicTableSeed::Random
    };
    generate_magic_tables(seed).expect("magic number search should always converge")
}

/// Returns the process-wide magic bitboard tables, generating them on
/// first use and caching the result for the rest of the run.
pub fn load_magic_tables() -> MagicTables {
    TABLES.get_or_init(build).clone()
}
