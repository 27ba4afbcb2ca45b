pub mod palette;
pub mod parse;

/// The smallest capacity a [palette::Palette] may be constructed with.
pub const MIN_PALETTE_COLORS: usize = 2;
/// The largest capacity a [palette::Palette] may be constructed with.
pub const MAX_PALETTE_COLORS: usize = 1024;

/// Every capacity accepted by [palette::Palette::new], smallest first.
pub const VALID_CAPACITIES: [usize; 10] = [2, 4, 8, 16, 32, 64, 128, 256, 512, 1024];
