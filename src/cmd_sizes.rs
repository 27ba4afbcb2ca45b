use anyhow::Result;

use colourtable_rs::palettes::VALID_CAPACITIES;

pub(crate) fn palette_sizes(debug: bool) -> Result<()> {
	for size in VALID_CAPACITIES {
		if debug {
			eprintln!("{size} colors need {} bits per index", size.trailing_zeros());
		}
		println!("{size}");
	}

	Ok(())
}
