use anyhow::Result;
use colored::Colorize;

use colourtable_rs::palettes::palette::{Palette, PaletteError};
use colourtable_rs::palettes::parse::parse_channels;

use crate::commands::BuildArgs;

pub(crate) fn palette_build(args: &BuildArgs, debug: bool) -> Result<()> {
	let mut pal = Palette::new(args.size)?;

	if debug {
		eprintln!("Created empty palette with room for {} colors", pal.capacity());
	}

	let channels = args.colors.iter()
		.map(|c| parse_channels(c))
		.collect::<Result<Vec<(i32, i32, i32)>, PaletteError>>()?;

	if debug {
		for (color_str, (r, g, b)) in args.colors.iter().zip(&channels) {
			eprintln!("Adding \"{color_str}\" as ({r}, {g}, {b})");
		}
	}

	let rejections = match pal.add_all(&channels, args.strict) {
		Ok(rejections) => rejections,
		Err(rejection) => anyhow::bail!("{}: {}", args.colors[rejection.index], rejection.error),
	};

	for rejection in &rejections {
		let kind = rejection.error.kind();
		eprintln!("{} {}: {}", format!("[{kind}]").red(), args.colors[rejection.index], rejection.error);
	}

	for color in pal.sorted_colors() {
		println!("{} {}", "    ".on_truecolor(color.r, color.g, color.b), color);
	}

	let summary = format!("{}/{} colors", pal.count(), pal.capacity());
	if rejections.is_empty() {
		println!("{}", summary.bold());
	} else {
		println!("{} ({} rejected)", summary.bold(), rejections.len());
	}

	Ok(())
}
