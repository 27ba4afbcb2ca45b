use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::palettes::palette::{Color, PaletteError};

static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^(?:#|0[xX])?(?P<hex>[0-9A-Fa-f]{6})$").unwrap()
});

static CHANNELS_RE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^(?P<r>[+-]?\d+)\s*,\s*(?P<g>[+-]?\d+)\s*,\s*(?P<b>[+-]?\d+)$").unwrap()
});

fn unparseable<S: Into<String>>(input: &str, msg: S) -> PaletteError {
	PaletteError::Unparseable { input: input.to_owned(), msg: msg.into() }
}

// the regex guarantees a signed run of digits, so a failed parse can only mean overflow
fn saturating_channel(digits: &str) -> i32 {
	match digits.parse::<i64>() {
		Ok(v) => v.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
		Err(_) if digits.starts_with('-') => i32::MIN,
		Err(_) => i32::MAX,
	}
}

/// Splits a color string into its raw channel values.
///
/// Accepts `#RRGGBB`, `0xRRGGBB`, `RRGGBB` and `R,G,B`. Decimal channels aren't
/// range-checked here (values beyond `i32` saturate); that's up to [Color::try_from_channels] or the palette.
pub fn parse_channels(s: &str) -> Result<(i32, i32, i32), PaletteError> {
	let trimmed = s.trim();

	if let Some(groups) = HEX_RE.captures(trimmed) {
		let parsed_int = u32::from_str_radix(&groups["hex"], 16)
			.map_err(|_| unparseable(s, "Not a hexadecimal color value"))?;

		let c = Color::from(parsed_int);
		return Ok((c.r as i32, c.g as i32, c.b as i32));
	}

	if let Some(groups) = CHANNELS_RE.captures(trimmed) {
		return Ok((saturating_channel(&groups["r"]), saturating_channel(&groups["g"]), saturating_channel(&groups["b"])));
	}

	Err(unparseable(s, "Expected #RRGGBB, 0xRRGGBB or R,G,B"))
}

impl FromStr for Color {
	type Err = PaletteError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (r, g, b) = parse_channels(s)?;
		Color::try_from_channels(r, g, b)
	}
}
