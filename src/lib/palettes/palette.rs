use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use crate::palettes::{MAX_PALETTE_COLORS, MIN_PALETTE_COLORS};

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl From<[u8; 3]> for Color {
	fn from(v: [u8; 3]) -> Self {
		Self {
			r: v[0],
			g: v[1],
			b: v[2],
		}
	}
}

impl From<u32> for Color {
	fn from(v: u32) -> Self {
		Self {
			r: ((v >> 16) & 0xFF) as u8,
			g: ((v >> 8) & 0xFF) as u8,
			b: (v & 0xFF) as u8,
		}
	}
}

impl From<Color> for u32 {
	fn from(c: Color) -> Self {
		(c.r as u32) << 16 | (c.g as u32) << 8 | c.b as u32
	}
}

impl Color {
	/// Builds a color from raw channel values, rejecting anything outside 0..=255.
	pub fn try_from_channels(red: i32, green: i32, blue: i32) -> Result<Self, PaletteError> {
		match (u8::try_from(red), u8::try_from(green), u8::try_from(blue)) {
			(Ok(r), Ok(g), Ok(b)) => Ok(Self { r, g, b }),
			_ => Err(PaletteError::InvalidValue { red, green, blue }),
		}
	}
}

impl Display for Color {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "#{:06X}", u32::from(*self))
	}
}

/// A color lookup table with a fixed power-of-two capacity and no duplicate entries.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
	capacity: usize,
	colors: HashSet<Color>,
}

impl Palette {
	pub fn new(capacity: usize) -> Result<Palette, PaletteError> {
		if !Self::is_valid_capacity(capacity) {
			return Err(PaletteError::InvalidConfiguration { size: capacity });
		}

		Ok(Palette {
			capacity,
			colors: HashSet::with_capacity(capacity),
		})
	}

	/// Creates a palette and adds every color in order, stopping at the first one that's rejected.
	pub fn from_colors<I: IntoIterator<Item = Color>>(capacity: usize, colors: I) -> Result<Palette, PaletteError> {
		let mut pal = Palette::new(capacity)?;
		for c in colors {
			pal.add_color(c)?;
		}
		Ok(pal)
	}

	pub fn is_valid_capacity(size: usize) -> bool {
		size.is_power_of_two() && (MIN_PALETTE_COLORS..=MAX_PALETTE_COLORS).contains(&size)
	}

	/// Adds a color given as raw channel values.
	///
	/// Channel ranges are checked first, then the capacity, then duplicates.
	/// A duplicate color added to a full palette is therefore reported as
	/// [PaletteError::CapacityExceeded]. Nothing is modified on error.
	pub fn add(&mut self, red: i32, green: i32, blue: i32) -> Result<(), PaletteError> {
		let color = Color::try_from_channels(red, green, blue)?;
		self.add_color(color)
	}

	pub fn add_color(&mut self, c: Color) -> Result<(), PaletteError> {
		if self.is_full() {
			return Err(PaletteError::CapacityExceeded { capacity: self.capacity });
		}

		if !self.colors.insert(c) {
			return Err(PaletteError::DuplicateValue(c));
		}

		Ok(())
	}

	/// Adds raw channel triples in order.
	///
	/// Without `strict`, rejected colors are skipped and returned alongside their
	/// input position. With `strict`, the first rejection is returned as the error;
	/// colors added before it stay in the palette.
	pub fn add_all(&mut self, colors: &[(i32, i32, i32)], strict: bool) -> Result<Vec<Rejection>, Rejection> {
		let mut rejections: Vec<Rejection> = Vec::new();

		for (index, &(r, g, b)) in colors.iter().enumerate() {
			if let Err(error) = self.add(r, g, b) {
				let rejection = Rejection { index, error };
				if strict {
					return Err(rejection);
				}
				rejections.push(rejection);
			}
		}

		Ok(rejections)
	}

	/// Removes the given color if it's present. Out-of-range channels can never match a stored color.
	pub fn remove(&mut self, red: i32, green: i32, blue: i32) {
		if let Ok(color) = Color::try_from_channels(red, green, blue) {
			self.remove_color(&color);
		}
	}

	pub fn remove_color(&mut self, c: &Color) -> bool {
		self.colors.remove(c)
	}

	pub fn clear(&mut self) {
		self.colors.clear();
	}

	pub fn count(&self) -> usize {
		self.colors.len()
	}

	pub fn capacity(&self) -> usize {
		self.capacity
	}

	pub fn len(&self) -> usize {
		self.count()
	}

	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	pub fn is_full(&self) -> bool {
		self.colors.len() >= self.capacity
	}

	pub fn contains(&self, c: &Color) -> bool {
		self.colors.contains(c)
	}

	/// Iterates over the stored colors in no particular order.
	pub fn colors(&self) -> impl Iterator<Item = &Color> {
		self.colors.iter()
	}

	pub fn sorted_colors(&self) -> Vec<Color> {
		let mut colors = self.colors.iter().copied().collect::<Vec<Color>>();
		colors.sort();
		colors
	}
}

impl Display for Palette {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let colors = self.sorted_colors().iter().map(|c| c.to_string()).collect::<Vec<String>>();
		write!(f, "Palette({}/{}: {})", self.count(), self.capacity, colors.join(", "))
	}
}

/// A color [Palette::add_all] couldn't add.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
	pub index: usize,
	pub error: PaletteError,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
	InvalidConfiguration { size: usize },
	InvalidValue { red: i32, green: i32, blue: i32 },
	CapacityExceeded { capacity: usize },
	DuplicateValue(Color),
	Unparseable { input: String, msg: String },
}

impl PaletteError {
	/// A short label for the kind of error, for listing rejected colors.
	pub fn kind(&self) -> &'static str {
		match self {
			PaletteError::InvalidConfiguration { .. } => "size",
			PaletteError::InvalidValue { .. } => "invalid",
			PaletteError::CapacityExceeded { .. } => "full",
			PaletteError::DuplicateValue(_) => "duplicate",
			PaletteError::Unparseable { .. } => "syntax",
		}
	}
}

impl Display for PaletteError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PaletteError::InvalidConfiguration { size } => write!(f, "Invalid palette size {size}: must be a power of two between {MIN_PALETTE_COLORS} and {MAX_PALETTE_COLORS}"),
			PaletteError::InvalidValue { red, green, blue } => write!(f, "Invalid RGB color ({red}, {green}, {blue}): channels must be between 0 and 255"),
			PaletteError::CapacityExceeded { capacity } => write!(f, "The palette is full ({capacity} colors)"),
			PaletteError::DuplicateValue(c) => write!(f, "The color {c} is already in the palette"),
			PaletteError::Unparseable { input, msg } => write!(f, "Can't parse color \"{input}\": {msg}"),
		}
	}
}

impl std::error::Error for PaletteError {}
