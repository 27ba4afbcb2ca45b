use colourtable_rs::palettes::palette::{Color, Palette, PaletteError};
use colourtable_rs::palettes::parse::parse_channels;

fn color_valid() -> Vec<(String, (i32, i32, i32))> {
	vec![
		(String::from("#1E3D54"), (0x1E, 0x3D, 0x54)),
		(String::from("#e2edf5"), (0xE2, 0xED, 0xF5)),
		(String::from("0xFF8000"), (255, 128, 0)),
		(String::from("000000"), (0, 0, 0)),
		(String::from("  #FFFFFF "), (255, 255, 255)),
		(String::from("255,0,0"), (255, 0, 0)),
		(String::from("12, 34 ,56"), (12, 34, 56)),
		// out of range, but still well-formed
		(String::from("300,0,0"), (300, 0, 0)),
		(String::from("0,-1,0"), (0, -1, 0)),
		(String::from("99999999999,0,0"), (i32::MAX, 0, 0)),
		(String::from("0,0,-99999999999999999999999"), (0, 0, i32::MIN)),
	]
}

fn color_invalid() -> Vec<String> {
	vec![
		String::new(),
		String::from("#FFF"),
		String::from("#GGGGGG"),
		String::from("#1234567"),
		String::from("1,2"),
		String::from("1,2,3,4"),
		String::from("red"),
	]
}

#[test]
fn color_parsing() {
	for (color_str, expected) in color_valid() {
		let channels = parse_channels(&color_str).unwrap();
		assert_eq!(channels, expected, "\"{color_str}\" parsed incorrectly");
	}

	for color_str in color_invalid() {
		let err = parse_channels(&color_str).unwrap_err();
		assert!(matches!(err, PaletteError::Unparseable { .. }), "\"{color_str}\": {err:?}");
	}
}

#[test]
fn color_from_str() {
	let c: Color = "#1E3D54".parse().unwrap();
	assert_eq!(c, Color { r: 0x1E, g: 0x3D, b: 0x54 });
	assert_eq!(c.to_string(), "#1E3D54");
	assert_eq!(u32::from(c), 0x1E3D54);

	let err = "0,0,256".parse::<Color>().unwrap_err();
	assert_eq!(err, PaletteError::InvalidValue { red: 0, green: 0, blue: 256 });
}

#[test]
fn color_out_of_range_rejected_by_palette() {
	let mut pal = Palette::new(4).unwrap();

	for color_str in ["300,0,0", "0,-1,0", "0,0,256", "99999999999,0,0"] {
		let (r, g, b) = parse_channels(color_str).unwrap();
		assert!(matches!(pal.add(r, g, b), Err(PaletteError::InvalidValue { .. })));
	}
	assert_eq!(pal.count(), 0);
}

#[test]
fn color_equality() {
	assert_eq!(Color::from([1, 2, 3]), Color { r: 1, g: 2, b: 3 });
	assert_eq!(Color::try_from_channels(1, 2, 3).unwrap(), Color::from(0x010203));
	assert_ne!(Color::from([1, 2, 3]), Color::from([3, 2, 1]));
}
