//! Visual theming for the nebula.
//!
//! Palette entries are written as `#RRGGBB` strings and parsed once up front;
//! a single malformed entry rejects the whole palette.

use rand::Rng;
use thiserror::Error;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color, different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Parse a strict `#RRGGBB` hex color.
	pub fn from_hex(hex: &str) -> Result<Self, PaletteError> {
		let invalid = || PaletteError::InvalidHex(hex.to_string());
		let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
		if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
			return Err(invalid());
		}
		let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
		Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
	}

	/// CSS `rgba(r, g, b, a)` notation, always including alpha.
	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Rejected palette definitions.
#[derive(Debug, Error, PartialEq)]
pub enum PaletteError {
	/// No entries at all.
	#[error("palette has no colors")]
	Empty,
	/// An entry that is not `#RRGGBB`.
	#[error("palette entry {0:?} is not a #RRGGBB color")]
	InvalidHex(String),
}

/// Cool blue-white nebula tones.
pub const NEBULA_HEX: [&str; 10] = [
	"#FFFFFF", "#E0EFFF", "#C0DFFF", "#A0CFFF", "#80BFFF", "#60AFFF", "#409FFF", "#70DFFF",
	"#A0EFFF", "#D0D0FF",
];

/// A validated, non-empty set of particle colors.
#[derive(Clone, Debug)]
pub struct Palette {
	colors: Vec<Color>,
}

impl Palette {
	/// Parse every entry; fails on the first malformed one.
	pub fn from_hex(entries: &[&str]) -> Result<Self, PaletteError> {
		if entries.is_empty() {
			return Err(PaletteError::Empty);
		}
		let colors = entries
			.iter()
			.map(|hex| Color::from_hex(hex))
			.collect::<Result<Vec<_>, _>>()?;
		Ok(Self { colors })
	}

	/// The default nebula palette.
	pub fn nebula() -> Result<Self, PaletteError> {
		Self::from_hex(&NEBULA_HEX)
	}

	/// Uniform pick.
	pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
		// Non-empty by construction.
		self.colors[rng.gen_range(0..self.colors.len())]
	}

	/// Parsed colors, in definition order.
	pub fn colors(&self) -> &[Color] {
		&self.colors
	}
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Painted over the whole surface every frame; its low alpha turns old
	/// frames into fading trails.
	pub trail_overlay: Color,
	/// Colors particles are drawn from.
	pub palette: Palette,
}

impl Theme {
	/// The default nebula look.
	pub fn nebula() -> Result<Self, PaletteError> {
		Ok(Self {
			trail_overlay: Color::rgba(0, 0, 5, 0.1),
			palette: Palette::nebula()?,
		})
	}
}
