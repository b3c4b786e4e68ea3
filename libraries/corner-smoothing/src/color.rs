use serde::{Deserialize, Serialize};

/// Structure that represents an SDR color used to fill curvature profiles.
/// All channels, including alpha, are stored as `f32` ranging from `0.0` to `1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
	red: f32,
	green: f32,
	blue: f32,
	alpha: f32,
}

impl Color {
	/// Light orange the profiles are drawn in by default, CMYK `(0%, 35%, 60%, 0%)`.
	pub const PROFILE_ORANGE: Color = Color::from_rgbf32_unchecked(1., 0.65, 0.4);

	/// Returns `Some(Color)` if every channel is a finite number between `0.0` and `1.0`.
	///
	/// # Examples
	/// ```
	/// use corner_smoothing::Color;
	/// let color = Color::from_rgbaf32(0.3, 0.14, 0.15, 0.92).unwrap();
	/// assert!(color.components() == (0.3, 0.14, 0.15, 0.92));
	///
	/// assert!(Color::from_rgbaf32(1.0, 1.0, 1.0, f32::NAN).is_none());
	/// ```
	pub fn from_rgbaf32(red: f32, green: f32, blue: f32, alpha: f32) -> Option<Color> {
		if [red, green, blue, alpha].iter().any(|channel| !(0. ..=1.).contains(channel)) {
			return None;
		}
		Some(Color { red, green, blue, alpha })
	}

	/// Return an opaque `Color` from given `f32` RGB channels.
	pub const fn from_rgbf32_unchecked(red: f32, green: f32, blue: f32) -> Color {
		Color { red, green, blue, alpha: 1. }
	}

	/// Return an opaque `Color` given RGB channels from `0` to `255`.
	pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Color {
		let map_range = |int_color| int_color as f32 / 255.;
		Color::from_rgbf32_unchecked(map_range(red), map_range(green), map_range(blue))
	}

	/// Naive conversion of process color percentages (`0.0` to `1.0` each) into an opaque color.
	pub fn from_cmyk(cyan: f32, magenta: f32, yellow: f32, black: f32) -> Option<Color> {
		let key = 1. - black;
		Color::from_rgbaf32((1. - cyan) * key, (1. - magenta) * key, (1. - yellow) * key, 1.)
	}

	pub fn components(&self) -> (f32, f32, f32, f32) {
		(self.red, self.green, self.blue, self.alpha)
	}

	/// Return a hexadecimal `RRGGBB` string without the leading `#`.
	///
	/// # Examples
	/// ```
	/// use corner_smoothing::Color;
	/// assert_eq!(Color::from_rgb8(0x52, 0x67, 0xfa).to_rgb_hex(), "5267fa");
	/// ```
	pub fn to_rgb_hex(&self) -> String {
		let channel = |value: f32| (value * 255.).round() as u8;
		format!("{:02x}{:02x}{:02x}", channel(self.red), channel(self.green), channel(self.blue))
	}
}
