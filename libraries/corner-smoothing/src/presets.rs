use crate::consts::DISPLAY_ROUNDING;
use crate::settings::Coefficients;

use serde::{Deserialize, Serialize};

/// A named pair of coefficients.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preset {
	pub name: String,
	pub coef1: f64,
	pub coef2: f64,
}

impl Preset {
	pub fn new(name: impl Into<String>, coefficients: Coefficients) -> Self {
		Self {
			name: name.into(),
			coef1: coefficients.coef1,
			coef2: coefficients.coef2,
		}
	}

	pub fn coefficients(&self) -> Coefficients {
		Coefficients::new(self.coef1, self.coef2)
	}
}

/// Ordered list of presets, in the order they were saved.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresetStore {
	presets: Vec<Preset>,
}

impl Default for PresetStore {
	fn default() -> Self {
		Self {
			presets: vec![
				Preset::new("Default", Coefficients::new(0.702, 0.111)),
				Preset::new("big", Coefficients::new(0.494, 0.171)),
				Preset::new("ellipsoid", Coefficients::new(0.682, 0.365)),
			],
		}
	}
}

impl PresetStore {
	pub fn empty() -> Self {
		Self { presets: Vec::new() }
	}

	pub fn len(&self) -> usize {
		self.presets.len()
	}

	pub fn is_empty(&self) -> bool {
		self.presets.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Preset> {
		self.presets.iter()
	}

	/// Save a new preset at the end of the list and return its index. Names are not required to be unique.
	pub fn add(&mut self, name: impl Into<String>, coefficients: Coefficients) -> usize {
		self.presets.push(Preset::new(name, coefficients));
		self.presets.len() - 1
	}

	/// Delete the preset at `index`, returning it if it existed.
	pub fn remove(&mut self, index: usize) -> Option<Preset> {
		(index < self.presets.len()).then(|| self.presets.remove(index))
	}

	/// First preset with the given name.
	pub fn get(&self, name: &str) -> Option<&Preset> {
		self.presets.iter().find(|preset| preset.name == name)
	}

	/// Index of the first preset whose values are exactly the given coefficients.
	pub fn position_matching(&self, coefficients: Coefficients) -> Option<usize> {
		self.presets.iter().position(|preset| preset.coefficients() == coefficients)
	}

	/// Name offered for a preset saved from the given coefficients.
	pub fn suggested_name(coefficients: Coefficients) -> String {
		format!("{} - {}", round_off(coefficients.coef1), round_off(coefficients.coef2))
	}

	pub fn factory_reset(&mut self) {
		*self = Self::default();
	}
}

/// Round a coefficient to three decimal places for display.
pub fn round_off(value: f64) -> f64 {
	(value * DISPLAY_ROUNDING).round() / DISPLAY_ROUNDING
}
