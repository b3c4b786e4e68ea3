use crate::consts::{DEFAULT_MAX_COEF1, DEFAULT_MAX_COEF2, MAX_STORED_PRESETS};
use crate::error::SmoothingError;
use crate::presets::PresetStore;
use crate::profile::ProfileOptions;

use serde::{Deserialize, Serialize};

/// The pair of tuning coefficients.
/// - `coef1` is the anchor offset, as a fraction of the handle length.
/// - `coef2` is the handle offset, as a fraction of the handle length.
#[derive(Copy, Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Coefficients {
	pub coef1: f64,
	pub coef2: f64,
}

impl Coefficients {
	pub const ZERO: Coefficients = Coefficients { coef1: 0., coef2: 0. };

	pub const fn new(coef1: f64, coef2: f64) -> Self {
		Self { coef1, coef2 }
	}

	/// Clamp both coefficients into their allowed ranges, the way a slider would.
	#[must_use]
	pub fn clamped(self, limits: CoefficientLimits) -> Self {
		Self {
			coef1: self.coef1.clamp(0., limits.max_coef1),
			coef2: self.coef2.clamp(0., limits.max_coef2),
		}
	}

	/// Return the coefficients unchanged if both lie within their allowed ranges.
	pub fn checked(self, limits: CoefficientLimits) -> Result<Self, SmoothingError> {
		let check = |name: &'static str, value: f64, max: f64| {
			if (0. ..=max).contains(&value) {
				Ok(())
			} else {
				Err(SmoothingError::CoefficientOutOfRange { name, value, max })
			}
		};
		check("anchor", self.coef1, limits.max_coef1)?;
		check("handle", self.coef2, limits.max_coef2)?;
		Ok(self)
	}
}

/// Upper bounds of the coefficient sliders. Both lower bounds are zero.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoefficientLimits {
	pub max_coef1: f64,
	pub max_coef2: f64,
}

impl Default for CoefficientLimits {
	fn default() -> Self {
		Self {
			max_coef1: DEFAULT_MAX_COEF1,
			max_coef2: DEFAULT_MAX_COEF2,
		}
	}
}

/// Everything a host remembers between runs: the current coefficients, slider limits, saved presets and display toggles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
	pub coefficients: Coefficients,
	pub limits: CoefficientLimits,
	pub presets: PresetStore,
	/// Draw the curvature profile after tuning.
	pub show_profile: bool,
	/// Show the coefficients and presets before running, instead of running silently with the last used coefficients.
	pub show_ui: bool,
	pub profile: ProfileOptions,
}

impl Default for Settings {
	fn default() -> Self {
		let presets = PresetStore::default();
		let coefficients = presets.iter().next().map(|preset| preset.coefficients()).unwrap_or_default();
		Self {
			coefficients,
			limits: CoefficientLimits::default(),
			presets,
			show_profile: true,
			show_ui: true,
			profile: ProfileOptions::default(),
		}
	}
}

impl Settings {
	/// Check values that may have been edited by hand or restored from an older store.
	pub fn validate(&self) -> Result<(), SmoothingError> {
		if !(self.limits.max_coef1 > 0. && self.limits.max_coef2 > 0.) {
			return Err(SmoothingError::InvalidSettings(format!("coefficient limits must be positive, found {:?}", self.limits)));
		}
		if self.presets.len() > MAX_STORED_PRESETS {
			return Err(SmoothingError::InvalidSettings(format!("{} presets stored, at most {MAX_STORED_PRESETS} are supported", self.presets.len())));
		}
		if let Some(preset) = self.presets.iter().find(|preset| preset.coefficients().checked(self.limits).is_err()) {
			return Err(SmoothingError::InvalidSettings(format!("preset \"{}\" is outside of the coefficient limits", preset.name)));
		}
		self.coefficients.checked(self.limits)?;
		self.profile.validate()
	}

	/// Replace the current coefficients, rejecting values outside of the limits.
	pub fn set_coefficients(&mut self, coefficients: Coefficients) -> Result<(), SmoothingError> {
		self.coefficients = coefficients.checked(self.limits)?;
		Ok(())
	}

	/// Make the named preset current and return its coefficients.
	pub fn select_preset(&mut self, name: &str) -> Result<Coefficients, SmoothingError> {
		let coefficients = self.presets.get(name).ok_or_else(|| SmoothingError::UnknownPreset(name.to_string()))?.coefficients();
		self.set_coefficients(coefficients)?;
		Ok(coefficients)
	}

	/// The index of the preset matching the current coefficients, if any.
	pub fn selected_preset(&self) -> Option<usize> {
		self.presets.position_matching(self.coefficients)
	}

	/// Forget everything, as if the tool had never been run before.
	pub fn factory_reset(&mut self) {
		*self = Self::default();
	}
}
