use thiserror::Error;

/// The outcomes of a smoothing pass that are reported to the user rather than returned as geometry.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SmoothingError {
	#[error("Nothing selected\nSelect paths or individual points and try again")]
	NoSelection,

	#[error("Nothing to tune\nSelect rounded corners and try again")]
	NothingToTune,

	#[error("The {name} coefficient {value} is outside of the range 0 to {max}")]
	CoefficientOutOfRange { name: &'static str, value: f64, max: f64 },

	#[error("The preset \"{0}\" does not exist")]
	UnknownPreset(String),

	#[error("Invalid settings:\n{0}")]
	InvalidSettings(String),
}

impl SmoothingError {
	/// Whether this is a notice about the selection, as opposed to a problem with the settings.
	pub fn is_notice(&self) -> bool {
		matches!(self, Self::NoSelection | Self::NothingToTune)
	}
}
