use anyhow::{Context, Result};
use corner_smoothing::Settings;
use std::io::ErrorKind;
use std::path::Path;

pub(crate) fn to_ron(settings: &Settings) -> Result<String> {
	ron::ser::to_string_pretty(settings, Default::default()).context("Failed to serialize settings")
}

pub(crate) fn from_ron(data: &str) -> Result<Settings> {
	let settings: Settings = ron::from_str(data).context("Failed to parse settings")?;
	settings.validate()?;
	Ok(settings)
}

/// Load the settings stored at `path`, starting from the first-launch defaults when the file does not exist yet.
pub(crate) fn read(path: &Path) -> Result<Settings> {
	let data = match std::fs::read_to_string(path) {
		Ok(data) => data,
		Err(e) if e.kind() == ErrorKind::NotFound => {
			log::info!("No settings at {}, using the defaults", path.display());
			return Ok(Settings::default());
		}
		Err(e) => return Err(e).with_context(|| format!("Failed to read settings from {}", path.display())),
	};
	from_ron(&data).with_context(|| format!("Invalid settings file {}", path.display()))
}

pub(crate) fn write(path: &Path, settings: &Settings) -> Result<()> {
	let data = to_ron(settings)?;
	std::fs::write(path, data).with_context(|| format!("Failed to write settings to {}", path.display()))
}
