// Implementation constants:
/// Squared tangent length below which the curvature of a sample is considered undefined.
pub const DEGENERATE_TANGENT_LIMIT: f64 = 1e-6;
/// Divisor applied to the sector length by [crate::ProfileMode::SectorScaled].
pub const SECTOR_SCALE_DIVISOR: f64 = 25.;
/// Number of presets a settings store may hold.
pub const MAX_STORED_PRESETS: usize = 10;
/// Largest number of sampling steps per curved segment a settings store may ask for.
pub const MAX_SAMPLE_STEPS: usize = 10_000;
/// Decimal places kept by [crate::round_off].
pub const DISPLAY_ROUNDING: f64 = 1000.;

// Method argument defaults:
/// Sampling steps along each curved segment, giving `DEFAULT_SAMPLE_STEPS + 1` samples.
pub const DEFAULT_SAMPLE_STEPS: usize = 50;
/// Visualization scale of the curvature offset.
pub const DEFAULT_PROFILE_SCALE: f64 = 0.1;
/// Opacity of the group holding the profile paths.
pub const DEFAULT_PROFILE_OPACITY: f32 = 0.4;
pub const DEFAULT_MAX_COEF1: f64 = 3.;
pub const DEFAULT_MAX_COEF2: f64 = 1.;
