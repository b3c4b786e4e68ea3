mod builder;
mod stitch;

pub use builder::{CurvatureProfileBuilder, build_path_profile};
pub use stitch::stitch_original_points;

use crate::bezier::Segment;
use crate::color::Color;
use crate::consts::{DEFAULT_PROFILE_OPACITY, DEFAULT_PROFILE_SCALE, DEFAULT_SAMPLE_STEPS, MAX_SAMPLE_STEPS, SECTOR_SCALE_DIVISOR};
use crate::error::SmoothingError;
use crate::path::AnchorPoint;

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// How far a profile point is pushed off the path for a given curvature.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProfileMode {
	/// `position + scale * curvature * (dy, -dx) * |d|`, which keeps the profile the same shape when the path is scaled.
	#[default]
	NormalScaled,
	/// `position + curvature * (dy, -dx) * sector_length / 25`, using the arc length of the segment instead of the tangent length.
	SectorScaled,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileOptions {
	/// Parameter steps per curved segment. Each curved segment is sampled `steps + 1` times.
	pub steps: usize,
	/// Visualization scale used by [ProfileMode::NormalScaled].
	pub scale: f64,
	pub mode: ProfileMode,
	/// Fill of the emitted profile paths.
	pub color: Color,
	pub opacity: f32,
}

impl Default for ProfileOptions {
	fn default() -> Self {
		Self {
			steps: DEFAULT_SAMPLE_STEPS,
			scale: DEFAULT_PROFILE_SCALE,
			mode: ProfileMode::NormalScaled,
			color: Color::PROFILE_ORANGE,
			opacity: DEFAULT_PROFILE_OPACITY,
		}
	}
}

impl ProfileOptions {
	/// Reject options that would sample without end or write non-finite profile vertices.
	pub fn validate(&self) -> Result<(), SmoothingError> {
		let invalid = |message: String| Err(SmoothingError::InvalidSettings(message));

		if !(1..=MAX_SAMPLE_STEPS).contains(&self.steps) {
			return invalid(format!("profile steps must lie between 1 and {MAX_SAMPLE_STEPS}, found {}", self.steps));
		}
		if !(self.scale.is_finite() && self.scale >= 0.) {
			return invalid(format!("profile scale must be a finite non-negative number, found {}", self.scale));
		}
		if !(0. ..=1.).contains(&self.opacity) {
			return invalid(format!("profile opacity must lie between 0 and 1, found {}", self.opacity));
		}
		let (red, green, blue, alpha) = self.color.components();
		if Color::from_rgbaf32(red, green, blue, alpha).is_none() {
			return invalid(format!("profile color channels must lie between 0 and 1, found {:?}", self.color));
		}
		Ok(())
	}
}

/// One evaluation of a curved segment while building its profile.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CurvatureSample {
	pub t: f64,
	pub position: DVec2,
	/// The profile vertex, offset from `position` along the normal in proportion to the curvature.
	pub curvature_offset_point: DVec2,
	pub curvature_magnitude: f64,
}

impl CurvatureSample {
	/// Sample `segment` at `t`, or `None` where its tangent is degenerate.
	pub fn evaluate(segment: &Segment, t: f64, sector_length: f64, options: &ProfileOptions) -> Option<Self> {
		let position = segment.evaluate(t);
		let derivative = segment.derivative(t);
		let curvature = segment.curvature(t)?;

		// The tangent rotated a quarter turn clockwise, not normalized
		let normal = DVec2::new(derivative.y, -derivative.x);
		let offset = match options.mode {
			ProfileMode::NormalScaled => normal * (options.scale * curvature * derivative.length()),
			ProfileMode::SectorScaled => normal * (curvature * sector_length / SECTOR_SCALE_DIVISOR),
		};

		Some(Self {
			t,
			position,
			curvature_offset_point: position + offset,
			curvature_magnitude: curvature.abs(),
		})
	}
}

/// A filled, unstroked path drawn as part of a curvature profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfilePath {
	pub points: Vec<AnchorPoint>,
	pub closed: bool,
	pub fill: Color,
	pub opacity: f32,
}

impl ProfilePath {
	pub fn new(points: Vec<AnchorPoint>, options: &ProfileOptions) -> Self {
		Self {
			points,
			closed: true,
			fill: options.color,
			opacity: options.opacity,
		}
	}

	pub fn len(&self) -> usize {
		self.points.len()
	}

	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}

	pub fn anchors(&self) -> Vec<DVec2> {
		self.points.iter().map(|point| point.anchor).collect()
	}
}

/// Everything produced while building the profile of one path.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct CurvatureProfile {
	/// Non-empty profile paths in the order they were started.
	pub paths: Vec<ProfilePath>,
	/// The source path flattened into a polyline, used to measure the arc length of each segment.
	pub polyline: Vec<DVec2>,
	pub total_length: f64,
	/// Largest absolute curvature among the emitted samples, zero when nothing was sampled.
	pub max_curvature: f64,
}
