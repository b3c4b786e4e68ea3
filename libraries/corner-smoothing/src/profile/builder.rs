use super::{CurvatureProfile, CurvatureSample, ProfileOptions, ProfilePath, stitch_original_points};
use crate::bezier::Segment;
use crate::path::{AnchorPoint, Path};

use glam::DVec2;

/// Walks the segments of one [Path] and collects its curvature profile.
///
/// Curved segments contribute one profile vertex per sample. Each run of straight segments closes the profile path in progress
/// with the original points that bound the run, after which a new profile path is started.
pub struct CurvatureProfileBuilder<'a> {
	path: &'a Path,
	options: &'a ProfileOptions,
	profile: CurvatureProfile,
	active: Vec<AnchorPoint>,
	run_start: usize,
}

impl<'a> CurvatureProfileBuilder<'a> {
	pub fn new(path: &'a Path, options: &'a ProfileOptions) -> Self {
		Self {
			path,
			options,
			profile: CurvatureProfile::default(),
			active: Vec::new(),
			run_start: 0,
		}
	}

	pub fn build(mut self) -> CurvatureProfile {
		if self.path.len() < 2 {
			log::debug!("Path with {} points has no profile", self.path.len());
			return self.profile;
		}
		log::debug!("Building the curvature profile of a path with {} points", self.path.len());

		for (index, segment) in self.path.iter().enumerate() {
			let sector_length = self.measure(index, &segment);

			if segment.is_straight() {
				self.close_straight_run(index);
				continue;
			}
			self.sample(&segment, sector_length);
		}

		// Points from the last straight run up to the end, or back around to the first point of a closed path
		let end = if self.path.closed { self.path.len() } else { self.path.len() - 1 };
		stitch_original_points(self.path.points(), self.run_start, end, &mut self.active);
		self.finish_active_path();

		self.profile
	}

	/// Extend the measuring polyline over `segment` and return the length it grew by.
	fn measure(&mut self, index: usize, segment: &Segment) -> f64 {
		let polyline = &mut self.profile.polyline;
		if index == 0 {
			polyline.push(segment.start);
		}

		let before = polyline.len();
		if segment.is_straight() {
			polyline.push(segment.end);
		} else {
			polyline.extend(segment.flatten(self.options.steps).skip(1));
		}

		let sector_length = polyline[before - 1..].windows(2).map(|pair| pair[0].distance(pair[1])).sum::<f64>();
		self.profile.total_length += sector_length;
		sector_length
	}

	fn close_straight_run(&mut self, index: usize) {
		log::debug!("Segment {index} is straight");
		stitch_original_points(self.path.points(), self.run_start, index, &mut self.active);
		if !self.active.is_empty() {
			self.finish_active_path();
		}
		self.run_start = index + 1;
	}

	fn sample(&mut self, segment: &Segment, sector_length: f64) {
		let steps = self.options.steps.max(1);
		for step in 0..=steps {
			let t = step as f64 / steps as f64;
			let Some(sample) = CurvatureSample::evaluate(segment, t, sector_length, self.options) else {
				log::trace!("Degenerate tangent at t = {t}, sample skipped");
				continue;
			};

			self.profile.max_curvature = self.profile.max_curvature.max(sample.curvature_magnitude);
			self.active.push(AnchorPoint::corner(sample.curvature_offset_point));
		}
	}

	fn finish_active_path(&mut self) {
		let points = std::mem::take(&mut self.active);
		if points.is_empty() {
			log::debug!("Profile path is empty, discarded");
			return;
		}
		self.profile.paths.push(ProfilePath::new(points, self.options));
	}
}

/// Build the curvature profile of a single path. The path itself is left untouched.
pub fn build_path_profile(path: &Path, options: &ProfileOptions) -> CurvatureProfile {
	CurvatureProfileBuilder::new(path, options).build()
}

impl CurvatureProfile {
	/// All profile vertices across every path, in emission order.
	pub fn anchors(&self) -> impl Iterator<Item = DVec2> + '_ {
		self.paths.iter().flat_map(|path| path.points.iter().map(|point| point.anchor))
	}
}
