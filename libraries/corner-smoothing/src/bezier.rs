//! Closed-form evaluation of cubic Bézier segments.
//!
//! The scalar functions operate on one axis of the control coordinates at a time. [Segment] applies them to both axes.

use crate::consts::DEGENERATE_TANGENT_LIMIT;

use glam::DVec2;

/// Position along one axis of the cubic Bézier with control coordinates `p0..p3` at parameter `t`.
pub fn position(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
	let one_minus_t = 1. - t;
	one_minus_t * one_minus_t * one_minus_t * p0 + 3. * t * one_minus_t * one_minus_t * p1 + 3. * t * t * one_minus_t * p2 + t * t * t * p3
}

/// First derivative with respect to `t` along one axis.
pub fn first_derivative(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
	let one_minus_t = 1. - t;
	3. * one_minus_t * one_minus_t * (p1 - p0) + 6. * one_minus_t * t * (p2 - p1) + 3. * t * t * (p3 - p2)
}

/// Second derivative with respect to `t` along one axis.
pub fn second_derivative(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
	6. * (1. - t) * (p2 - 2. * p1 + p0) + 6. * t * (p3 - 2. * p2 + p1)
}

/// Signed planar curvature from the first (`dx`, `dy`) and second (`ddx`, `ddy`) derivatives.
///
/// Returns `None` when the tangent is too short for the curvature to be meaningful, which happens at cusps and where a handle
/// coincides with its anchor at the segment end.
pub fn curvature(dx: f64, dy: f64, ddx: f64, ddy: f64) -> Option<f64> {
	let tangent_length_squared = dx * dx + dy * dy;
	if tangent_length_squared.is_nan() || tangent_length_squared < DEGENERATE_TANGENT_LIMIT {
		return None;
	}

	let curvature = (dx * ddy - ddx * dy) / tangent_length_squared.powf(1.5);
	curvature.is_finite().then_some(curvature)
}

/// A cubic Bézier piece of a path, from an anchor through its right handle and the next point's left handle to the next anchor.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Segment {
	pub start: DVec2,
	pub handle_start: DVec2,
	pub handle_end: DVec2,
	pub end: DVec2,
}

impl Segment {
	pub fn new(start: DVec2, handle_start: DVec2, handle_end: DVec2, end: DVec2) -> Self {
		Self { start, handle_start, handle_end, end }
	}

	/// A segment is straight when both of its handles collapse exactly onto their anchors.
	pub fn is_straight(&self) -> bool {
		self.start == self.handle_start && self.handle_end == self.end
	}

	fn map(&self, function: impl Fn(f64, f64, f64, f64, f64) -> f64, t: f64) -> DVec2 {
		DVec2::new(
			function(self.start.x, self.handle_start.x, self.handle_end.x, self.end.x, t),
			function(self.start.y, self.handle_start.y, self.handle_end.y, self.end.y, t),
		)
	}

	/// Point on the segment at parameter `t`.
	pub fn evaluate(&self, t: f64) -> DVec2 {
		self.map(position, t)
	}

	/// Non-normalized tangent at parameter `t`.
	pub fn derivative(&self, t: f64) -> DVec2 {
		self.map(first_derivative, t)
	}

	pub fn second_derivative(&self, t: f64) -> DVec2 {
		self.map(second_derivative, t)
	}

	/// Signed curvature at parameter `t`, or `None` where the tangent degenerates.
	pub fn curvature(&self, t: f64) -> Option<f64> {
		let d = self.derivative(t);
		let dd = self.second_derivative(t);
		curvature(d.x, d.y, dd.x, dd.y)
	}

	/// Positions at `steps + 1` evenly spaced parameters from `0` to `1` inclusive.
	pub fn flatten(&self, steps: usize) -> impl Iterator<Item = DVec2> + '_ {
		let steps = steps.max(1);
		(0..=steps).map(move |step| self.evaluate(step as f64 / steps as f64))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn compare_f64s(a: f64, b: f64) -> bool {
		(a - b).abs() < 1e-6
	}

	#[test]
	fn position_hits_the_end_points() {
		let controls = [(-3.5, 17.25, 0.125, 42.), (1e6, -2e5, 3.75, -0.5), (0., 0., 0., 0.)];
		for (p0, p1, p2, p3) in controls {
			assert_eq!(position(p0, p1, p2, p3, 0.), p0);
			assert_eq!(position(p0, p1, p2, p3, 1.), p3);
		}
	}

	#[test]
	fn test_derivative() {
		let segment = Segment::new(DVec2::new(10., 10.), DVec2::new(40., 30.), DVec2::new(60., 60.), DVec2::new(70., 100.));
		assert_eq!(segment.derivative(0.), DVec2::new(90., 60.));
		assert_eq!(segment.derivative(1.), DVec2::new(30., 120.));

		// Central difference of the position agrees with the closed form
		let t = 0.37;
		let h = 1e-6;
		let numeric = (segment.evaluate(t + h) - segment.evaluate(t - h)) / (2. * h);
		assert!(numeric.abs_diff_eq(segment.derivative(t), 1e-4));
	}

	#[test]
	fn test_second_derivative() {
		let segment = Segment::new(DVec2::new(10., 10.), DVec2::new(50., 10.), DVec2::new(50., 50.), DVec2::new(50., 10.));
		assert_eq!(segment.second_derivative(0.), DVec2::new(-240., 240.));
		assert_eq!(segment.second_derivative(1.), DVec2::new(0., -480.));

		let t = 0.61;
		let h = 1e-5;
		let numeric = (segment.derivative(t + h) - segment.derivative(t - h)) / (2. * h);
		assert!(numeric.abs_diff_eq(segment.second_derivative(t), 1e-3));
	}

	#[test]
	fn test_curvature() {
		let segment = Segment::new(DVec2::new(10., 10.), DVec2::new(50., 10.), DVec2::new(50., 50.), DVec2::new(50., 10.));
		assert!(compare_f64s(segment.curvature(0.).unwrap(), 0.016667));
		assert!(compare_f64s(segment.curvature(0.5).unwrap(), 0.));
		assert!(compare_f64s(segment.curvature(1.).unwrap(), 0.));

		// Turning clockwise flips the sign
		let mirrored = Segment::new(DVec2::new(10., -10.), DVec2::new(50., -10.), DVec2::new(50., -50.), DVec2::new(50., -10.));
		assert!(compare_f64s(mirrored.curvature(0.).unwrap(), -0.016667));
	}

	#[test]
	fn curvature_of_a_quarter_circle_is_close_to_one_over_radius() {
		// Standard cubic approximation of a quarter circle of radius 100
		let k = 0.5522847498 * 100.;
		let arc = Segment::new(DVec2::new(100., 0.), DVec2::new(100., k), DVec2::new(k, 100.), DVec2::new(0., 100.));
		for t in [0., 0.25, 0.5, 0.75, 1.] {
			let curvature = arc.curvature(t).unwrap();
			assert!((curvature - 0.01).abs() < 0.0005, "curvature {curvature} at {t}");
		}
	}

	#[test]
	fn degenerate_tangent_has_no_curvature() {
		assert_eq!(curvature(0., 0., 5., 5.), None);
		assert_eq!(curvature(0.0005, 0.0005, 1., -1.), None);
		assert!(curvature(0.01, 0., 1., 1.).is_some());

		// Handle collapsed onto the start anchor gives a zero tangent at t = 0
		let cusp = Segment::new(DVec2::new(0., 0.), DVec2::new(0., 0.), DVec2::new(30., 40.), DVec2::new(50., 0.));
		assert_eq!(cusp.curvature(0.), None);
		assert!(cusp.curvature(0.5).is_some());

		let point = Segment::new(DVec2::ONE, DVec2::ONE, DVec2::ONE, DVec2::ONE);
		assert_eq!(point.curvature(0.5), None);
	}

	#[test]
	fn non_finite_input_is_not_a_sample() {
		assert_eq!(curvature(f64::NAN, 1., 1., 1.), None);
		assert_eq!(curvature(1., 1., f64::INFINITY, 1.), None);
	}

	#[test]
	fn straightness_is_exact() {
		let straight = Segment::new(DVec2::new(0., 0.), DVec2::new(0., 0.), DVec2::new(10., 0.), DVec2::new(10., 0.));
		assert!(straight.is_straight());

		let almost = Segment::new(DVec2::new(0., 0.), DVec2::new(1e-12, 0.), DVec2::new(10., 0.), DVec2::new(10., 0.));
		assert!(!almost.is_straight());
	}

	#[test]
	fn flatten_includes_both_ends() {
		let segment = Segment::new(DVec2::new(0., 0.), DVec2::new(0., 10.), DVec2::new(10., 10.), DVec2::new(10., 0.));
		let points: Vec<_> = segment.flatten(50).collect();
		assert_eq!(points.len(), 51);
		assert_eq!(points[0], segment.start);
		assert_eq!(points[50], segment.end);
	}
}
