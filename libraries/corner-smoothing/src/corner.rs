use crate::path::AnchorPoint;
use crate::settings::Coefficients;

use glam::DVec2;

/// Which handles of an [AnchorPoint] are pulled out of its anchor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HandleConfiguration {
	NoHandles,
	LeftOnly,
	RightOnly,
	Both,
}

impl HandleConfiguration {
	pub fn classify(point: &AnchorPoint) -> Self {
		match (point.has_left_handle(), point.has_right_handle()) {
			(false, false) => Self::NoHandles,
			(true, false) => Self::LeftOnly,
			(false, true) => Self::RightOnly,
			(true, true) => Self::Both,
		}
	}
}

/// The adjustment applied to a corner point, chosen from its handles and the selection state of its neighbors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CornerTransform {
	/// Only a left handle: the anchor slides away from it by `coef1`, the handle extends by `coef2` and the right handle collapses onto the new anchor.
	AnchorAndLeft,
	/// Mirror of [CornerTransform::AnchorAndLeft] for a point with only a right handle.
	AnchorAndRight,
	/// Both handles, only the previous neighbor selected: extend the left handle by `coef2`.
	LeftHandle,
	/// Both handles, only the next neighbor selected: extend the right handle by `coef2`.
	RightHandle,
	/// Both handles, with zero or two neighbors selected: extend both handles by `coef2`.
	BothHandles,
}

impl CornerTransform {
	/// Pick the transform for `point`, or `None` when it has no handles to work with.
	pub fn select(point: &AnchorPoint, previous_selected: bool, next_selected: bool) -> Option<Self> {
		match HandleConfiguration::classify(point) {
			HandleConfiguration::NoHandles => None,
			HandleConfiguration::LeftOnly => Some(Self::AnchorAndLeft),
			HandleConfiguration::RightOnly => Some(Self::AnchorAndRight),
			HandleConfiguration::Both => Some(match (previous_selected, next_selected) {
				(true, false) => Self::LeftHandle,
				(false, true) => Self::RightHandle,
				_ => Self::BothHandles,
			}),
		}
	}

	/// Move the anchor and handles of `point`. Every offset is computed from the handle deltas as they were before any coordinate changed.
	pub fn apply(self, point: &mut AnchorPoint, coefficients: Coefficients) {
		let Coefficients { coef1, coef2 } = coefficients;
		let left_delta = point.left_delta();
		let right_delta = point.right_delta();

		let extend = |handle: DVec2, delta: DVec2| handle + delta * coef2;

		match self {
			Self::AnchorAndLeft => {
				point.anchor -= left_delta * coef1;
				point.left_handle = extend(point.left_handle, left_delta);
				point.right_handle = point.anchor;
			}
			Self::AnchorAndRight => {
				point.anchor -= right_delta * coef1;
				point.right_handle = extend(point.right_handle, right_delta);
				point.left_handle = point.anchor;
			}
			Self::LeftHandle => point.left_handle = extend(point.left_handle, left_delta),
			Self::RightHandle => point.right_handle = extend(point.right_handle, right_delta),
			Self::BothHandles => {
				point.left_handle = extend(point.left_handle, left_delta);
				point.right_handle = extend(point.right_handle, right_delta);
			}
		}
	}
}

/// Smooth one selected point in place, returning the transform that was applied, if any.
pub fn smooth_point(point: &mut AnchorPoint, previous_selected: bool, next_selected: bool, coefficients: Coefficients) -> Option<CornerTransform> {
	let Some(transform) = CornerTransform::select(point, previous_selected, next_selected) else {
		log::debug!("Point without handles at {}, left as is", point.anchor);
		return None;
	};

	log::debug!("Applying {transform:?} to the point at {}", point.anchor);
	transform.apply(point, coefficients);
	Some(transform)
}

/// Smooth every given point, each paired with whether its previous and next neighbors are selected.
///
/// Returns whether at least one point had handles to adjust. Every point is visited even after the first eligible one.
pub fn smooth_selected_points<'a>(points: impl IntoIterator<Item = (&'a mut AnchorPoint, bool, bool)>, coefficients: Coefficients) -> bool {
	points.into_iter().fold(false, |eligible, (point, previous_selected, next_selected)| {
		smooth_point(point, previous_selected, next_selected, coefficients).is_some() || eligible
	})
}
