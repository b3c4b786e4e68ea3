use crate::bezier::Segment;

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter, Result};

/// Structure used to represent a single anchor with its two handles along a [crate::Path].
///
/// Handles are absolute coordinates. A handle exactly equal to its anchor means there is no handle in that direction.
#[derive(Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnchorPoint {
	pub anchor: DVec2,
	pub left_handle: DVec2,
	pub right_handle: DVec2,
	#[serde(default)]
	pub selected: bool,
}

impl Debug for AnchorPoint {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result {
		let handle = |handle: DVec2| if handle == self.anchor { "n/a".to_string() } else { handle.to_string() };
		write!(f, "anchor: {}, left: {}, right: {}", self.anchor, handle(self.left_handle), handle(self.right_handle))?;
		if self.selected {
			write!(f, " (selected)")?;
		}
		Ok(())
	}
}

impl AnchorPoint {
	pub fn new(anchor: DVec2, left_handle: DVec2, right_handle: DVec2) -> Self {
		Self {
			anchor,
			left_handle,
			right_handle,
			selected: false,
		}
	}

	/// Create a sharp point whose handles both collapse onto the anchor.
	pub fn corner(anchor: DVec2) -> Self {
		Self::new(anchor, anchor, anchor)
	}

	#[must_use]
	pub fn with_selected(mut self, selected: bool) -> Self {
		self.selected = selected;
		self
	}

	/// Offset from the anchor to the left handle.
	pub fn left_delta(&self) -> DVec2 {
		self.left_handle - self.anchor
	}

	/// Offset from the anchor to the right handle.
	pub fn right_delta(&self) -> DVec2 {
		self.right_handle - self.anchor
	}

	pub fn has_left_handle(&self) -> bool {
		self.left_delta() != DVec2::ZERO
	}

	pub fn has_right_handle(&self) -> bool {
		self.right_delta() != DVec2::ZERO
	}

	/// The same point traversed in the opposite direction, so its left and right handles trade places.
	#[must_use]
	pub fn reversed(&self) -> Self {
		Self {
			left_handle: self.right_handle,
			right_handle: self.left_handle,
			..*self
		}
	}

	pub fn is_finite(&self) -> bool {
		self.anchor.is_finite() && self.left_handle.is_finite() && self.right_handle.is_finite()
	}

	/// The segment starting at this point and ending at `end`.
	pub fn to_segment(&self, end: &AnchorPoint) -> Segment {
		Segment::new(self.anchor, self.right_handle, end.left_handle, end.anchor)
	}
}
