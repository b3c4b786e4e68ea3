mod structs;
pub use structs::*;

use crate::bezier::Segment;

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter, Result};
use std::ops::{Index, IndexMut};

/// Structure used to represent a vector path as it exists in the host document: an ordered list of [AnchorPoint]s and the
/// stroke attributes the host reports for it.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
	points: Vec<AnchorPoint>,
	pub closed: bool,
	#[serde(default)]
	pub stroke_width: f64,
	#[serde(default)]
	pub stroked: bool,
}

/// Iteration structure for iterating across each segment of a [Path].
pub struct SegmentIter<'a> {
	index: usize,
	path: &'a Path,
}

impl Index<usize> for Path {
	type Output = AnchorPoint;

	fn index(&self, index: usize) -> &Self::Output {
		assert!(index < self.len(), "Index out of bounds in trait Index of Path.");
		&self.points[index]
	}
}

impl IndexMut<usize> for Path {
	fn index_mut(&mut self, index: usize) -> &mut Self::Output {
		assert!(index < self.len(), "Index out of bounds in trait IndexMut of Path.");
		&mut self.points[index]
	}
}

impl Iterator for SegmentIter<'_> {
	type Item = Segment;

	fn next(&mut self) -> Option<Self::Item> {
		let segment = self.path.segment(self.index)?;
		self.index += 1;
		Some(segment)
	}
}

impl Debug for Path {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result {
		f.debug_struct("Path").field("closed", &self.closed).field("points", &self.points).finish()
	}
}

impl Path {
	/// Create a new unstroked `Path` from a list of [AnchorPoint]s.
	pub fn new(points: Vec<AnchorPoint>, closed: bool) -> Self {
		Self {
			points,
			closed,
			stroke_width: 0.,
			stroked: false,
		}
	}

	/// Create a `Path` made only of sharp corners.
	pub fn from_anchors(anchors: impl IntoIterator<Item = DVec2>, closed: bool) -> Self {
		Self::new(anchors.into_iter().map(AnchorPoint::corner).collect(), closed)
	}

	#[must_use]
	pub fn with_stroke(mut self, stroke_width: f64) -> Self {
		self.stroke_width = stroke_width;
		self.stroked = true;
		self
	}

	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}

	/// Returns the number of [AnchorPoint]s contained within the `Path`.
	pub fn len(&self) -> usize {
		self.points.len()
	}

	/// Returns the number of segments. A closed path has one segment per point, an open path one fewer.
	pub fn len_segments(&self) -> usize {
		let mut number_of_segments = self.len();
		if !self.closed && number_of_segments > 0 {
			number_of_segments -= 1
		}
		number_of_segments
	}

	/// Returns the segment at the given index, wrapping back to the first point for the closing segment of a closed path.
	pub fn segment(&self, segment_index: usize) -> Option<Segment> {
		if segment_index >= self.len_segments() {
			return None;
		}
		Some(self[segment_index].to_segment(&self[(segment_index + 1) % self.len()]))
	}

	/// Returns an iterator of the [Segment]s along the `Path`.
	pub fn iter(&self) -> SegmentIter<'_> {
		SegmentIter { path: self, index: 0 }
	}

	pub fn points(&self) -> &[AnchorPoint] {
		&self.points
	}

	pub fn points_mut(&mut self) -> &mut [AnchorPoint] {
		&mut self.points
	}

	pub fn anchors(&self) -> Vec<DVec2> {
		self.points.iter().map(|point| point.anchor).collect()
	}

	/// Indices of the previous and next points, wrapping around the ends of the point list regardless of whether the path is closed.
	///
	/// # Panics
	/// When `index` is out of bounds, including any index into an empty path.
	pub fn neighbors(&self, index: usize) -> (usize, usize) {
		let len = self.len();
		assert!(index < len, "Point index {index} is out of bounds for a path of {len} points");
		let previous = if index == 0 { len - 1 } else { index - 1 };
		let next = if index == len - 1 { 0 } else { index + 1 };
		(previous, next)
	}

	pub fn selected_indices(&self) -> impl Iterator<Item = usize> + '_ {
		self.points.iter().enumerate().filter(|(_, point)| point.selected).map(|(index, _)| index)
	}

	pub fn set_selection(&mut self, selected: impl Fn(usize) -> bool) {
		for (index, point) in self.points.iter_mut().enumerate() {
			point.selected = selected(index);
		}
	}
}
