use crate::path::AnchorPoint;

/// Append the original points `from..=to` of `source` onto `target` in reverse order.
///
/// Each appended point has its handles swapped since the run is traversed backwards. The ends of the run get their outward handle
/// collapsed onto the anchor so the run meets the neighboring profile points with sharp corners. A `to` equal to the point count
/// stands for the closing segment of a closed path, which wraps back to point `0`.
///
/// # Panics
/// When `from > to` or `to > source.len()`, which a forward walk over the segments never produces.
pub fn stitch_original_points(source: &[AnchorPoint], from: usize, to: usize, target: &mut Vec<AnchorPoint>) {
	let point_count = source.len();
	log::debug!("Stitching original points {from} to {to} of {point_count}");

	if from == to {
		return;
	}
	assert!(
		from < to && to <= point_count,
		"Stitching range {from} to {to} runs backwards or past the end of a path of {point_count} points"
	);

	let reversed = |index: usize| AnchorPoint::new(source[index].anchor, source[index].right_handle, source[index].left_handle);

	if to == point_count {
		let first = &source[0];
		target.push(AnchorPoint::new(first.anchor, first.anchor, first.left_handle));

		target.extend((from..point_count).rev().map(|index| {
			let mut point = reversed(index);
			if index == from {
				point.right_handle = point.anchor;
			}
			point
		}));
		return;
	}

	target.extend((from..=to).rev().map(|index| {
		let mut point = reversed(index);
		if index == from {
			point.right_handle = point.anchor;
		} else if index == to {
			point.left_handle = point.anchor;
		}
		point
	}));
}
