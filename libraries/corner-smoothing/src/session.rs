use crate::corner::smooth_selected_points;
use crate::error::SmoothingError;
use crate::path::Path;
use crate::profile::{CurvatureProfile, ProfileOptions, ProfilePath};
use crate::scene::{SceneItem, build_scene_profiles};
use crate::settings::Coefficients;

use serde::{Deserialize, Serialize};

/// A selected point of a path, with the selection state of its neighbors at the time it was recorded.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedEntry {
	pub index: usize,
	pub previous_selected: bool,
	pub next_selected: bool,
}

/// The selected points of one path, in index order.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionRecord {
	entries: Vec<SelectedEntry>,
}

impl SelectionRecord {
	/// Record the currently selected points of `path`. Neighbors wrap around the ends of the point list, even for open paths.
	pub fn capture(path: &Path) -> Self {
		let points = path.points();
		let entries = path
			.selected_indices()
			.map(|index| {
				let (previous, next) = path.neighbors(index);
				SelectedEntry {
					index,
					previous_selected: points[previous].selected,
					next_selected: points[next].selected,
				}
			})
			.collect();
		Self { entries }
	}

	pub fn entries(&self) -> &[SelectedEntry] {
		&self.entries
	}

	pub fn entry(&self, index: usize) -> Option<&SelectedEntry> {
		self.entries.binary_search_by_key(&index, |entry| entry.index).ok().map(|position| &self.entries[position])
	}

	pub fn contains(&self, index: usize) -> bool {
		self.entry(index).is_some()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// What a successful [SmoothingSession::run] did.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SessionReport {
	/// Number of recorded points the transform was offered to, whether or not they had handles.
	pub visited_points: usize,
	/// One profile per eligible path when the profile was requested, otherwise empty.
	pub profiles: Vec<CurvatureProfile>,
}

impl SessionReport {
	pub fn profile_paths(&self) -> impl Iterator<Item = &ProfilePath> {
		self.profiles.iter().flat_map(|profile| profile.paths.iter())
	}
}

/// State kept between the runs of one interactive session, while the user keeps adjusting the coefficients.
///
/// The host may reset the point selection after each run, so the selection seen by the first run is recorded per top-level item
/// and reused by every later run. Each run is expected to be handed the geometry as it was before the previous run was applied.
#[derive(Clone, Debug, Default)]
pub struct SmoothingSession {
	records: Vec<SelectionRecord>,
	pub profile_options: ProfileOptions,
}

impl SmoothingSession {
	pub fn new(profile_options: ProfileOptions) -> Self {
		Self {
			records: Vec::new(),
			profile_options,
		}
	}

	/// Smooth the selected points of every top-level path in `items`, then build the curvature profile of everything if `show_profile` is set.
	pub fn run(&mut self, items: &mut [SceneItem], coefficients: Coefficients, show_profile: bool) -> Result<SessionReport, SmoothingError> {
		if items.is_empty() {
			log::warn!("{}", SmoothingError::NoSelection);
			return Err(SmoothingError::NoSelection);
		}

		if self.records.len() < items.len() {
			self.records.resize_with(items.len(), SelectionRecord::default);
		}

		let mut eligible = false;
		let mut report = SessionReport::default();
		for (item_index, (record, item)) in self.records.iter_mut().zip(items.iter_mut()).enumerate() {
			let Some(path) = item.as_path_mut() else { continue };

			if record.is_empty() {
				*record = SelectionRecord::capture(path);
				log::debug!("Item {item_index}: recorded {} selected points", record.len());
			} else {
				log::debug!("Item {item_index}: reusing {} recorded points", record.len());
			}

			let points = path.points_mut().iter_mut().enumerate();
			let selected = points.filter_map(|(index, point)| record.entry(index).map(|entry| (point, entry.previous_selected, entry.next_selected)));
			report.visited_points += record.len();
			eligible |= smooth_selected_points(selected, coefficients);
		}

		if !eligible {
			log::warn!("{}", SmoothingError::NothingToTune);
			return Err(SmoothingError::NothingToTune);
		}

		if show_profile {
			report.profiles = build_scene_profiles(items, &self.profile_options);
			log::info!("Built {} profile paths", report.profile_paths().count());
		}

		Ok(report)
	}

	/// Select exactly the recorded points again, as the host may have cleared the selection during the run.
	pub fn restore_selection(&self, items: &mut [SceneItem]) {
		for (record, item) in self.records.iter().zip(items.iter_mut()) {
			if let Some(path) = item.as_path_mut() {
				path.set_selection(|index| record.contains(index));
			}
		}
	}

	/// The selection recorded for the top-level item at `item_index`.
	pub fn record(&self, item_index: usize) -> Option<&SelectionRecord> {
		self.records.get(item_index)
	}

	/// Forget every recorded selection, which ends the session.
	pub fn clear(&mut self) {
		self.records.clear();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::path::AnchorPoint;

	use glam::DVec2;

	/// A rounded corner between two straight edges, with both points of the rounding selected.
	fn rounded_corner() -> Path {
		let mut path = Path::new(
			vec![
				AnchorPoint::corner(DVec2::new(0., 0.)),
				AnchorPoint::new(DVec2::new(80., 0.), DVec2::new(80., 0.), DVec2::new(91., 0.)),
				AnchorPoint::new(DVec2::new(100., 20.), DVec2::new(100., 9.), DVec2::new(100., 20.)),
				AnchorPoint::corner(DVec2::new(100., 100.)),
			],
			false,
		);
		path.set_selection(|index| index == 1 || index == 2);
		path
	}

	#[test]
	fn empty_input_is_a_notice() {
		let mut session = SmoothingSession::default();
		assert_eq!(session.run(&mut [], Coefficients::new(0.5, 0.5), true), Err(SmoothingError::NoSelection));
	}

	#[test]
	fn corners_without_handles_are_a_notice() {
		let mut path = Path::from_anchors([DVec2::ZERO, DVec2::X, DVec2::ONE], true);
		path.set_selection(|_| true);
		let mut items = vec![SceneItem::Path(path)];

		let mut session = SmoothingSession::default();
		assert_eq!(session.run(&mut items, Coefficients::new(0.5, 0.5), true), Err(SmoothingError::NothingToTune));
	}

	#[test]
	fn first_run_records_the_selection() {
		let mut items = vec![SceneItem::Other { kind: "text".to_string() }, SceneItem::Path(rounded_corner())];
		let mut session = SmoothingSession::default();
		let report = session.run(&mut items, Coefficients::new(0.5, 0.2), false).unwrap();

		assert_eq!(report.visited_points, 2);
		assert!(report.profiles.is_empty());
		assert!(session.record(0).unwrap().is_empty());
		assert_eq!(
			session.record(1).unwrap().entries(),
			&[
				SelectedEntry {
					index: 1,
					previous_selected: false,
					next_selected: true,
				},
				SelectedEntry {
					index: 2,
					previous_selected: true,
					next_selected: false,
				},
			]
		);

		let path = items[1].as_path().unwrap();
		assert_eq!(path[1].anchor, DVec2::new(74.5, 0.));
		assert_eq!(path[2].anchor, DVec2::new(100., 25.5));
		assert_eq!(path[0], AnchorPoint::corner(DVec2::ZERO));
	}

	#[test]
	fn later_runs_reuse_the_recorded_selection() {
		let original = vec![SceneItem::Path(rounded_corner())];
		let mut session = SmoothingSession::default();
		let mut first = original.clone();
		session.run(&mut first, Coefficients::new(1., 0.), false).unwrap();

		// The host lost the selection, the session still knows which points to work on
		let mut second = original.clone();
		second[0].as_path_mut().unwrap().set_selection(|_| false);
		let report = session.run(&mut second, Coefficients::new(1., 0.), true).unwrap();
		assert_eq!(report.profiles.len(), 1);
		assert_eq!(report.profile_paths().count(), 1);

		session.restore_selection(&mut second);
		assert_eq!(second[0].as_path().unwrap().selected_indices().collect::<Vec<_>>(), vec![1, 2]);
		assert_eq!(second, first);

		session.clear();
		assert!(session.record(0).is_none());
	}
}
