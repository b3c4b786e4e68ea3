use crate::color::Color;
use crate::path::Path;
use crate::profile::{CurvatureProfile, ProfileOptions, ProfilePath, build_path_profile};

use serde::{Deserialize, Serialize};

/// An item of the host document the tool was invoked on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneItem {
	Path(Path),
	Group { items: Vec<SceneItem> },
	CompoundPath { paths: Vec<Path> },
	/// Anything else the host may hand over, such as text or placed images. Skipped by every walk.
	Other { kind: String },
}

impl SceneItem {
	pub fn as_path(&self) -> Option<&Path> {
		match self {
			Self::Path(path) => Some(path),
			_ => None,
		}
	}

	pub fn as_path_mut(&mut self) -> Option<&mut Path> {
		match self {
			Self::Path(path) => Some(path),
			_ => None,
		}
	}
}

/// Visit every path with more than one point, depth first in document order.
pub fn walk_paths<'a>(items: &'a [SceneItem], visit: &mut impl FnMut(&'a Path)) {
	for item in items {
		match item {
			SceneItem::Path(path) => {
				if path.len() > 1 {
					visit(path);
				} else {
					log::debug!("Skipping a path with {} points", path.len());
				}
			}
			SceneItem::Group { items } => walk_paths(items, visit),
			SceneItem::CompoundPath { paths } => {
				for path in paths.iter().filter(|path| path.len() > 1) {
					visit(path);
				}
			}
			SceneItem::Other { kind } => log::debug!("Skipping an item of kind \"{kind}\""),
		}
	}
}

/// Build a [CurvatureProfile] for every eligible path in `items`, in the order [walk_paths] visits them.
pub fn build_scene_profiles(items: &[SceneItem], options: &ProfileOptions) -> Vec<CurvatureProfile> {
	let mut profiles = Vec::new();
	walk_paths(items, &mut |path| profiles.push(build_path_profile(path, options)));
	profiles
}

/// Collect the profile paths of every eligible path in `items`, filled with `color` at `opacity`.
pub fn build_curvature_profile(items: &[SceneItem], color: Color, opacity: f32) -> Vec<ProfilePath> {
	let options = ProfileOptions {
		color,
		opacity,
		..Default::default()
	};
	build_scene_profiles(items, &options).into_iter().flat_map(|profile| profile.paths).collect()
}
