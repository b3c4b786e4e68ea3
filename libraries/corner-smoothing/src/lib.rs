//! Corner-smoothing: tuning of rounded corners on cubic Bézier paths, and the curvature profile used to judge the result.
//!
//! The crate works on already-resolved geometry. A host supplies [Path]s (usually nested inside [SceneItem]s) with absolute handle
//! coordinates and selection flags, and gets back the same paths with moved anchors and handles, plus [ProfilePath]s to draw.

pub mod bezier;
mod color;
pub mod consts;
mod corner;
mod error;
pub mod export;
mod path;
mod presets;
mod profile;
mod scene;
mod session;
mod settings;

pub use bezier::Segment;
pub use color::Color;
pub use corner::{CornerTransform, HandleConfiguration, smooth_point, smooth_selected_points};
pub use error::SmoothingError;
pub use path::*;
pub use presets::{Preset, PresetStore, round_off};
pub use profile::*;
pub use scene::{SceneItem, build_curvature_profile, build_scene_profiles, walk_paths};
pub use session::{SelectedEntry, SelectionRecord, SessionReport, SmoothingSession};
pub use settings::{CoefficientLimits, Coefficients, Settings};
