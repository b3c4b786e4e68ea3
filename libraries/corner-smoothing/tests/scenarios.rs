use corner_smoothing::*;

use glam::DVec2;
use pretty_assertions::assert_eq;

fn init_logger() {
	let _ = env_logger::builder().is_test(true).try_init();
}

fn square(closed: bool) -> Path {
	Path::from_anchors([DVec2::new(0., 0.), DVec2::new(100., 0.), DVec2::new(100., 100.), DVec2::new(0., 100.)], closed)
}

/// A rounded rectangle with corner radius 20. Straight edges alternate with curved corners.
fn rounded_rectangle() -> Path {
	let k = 0.5522847498 * 20.;
	let mut points = Vec::new();
	for (corner, into, out_of) in [
		(DVec2::new(100., 0.), DVec2::X, DVec2::Y),
		(DVec2::new(100., 60.), DVec2::Y, DVec2::NEG_X),
		(DVec2::new(0., 60.), DVec2::NEG_X, DVec2::NEG_Y),
		(DVec2::new(0., 0.), DVec2::NEG_Y, DVec2::X),
	] {
		let start = corner - into * 20.;
		let end = corner + out_of * 20.;
		points.push(AnchorPoint::new(start, start, start + into * k));
		points.push(AnchorPoint::new(end, end - out_of * k, end));
	}
	// Start at the end of the first corner, so the last corner is the closing segment
	points.rotate_left(1);
	Path::new(points, true)
}

#[test]
fn square_has_nothing_to_tune() {
	init_logger();
	let mut path = square(true);
	let original = path.clone();

	let points = path.points_mut().iter_mut().map(|point| (point, true, true));
	assert!(!smooth_selected_points(points, Coefficients::new(1.7, 0.3)));
	assert_eq!(path, original);

	let items = vec![SceneItem::Path(path.clone())];
	assert!(build_curvature_profile(&items, Color::PROFILE_ORANGE, 0.4).is_empty());

	path.set_selection(|_| true);
	let mut items = vec![SceneItem::Path(path)];
	let mut session = SmoothingSession::default();
	let error = session.run(&mut items, Coefficients::new(1.7, 0.3), true).unwrap_err();
	assert_eq!(error, SmoothingError::NothingToTune);
	assert!(error.is_notice());
	assert_eq!(error.to_string(), "Nothing to tune\nSelect rounded corners and try again");
}

#[test]
fn single_right_handle_scenario() {
	init_logger();
	let mut path = Path::new(
		vec![AnchorPoint::new(DVec2::new(0., 0.), DVec2::new(0., 0.), DVec2::new(10., 0.)), AnchorPoint::corner(DVec2::new(50., 20.))],
		false,
	);

	let transform = smooth_point(&mut path[0], false, true, Coefficients::new(0.5, 0.2));
	assert_eq!(transform, Some(CornerTransform::AnchorAndRight));

	let point = path[0];
	assert_eq!(point.anchor, DVec2::new(-5., 0.));
	assert_eq!(point.anchor.distance(DVec2::ZERO), 5.);
	assert_eq!(point.right_handle, DVec2::new(12., 0.));
	assert_eq!(point.right_handle.distance(DVec2::new(10., 0.)), 2.);
	assert_eq!(point.left_handle, point.anchor);
	assert_eq!(path[1], AnchorPoint::corner(DVec2::new(50., 20.)));
}

#[test]
fn straight_paths_only_yield_original_anchors() {
	init_logger();
	for closed in [false, true] {
		let path = square(closed);
		let profile = build_path_profile(&path, &ProfileOptions::default());
		let anchors = path.anchors();
		assert!(profile.anchors().all(|anchor| anchors.contains(&anchor)));
		assert_eq!(profile.max_curvature, 0.);
	}
}

#[test]
fn rounded_rectangle_profile() {
	init_logger();
	let path = rounded_rectangle();
	assert_eq!(path.len_segments(), 8);

	let profile = build_path_profile(&path, &ProfileOptions::default());
	// Each corner arc is closed off by the original points of that corner once the following straight edge is reached.
	// The last corner has no following edge and wraps back to the first point instead.
	assert_eq!(profile.paths.len(), 4);
	for (index, profile_path) in profile.paths.iter().enumerate() {
		assert_eq!(profile_path.len(), 51 + 2, "profile path {index}");
	}

	// The final profile path ends with the wrap point followed by the points of its corner in reverse
	let last = &profile.paths[3];
	assert_eq!(last.points[51].anchor, path[0].anchor);
	assert_eq!(last.points[52].anchor, path[7].anchor);

	// Arcs of radius 20 have curvature close to 1/20
	assert!((profile.max_curvature - 0.05).abs() < 0.005, "{}", profile.max_curvature);

	let perimeter = 2. * (60. + 20.) + 2. * std::f64::consts::PI * 20.;
	assert!((profile.total_length - perimeter).abs() < 0.1, "{}", profile.total_length);
}

#[test]
fn closed_wrap_stitch_has_no_gap_or_duplicate() {
	let source = square(true).points().to_vec();
	let mut target = Vec::new();
	stitch_original_points(&source, 2, source.len(), &mut target);

	let anchors = target.iter().map(|point| point.anchor).collect::<Vec<_>>();
	assert_eq!(anchors, vec![DVec2::new(0., 0.), DVec2::new(0., 100.), DVec2::new(100., 100.)]);
	assert_eq!(target.len(), (source.len() - 2) + 1);
}

#[test]
fn session_reruns_from_the_original_geometry() {
	init_logger();
	let mut path = rounded_rectangle();
	path.set_selection(|index| index == 2 || index == 3);
	let original = vec![SceneItem::Group { items: vec![] }, SceneItem::Path(path)];

	let mut session = SmoothingSession::new(ProfileOptions::default());
	let mut items = original.clone();
	let first = session.run(&mut items, Coefficients::new(0.2, 0.1), true).unwrap();
	assert_eq!(first.visited_points, 2);
	assert_eq!(first.profiles.len(), 1);

	// The host reverts the previous attempt and clears the selection before every rerun
	let mut items = original.clone();
	items[1].as_path_mut().unwrap().set_selection(|_| false);
	let second = session.run(&mut items, Coefficients::new(0.4, 0.1), false).unwrap();
	assert_eq!(second.visited_points, 2);

	let smoothed = items[1].as_path().unwrap();
	let source = original[1].as_path().unwrap();
	assert_eq!(smoothed[2].anchor, source[2].anchor - source[2].left_delta() * 0.4);
	assert_eq!(smoothed[3].anchor, source[3].anchor - source[3].right_delta() * 0.4);
	assert_eq!(smoothed[0], source[0]);

	session.restore_selection(&mut items);
	assert_eq!(items[1].as_path().unwrap().selected_indices().collect::<Vec<_>>(), vec![2, 3]);
}

#[test]
fn scene_documents_round_trip_through_json() {
	let items = vec![
		SceneItem::Path(Path::new(vec![AnchorPoint::new(DVec2::ZERO, DVec2::ZERO, DVec2::new(10.5, 0.)), AnchorPoint::corner(DVec2::new(50., 20.))], false).with_stroke(1.5)),
		SceneItem::CompoundPath { paths: vec![square(true), square(false)] },
		SceneItem::Other { kind: "TextFrame".to_string() },
	];
	let json = serde_json::to_string_pretty(&items).unwrap();
	let restored: Vec<SceneItem> = serde_json::from_str(&json).unwrap();
	assert_eq!(restored, items);

	// Selection and stroke attributes are optional in hand-written documents
	let minimal = r#"[{"type":"Path","points":[{"anchor":[0,0],"left_handle":[0,0],"right_handle":[1,0]}],"closed":false}]"#;
	let parsed: Vec<SceneItem> = serde_json::from_str(minimal).unwrap();
	let path = parsed[0].as_path().unwrap();
	assert!(!path[0].selected);
	assert!(!path.stroked);
}

#[test]
fn settings_drive_a_session() {
	let mut settings = Settings::default();
	settings.select_preset("big").unwrap();
	assert_eq!(settings.selected_preset(), Some(1));
	assert_eq!(PresetStore::suggested_name(settings.coefficients), "0.494 - 0.171");

	let mut path = rounded_rectangle();
	path.set_selection(|_| true);
	let mut items = vec![SceneItem::Path(path)];
	let mut session = SmoothingSession::new(settings.profile.clone());
	let report = session.run(&mut items, settings.coefficients, settings.show_profile).unwrap();
	assert_eq!(report.visited_points, 8);

	let svg = export::render_svg(&items, &report.profile_paths().cloned().collect::<Vec<_>>());
	assert_eq!(svg.matches("<path").count(), 1 + report.profile_paths().count());
}
