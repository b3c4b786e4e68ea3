//! Conversion of paths and curvature profiles into [kurbo] geometry and SVG markup, for hosts that draw the result themselves.

use crate::path::{AnchorPoint, Path};
use crate::profile::ProfilePath;
use crate::scene::{SceneItem, walk_paths};

use glam::DVec2;
use kurbo::{BezPath, PathEl, Rect, Shape};

fn point_to_kurbo(point: DVec2) -> kurbo::Point {
	kurbo::Point::new(point.x, point.y)
}

/// Return a bezpath through the given points, using lines wherever both facing handles collapse onto their anchors.
fn points_to_bezpath(points: &[AnchorPoint], closed: bool) -> BezPath {
	let Some(first) = points.first() else {
		return BezPath::new();
	};

	let segment_to = |start: &AnchorPoint, end: &AnchorPoint| {
		if start.to_segment(end).is_straight() {
			PathEl::LineTo(point_to_kurbo(end.anchor))
		} else {
			PathEl::CurveTo(point_to_kurbo(start.right_handle), point_to_kurbo(end.left_handle), point_to_kurbo(end.anchor))
		}
	};

	let mut bez_path = vec![PathEl::MoveTo(point_to_kurbo(first.anchor))];
	bez_path.extend(points.windows(2).map(|pair| segment_to(&pair[0], &pair[1])));
	if closed {
		if let Some(last) = points.last().filter(|_| points.len() > 1) {
			bez_path.push(segment_to(last, first));
		}
		bez_path.push(PathEl::ClosePath);
	}
	BezPath::from_vec(bez_path)
}

impl Path {
	pub fn to_bezpath(&self) -> BezPath {
		points_to_bezpath(self.points(), self.closed)
	}
}

impl ProfilePath {
	pub fn to_bezpath(&self) -> BezPath {
		points_to_bezpath(&self.points, self.closed)
	}
}

/// Render every eligible path of `items`, stroked in black, with the given profile paths filled on top.
pub fn render_svg(items: &[SceneItem], profiles: &[ProfilePath]) -> String {
	let mut outlines = Vec::new();
	walk_paths(items, &mut |path| outlines.push((path.to_bezpath(), if path.stroked { path.stroke_width } else { 1. })));
	let fills = profiles.iter().map(|profile| (profile.to_bezpath(), profile)).collect::<Vec<_>>();

	let bounds = outlines
		.iter()
		.map(|(bez_path, _)| bez_path.bounding_box())
		.chain(fills.iter().map(|(bez_path, _)| bez_path.bounding_box()))
		.reduce(|a, b| a.union(b))
		.unwrap_or(Rect::ZERO);

	let mut svg = format!(
		r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
		bounds.x0,
		bounds.y0,
		bounds.width(),
		bounds.height()
	);
	svg.push('\n');
	for (bez_path, stroke_width) in &outlines {
		svg.push_str(&format!(r##"<path d="{}" fill="none" stroke="#000000" stroke-width="{stroke_width}" />"##, bez_path.to_svg()));
		svg.push('\n');
	}
	for (bez_path, profile) in &fills {
		svg.push_str(&format!(r##"<path d="{}" fill="#{}" opacity="{}" />"##, bez_path.to_svg(), profile.fill.to_rgb_hex(), profile.opacity));
		svg.push('\n');
	}
	svg.push_str("</svg>\n");
	svg
}
