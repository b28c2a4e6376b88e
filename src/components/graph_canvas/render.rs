//! Canvas rendering for the graph.
//!
//! Replays a [`Scene`] onto a 2D context. All geometry decisions were made
//! when the scene was built; this only maps draw ops to canvas calls.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::scene::{DrawOp, Scene};
use super::theme::Theme;

/// Paints the complete scene to the canvas.
pub fn paint(scene: &Scene, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	for op in &scene.ops {
		match op {
			DrawOp::Clear { width, height } => ctx.clear_rect(0.0, 0.0, *width, *height),
			DrawOp::Line { from, to } => {
				ctx.begin_path();
				ctx.move_to(from.x, from.y);
				ctx.line_to(to.x, to.y);
				ctx.set_stroke_style_str(&theme.edge.color.to_css());
				ctx.set_line_width(theme.edge.width);
				ctx.stroke();
			}
			DrawOp::Marker { center, radius } => {
				ctx.begin_path();
				let _ = ctx.arc(center.x, center.y, *radius, 0.0, 2.0 * PI);
				ctx.set_fill_style_str(&theme.node.color.to_css());
				ctx.fill();
			}
			DrawOp::Label { text, at, max_width } => {
				ctx.set_fill_style_str(&theme.label.color.to_css());
				ctx.set_font(&theme.label.font);
				let _ = ctx.fill_text_with_max_width(text, at.x, at.y, *max_width);
			}
		}
	}
}
