//! Render pipeline: graph payload in, display list out.
//!
//! [`render`] is pure apart from the layout strategy it is handed, so the
//! geometry can be checked without a canvas. Ordering inside the display
//! list is the z-order:
//! 1. Clear the whole surface
//! 2. Edge lines
//! 3. Node markers, each followed by its label

use log::debug;

use super::layout::{LayoutBounds, LayoutEngine, Point, Surface};
use super::theme::Theme;
use crate::error::ViewerError;
use crate::model::GraphPayload;

/// One drawing command.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
	/// Wipe the full surface.
	Clear {
		/// Surface width.
		width: f64,
		/// Surface height.
		height: f64,
	},
	/// Straight edge segment.
	Line {
		/// Source node centre.
		from: Point,
		/// Target node centre.
		to: Point,
	},
	/// Filled circular node marker.
	Marker {
		/// Node centre.
		center: Point,
		/// Marker radius.
		radius: f64,
	},
	/// Node id text, anchored at its left baseline.
	Label {
		/// Node id.
		text: String,
		/// Left end of the baseline.
		at: Point,
		/// Widest the text may be drawn; longer text is condensed to fit.
		max_width: f64,
	},
}

/// Everything needed to paint one graph, in paint order.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
	/// Surface the scene was laid out for.
	pub surface: Surface,
	/// Draw commands in paint order.
	pub ops: Vec<DrawOp>,
	/// Edges left out because an endpoint has no position.
	pub skipped_edges: usize,
}

impl Scene {
	/// Edge segments in paint order.
	pub fn lines(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
		self.ops.iter().filter_map(|op| match op {
			DrawOp::Line { from, to } => Some((*from, *to)),
			_ => None,
		})
	}

	/// Marker centres in paint order.
	pub fn markers(&self) -> impl Iterator<Item = Point> + '_ {
		self.ops.iter().filter_map(|op| match op {
			DrawOp::Marker { center, .. } => Some(*center),
			_ => None,
		})
	}

	/// Label texts in paint order.
	pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
		self.ops.iter().filter_map(|op| match op {
			DrawOp::Label { text, .. } => Some(text.as_str()),
			_ => None,
		})
	}
}

/// Lays out `payload.graph` on `surface` and produces its display list.
///
/// Edges whose endpoints are not both laid out are skipped; the rest of the
/// graph is still drawn.
pub fn render(
	payload: &GraphPayload,
	surface: Surface,
	layout: &mut impl LayoutEngine,
	theme: &Theme,
) -> Scene {
	let graph = &payload.graph;
	let bounds = LayoutBounds::new(surface, theme.layout_inset());
	let positions = layout.compute_layout(&graph.nodes, &bounds);

	let mut ops = Vec::with_capacity(1 + graph.edges.len() + 2 * graph.nodes.len());
	ops.push(DrawOp::Clear {
		width: surface.width,
		height: surface.height,
	});

	let mut skipped_edges = 0;
	for edge in &graph.edges {
		match (positions.get(&edge.source), positions.get(&edge.target)) {
			(Some(&from), Some(&to)) => ops.push(DrawOp::Line { from, to }),
			_ => {
				skipped_edges += 1;
				debug!(
					"{}",
					ViewerError::DanglingEdgeReference {
						from: edge.source.clone(),
						to: edge.target.clone(),
					}
				);
			}
		}
	}

	for node in &graph.nodes {
		let Some(&center) = positions.get(&node.id) else {
			continue;
		};
		ops.push(DrawOp::Marker {
			center,
			radius: theme.node.radius,
		});
		ops.push(DrawOp::Label {
			text: node.id.clone(),
			at: Point::new(center.x + theme.label.offset, center.y),
			max_width: theme.label.reserve,
		});
	}

	Scene {
		surface,
		ops,
		skipped_edges,
	}
}
