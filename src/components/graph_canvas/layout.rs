//! Node placement for the graph canvas.
//!
//! Placement is a strategy behind [`LayoutEngine`] so the render pipeline can
//! run against a fixed layout in tests. The shipped strategy,
//! [`RandomLayout`], draws every coordinate independently and uniformly from
//! the inset rectangle of the surface: no overlap avoidance, no relaxation,
//! and a fresh placement on every call.

use std::collections::HashMap;

use rand::Rng;
use rand::rngs::ThreadRng;

use super::types::GraphNode;

/// A position on the drawing surface, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
	/// Pixels from the left edge.
	pub x: f64,
	/// Pixels from the top edge.
	pub y: f64,
}

impl Point {
	/// Point at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// Pixel size of the drawing surface, read when a graph is rendered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
	/// Width in pixels.
	pub width: f64,
	/// Height in pixels.
	pub height: f64,
}

impl Surface {
	/// Surface of the given size.
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}
}

/// Space kept clear along each edge of the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Inset {
	/// Left margin.
	pub left: f64,
	/// Right margin.
	pub right: f64,
	/// Top margin.
	pub top: f64,
	/// Bottom margin.
	pub bottom: f64,
}

/// The rectangle node centres may occupy.
///
/// An axis narrower than its combined margins collapses to the surface
/// midpoint on that axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutBounds {
	/// Smallest allowed x.
	pub min_x: f64,
	/// Largest allowed x.
	pub max_x: f64,
	/// Smallest allowed y.
	pub min_y: f64,
	/// Largest allowed y.
	pub max_y: f64,
}

impl LayoutBounds {
	/// Bounds of `surface` with `inset` kept clear.
	pub fn new(surface: Surface, inset: Inset) -> Self {
		let (min_x, max_x) = axis(surface.width, inset.left, inset.right);
		let (min_y, max_y) = axis(surface.height, inset.top, inset.bottom);
		Self {
			min_x,
			max_x,
			min_y,
			max_y,
		}
	}

	/// Whether `p` lies inside, edges included.
	pub fn contains(&self, p: Point) -> bool {
		(self.min_x..=self.max_x).contains(&p.x) && (self.min_y..=self.max_y).contains(&p.y)
	}
}

fn axis(length: f64, low_margin: f64, high_margin: f64) -> (f64, f64) {
	let (lo, hi) = (low_margin, length - high_margin);
	if lo <= hi {
		(lo, hi)
	} else {
		let mid = length.max(0.0) / 2.0;
		(mid, mid)
	}
}

/// Node id to centre position for one render pass.
pub type LayoutMap = HashMap<String, Point>;

/// Assigns a position to every node.
pub trait LayoutEngine {
	/// Places every node of `nodes` inside `bounds`. Duplicate ids share the
	/// last position assigned to them.
	fn compute_layout(&mut self, nodes: &[GraphNode], bounds: &LayoutBounds) -> LayoutMap;
}

/// Uniform-random placement inside the layout bounds.
pub struct RandomLayout<R = ThreadRng> {
	rng: R,
}

impl RandomLayout {
	/// Placement driven by the thread-local generator.
	pub fn new() -> Self {
		Self {
			rng: rand::thread_rng(),
		}
	}
}

impl Default for RandomLayout {
	fn default() -> Self {
		Self::new()
	}
}

impl<R: Rng> RandomLayout<R> {
	/// Uses the given generator, e.g. a seeded one.
	pub fn with_rng(rng: R) -> Self {
		Self { rng }
	}
}

impl<R: Rng> LayoutEngine for RandomLayout<R> {
	fn compute_layout(&mut self, nodes: &[GraphNode], bounds: &LayoutBounds) -> LayoutMap {
		nodes
			.iter()
			.map(|node| {
				let x = self.rng.gen_range(bounds.min_x..=bounds.max_x);
				let y = self.rng.gen_range(bounds.min_y..=bounds.max_y);
				(node.id.clone(), Point::new(x, y))
			})
			.collect()
	}
}
