//! Visual theming for the graph canvas.
//!
//! Holds colors and the fixed marker/label geometry. The geometry also
//! decides how much of the surface the layout must keep clear.

use super::layout::Inset;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel
	pub r: u8,
	/// Green channel
	pub g: u8,
	/// Blue channel
	pub b: u8,
	/// Alpha, 0.0 to 1.0
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// CSS color string: `#rrggbb` when opaque, `rgba(..)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Node marker style.
#[derive(Clone, Debug)]
pub struct NodeStyle {
	/// Marker fill
	pub color: Color,
	/// Marker radius in pixels
	pub radius: f64,
}

/// Node label style.
#[derive(Clone, Debug)]
pub struct LabelStyle {
	/// Text fill
	pub color: Color,
	/// CSS font shorthand
	pub font: String,
	/// Horizontal distance from the node centre to the start of the text
	pub offset: f64,
	/// Space kept free right of the label start; also the widest a label is drawn
	pub reserve: f64,
}

/// Edge line style.
#[derive(Clone, Debug)]
pub struct EdgeStyle {
	/// Stroke color
	pub color: Color,
	/// Stroke width in pixels
	pub width: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Markers
	pub node: NodeStyle,
	/// Labels
	pub label: LabelStyle,
	/// Edges
	pub edge: EdgeStyle,
}

impl Theme {
	/// Orange markers, dark edges, black labels on a transparent surface.
	pub fn default_theme() -> Self {
		Self {
			node: NodeStyle {
				color: Color::rgb(255, 153, 0),
				radius: 12.0,
			},
			label: LabelStyle {
				color: Color::rgb(0, 0, 0),
				font: "10px sans-serif".to_string(),
				offset: 15.0,
				reserve: 100.0,
			},
			edge: EdgeStyle {
				color: Color::rgb(35, 47, 62),
				width: 1.0,
			},
		}
	}

	/// Margins that keep every marker and its label fully on the surface.
	pub fn layout_inset(&self) -> Inset {
		let radius = self.node.radius;
		Inset {
			left: radius,
			right: (self.label.offset + self.label.reserve).max(radius),
			top: radius,
			bottom: radius,
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::default_theme()
	}
}
