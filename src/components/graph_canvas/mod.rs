//! Node-link graph canvas.
//!
//! Turns a graph payload into on-screen geometry in two steps:
//! - [`scene::render`] lays nodes out through a [`LayoutEngine`] and builds
//!   a display list (pure, testable without a browser)
//! - [`GraphCanvas`] paints that display list onto an HTML canvas
//!
//! # Example
//!
//! ```ignore
//! use kgraph_viewer::components::graph_canvas::{render, RandomLayout, Surface, Theme};
//!
//! let scene = render(&payload, Surface::new(900.0, 600.0), &mut RandomLayout::new(), &Theme::default());
//! view! { <GraphCanvas canvas_ref=canvas_ref scene=Some(scene) width=900 height=600 /> }
//! ```

mod component;
pub mod layout;
mod render;
pub mod scene;
pub mod theme;
mod types;

pub use component::GraphCanvas;
pub use layout::{LayoutBounds, LayoutEngine, LayoutMap, Point, RandomLayout, Surface};
pub use scene::{DrawOp, Scene, render};
pub use theme::Theme;
pub use types::{GraphData, GraphEdge, GraphNode};
