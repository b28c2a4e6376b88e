//! UI components: the catalog selector, the side panels and the graph canvas.

pub mod catalog;
pub mod graph_canvas;
pub mod side_panel;
