//! Leptos component wrapping the graph canvas.
//!
//! The canvas has a fixed pixel size. Whenever the scene signal changes the
//! whole surface is repainted from the new scene; there is no animation loop.

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::render;
use super::scene::Scene;
use super::theme::Theme;

/// Renders the current scene on a fixed-size canvas element.
///
/// The parent owns `canvas_ref` so it can read the surface size when it
/// builds the next scene.
#[component]
pub fn GraphCanvas(
	canvas_ref: NodeRef<leptos::html::Canvas>,
	#[prop(into)] scene: Signal<Option<Scene>>,
	width: u32,
	height: u32,
	#[prop(optional)] theme: Theme,
) -> impl IntoView {
	Effect::new(move |_| {
		let Some(scene) = scene.get() else {
			return;
		};
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		match context_2d(&canvas) {
			Some(ctx) => render::paint(&scene, &ctx, &theme),
			None => warn!("graph canvas: 2d context unavailable, skipping paint"),
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="graph-canvas"
			width=width.to_string()
			height=height.to_string()
			style="display: block;"
		/>
	}
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|ctx| ctx.dyn_into().ok())
}
