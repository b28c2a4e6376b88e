//! Thin adapters from viewer decisions to browser side effects.

use leptos::prelude::*;
use log::{error, warn};
use web_sys::HtmlCanvasElement;

use crate::components::graph_canvas::Surface;
use crate::session::Redirect;

/// Navigates the whole page away.
pub fn navigate(redirect: &Redirect) {
	let Some(window) = web_sys::window() else {
		error!("browser: no window, cannot navigate to {}", redirect.0);
		return;
	};
	if let Err(e) = window.location().set_href(&redirect.0) {
		error!("browser: navigation to {} failed: {e:?}", redirect.0);
	}
}

/// Shows a one-shot blocking notice.
pub fn notify(message: &str) {
	match web_sys::window() {
		Some(window) => {
			if window.alert_with_message(message).is_err() {
				warn!("browser: alert suppressed: {message}");
			}
		}
		None => warn!("browser: no window for notice: {message}"),
	}
}

/// Current pixel size of the canvas, or `fallback` when it is not mounted.
pub fn canvas_surface(canvas_ref: NodeRef<leptos::html::Canvas>, fallback: Surface) -> Surface {
	match canvas_ref.get_untracked() {
		Some(canvas) => {
			let canvas: HtmlCanvasElement = canvas.into();
			Surface::new(canvas.width() as f64, canvas.height() as f64)
		}
		None => fallback,
	}
}
