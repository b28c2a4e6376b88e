//! kgraph-viewer: browser dashboard for saved knowledge graphs.
//!
//! An authenticated user loads the list of graphs they own, picks one, and
//! sees it three ways at once: the extracted entities, the cross-domain
//! links, and a node-link diagram on a canvas. All three views are replaced
//! together from a single graph payload.

use std::cell::RefCell;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use getrandom as _;
use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};
use wasm_bindgen_futures::spawn_local;

pub mod api;
pub mod browser;
pub mod components;
pub mod config;
pub mod error;
pub mod model;
pub mod session;
pub mod viewer;

use crate::api::{GlooTransport, GraphApi};
use crate::components::catalog::CatalogSelector;
use crate::components::graph_canvas::{GraphCanvas, RandomLayout, Surface, Theme};
use crate::components::side_panel::SidePanel;
use crate::session::{BrowserStorage, GuardOutcome, SessionGuard};
use crate::viewer::{GRAPH_NOT_FOUND_NOTICE, SelectionOutcome, StalePolicy, ViewSet, Viewer};

pub use config::ViewerConfig;
pub use error::ViewerError;
pub use model::{CatalogEntry, CrossLink, GraphId, GraphPayload};
pub use session::Session;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("kgraph-viewer: logging initialized");
}

/// Runs the session guard against browser storage.
///
/// Without a stored credential this navigates to the login page and returns
/// `None`; the caller must not mount anything or issue requests.
pub fn guard_session(config: &ViewerConfig) -> Option<Session> {
	match SessionGuard::new(config).activate(&BrowserStorage) {
		GuardOutcome::Proceed(session) => Some(session),
		GuardOutcome::Redirect(redirect) => {
			browser::navigate(&redirect);
			None
		}
	}
}

/// Main application component.
/// Wires the catalog selector, the two side panels and the graph canvas to
/// one [`Viewer`].
#[component]
pub fn App(session: Session, config: ViewerConfig) -> impl IntoView {
	provide_meta_context();

	let theme = Theme::default();
	let api = GraphApi::new(GlooTransport, session, config.clone());
	let viewer = Rc::new(RefCell::new(Viewer::new(
		RandomLayout::new(),
		theme.clone(),
		StalePolicy::from_config(&config),
	)));
	let catalog = RwSignal::new(Vec::<CatalogEntry>::new());
	let views = RwSignal::new(ViewSet::default());
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let fallback_surface = Surface::new(config.canvas_width as f64, config.canvas_height as f64);

	let (api_load, viewer_load) = (api.clone(), viewer.clone());
	let on_load = move || {
		let load = viewer_load.borrow_mut().begin_catalog_load();
		let (api, viewer) = (api_load.clone(), viewer_load.clone());
		spawn_local(async move {
			let result = api.load_catalog().await;
			let mut viewer = viewer.borrow_mut();
			if viewer.apply_catalog(load, result) {
				catalog.set(viewer.catalog().to_vec());
			}
		});
	};

	let (api_select, viewer_select) = (api, viewer);
	let on_select = move |raw: String| {
		let Some(selection) = viewer_select.borrow_mut().select(&raw) else {
			return;
		};
		let (api, viewer) = (api_select.clone(), viewer_select.clone());
		spawn_local(async move {
			let result = api.fetch_graph(&selection.id).await;
			let surface = browser::canvas_surface(canvas_ref, fallback_surface);
			let outcome = viewer.borrow_mut().complete(selection, result, surface);
			match outcome {
				SelectionOutcome::Rendered => views.set(viewer.borrow().views().clone()),
				SelectionOutcome::NotFound => browser::notify(GRAPH_NOT_FOUND_NOTICE),
				SelectionOutcome::Failed | SelectionOutcome::Discarded => {}
			}
		});
	};

	let guard = SessionGuard::new(&config);
	let on_logout = move |_| browser::navigate(&guard.logout(&BrowserStorage));

	let entities = Signal::derive(move || views.with(|v| v.entities.clone()));
	let cross_links = Signal::derive(move || views.with(|v| v.cross_links.clone()));
	let scene = Signal::derive(move || views.with(|v| v.scene.clone()));

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />
		<Title text="Knowledge Graph Dashboard" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="dashboard">
			<header class="dashboard-header">
				<h1>"Saved Knowledge Graphs"</h1>
				<button class="logout" on:click=on_logout>
					"Log out"
				</button>
			</header>
			<CatalogSelector entries=catalog on_load=on_load on_select=on_select />
			<div class="dashboard-body">
				<aside class="dashboard-panels">
					<SidePanel title="Entities" panel=entities />
					<SidePanel title="Cross-domain links" panel=cross_links />
				</aside>
				<GraphCanvas
					canvas_ref=canvas_ref
					scene=scene
					theme=theme
					width=config.canvas_width
					height=config.canvas_height
				/>
			</div>
		</div>
	}
}
