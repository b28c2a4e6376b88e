//! Viewer state: the catalog and the three graph-dependent views.
//!
//! Network I/O happens outside this type. A selection is split into
//! [`Viewer::select`], which tags the request, and [`Viewer::complete`],
//! which applies its result. A successful result replaces the entity panel,
//! the cross-link panel and the canvas scene in one assignment, so the three
//! views always describe the same graph; any failure leaves all three as
//! they were.

use log::{debug, error, info, warn};

use crate::components::graph_canvas::{LayoutEngine, Scene, Surface, Theme, render};
use crate::components::side_panel::{PanelView, cross_link_rows, entity_rows};
use crate::config::ViewerConfig;
use crate::error::ViewerError;
use crate::model::{CatalogEntry, GraphId, GraphPayload};

/// Notice shown when the server does not know the selected graph.
pub const GRAPH_NOT_FOUND_NOTICE: &str = "Graph not found.";

/// What to do with a graph response that arrives after a newer selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StalePolicy {
	/// Ignore it; only the latest selection may update the views.
	Discard,
	/// Apply it anyway. The last response to arrive wins.
	LastArrivalWins,
}

impl StalePolicy {
	/// Policy selected by `discard_stale_responses`.
	pub fn from_config(config: &ViewerConfig) -> Self {
		if config.discard_stale_responses {
			Self::Discard
		} else {
			Self::LastArrivalWins
		}
	}
}

/// Entity panel, cross-link panel and canvas, always from one payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewSet {
	/// Entity panel rows.
	pub entities: PanelView,
	/// Cross-domain-link panel rows.
	pub cross_links: PanelView,
	/// `None` until the first graph is shown.
	pub scene: Option<Scene>,
}

/// An in-flight graph request.
#[derive(Debug)]
pub struct Selection {
	/// Graph being fetched.
	pub id: GraphId,
	generation: u64,
}

/// An in-flight catalog request.
#[derive(Debug)]
pub struct CatalogLoad {
	generation: u64,
}

/// How a graph response was applied.
#[derive(Debug, PartialEq, Eq)]
pub enum SelectionOutcome {
	/// All three views now show the new graph.
	Rendered,
	/// The server reported the graph missing. Show [`GRAPH_NOT_FOUND_NOTICE`].
	NotFound,
	/// The request failed; the error was logged.
	Failed,
	/// A newer selection was made while this one was in flight.
	Discarded,
}

/// Catalog, views and selection bookkeeping for one page.
pub struct Viewer<L> {
	catalog: Vec<CatalogEntry>,
	catalog_requests: u64,
	catalog_applied: u64,
	views: ViewSet,
	generation: u64,
	stale_policy: StalePolicy,
	layout: L,
	theme: Theme,
}

impl<L: LayoutEngine> Viewer<L> {
	/// Empty catalog, empty views.
	pub fn new(layout: L, theme: Theme, stale_policy: StalePolicy) -> Self {
		Self {
			catalog: Vec::new(),
			catalog_requests: 0,
			catalog_applied: 0,
			views: ViewSet::default(),
			generation: 0,
			stale_policy,
			layout,
			theme,
		}
	}

	/// Entries of the most recent successful catalog load.
	pub fn catalog(&self) -> &[CatalogEntry] {
		&self.catalog
	}

	/// What the three graph views currently show.
	pub fn views(&self) -> &ViewSet {
		&self.views
	}

	/// Tags a catalog request so overlapping loads can be ordered.
	pub fn begin_catalog_load(&mut self) -> CatalogLoad {
		self.catalog_requests += 1;
		CatalogLoad {
			generation: self.catalog_requests,
		}
	}

	/// Replaces the catalog on success; logs and keeps it on failure.
	/// A success is dropped when a later-issued load has already been
	/// applied. Returns whether the catalog changed.
	pub fn apply_catalog(
		&mut self,
		load: CatalogLoad,
		result: Result<Vec<CatalogEntry>, ViewerError>,
	) -> bool {
		match result {
			Ok(_) if load.generation < self.catalog_applied => {
				debug!(
					"viewer: dropping catalog load {} (load {} already applied)",
					load.generation, self.catalog_applied
				);
				false
			}
			Ok(entries) => {
				self.catalog_applied = load.generation;
				info!("viewer: catalog replaced with {} entries", entries.len());
				self.catalog = entries;
				true
			}
			Err(e) => {
				error!("viewer: {e}");
				false
			}
		}
	}

	/// Starts a selection from a raw selector value. Blank values select
	/// nothing and return `None`.
	pub fn select(&mut self, raw: &str) -> Option<Selection> {
		let id = GraphId::parse(raw)?;
		self.generation += 1;
		debug!("viewer: selecting graph {id} (generation {})", self.generation);
		Some(Selection {
			id,
			generation: self.generation,
		})
	}

	/// Applies the result of a selection's fetch. `surface` is the canvas
	/// size at the time of rendering.
	pub fn complete(
		&mut self,
		selection: Selection,
		result: Result<GraphPayload, ViewerError>,
		surface: Surface,
	) -> SelectionOutcome {
		if self.stale_policy == StalePolicy::Discard && selection.generation != self.generation {
			debug!(
				"viewer: discarding response for graph {} (generation {}, latest {})",
				selection.id, selection.generation, self.generation
			);
			return SelectionOutcome::Discarded;
		}

		match result {
			Ok(payload) => {
				self.show(&payload, surface);
				SelectionOutcome::Rendered
			}
			Err(e @ ViewerError::GraphNotFound(_)) => {
				warn!("viewer: {e}");
				SelectionOutcome::NotFound
			}
			Err(e) => {
				error!("viewer: {e}");
				SelectionOutcome::Failed
			}
		}
	}

	fn show(&mut self, payload: &GraphPayload, surface: Surface) {
		let scene = render(payload, surface, &mut self.layout, &self.theme);
		if scene.skipped_edges > 0 {
			warn!(
				"viewer: {} edges reference unknown nodes and were not drawn",
				scene.skipped_edges
			);
		}
		self.views = ViewSet {
			entities: entity_rows(&payload.entities),
			cross_links: cross_link_rows(&payload.cross_domain_links),
			scene: Some(scene),
		};
	}
}
