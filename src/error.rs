//! Error types for the viewer.
//!
//! None of these are fatal: every failure degrades to "previous view retained"
//! plus a log line or a one-shot notice.

use thiserror::Error;

use crate::model::GraphId;

/// Transport-level cause of a failed request.
#[derive(Debug, Error)]
pub enum RequestError {
	/// The request never produced a response (offline, CORS, aborted).
	#[error("network error: {0}")]
	Network(String),
	/// The server answered with a status the caller does not accept.
	#[error("unexpected status {0}")]
	Status(u16),
	/// The response body was not the expected JSON shape.
	#[error("malformed response body: {0}")]
	Decode(#[from] serde_json::Error),
}

/// Everything that can go wrong between startup and a painted graph.
#[derive(Debug, Error)]
pub enum ViewerError {
	/// No session credential was found at startup.
	#[error("no session credential is stored")]
	AuthMissing,
	/// The graph list could not be read.
	#[error("failed to load graph catalog: {0}")]
	CatalogLoadFailed(#[source] RequestError),
	/// The server does not know the selected graph for this session.
	#[error("graph {0} not found")]
	GraphNotFound(GraphId),
	/// The selected graph could not be read.
	#[error("failed to fetch graph {id}: {source}")]
	GraphFetchFailed {
		/// Graph that was requested.
		id: GraphId,
		/// Underlying transport failure.
		#[source]
		source: RequestError,
	},
	/// An edge names a node id that has no computed position.
	#[error("edge {from} -> {to} references a node outside the graph")]
	DanglingEdgeReference {
		/// Edge source id.
		from: String,
		/// Edge target id.
		to: String,
	},
	/// The embedded configuration block is not valid JSON for [`crate::ViewerConfig`].
	#[error("invalid viewer configuration: {0}")]
	Config(#[source] serde_json::Error),
}
