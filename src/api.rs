//! HTTP client for the graph service.
//!
//! [`GraphApi`] owns the session and attaches it to every request. Status
//! and body handling live here; the raw round trip is behind [`Transport`]
//! so it can be swapped for an in-memory fake on the host.

use gloo_net::http::Request;
use log::info;
use serde::de::DeserializeOwned;

use crate::config::ViewerConfig;
use crate::error::{RequestError, ViewerError};
use crate::model::{CatalogEntry, GraphId, GraphPayload};
use crate::session::Session;

/// Status code and body text of a completed request.
#[derive(Clone, Debug, PartialEq)]
pub struct RawResponse {
	/// HTTP status code.
	pub status: u16,
	/// Body text, possibly empty.
	pub body: String,
}

impl RawResponse {
	/// `2xx`.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	fn json<T: DeserializeOwned>(&self) -> Result<T, RequestError> {
		Ok(serde_json::from_str(&self.body)?)
	}
}

/// One authenticated GET round trip.
#[allow(async_fn_in_trait)]
pub trait Transport {
	/// Sends `GET url` with the given `Authorization` header value.
	async fn get(&self, url: &str, authorization: &str) -> Result<RawResponse, RequestError>;
}

/// Browser `fetch` via `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

impl Transport for GlooTransport {
	async fn get(&self, url: &str, authorization: &str) -> Result<RawResponse, RequestError> {
		let response = Request::get(url)
			.header("Authorization", authorization)
			.send()
			.await
			.map_err(|e| RequestError::Network(e.to_string()))?;
		let status = response.status();
		let body = response
			.text()
			.await
			.map_err(|e| RequestError::Network(e.to_string()))?;
		Ok(RawResponse { status, body })
	}
}

/// Catalog loader and graph fetcher for one session.
#[derive(Clone, Debug)]
pub struct GraphApi<T = GlooTransport> {
	transport: T,
	session: Session,
	config: ViewerConfig,
}

impl<T: Transport> GraphApi<T> {
	/// Client sending `session` on every request.
	pub fn new(transport: T, session: Session, config: ViewerConfig) -> Self {
		Self {
			transport,
			session,
			config,
		}
	}

	/// `GET /my-graphs`. Only `200` counts as success.
	pub async fn load_catalog(&self) -> Result<Vec<CatalogEntry>, ViewerError> {
		let entries = self
			.catalog_entries()
			.await
			.map_err(ViewerError::CatalogLoadFailed)?;

		info!("api: catalog has {} graphs", entries.len());
		Ok(entries)
	}

	async fn catalog_entries(&self) -> Result<Vec<CatalogEntry>, RequestError> {
		let response = self.get("/my-graphs").await?;
		if response.status != 200 {
			return Err(RequestError::Status(response.status));
		}
		response.json()
	}

	/// `GET /graph/{id}`. Any non-success status means "not found".
	pub async fn fetch_graph(&self, id: &GraphId) -> Result<GraphPayload, ViewerError> {
		let fetch_failed = |source| ViewerError::GraphFetchFailed {
			id: id.clone(),
			source,
		};

		let response = self
			.get(&format!("/graph/{}", urlencoding::encode(id.as_str())))
			.await
			.map_err(fetch_failed)?;
		if !response.is_success() {
			return Err(ViewerError::GraphNotFound(id.clone()));
		}
		let payload: GraphPayload = response.json().map_err(fetch_failed)?;

		info!(
			"api: graph {id} has {} nodes, {} edges, {} entities, {} cross links",
			payload.graph.nodes.len(),
			payload.graph.edges.len(),
			payload.entities.len(),
			payload.cross_domain_links.len()
		);
		Ok(payload)
	}

	async fn get(&self, path: &str) -> Result<RawResponse, RequestError> {
		self.transport
			.get(&self.config.api_url(path), &self.session.authorization())
			.await
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use super::*;

	/// Replays canned responses and records what was asked for.
	#[derive(Default)]
	struct FakeTransport {
		reply: RefCell<Option<Result<RawResponse, RequestError>>>,
		calls: RefCell<Vec<(String, String)>>,
	}

	impl FakeTransport {
		fn replying(status: u16, body: &str) -> Self {
			let fake = Self::default();
			*fake.reply.borrow_mut() = Some(Ok(RawResponse {
				status,
				body: body.to_string(),
			}));
			fake
		}

		fn failing() -> Self {
			let fake = Self::default();
			*fake.reply.borrow_mut() = Some(Err(RequestError::Network("offline".into())));
			fake
		}
	}

	impl Transport for &FakeTransport {
		async fn get(&self, url: &str, authorization: &str) -> Result<RawResponse, RequestError> {
			self.calls
				.borrow_mut()
				.push((url.to_string(), authorization.to_string()));
			self.reply
				.borrow_mut()
				.take()
				.unwrap_or(Err(RequestError::Network("no reply queued".into())))
		}
	}

	fn api(transport: &FakeTransport) -> GraphApi<&FakeTransport> {
		GraphApi::new(
			transport,
			Session::new("tok").unwrap(),
			ViewerConfig::default(),
		)
	}

	fn id(raw: &str) -> GraphId {
		GraphId::parse(raw).unwrap()
	}

	#[test]
	fn test_catalog_request_carries_bearer() {
		let fake = FakeTransport::replying(200, "[]");
		pollster::block_on(api(&fake).load_catalog()).unwrap();
		assert_eq!(
			fake.calls.borrow().as_slice(),
			[("/my-graphs".to_string(), "Bearer tok".to_string())]
		);
	}

	#[test]
	fn test_catalog_keeps_server_order() {
		let fake = FakeTransport::replying(
			200,
			r#"[{"id":5,"topic":"B","source":"x"},{"id":1,"topic":"Physics","source":"WikiA"}]"#,
		);
		let entries = pollster::block_on(api(&fake).load_catalog()).unwrap();
		let labels: Vec<String> = entries.iter().map(CatalogEntry::label).collect();
		assert_eq!(labels, vec!["B (x)", "Physics (WikiA)"]);
	}

	#[test]
	fn test_catalog_non_200_fails() {
		for status in [201, 401, 500] {
			let fake = FakeTransport::replying(status, "[]");
			let err = pollster::block_on(api(&fake).load_catalog()).unwrap_err();
			assert!(
				matches!(err, ViewerError::CatalogLoadFailed(RequestError::Status(s)) if s == status)
			);
		}
	}

	#[test]
	fn test_catalog_network_and_decode_failures() {
		let fake = FakeTransport::failing();
		let err = pollster::block_on(api(&fake).load_catalog()).unwrap_err();
		assert!(matches!(
			err,
			ViewerError::CatalogLoadFailed(RequestError::Network(_))
		));

		let fake = FakeTransport::replying(200, r#"{"detail":"nope"}"#);
		let err = pollster::block_on(api(&fake).load_catalog()).unwrap_err();
		assert!(matches!(
			err,
			ViewerError::CatalogLoadFailed(RequestError::Decode(_))
		));
	}

	#[test]
	fn test_fetch_graph_success() {
		let fake = FakeTransport::replying(
			200,
			r#"{"entities":["Newton","Gravity"],
			"cross_domain_links":[{"source":"Newton","target":"Calculus"}],
			"graph":{"nodes":[{"id":"Newton"},{"id":"Gravity"}],
			"edges":[{"source":"Newton","target":"Gravity"}]}}"#,
		);
		let payload = pollster::block_on(api(&fake).fetch_graph(&id("1"))).unwrap();

		assert_eq!(fake.calls.borrow()[0].0, "/graph/1");
		assert_eq!(payload.entities, vec!["Newton", "Gravity"]);
		assert_eq!(payload.cross_domain_links[0].target, "Calculus");
		assert_eq!(payload.graph.edges.len(), 1);
	}

	#[test]
	fn test_fetch_graph_404_is_not_found() {
		let fake = FakeTransport::replying(404, r#"{"detail":"Graph not found"}"#);
		let err = pollster::block_on(api(&fake).fetch_graph(&id("99"))).unwrap_err();
		assert!(matches!(err, ViewerError::GraphNotFound(ref g) if g.as_str() == "99"));
	}

	#[test]
	fn test_fetch_graph_transport_failures() {
		let fake = FakeTransport::failing();
		let err = pollster::block_on(api(&fake).fetch_graph(&id("2"))).unwrap_err();
		assert!(matches!(
			err,
			ViewerError::GraphFetchFailed {
				source: RequestError::Network(_),
				..
			}
		));

		let fake = FakeTransport::replying(200, "<html>");
		let err = pollster::block_on(api(&fake).fetch_graph(&id("2"))).unwrap_err();
		assert!(matches!(
			err,
			ViewerError::GraphFetchFailed {
				source: RequestError::Decode(_),
				..
			}
		));
	}

	#[test]
	fn test_fetch_graph_encodes_id_in_path() {
		let fake = FakeTransport::replying(404, "");
		let _ = pollster::block_on(api(&fake).fetch_graph(&id("a/b c?x=1")));
		assert_eq!(fake.calls.borrow()[0].0, "/graph/a%2Fb%20c%3Fx%3D1");
	}

	#[test]
	fn test_api_base_prefix() {
		let fake = FakeTransport::replying(200, "[]");
		let config = ViewerConfig {
			api_base: "http://127.0.0.1:8000".into(),
			..ViewerConfig::default()
		};
		let api = GraphApi::new(&fake, Session::new("t").unwrap(), config);
		pollster::block_on(api.load_catalog()).unwrap();
		assert_eq!(fake.calls.borrow()[0].0, "http://127.0.0.1:8000/my-graphs");
	}
}
