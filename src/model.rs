//! Wire model shared by the API client, the viewer state and the views.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::components::graph_canvas::GraphData;

/// Identifier of one saved graph.
///
/// The backend emits integer ids; strings are accepted as well so the value
/// round-trips through `<option value>` attributes unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GraphId(String);

impl GraphId {
	/// Builds an id from a selector value. Blank values are "no selection".
	pub fn parse(raw: &str) -> Option<Self> {
		let trimmed = raw.trim();
		if trimmed.is_empty() {
			None
		} else {
			Some(Self(trimmed.to_string()))
		}
	}

	/// The id as sent to the server.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for GraphId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl<'de> Deserialize<'de> for GraphId {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum Repr {
			Int(i64),
			Text(String),
		}

		Ok(match Repr::deserialize(deserializer)? {
			Repr::Int(n) => Self(n.to_string()),
			Repr::Text(s) => Self(s),
		})
	}
}

/// One saved graph as listed by `GET /my-graphs`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CatalogEntry {
	/// Id passed to `GET /graph/{id}`.
	pub id: GraphId,
	/// Subject the graph was built for.
	pub topic: String,
	/// Where the text came from.
	pub source: String,
	/// Creation timestamp as the server formats it. Informational only.
	#[serde(default)]
	pub created_at: Option<String>,
}

impl CatalogEntry {
	/// Selector text: `topic (source)`.
	pub fn label(&self) -> String {
		format!("{} ({})", self.topic, self.source)
	}
}

/// A relationship between two entity names that crosses knowledge domains.
///
/// Lives outside the node/edge id space and is never checked against it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CrossLink {
	/// Entity the link starts from.
	#[serde(alias = "subject")]
	pub source: String,
	/// Entity the link points to.
	#[serde(alias = "object")]
	pub target: String,
	/// Relation name, if the producer recorded one. Not displayed.
	#[serde(default)]
	pub relation: Option<String>,
}

impl CrossLink {
	/// A link without a relation name.
	pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
			relation: None,
		}
	}
}

/// Everything returned for one saved graph by `GET /graph/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GraphPayload {
	/// Entity names in server order. Each may arrive as a bare string or as
	/// an extractor record `{"text": .., "label": ..}`; only the text is kept.
	#[serde(default, deserialize_with = "entity_texts")]
	pub entities: Vec<String>,
	/// Links shown in the cross-domain panel.
	#[serde(default)]
	pub cross_domain_links: Vec<CrossLink>,
	/// Nodes and edges for the canvas.
	pub graph: GraphData,
}

fn entity_texts<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum Entity {
		Text(String),
		Record { text: String },
	}

	Ok(Vec::<Entity>::deserialize(deserializer)?
		.into_iter()
		.map(|entity| match entity {
			Entity::Text(text) | Entity::Record { text } => text,
		})
		.collect())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_graph_id_from_number_and_string() {
		let ids: Vec<GraphId> = serde_json::from_str(r#"[7, "42"]"#).unwrap();
		assert_eq!(ids[0].as_str(), "7");
		assert_eq!(ids[1].to_string(), "42");
	}

	#[test]
	fn test_graph_id_parse_rejects_blank() {
		assert_eq!(GraphId::parse(""), None);
		assert_eq!(GraphId::parse("   "), None);
		assert_eq!(GraphId::parse(" 3 ").unwrap().as_str(), "3");
	}

	#[test]
	fn test_catalog_entry_label() {
		let entry: CatalogEntry =
			serde_json::from_str(r#"{"id":1,"topic":"Physics","source":"WikiA"}"#).unwrap();
		assert_eq!(entry.label(), "Physics (WikiA)");
		assert_eq!(entry.id.as_str(), "1");
		assert_eq!(entry.created_at, None);
	}

	#[test]
	fn test_catalog_entry_ignores_embedded_graph() {
		let entry: CatalogEntry = serde_json::from_str(
			r#"{"id":3,"topic":"Heart","source":"PubMed","created_at":"2024-01-01",
			"entities":["x"],"cross_links":[],"graph":{"nodes":[],"edges":[]}}"#,
		)
		.unwrap();
		assert_eq!(entry.created_at.as_deref(), Some("2024-01-01"));
	}

	#[test]
	fn test_cross_link_accepts_subject_object() {
		let link: CrossLink = serde_json::from_str(
			r#"{"subject":"Heart","relation":"pumps","object":"Blood","subject_domain":"Bio"}"#,
		)
		.unwrap();
		assert_eq!(link.source, "Heart");
		assert_eq!(link.target, "Blood");
		assert_eq!(link.relation.as_deref(), Some("pumps"));
	}

	#[test]
	fn test_payload_defaults_missing_lists() {
		let payload: GraphPayload =
			serde_json::from_str(r#"{"graph":{"nodes":[{"id":"a"}],"edges":[]}}"#).unwrap();
		assert!(payload.entities.is_empty());
		assert!(payload.cross_domain_links.is_empty());
		assert_eq!(payload.graph.nodes.len(), 1);
	}

	#[test]
	fn test_payload_accepts_extractor_entity_records() {
		let payload: GraphPayload = serde_json::from_str(
			r#"{"entities":[{"text":"Newton","label":"PERSON"},"Gravity",{"text":" Royal Society ","label":"ORG"}],
			"cross_domain_links":[],"graph":{"nodes":[{"id":"Newton"}],"edges":[]}}"#,
		)
		.unwrap();
		assert_eq!(payload.entities, vec!["Newton", "Gravity", " Royal Society "]);
	}

	#[test]
	fn test_payload_rejects_entity_without_text() {
		let result = serde_json::from_str::<GraphPayload>(
			r#"{"entities":[{"label":"PERSON"}],"graph":{"nodes":[],"edges":[]}}"#,
		);
		assert!(result.is_err());
	}
}
