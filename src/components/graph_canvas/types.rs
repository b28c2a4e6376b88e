//! Graph data structures for input to the graph canvas.

use serde::Deserialize;

/// A node in the graph.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GraphNode {
	/// Unique identifier for this node. Also drawn as the node's label.
	pub id: String,
}

/// A directed edge between two nodes.
///
/// Duplicates and self-references are allowed.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GraphEdge {
	/// Source node ID.
	pub source: String,
	/// Target node ID.
	pub target: String,
	/// Relation name, when the producer recorded one. Not drawn.
	#[serde(default)]
	pub label: Option<String>,
}

/// Complete graph data: nodes and edges.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GraphData {
	/// Nodes in draw order.
	pub nodes: Vec<GraphNode>,
	/// Edges; networkx exports call these `links`.
	#[serde(alias = "links")]
	pub edges: Vec<GraphEdge>,
}

impl GraphEdge {
	/// Unlabelled edge.
	pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
			label: None,
		}
	}
}

impl GraphNode {
	/// Node with the given id.
	pub fn new(id: impl Into<String>) -> Self {
		Self { id: id.into() }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_accepts_networkx_links_key() {
		let data: GraphData = serde_json::from_str(
			r#"{"nodes":[{"id":"a"},{"id":"b"}],"links":[{"source":"a","target":"b","label":"uses"}]}"#,
		)
		.unwrap();

		assert_eq!(data.nodes.len(), 2);
		assert_eq!(data.edges.len(), 1);
		assert_eq!(data.edges[0].label.as_deref(), Some("uses"));
	}

	#[test]
	fn test_edge_label_is_optional() {
		let edge: GraphEdge = serde_json::from_str(r#"{"source":"a","target":"a"}"#).unwrap();
		assert_eq!(edge, GraphEdge::new("a", "a"));
	}
}
