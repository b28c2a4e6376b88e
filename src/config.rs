//! Viewer configuration.
//!
//! Read from an optional `<script id="viewer-config" type="application/json">`
//! element in the host page. Every field has a default, so the element and
//! each of its keys may be omitted.

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

use crate::error::ViewerError;

/// DOM id of the configuration script element.
pub const CONFIG_ELEMENT_ID: &str = "viewer-config";

/// Runtime settings for the viewer.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
	/// Prefix for API paths. Empty means same origin.
	pub api_base: String,
	/// Storage key of the session credential.
	pub token_key: String,
	/// Where unauthenticated users and logouts are sent.
	pub login_path: String,
	/// Canvas width in pixels.
	pub canvas_width: u32,
	/// Canvas height in pixels.
	pub canvas_height: u32,
	/// Drop graph responses that belong to an earlier selection.
	/// `false` keeps last-arrival-wins.
	pub discard_stale_responses: bool,
}

impl Default for ViewerConfig {
	fn default() -> Self {
		Self {
			api_base: String::new(),
			token_key: "token".to_string(),
			login_path: "login.html".to_string(),
			canvas_width: 900,
			canvas_height: 600,
			discard_stale_responses: true,
		}
	}
}

impl ViewerConfig {
	/// Parses the configuration block. Missing keys take their defaults.
	pub fn from_json(text: &str) -> Result<Self, ViewerError> {
		serde_json::from_str(text).map_err(ViewerError::Config)
	}

	/// Reads the configuration element, falling back to defaults.
	pub fn load() -> Self {
		let Some(text) = config_text() else {
			return Self::default();
		};
		match Self::from_json(&text) {
			Ok(config) => {
				info!("config: loaded from #{CONFIG_ELEMENT_ID}");
				config
			}
			Err(e) => {
				warn!("config: {e}, using defaults");
				Self::default()
			}
		}
	}

	/// Absolute or origin-relative URL for an API path.
	pub fn api_url(&self, path: &str) -> String {
		format!("{}{}", self.api_base.trim_end_matches('/'), path)
	}
}

fn config_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_partial_json_keeps_defaults() {
		let config = ViewerConfig::from_json(r#"{"api_base":"http://127.0.0.1:8000/"}"#).unwrap();
		assert_eq!(config.api_base, "http://127.0.0.1:8000/");
		assert_eq!(config.token_key, "token");
		assert_eq!(config.canvas_width, 900);
		assert!(config.discard_stale_responses);
	}

	#[test]
	fn test_malformed_json_is_config_error() {
		assert!(matches!(
			ViewerConfig::from_json("{not json"),
			Err(ViewerError::Config(_))
		));
	}

	#[test]
	fn test_api_url_joins_without_double_slash() {
		let mut config = ViewerConfig::default();
		assert_eq!(config.api_url("/my-graphs"), "/my-graphs");
		config.api_base = "http://127.0.0.1:8000/".into();
		assert_eq!(config.api_url("/graph/4"), "http://127.0.0.1:8000/graph/4");
	}
}
