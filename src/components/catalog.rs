//! Saved-graph selector.

use leptos::prelude::*;

use crate::model::CatalogEntry;

/// Value of the placeholder option; selecting it is a no-op.
pub const PLACEHOLDER_VALUE: &str = "";

/// `(value, text)` pairs for the selector, placeholder first, entries in
/// server order.
pub fn catalog_options(entries: &[CatalogEntry]) -> Vec<(String, String)> {
	std::iter::once((PLACEHOLDER_VALUE.to_string(), "-- Select Graph --".to_string()))
		.chain(
			entries
				.iter()
				.map(|entry| (entry.id.to_string(), entry.label())),
		)
		.collect()
}

/// "Load saved graphs" button plus the graph dropdown.
///
/// `on_load` fires on the button, `on_select` with the raw option value on
/// every change, including a change back to the placeholder.
#[component]
pub fn CatalogSelector(
	#[prop(into)] entries: Signal<Vec<CatalogEntry>>,
	on_load: impl Fn() + 'static,
	on_select: impl Fn(String) + 'static,
) -> impl IntoView {
	view! {
		<div class="catalog">
			<button class="catalog-load" on:click=move |_| on_load()>
				"Load saved graphs"
			</button>
			<select class="catalog-select" on:change=move |ev| on_select(event_target_value(&ev))>
				{move || {
					catalog_options(&entries.get())
						.into_iter()
						.map(|(value, text)| view! { <option value=value>{text}</option> })
						.collect_view()
				}}
			</select>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn entries(json: &str) -> Vec<CatalogEntry> {
		serde_json::from_str(json).unwrap()
	}

	#[test]
	fn test_single_entry_option() {
		let options = catalog_options(&entries(r#"[{"id":1,"topic":"Physics","source":"WikiA"}]"#));
		assert_eq!(options.len(), 2);
		assert_eq!(options[0].0, PLACEHOLDER_VALUE);
		assert_eq!(options[1], ("1".to_string(), "Physics (WikiA)".to_string()));
	}

	#[test]
	fn test_server_order_is_kept() {
		let options = catalog_options(&entries(
			r#"[{"id":9,"topic":"Zoology","source":"B"},{"id":2,"topic":"Art","source":"A"}]"#,
		));
		let values: Vec<&str> = options.iter().map(|(v, _)| v.as_str()).collect();
		assert_eq!(values, vec!["", "9", "2"]);
	}

	#[test]
	fn test_empty_catalog_has_only_placeholder() {
		assert_eq!(catalog_options(&[]).len(), 1);
	}
}
