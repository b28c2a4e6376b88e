//! Entity and cross-domain-link panels.
//!
//! Both panels are rebuilt from scratch for every selected graph; a new
//! [`PanelView`] replaces the old one wholesale.

use leptos::prelude::*;

use crate::model::CrossLink;

/// Rows of one side panel, top to bottom.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PanelView {
	/// Row texts.
	pub rows: Vec<String>,
}

/// One row per entity, verbatim.
pub fn entity_rows(entities: &[String]) -> PanelView {
	PanelView {
		rows: entities.to_vec(),
	}
}

/// One row per link, formatted `source → target`.
pub fn cross_link_rows(links: &[CrossLink]) -> PanelView {
	PanelView {
		rows: links
			.iter()
			.map(|link| format!("{} → {}", link.source, link.target))
			.collect(),
	}
}

/// Titled list of plain text rows. An empty view renders an empty list.
#[component]
pub fn SidePanel(title: &'static str, #[prop(into)] panel: Signal<PanelView>) -> impl IntoView {
	view! {
		<section class="side-panel">
			<h2>{title}</h2>
			<div class="side-panel-rows">
				{move || {
					panel.get()
						.rows
						.into_iter()
						.map(|row| view! { <div>{row}</div> })
						.collect_view()
				}}
			</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_entity_rows_verbatim() {
		let view = entity_rows(&["Newton".into(), "Gravity".into(), " <b>".into()]);
		assert_eq!(view.rows, vec!["Newton", "Gravity", " <b>"]);
	}

	#[test]
	fn test_cross_link_rows_format() {
		let view = cross_link_rows(&[CrossLink::new("Newton", "Calculus")]);
		assert_eq!(view.rows, vec!["Newton → Calculus"]);
	}

	#[test]
	fn test_rows_replace_not_accumulate() {
		let first = entity_rows(&["a".into(), "b".into()]);
		let second = entity_rows(&["c".into()]);
		assert_eq!(first.rows.len(), 2);
		assert_eq!(second.rows, vec!["c"]);
	}

	#[test]
	fn test_empty_inputs_give_empty_panels() {
		assert!(entity_rows(&[]).rows.is_empty());
		assert!(cross_link_rows(&[]).rows.is_empty());
	}
}
