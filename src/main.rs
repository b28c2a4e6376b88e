//! Client entrypoint for the CSR build.

// Bin target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use kgraph_viewer::{App, ViewerConfig, guard_session, init_logging};
use leptos::prelude::*;

fn main() {
	init_logging();

	let config = ViewerConfig::load();
	let Some(session) = guard_session(&config) else {
		return;
	};

	mount_to_body(move || {
		view! { <App session=session config=config /> }
	})
}
