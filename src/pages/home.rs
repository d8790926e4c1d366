use leptos::prelude::*;

use crate::components::edge_bundle::{EdgeBundleCanvas, LoadError, load_document};

/// Input document, served next to the app bundle.
const DATA_URL: &str = "data/hierarchy.json";

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	// Loaded once; a failed load leaves the diagram unrendered.
	let document = LocalResource::new(|| async {
		load_document(DATA_URL).await.inspect_err(|err: &LoadError| {
			log::error!("{err}");
		})
	});

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-graph">
				{move || {
					document
						.get()
						.map(|loaded| {
							loaded
								.map(|tree| {
									view! { <EdgeBundleCanvas document=tree fullscreen=true /> }
								})
						})
				}}
				<div class="graph-overlay">
					<h1>"Hierarchical Edge Bundling"</h1>
					<p class="subtitle">
						"Click a name to lock its relationships. Click empty space to clear."
					</p>
				</div>
			</div>
		</ErrorBoundary>
	}
}
