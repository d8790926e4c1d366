//! Loading the input document.

use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::types::TreeNode;

/// Failure to obtain the input document. Nothing is drawn when this occurs.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum LoadError {
	/// The request itself failed.
	#[error("Failed to fetch {url}: {reason}")]
	Fetch {
		/// Requested URL.
		url: String,
		/// Browser-provided description.
		reason: String,
	},

	/// Non-2xx response.
	#[error("Fetching {url} returned HTTP {status}")]
	Status {
		/// Requested URL.
		url: String,
		/// HTTP status code.
		status: u16,
	},

	/// The response body could not be read as text.
	#[error("Failed to read body of {url}: {reason}")]
	Body {
		/// Requested URL.
		url: String,
		/// Browser-provided description.
		reason: String,
	},

	/// The body is not a valid hierarchy document.
	#[error("Invalid hierarchy document: {0}")]
	Parse(String),
}

impl From<serde_json::Error> for LoadError {
	fn from(err: serde_json::Error) -> Self {
		Self::Parse(err.to_string())
	}
}

/// Parses a JSON hierarchy document.
pub fn parse_document(text: &str) -> Result<TreeNode, LoadError> {
	Ok(serde_json::from_str(text)?)
}

fn describe(value: &wasm_bindgen::JsValue) -> String {
	value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Fetches and parses the document at `url`. Called once per session.
pub async fn load_document(url: &str) -> Result<TreeNode, LoadError> {
	let fetch_err = |reason: String| LoadError::Fetch {
		url: url.to_string(),
		reason,
	};
	let window = web_sys::window().ok_or_else(|| fetch_err("no window".into()))?;
	let response: Response = JsFuture::from(window.fetch_with_str(url))
		.await
		.map_err(|e| fetch_err(describe(&e)))?
		.dyn_into()
		.map_err(|e| fetch_err(describe(&e)))?;
	if !response.ok() {
		return Err(LoadError::Status {
			url: url.to_string(),
			status: response.status(),
		});
	}

	let body_err = |e: wasm_bindgen::JsValue| LoadError::Body {
		url: url.to_string(),
		reason: describe(&e),
	};
	let text: js_sys::JsString = JsFuture::from(response.text().map_err(body_err)?)
		.await
		.map_err(body_err)?
		.dyn_into()
		.map_err(body_err)?;

	let document = parse_document(&String::from(text))?;
	log::info!("loaded hierarchy {} from {url}", document.name);
	Ok(document)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_nested_document_with_optional_fields() {
		let doc = parse_document(
			r#"{
				"name": "G",
				"children": [
					{ "name": "X", "imports_with_type": [{ "target": "G.Y", "type": "Depends On" }] },
					{ "name": "Y" },
					{ "name": "Z", "imports_with_type": [{ "target": "G.Y" }] }
				]
			}"#,
		)
		.unwrap();
		assert_eq!(doc.children.len(), 3);
		assert_eq!(
			doc.children[0].imports_with_type[0].relationship(),
			Some("Depends On")
		);
		assert!(doc.children[1].is_leaf());
		assert_eq!(doc.children[2].imports_with_type[0].relationship(), None);
	}

	#[test]
	fn null_type_is_treated_as_missing() {
		let doc = parse_document(
			r#"{ "name": "X", "imports_with_type": [{ "target": "Y", "type": null }] }"#,
		)
		.unwrap();
		assert_eq!(doc.imports_with_type[0].relationship(), None);
	}

	#[test]
	fn malformed_document_is_a_parse_error() {
		assert!(matches!(parse_document("{ \"children\": [] }"), Err(LoadError::Parse(_))));
		assert!(matches!(parse_document("not json"), Err(LoadError::Parse(_))));
	}
}
