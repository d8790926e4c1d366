//! Input document shape.

use serde::Deserialize;

/// One entity of the input document: a group when it has children, a leaf otherwise.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TreeNode {
	/// Unique among siblings only.
	pub name: String,
	/// Empty or absent for leaves.
	#[serde(default)]
	pub children: Vec<TreeNode>,
	/// Only read on leaves.
	#[serde(default)]
	pub imports_with_type: Vec<Import>,
}

/// A typed reference from a leaf to another leaf's dotted identifier.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Import {
	/// Dotted identifier of the referenced leaf.
	pub target: String,
	/// Relationship tag, e.g. `"Depends On"`.
	#[serde(rename = "type", default)]
	pub kind: Option<String>,
}

impl TreeNode {
	/// True when the node has no children.
	pub fn is_leaf(&self) -> bool {
		self.children.is_empty()
	}
}

#[cfg(test)]
impl TreeNode {
	pub(crate) fn leaf(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			..Self::default()
		}
	}

	pub(crate) fn group(name: impl Into<String>, children: Vec<TreeNode>) -> Self {
		Self {
			name: name.into(),
			children,
			imports_with_type: Vec::new(),
		}
	}

	pub(crate) fn with_import(mut self, target: impl Into<String>, kind: impl Into<String>) -> Self {
		self.imports_with_type.push(Import {
			target: target.into(),
			kind: Some(kind.into()),
		});
		self
	}
}

impl Import {
	/// The relationship tag, or `None` when it is missing or empty.
	pub fn relationship(&self) -> Option<&str> {
		self.kind.as_deref().filter(|kind| !kind.is_empty())
	}
}
