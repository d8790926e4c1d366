//! Outgoing and incoming typed edges per leaf.

use std::collections::HashMap;

use super::hierarchy::Hierarchy;

/// A typed reference from one leaf to another, by leaf position.
///
/// `target` is `None` when the import named an identifier no leaf carries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
	/// Leaf that declared the import.
	pub source: usize,
	/// Resolved leaf, if any.
	pub target: Option<usize>,
	/// Relationship tag, never empty.
	pub kind: String,
}

/// Outgoing and incoming typed edges for every leaf of a [`Hierarchy`].
///
/// Built once from the immutable edge list; nothing here is mutated after
/// construction.
#[derive(Clone, Debug, Default)]
pub struct Bilinks {
	edges: Vec<Edge>,
	outgoing: Vec<Vec<usize>>,
	incoming: Vec<Vec<usize>>,
	duplicate_ids: Vec<String>,
}

impl Bilinks {
	/// Resolves every typed import of every leaf.
	///
	/// Untyped imports are dropped, unknown targets are kept unresolved and
	/// duplicate identifiers resolve to the last leaf carrying them.
	pub fn build(hierarchy: &Hierarchy) -> Self {
		let leaves = hierarchy.leaves();

		let mut lookup: HashMap<&str, usize> = HashMap::with_capacity(leaves.len());
		let mut duplicate_ids = Vec::new();
		for leaf in 0..leaves.len() {
			let id = hierarchy.leaf_id(leaf);
			if lookup.insert(id, leaf).is_some() {
				log::warn!("duplicate leaf identifier {id}, last occurrence wins");
				duplicate_ids.push(id.to_string());
			}
		}

		let mut edges = Vec::new();
		let mut suppressed = 0usize;
		for leaf in 0..leaves.len() {
			for import in &hierarchy.leaf(leaf).imports {
				let Some(kind) = import.relationship() else {
					suppressed += 1;
					continue;
				};
				let target = lookup.get(import.target.as_str()).copied();
				if target.is_none() {
					log::debug!(
						"{} references unknown leaf {}",
						hierarchy.leaf_id(leaf),
						import.target
					);
				}
				edges.push(Edge {
					source: leaf,
					target,
					kind: kind.to_string(),
				});
			}
		}

		let mut outgoing = vec![Vec::new(); leaves.len()];
		let mut incoming = vec![Vec::new(); leaves.len()];
		for (i, edge) in edges.iter().enumerate() {
			outgoing[edge.source].push(i);
		}
		for (i, edge) in edges.iter().enumerate() {
			if let Some(target) = edge.target {
				incoming[target].push(i);
			}
		}

		log::debug!(
			"bilinks: {} leaves, {} edges, {} untyped imports suppressed",
			leaves.len(),
			edges.len(),
			suppressed
		);

		Self {
			edges,
			outgoing,
			incoming,
			duplicate_ids,
		}
	}

	/// Number of leaves the graph was built over.
	pub fn leaf_count(&self) -> usize {
		self.outgoing.len()
	}

	/// Typed edges leaving `leaf`, in import order.
	pub fn outgoing(&self, leaf: usize) -> impl Iterator<Item = &Edge> + '_ {
		self.outgoing[leaf].iter().map(|&i| &self.edges[i])
	}

	/// `(source leaf, type)` for every resolved edge arriving at `leaf`.
	pub fn incoming(&self, leaf: usize) -> impl Iterator<Item = (usize, &str)> + '_ {
		self.incoming[leaf]
			.iter()
			.map(|&i| (self.edges[i].source, self.edges[i].kind.as_str()))
	}

	/// Edges whose target did not resolve to any leaf.
	pub fn unresolved(&self) -> impl Iterator<Item = &Edge> + '_ {
		self.edges.iter().filter(|e| e.target.is_none())
	}

	/// Identifiers carried by more than one leaf.
	pub fn duplicate_ids(&self) -> &[String] {
		&self.duplicate_ids
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::edge_bundle::types::{Import, TreeNode};

	fn graph(root: TreeNode) -> (Hierarchy, Bilinks) {
		let h = Hierarchy::new(&root);
		let b = Bilinks::build(&h);
		(h, b)
	}

	#[test]
	fn outgoing_edge_shows_up_as_incoming() {
		let (_, b) = graph(TreeNode::group(
			"G",
			vec![
				TreeNode::leaf("X").with_import("G.Y", "Depends On"),
				TreeNode::leaf("Y").with_import("G.X", "Reviews"),
			],
		));
		let out: Vec<&Edge> = b.outgoing(0).collect();
		assert_eq!(
			out,
			vec![&Edge {
				source: 0,
				target: Some(1),
				kind: "Depends On".into()
			}]
		);
		assert_eq!(b.incoming(1).collect::<Vec<_>>(), vec![(0, "Depends On")]);
		assert_eq!(b.incoming(0).collect::<Vec<_>>(), vec![(1, "Reviews")]);
	}

	#[test]
	fn missing_or_empty_type_suppresses_edge() {
		let mut x = TreeNode::leaf("X").with_import("G.Y", "");
		x.imports_with_type.push(Import {
			target: "G.Y".into(),
			kind: None,
		});
		let (_, b) = graph(TreeNode::group("G", vec![x, TreeNode::leaf("Y")]));
		assert_eq!(b.outgoing(0).count(), 0);
		assert_eq!(b.unresolved().count(), 0);
		assert_eq!(b.incoming(1).count(), 0);
	}

	#[test]
	fn unresolved_target_is_kept_without_incoming() {
		let (_, b) = graph(TreeNode::group(
			"G",
			vec![
				TreeNode::leaf("X").with_import("G.Z", "Depends On"),
				TreeNode::leaf("Y"),
			],
		));
		assert_eq!(b.outgoing(0).count(), 1);
		assert_eq!(b.unresolved().count(), 1);
		assert_eq!(b.incoming(1).count(), 0);
	}

	#[test]
	fn imports_cannot_target_groups() {
		let (_, b) = graph(TreeNode::group(
			"G",
			vec![
				TreeNode::leaf("X").with_import("G.H", "Member Of"),
				TreeNode::group("H", vec![TreeNode::leaf("Y")]),
			],
		));
		assert_eq!(b.unresolved().count(), 1);
	}

	#[test]
	fn self_reference_is_its_own_incoming() {
		let (_, b) = graph(TreeNode::group(
			"G",
			vec![TreeNode::leaf("X").with_import("G.X", "Reviews")],
		));
		assert_eq!(b.incoming(0).collect::<Vec<_>>(), vec![(0, "Reviews")]);
	}

	#[test]
	fn duplicate_ids_resolve_to_the_last_leaf() {
		let (h, b) = graph(TreeNode::group(
			"G",
			vec![
				TreeNode::leaf("X").with_import("G.D", "Reviews"),
				TreeNode::leaf("D"),
				TreeNode::leaf("D"),
			],
		));
		assert_eq!(b.duplicate_ids(), &["G.D".to_string()]);
		assert_eq!(b.incoming(1).count(), 0);
		assert_eq!(b.incoming(2).collect::<Vec<_>>(), vec![(0, "Reviews")]);
		assert_eq!(h.leaf_id(1), h.leaf_id(2));
	}

	#[test]
	fn group_imports_are_ignored() {
		let mut group = TreeNode::group("H", vec![TreeNode::leaf("Y")]);
		group.imports_with_type.push(Import {
			target: "G.H.Y".into(),
			kind: Some("Depends On".into()),
		});
		let (_, b) = graph(TreeNode::group("G", vec![group]));
		assert_eq!(b.outgoing(0).count(), 0);
		assert_eq!(b.incoming(0).count(), 0);
		assert_eq!(b.leaf_count(), 1);
	}
}
