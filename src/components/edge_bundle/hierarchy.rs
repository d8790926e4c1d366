//! Flattened, immutable view of the input tree.
//!
//! Every node's dotted identifier is computed once while flattening, so
//! lookups never walk the ancestor chain again.

use super::types::{Import, TreeNode};

/// Index of a node inside a [`Hierarchy`].
pub type NodeIdx = usize;

/// A node of the flattened tree.
#[derive(Clone, Debug)]
pub struct HierarchyNode {
	/// Name as given in the document.
	pub name: String,
	/// Dotted path from the root, e.g. `"flare.analytics.Graph"`.
	pub id: String,
	/// `None` only for the root.
	pub parent: Option<NodeIdx>,
	/// Children in document order.
	pub children: Vec<NodeIdx>,
	/// Root is depth 0.
	pub depth: usize,
	/// Typed references; always empty on groups.
	pub imports: Vec<Import>,
}

impl HierarchyNode {
	/// True when the node has no children.
	pub fn is_leaf(&self) -> bool {
		self.children.is_empty()
	}
}

/// Arena of nodes in pre-order, with the leaves listed in document order.
#[derive(Clone, Debug)]
pub struct Hierarchy {
	nodes: Vec<HierarchyNode>,
	leaves: Vec<NodeIdx>,
}

/// Dotted identifier of a node given its parent's identifier.
pub fn child_id(parent_id: Option<&str>, name: &str) -> String {
	match parent_id {
		Some(prefix) => format!("{prefix}.{name}"),
		None => name.to_string(),
	}
}

impl Hierarchy {
	/// Flattens `root` in pre-order.
	pub fn new(root: &TreeNode) -> Self {
		let mut hierarchy = Self {
			nodes: Vec::new(),
			leaves: Vec::new(),
		};
		hierarchy.push(root, None);
		hierarchy
	}

	fn push(&mut self, node: &TreeNode, parent: Option<NodeIdx>) -> NodeIdx {
		let idx = self.nodes.len();
		let (id, depth) = match parent {
			Some(p) => (
				child_id(Some(&self.nodes[p].id), &node.name),
				self.nodes[p].depth + 1,
			),
			None => (child_id(None, &node.name), 0),
		};
		let imports = if node.is_leaf() {
			node.imports_with_type.clone()
		} else {
			if !node.imports_with_type.is_empty() {
				log::debug!("ignoring imports on group node {id}");
			}
			Vec::new()
		};
		self.nodes.push(HierarchyNode {
			name: node.name.clone(),
			id,
			parent,
			children: Vec::with_capacity(node.children.len()),
			depth,
			imports,
		});

		if node.is_leaf() {
			self.leaves.push(idx);
		}
		for child in &node.children {
			let child_idx = self.push(child, Some(idx));
			self.nodes[idx].children.push(child_idx);
		}
		idx
	}

	/// Index of the root node.
	pub fn root(&self) -> NodeIdx {
		0
	}

	/// Node at `idx`.
	pub fn node(&self, idx: NodeIdx) -> &HierarchyNode {
		&self.nodes[idx]
	}

	/// All nodes in pre-order.
	pub fn nodes(&self) -> &[HierarchyNode] {
		&self.nodes
	}

	/// Leaf node indices in document order.
	pub fn leaves(&self) -> &[NodeIdx] {
		&self.leaves
	}

	/// Dotted identifier of the node at `idx`.
	pub fn id(&self, idx: NodeIdx) -> &str {
		&self.nodes[idx].id
	}

	/// Identifier of the leaf at position `leaf` of [`Hierarchy::leaves`].
	pub fn leaf_id(&self, leaf: usize) -> &str {
		self.id(self.leaves[leaf])
	}

	/// Node of the leaf at position `leaf`.
	pub fn leaf(&self, leaf: usize) -> &HierarchyNode {
		self.node(self.leaves[leaf])
	}

	/// `idx` followed by its parents up to the root.
	pub fn ancestors(&self, idx: NodeIdx) -> impl Iterator<Item = NodeIdx> + '_ {
		std::iter::successors(Some(idx), |&n| self.nodes[n].parent)
	}

	/// Deepest node that has both `a` and `b` below it (or is one of them).
	pub fn least_common_ancestor(&self, a: NodeIdx, b: NodeIdx) -> NodeIdx {
		let (mut a, mut b) = (a, b);
		while self.nodes[a].depth > self.nodes[b].depth {
			a = self.nodes[a].parent.unwrap_or(a);
		}
		while self.nodes[b].depth > self.nodes[a].depth {
			b = self.nodes[b].parent.unwrap_or(b);
		}
		while a != b {
			match (self.nodes[a].parent, self.nodes[b].parent) {
				(Some(pa), Some(pb)) => {
					a = pa;
					b = pb;
				}
				_ => break,
			}
		}
		a
	}

	/// Nodes from `start` up to the common ancestor and back down to `end`,
	/// both ends included.
	pub fn path(&self, start: NodeIdx, end: NodeIdx) -> Vec<NodeIdx> {
		let ancestor = self.least_common_ancestor(start, end);
		let mut up: Vec<NodeIdx> = self.ancestors(start).take_while(|&n| n != ancestor).collect();
		up.push(ancestor);
		let mut down: Vec<NodeIdx> = self.ancestors(end).take_while(|&n| n != ancestor).collect();
		down.reverse();
		up.extend(down);
		up
	}

	/// The root's children that are groups, in document order.
	pub fn groups(&self) -> impl Iterator<Item = NodeIdx> + '_ {
		self.nodes[self.root()]
			.children
			.iter()
			.copied()
			.filter(|&c| !self.nodes[c].is_leaf())
	}
}
