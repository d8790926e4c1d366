//! Drawable link list.

use super::bilink::Bilinks;

/// A drawable relationship between two leaves (by leaf position).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
	/// Source leaf position.
	pub source: usize,
	/// Target leaf position.
	pub target: usize,
	/// Relationship tag.
	pub kind: String,
}

/// Flattens every leaf's resolved outgoing edges into draw order:
/// leaves in document order, then each leaf's own import order.
pub fn project(bilinks: &Bilinks) -> Vec<Link> {
	(0..bilinks.leaf_count())
		.flat_map(|leaf| bilinks.outgoing(leaf))
		.filter_map(|edge| {
			edge.target.map(|target| Link {
				source: edge.source,
				target,
				kind: edge.kind.clone(),
			})
		})
		.collect()
}
