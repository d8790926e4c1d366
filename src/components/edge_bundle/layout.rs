//! Radial dendrogram layout: every leaf on one ring, evenly spread in
//! document order, groups pulled toward the centre by height.

use std::f64::consts::TAU;

use super::hierarchy::{Hierarchy, NodeIdx};

/// Position on the circle; angle 0 points up and grows clockwise.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Polar {
	/// Radians in `[0, 2π)`.
	pub angle: f64,
	/// Distance from the centre.
	pub radius: f64,
}

impl Polar {
	/// Canvas coordinates relative to the centre, y pointing down.
	pub fn to_cartesian(self) -> (f64, f64) {
		(
			self.radius * self.angle.sin(),
			-self.radius * self.angle.cos(),
		)
	}
}

/// Angular range covered by one top-level group.
#[derive(Clone, Debug, PartialEq)]
pub struct Band {
	/// Group name.
	pub label: String,
	/// Start angle.
	pub start: f64,
	/// End angle, never below `start`.
	pub end: f64,
}

impl Band {
	/// Angle halfway through the band.
	pub fn mid_angle(&self) -> f64 {
		(self.start + self.end) / 2.0
	}
}

/// Positions for every node of a [`Hierarchy`] plus its group bands.
#[derive(Clone, Debug, Default)]
pub struct RadialLayout {
	positions: Vec<Polar>,
	bands: Vec<Band>,
}

fn separation(hierarchy: &Hierarchy, a: NodeIdx, b: NodeIdx) -> f64 {
	if hierarchy.node(a).parent == hierarchy.node(b).parent {
		1.0
	} else {
		2.0
	}
}

impl RadialLayout {
	/// Lays the hierarchy out over a full turn with leaves at `radius`.
	pub fn cluster(hierarchy: &Hierarchy, radius: f64) -> Self {
		let count = hierarchy.nodes().len();
		let mut x = vec![0.0; count];
		let mut height = vec![0.0; count];

		let mut previous: Option<NodeIdx> = None;
		for &leaf in hierarchy.leaves() {
			if let Some(prev) = previous {
				x[leaf] = x[prev] + separation(hierarchy, prev, leaf);
			}
			previous = Some(leaf);
		}
		// Pre-order indices: children always sit after their parent.
		for idx in (0..count).rev() {
			let children = &hierarchy.node(idx).children;
			if children.is_empty() {
				continue;
			}
			x[idx] = children.iter().map(|&c| x[c]).sum::<f64>() / children.len() as f64;
			height[idx] = 1.0 + children.iter().map(|&c| height[c]).fold(0.0, f64::max);
		}

		let leaves = hierarchy.leaves();
		let (left, right) = match (leaves.first(), leaves.last()) {
			(Some(&l), Some(&r)) => (l, r),
			_ => return Self::default(),
		};
		let x0 = x[left] - separation(hierarchy, left, right) / 2.0;
		let x1 = x[right] + separation(hierarchy, right, left) / 2.0;
		let root_height = height[hierarchy.root()];

		let positions: Vec<Polar> = (0..count)
			.map(|idx| Polar {
				angle: (x[idx] - x0) / (x1 - x0) * TAU,
				radius: if root_height > 0.0 {
					(1.0 - height[idx] / root_height) * radius
				} else {
					0.0
				},
			})
			.collect();

		let bands = Self::group_bands(hierarchy, &positions);
		log::debug!(
			"layout: {} leaves on radius {radius}, {} bands",
			leaves.len(),
			bands.len()
		);
		Self { positions, bands }
	}

	fn group_bands(hierarchy: &Hierarchy, positions: &[Polar]) -> Vec<Band> {
		let leaves = hierarchy.leaves();
		let root = hierarchy.root();
		let top_level = |leaf: NodeIdx| {
			hierarchy
				.ancestors(leaf)
				.find(|&n| hierarchy.node(n).parent == Some(root))
		};
		let angle = |pos: usize| positions[leaves[pos]].angle;

		hierarchy
			.groups()
			.filter_map(|group| {
				let first = leaves.iter().position(|&l| top_level(l) == Some(group))?;
				let last = leaves.iter().rposition(|&l| top_level(l) == Some(group))?;
				let start = if first == 0 {
					0.0
				} else {
					(angle(first - 1) + angle(first)) / 2.0
				};
				let end = if last + 1 == leaves.len() {
					TAU
				} else {
					(angle(last) + angle(last + 1)) / 2.0
				};
				Some(Band {
					label: hierarchy.node(group).name.clone(),
					start,
					end,
				})
			})
			.collect()
	}

	/// Position of any node, group or leaf.
	pub fn position(&self, node: NodeIdx) -> Polar {
		self.positions[node]
	}

	/// One band per top-level group, in document order.
	pub fn bands(&self) -> &[Band] {
		&self.bands
	}

	/// Control points for a link, following the tree from `source` to `target`.
	pub fn route(&self, hierarchy: &Hierarchy, source: NodeIdx, target: NodeIdx) -> Vec<(f64, f64)> {
		hierarchy
			.path(source, target)
			.into_iter()
			.map(|n| self.positions[n].to_cartesian())
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use std::f64::consts::PI;

	use super::*;
	use crate::components::edge_bundle::types::TreeNode;

	const EPS: f64 = 1e-9;

	fn sample() -> Hierarchy {
		Hierarchy::new(&TreeNode::group(
			"root",
			vec![
				TreeNode::group("Team", vec![TreeNode::leaf("a"), TreeNode::leaf("b")]),
				TreeNode::group("Person", vec![TreeNode::leaf("c"), TreeNode::leaf("d")]),
			],
		))
	}

	#[test]
	fn leaves_follow_document_order_within_a_turn() {
		let h = sample();
		let layout = RadialLayout::cluster(&h, 300.0);
		let angles: Vec<f64> = h.leaves().iter().map(|&l| layout.position(l).angle).collect();
		assert!(angles.windows(2).all(|w| w[0] < w[1]));
		assert!(angles.iter().all(|&a| (0.0..TAU).contains(&a)));
		assert!(h
			.leaves()
			.iter()
			.all(|&l| (layout.position(l).radius - 300.0).abs() < EPS));
		assert!(layout.position(h.root()).radius.abs() < EPS);
	}

	#[test]
	fn cousins_are_spaced_twice_as_far_as_siblings() {
		let h = sample();
		let layout = RadialLayout::cluster(&h, 100.0);
		let a: Vec<f64> = h.leaves().iter().map(|&l| layout.position(l).angle).collect();
		// units: a=0, b=1, c=3, d=4; span = 4 + 2 = 6
		let unit = TAU / 6.0;
		assert!((a[1] - a[0] - unit).abs() < EPS);
		assert!((a[2] - a[1] - 2.0 * unit).abs() < EPS);
		assert!((a[0] - unit).abs() < EPS);
	}

	#[test]
	fn layout_is_reproducible() {
		let h = sample();
		let first = RadialLayout::cluster(&h, 250.0);
		let second = RadialLayout::cluster(&h, 250.0);
		for idx in 0..h.nodes().len() {
			assert_eq!(first.position(idx), second.position(idx));
		}
	}

	#[test]
	fn single_leaf_sits_opposite_the_top() {
		let h = Hierarchy::new(&TreeNode::group("g", vec![TreeNode::leaf("only")]));
		let layout = RadialLayout::cluster(&h, 10.0);
		assert!((layout.position(h.leaves()[0]).angle - PI).abs() < EPS);
	}

	#[test]
	fn bands_tile_the_circle() {
		let h = sample();
		let layout = RadialLayout::cluster(&h, 100.0);
		let bands = layout.bands();
		assert_eq!(bands.len(), 2);
		assert_eq!(bands[0].label, "Team");
		assert!(bands[0].start.abs() < EPS);
		assert!((bands[0].end - bands[1].start).abs() < EPS);
		assert!((bands[1].end - TAU).abs() < EPS);
	}

	#[test]
	fn zero_angle_points_up_and_grows_clockwise() {
		let (x, y) = Polar {
			angle: 0.0,
			radius: 40.0,
		}
		.to_cartesian();
		assert!(x.abs() < EPS && (y + 40.0).abs() < EPS);
		let (x, y) = Polar {
			angle: PI / 2.0,
			radius: 40.0,
		}
		.to_cartesian();
		assert!((x - 40.0).abs() < EPS && y.abs() < EPS);
	}
}
