//! Click-driven lock state and the visual emphasis derived from it.

use std::collections::HashSet;

use super::hierarchy::Hierarchy;
use super::links::Link;

/// How strongly a link is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkEmphasis {
	/// Nothing is locked.
	Neutral,
	/// Touches a locked leaf.
	Emphasized,
	/// Something else is locked; kept as a faint trace.
	Dimmed,
}

/// Font weight of a leaf label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelWeight {
	/// Unlocked leaf.
	Normal,
	/// Locked leaf.
	Bold,
}

/// Per-link and per-leaf presentation, index-aligned with the link list
/// and [`Hierarchy::leaves`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Emphasis {
	/// One entry per link.
	pub links: Vec<LinkEmphasis>,
	/// One entry per leaf.
	pub labels: Vec<LabelWeight>,
}

/// Leaf identifiers locked by label clicks during one session.
#[derive(Clone, Debug, Default)]
pub struct LockSet {
	locked: HashSet<String>,
}

impl LockSet {
	/// An empty lock set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds `leaf_id` if absent, removes it otherwise.
	pub fn click_label(&mut self, leaf_id: &str) {
		if !self.locked.remove(leaf_id) {
			self.locked.insert(leaf_id.to_string());
		}
	}

	/// Unlocks everything.
	pub fn click_background(&mut self) {
		self.locked.clear();
	}

	/// Whether `leaf_id` is currently locked.
	pub fn is_locked(&self, leaf_id: &str) -> bool {
		self.locked.contains(leaf_id)
	}

	/// True when nothing is locked.
	pub fn is_empty(&self) -> bool {
		self.locked.is_empty()
	}

	/// Number of locked leaves.
	pub fn len(&self) -> usize {
		self.locked.len()
	}

	/// Emphasis for every link and label under the current locks.
	///
	/// Pure: the same lock set always yields the same result.
	pub fn recompute(&self, hierarchy: &Hierarchy, links: &[Link]) -> Emphasis {
		let leaf_count = hierarchy.leaves().len();
		if self.is_empty() {
			return Emphasis {
				links: vec![LinkEmphasis::Neutral; links.len()],
				labels: vec![LabelWeight::Normal; leaf_count],
			};
		}

		let links = links
			.iter()
			.map(|link| {
				if self.is_locked(hierarchy.leaf_id(link.source))
					|| self.is_locked(hierarchy.leaf_id(link.target))
				{
					LinkEmphasis::Emphasized
				} else {
					LinkEmphasis::Dimmed
				}
			})
			.collect();
		let labels = (0..leaf_count)
			.map(|leaf| {
				if self.is_locked(hierarchy.leaf_id(leaf)) {
					LabelWeight::Bold
				} else {
					LabelWeight::Normal
				}
			})
			.collect();
		Emphasis { links, labels }
	}
}
