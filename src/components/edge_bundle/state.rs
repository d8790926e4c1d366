//! Session state behind the canvas: graph, layout, locks and view transform.

use std::f64::consts::PI;

use super::bilink::Bilinks;
use super::config::BundleConfig;
use super::highlight::{Emphasis, LockSet};
use super::hierarchy::Hierarchy;
use super::layout::{Polar, RadialLayout};
use super::links::{Link, project};
use super::palette::Palette;
use super::types::TreeNode;

/// Screen offset of the diagram centre and zoom factor.
#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	/// Horizontal offset.
	pub x: f64,
	/// Vertical offset.
	pub y: f64,
	/// Zoom factor.
	pub k: f64,
}

/// Drag bookkeeping between mousedown and mouseup.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	/// A button is held.
	pub active: bool,
	/// The pointer left the click slop.
	pub moved: bool,
	/// Press position.
	pub start_x: f64,
	/// Press position.
	pub start_y: f64,
	/// Transform at press time.
	pub transform_start_x: f64,
	/// Transform at press time.
	pub transform_start_y: f64,
}

/// Pointer travel (px) after which a press is a pan instead of a click.
const CLICK_SLOP: f64 = 3.0;

/// What a click landed on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickTarget {
	/// The label of the leaf with this index.
	Label(usize),
	/// Anywhere else.
	Background,
}

impl ClickTarget {
	/// CSS cursor shown while hovering this target.
	pub fn cursor(&self) -> &'static str {
		match self {
			Self::Label(_) => "pointer",
			Self::Background => "grab",
		}
	}
}

/// One rendering session: the immutable graph plus the lock state driving emphasis.
pub struct EdgeBundleState {
	/// Resolved tree.
	pub hierarchy: Hierarchy,
	/// Leaf-to-leaf edges.
	pub bilinks: Bilinks,
	/// Drawable links in draw order.
	pub links: Vec<Link>,
	/// Leaf positions and group bands for the current size.
	pub layout: RadialLayout,
	/// Relationship colours.
	pub palette: Palette,
	/// Locked leaves.
	pub locks: LockSet,
	/// Presentation derived from `locks`.
	pub emphasis: Emphasis,
	/// Presentation settings.
	pub config: BundleConfig,
	/// Current pan and zoom.
	pub transform: ViewTransform,
	/// In-progress drag.
	pub pan: PanState,
	/// Canvas width in pixels.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
	/// Outer radius of the diagram, bands included.
	pub outer_radius: f64,
}

impl EdgeBundleState {
	/// Builds the graph for `document` and lays it out for a `width` by `height` canvas.
	pub fn new(document: &TreeNode, config: BundleConfig, width: f64, height: f64) -> Self {
		let hierarchy = Hierarchy::new(document);
		let bilinks = Bilinks::build(&hierarchy);
		let links = project(&bilinks);
		let palette = Palette::for_links(&links);
		let locks = LockSet::new();
		let emphasis = locks.recompute(&hierarchy, &links);
		log::info!(
			"edge bundle: {} leaves, {} links, {} unresolved",
			hierarchy.leaves().len(),
			links.len(),
			bilinks.unresolved().count()
		);

		let mut state = Self {
			hierarchy,
			bilinks,
			links,
			layout: RadialLayout::default(),
			palette,
			locks,
			emphasis,
			config,
			transform: ViewTransform::default(),
			pan: PanState::default(),
			width: 0.0,
			height: 0.0,
			outer_radius: 0.0,
		};
		state.resize(width, height);
		state
	}

	/// Recenters the view and lays the diagram out to fit the new size.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.outer_radius = (width.min(height) / 2.0).max(0.0);
		let ring = (self.outer_radius - self.config.ring_inset).max(0.0);
		self.layout = RadialLayout::cluster(&self.hierarchy, ring);
		self.transform = ViewTransform {
			x: width / 2.0,
			y: height / 2.0,
			k: 1.0,
		};
	}

	/// Inverse of the view transform.
	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Whether the leaf's label is drawn flipped on the left half.
	pub fn is_flipped(&self, leaf: usize) -> bool {
		self.leaf_position(leaf).angle >= PI
	}

	/// Polar position of the leaf with index `leaf`.
	pub fn leaf_position(&self, leaf: usize) -> Polar {
		self.layout.position(self.hierarchy.leaves()[leaf])
	}

	/// The leaf whose label box contains the screen point, if any.
	pub fn label_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let half_height = self.config.font_size / 2.0;
		let mut found: Option<(usize, f64)> = None;

		for leaf in 0..self.hierarchy.leaves().len() {
			let position = self.leaf_position(leaf);
			let (ux, uy) = (position.angle.sin(), -position.angle.cos());
			let along = gx * ux + gy * uy;
			let across = (gy * ux - gx * uy).abs();
			let start = position.radius + self.config.label_offset;
			let width = self.config.text_width(&self.hierarchy.leaf(leaf).name);
			if along < start || along > start + width || across > half_height {
				continue;
			}
			if found.is_none_or(|(_, best)| across < best) {
				found = Some((leaf, across));
			}
		}
		found.map(|(leaf, _)| leaf)
	}

	/// What a press at the screen point would hit.
	pub fn click_target(&self, sx: f64, sy: f64) -> ClickTarget {
		match self.label_at_position(sx, sy) {
			Some(leaf) => ClickTarget::Label(leaf),
			None => ClickTarget::Background,
		}
	}

	/// Routes a click: a label toggles its lock and never reaches the
	/// background handler.
	pub fn click(&mut self, sx: f64, sy: f64) {
		match self.click_target(sx, sy) {
			ClickTarget::Label(leaf) => self.click_label(leaf),
			ClickTarget::Background => self.click_background(),
		}
	}

	/// Toggles the lock on `leaf`.
	pub fn click_label(&mut self, leaf: usize) {
		let id = self.hierarchy.leaf_id(leaf).to_string();
		self.locks.click_label(&id);
		log::debug!("toggled lock on {id}, {} locked", self.locks.len());
		self.recompute();
	}

	/// Clears every lock.
	pub fn click_background(&mut self) {
		self.locks.click_background();
		self.recompute();
	}

	fn recompute(&mut self) {
		self.emphasis = self.locks.recompute(&self.hierarchy, &self.links);
	}

	/// Starts a press at `(x, y)`.
	pub fn begin_pan(&mut self, x: f64, y: f64) {
		self.pan = PanState {
			active: true,
			moved: false,
			start_x: x,
			start_y: y,
			transform_start_x: self.transform.x,
			transform_start_y: self.transform.y,
		};
	}

	/// Drags the view once the pointer has left the click slop.
	pub fn pan_to(&mut self, x: f64, y: f64) {
		if !self.pan.active {
			return;
		}
		let (dx, dy) = (x - self.pan.start_x, y - self.pan.start_y);
		if dx.hypot(dy) > CLICK_SLOP {
			self.pan.moved = true;
		}
		if self.pan.moved {
			self.transform.x = self.pan.transform_start_x + dx;
			self.transform.y = self.pan.transform_start_y + dy;
		}
	}

	/// Ends a press; returns true when it should count as a click.
	pub fn end_pan(&mut self) -> bool {
		let was_click = self.pan.active && !self.pan.moved;
		self.pan.active = false;
		self.pan.moved = false;
		was_click
	}

	/// Scales by `factor` around `(x, y)`, clamped to 0.1..=10.
	pub fn zoom_at(&mut self, x: f64, y: f64, factor: f64) {
		let new_k = (self.transform.k * factor).clamp(0.1, 10.0);
		let ratio = new_k / self.transform.k;
		self.transform.x = x - (x - self.transform.x) * ratio;
		self.transform.y = y - (y - self.transform.y) * ratio;
		self.transform.k = new_k;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::edge_bundle::highlight::{LabelWeight, LinkEmphasis};

	fn state() -> EdgeBundleState {
		let doc = TreeNode::group(
			"G",
			vec![
				TreeNode::leaf("X").with_import("G.Y", "Depends On"),
				TreeNode::leaf("Y"),
			],
		);
		EdgeBundleState::new(&doc, BundleConfig::default(), 800.0, 800.0)
	}

	fn label_point(s: &EdgeBundleState, leaf: usize) -> (f64, f64) {
		let p = s.leaf_position(leaf);
		let (x, y) = Polar {
			angle: p.angle,
			radius: p.radius + s.config.label_offset + 2.0,
		}
		.to_cartesian();
		(x + s.transform.x, y + s.transform.y)
	}

	#[test]
	fn clicking_a_label_locks_it() {
		let mut s = state();
		let (x, y) = label_point(&s, 0);
		assert_eq!(s.click_target(x, y), ClickTarget::Label(0));
		s.click(x, y);
		assert!(s.locks.is_locked("G.X"));
		assert_eq!(s.emphasis.links, vec![LinkEmphasis::Emphasized]);
		assert_eq!(s.emphasis.labels, vec![LabelWeight::Bold, LabelWeight::Normal]);
	}

	#[test]
	fn hovering_a_label_shows_a_pointer() {
		let s = state();
		let (x, y) = label_point(&s, 1);
		assert_eq!(s.click_target(x, y).cursor(), "pointer");
		assert_eq!(s.click_target(s.transform.x, s.transform.y).cursor(), "grab");
	}

	#[test]
	fn label_click_does_not_clear_other_locks() {
		let mut s = state();
		let (x0, y0) = label_point(&s, 0);
		let (x1, y1) = label_point(&s, 1);
		s.click(x0, y0);
		s.click(x1, y1);
		assert_eq!(s.locks.len(), 2);
		assert_eq!(s.emphasis.links, vec![LinkEmphasis::Emphasized]);
	}

	#[test]
	fn clicking_empty_space_clears_locks() {
		let mut s = state();
		let (x, y) = label_point(&s, 1);
		s.click(x, y);
		s.click(s.transform.x, s.transform.y);
		assert!(s.locks.is_empty());
		assert_eq!(s.emphasis.links, vec![LinkEmphasis::Neutral]);
	}

	#[test]
	fn pan_beyond_slop_is_not_a_click() {
		let mut s = state();
		s.begin_pan(10.0, 10.0);
		s.pan_to(11.0, 11.0);
		assert!(!s.pan.moved);
		s.pan_to(40.0, 10.0);
		assert!((s.transform.x - 430.0).abs() < 1e-9);
		assert!(!s.end_pan());

		s.begin_pan(10.0, 10.0);
		assert!(s.end_pan());
	}

	#[test]
	fn zoom_keeps_the_pointer_fixed() {
		let mut s = state();
		let before = s.screen_to_graph(500.0, 300.0);
		s.zoom_at(500.0, 300.0, 1.1);
		let after = s.screen_to_graph(500.0, 300.0);
		assert!((before.0 - after.0).abs() < 1e-9);
		assert!((before.1 - after.1).abs() < 1e-9);
	}

	#[test]
	fn resize_relays_out_the_ring() {
		let mut s = state();
		assert!((s.leaf_position(0).radius - 300.0).abs() < 1e-9);
		s.resize(600.0, 1000.0);
		assert!((s.leaf_position(0).radius - 200.0).abs() < 1e-9);
		assert!((s.transform.x - 300.0).abs() < 1e-9);
	}
}
