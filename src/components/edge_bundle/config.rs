//! Presentation settings.

use super::highlight::{LabelWeight, LinkEmphasis};

/// Presentation settings for [`super::EdgeBundleCanvas`].
#[derive(Clone, Debug, PartialEq)]
pub struct BundleConfig {
	/// Diagram diameter in pixels when not fullscreen.
	pub diameter: f64,
	/// Distance between the outer edge and the leaf ring.
	pub ring_inset: f64,
	/// Group bands span from `radius - band_inner_inset` to `radius - band_outer_inset`.
	pub band_inner_inset: f64,
	/// See `band_inner_inset`.
	pub band_outer_inset: f64,
	/// Gap between a leaf and its label.
	pub label_offset: f64,
	/// Label font size in pixels.
	pub font_size: f64,
	/// CSS font family for all text.
	pub font_family: String,
	/// Link line width.
	pub stroke_width: f64,
	/// Bundle strength, 0 draws straight chords and 1 follows the tree exactly.
	pub beta: f64,
	/// Link opacity while nothing is locked.
	pub neutral_opacity: f64,
	/// Link opacity when touching a locked leaf.
	pub emphasized_opacity: f64,
	/// Link opacity otherwise; kept above zero so links remain a faint trace.
	pub dimmed_opacity: f64,
	/// Canvas fill colour.
	pub background: String,
	/// Label and legend text colour.
	pub text_color: String,
}

impl Default for BundleConfig {
	fn default() -> Self {
		Self {
			diameter: 800.0,
			ring_inset: 100.0,
			band_inner_inset: 100.0,
			band_outer_inset: 20.0,
			label_offset: 8.0,
			font_size: 10.0,
			font_family: "'Poppins', sans-serif".into(),
			stroke_width: 3.5,
			beta: 0.85,
			neutral_opacity: 0.75,
			emphasized_opacity: 1.0,
			dimmed_opacity: 0.05,
			background: "#ffffff".into(),
			text_color: "#333".into(),
		}
	}
}

impl BundleConfig {
	/// Stroke alpha for a link emphasis.
	pub fn link_opacity(&self, emphasis: LinkEmphasis) -> f64 {
		match emphasis {
			LinkEmphasis::Neutral => self.neutral_opacity,
			LinkEmphasis::Emphasized => self.emphasized_opacity,
			LinkEmphasis::Dimmed => self.dimmed_opacity,
		}
	}

	/// Canvas font string for a label weight.
	pub fn label_font(&self, weight: LabelWeight) -> String {
		let weight = match weight {
			LabelWeight::Normal => "normal",
			LabelWeight::Bold => "bold",
		};
		format!("{} {}px {}", weight, self.font_size, self.font_family)
	}

	/// Rough rendered width of `text`, used for label hit-testing.
	pub fn text_width(&self, text: &str) -> f64 {
		text.chars().count() as f64 * self.font_size * 0.6
	}
}
