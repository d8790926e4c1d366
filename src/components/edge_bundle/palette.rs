//! Colour lookups for relationship types and group bands.

use super::links::Link;

const COLORS: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

const BAND_COLORS: &[&str] = &[
	"#e0d4f7", "#ffd6e6", "#fff4bf", "#d4f0e8", "#d6e6ff", "#f7e0d4",
];

/// Relationship tags the legend always lists, in colour order.
pub const RELATIONSHIP_TYPES: &[&str] = &["Member Of", "Contributes To", "Depends On", "Reviews"];

/// Ordinal colour scale over relationship types. Types outside the
/// reference vocabulary take the next colours in order of first appearance.
#[derive(Clone, Debug)]
pub struct Palette {
	domain: Vec<String>,
}

impl Default for Palette {
	fn default() -> Self {
		Self {
			domain: RELATIONSHIP_TYPES.iter().map(|t| t.to_string()).collect(),
		}
	}
}

impl Palette {
	/// Reference vocabulary first, then unseen types in link order.
	pub fn for_links(links: &[Link]) -> Self {
		let mut palette = Self::default();
		for link in links {
			if !palette.domain.contains(&link.kind) {
				palette.domain.push(link.kind.clone());
			}
		}
		palette
	}

	/// Colour for `kind`; unknown types share the first colour.
	pub fn color(&self, kind: &str) -> &'static str {
		let index = self.domain.iter().position(|d| d == kind).unwrap_or(0);
		COLORS[index % COLORS.len()]
	}

	/// `(type, colour)` in legend order.
	pub fn entries(&self) -> impl Iterator<Item = (&str, &'static str)> + '_ {
		self.domain.iter().map(|kind| (kind.as_str(), self.color(kind)))
	}
}

/// Fill for the `index`-th group band.
pub fn band_color(index: usize) -> &'static str {
	BAND_COLORS[index % BAND_COLORS.len()]
}

#[cfg(test)]
mod tests {
	use super::*;

	fn link(kind: &str) -> Link {
		Link {
			source: 0,
			target: 0,
			kind: kind.into(),
		}
	}

	#[test]
	fn reference_vocabulary_keeps_its_colours() {
		let palette = Palette::for_links(&[link("Reviews"), link("Member Of")]);
		assert_eq!(palette.color("Member Of"), "#1f77b4");
		assert_eq!(palette.color("Reviews"), "#d62728");
		assert_eq!(palette.entries().count(), 4);
	}

	#[test]
	fn unknown_types_are_appended_and_cycled() {
		let kinds: Vec<Link> = (0..8).map(|i| link(&format!("custom {i}"))).collect();
		let palette = Palette::for_links(&kinds);
		assert_eq!(palette.color("custom 0"), "#9467bd");
		assert_eq!(palette.color("custom 6"), palette.color("Member Of"));
	}
}
