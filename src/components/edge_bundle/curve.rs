//! Bundled link curves: control points are pulled toward the straight chord
//! by `1 - beta`, then smoothed with a uniform cubic B-spline.

/// One canvas path operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
	/// Start a subpath.
	MoveTo(f64, f64),
	/// Straight segment.
	LineTo(f64, f64),
	/// Cubic segment.
	BezierTo {
		/// First control point.
		c1: (f64, f64),
		/// Second control point.
		c2: (f64, f64),
		/// End point.
		to: (f64, f64),
	},
}

/// Converts route control points into canvas path commands.
///
/// Fewer than two points yields no commands.
pub fn bundle(points: &[(f64, f64)], beta: f64) -> Vec<PathCommand> {
	let Some(last) = points.len().checked_sub(1).filter(|&j| j > 0) else {
		return Vec::new();
	};
	let (x0, y0) = points[0];
	let (dx, dy) = (points[last].0 - x0, points[last].1 - y0);
	let straightened = points.iter().enumerate().map(|(i, &(x, y))| {
		let t = i as f64 / last as f64;
		(
			beta * x + (1.0 - beta) * (x0 + t * dx),
			beta * y + (1.0 - beta) * (y0 + t * dy),
		)
	});
	basis(straightened)
}

fn basis(points: impl Iterator<Item = (f64, f64)>) -> Vec<PathCommand> {
	let mut out = Vec::new();
	let (mut p0, mut p1) = ((0.0, 0.0), (0.0, 0.0));
	let mut seen = 0usize;

	let segment = |out: &mut Vec<PathCommand>, p0: (f64, f64), p1: (f64, f64), p: (f64, f64)| {
		out.push(PathCommand::BezierTo {
			c1: ((2.0 * p0.0 + p1.0) / 3.0, (2.0 * p0.1 + p1.1) / 3.0),
			c2: ((p0.0 + 2.0 * p1.0) / 3.0, (p0.1 + 2.0 * p1.1) / 3.0),
			to: ((p0.0 + 4.0 * p1.0 + p.0) / 6.0, (p0.1 + 4.0 * p1.1 + p.1) / 6.0),
		});
	};

	for p in points {
		match seen {
			0 => out.push(PathCommand::MoveTo(p.0, p.1)),
			1 => {}
			2 => {
				out.push(PathCommand::LineTo(
					(5.0 * p0.0 + p1.0) / 6.0,
					(5.0 * p0.1 + p1.1) / 6.0,
				));
				segment(&mut out, p0, p1, p);
			}
			_ => segment(&mut out, p0, p1, p),
		}
		seen += 1;
		p0 = p1;
		p1 = p;
	}

	if seen >= 3 {
		segment(&mut out, p0, p1, p1);
	}
	if seen >= 2 {
		out.push(PathCommand::LineTo(p1.0, p1.1));
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn degenerate_routes_draw_nothing() {
		assert!(bundle(&[], 0.85).is_empty());
		assert!(bundle(&[(1.0, 2.0)], 0.85).is_empty());
	}

	#[test]
	fn two_points_make_a_straight_line() {
		let cmds = bundle(&[(0.0, 0.0), (10.0, 0.0)], 0.85);
		assert_eq!(
			cmds,
			vec![PathCommand::MoveTo(0.0, 0.0), PathCommand::LineTo(10.0, 0.0)]
		);
	}

	#[test]
	fn curve_starts_and_ends_on_the_endpoints() {
		let cmds = bundle(&[(0.0, -100.0), (0.0, 0.0), (100.0, 0.0)], 0.85);
		assert_eq!(cmds.first(), Some(&PathCommand::MoveTo(0.0, -100.0)));
		assert_eq!(cmds.last(), Some(&PathCommand::LineTo(100.0, 0.0)));
		assert_eq!(
			cmds.iter()
				.filter(|c| matches!(c, PathCommand::BezierTo { .. }))
				.count(),
			2
		);
	}

	#[test]
	fn zero_beta_collapses_onto_the_chord() {
		let cmds = bundle(&[(0.0, 0.0), (50.0, 80.0), (100.0, 0.0)], 0.0);
		for cmd in cmds {
			let y = match cmd {
				PathCommand::MoveTo(_, y) | PathCommand::LineTo(_, y) => y,
				PathCommand::BezierTo { to, .. } => to.1,
			};
			assert!(y.abs() < 1e-9);
		}
	}
}
