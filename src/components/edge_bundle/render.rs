use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::curve::{PathCommand, bundle};
use super::highlight::LabelWeight;
use super::layout::Polar;
use super::palette::band_color;
use super::state::EdgeBundleState;

pub fn render(state: &EdgeBundleState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(&state.config.background);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_bands(state, ctx);
	draw_links(state, ctx);
	draw_labels(state, ctx);
	ctx.restore();
	draw_legend(state, ctx);
}

/// Canvas angle for a layout angle (layout 0 points up, canvas 0 points right).
fn canvas_angle(angle: f64) -> f64 {
	angle - PI / 2.0
}

fn draw_bands(state: &EdgeBundleState, ctx: &CanvasRenderingContext2d) {
	let config = &state.config;
	let inner = (state.outer_radius - config.band_inner_inset).max(0.0);
	let outer = (state.outer_radius - config.band_outer_inset).max(inner);

	for (i, band) in state.layout.bands().iter().enumerate() {
		let (start, end) = (canvas_angle(band.start), canvas_angle(band.end));
		ctx.begin_path();
		let _ = ctx.arc(0.0, 0.0, outer, start, end);
		let _ = ctx.arc_with_anticlockwise(0.0, 0.0, inner, end, start, true);
		ctx.close_path();
		ctx.set_fill_style_str(band_color(i));
		ctx.fill();
	}

	ctx.set_fill_style_str(&config.text_color);
	ctx.set_font(&format!("bold 14px {}", config.font_family));
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	for band in state.layout.bands() {
		let angle = band.mid_angle();
		let (x, y) = Polar {
			angle,
			radius: state.outer_radius - 10.0,
		}
		.to_cartesian();
		// Tangential, flipped on the lower half so it never reads upside down.
		let mut rotation = angle;
		if angle > PI / 2.0 && angle < 3.0 * PI / 2.0 {
			rotation += PI;
		}
		ctx.save();
		let _ = ctx.translate(x, y);
		let _ = ctx.rotate(rotation);
		let _ = ctx.fill_text(&band.label, 0.0, 0.0);
		ctx.restore();
	}
}

fn draw_links(state: &EdgeBundleState, ctx: &CanvasRenderingContext2d) {
	let config = &state.config;
	let leaves = state.hierarchy.leaves();
	ctx.set_line_width(config.stroke_width);

	for (link, &emphasis) in state.links.iter().zip(&state.emphasis.links) {
		let route = state
			.layout
			.route(&state.hierarchy, leaves[link.source], leaves[link.target]);
		let commands = bundle(&route, config.beta);
		// self-references have nothing to draw
		if commands.is_empty() {
			continue;
		}
		trace(ctx, &commands);
		ctx.set_global_alpha(config.link_opacity(emphasis));
		ctx.set_stroke_style_str(state.palette.color(&link.kind));
		ctx.stroke();
	}
	ctx.set_global_alpha(1.0);
}

fn trace(ctx: &CanvasRenderingContext2d, commands: &[PathCommand]) {
	ctx.begin_path();
	for &command in commands {
		match command {
			PathCommand::MoveTo(x, y) => ctx.move_to(x, y),
			PathCommand::LineTo(x, y) => ctx.line_to(x, y),
			PathCommand::BezierTo { c1, c2, to } => {
				ctx.bezier_curve_to(c1.0, c1.1, c2.0, c2.1, to.0, to.1)
			}
		}
	}
}

fn draw_labels(state: &EdgeBundleState, ctx: &CanvasRenderingContext2d) {
	let config = &state.config;
	ctx.set_fill_style_str(&config.text_color);
	ctx.set_text_baseline("middle");

	for (leaf, &weight) in state.emphasis.labels.iter().enumerate() {
		let position = state.leaf_position(leaf);
		let flipped = state.is_flipped(leaf);
		ctx.save();
		let _ = ctx.rotate(canvas_angle(position.angle));
		let _ = ctx.translate(position.radius + config.label_offset, 0.0);
		if flipped {
			let _ = ctx.rotate(PI);
		}
		ctx.set_text_align(if flipped { "end" } else { "start" });
		ctx.set_font(&config.label_font(weight));
		let _ = ctx.fill_text(&state.hierarchy.leaf(leaf).name, 0.0, 0.0);
		ctx.restore();
	}
}

fn draw_legend(state: &EdgeBundleState, ctx: &CanvasRenderingContext2d) {
	let config = &state.config;
	let (left, top) = (
		state.transform.x - state.outer_radius + 20.0,
		state.transform.y - state.outer_radius + 20.0,
	);
	let (left, top) = (left.max(10.0), top.max(16.0));

	ctx.set_text_align("start");
	ctx.set_text_baseline("alphabetic");
	ctx.set_fill_style_str(&config.text_color);
	ctx.set_font(&config.label_font(LabelWeight::Bold));
	let _ = ctx.fill_text("Connection Type", left, top);

	ctx.set_font(&config.label_font(LabelWeight::Normal));
	for (i, (kind, color)) in state.palette.entries().enumerate() {
		let cy = top + 15.0 + i as f64 * 16.0;
		ctx.begin_path();
		let _ = ctx.arc(left, cy, 6.0, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(color);
		ctx.fill();
		ctx.set_fill_style_str(&config.text_color);
		let _ = ctx.fill_text(kind, left + 10.0, cy + 3.0);
	}
}
