use std::f64::consts::TAU;

use gpui::{
    BorderStyle, Bounds, Canvas, PathBuilder, canvas, linear_color_stop, linear_gradient, point,
    px, quad, rgb, size, transparent_black,
};
use memoir_core::{
    BarEntry, CHART_PADDING, PIE_HUB_RADIUS, PIE_RADIUS, PieSlice, bar_layout, wedge_spans,
};

pub(super) fn pie_canvas(slices: Vec<PieSlice>) -> Canvas<Vec<PieSlice>> {
    canvas(
        move |_, _, _| slices.clone(),
        move |bounds, slices, window, _| {
            window.paint_quad(quad(
                bounds,
                px(0.),
                rgb(0x24292d),
                px(0.),
                transparent_black(),
                BorderStyle::default(),
            ));

            let width = f32::from(bounds.size.width);
            let height = f32::from(bounds.size.height);
            if slices.is_empty() || width <= 0.0 || height <= 0.0 {
                return;
            }
            let center_x = f32::from(bounds.origin.x) + width * 0.5;
            let center_y = f32::from(bounds.origin.y) + height * 0.5;

            for (slice, wedge) in slices.iter().zip(wedge_spans(&slices)) {
                if wedge.sweep <= 0.0 {
                    continue;
                }
                let rim = arc_points(center_x, center_y, PIE_RADIUS, wedge.start, wedge.sweep);

                let mut builder = PathBuilder::fill();
                builder.move_to(point(px(center_x), px(center_y)));
                for p in &rim {
                    builder.line_to(point(px(p.0), px(p.1)));
                }
                builder.line_to(point(px(center_x), px(center_y)));
                if let Ok(path) = builder.build() {
                    window.paint_path(path, rgb(slice.color));
                }

                let mut builder = PathBuilder::stroke(px(2.));
                builder.move_to(point(px(center_x), px(center_y)));
                for p in &rim {
                    builder.line_to(point(px(p.0), px(p.1)));
                }
                builder.line_to(point(px(center_x), px(center_y)));
                if let Ok(path) = builder.build() {
                    window.paint_path(path, rgb(0x24292d));
                }
            }

            // hub disc over the wedge tips; the center labels sit on top
            // of it as regular elements
            let hub = arc_points(center_x, center_y, PIE_HUB_RADIUS, 0.0, TAU);
            let mut builder = PathBuilder::fill();
            builder.move_to(point(px(hub[0].0), px(hub[0].1)));
            for p in &hub[1..] {
                builder.line_to(point(px(p.0), px(p.1)));
            }
            if let Ok(path) = builder.build() {
                window.paint_path(path, rgb(0x24292d));
            }
        },
    )
}

pub(super) fn bar_canvas(entries: Vec<BarEntry>) -> Canvas<Vec<BarEntry>> {
    canvas(
        move |_, _, _| entries.clone(),
        move |bounds, entries, window, _| {
            window.paint_quad(quad(
                bounds,
                px(0.),
                rgb(0x24292d),
                px(0.),
                transparent_black(),
                BorderStyle::default(),
            ));

            let width = f32::from(bounds.size.width);
            let height = f32::from(bounds.size.height);
            let ox = f32::from(bounds.origin.x);
            let oy = f32::from(bounds.origin.y);
            if width <= 0.0 || height <= 0.0 {
                return;
            }

            // An empty or all-zero dataset lays out no bars; the axis is
            // still drawn below.
            if let Some(bars) = bar_layout(width, height, &entries) {
                for bar in bars {
                    if bar.height <= 0.0 {
                        continue;
                    }
                    let bar_bounds = Bounds {
                        origin: point(px(ox + bar.x), px(oy + bar.y)),
                        size: size(px(bar.width), px(bar.height)),
                    };
                    window.paint_quad(quad(
                        bar_bounds,
                        px(0.),
                        linear_gradient(
                            180.,
                            linear_color_stop(rgb(0x00c7be), 0.),
                            linear_color_stop(rgb(0x2ca7e0), 1.),
                        ),
                        px(0.),
                        transparent_black(),
                        BorderStyle::default(),
                    ));
                }
            }

            let mut builder = PathBuilder::stroke(px(1.));
            builder.move_to(point(px(ox + CHART_PADDING), px(oy + CHART_PADDING)));
            builder.line_to(point(px(ox + CHART_PADDING), px(oy + height - CHART_PADDING)));
            builder.line_to(point(
                px(ox + width - CHART_PADDING),
                px(oy + height - CHART_PADDING),
            ));
            if let Ok(path) = builder.build() {
                window.paint_path(path, rgb(0x666666));
            }
        },
    )
}

/// Points along a circular arc, sampled densely enough that the polygon
/// is indistinguishable from the true curve at chart scale.
fn arc_points(center_x: f32, center_y: f32, radius: f32, start: f64, sweep: f64) -> Vec<(f32, f32)> {
    let segments = ((sweep / TAU * 64.0).ceil() as usize).max(2);
    (0..=segments)
        .map(|step| {
            let angle = start + sweep * step as f64 / segments as f64;
            (
                center_x + radius * angle.cos() as f32,
                center_y + radius * angle.sin() as f32,
            )
        })
        .collect()
}
