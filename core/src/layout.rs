use std::f64::consts::{FRAC_PI_2, TAU};

use crate::types::{BarEntry, PieSlice};

/// Padding around the bar chart's plot area.
pub const CHART_PADDING: f32 = 40.0;
/// Horizontal gap between bars.
pub const BAR_GAP: f32 = 10.0;
/// Outer radius of the pie.
pub const PIE_RADIUS: f32 = 100.0;
/// Radius of the filled hub overlaid on the wedges.
pub const PIE_HUB_RADIUS: f32 = 40.0;

/// Horizontal bias applied to a tooltip relative to its marker.
pub const TOOLTIP_DX: f32 = 20.0;
/// Vertical bias applied to a tooltip relative to its marker.
pub const TOOLTIP_DY: f32 = -60.0;

/// A pie wedge in radians. `start` is measured clockwise from the
/// positive x axis; the first wedge starts at -PI/2 (pointing up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    pub start: f64,
    pub sweep: f64,
}

impl Wedge {
    pub fn end(&self) -> f64 {
        self.start + self.sweep
    }
}

/// Consecutive wedges for the given slices, clockwise from -PI/2, each
/// sweeping `value / 100 x 2 pi`.
pub fn wedge_spans(slices: &[PieSlice]) -> Vec<Wedge> {
    let mut start = -FRAC_PI_2;
    slices
        .iter()
        .map(|slice| {
            let sweep = slice.value / 100.0 * TAU;
            let wedge = Wedge { start, sweep };
            start += sweep;
            wedge
        })
        .collect()
}

/// A bar's rectangle in canvas coordinates (origin at the top left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Lays out bars inside a `canvas_w` x `canvas_h` surface with
/// `CHART_PADDING` on all sides and `BAR_GAP` between bars. Bars share
/// one width, `plot_w / n - gap`, and each height is
/// `value / max x plot_h`. Returns `None` when there is nothing to
/// scale against (no entries, or no positive value).
pub fn bar_layout(canvas_w: f32, canvas_h: f32, entries: &[BarEntry]) -> Option<Vec<BarRect>> {
    if entries.is_empty() {
        return None;
    }
    let max = entries.iter().map(|e| e.value).fold(f64::MIN, f64::max);
    if max <= 0.0 {
        return None;
    }

    let plot_w = canvas_w - CHART_PADDING * 2.0;
    let plot_h = canvas_h - CHART_PADDING * 2.0;
    let bar_width = (plot_w / entries.len() as f32 - BAR_GAP).max(f32::EPSILON);

    Some(
        entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                let height = ((entry.value / max).clamp(0.0, 1.0) as f32) * plot_h;
                let x = CHART_PADDING + idx as f32 * (bar_width + BAR_GAP);
                BarRect {
                    x,
                    y: canvas_h - CHART_PADDING - height,
                    width: bar_width,
                    height,
                }
            })
            .collect(),
    )
}

/// Scroll progress as a percentage in [0, 100]. A page with no
/// scrollable overflow reports 0 rather than dividing by zero.
pub fn scroll_progress(offset: f32, content_height: f32, viewport_height: f32) -> f32 {
    let scrollable = content_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (offset / scrollable * 100.0).clamp(0.0, 100.0)
}

/// The largest valid scroll offset.
pub fn max_scroll(content_height: f32, viewport_height: f32) -> f32 {
    (content_height - viewport_height).max(0.0)
}

pub fn clamp_offset(offset: f32, content_height: f32, viewport_height: f32) -> f32 {
    offset.clamp(0.0, max_scroll(content_height, viewport_height))
}

/// Tooltip origin for a hovered marker: the marker's position relative
/// to the map panel, biased by (`TOOLTIP_DX`, `TOOLTIP_DY`).
pub fn tooltip_offset(
    marker_left: f32,
    marker_top: f32,
    map_left: f32,
    map_top: f32,
) -> (f32, f32) {
    (
        marker_left - map_left + TOOLTIP_DX,
        marker_top - map_top + TOOLTIP_DY,
    )
}

pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PageContent;

    #[test]
    fn wedge_spans_sum_to_the_full_circle() {
        let slices = PageContent::default().languages;
        let spans = wedge_spans(&slices);

        let total: f64 = spans.iter().map(|w| w.sweep).sum();
        assert!((total - TAU).abs() < 1e-6, "total sweep {total}");
        assert_eq!(spans[0].start, -FRAC_PI_2);
        // Wedges are consecutive: each starts where the previous ended.
        for pair in spans.windows(2) {
            assert!((pair[1].start - pair[0].end()).abs() < 1e-9);
        }
    }

    #[test]
    fn wedge_sweep_matches_value_proportion() {
        let slices = vec![
            PieSlice::new("a", 25.0, 0x00c7be),
            PieSlice::new("b", 75.0, 0x2ca7e0),
        ];
        let spans = wedge_spans(&slices);
        assert!((spans[0].sweep - TAU * 0.25).abs() < 1e-6);
        assert!((spans[1].sweep - TAU * 0.75).abs() < 1e-6);
    }

    #[test]
    fn bar_heights_are_monotonic_in_values() {
        let entries = PageContent::default().sales;
        let bars = bar_layout(500.0, 360.0, &entries).unwrap();

        for pair in bars.windows(2) {
            // Default sales values are increasing by decade.
            assert!(pair[1].height >= pair[0].height);
        }
    }

    #[test]
    fn bar_scenario_from_the_default_dataset() {
        // [5, 15, 20, 25, 30]: the 2010s bar fills the plot height and
        // the 1970s bar is 5/30 of it.
        let entries = PageContent::default().sales;
        let bars = bar_layout(500.0, 360.0, &entries).unwrap();
        let plot_h = 360.0 - CHART_PADDING * 2.0;

        assert!((bars[4].height - plot_h).abs() < 1e-4);
        assert!((bars[0].height - plot_h * 5.0 / 30.0).abs() < 1e-4);
    }

    #[test]
    fn bars_share_width_and_gap() {
        let entries = PageContent::default().sales;
        let bars = bar_layout(500.0, 360.0, &entries).unwrap();
        let expected_width = (500.0 - CHART_PADDING * 2.0) / 5.0 - BAR_GAP;

        for bar in &bars {
            assert!((bar.width - expected_width).abs() < 1e-4);
        }
        for pair in bars.windows(2) {
            assert!((pair[1].x - pair[0].x - (expected_width + BAR_GAP)).abs() < 1e-4);
        }
    }

    #[test]
    fn empty_and_all_zero_datasets_lay_out_nothing() {
        assert!(bar_layout(500.0, 360.0, &[]).is_none());

        let zeros = vec![BarEntry::new("a", 0.0), BarEntry::new("b", 0.0)];
        assert!(bar_layout(500.0, 360.0, &zeros).is_none());
    }

    #[test]
    fn progress_is_clamped_and_never_divides_by_zero() {
        assert_eq!(scroll_progress(0.0, 2000.0, 800.0), 0.0);
        assert_eq!(scroll_progress(1200.0, 2000.0, 800.0), 100.0);
        assert_eq!(scroll_progress(600.0, 2000.0, 800.0), 50.0);
        // Overscroll stays clamped.
        assert_eq!(scroll_progress(5000.0, 2000.0, 800.0), 100.0);
        // No scrollable overflow: ratio is 0, not NaN or infinity.
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(10.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn tooltip_offset_applies_the_fixed_bias() {
        let (x, y) = tooltip_offset(340.0, 220.0, 100.0, 150.0);
        assert_eq!(x, 340.0 - 100.0 + 20.0);
        assert_eq!(y, 220.0 - 150.0 - 60.0);
    }

    #[test]
    fn ease_out_cubic_hits_its_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
        // Out-of-range inputs are clamped.
        assert_eq!(ease_out_cubic(-1.0), 0.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }
}
