use gpui::{Bounds, Context, Div, Pixels, SharedString, div, prelude::*, px, rgb};

use crate::page::view::PageView;
use crate::page::view::widgets::section_container;

const MAP_WIDTH: f32 = 720.0;
const MAP_HEIGHT: f32 = 360.0;
const POINT_SIZE: f32 = 14.0;

/// The journeys panel: markers placed at fractional coordinates, each
/// pairing with its tooltip. The tooltip overlay is positioned from the
/// bounds captured at paint time.
pub(crate) fn map_section(view: &mut PageView, cx: &mut Context<PageView>) -> Div {
    let track_panel = cx.processor(|this: &mut PageView, bounds: Vec<Bounds<Pixels>>, _, _| {
        if let Some(panel_bounds) = bounds.first() {
            this.map_bounds = Some(*panel_bounds);
        }
    });
    let track_markers = cx.processor(|this: &mut PageView, bounds: Vec<Bounds<Pixels>>, _, _| {
        this.marker_bounds = bounds;
    });

    let mut marker_layer = div()
        .absolute()
        .top_0()
        .left_0()
        .w_full()
        .h_full()
        .on_children_prepainted(track_markers);
    for (idx, marker) in view.content.markers.iter().enumerate() {
        let hover = cx.listener(move |this: &mut PageView, hovered: &bool, window, _| {
            this.set_marker_hover(idx, *hovered);
            window.refresh();
        });
        let point_id: SharedString = format!("map-point-{idx}").into();
        marker_layer = marker_layer.child(
            div()
                .absolute()
                .left(px(marker.x * MAP_WIDTH - POINT_SIZE * 0.5))
                .top(px(marker.y * MAP_HEIGHT - POINT_SIZE * 0.5))
                .w(px(POINT_SIZE))
                .h(px(POINT_SIZE))
                .rounded_full()
                .bg(rgb(0x00c7be))
                .border_1()
                .border_color(gpui::white())
                .cursor_pointer()
                .id(point_id)
                .on_hover(hover)
                .debug_selector(|| format!("map-point-{idx}")),
        );
    }

    let mut panel = div()
        .relative()
        .w(px(MAP_WIDTH))
        .h(px(MAP_HEIGHT))
        .rounded_md()
        .bg(rgb(0x1b1f23))
        .border_1()
        .border_color(rgb(0x3a4148))
        .child(marker_layer);
    if let Some(tip) = view.tooltip_overlay() {
        panel = panel.child(tip);
    }

    let wrapper = div().on_children_prepainted(track_panel).child(panel);
    section_container("Journeys", wrapper)
}

#[cfg(test)]
mod tests {
    use gpui::TestAppContext;
    use memoir_core::{PageContent, TOOLTIP_DX, TOOLTIP_DY};

    use crate::page::{PageMeta, PageView};

    #[gpui::test]
    async fn hovered_marker_positions_its_tooltip(cx: &TestAppContext) {
        let mut cx = cx.clone();
        let (page, cx) = cx
            .add_window_view(|_, _| PageView::new(PageContent::default(), PageMeta::default()));
        cx.refresh().expect("refresh");
        cx.run_until_parked();

        let (origin, expected) = page.update(cx, |view, _| {
            assert_eq!(view.marker_bounds.len(), view.content.markers.len());
            view.set_marker_hover(1, true);

            let marker = view.marker_bounds[1];
            let map = view.map_bounds.expect("map bounds captured");
            let expected = (
                f32::from(marker.origin.x) - f32::from(map.origin.x) + TOOLTIP_DX,
                f32::from(marker.origin.y) - f32::from(map.origin.y) + TOOLTIP_DY,
            );
            (view.tooltip_origin().expect("tooltip origin"), expected)
        });
        assert_eq!(origin, expected);

        // Leaving a different marker does not disturb the newer hover.
        let still_hovered = page.update(cx, |view, _| {
            view.set_marker_hover(0, false);
            view.tooltip_origin().is_some()
        });
        assert!(still_hovered);

        // Leaving the hovered marker hides the tooltip.
        let cleared = page.update(cx, |view, _| {
            view.set_marker_hover(1, false);
            view.tooltip_origin()
        });
        assert!(cleared.is_none());
    }
}
