use gpui::{Div, div, prelude::*, px, rgb};
use memoir_core::tooltip_offset;

use super::PageView;

impl PageView {
    /// Tooltip origin relative to the map panel: the hovered marker's
    /// captured position minus the map's, plus the fixed bias.
    pub(super) fn tooltip_origin(&self) -> Option<(f32, f32)> {
        let idx = self.hover_marker?;
        let marker = self.marker_bounds.get(idx)?;
        let map = self.map_bounds?;
        Some(tooltip_offset(
            f32::from(marker.origin.x),
            f32::from(marker.origin.y),
            f32::from(map.origin.x),
            f32::from(map.origin.y),
        ))
    }

    pub(super) fn tooltip_overlay(&self) -> Option<Div> {
        let idx = self.hover_marker?;
        let marker = self.content.markers.get(idx)?;
        let (x, y) = self.tooltip_origin()?;

        Some(
            div()
                .absolute()
                .left(px(x))
                .top(px(y))
                .bg(rgb(0x1b1f23))
                .border_1()
                .border_color(rgb(0x3a4148))
                .rounded_md()
                .shadow_lg()
                .px_3()
                .py_2()
                .text_xs()
                .flex()
                .flex_col()
                .gap_1()
                .child(
                    div()
                        .text_color(rgb(0xffb547))
                        .child(marker.name.clone()),
                )
                .child(
                    div()
                        .text_color(rgb(0x9aa4ad))
                        .child(marker.note.clone()),
                ),
        )
    }
}
