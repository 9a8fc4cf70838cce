use gpui::{ScrollWheelEvent, Window, px};
use memoir_core::clamp_offset;

use super::PageView;

impl PageView {
    pub(super) fn handle_scroll(&mut self, event: &ScrollWheelEvent, window: &mut Window) {
        let delta = event.delta.pixel_delta(px(16.0));
        let dy = f32::from(delta.y);
        if dy.abs() < f32::EPSILON {
            return;
        }
        // A manual scroll takes over from any running anchor animation.
        self.scroll_anim += 1;
        self.scroll_offset = clamp_offset(
            self.scroll_offset - dy,
            self.content_height(),
            self.viewport_height(),
        );
        window.refresh();
    }
}
