use gpui::{
    Bounds, Context, Pixels, Render, ScrollWheelEvent, Window, div, prelude::*, px, rgb,
};
use memoir_core::Section;

use super::sections::{charts_section, footer, hero, map_section, quote_section, timeline_section};
use super::state::{PageView, Slot};
use crate::components::progress_strip::progress_strip;

impl Render for PageView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        // Deferred work that needed a completed layout pass.
        if self.pending_start_typing {
            self.pending_start_typing = false;
            self.start_typing(window, cx);
        }
        if let Some(section) = self.pending_anchor {
            if self.content_bounds.is_some() {
                // Bounds are known; a target that never rendered is
                // dropped silently by scroll_to_section.
                self.pending_anchor = None;
                self.scroll_to_section(section, window, cx);
            }
        }

        let ratio = self.progress_ratio();

        self.slot_order.clear();
        self.slot_order.push(Slot::Hero);
        let mut column = div().flex().flex_col().w_full().child(hero(self, cx));
        if !self.content.timeline.is_empty() {
            self.slot_order.push(Slot::Section(Section::Timeline));
            column = column.child(timeline_section(self, cx));
        }
        if !self.content.quote.is_empty() {
            self.slot_order.push(Slot::Section(Section::Quote));
            column = column.child(quote_section(self));
        }
        if !self.content.markers.is_empty() {
            self.slot_order.push(Slot::Section(Section::Map));
            column = column.child(map_section(self, cx));
        }
        if !self.content.languages.is_empty() || !self.content.sales.is_empty() {
            self.slot_order.push(Slot::Section(Section::Charts));
            column = column.child(charts_section(&self.content));
        }
        self.slot_order.push(Slot::Footer);
        column = column.child(footer(&self.content));

        let track_slots = cx.processor(|this: &mut Self, bounds: Vec<Bounds<Pixels>>, _, _| {
            this.slot_bounds = bounds;
        });
        let content = column
            .absolute()
            .left_0()
            .right_0()
            .top(px(-self.scroll_offset))
            .on_children_prepainted(track_slots);

        let track_content = cx.processor(|this: &mut Self, bounds: Vec<Bounds<Pixels>>, _, _| {
            if let Some(content_bounds) = bounds.first() {
                this.content_bounds = Some(*content_bounds);
            }
        });
        let handle_scroll = cx.listener(|this: &mut Self, event: &ScrollWheelEvent, window, _| {
            this.handle_scroll(event, window);
        });
        let viewport = div()
            .flex_1()
            .w_full()
            .relative()
            .overflow_hidden()
            .on_scroll_wheel(handle_scroll)
            .on_children_prepainted(track_content)
            .child(content);

        let track_root = cx.processor(
            |this: &mut Self, bounds: Vec<Bounds<Pixels>>, window: &mut Window, _| {
                if let Some(viewport_bounds) = bounds.first() {
                    this.viewport_bounds = Some(*viewport_bounds);
                }
                this.finalize_layout(window);
            },
        );

        div()
            .flex()
            .flex_col()
            .w_full()
            .h_full()
            .relative()
            .bg(rgb(0x24292d))
            .text_color(gpui::white())
            .on_children_prepainted(track_root)
            .child(viewport)
            .child(progress_strip(ratio))
    }
}
