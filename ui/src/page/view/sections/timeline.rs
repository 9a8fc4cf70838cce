use gpui::{Bounds, Context, Div, Pixels, div, prelude::*, px, rgb};

use crate::page::view::PageView;
use crate::page::view::widgets::section_container;

/// Timeline entries stay invisible until the reveal set marks them; the
/// transition is one-way, so scrolling back never hides an entry again.
pub(crate) fn timeline_section(view: &mut PageView, cx: &mut Context<PageView>) -> Div {
    let track_items = cx.processor(|this: &mut PageView, bounds: Vec<Bounds<Pixels>>, _, _| {
        this.item_bounds = bounds;
    });

    let mut list = div()
        .flex()
        .flex_col()
        .gap_4()
        .w(px(640.))
        .on_children_prepainted(track_items);
    for (idx, event) in view.content.timeline.iter().enumerate() {
        let revealed = view.reveals.is_revealed(idx);
        list = list.child(
            div()
                .flex()
                .gap_4()
                .p_4()
                .rounded_md()
                .bg(rgb(0x2d3339))
                .border_1()
                .border_color(rgb(0x3a4148))
                .opacity(if revealed { 1.0 } else { 0.0 })
                .child(
                    div()
                        .w(px(64.))
                        .text_sm()
                        .text_color(rgb(0x00c7be))
                        .child(event.year.clone()),
                )
                .child(
                    div()
                        .flex()
                        .flex_col()
                        .gap_1()
                        .child(
                            div()
                                .text_sm()
                                .text_color(gpui::white())
                                .child(event.title.clone()),
                        )
                        .child(
                            div()
                                .text_xs()
                                .text_color(rgb(0x9aa4ad))
                                .child(event.detail.clone()),
                        ),
                ),
        );
    }

    section_container("Timeline", list)
}

#[cfg(test)]
mod tests {
    use gpui::TestAppContext;
    use memoir_core::PageContent;

    use crate::page::{PageMeta, PageView};

    #[gpui::test]
    async fn items_reveal_on_scroll_and_stay_revealed(cx: &TestAppContext) {
        let mut cx = cx.clone();
        let (page, cx) = cx
            .add_window_view(|_, _| PageView::new(PageContent::default(), PageMeta::default()));
        cx.refresh().expect("refresh");
        cx.run_until_parked();

        // The first entry sits just below the hero, inside the initial
        // viewport, so it reveals without any scrolling.
        let (first, last, count) = page.update(cx, |view, _| {
            (
                view.reveals.is_revealed(0),
                view.reveals.is_revealed(view.content.timeline.len() - 1),
                view.content.timeline.len(),
            )
        });
        assert!(first, "first timeline entry should reveal on load");
        assert!(!last, "last timeline entry should still be below the fold");

        // Sweep the viewport down the whole page in steps, as a reader
        // would, letting layout settle at each stop.
        let content_h = page.update(cx, |view, _| view.content_height());
        let mut offset = 0.0;
        while offset < content_h {
            offset += 150.0;
            page.update(cx, |view, cx| {
                view.scroll_offset = memoir_core::clamp_offset(
                    offset,
                    view.content_height(),
                    view.viewport_height(),
                );
                cx.notify();
            });
            cx.refresh().expect("refresh");
            cx.run_until_parked();
        }

        let revealed = page.update(cx, |view, _| view.reveals.revealed_count());
        assert_eq!(revealed, count, "all entries reveal after a full scroll");

        // Scrolling back up never un-reveals.
        page.update(cx, |view, cx| {
            view.scroll_offset = 0.0;
            cx.notify();
        });
        cx.refresh().expect("refresh");
        cx.run_until_parked();
        let revealed = page.update(cx, |view, _| view.reveals.revealed_count());
        assert_eq!(revealed, count);
    }
}
