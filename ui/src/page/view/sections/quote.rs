use gpui::{Div, div, prelude::*, px, rgb};

use crate::components::caret::typing_caret;
use crate::page::view::PageView;
use crate::page::view::widgets::section_container;

pub(crate) fn quote_section(view: &PageView) -> Div {
    let typed = view.typewriter.visible().to_string();
    let typing = view.typewriter.started() && !view.typewriter.is_done();

    let mut line = div()
        .flex()
        .items_end()
        .justify_center()
        .max_w(px(720.))
        .min_h(px(96.))
        .child(
            div()
                .text_lg()
                .italic()
                .text_color(gpui::white())
                .child(typed),
        );
    if typing {
        line = line.child(typing_caret(24.0, rgb(0xffb547)));
    }

    let body = div()
        .flex()
        .flex_col()
        .items_center()
        .gap_3()
        .child(line)
        .child(
            div()
                .text_xs()
                .text_color(rgb(0x9aa4ad))
                .child(view.content.quote_attribution.clone()),
        );

    section_container("In his words", body)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use gpui::TestAppContext;
    use memoir_core::PageContent;

    use crate::page::{PageMeta, PageView};

    #[gpui::test]
    async fn quote_types_out_once_visible(cx: &TestAppContext) {
        let mut cx = cx.clone();
        let mut content = PageContent::default();
        content.quote = "We remember".to_string();
        // Drop the timeline so the quote section sits inside the first
        // viewport and triggers without scrolling.
        content.timeline.clear();

        let meta = PageMeta {
            type_delay: Duration::from_millis(50),
            start_section: None,
        };
        let (page, cx) = cx.add_window_view(|_, _| PageView::new(content, meta));
        cx.refresh().expect("refresh");
        cx.run_until_parked();
        // One more frame so the trigger discovered during prepaint
        // spawns the typing loop.
        cx.refresh().expect("refresh");
        cx.run_until_parked();

        assert!(page.update(cx, |view, _| view.typewriter.started()));

        // One character per 50ms tick, plus slack at the end.
        for _ in 0..16 {
            cx.executor().advance_clock(Duration::from_millis(50));
            cx.run_until_parked();
        }

        let typed = page.update(cx, |view, _| view.typed_text().to_string());
        assert_eq!(typed, "We remember");
        assert!(page.update(cx, |view, _| view.typewriter.is_done()));
    }

    #[gpui::test]
    async fn repeated_visibility_never_restarts_the_run(cx: &TestAppContext) {
        let mut cx = cx.clone();
        let mut content = PageContent::default();
        content.quote = "Macondo".to_string();
        content.timeline.clear();

        let meta = PageMeta {
            type_delay: Duration::from_millis(50),
            start_section: None,
        };
        let (page, cx) = cx.add_window_view(|_, _| PageView::new(content, meta));
        cx.refresh().expect("refresh");
        cx.run_until_parked();
        cx.refresh().expect("refresh");
        cx.run_until_parked();

        for _ in 0..10 {
            cx.executor().advance_clock(Duration::from_millis(50));
            cx.run_until_parked();
        }
        assert!(page.update(cx, |view, _| view.typewriter.is_done()));

        // Scroll away and back; the trigger and the typewriter both
        // refuse a second run, so the text stays complete and stable.
        page.update(cx, |view, cx| {
            view.scroll_offset = 400.0;
            cx.notify();
        });
        cx.refresh().expect("refresh");
        cx.run_until_parked();
        page.update(cx, |view, cx| {
            view.scroll_offset = 0.0;
            cx.notify();
        });
        cx.refresh().expect("refresh");
        cx.run_until_parked();
        cx.executor().advance_clock(Duration::from_millis(500));
        cx.run_until_parked();

        let typed = page.update(cx, |view, _| view.typed_text().to_string());
        assert_eq!(typed, "Macondo");
    }
}
