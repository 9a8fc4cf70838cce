use gpui::{Context, Div, MouseButton, MouseDownEvent, SharedString, div, prelude::*, rgb};
use memoir_core::Section;

use crate::components::button_effect;
use crate::page::view::PageView;

/// Title block with the anchor navigation. Every section gets a link
/// whether or not it rendered; a link whose target is missing simply
/// does nothing when clicked.
pub(crate) fn hero(view: &mut PageView, cx: &mut Context<PageView>) -> Div {
    let mut nav = div().flex().gap_2();
    for section in Section::ALL {
        let handler = cx.listener(move |this: &mut PageView, _: &MouseDownEvent, window, cx| {
            this.scroll_to_section(section, window, cx);
        });
        let link_id: SharedString = format!("nav-link-{}", section.slug()).into();
        nav = nav.child(button_effect::apply(
            div()
                .px_3()
                .py_1()
                .rounded_md()
                .bg(rgb(0x2d3339))
                .border_1()
                .border_color(rgb(0x3a4148))
                .text_sm()
                .text_color(rgb(0x9aa4ad))
                .on_mouse_down(MouseButton::Left, handler)
                .child(section.label())
                .id(link_id)
                .debug_selector(|| format!("nav-link-{}", section.slug())),
            0x2d3339,
        ));
    }

    div()
        .flex()
        .flex_col()
        .items_center()
        .gap_4()
        .px_8()
        .pt_16()
        .pb_10()
        .child(
            div()
                .text_2xl()
                .text_color(gpui::white())
                .child(view.content.title.clone()),
        )
        .child(
            div()
                .text_sm()
                .text_color(rgb(0x9aa4ad))
                .child(view.content.subtitle.clone()),
        )
        .child(nav)
}

#[cfg(test)]
mod tests {
    use gpui::{Modifiers, TestAppContext};
    use memoir_core::{PageContent, Section, clamp_offset};

    use crate::page::{PageMeta, PageView};

    #[gpui::test]
    async fn nav_click_scrolls_to_the_section(cx: &TestAppContext) {
        let mut cx = cx.clone();
        let (page, cx) = cx
            .add_window_view(|_, _| PageView::new(PageContent::default(), PageMeta::default()));
        cx.refresh().expect("refresh");
        cx.run_until_parked();

        let link_bounds = cx
            .debug_bounds("nav-link-charts")
            .expect("nav-link-charts bounds");
        cx.simulate_click(link_bounds.center(), Modifiers::none());

        // Let the 400ms anchor animation play out frame by frame.
        for _ in 0..30 {
            cx.executor()
                .advance_clock(std::time::Duration::from_millis(16));
            cx.run_until_parked();
        }

        let (offset, expected) = page.update(cx, |view, _| {
            let (top, _) = view
                .section_geometry(Section::Charts)
                .expect("charts section bounds");
            let expected = clamp_offset(top, view.content_height(), view.viewport_height());
            (view.scroll_offset(), expected)
        });
        assert!(offset > 0.0, "page did not scroll (offset {offset})");
        assert!(
            (offset - expected).abs() < 1.0,
            "offset {offset} != target {expected}"
        );
    }

    #[gpui::test]
    async fn nav_click_without_a_target_is_ignored(cx: &TestAppContext) {
        let mut cx = cx.clone();
        let mut content = PageContent::default();
        content.markers.clear();

        let (page, cx) =
            cx.add_window_view(|_, _| PageView::new(content, PageMeta::default()));
        cx.refresh().expect("refresh");
        cx.run_until_parked();

        let link_bounds = cx
            .debug_bounds("nav-link-map")
            .expect("nav-link-map bounds");
        cx.simulate_click(link_bounds.center(), Modifiers::none());
        for _ in 0..30 {
            cx.executor()
                .advance_clock(std::time::Duration::from_millis(16));
            cx.run_until_parked();
        }

        let offset = page.update(cx, |view, _| view.scroll_offset());
        assert_eq!(offset, 0.0);
    }
}
