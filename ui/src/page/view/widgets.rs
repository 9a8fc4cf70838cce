use gpui::{Div, SharedString, div, prelude::*, rgb};

pub(super) fn section_heading(label: impl Into<SharedString>) -> Div {
    let label = label.into();
    div()
        .text_xl()
        .text_color(gpui::white())
        .child(label)
}

/// Shared shell for a page section: centered column with a heading.
pub(super) fn section_container(heading: impl Into<SharedString>, body: impl IntoElement) -> Div {
    div()
        .flex()
        .flex_col()
        .items_center()
        .gap_6()
        .px_8()
        .py_12()
        .child(section_heading(heading))
        .child(body)
}

pub(super) fn chart_card(title: impl Into<SharedString>, body: impl IntoElement) -> Div {
    let title = title.into();
    div()
        .flex()
        .flex_col()
        .gap_3()
        .p_4()
        .rounded_md()
        .bg(rgb(0x2d3339))
        .border_1()
        .border_color(rgb(0x3a4148))
        .child(
            div()
                .text_sm()
                .text_color(gpui::white())
                .child(title),
        )
        .child(body)
}
