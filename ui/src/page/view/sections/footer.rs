use gpui::{Div, div, prelude::*, rgb};
use memoir_core::PageContent;

pub(crate) fn footer(content: &PageContent) -> Div {
    div()
        .flex()
        .items_center()
        .justify_center()
        .p_6()
        .border_t_1()
        .border_color(rgb(0x3a4148))
        .text_xs()
        .text_color(rgb(0x666666))
        .child(format!(
            "{}, {} to {}",
            content.title,
            content
                .timeline
                .first()
                .map(|e| e.year.as_str())
                .unwrap_or("then"),
            content
                .timeline
                .last()
                .map(|e| e.year.as_str())
                .unwrap_or("now"),
        ))
}
