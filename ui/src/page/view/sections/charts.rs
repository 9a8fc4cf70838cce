use gpui::{Div, div, prelude::*, px, rgb};
use memoir_core::{CHART_PADDING, PageContent, bar_layout};

use crate::page::canvas::{bar_canvas, pie_canvas};
use crate::page::view::widgets::{chart_card, section_container};

const PIE_SIZE: f32 = 260.0;
const BAR_WIDTH: f32 = 460.0;
const BAR_HEIGHT: f32 = 300.0;

pub(crate) fn charts_section(content: &PageContent) -> Div {
    let mut row = div().flex().flex_wrap().justify_center().gap_8().items_start();
    if !content.languages.is_empty() {
        row = row.child(languages_card(content));
    }
    if !content.sales.is_empty() {
        row = row.child(sales_card(content));
    }
    section_container("By the numbers", row)
}

fn languages_card(content: &PageContent) -> Div {
    let surface = pie_canvas(content.languages.clone())
        .w(px(PIE_SIZE))
        .h(px(PIE_SIZE));

    // The labels over the hub disc; the disc itself is painted.
    let hub_labels = div()
        .absolute()
        .top_0()
        .left_0()
        .w_full()
        .h_full()
        .flex()
        .flex_col()
        .items_center()
        .justify_center()
        .child(div().text_lg().text_color(gpui::white()).child("40+"))
        .child(
            div()
                .text_xs()
                .text_color(rgb(0x9aa4ad))
                .child("Languages"),
        );

    let chart = div()
        .relative()
        .w(px(PIE_SIZE))
        .h(px(PIE_SIZE))
        .child(surface)
        .child(hub_labels);

    let mut legend = div().flex().flex_col().gap_2();
    for slice in &content.languages {
        legend = legend.child(
            div()
                .flex()
                .items_center()
                .gap_2()
                .text_xs()
                .text_color(rgb(0x9aa4ad))
                .child(div().w(px(10.)).h(px(10.)).rounded_sm().bg(rgb(slice.color)))
                .child(slice.label.clone())
                .child(format!("{:.0}%", slice.value)),
        );
    }

    chart_card(
        "Translated languages",
        div().flex().gap_6().items_center().child(chart).child(legend),
    )
}

fn sales_card(content: &PageContent) -> Div {
    let surface = bar_canvas(content.sales.clone())
        .w(px(BAR_WIDTH))
        .h(px(BAR_HEIGHT));

    let mut overlay = div().absolute().top_0().left_0().w_full().h_full();
    if let Some(bars) = bar_layout(BAR_WIDTH, BAR_HEIGHT, &content.sales) {
        for (bar, entry) in bars.iter().zip(&content.sales) {
            overlay = overlay.child(
                div()
                    .absolute()
                    .left(px(bar.x))
                    .top(px(bar.y - 24.0))
                    .w(px(bar.width))
                    .flex()
                    .justify_center()
                    .text_sm()
                    .text_color(rgb(0xffb547))
                    .child(format!("{:.0}M", entry.value)),
            );
            overlay = overlay.child(
                div()
                    .absolute()
                    .left(px(bar.x))
                    .top(px(BAR_HEIGHT - CHART_PADDING + 8.0))
                    .w(px(bar.width))
                    .flex()
                    .justify_center()
                    .text_xs()
                    .text_color(rgb(0x9aa4ad))
                    .child(entry.label.clone()),
            );
        }
    }

    let chart = div()
        .relative()
        .w(px(BAR_WIDTH))
        .h(px(BAR_HEIGHT))
        .child(surface)
        .child(overlay);

    chart_card("Copies sold by decade", chart)
}
