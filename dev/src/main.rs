use std::time::Duration;

use gpui::{
    App, Application, Bounds, Context, MouseButton, MouseDownEvent, Render, SharedString, Window,
    WindowBounds, WindowOptions, div, prelude::*, px, rgb, size,
};
use memoir_core::PageContent;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use ui::{PageMeta, PageView, logging::log_page};

const WINDOW_WIDTH: f32 = 1200.0;
const WINDOW_HEIGHT: f32 = 800.0;
/// Pixels the sweep moves the page per frame.
const SWEEP_STEP: f32 = 6.0;
const FRAME_MS: u64 = 16;

/// Harness for eyeballing the page animations: drives an auto-scroll
/// sweep from top to bottom and logs reveal/typing milestones.
struct SweepView {
    page: gpui::Entity<PageView>,
    sweeping: bool,
    status: SharedString,
}

impl SweepView {
    fn new(cx: &mut Context<Self>) -> Self {
        let page = cx.new(|_| {
            PageView::new(
                PageContent::default(),
                PageMeta {
                    // Fast typing so a full sweep sees the quote finish.
                    type_delay: Duration::from_millis(10),
                    start_section: None,
                },
            )
        });
        Self {
            page,
            sweeping: false,
            status: SharedString::from("Idle"),
        }
    }

    fn start_sweep(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.sweeping {
            return;
        }
        self.sweeping = true;
        self.status = SharedString::from("Sweeping...");
        log_page(format!("[{}] sweep started", timestamp()));
        window.refresh();

        let harness = cx.entity();
        let page = self.page.clone();
        window
            .spawn(cx, async move |async_cx| {
                loop {
                    async_cx
                        .background_executor()
                        .timer(Duration::from_millis(FRAME_MS))
                        .await;
                    let done = async_cx
                        .update(|window, app| {
                            let done = page.update(app, |page, _| {
                                page.scroll_by(SWEEP_STEP);
                                page.at_bottom()
                            });
                            window.refresh();
                            done
                        })
                        .unwrap_or(true);
                    if done {
                        break;
                    }
                }

                let _ = async_cx.update(|window, app| {
                    harness.update(app, |view, cx| {
                        let (revealed, typed, progress) = view.page.update(cx, |page, _| {
                            (
                                page.revealed_count(),
                                page.typed_text().len(),
                                page.progress_percent(),
                            )
                        });
                        view.sweeping = false;
                        view.status = SharedString::from(format!(
                            "Done: {revealed} reveals, {typed} chars typed, {progress:.0}%"
                        ));
                        log_page(format!(
                            "[{}] sweep finished: revealed={revealed} typed={typed} progress={progress:.0}",
                            timestamp()
                        ));
                    });
                    window.refresh();
                });
            })
            .detach();
    }
}

impl Render for SweepView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let on_click = cx.listener(|view: &mut SweepView, _: &MouseDownEvent, window, cx| {
            view.start_sweep(window, cx);
        });

        let controls = div()
            .flex()
            .items_center()
            .gap_3()
            .p_3()
            .bg(rgb(0x1b1f23))
            .border_b_1()
            .border_color(rgb(0x3a4148))
            .child(
                div()
                    .px_3()
                    .py_1()
                    .rounded_md()
                    .bg(rgb(0x2d3339))
                    .text_sm()
                    .text_color(gpui::white())
                    .on_mouse_down(MouseButton::Left, on_click)
                    .child("Start sweep"),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(rgb(0x9aa4ad))
                    .child(self.status.clone()),
            );

        div()
            .flex()
            .flex_col()
            .w_full()
            .h_full()
            .bg(rgb(0x24292d))
            .child(controls)
            .child(div().flex_1().w_full().child(self.page.clone()))
    }
}

fn timestamp() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "-".to_string())
}

fn main() {
    Application::new().run(|cx: &mut App| {
        let bounds = Bounds::centered(None, size(px(WINDOW_WIDTH), px(WINDOW_HEIGHT)), cx);
        cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                focus: true,
                ..Default::default()
            },
            |_, cx| cx.new(SweepView::new),
        )
        .expect("open window");
        cx.activate(true);
    });
}
