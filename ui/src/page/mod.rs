use std::time::Duration;

use gpui::{App, Application, Bounds, WindowBounds, WindowOptions, prelude::*, px, size};
use memoir_core::{PageContent, Section, TYPE_DELAY_MS};

mod canvas;
mod view;

pub use view::PageView;

#[derive(Clone)]
pub struct PageMeta {
    pub type_delay: Duration,
    pub start_section: Option<Section>,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(TYPE_DELAY_MS),
            start_section: None,
        }
    }
}

pub fn launch_page(content: PageContent, meta: PageMeta) {
    Application::new().run(move |cx: &mut App| {
        let bounds = Bounds::centered(None, size(px(1200.), px(800.)), cx);
        cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                focus: true,
                ..Default::default()
            },
            move |_, cx| cx.new(|_| PageView::new(content.clone(), meta.clone())),
        )
        .expect("failed to open window");
        cx.activate(true);
    });
}
