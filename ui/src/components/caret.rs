use std::{panic::Location, time::Duration};

use gpui::{Animation, AnimationExt, Div, ElementId, Rgba, div, prelude::*, px};

/// Blinking text caret shown after the typed prefix while the quote is
/// still being revealed.
#[track_caller]
pub fn typing_caret(height: f32, color: Rgba) -> impl IntoElement {
    let animation = Animation::new(Duration::from_millis(900)).repeat();
    let id = ElementId::CodeLocation(*Location::caller());

    div()
        .w(px(2.))
        .h(px(height))
        .bg(color)
        .with_animation(id, animation, |this: Div, delta| {
            this.opacity(blink_opacity(delta.clamp(0.0, 1.0)))
        })
}

fn blink_opacity(delta: f32) -> f32 {
    if delta < 0.5 { 1.0 } else { 0.0 }
}
