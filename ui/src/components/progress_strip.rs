use gpui::{Div, div, linear_color_stop, linear_gradient, prelude::*, px, relative, rgb};

/// The 3px reading-progress strip pinned to the window's top edge.
/// `ratio` is a percentage in [0, 100] of the scrollable distance.
pub fn progress_strip(ratio: f32) -> Div {
    let fraction = (ratio / 100.0).clamp(0.0, 1.0);
    div()
        .absolute()
        .top_0()
        .left_0()
        .h(px(3.))
        .w(relative(fraction))
        .bg(linear_gradient(
            90.,
            linear_color_stop(rgb(0x00c7be), 0.),
            linear_color_stop(rgb(0x2ca7e0), 1.),
        ))
}
