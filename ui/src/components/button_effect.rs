use gpui::{Div, Stateful, prelude::*, rgb};

/// Hover/press feedback for a clickable element: lighten on hover,
/// darken while pressed, relative to its resting background.
pub fn apply(button: Stateful<Div>, base_bg: u32) -> Stateful<Div> {
    apply_custom(button, mix(base_bg, 0.18), mix(base_bg, -0.18))
}

pub fn apply_custom(button: Stateful<Div>, hover_bg: u32, active_bg: u32) -> Stateful<Div> {
    button
        .cursor_pointer()
        .hover(move |s| s.bg(rgb(hover_bg)))
        .active(move |s| s.bg(rgb(active_bg)))
        .on_hover(|_, window, _| window.refresh())
}

/// Moves each channel toward white (positive amount) or black
/// (negative amount).
fn mix(color: u32, amount: f32) -> u32 {
    let mix_channel = |channel: u32| -> u32 {
        let channel = channel as f32;
        let mixed = if amount >= 0.0 {
            channel + (255.0 - channel) * amount.min(1.0)
        } else {
            channel * (1.0 + amount.max(-1.0))
        };
        mixed.round().clamp(0.0, 255.0) as u32
    };
    let r = mix_channel((color >> 16) & 0xff);
    let g = mix_channel((color >> 8) & 0xff);
    let b = mix_channel(color & 0xff);
    (r << 16) | (g << 8) | b
}

#[cfg(test)]
mod tests {
    use super::mix;

    #[test]
    fn mix_moves_toward_white_or_black() {
        assert_eq!(mix(0x000000, 1.0), 0xffffff);
        assert_eq!(mix(0xffffff, -1.0), 0x000000);
        assert_eq!(mix(0x808080, 0.0), 0x808080);
        let lighter = mix(0x2d3339, 0.18);
        let darker = mix(0x2d3339, -0.18);
        assert!(lighter > 0x2d3339);
        assert!(darker < 0x2d3339);
    }
}
