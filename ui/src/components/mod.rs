pub mod button_effect;
pub mod caret;
pub mod progress_strip;
