mod data;
mod error;
mod layout;
mod reveal;
mod typewriter;
mod types;

pub use error::ContentError;
pub use layout::{
    BAR_GAP, BarRect, CHART_PADDING, PIE_HUB_RADIUS, PIE_RADIUS, TOOLTIP_DX, TOOLTIP_DY, Wedge,
    bar_layout, clamp_offset, ease_out_cubic, max_scroll, scroll_progress, tooltip_offset,
    wedge_spans,
};
pub use reveal::{
    OnceTrigger, QUOTE_THRESHOLD, RevealSet, TIMELINE_BOTTOM_MARGIN, TIMELINE_THRESHOLD, Viewport,
    visible_fraction,
};
pub use typewriter::{TYPE_DELAY_MS, Typewriter};
pub use types::{BarEntry, MapMarker, PageContent, PieSlice, Section, TimelineEvent};
