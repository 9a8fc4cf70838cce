mod charts;
mod footer;
mod hero;
mod map;
mod quote;
mod timeline;

pub(super) use charts::charts_section;
pub(super) use footer::footer;
pub(super) use hero::hero;
pub(super) use map::map_section;
pub(super) use quote::quote_section;
pub(super) use timeline::timeline_section;
