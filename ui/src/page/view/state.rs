use std::time::Duration;

use gpui::{Bounds, Context, Pixels, Window};
use memoir_core::{
    OnceTrigger, PageContent, QUOTE_THRESHOLD, RevealSet, Section, TIMELINE_BOTTOM_MARGIN,
    TIMELINE_THRESHOLD, Typewriter, Viewport, clamp_offset, ease_out_cubic, scroll_progress,
    visible_fraction,
};

use super::super::PageMeta;
use crate::logging::log_page;

/// Frames in one anchor-scroll animation (~400ms at 16ms per frame).
const ANCHOR_FRAMES: u32 = 25;
const ANCHOR_FRAME_MS: u64 = 16;

/// Which child of the content column a prepainted bounds entry belongs
/// to. Rebuilt on every render to mirror the children actually emitted,
/// so skipped (empty) sections never shift the mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Slot {
    Hero,
    Section(Section),
    Footer,
}

pub struct PageView {
    pub(super) content: PageContent,
    pub(super) type_delay: Duration,

    pub(super) scroll_offset: f32,
    /// Generation counter; bumping it cancels the running anchor
    /// animation on its next frame.
    pub(super) scroll_anim: u64,

    // Geometry captured during prepaint, in window coordinates.
    pub(super) viewport_bounds: Option<Bounds<Pixels>>,
    pub(super) content_bounds: Option<Bounds<Pixels>>,
    pub(super) slot_order: Vec<Slot>,
    pub(super) slot_bounds: Vec<Bounds<Pixels>>,
    pub(super) item_bounds: Vec<Bounds<Pixels>>,
    pub(super) map_bounds: Option<Bounds<Pixels>>,
    pub(super) marker_bounds: Vec<Bounds<Pixels>>,

    pub(super) reveals: RevealSet,
    pub(super) quote_trigger: OnceTrigger,
    pub(super) typewriter: Typewriter,
    pub(super) hover_marker: Option<usize>,

    // Work discovered during prepaint that needs a window + entity
    // context; consumed at the top of the next render pass.
    pub(super) pending_start_typing: bool,
    pub(super) pending_anchor: Option<Section>,
}

impl PageView {
    pub fn new(content: PageContent, meta: PageMeta) -> Self {
        let reveals = RevealSet::new(
            content.timeline.len(),
            TIMELINE_THRESHOLD,
            TIMELINE_BOTTOM_MARGIN,
        );
        let typewriter = Typewriter::new(content.quote.clone());
        Self {
            content,
            type_delay: meta.type_delay,
            scroll_offset: 0.0,
            scroll_anim: 0,
            viewport_bounds: None,
            content_bounds: None,
            slot_order: Vec::new(),
            slot_bounds: Vec::new(),
            item_bounds: Vec::new(),
            map_bounds: None,
            marker_bounds: Vec::new(),
            reveals,
            quote_trigger: OnceTrigger::new(QUOTE_THRESHOLD),
            typewriter,
            hover_marker: None,
            pending_start_typing: false,
            pending_anchor: meta.start_section,
        }
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn typed_text(&self) -> &str {
        self.typewriter.visible()
    }

    /// Manual scroll by a pixel delta, clamped to the page. Used by the
    /// dev sweep harness; wheel input goes through `handle_scroll`.
    pub fn scroll_by(&mut self, delta: f32) {
        self.scroll_anim += 1;
        self.scroll_offset = clamp_offset(
            self.scroll_offset + delta,
            self.content_height(),
            self.viewport_height(),
        );
    }

    pub fn at_bottom(&self) -> bool {
        let max = memoir_core::max_scroll(self.content_height(), self.viewport_height());
        self.content_bounds.is_some() && self.scroll_offset >= max - 0.5
    }

    pub fn progress_percent(&self) -> f32 {
        self.progress_ratio()
    }

    pub fn revealed_count(&self) -> usize {
        self.reveals.revealed_count()
    }

    pub(super) fn viewport_height(&self) -> f32 {
        self.viewport_bounds
            .map(|b| f32::from(b.size.height))
            .unwrap_or(0.0)
    }

    pub(super) fn content_height(&self) -> f32 {
        self.content_bounds
            .map(|b| f32::from(b.size.height))
            .unwrap_or(0.0)
    }

    pub(super) fn viewport(&self) -> Viewport {
        Viewport {
            offset: self.scroll_offset,
            height: self.viewport_height(),
        }
    }

    pub(super) fn progress_ratio(&self) -> f32 {
        scroll_progress(
            self.scroll_offset,
            self.content_height(),
            self.viewport_height(),
        )
    }

    /// A section's top edge and height in content coordinates, when its
    /// bounds were captured on the last layout pass.
    pub(super) fn section_geometry(&self, section: Section) -> Option<(f32, f32)> {
        let content_y = f32::from(self.content_bounds?.origin.y);
        let idx = self
            .slot_order
            .iter()
            .position(|slot| *slot == Slot::Section(section))?;
        let bounds = self.slot_bounds.get(idx)?;
        Some((
            f32::from(bounds.origin.y) - content_y,
            f32::from(bounds.size.height),
        ))
    }

    /// Runs after all bounds of a layout pass were captured: advances
    /// reveal state, arms the quote typist, and schedules another frame
    /// when anything changed.
    pub(super) fn finalize_layout(&mut self, window: &mut Window) {
        let Some(content_bounds) = self.content_bounds else {
            return;
        };
        let content_y = f32::from(content_bounds.origin.y);
        let view = self.viewport();
        let mut changed = false;

        let item_geometry: Vec<(f32, f32)> = self
            .item_bounds
            .iter()
            .map(|b| (f32::from(b.origin.y) - content_y, f32::from(b.size.height)))
            .collect();
        for (idx, (top, height)) in item_geometry.into_iter().enumerate() {
            if self.reveals.observe(idx, top, height, view) {
                log_page(format!("reveal timeline[{idx}]"));
                changed = true;
            }
        }

        if !self.typewriter.started() && !self.typewriter.is_empty() {
            if let Some((top, height)) = self.section_geometry(Section::Quote) {
                let fraction = visible_fraction(top, height, view, 0.0);
                if self.quote_trigger.check(fraction) {
                    self.pending_start_typing = true;
                    changed = true;
                }
            }
        }

        if self.pending_anchor.is_some() {
            // Bounds are known now; the next render pass consumes it.
            changed = true;
        }

        if changed {
            window.refresh();
        }
    }

    /// Starts the typing loop. A second call is a no-op: the typewriter
    /// itself refuses re-entry, so output can never interleave.
    pub(super) fn start_typing(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if !self.typewriter.start() {
            return;
        }
        log_page("quote typing started");
        let delay = self.type_delay;
        let entity = cx.entity();
        window
            .spawn(cx, async move |async_cx| {
                loop {
                    async_cx.background_executor().timer(delay).await;
                    let done = async_cx
                        .update(|window, app| {
                            entity.update(app, |view, _| {
                                let typed = view.typewriter.tick();
                                window.refresh();
                                typed.is_none() || view.typewriter.is_done()
                            })
                        })
                        .unwrap_or(true);
                    if done {
                        break;
                    }
                }
                log_page("quote typed out");
            })
            .detach();
    }

    /// Animates the viewport to a section's top edge with a cubic
    /// ease-out. Unknown targets are ignored; a newer animation (or a
    /// manual scroll) supersedes a running one.
    pub(super) fn scroll_to_section(
        &mut self,
        section: Section,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let Some((top, _)) = self.section_geometry(section) else {
            return;
        };
        let target = clamp_offset(top, self.content_height(), self.viewport_height());
        let from = self.scroll_offset;
        self.scroll_anim += 1;
        let generation = self.scroll_anim;
        log_page(format!("anchor -> {}", section.slug()));

        let entity = cx.entity();
        window
            .spawn(cx, async move |async_cx| {
                for frame in 1..=ANCHOR_FRAMES {
                    async_cx
                        .background_executor()
                        .timer(Duration::from_millis(ANCHOR_FRAME_MS))
                        .await;
                    let keep_going = async_cx
                        .update(|window, app| {
                            entity.update(app, |view, _| {
                                if view.scroll_anim != generation {
                                    return false;
                                }
                                let t = frame as f32 / ANCHOR_FRAMES as f32;
                                view.scroll_offset = from + (target - from) * ease_out_cubic(t);
                                window.refresh();
                                true
                            })
                        })
                        .unwrap_or(false);
                    if !keep_going {
                        break;
                    }
                }
            })
            .detach();
    }

    /// Pointer enter/leave bookkeeping for a map marker. Leave events
    /// only clear the hover they belong to, so crossing directly from
    /// one marker to another keeps the newer hover.
    pub(super) fn set_marker_hover(&mut self, index: usize, hovered: bool) {
        if hovered {
            self.hover_marker = Some(index);
        } else if self.hover_marker == Some(index) {
            self.hover_marker = None;
        }
    }
}
