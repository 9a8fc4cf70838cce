/// Fraction of a timeline item that must be visible before it reveals.
pub const TIMELINE_THRESHOLD: f32 = 0.3;
/// Margin shaved off the bottom of the effective viewport for reveals.
pub const TIMELINE_BOTTOM_MARGIN: f32 = 50.0;
/// Fraction of the quote section that must be visible to start typing.
pub const QUOTE_THRESHOLD: f32 = 0.5;

/// The visible window over the page content, in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub offset: f32,
    pub height: f32,
}

/// Fraction of an element currently inside the viewport, with
/// `bottom_margin` shrinking the viewport's bottom edge.
pub fn visible_fraction(top: f32, height: f32, view: Viewport, bottom_margin: f32) -> f32 {
    if height <= 0.0 || view.height <= 0.0 {
        return 0.0;
    }
    let view_top = view.offset;
    let view_bottom = view.offset + (view.height - bottom_margin).max(0.0);
    let overlap = (top + height).min(view_bottom) - top.max(view_top);
    (overlap / height).clamp(0.0, 1.0)
}

/// One-way reveal markers for a fixed set of observed elements.
/// Membership is fixed at construction; a revealed element never
/// un-reveals, and re-observing it is a no-op.
#[derive(Debug, Clone)]
pub struct RevealSet {
    threshold: f32,
    bottom_margin: f32,
    seen: Vec<bool>,
}

impl RevealSet {
    pub fn new(count: usize, threshold: f32, bottom_margin: f32) -> Self {
        Self {
            threshold,
            bottom_margin,
            seen: vec![false; count],
        }
    }

    /// Observes one element's current geometry. Returns `true` only on
    /// the transition into the revealed state.
    pub fn observe(&mut self, index: usize, top: f32, height: f32, view: Viewport) -> bool {
        let Some(slot) = self.seen.get_mut(index) else {
            return false;
        };
        if *slot {
            return false;
        }
        if visible_fraction(top, height, view, self.bottom_margin) >= self.threshold {
            *slot = true;
            return true;
        }
        false
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.seen.get(index).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.seen.iter().filter(|s| **s).count()
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Fires exactly once, the first time an observed fraction reaches the
/// threshold.
#[derive(Debug, Clone, Copy)]
pub struct OnceTrigger {
    threshold: f32,
    fired: bool,
}

impl OnceTrigger {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            fired: false,
        }
    }

    pub fn check(&mut self, fraction: f32) -> bool {
        if self.fired || fraction < self.threshold {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn fired(&self) -> bool {
        self.fired
    }
}
