use crate::ContentError;

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEvent {
    pub year: String,
    pub title: String,
    pub detail: String,
}

impl TimelineEvent {
    pub fn new(
        year: impl Into<String>,
        title: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            year: year.into(),
            title: title.into(),
            detail: detail.into(),
        }
    }
}

/// A pie wedge record. `value` is a percentage of the whole circle.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color: u32,
}

impl PieSlice {
    pub fn new(label: impl Into<String>, value: f64, color: u32) -> Self {
        Self {
            label: label.into(),
            value,
            color,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarEntry {
    pub label: String,
    pub value: f64,
}

impl BarEntry {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// A map marker and its tooltip note, stored as one pair. `x`/`y` are
/// fractions of the map panel in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub name: String,
    pub note: String,
    pub x: f32,
    pub y: f32,
}

impl MapMarker {
    pub fn new(name: impl Into<String>, note: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            name: name.into(),
            note: note.into(),
            x,
            y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Timeline,
    Quote,
    Map,
    Charts,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Timeline,
        Section::Quote,
        Section::Map,
        Section::Charts,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Timeline => "Timeline",
            Section::Quote => "Quote",
            Section::Map => "Map",
            Section::Charts => "Charts",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Section::Timeline => "timeline",
            Section::Quote => "quote",
            Section::Map => "map",
            Section::Charts => "charts",
        }
    }
}

/// Everything the page renders. Sections with empty datasets are skipped
/// at render time; nothing here is required to be present.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContent {
    pub title: String,
    pub subtitle: String,
    pub timeline: Vec<TimelineEvent>,
    pub quote: String,
    pub quote_attribution: String,
    pub markers: Vec<MapMarker>,
    pub languages: Vec<PieSlice>,
    pub sales: Vec<BarEntry>,
}

impl PageContent {
    /// Build the marker list from a positioned-point collection and a
    /// separate note collection, failing fast when the lengths differ.
    pub fn with_marker_notes(
        mut self,
        points: Vec<(String, f32, f32)>,
        notes: Vec<String>,
    ) -> Result<Self, ContentError> {
        if points.len() != notes.len() {
            return Err(ContentError::MarkerNoteMismatch {
                markers: points.len(),
                notes: notes.len(),
            });
        }
        self.markers = points
            .into_iter()
            .zip(notes)
            .map(|((name, x, y), note)| MapMarker { name, note, x, y })
            .collect();
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_notes_pair_up_in_order() {
        let content = PageContent::default()
            .with_marker_notes(
                vec![
                    ("Paris".to_string(), 0.4, 0.3),
                    ("Havana".to_string(), 0.2, 0.5),
                ],
                vec!["First".to_string(), "Second".to_string()],
            )
            .unwrap();

        assert_eq!(content.markers.len(), 2);
        assert_eq!(content.markers[0].name, "Paris");
        assert_eq!(content.markers[0].note, "First");
        assert_eq!(content.markers[1].note, "Second");
    }

    #[test]
    fn mismatched_marker_notes_fail_fast() {
        let err = PageContent::default()
            .with_marker_notes(
                vec![("Paris".to_string(), 0.4, 0.3)],
                vec!["First".to_string(), "Orphan".to_string()],
            )
            .unwrap_err();

        match err {
            ContentError::MarkerNoteMismatch { markers, notes } => {
                assert_eq!(markers, 1);
                assert_eq!(notes, 2);
            }
        }
    }
}
