use crate::types::{BarEntry, MapMarker, PageContent, PieSlice, TimelineEvent};

impl Default for PageContent {
    fn default() -> Self {
        Self {
            title: "Gabriel Garcia Marquez".into(),
            subtitle: "A life remembered".into(),
            timeline: vec![
                TimelineEvent::new(
                    "1927",
                    "Aracataca",
                    "Born in a small Caribbean town, raised on his grandmother's stories.",
                ),
                TimelineEvent::new(
                    "1948",
                    "Journalism",
                    "Leaves law school for the newsroom of El Universal in Cartagena.",
                ),
                TimelineEvent::new(
                    "1955",
                    "Leaf Storm",
                    "Publishes his first novella after years of rejection letters.",
                ),
                TimelineEvent::new(
                    "1967",
                    "One Hundred Years of Solitude",
                    "Eighteen months of writing in Mexico City; Macondo reaches the world.",
                ),
                TimelineEvent::new(
                    "1982",
                    "Nobel Prize",
                    "Receives the Nobel Prize in Literature in Stockholm.",
                ),
                TimelineEvent::new(
                    "1985",
                    "Love in the Time of Cholera",
                    "A love story half a century in the waiting.",
                ),
                TimelineEvent::new(
                    "2002",
                    "Living to Tell the Tale",
                    "The first volume of his memoirs.",
                ),
            ],
            quote: "What matters in life is not what happens to you but what you remember \
                    and how you remember it."
                .into(),
            quote_attribution: "Living to Tell the Tale".into(),
            markers: vec![
                MapMarker::new("Aracataca", "Birthplace and the seed of Macondo.", 0.30, 0.56),
                MapMarker::new("Bogota", "Law school, then the newsroom.", 0.29, 0.60),
                MapMarker::new("Paris", "Lean years writing in a garret hotel.", 0.47, 0.28),
                MapMarker::new("Mexico City", "Where Solitude was written.", 0.21, 0.44),
                MapMarker::new("Barcelona", "The boom years among the exiles.", 0.46, 0.33),
                MapMarker::new("Havana", "Film school and late friendships.", 0.26, 0.43),
            ],
            languages: vec![
                PieSlice::new("Spanish", 25.0, 0x00c7be),
                PieSlice::new("English", 20.0, 0x2ca7e0),
                PieSlice::new("French", 15.0, 0xffb547),
                PieSlice::new("German", 12.0, 0xffffff),
                PieSlice::new("Others", 28.0, 0x666666),
            ],
            sales: vec![
                BarEntry::new("1970s", 5.0),
                BarEntry::new("1980s", 15.0),
                BarEntry::new("1990s", 20.0),
                BarEntry::new("2000s", 25.0),
                BarEntry::new("2010s", 30.0),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pie_values_cover_the_whole_circle() {
        let content = PageContent::default();
        let total: f64 = content.languages.iter().map(|s| s.value).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn default_markers_sit_inside_the_map_panel() {
        for marker in PageContent::default().markers {
            assert!((0.0..=1.0).contains(&marker.x), "{} x", marker.name);
            assert!((0.0..=1.0).contains(&marker.y), "{} y", marker.name);
        }
    }
}
