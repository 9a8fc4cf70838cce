use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("marker/note counts differ (markers={markers}, notes={notes})")]
    MarkerNoteMismatch { markers: usize, notes: usize },
}
