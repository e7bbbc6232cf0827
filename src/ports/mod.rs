// Ports - Interface definitions (contracts)

use crate::domain::model::Video;
use crate::error::VidcatResult;

/// Port for the catalog loader: produces the immutable list of videos once at startup
pub trait CatalogSource {
    /// Load every video record, in source order
    fn load_videos(&self) -> VidcatResult<Vec<Video>>;

    /// Human-readable description of where the videos come from
    fn describe(&self) -> String;
}

/// Port for random video selection
pub trait VideoPicker {
    /// Pick an index in `0..len`. Never called with `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Static catalog source, mostly for tests and embedding
pub struct InMemoryCatalog {
    videos: Vec<Video>,
}

impl InMemoryCatalog {
    pub fn new(videos: Vec<Video>) -> Self {
        Self { videos }
    }
}

impl CatalogSource for InMemoryCatalog {
    fn load_videos(&self) -> VidcatResult<Vec<Video>> {
        Ok(self.videos.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory catalog ({} videos)", self.videos.len())
    }
}

/// Picker that always returns the same position, clamped to the range
pub struct FixedPicker(pub usize);

impl VideoPicker for FixedPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}
