// Domain models - Core types and data structures

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::errors::{SessionError, SessionResult};

/// Reason recorded when a video is flagged without one
pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

/// A catalog video. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub tags: Vec<String>,
}

impl Video {
    /// Create a new video record
    pub fn new(id: impl Into<String>, title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags,
        }
    }

    /// Tags joined for display, e.g. `#cat #animal`
    pub fn tag_list(&self) -> String {
        self.tags.join(" ")
    }

    /// Whether the video carries the given normalized tag
    pub fn has_tag(&self, normalized_tag: &str) -> bool {
        self.tags.iter().any(|tag| tag == normalized_tag)
    }
}

impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.id, self.tag_list())
    }
}

/// The fixed, read-only set of videos for a session.
///
/// Ids are matched exactly and case-sensitively. Iteration order is load order.
#[derive(Debug, Clone, Default)]
pub struct VideoCatalog {
    videos: Vec<Video>,
    index: HashMap<String, usize>,
}

impl VideoCatalog {
    /// Build a catalog, keeping the first occurrence of any duplicated id
    pub fn from_videos(videos: impl IntoIterator<Item = Video>) -> Self {
        let mut catalog = Self::default();
        for video in videos {
            if catalog.index.contains_key(&video.id) {
                continue;
            }
            catalog.index.insert(video.id.clone(), catalog.videos.len());
            catalog.videos.push(video);
        }
        catalog
    }

    /// All videos in stable load order
    pub fn all_videos(&self) -> &[Video] {
        &self.videos
    }

    /// Exact-match lookup
    pub fn get(&self, id: &str) -> Option<&Video> {
        self.index.get(id).map(|&position| &self.videos[position])
    }

    /// Exact-match lookup reporting `VideoNotFound`
    pub fn find(&self, id: &str) -> SessionResult<&Video> {
        self.get(id).ok_or_else(|| SessionError::VideoNotFound {
            video_id: id.to_string(),
        })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

/// Current playback state. At most one current video.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing(String),
    Paused(String),
}

impl PlaybackState {
    /// Id of the current video, playing or paused
    pub fn current_id(&self) -> Option<&str> {
        match self {
            PlaybackState::Stopped => None,
            PlaybackState::Playing(id) | PlaybackState::Paused(id) => Some(id),
        }
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, PlaybackState::Paused(_))
    }
}

/// A video together with its moderation state, for listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoListing {
    pub video: Video,
    pub flag_reason: Option<String>,
}

/// Result of a successful play: the video that was implicitly stopped, if any,
/// and the one now playing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    pub stopped: Option<Video>,
    pub started: Video,
}

/// The current video as reported by `SHOW_PLAYING`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    pub video: Video,
    pub paused: bool,
}

/// A playlist mutation that touched one video
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistChange {
    pub playlist: String,
    pub video: Video,
}

/// Snapshot of a playlist for display. Flagged entries are annotated, not hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistView {
    pub name: String,
    pub entries: Vec<VideoListing>,
}

/// A flag that was just recorded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagOutcome {
    pub video: Video,
    pub reason: String,
}
