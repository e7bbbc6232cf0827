// Domain errors - Expected outcomes of session operations

use thiserror::Error;

/// Failure kinds returned by the session core.
///
/// None of these are faults: each one is an ordinary answer to a user command,
/// and the `Display` text is the reason phrase the presentation layer puts after
/// its own "Cannot ..." prefix.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// No catalog video has this id
    #[error("Video does not exist")]
    VideoNotFound { video_id: String },

    /// No playlist matches this name case-insensitively
    #[error("Playlist does not exist")]
    PlaylistNotFound { name: String },

    /// A playlist with the same case-folded name exists
    #[error("A playlist with the same name already exists")]
    PlaylistAlreadyExists { name: String },

    /// The video is already part of the playlist
    #[error("Video already added")]
    AlreadyInPlaylist { playlist: String, video_id: String },

    /// The video is not part of the playlist
    #[error("Video is not in playlist")]
    NotInPlaylist { playlist: String, video_id: String },

    /// The video carries a moderation flag
    #[error("Video is currently flagged (reason: {reason})")]
    VideoFlagged { video_id: String, reason: String },

    /// The video exists but was never flagged
    #[error("Video is not flagged")]
    NotFlagged { video_id: String },

    /// Playback is stopped
    #[error("No video is currently playing")]
    NothingPlaying,

    /// Pause requested while already paused
    #[error("Video already paused")]
    AlreadyPaused { video_id: String },

    /// Continue requested while playing
    #[error("Video is not paused")]
    NotPaused { video_id: String },

    /// Every catalog video is flagged, or the catalog is empty
    #[error("No videos available")]
    NoPlayableVideos,

    /// A search ran against a catalog with no videos at all
    #[error("No videos in the library")]
    EmptyCatalog,

    /// A search matched nothing
    #[error("No search results for {query}")]
    EmptyResult { query: String },
}

impl SessionError {
    /// Whether this is one of the not-found kinds
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            SessionError::VideoNotFound { .. } | SessionError::PlaylistNotFound { .. }
        )
    }
}

/// Result alias for session core operations
pub type SessionResult<T> = Result<T, SessionError>;
