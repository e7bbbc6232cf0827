// Moderation registry - Per-video flag state

use std::collections::HashMap;

use crate::domain::errors::{SessionError, SessionResult};
use crate::domain::model::{VideoCatalog, DEFAULT_FLAG_REASON};

/// Maps video ids to flag reasons. A video is flagged iff it has an entry.
#[derive(Debug, Default)]
pub struct ModerationRegistry {
    flags: HashMap<String, String>,
}

impl ModerationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag a catalog video, overwriting any earlier reason.
    ///
    /// A missing or blank reason is recorded as [`DEFAULT_FLAG_REASON`].
    /// Returns the recorded reason.
    pub fn flag(
        &mut self,
        catalog: &VideoCatalog,
        video_id: &str,
        reason: Option<&str>,
    ) -> SessionResult<String> {
        catalog.find(video_id)?;
        let reason = match reason.map(str::trim) {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => DEFAULT_FLAG_REASON.to_string(),
        };
        self.flags.insert(video_id.to_string(), reason.clone());
        Ok(reason)
    }

    /// Remove the flag from a catalog video
    pub fn allow(&mut self, catalog: &VideoCatalog, video_id: &str) -> SessionResult<()> {
        catalog.find(video_id)?;
        match self.flags.remove(video_id) {
            Some(_) => Ok(()),
            None => Err(SessionError::NotFlagged {
                video_id: video_id.to_string(),
            }),
        }
    }

    pub fn is_flagged(&self, video_id: &str) -> bool {
        self.flags.contains_key(video_id)
    }

    pub fn reason(&self, video_id: &str) -> Option<&str> {
        self.flags.get(video_id).map(String::as_str)
    }

    /// Fail with `VideoFlagged` when the video carries a flag
    pub fn ensure_allowed(&self, video_id: &str) -> SessionResult<()> {
        match self.reason(video_id) {
            Some(reason) => Err(SessionError::VideoFlagged {
                video_id: video_id.to_string(),
                reason: reason.to_string(),
            }),
            None => Ok(()),
        }
    }

    pub fn flagged_count(&self) -> usize {
        self.flags.len()
    }
}
