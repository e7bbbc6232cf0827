// Playback session - Single current-video state machine

use crate::app::moderation::ModerationRegistry;
use crate::domain::errors::{SessionError, SessionResult};
use crate::domain::model::{PlaybackState, VideoCatalog};
use crate::ports::VideoPicker;

/// Transition recorded by a successful play
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Video that was implicitly stopped
    pub stopped: Option<String>,
    /// Video now playing
    pub started: String,
}

/// Tracks the one current video: stopped, playing or paused.
///
/// Flag checks happen only when playback starts. Flagging the current video
/// afterwards leaves it playing.
#[derive(Debug, Default)]
pub struct PlaybackSession {
    state: PlaybackState,
}

impl PlaybackSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Start `video_id`, implicitly stopping whatever is current
    pub fn play(
        &mut self,
        catalog: &VideoCatalog,
        moderation: &ModerationRegistry,
        video_id: &str,
    ) -> SessionResult<Transition> {
        let video = catalog.find(video_id)?;
        moderation.ensure_allowed(&video.id)?;
        Ok(self.start(video.id.clone()))
    }

    /// Start a uniformly chosen unflagged video
    pub fn play_random(
        &mut self,
        catalog: &VideoCatalog,
        moderation: &ModerationRegistry,
        picker: &mut dyn VideoPicker,
    ) -> SessionResult<Transition> {
        let candidates: Vec<&str> = catalog
            .all_videos()
            .iter()
            .map(|video| video.id.as_str())
            .filter(|id| !moderation.is_flagged(id))
            .collect();
        if candidates.is_empty() {
            return Err(SessionError::NoPlayableVideos);
        }
        let choice = picker.pick(candidates.len()).min(candidates.len() - 1);
        Ok(self.start(candidates[choice].to_string()))
    }

    fn start(&mut self, video_id: String) -> Transition {
        let previous = std::mem::replace(&mut self.state, PlaybackState::Playing(video_id.clone()));
        Transition {
            stopped: previous.current_id().map(str::to_string),
            started: video_id,
        }
    }

    /// Stop the current video, returning its id
    pub fn stop(&mut self) -> SessionResult<String> {
        match std::mem::take(&mut self.state) {
            PlaybackState::Stopped => Err(SessionError::NothingPlaying),
            PlaybackState::Playing(id) | PlaybackState::Paused(id) => Ok(id),
        }
    }

    /// Pause the playing video, returning its id
    pub fn pause(&mut self) -> SessionResult<String> {
        match &self.state {
            PlaybackState::Stopped => Err(SessionError::NothingPlaying),
            PlaybackState::Paused(id) => Err(SessionError::AlreadyPaused {
                video_id: id.clone(),
            }),
            PlaybackState::Playing(id) => {
                let id = id.clone();
                self.state = PlaybackState::Paused(id.clone());
                Ok(id)
            }
        }
    }

    /// Resume the paused video, returning its id
    pub fn resume(&mut self) -> SessionResult<String> {
        match &self.state {
            PlaybackState::Stopped => Err(SessionError::NothingPlaying),
            PlaybackState::Playing(id) => Err(SessionError::NotPaused {
                video_id: id.clone(),
            }),
            PlaybackState::Paused(id) => {
                let id = id.clone();
                self.state = PlaybackState::Playing(id.clone());
                Ok(id)
            }
        }
    }

    /// Current video id and whether it is paused
    pub fn current(&self) -> SessionResult<(&str, bool)> {
        let id = self.state.current_id().ok_or(SessionError::NothingPlaying)?;
        Ok((id, self.state.is_paused()))
    }
}
