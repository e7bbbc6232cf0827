// Session controller - One operation per user command

use crate::app::moderation::ModerationRegistry;
use crate::app::playback::{PlaybackSession, Transition};
use crate::app::playlist_store::PlaylistStore;
use crate::domain::errors::{SessionError, SessionResult};
use crate::domain::model::*;
use crate::domain::rules::SearchPolicy;
use crate::ports::VideoPicker;

/// Owns all mutable session state for the lifetime of the process.
///
/// Every operation returns a structured result; nothing here prints or logs.
/// Video ids are matched exactly, playlist names case-insensitively.
pub struct SessionController {
    catalog: VideoCatalog,
    playlists: PlaylistStore,
    moderation: ModerationRegistry,
    playback: PlaybackSession,
    picker: Box<dyn VideoPicker>,
}

impl SessionController {
    /// Create a session over a loaded catalog
    pub fn new(catalog: VideoCatalog, picker: Box<dyn VideoPicker>) -> Self {
        Self {
            catalog,
            playlists: PlaylistStore::new(),
            moderation: ModerationRegistry::new(),
            playback: PlaybackSession::new(),
            picker,
        }
    }

    pub fn catalog(&self) -> &VideoCatalog {
        &self.catalog
    }

    pub fn playlists(&self) -> &PlaylistStore {
        &self.playlists
    }

    pub fn moderation(&self) -> &ModerationRegistry {
        &self.moderation
    }

    pub fn playback_state(&self) -> &PlaybackState {
        self.playback.state()
    }

    /// Clone a catalog video the core already validated
    fn video(&self, video_id: &str) -> SessionResult<Video> {
        self.catalog.find(video_id).cloned()
    }

    fn listing(&self, video: &Video) -> VideoListing {
        VideoListing {
            video: video.clone(),
            flag_reason: self.moderation.reason(&video.id).map(str::to_string),
        }
    }

    // Library

    pub fn number_of_videos(&self) -> usize {
        self.catalog.len()
    }

    /// Every video in display order, flagged ones annotated
    pub fn show_all_videos(&self) -> Vec<VideoListing> {
        let mut videos: Vec<&Video> = self.catalog.all_videos().iter().collect();
        videos.sort_by(|a, b| SearchPolicy::display_order(a, b));
        videos.into_iter().map(|video| self.listing(video)).collect()
    }

    // Playback

    pub fn play_video(&mut self, video_id: &str) -> SessionResult<PlayOutcome> {
        let transition = self.playback.play(&self.catalog, &self.moderation, video_id)?;
        self.outcome(transition)
    }

    pub fn play_random_video(&mut self) -> SessionResult<PlayOutcome> {
        let transition =
            self.playback
                .play_random(&self.catalog, &self.moderation, self.picker.as_mut())?;
        self.outcome(transition)
    }

    fn outcome(&self, transition: Transition) -> SessionResult<PlayOutcome> {
        let stopped = match transition.stopped {
            Some(id) => Some(self.video(&id)?),
            None => None,
        };
        Ok(PlayOutcome {
            stopped,
            started: self.video(&transition.started)?,
        })
    }

    pub fn stop_video(&mut self) -> SessionResult<Video> {
        let id = self.playback.stop()?;
        self.video(&id)
    }

    pub fn pause_video(&mut self) -> SessionResult<Video> {
        let id = self.playback.pause()?;
        self.video(&id)
    }

    pub fn continue_video(&mut self) -> SessionResult<Video> {
        let id = self.playback.resume()?;
        self.video(&id)
    }

    pub fn show_playing(&self) -> SessionResult<NowPlaying> {
        let (id, paused) = self.playback.current()?;
        Ok(NowPlaying {
            video: self.video(id)?,
            paused,
        })
    }

    // Playlists

    /// Returns the stored display name
    pub fn create_playlist(&mut self, name: &str) -> SessionResult<String> {
        self.playlists
            .create(name)
            .map(|playlist| playlist.name().to_string())
    }

    /// The change reports the name as the user typed it
    pub fn add_to_playlist(&mut self, name: &str, video_id: &str) -> SessionResult<PlaylistChange> {
        let video = self
            .playlists
            .add(&self.catalog, &self.moderation, name, video_id)?;
        Ok(PlaylistChange {
            playlist: name.to_string(),
            video: video.clone(),
        })
    }

    pub fn remove_from_playlist(
        &mut self,
        name: &str,
        video_id: &str,
    ) -> SessionResult<PlaylistChange> {
        let video = self.playlists.remove(&self.catalog, name, video_id)?;
        Ok(PlaylistChange {
            playlist: name.to_string(),
            video: video.clone(),
        })
    }

    /// Returns the stored display name
    pub fn clear_playlist(&mut self, name: &str) -> SessionResult<String> {
        self.playlists
            .clear(name)
            .map(|playlist| playlist.name().to_string())
    }

    /// Returns the deleted playlist's display name
    pub fn delete_playlist(&mut self, name: &str) -> SessionResult<String> {
        self.playlists
            .delete(name)
            .map(|playlist| playlist.name().to_string())
    }

    pub fn show_playlist(&self, name: &str) -> SessionResult<PlaylistView> {
        self.playlists.show(&self.catalog, &self.moderation, name)
    }

    pub fn show_all_playlists(&self) -> Vec<String> {
        self.playlists
            .list_all()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    // Search

    /// Unflagged videos whose title contains `term`, case-insensitively
    pub fn search_videos(&self, term: &str) -> SessionResult<Vec<Video>> {
        self.search(term, |video| SearchPolicy::title_matches(video, term))
    }

    /// Unflagged videos carrying `tag` after normalization
    pub fn search_videos_with_tag(&self, tag: &str) -> SessionResult<Vec<Video>> {
        self.search(tag, |video| SearchPolicy::tag_matches(video, tag))
    }

    fn search<F>(&self, query: &str, matches: F) -> SessionResult<Vec<Video>>
    where
        F: Fn(&Video) -> bool,
    {
        if self.catalog.is_empty() {
            return Err(SessionError::EmptyCatalog);
        }
        let mut results: Vec<Video> = self
            .catalog
            .all_videos()
            .iter()
            .filter(|video| !self.moderation.is_flagged(&video.id))
            .filter(|video| matches(*video))
            .cloned()
            .collect();
        if results.is_empty() {
            return Err(SessionError::EmptyResult {
                query: query.to_string(),
            });
        }
        results.sort_by(SearchPolicy::display_order);
        Ok(results)
    }

    // Moderation

    pub fn flag_video(&mut self, video_id: &str, reason: Option<&str>) -> SessionResult<FlagOutcome> {
        let reason = self.moderation.flag(&self.catalog, video_id, reason)?;
        Ok(FlagOutcome {
            video: self.video(video_id)?,
            reason,
        })
    }

    pub fn allow_video(&mut self, video_id: &str) -> SessionResult<Video> {
        self.moderation.allow(&self.catalog, video_id)?;
        self.video(video_id)
    }
}
