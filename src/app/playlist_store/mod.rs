// Playlist store - User-named ordered sets of video ids

use std::collections::BTreeMap;

use crate::app::moderation::ModerationRegistry;
use crate::domain::errors::{SessionError, SessionResult};
use crate::domain::model::{PlaylistView, Video, VideoCatalog, VideoListing};
use crate::domain::rules::playlist_key;

/// A named, ordered, duplicate-free list of video ids.
///
/// Only ids are stored; video data is always read back from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    name: String,
    video_ids: Vec<String>,
}

impl Playlist {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            video_ids: Vec::new(),
        }
    }

    /// Name with its original casing
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ids in insertion order
    pub fn video_ids(&self) -> &[String] {
        &self.video_ids
    }

    pub fn contains(&self, video_id: &str) -> bool {
        self.video_ids.iter().any(|id| id == video_id)
    }

    pub fn len(&self) -> usize {
        self.video_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.video_ids.is_empty()
    }
}

/// Playlists keyed by case-folded name.
///
/// The `BTreeMap` key doubles as the listing order, so `list_all` is
/// case-insensitive alphabetical regardless of creation order.
#[derive(Debug, Default)]
pub struct PlaylistStore {
    playlists: BTreeMap<String, Playlist>,
}

impl PlaylistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a user-supplied name to its playlist
    pub fn get(&self, name: &str) -> SessionResult<&Playlist> {
        self.playlists
            .get(&playlist_key(name))
            .ok_or_else(|| not_found(name))
    }

    fn get_mut(&mut self, name: &str) -> SessionResult<&mut Playlist> {
        self.playlists
            .get_mut(&playlist_key(name))
            .ok_or_else(|| not_found(name))
    }

    /// Create an empty playlist; names collide case-insensitively
    pub fn create(&mut self, name: &str) -> SessionResult<&Playlist> {
        let key = playlist_key(name);
        if let Some(existing) = self.playlists.get(&key) {
            return Err(SessionError::PlaylistAlreadyExists {
                name: existing.name.clone(),
            });
        }
        Ok(&*self.playlists.entry(key).or_insert_with(|| Playlist::new(name)))
    }

    /// Append a video. Catalog presence and flag state are checked before mutating.
    pub fn add<'c>(
        &mut self,
        catalog: &'c VideoCatalog,
        moderation: &ModerationRegistry,
        name: &str,
        video_id: &str,
    ) -> SessionResult<&'c Video> {
        let playlist = self.get_mut(name)?;
        let video = catalog.find(video_id)?;
        moderation.ensure_allowed(video_id)?;
        if playlist.contains(video_id) {
            return Err(SessionError::AlreadyInPlaylist {
                playlist: playlist.name.clone(),
                video_id: video_id.to_string(),
            });
        }
        playlist.video_ids.push(video.id.clone());
        Ok(video)
    }

    /// Remove a video, keeping the order of the rest
    pub fn remove<'c>(
        &mut self,
        catalog: &'c VideoCatalog,
        name: &str,
        video_id: &str,
    ) -> SessionResult<&'c Video> {
        let playlist = self.get_mut(name)?;
        let video = catalog.find(video_id)?;
        let position = playlist
            .video_ids
            .iter()
            .position(|id| id == video_id)
            .ok_or_else(|| SessionError::NotInPlaylist {
                playlist: playlist.name.clone(),
                video_id: video_id.to_string(),
            })?;
        playlist.video_ids.remove(position);
        Ok(video)
    }

    /// Empty the playlist but keep it
    pub fn clear(&mut self, name: &str) -> SessionResult<&Playlist> {
        let playlist = self.get_mut(name)?;
        playlist.video_ids.clear();
        Ok(&*playlist)
    }

    /// Delete the playlist, returning it
    pub fn delete(&mut self, name: &str) -> SessionResult<Playlist> {
        self.playlists
            .remove(&playlist_key(name))
            .ok_or_else(|| not_found(name))
    }

    /// Entries in playlist order, each annotated with its current flag reason
    pub fn show(
        &self,
        catalog: &VideoCatalog,
        moderation: &ModerationRegistry,
        name: &str,
    ) -> SessionResult<PlaylistView> {
        let playlist = self.get(name)?;
        let entries = playlist
            .video_ids
            .iter()
            .filter_map(|id| catalog.get(id))
            .map(|video| VideoListing {
                video: video.clone(),
                flag_reason: moderation.reason(&video.id).map(str::to_string),
            })
            .collect();
        Ok(PlaylistView {
            name: playlist.name.clone(),
            entries,
        })
    }

    /// Display names, case-insensitive alphabetical
    pub fn list_all(&self) -> Vec<&str> {
        self.playlists.values().map(Playlist::name).collect()
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}

fn not_found(name: &str) -> SessionError {
    SessionError::PlaylistNotFound {
        name: name.to_string(),
    }
}
