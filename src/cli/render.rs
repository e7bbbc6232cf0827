//! Presentation of session results as transcript lines

use crate::domain::errors::{SessionError, SessionResult};
use crate::domain::model::*;

pub const INVALID_COMMAND: &str =
    "Please enter a valid command, type HELP for a list of available commands.";

pub const SEARCH_PROMPT: [&str; 2] = [
    "Would you like to play any of the above? If yes, specify the number of the video.",
    "If your answer is not a valid number, we will assume it's a no.",
];

const HELP_TEXT: &str = "\
Available commands:
    NUMBER_OF_VIDEOS - Shows how many videos are in the library.
    SHOW_ALL_VIDEOS - Lists all videos from the library.
    PLAY <video_id> - Plays specified video.
    PLAY_RANDOM - Plays a random video from the library.
    STOP - Stop the current video.
    PAUSE - Pause the current video.
    CONTINUE - Resume the current paused video.
    SHOW_PLAYING - Displays the title, id, tags and paused status of the current video.
    CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.
    ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.
    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist.
    CLEAR_PLAYLIST <playlist_name> - Removes all the videos from the playlist.
    DELETE_PLAYLIST <playlist_name> - Deletes the playlist.
    SHOW_PLAYLIST <playlist_name> - List all the videos in this playlist.
    SHOW_ALL_PLAYLISTS - Display all the available playlists.
    SEARCH_VIDEOS <search_term> - Display all the videos whose titles contain the search_term.
    SEARCH_VIDEOS_WITH_TAG <tag_name> - Display all videos whose tags contain the provided tag.
    FLAG_VIDEO <video_id> [flag_reason] - Mark a video as flagged.
    ALLOW_VIDEO <video_id> - Removes a flag from a video.
    HELP - Displays help.
    EXIT - Terminates the program execution.
Quote names that contain spaces, e.g. CREATE_PLAYLIST \"My List\".";

pub fn help() -> Vec<String> {
    HELP_TEXT.lines().map(str::to_string).collect()
}

/// `T (id) [#tags]`, with the flag annotation when present
pub fn listing(entry: &VideoListing) -> String {
    match &entry.flag_reason {
        Some(reason) => format!("{} - FLAGGED (reason: {})", entry.video, reason),
        None => entry.video.to_string(),
    }
}

pub fn number_of_videos(count: usize) -> Vec<String> {
    vec![format!("{} videos in the library", count)]
}

pub fn all_videos(listings: &[VideoListing]) -> Vec<String> {
    if listings.is_empty() {
        return vec!["No videos in the library".to_string()];
    }
    let mut lines = vec!["Here's a list of all available videos:".to_string()];
    lines.extend(listings.iter().map(|entry| format!("  {}", listing(entry))));
    lines
}

pub fn play(result: SessionResult<PlayOutcome>) -> Vec<String> {
    match result {
        Ok(outcome) => played(outcome),
        Err(err) => vec![format!("Cannot play video: {}", err)],
    }
}

pub fn play_random(result: SessionResult<PlayOutcome>) -> Vec<String> {
    match result {
        Ok(outcome) => played(outcome),
        Err(err) => vec![err.to_string()],
    }
}

fn played(outcome: PlayOutcome) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(stopped) = outcome.stopped {
        lines.push(format!("Stopping video: {}", stopped.title));
    }
    lines.push(format!("Playing video: {}", outcome.started.title));
    lines
}

pub fn stop(result: SessionResult<Video>) -> Vec<String> {
    match result {
        Ok(video) => vec![format!("Stopping video: {}", video.title)],
        Err(err) => vec![format!("Cannot stop video: {}", err)],
    }
}

/// Needs the catalog to name the video that is already paused
pub fn pause(result: SessionResult<Video>, catalog: &VideoCatalog) -> Vec<String> {
    match result {
        Ok(video) => vec![format!("Pausing video: {}", video.title)],
        Err(SessionError::AlreadyPaused { video_id }) => {
            let title = catalog
                .get(&video_id)
                .map(|video| video.title.as_str())
                .unwrap_or(video_id.as_str());
            vec![format!("Video already paused: {}", title)]
        }
        Err(err) => vec![format!("Cannot pause video: {}", err)],
    }
}

pub fn resume(result: SessionResult<Video>) -> Vec<String> {
    match result {
        Ok(video) => vec![format!("Continuing video: {}", video.title)],
        Err(err) => vec![format!("Cannot continue video: {}", err)],
    }
}

pub fn show_playing(result: SessionResult<NowPlaying>) -> Vec<String> {
    match result {
        Ok(now) if now.paused => vec![format!("Currently playing: {} - PAUSED", now.video)],
        Ok(now) => vec![format!("Currently playing: {}", now.video)],
        Err(err) => vec![err.to_string()],
    }
}

pub fn create_playlist(result: SessionResult<String>) -> Vec<String> {
    match result {
        Ok(name) => vec![format!("Successfully created new playlist: {}", name)],
        Err(err) => vec![format!("Cannot create playlist: {}", err)],
    }
}

pub fn add_to_playlist(name: &str, result: SessionResult<PlaylistChange>) -> Vec<String> {
    match result {
        Ok(change) => vec![format!("Added video to {}: {}", change.playlist, change.video.title)],
        Err(err) => vec![format!("Cannot add video to {}: {}", name, err)],
    }
}

pub fn remove_from_playlist(name: &str, result: SessionResult<PlaylistChange>) -> Vec<String> {
    match result {
        Ok(change) => vec![format!(
            "Removed video from {}: {}",
            change.playlist, change.video.title
        )],
        Err(err) => vec![format!("Cannot remove video from {}: {}", name, err)],
    }
}

pub fn clear_playlist(name: &str, result: SessionResult<String>) -> Vec<String> {
    match result {
        Ok(_) => vec![format!("Successfully removed all videos from {}", name)],
        Err(err) => vec![format!("Cannot clear playlist {}: {}", name, err)],
    }
}

pub fn delete_playlist(name: &str, result: SessionResult<String>) -> Vec<String> {
    match result {
        Ok(_) => vec![format!("Deleted playlist: {}", name)],
        Err(err) => vec![format!("Cannot delete playlist {}: {}", name, err)],
    }
}

pub fn show_playlist(name: &str, result: SessionResult<PlaylistView>) -> Vec<String> {
    match result {
        Ok(view) => {
            let mut lines = vec![format!("Showing playlist: {}", name)];
            if view.entries.is_empty() {
                lines.push("  No videos here yet".to_string());
            }
            lines.extend(view.entries.iter().map(|entry| format!("  {}", listing(entry))));
            lines
        }
        Err(err) => vec![format!("Cannot show playlist {}: {}", name, err)],
    }
}

pub fn all_playlists(names: &[String]) -> Vec<String> {
    if names.is_empty() {
        return vec!["No playlists exist yet".to_string()];
    }
    let mut lines = vec!["Showing all playlists:".to_string()];
    lines.extend(names.iter().map(|name| format!("  {}", name)));
    lines
}

/// Numbered results, without the follow-up question
pub fn search(query: &str, results: &[Video]) -> Vec<String> {
    let mut lines = vec![format!("Here are the results for {}:", query)];
    lines.extend(
        results
            .iter()
            .enumerate()
            .map(|(i, video)| format!("  {}) {}", i + 1, video)),
    );
    lines
}

pub fn flag(result: SessionResult<FlagOutcome>) -> Vec<String> {
    match result {
        Ok(outcome) => vec![format!(
            "Successfully flagged video: {} (reason: {})",
            outcome.video.title, outcome.reason
        )],
        Err(err) => vec![format!("Cannot flag video: {}", err)],
    }
}

pub fn allow(result: SessionResult<Video>) -> Vec<String> {
    match result {
        Ok(video) => vec![format!("Successfully removed flag from video: {}", video.title)],
        Err(err) => vec![format!("Cannot remove flag from video: {}", err)],
    }
}
