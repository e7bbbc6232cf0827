use vidcat_cli::adapters::text_catalog::parse_catalog;
use vidcat_cli::cli::dispatcher::{Dispatcher, Reply};
use vidcat_cli::ports::{FixedPicker, InMemoryCatalog};
use vidcat_cli::*;

/// Session fixtures
mod test_utils {
    use super::*;

    pub const LIBRARY: &str = "\
Amazing Cats | amazing_cats_video_id | #cat , #animal
Another Cat Video | another_cat_video_id | #cat , #animal
Funny Dogs | funny_dogs_video_id | #dog , #animal
Life at Google | life_at_google_video_id | #google , #career
Video about nothing | nothing_video_id |
";

    /// Build a session the way `vidcat run` does, through the catalog port
    pub fn session_from(source: &dyn CatalogSource) -> SessionController {
        let catalog = VideoCatalog::from_videos(source.load_videos().unwrap());
        SessionController::new(catalog, Box::new(FixedPicker(0)))
    }

    pub fn library_session() -> SessionController {
        session_from(&InMemoryCatalog::new(parse_catalog(LIBRARY)))
    }

    pub fn two_video_session() -> SessionController {
        session_from(&InMemoryCatalog::new(vec![
            Video::new("id1", "T1", vec!["#a".to_string()]),
            Video::new("id2", "T2", vec!["#b".to_string()]),
        ]))
    }

    /// Run command lines through the dispatcher and collect every printed line
    pub fn transcript(session: &mut SessionController, commands: &[&str]) -> Vec<String> {
        let dispatcher = Dispatcher::new().unwrap();
        let mut lines = Vec::new();
        for command in commands {
            match dispatcher.dispatch_line(session, command) {
                Reply::Lines(output) => lines.extend(output),
                Reply::SearchResults { lines: output, .. } => lines.extend(output),
                Reply::Exit => break,
            }
        }
        lines
    }
}

use test_utils::*;

#[test]
fn test_unknown_video_leaves_state_unchanged() {
    let mut session = library_session();
    session.create_playlist("fun").unwrap();

    for id in ["nope", "AMAZING_CATS_VIDEO_ID", ""] {
        assert!(session.play_video(id).unwrap_err().is_not_found());
        assert!(session.flag_video(id, Some("spam")).unwrap_err().is_not_found());
        assert!(session.add_to_playlist("fun", id).unwrap_err().is_not_found());
    }

    assert_eq!(session.playback_state(), &PlaybackState::Stopped);
    assert_eq!(session.moderation().flagged_count(), 0);
    assert!(session.show_playlist("fun").unwrap().entries.is_empty());
}

#[test]
fn test_pause_continue_round_trip() {
    let mut session = library_session();
    session.play_video("funny_dogs_video_id").unwrap();
    session.pause_video().unwrap();
    assert_eq!(
        session.playback_state(),
        &PlaybackState::Paused("funny_dogs_video_id".to_string())
    );
    session.continue_video().unwrap();
    assert_eq!(
        session.playback_state(),
        &PlaybackState::Playing("funny_dogs_video_id".to_string())
    );
}

#[test]
fn test_stop_when_stopped() {
    let mut session = library_session();
    assert_eq!(session.stop_video(), Err(SessionError::NothingPlaying));
    assert_eq!(session.playback_state(), &PlaybackState::Stopped);
}

#[test]
fn test_flag_hides_from_search_and_play_until_allowed() {
    let mut session = library_session();
    session.flag_video("amazing_cats_video_id", None).unwrap();

    let ids: Vec<String> = session
        .search_videos("cat")
        .unwrap()
        .into_iter()
        .map(|video| video.id)
        .collect();
    assert_eq!(ids, vec!["another_cat_video_id"]);
    assert!(matches!(
        session.play_video("amazing_cats_video_id"),
        Err(SessionError::VideoFlagged { .. })
    ));

    session.allow_video("amazing_cats_video_id").unwrap();
    assert_eq!(session.search_videos_with_tag("#CAT").unwrap().len(), 2);
    assert!(session.play_video("amazing_cats_video_id").is_ok());
}

#[test]
fn test_playlist_names_are_case_insensitive() {
    let mut session = library_session();
    let lines = transcript(
        &mut session,
        &[
            "CREATE_PLAYLIST \"My List\"",
            "ADD_TO_PLAYLIST \"my list\" funny_dogs_video_id",
        ],
    );
    assert_eq!(
        lines,
        vec![
            "Successfully created new playlist: My List",
            "Added video to my list: Funny Dogs",
        ]
    );
    assert_eq!(session.show_all_playlists(), vec!["My List"]);
    assert_eq!(session.show_playlist("MY LIST").unwrap().entries.len(), 1);
}

#[test]
fn test_duplicate_add_keeps_length() {
    let mut session = library_session();
    session.create_playlist("fun").unwrap();
    session.add_to_playlist("fun", "nothing_video_id").unwrap();
    assert!(matches!(
        session.add_to_playlist("FUN", "nothing_video_id"),
        Err(SessionError::AlreadyInPlaylist { .. })
    ));
    assert_eq!(session.playlists().get("fun").unwrap().len(), 1);
}

#[test]
fn test_play_pause_flag_search_scenario() {
    let mut session = two_video_session();

    session.play_video("id1").unwrap();
    assert_eq!(session.playback_state(), &PlaybackState::Playing("id1".to_string()));
    session.pause_video().unwrap();
    assert_eq!(session.playback_state(), &PlaybackState::Paused("id1".to_string()));
    session.continue_video().unwrap();
    assert_eq!(session.playback_state(), &PlaybackState::Playing("id1".to_string()));

    let lines = transcript(&mut session, &["FLAG_VIDEO id2 \"spam\""]);
    assert_eq!(lines, vec!["Successfully flagged video: T2 (reason: spam)"]);
    assert_eq!(session.moderation().reason("id2"), Some("spam"));

    let results = session.search_videos("T").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "id1");
}

#[test]
fn test_create_delete_scenario() {
    let mut session = two_video_session();
    let lines = transcript(
        &mut session,
        &[
            "CREATE_PLAYLIST Fun",
            "CREATE_PLAYLIST fun",
            "DELETE_PLAYLIST FUN",
            "SHOW_PLAYLIST Fun",
        ],
    );
    assert_eq!(
        lines,
        vec![
            "Successfully created new playlist: Fun",
            "Cannot create playlist: A playlist with the same name already exists",
            "Deleted playlist: FUN",
            "Cannot show playlist Fun: Playlist does not exist",
        ]
    );
}

#[test]
fn test_play_random_with_everything_flagged() {
    let mut session = two_video_session();
    session.play_video("id1").unwrap();
    session.flag_video("id1", None).unwrap();
    session.flag_video("id2", None).unwrap();

    assert_eq!(session.play_random_video(), Err(SessionError::NoPlayableVideos));
    // flagging never stops what is already playing
    assert_eq!(session.playback_state(), &PlaybackState::Playing("id1".to_string()));
}

#[test]
fn test_flagged_video_is_annotated_in_playlist() {
    let mut session = library_session();
    let lines = transcript(
        &mut session,
        &[
            "CREATE_PLAYLIST my_playlist",
            "ADD_TO_PLAYLIST my_playlist amazing_cats_video_id",
            "FLAG_VIDEO amazing_cats_video_id dont_like_cats",
            "ADD_TO_PLAYLIST my_playlist amazing_cats_video_id",
            "SHOW_PLAYLIST my_playlist",
        ],
    );
    assert_eq!(
        lines[3],
        "Cannot add video to my_playlist: Video is currently flagged (reason: dont_like_cats)"
    );
    assert_eq!(
        lines[5],
        "  Amazing Cats (amazing_cats_video_id) [#cat #animal] - FLAGGED (reason: dont_like_cats)"
    );
}

#[test]
fn test_show_all_videos_sorted_by_title() {
    let mut session = library_session();
    let lines = transcript(&mut session, &["NUMBER_OF_VIDEOS", "SHOW_ALL_VIDEOS"]);
    assert_eq!(lines[0], "5 videos in the library");
    assert_eq!(lines[1], "Here's a list of all available videos:");
    assert_eq!(lines[2], "  Amazing Cats (amazing_cats_video_id) [#cat #animal]");
    assert_eq!(lines[5], "  Life at Google (life_at_google_video_id) [#google #career]");
    assert_eq!(lines[6], "  Video about nothing (nothing_video_id) []");
}

#[test]
fn test_empty_catalog_search_is_distinct_from_no_match() {
    let mut empty = session_from(&InMemoryCatalog::new(Vec::new()));
    assert_eq!(
        transcript(&mut empty, &["SEARCH_VIDEOS cat"]),
        vec!["No videos in the library"]
    );

    let mut session = library_session();
    assert_eq!(
        transcript(&mut session, &["SEARCH_VIDEOS zzz"]),
        vec!["No search results for zzz"]
    );
}
