use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CATALOG: &str = "\
Amazing Cats | amazing_cats_video_id | #cat , #animal
Funny Dogs | funny_dogs_video_id | #dog , #animal
Life at Google | life_at_google_video_id | #google , #career
";

/// A clean working directory holding `videos.txt`, with no config file
fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("videos.txt"), CATALOG).unwrap();
    dir
}

fn vidcat(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("vidcat").unwrap();
    cmd.current_dir(dir.path());
    for var in [
        "VIDCAT_CATALOG",
        "VIDCAT_PROMPT",
        "VIDCAT_SEARCH_PROMPT",
        "VIDCAT_SEED",
        "VIDCAT_LOG_LEVEL",
        "VIDCAT_LOG_FORMAT",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_session_transcript() {
    let dir = workspace();
    let stdout = stdout_of(
        vidcat(&dir)
            .args(["run", "--prompt", ""])
            .write_stdin("NUMBER_OF_VIDEOS\nPLAY funny_dogs_video_id\nPAUSE\nSHOW_PLAYING\nEXIT\n"),
    );
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[2], "3 videos in the library");
    assert_eq!(lines[3], "Playing video: Funny Dogs");
    assert_eq!(lines[4], "Pausing video: Funny Dogs");
    assert_eq!(
        lines[5],
        "Currently playing: Funny Dogs (funny_dogs_video_id) [#dog #animal] - PAUSED"
    );
    assert!(lines[6].contains("Thank you and goodbye!"));
}

#[test]
fn test_default_subcommand_is_run() {
    let dir = workspace();
    let stdout = stdout_of(vidcat(&dir).write_stdin("NUMBER_OF_VIDEOS\n"));
    assert!(stdout.contains("YT> 3 videos in the library"));
}

#[test]
fn test_search_follow_up_through_stdin() {
    let dir = workspace();
    let stdout = stdout_of(
        vidcat(&dir)
            .args(["run", "--prompt", ""])
            .write_stdin("SEARCH_VIDEOS_WITH_TAG animal\n2\nSHOW_PLAYING\n"),
    );
    assert!(stdout.contains("  1) Amazing Cats (amazing_cats_video_id) [#cat #animal]"));
    assert!(stdout.contains("Playing video: Funny Dogs"));
    assert!(stdout.contains("Currently playing: Funny Dogs"));
}

#[test]
fn test_seeded_random_play_is_repeatable() {
    let dir = workspace();
    let run = |dir: &TempDir| {
        stdout_of(
            vidcat(dir)
                .args(["run", "--seed", "42", "--prompt", ""])
                .write_stdin("PLAY_RANDOM\nPLAY_RANDOM\nPLAY_RANDOM\n"),
        )
    };
    let first = run(&dir);
    assert_eq!(first, run(&dir));
    assert_eq!(first.matches("Playing video: ").count(), 3);
}

#[test]
fn test_missing_catalog_starts_empty() {
    let dir = TempDir::new().unwrap();
    let stdout = stdout_of(
        vidcat(&dir)
            .args(["run", "--catalog", "missing.txt", "--prompt", ""])
            .write_stdin("NUMBER_OF_VIDEOS\nPLAY_RANDOM\nSHOW_ALL_VIDEOS\n"),
    );
    assert!(stdout.contains("0 videos in the library"));
    assert!(stdout.contains("No videos available"));
    assert!(stdout.contains("No videos in the library"));
}

#[test]
fn test_config_file_and_env_override() {
    let dir = workspace();
    fs::write(
        dir.path().join("vidcat.toml"),
        "[vidcat]\nprompt = \"file> \"\nsearch_prompt = false\n",
    )
    .unwrap();

    let stdout = stdout_of(vidcat(&dir).arg("run").write_stdin("SEARCH_VIDEOS cat\n"));
    assert!(stdout.contains("file> Here are the results for cat:"));
    assert!(!stdout.contains("Would you like to play any of the above?"));

    let stdout = stdout_of(
        vidcat(&dir)
            .arg("run")
            .env("VIDCAT_PROMPT", "env> ")
            .write_stdin("NUMBER_OF_VIDEOS\n"),
    );
    assert!(stdout.contains("env> 3 videos in the library"));
}

#[test]
fn test_catalog_json() {
    let dir = workspace();
    let stdout = stdout_of(vidcat(&dir).args(["catalog", "--format", "json"]));
    let videos: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let titles: Vec<&str> = videos
        .as_array()
        .unwrap()
        .iter()
        .map(|video| video["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Amazing Cats", "Funny Dogs", "Life at Google"]);
}

#[test]
fn test_catalog_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    vidcat(&dir)
        .args(["catalog", "--catalog", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load catalog"));
}

#[test]
fn test_invalid_log_level_fails() {
    let dir = workspace();
    vidcat(&dir)
        .args(["--log-level", "loud", "run"])
        .write_stdin("EXIT\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("log_level"));
}

#[test]
fn test_unknown_command_in_session() {
    let dir = workspace();
    vidcat(&dir)
        .args(["run", "--prompt", ""])
        .write_stdin("DANCE\nPLAY a b\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Please enter a valid command, type HELP for a list of available commands.",
        ))
        .stdout(predicate::str::contains(
            "Please enter PLAY command followed by video_id.",
        ));
}
