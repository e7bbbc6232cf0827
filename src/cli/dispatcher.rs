//! Command dispatcher
//!
//! Maps a tokenized command name to a session operation through a static
//! table, validating argument count before the session is touched.

use std::collections::HashMap;

use tracing::debug;

use crate::app::SessionController;
use crate::cli::render;
use crate::cli::tokenizer::CommandLine;
use crate::domain::errors::SessionResult;
use crate::domain::model::Video;
use crate::error::{VidcatError, VidcatResult};

/// Every command the session understands
pub const RECOGNIZED_COMMANDS: &[&str] = &[
    "NUMBER_OF_VIDEOS",
    "SHOW_ALL_VIDEOS",
    "PLAY",
    "PLAY_RANDOM",
    "STOP",
    "PAUSE",
    "CONTINUE",
    "SHOW_PLAYING",
    "CREATE_PLAYLIST",
    "ADD_TO_PLAYLIST",
    "REMOVE_FROM_PLAYLIST",
    "CLEAR_PLAYLIST",
    "DELETE_PLAYLIST",
    "SHOW_PLAYLIST",
    "SHOW_ALL_PLAYLISTS",
    "SEARCH_VIDEOS",
    "SEARCH_VIDEOS_WITH_TAG",
    "FLAG_VIDEO",
    "ALLOW_VIDEO",
    "HELP",
    "EXIT",
];

/// What the loop should do with a dispatched command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print these lines
    Lines(Vec<String>),
    /// Print these lines, then offer to play one of the candidates by number
    SearchResults {
        lines: Vec<String>,
        candidates: Vec<String>,
    },
    /// Leave the session loop
    Exit,
}

/// Accepted argument counts, excluding the command name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    Between(usize, usize),
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            Arity::Exact(n) => count == n,
            Arity::Between(min, max) => (min..=max).contains(&count),
        }
    }
}

type Handler = fn(&mut SessionController, &[String]) -> Reply;

/// One row of the command table
pub struct CommandSpec {
    pub name: &'static str,
    pub arity: Arity,
    pub usage: &'static str,
    handler: Handler,
}

static COMMAND_TABLE: &[CommandSpec] = &[
    CommandSpec {
        name: "NUMBER_OF_VIDEOS",
        arity: Arity::Exact(0),
        usage: "Please enter NUMBER_OF_VIDEOS command without arguments.",
        handler: |session, _| Reply::Lines(render::number_of_videos(session.number_of_videos())),
    },
    CommandSpec {
        name: "SHOW_ALL_VIDEOS",
        arity: Arity::Exact(0),
        usage: "Please enter SHOW_ALL_VIDEOS command without arguments.",
        handler: |session, _| Reply::Lines(render::all_videos(&session.show_all_videos())),
    },
    CommandSpec {
        name: "PLAY",
        arity: Arity::Exact(1),
        usage: "Please enter PLAY command followed by video_id.",
        handler: |session, args| Reply::Lines(render::play(session.play_video(&args[0]))),
    },
    CommandSpec {
        name: "PLAY_RANDOM",
        arity: Arity::Exact(0),
        usage: "Please enter PLAY_RANDOM command without arguments.",
        handler: |session, _| Reply::Lines(render::play_random(session.play_random_video())),
    },
    CommandSpec {
        name: "STOP",
        arity: Arity::Exact(0),
        usage: "Please enter STOP command without arguments.",
        handler: |session, _| Reply::Lines(render::stop(session.stop_video())),
    },
    CommandSpec {
        name: "PAUSE",
        arity: Arity::Exact(0),
        usage: "Please enter PAUSE command without arguments.",
        handler: |session, _| {
            let result = session.pause_video();
            Reply::Lines(render::pause(result, session.catalog()))
        },
    },
    CommandSpec {
        name: "CONTINUE",
        arity: Arity::Exact(0),
        usage: "Please enter CONTINUE command without arguments.",
        handler: |session, _| Reply::Lines(render::resume(session.continue_video())),
    },
    CommandSpec {
        name: "SHOW_PLAYING",
        arity: Arity::Exact(0),
        usage: "Please enter SHOW_PLAYING command without arguments.",
        handler: |session, _| Reply::Lines(render::show_playing(session.show_playing())),
    },
    CommandSpec {
        name: "CREATE_PLAYLIST",
        arity: Arity::Exact(1),
        usage: "Please enter CREATE_PLAYLIST command followed by a playlist name.",
        handler: |session, args| {
            Reply::Lines(render::create_playlist(session.create_playlist(&args[0])))
        },
    },
    CommandSpec {
        name: "ADD_TO_PLAYLIST",
        arity: Arity::Exact(2),
        usage: "Please enter ADD_TO_PLAYLIST command followed by playlist name and video_id.",
        handler: |session, args| {
            let result = session.add_to_playlist(&args[0], &args[1]);
            Reply::Lines(render::add_to_playlist(&args[0], result))
        },
    },
    CommandSpec {
        name: "REMOVE_FROM_PLAYLIST",
        arity: Arity::Exact(2),
        usage: "Please enter REMOVE_FROM_PLAYLIST command followed by playlist name and video_id.",
        handler: |session, args| {
            let result = session.remove_from_playlist(&args[0], &args[1]);
            Reply::Lines(render::remove_from_playlist(&args[0], result))
        },
    },
    CommandSpec {
        name: "CLEAR_PLAYLIST",
        arity: Arity::Exact(1),
        usage: "Please enter CLEAR_PLAYLIST command followed by a playlist name.",
        handler: |session, args| {
            let result = session.clear_playlist(&args[0]);
            Reply::Lines(render::clear_playlist(&args[0], result))
        },
    },
    CommandSpec {
        name: "DELETE_PLAYLIST",
        arity: Arity::Exact(1),
        usage: "Please enter DELETE_PLAYLIST command followed by a playlist name.",
        handler: |session, args| {
            let result = session.delete_playlist(&args[0]);
            Reply::Lines(render::delete_playlist(&args[0], result))
        },
    },
    CommandSpec {
        name: "SHOW_PLAYLIST",
        arity: Arity::Exact(1),
        usage: "Please enter SHOW_PLAYLIST command followed by a playlist name.",
        handler: |session, args| {
            Reply::Lines(render::show_playlist(&args[0], session.show_playlist(&args[0])))
        },
    },
    CommandSpec {
        name: "SHOW_ALL_PLAYLISTS",
        arity: Arity::Exact(0),
        usage: "Please enter SHOW_ALL_PLAYLISTS command without arguments.",
        handler: |session, _| Reply::Lines(render::all_playlists(&session.show_all_playlists())),
    },
    CommandSpec {
        name: "SEARCH_VIDEOS",
        arity: Arity::Exact(1),
        usage: "Please enter SEARCH_VIDEOS command followed by a search term.",
        handler: |session, args| search_reply(&args[0], session.search_videos(&args[0])),
    },
    CommandSpec {
        name: "SEARCH_VIDEOS_WITH_TAG",
        arity: Arity::Exact(1),
        usage: "Please enter SEARCH_VIDEOS_WITH_TAG command followed by a video tag.",
        handler: |session, args| search_reply(&args[0], session.search_videos_with_tag(&args[0])),
    },
    CommandSpec {
        name: "FLAG_VIDEO",
        arity: Arity::Between(1, 2),
        usage: "Please enter FLAG_VIDEO command followed by a video_id and an optional flag reason.",
        handler: |session, args| {
            let reason = args.get(1).map(String::as_str);
            Reply::Lines(render::flag(session.flag_video(&args[0], reason)))
        },
    },
    CommandSpec {
        name: "ALLOW_VIDEO",
        arity: Arity::Exact(1),
        usage: "Please enter ALLOW_VIDEO command followed by a video_id.",
        handler: |session, args| Reply::Lines(render::allow(session.allow_video(&args[0]))),
    },
    CommandSpec {
        name: "HELP",
        arity: Arity::Exact(0),
        usage: "Please enter HELP command without arguments.",
        handler: |_, _| Reply::Lines(render::help()),
    },
    CommandSpec {
        name: "EXIT",
        arity: Arity::Exact(0),
        usage: "Please enter EXIT command without arguments.",
        handler: |_, _| Reply::Exit,
    },
];

fn search_reply(query: &str, result: SessionResult<Vec<Video>>) -> Reply {
    match result {
        Ok(videos) => Reply::SearchResults {
            lines: render::search(query, &videos),
            candidates: videos.into_iter().map(|video| video.id).collect(),
        },
        Err(err) => Reply::Lines(vec![err.to_string()]),
    }
}

/// Routes command lines to the session
pub struct Dispatcher {
    commands: HashMap<&'static str, &'static CommandSpec>,
}

impl Dispatcher {
    /// Build the dispatcher, checking the table covers exactly the recognized commands
    pub fn new() -> VidcatResult<Self> {
        Self::from_table(COMMAND_TABLE)
    }

    fn from_table(table: &'static [CommandSpec]) -> VidcatResult<Self> {
        let commands: HashMap<&'static str, &'static CommandSpec> =
            table.iter().map(|spec| (spec.name, spec)).collect();

        let missing: Vec<&str> = RECOGNIZED_COMMANDS
            .iter()
            .copied()
            .filter(|name| !commands.contains_key(name))
            .collect();
        let unexpected: Vec<&str> = commands
            .keys()
            .copied()
            .filter(|name| !RECOGNIZED_COMMANDS.contains(name))
            .collect();
        if !missing.is_empty() || !unexpected.is_empty() || commands.len() != table.len() {
            let mut problems = missing;
            problems.extend(unexpected);
            return Err(VidcatError::IncompleteCommandTable {
                missing: problems.join(", "),
            });
        }

        Ok(Self { commands })
    }

    pub fn lookup(&self, name: &str) -> Option<&'static CommandSpec> {
        self.commands.get(name).copied()
    }

    /// Tokenize and run one input line
    pub fn dispatch_line(&self, session: &mut SessionController, line: &str) -> Reply {
        match CommandLine::parse(line) {
            Some(command) => self.dispatch(session, &command),
            None => Reply::Lines(vec![render::INVALID_COMMAND.to_string()]),
        }
    }

    /// Run one tokenized command
    pub fn dispatch(&self, session: &mut SessionController, command: &CommandLine) -> Reply {
        let Some(spec) = self.lookup(&command.name) else {
            debug!("Unknown command: {}", command.name);
            return Reply::Lines(vec![render::INVALID_COMMAND.to_string()]);
        };

        if !spec.arity.accepts(command.args.len()) {
            debug!(
                "Rejected {} with {} arguments",
                spec.name,
                command.args.len()
            );
            return Reply::Lines(vec![spec.usage.to_string()]);
        }

        debug!("Dispatching {} {:?}", spec.name, command.args);
        (spec.handler)(session, &command.args)
    }
}
