//! Interactive read-eval-print loop
//!
//! Reads command lines until `EXIT` or end of input and writes the transcript.
//! Generic over reader and writer so tests can drive it with in-memory buffers.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::app::SessionController;
use crate::cli::dispatcher::{Dispatcher, Reply};
use crate::cli::render;

pub const BANNER: [&str; 2] = [
    "Hello and welcome to vidcat, what would you like to do?",
    "Enter HELP for list of available commands or EXIT to terminate.",
];

pub const FAREWELL: &str = "vidcat has now terminated its execution. Thank you and goodbye!";

/// Loop options taken from the session configuration
#[derive(Debug, Clone)]
pub struct ReplOptions {
    pub prompt: String,
    pub search_prompt: bool,
}

impl Default for ReplOptions {
    fn default() -> Self {
        Self {
            prompt: "YT> ".to_string(),
            search_prompt: true,
        }
    }
}

pub struct Repl<R, W> {
    input: R,
    output: W,
    options: ReplOptions,
    dispatcher: Dispatcher,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(input: R, output: W, options: ReplOptions, dispatcher: Dispatcher) -> Self {
        Self {
            input,
            output,
            options,
            dispatcher,
        }
    }

    /// Run until `EXIT` or end of input
    pub fn run(&mut self, session: &mut SessionController) -> io::Result<()> {
        for line in BANNER {
            writeln!(self.output, "{}", line)?;
        }

        let mut handled = 0usize;
        loop {
            write!(self.output, "{}", self.options.prompt)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                // keep the farewell on its own line after a dangling prompt
                writeln!(self.output)?;
                break;
            };
            handled += 1;

            match self.dispatcher.dispatch_line(session, &line) {
                Reply::Lines(lines) => self.write_lines(&lines)?,
                Reply::SearchResults { lines, candidates } => {
                    self.write_lines(&lines)?;
                    if self.options.search_prompt {
                        self.follow_up(session, &candidates)?;
                    }
                }
                Reply::Exit => break,
            }
        }

        writeln!(self.output, "{}", FAREWELL)?;
        self.output.flush()?;
        info!("Session finished after {} commands", handled);
        Ok(())
    }

    /// Offer to play one of the search candidates by its 1-based number
    fn follow_up(&mut self, session: &mut SessionController, candidates: &[String]) -> io::Result<()> {
        for line in render::SEARCH_PROMPT {
            writeln!(self.output, "{}", line)?;
        }
        self.output.flush()?;

        let Some(answer) = self.read_line()? else {
            return Ok(());
        };
        let choice = answer
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| candidates.get(index));

        match choice {
            Some(video_id) => {
                debug!("Search follow-up selected {}", video_id);
                let lines = render::play(session.play_video(video_id));
                self.write_lines(&lines)
            }
            None => {
                debug!("Search follow-up declined: {:?}", answer);
                Ok(())
            }
        }
    }

    /// Next input line without its terminator. Invalid UTF-8 is replaced, not fatal.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buffer = Vec::new();
        if self.input.read_until(b'\n', &mut buffer)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buffer);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn write_lines(&mut self, lines: &[String]) -> io::Result<()> {
        for line in lines {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }
}
