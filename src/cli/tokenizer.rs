//! Command tokenizer
//!
//! Splits one input line on whitespace. A double-quoted span is a single token
//! with the quotes removed, so `CREATE_PLAYLIST "My List"` has one argument.

/// A tokenized command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// Upper-cased command name
    pub name: String,
    /// Remaining tokens, verbatim
    pub args: Vec<String>,
}

impl CommandLine {
    /// Tokenize a line; `None` for a blank line
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = tokenize(line).into_iter();
        let name = tokens.next()?.to_uppercase();
        Some(Self {
            name,
            args: tokens.collect(),
        })
    }
}

/// Split a line into tokens
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quoted = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                quoted = !quoted;
                in_token = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_token {
        tokens.push(current);
    }
    tokens
}
