//! Command definitions
//!
//! Represents commands read from the script.

use crate::rle;

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Search,
    Diff,
    Mode,
}

impl CommandType {
    /// Match an operation keyword, ignoring ASCII case and surrounding space
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let keyword = keyword.trim();
        [CommandType::Search, CommandType::Diff, CommandType::Mode]
            .into_iter()
            .find(|kind| kind.keyword().eq_ignore_ascii_case(keyword))
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            CommandType::Search => "search",
            CommandType::Diff => "diff",
            CommandType::Mode => "mode",
        }
    }

    /// Number of arguments the command needs
    pub fn arity(&self) -> usize {
        match self {
            CommandType::Search | CommandType::Mode => 1,
            CommandType::Diff => 2,
        }
    }
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Find records containing a decoded pattern
    Search { pattern: String },

    /// Compare two proteins' sequences
    Diff { first: String, second: String },

    /// Most frequent letter of one protein
    Mode { protein: String },
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Search { .. } => CommandType::Search,
            Command::Diff { .. } => CommandType::Diff,
            Command::Mode { .. } => CommandType::Mode,
        }
    }
}

/// One non-blank script line, split but not yet interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// First field, trimmed, case preserved
    pub operation: String,

    /// Remaining fields, trimmed
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn command_type(&self) -> Option<CommandType> {
        CommandType::from_keyword(&self.operation)
    }

    /// Interpret the line
    ///
    /// `None` for unknown operations and for known ones missing arguments.
    /// Only the search pattern is run-length decoded.
    pub fn to_command(&self) -> Option<Command> {
        let kind = self.command_type()?;
        if self.args.len() < kind.arity() {
            return None;
        }

        let command = match kind {
            CommandType::Search => Command::Search {
                pattern: rle::decode(&self.args[0]),
            },
            CommandType::Diff => Command::Diff {
                first: self.args[0].clone(),
                second: self.args[1].clone(),
            },
            CommandType::Mode => Command::Mode {
                protein: self.args[0].clone(),
            },
        };
        Some(command)
    }
}
