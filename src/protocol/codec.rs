//! Protocol codec
//!
//! Parsing of script lines and writing of report text.
//!
//! ## Report Layout
//! ```text
//! [author]
//! title
//! -----------------------------------------
//! Command: <OPERATION>          ┐
//!  NNN <description>            │ one block
//! <content lines>               │ per command
//! -----------------------------------------  ┘
//! ```

use std::io::Write;

use super::{CommandLine, CommandType, Response};
use crate::config::Config;
use crate::error::Result;

// =============================================================================
// Script Parsing
// =============================================================================

/// Split a script line on tabs
///
/// Returns `None` for blank lines, which neither execute nor take a number.
pub fn parse_command_line(line: &str) -> Option<CommandLine> {
    if line.trim().is_empty() {
        return None;
    }

    let mut fields = line.split('\t').map(str::trim);
    let operation = fields.next().unwrap_or_default().to_string();
    let args = fields.map(String::from).collect();

    Some(CommandLine { operation, args })
}

/// Second header line text for a command, built from its raw arguments
pub fn describe(line: &CommandLine) -> String {
    let kind = match line.command_type() {
        Some(kind) if line.args.len() >= kind.arity() => kind,
        Some(kind) => return kind.keyword().to_string(),
        None => return line.operation.clone(),
    };

    match kind {
        CommandType::Search => format!("{} organism protein", line.args[0]),
        CommandType::Diff => format!("{} {} amino-acids difference:", line.args[0], line.args[1]),
        CommandType::Mode => format!("{} amino-acid occurs:", line.args[0]),
    }
}

// =============================================================================
// Report Writing
// =============================================================================

/// Write the report header
pub fn write_header<W: Write>(writer: &mut W, config: &Config) -> Result<()> {
    if let Some(author) = &config.author {
        writeln!(writer, "{}", author)?;
    }
    writeln!(writer, "{}", config.title)?;
    writeln!(writer, "{}", config.separator())?;
    Ok(())
}

/// Write one command's block
///
/// `number` is 1-based and printed zero-padded to three digits.
pub fn write_block<W: Write>(
    writer: &mut W,
    number: usize,
    line: &CommandLine,
    response: &Response,
    separator: &str,
) -> Result<()> {
    writeln!(writer, "Command: {}", line.operation.to_uppercase())?;
    writeln!(writer, " {:03} {} ", number, describe(line))?;
    for content in response.lines() {
        writeln!(writer, "{}", content)?;
    }
    writeln!(writer, "{}", separator)?;
    Ok(())
}
