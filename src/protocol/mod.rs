//! Protocol Module
//!
//! Defines the command script format and the report blocks written for it.
//!
//! ## Command Format
//! ```text
//! operation<TAB>arg1[<TAB>arg2]
//! ```
//!
//! ### Commands (keyword is case-insensitive)
//! - search: arg1 = rle-encoded pattern, decoded before searching
//! - diff:   arg1, arg2 = protein names, taken literally
//! - mode:   arg1 = protein name, taken literally
//!
//! ### Report Block
//! ```text
//! Command: SEARCH
//!  001 3A organism protein
//!  Homo sapiens (P1)
//! ------------------------------------------------------------
//! ```
//!
//! Unknown operations, and known ones with too few arguments, still get the
//! first two lines and the separator, with nothing in between.

mod command;
mod response;
mod codec;

pub use command::{Command, CommandLine, CommandType};
pub use response::Response;
pub use codec::{describe, parse_command_line, write_block, write_header};
