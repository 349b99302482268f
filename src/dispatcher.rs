//! Command Dispatcher
//!
//! Runs a command script against a loaded store and writes the report.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::config::Config;
use crate::engine::QueryEngine;
use crate::error::{GeneError, Result};
use crate::input::lossy_lines;
use crate::protocol::{parse_command_line, write_block, write_header, CommandType, Response};
use crate::store::{load_table_file, LoadSummary, RecordStore};

/// Counts for one batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Numbered commands (every non-blank line)
    pub commands: usize,
    pub searches: usize,
    pub diffs: usize,
    pub modes: usize,

    /// Unknown operations and commands missing arguments
    pub skipped: usize,
}

impl BatchSummary {
    fn record(&mut self, kind: CommandType) {
        match kind {
            CommandType::Search => self.searches += 1,
            CommandType::Diff => self.diffs += 1,
            CommandType::Mode => self.modes += 1,
        }
    }
}

/// Owns the store for a batch and drives it one command at a time
pub struct Dispatcher {
    store: RecordStore,
    load_summary: LoadSummary,
    config: Config,
}

impl Dispatcher {
    /// Create a dispatcher over an already loaded store
    ///
    /// Only the record count is known here, so no skipped lines are reported.
    pub fn new(store: RecordStore, config: Config) -> Self {
        let load_summary = LoadSummary {
            records_loaded: store.len(),
            ..LoadSummary::default()
        };
        Self::with_summary(store, load_summary, config)
    }

    /// Create a dispatcher keeping the counts from loading the store
    pub fn with_summary(store: RecordStore, load_summary: LoadSummary, config: Config) -> Self {
        Self {
            store,
            load_summary,
            config,
        }
    }

    /// Load the table named in the config
    ///
    /// Fails if the table cannot be read, so no batch runs on partial data.
    pub fn open(config: Config) -> Result<Self> {
        let (store, summary) = load_table_file(&config.sequences_path)?;
        Ok(Self::with_summary(store, summary, config))
    }

    /// Run the configured script into the configured output file
    pub fn run_files(&self) -> Result<BatchSummary> {
        self.run_paths(&self.config.commands_path, &self.config.output_path)
    }

    /// Run a script file into a report file
    pub fn run_paths(&self, commands: &Path, output: &Path) -> Result<BatchSummary> {
        let script = File::open(commands).map_err(|e| {
            GeneError::Script(format!("Cannot open {}: {}", commands.display(), e))
        })?;
        let report = File::create(output).map_err(|source| GeneError::Report {
            context: format!("Cannot create {}", output.display()),
            source,
        })?;

        tracing::debug!("Running {} into {}", commands.display(), output.display());
        self.run(BufReader::new(script), BufWriter::new(report))
    }

    /// Run a script, writing the header and one block per command
    ///
    /// Blocks are written in script order as each command finishes. Invalid
    /// UTF-8 in the script is replaced, not rejected.
    pub fn run<R: BufRead, W: Write>(&self, script: R, mut report: W) -> Result<BatchSummary> {
        let engine = QueryEngine::new(&self.store);
        let separator = self.config.separator();
        let mut summary = BatchSummary::default();

        write_header(&mut report, &self.config).map_err(report_error)?;

        for line in lossy_lines(script) {
            let line = line.map_err(|e| GeneError::Script(e.to_string()))?;
            let Some(command_line) = parse_command_line(&line) else {
                continue;
            };
            summary.commands += 1;

            let response = match command_line.to_command() {
                Some(command) => {
                    tracing::trace!("Command {}: {:?}", summary.commands, command);
                    summary.record(command.command_type());
                    engine.execute(&command)
                }
                None => {
                    match command_line.command_type() {
                        Some(kind) => tracing::warn!(
                            "Command {}: {} needs {} argument(s), got {}",
                            summary.commands,
                            kind.keyword(),
                            kind.arity(),
                            command_line.args.len()
                        ),
                        None => tracing::warn!(
                            "Command {}: unrecognized operation {:?}",
                            summary.commands,
                            command_line.operation
                        ),
                    }
                    summary.skipped += 1;
                    Response::Empty
                }
            };

            write_block(&mut report, summary.commands, &command_line, &response, &separator)
                .map_err(report_error)?;
        }

        report.flush().map_err(|source| GeneError::Report {
            context: "Flush failed".to_string(),
            source,
        })?;

        tracing::info!(
            "Batch complete: {} commands ({} search, {} diff, {} mode, {} skipped)",
            summary.commands,
            summary.searches,
            summary.diffs,
            summary.modes,
            summary.skipped
        );

        Ok(summary)
    }

    /// The store this dispatcher owns
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Counts from loading the store
    pub fn load_summary(&self) -> LoadSummary {
        self.load_summary
    }
}

fn report_error(error: GeneError) -> GeneError {
    match error {
        GeneError::Io(source) => GeneError::Report {
            context: "Write failed".to_string(),
            source,
        },
        other => other,
    }
}
