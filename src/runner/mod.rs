mod options;

use std::io::{BufRead, Write};

use itertools::Itertools;
pub use options::RunnerOptions;

use crate::prelude::*;

/// What to print for a line that played through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Report {
    LastHeight,
    AllHeights,
}

#[derive(Clone, Debug)]
pub struct RunnerConfig {
    pub width: usize,
    pub report: Report,
    pub strict: bool,
    pub print_boards: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        RunnerConfig {
            width: DEFAULT_BOARD_WIDTH,
            report: Report::LastHeight,
            strict: false,
            print_boards: false,
        }
    }
}

/// Tallies for a finished run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub lines: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Plays one sequence per input line, each on a fresh board, and writes one result line per sequence.
pub struct SequenceRunner<'a> {
    catalog: &'a ShapeCatalog,
    config: RunnerConfig,
}

impl<'a> SequenceRunner<'a> {
    /// Produces a new runner over a built catalog.
    pub fn new(config: RunnerConfig, catalog: &'a ShapeCatalog) -> SequenceRunner<'a> {
        SequenceRunner { catalog, config }
    }

    /// Runs every line of `input`, writing results to `output`.
    ///
    /// A line that fails prints `err` and the run carries on with the next line, unless the
    /// runner is strict, in which case the error ends the run.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for (i, line) in input.lines().enumerate() {
            let line = line.with_context(|| format!("could not read line {}", i + 1))?;
            let line = line.trim();
            if line.is_empty() {
                log::debug!("skipping blank line {}", i + 1);
                summary.skipped += 1;
                continue;
            }

            summary.lines += 1;
            match self.apply(line) {
                Ok(heights) => {
                    log::debug!("line {} completed: {}", i + 1, heights.iter().join(","));
                    writeln!(output, "{}", self.report(&heights))?;
                },
                Err(err) => {
                    log::warn!("line {} rejected: {:#}", i + 1, err);
                    summary.failed += 1;
                    writeln!(output, "err")?;
                    if self.config.strict {
                        output.flush()?;
                        return Err(err.context(format!("line {} failed in strict mode", i + 1)));
                    }
                },
            }
        }

        output.flush()?;
        Ok(summary)
    }

    /// Plays a single comma-separated sequence on a fresh board, returning the height after each move.
    fn apply(&self, line: &str) -> Result<Vec<usize>> {
        log::info!("Processing line: {line}");
        let mut board = Board::new(self.config.width, self.catalog)?;
        let mut heights = vec![];

        let mut sequence = board.play_sequence(line.split(','));
        while let Some(height) = sequence.next() {
            heights.push(height?);
            if self.config.print_boards {
                log::debug!("after move {}:\n{}", heights.len(), sequence.board().pretty());
            }
        }
        Ok(heights)
    }

    fn report(&self, heights: &[usize]) -> String {
        match self.config.report {
            Report::LastHeight => heights.last().map_or(String::new(), |h| h.to_string()),
            Report::AllHeights => heights.iter().join(","),
        }
    }
}
