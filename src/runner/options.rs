use std::path::PathBuf;

use clap::Parser;
use crate::prelude::*;

#[derive(Clone, Debug, Parser)]
#[command(version, about = "Drops comma-separated shape sequences, one per line, and prints the resulting heights")]
pub struct RunnerOptions {
    #[arg(short, long)]
    pub log_level: Option<String>,

    #[arg(short, long, default_value_t = DEFAULT_BOARD_WIDTH)]
    pub width: usize,

    #[arg(short, long, default_value_t = false)]
    pub all_heights: bool,

    #[arg(short, long, default_value_t = false)]
    pub strict: bool,

    #[arg(short, long, default_value_t = false)]
    pub print_boards: bool,

    /// Read sequences from this file instead of stdin.
    pub input: Option<PathBuf>,
}

impl RunnerOptions {
    pub fn runner_config(&self) -> RunnerConfig {
        let mut config = RunnerConfig::default();

        config.width = self.width;
        if self.all_heights {
            config.report = Report::AllHeights;
        }
        if self.strict {
            config.strict = true;
        }
        if self.print_boards {
            config.print_boards = true;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::RunnerOptions;
    use crate::prelude::*;

    #[test]
    fn defaults() {
        let options = RunnerOptions::parse_from(["skyline"]);
        let config = options.runner_config();
        assert_eq!(config.width, DEFAULT_BOARD_WIDTH);
        assert_eq!(config.report, Report::LastHeight);
        assert!(!config.strict && !config.print_boards);
        assert!(options.input.is_none());
    }

    #[test]
    fn flags() {
        let options = RunnerOptions::parse_from(["skyline", "-w", "4", "-a", "--strict", "-p", "-l", "debug", "moves.txt"]);
        let config = options.runner_config();
        assert_eq!(config.width, 4);
        assert_eq!(config.report, Report::AllHeights);
        assert!(config.strict && config.print_boards);
        assert_eq!(options.log_level.as_deref(), Some("debug"));
        assert_eq!(options.input.as_deref(), Some(std::path::Path::new("moves.txt")));
    }
}
