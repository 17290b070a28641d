use std::{fs::File, io::BufReader};

use clap::Parser;
use flexi_logger::{AdaptiveFormat, Logger, WriteMode};
use lib_skyline::prelude::*;

fn main() -> Result<()> {
    // Initialize program options and environment.
    dotenvy::dotenv().ok();
    let options = RunnerOptions::parse();
    let _logger = Logger::try_with_env_or_str(options.log_level.clone().unwrap_or("info".into()).as_str())?
        .write_mode(WriteMode::BufferAndFlush)
        .log_to_stderr()
        .adaptive_format_for_stderr(
            match cfg!(debug_assertions) {
                true => AdaptiveFormat::WithThread,
                _    => AdaptiveFormat::Default
            })
        .set_palette("b196;208;195;111;67".to_owned())
        .start()?;

    // Build the catalog once and play every line against it.
    let catalog = ShapeCatalog::new();
    let mut runner = SequenceRunner::new(options.runner_config(), &catalog);
    let mut stdout = std::io::stdout().lock();
    let result = match &options.input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("could not open {}", path.display()))?;
            runner.run(BufReader::new(file), &mut stdout)
        },
        None => runner.run(std::io::stdin().lock(), &mut stdout),
    };

    match result {
        Ok(summary) => {
            log::info!("played {} lines ({} failed, {} blank)", summary.lines, summary.failed, summary.skipped);
            Ok(())
        },
        Err(e) => {
            log::error!("fatal error: {:#}", e);
            Err(e)
        }
    }
}
