use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use splitcal_core::{config, pipeline};

/// Split an iCalendar feed into one calendar per keyword.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Arguments {
    /// the JSON file naming the feed and the calendars to derive
    #[arg(long, default_value = config::DEFAULT_PATH)]
    pub config: PathBuf,
    /// the directory the derived calendars are written to
    #[arg(long, default_value = pipeline::DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,
    /// also log the requests and their responses
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Arguments::parse();
    let log_config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();
    TermLogger::init(
        args.log_level(),
        log_config,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;
    pipeline::run(&args.config, &args.output_dir)
        .await
        .with_context(|| format!("failed to split calendars from {}", args.config.display()))?;
    Ok(())
}
