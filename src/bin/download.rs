use clap::Parser;
use std::time::Duration;
use strand::cli::Common;
use strand::{Runner, demo};

/// Simulates downloading several files at once, one thread per file.
#[derive(Debug, Parser)]
#[command(name = "download", version)]
struct Cli {
    /// Files to "download".
    #[arg(default_values_t = demo::DOWNLOAD_FILES.map(String::from))]
    files: Vec<String>,

    /// Simulated download time per file, in milliseconds.
    #[arg(long, default_value_t = demo::DOWNLOAD_DURATION.as_millis() as u64)]
    duration_ms: u64,

    #[command(flatten)]
    common: Common,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.common.init_tracing();

    let runner = Runner::builder()
        .sink(cli.common.console())
        .thread_name_prefix("download")
        .build();

    let tasks = demo::downloads(cli.files, Duration::from_millis(cli.duration_ms));
    let handles = runner.launch_all(tasks)?;

    cli.common.finish(handles)
}
