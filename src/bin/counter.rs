use clap::Parser;
use std::num::NonZeroU32;
use std::time::Duration;
use strand::cli::Common;
use strand::{Runner, demo};

/// Runs counting tasks, each launched as a task value on its own thread.
#[derive(Debug, Parser)]
#[command(name = "counter", version)]
struct Cli {
    /// Number of counting tasks.
    #[arg(long, default_value_t = demo::COUNT_TASKS)]
    tasks: usize,

    /// Iterations per task.
    #[arg(long, default_value_t = demo::COUNT_ITERATIONS)]
    iterations: NonZeroU32,

    /// Pause after each iteration, in milliseconds.
    #[arg(long, default_value_t = demo::COUNT_INTERVAL.as_millis() as u64)]
    interval_ms: u64,

    #[command(flatten)]
    common: Common,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.common.init_tracing();

    let runner = Runner::builder().sink(cli.common.console()).build();

    let tasks = demo::counters(
        cli.tasks,
        cli.iterations,
        Duration::from_millis(cli.interval_ms),
    );
    let handles = runner.launch_all(tasks)?;

    cli.common.finish(handles)
}
