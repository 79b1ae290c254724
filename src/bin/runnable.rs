use clap::Parser;
use std::num::NonZeroU32;
use std::time::Duration;
use strand::cli::Common;
use strand::report::Event;
use strand::{Runner, demo};

/// Runs counting work handed to the runner as plain closures.
#[derive(Debug, Parser)]
#[command(name = "runnable", version)]
struct Cli {
    /// Number of closures to run.
    #[arg(long, default_value_t = demo::COUNT_TASKS)]
    tasks: usize,

    /// Iterations per closure.
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
    let interval = Duration::from_millis(cli.interval_ms);
    let iterations = cli.iterations.get();

    let mut handles = Vec::with_capacity(cli.tasks);
    for index in 0..cli.tasks {
        let label = index.to_string();

        let handle = runner.spawn(label.clone(), move |cx| {
            for _ in 0..iterations {
                cx.emit(Event::Heartbeat {
                    task: label.clone(),
                    thread: cx.thread_name().to_string(),
                });
                cx.pause(&label, interval);
            }
        })?;

        handles.push(handle);
    }

    cli.common.finish(handles)
}
