//! Command-line plumbing shared by the demo binaries.

use crate::report::{ColorMode, Console};
use crate::task::ThreadHandle;

use clap::{Args, ValueEnum};
use std::io;
use tracing_subscriber::EnvFilter;

/// Flags accepted by every binary.
#[derive(Debug, Clone, Args)]
pub struct Common {
    /// Return right after starting the threads instead of waiting for them.
    ///
    /// The process exits as soon as main returns, so detached tasks are cut
    /// short.
    #[arg(long)]
    pub detach: bool,

    /// When to colour completion lines.
    #[arg(long, value_enum, default_value_t = Color::Auto)]
    pub color: Color,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Color {
    Auto,
    Always,
    Never,
}

impl From<Color> for ColorMode {
    fn from(color: Color) -> Self {
        match color {
            Color::Auto => ColorMode::Auto,
            Color::Always => ColorMode::Always,
            Color::Never => ColorMode::Never,
        }
    }
}

impl Common {
    /// Installs the global tracing subscriber.
    ///
    /// `RUST_LOG` wins when set; otherwise `warn`, or `debug` with
    /// `--verbose`. Logs go to stderr so stdout only carries progress lines.
    pub fn init_tracing(&self) {
        let fallback = if self.verbose { "debug" } else { "warn" };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .try_init();
    }

    /// Console sink honouring `--color`.
    pub fn console(&self) -> Console {
        Console::new(self.color.into())
    }

    /// Joins or detaches the launched threads according to `--detach`.
    ///
    /// Every handle is joined even if an earlier one panicked.
    pub fn finish(&self, handles: Vec<ThreadHandle>) -> anyhow::Result<()> {
        if self.detach {
            tracing::debug!(tasks = handles.len(), "detaching");
            handles.into_iter().for_each(ThreadHandle::detach);
            return Ok(());
        }

        let mut panicked = 0;
        for handle in handles {
            if let Err(err) = handle.join() {
                tracing::error!("{err}");
                panicked += 1;
            }
        }

        if panicked > 0 {
            anyhow::bail!("{panicked} task thread(s) panicked");
        }

        Ok(())
    }
}
