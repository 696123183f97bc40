mod args;
mod commands;

pub use args::{Cli, LogLevel};
pub use commands::run;

/// Install a stderr fmt subscriber at `level`.
pub fn init_logging(level: LogLevel) {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
