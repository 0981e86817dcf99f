use clap::CommandFactory;
use crate::commands;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[derive(clap::Parser, Debug)]
#[command(
    name = "graphql-docs",
    version,
    about = "Render GraphQL schema documentation rows from introspection results.",
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Enable verbose output. Overrides `LOG_LEVEL`.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    pub(crate) async fn run_default(&self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }

    /// The log level from `--verbose` or the `LOG_LEVEL` env var, plus a
    /// warning to log once logging is up if `LOG_LEVEL` was unrecognized.
    pub(crate) fn log_level(&self) -> (tracing::Level, Option<String>) {
        if self.verbose {
            return (tracing::Level::DEBUG, None);
        }

        let Ok(env_val) = std::env::var("LOG_LEVEL") else {
            return (DEFAULT_LOG_LEVEL, None);
        };
        match env_val.trim() {
            "DEBUG" | "debug" | "VERBOSE" | "verbose" => (tracing::Level::DEBUG, None),
            "INFO" | "info" => (tracing::Level::INFO, None),
            "TRACE" | "trace" => (tracing::Level::TRACE, None),
            other => (
                DEFAULT_LOG_LEVEL,
                Some(format!(
                    "Invalid `LOG_LEVEL` environment variable value: `{other}`"
                )),
            ),
        }
    }
}
