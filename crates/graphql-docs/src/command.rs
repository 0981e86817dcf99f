use crate::Cli;
use crate::CommandResult;

/// A subcommand that turns its parsed arguments into the text `main`
/// prints. Global flags are read from `cli`.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: &Cli) -> CommandResult;
}
