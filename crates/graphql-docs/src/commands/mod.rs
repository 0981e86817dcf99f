mod format_type;
mod rows;

use crate::Cli;
use crate::CommandResult;
use format_type::FormatTypeCmd;
use rows::RowsCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-docs")]
pub(crate) enum CommandEnum {
    /// Print the display string for a single introspection type reference.
    FormatType(Box<FormatTypeCmd>),

    /// Render the doc-explorer rows for one type of an introspection schema.
    Rows(Box<RowsCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: &Cli) -> CommandResult {
        match self {
            Self::FormatType(cmd) => cmd.run(cli).await,
            Self::Rows(cmd) => cmd.run(cli).await,
        }
    }
}
