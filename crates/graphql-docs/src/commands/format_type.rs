use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_docs::introspection::IntrospectionTypeRef;
use std::path::Path;

#[derive(Debug, clap::Args)]
pub(crate) struct FormatTypeCmd {
    #[arg(
        help="An introspection `__Type` reference as JSON (e.g. \
             `{\"kind\":\"NON_NULL\",\"ofType\":{\"kind\":\"SCALAR\",\"name\":\"Int\"}}`), \
             or `@path` to read the JSON from a file.",
        name="TYPE_REF_JSON",
        required=true,
    )]
    type_ref: String,
}
impl FormatTypeCmd {
    fn load_json(&self) -> anyhow::Result<String> {
        match self.type_ref.strip_prefix('@') {
            Some(path) => {
                log::debug!("Reading type reference from `{path}`.");
                std::fs::read_to_string(Path::new(path))
                    .with_context(|| format!("Failed to read `{path}`"))
            },
            None => Ok(self.type_ref.to_owned()),
        }
    }

    fn format(&self) -> anyhow::Result<String> {
        let json = self.load_json()?;
        let type_ref: IntrospectionTypeRef = serde_json::from_str(json.as_str())
            .context("Failed to parse type reference JSON")?;
        Ok(libgraphql_docs::format_introspection_type_ref(&type_ref)?)
    }
}

#[inherent::inherent]
impl RunnableCommand for FormatTypeCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        match self.format() {
            Ok(type_name) => CommandResult::stdout(format_args!("{type_name}")),
            Err(e) => e.into(),
        }
    }
}
