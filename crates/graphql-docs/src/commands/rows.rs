use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_docs::doc_row::CollapsePolicy;
use libgraphql_docs::doc_row::NavStack;
use libgraphql_docs::doc_row::RowMetrics;
use libgraphql_docs::doc_row::RowState;
use libgraphql_docs::doc_row::TypeLink;
use libgraphql_docs::doc_row::TypeLinkProps;
use libgraphql_docs::introspection::IntrospectionSchema;
use libgraphql_docs::types::NamedType;
use std::fmt::Write;
use std::path::PathBuf;

/// Height, in the same units as `--line-height`, of one wrapped terminal
/// line.
const TERMINAL_LINE_HEIGHT: f32 = 30.0;

#[derive(Debug, clap::Args)]
pub(crate) struct RowsCmd {
    #[arg(
        help="Collapse argument lists to `...` for rows that do not fit on \
             one line.",
        long,
    )]
    collapse_args: bool,

    #[arg(
        default_value_t=CollapsePolicy::DEFAULT_LINE_HEIGHT_THRESHOLD,
        help="Measured row height above which a row counts as wrapped.",
        long,
    )]
    line_height: f32,

    #[arg(
        default_value_t=80,
        help="Terminal columns available to a single row.",
        long,
    )]
    max_width: usize,

    #[arg(
        help="Index of a row to select, as if it had been clicked.",
        long,
    )]
    select: Option<usize>,

    #[arg(
        help="Prefix field names with the name of their parent type.",
        long,
    )]
    show_parent_name: bool,

    #[arg(
        help="Name of the type whose rows are rendered. Defaults to the \
             schema's query type.",
        long="type",
    )]
    type_name: Option<String>,

    #[arg(
        help="Path to a JSON file holding an introspection query result.",
        name="INTROSPECTION_JSON_PATH",
        required=true,
    )]
    introspection_path: PathBuf,
}
impl RowsCmd {
    fn render(&self) -> anyhow::Result<String> {
        let json = std::fs::read_to_string(&self.introspection_path)
            .with_context(|| format!(
                "Failed to read `{}`",
                self.introspection_path.display(),
            ))?;
        let schema = IntrospectionSchema::from_json_str(json.as_str())?;

        let type_name = self.type_name.as_deref()
            .or(schema.query_type_name())
            .context("No `--type` given and the schema has no query type")?;
        let entries = schema.entries_for_type(type_name)?;
        log::debug!("Rendering {} rows for `{type_name}`.", entries.len());

        let policy = CollapsePolicy::new(self.line_height);
        let mut rows = entries.into_iter()
            .enumerate()
            .map(|(y, entry)| TypeLink::new(entry, TypeLinkProps {
                collapsable: self.collapse_args,
                show_parent_name: self.show_parent_name,
                ..TypeLinkProps::at(1, y)
            }))
            .collect::<Vec<_>>();

        for row in &mut rows {
            let width = row.render(RowState::default()).text_width();
            let wrapped_lines = width.div_ceil(self.max_width.max(1)).max(1);
            row.update_size(RowMetrics {
                scroll_height: wrapped_lines as f32 * TERMINAL_LINE_HEIGHT,
                scroll_width: width as f32,
            }, &policy);
        }

        let mut nav = NavStack::new();
        nav.add_stack(NamedType::new(type_name).into(), 0, 0);
        if let Some(selected) = self.select {
            let row = rows.get(selected).with_context(|| format!(
                "`--select {selected}` is out of range; `{type_name}` has {} rows",
                rows.len(),
            ))?;
            row.click(&mut nav);
        }

        let mut out = format!(
            "{} {} rows for `{type_name}`:",
            output_utils::GREEN_CHECK,
            rows.len(),
        );
        for (y, row) in rows.iter().enumerate() {
            let state = RowState::from_nav(Some(&nav), 1, y);
            let marker = match (state.last_active, state.is_active) {
                (true, _) => '>',
                (false, true) => '*',
                (false, false) => ' ',
            };
            write!(out, "\n {marker} {}", row.render(state))?;
        }
        Ok(out)
    }
}

#[inherent::inherent]
impl RunnableCommand for RowsCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        match self.render() {
            Ok(out) => CommandResult::stdout(format_args!("{out}")),
            Err(e) => e.into(),
        }
    }
}
