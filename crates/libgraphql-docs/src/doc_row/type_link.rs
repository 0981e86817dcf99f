use crate::doc_row::CollapsePolicy;
use crate::doc_row::DocEntry;
use crate::doc_row::LabelSegment;
use crate::doc_row::NavStack;
use crate::doc_row::RowLabel;
use crate::doc_row::RowMetrics;
use crate::doc_row::RowState;

const ROW_CLASS: &str = "doc-category-item";

/// Caller-controlled configuration for a [`TypeLink`].
#[derive(Clone, Debug, PartialEq)]
pub struct TypeLinkProps {
    /// Text rendered after the label, separated by a space.
    pub after: Option<String>,
    /// Text rendered before the label, separated by a space.
    pub before: Option<String>,
    pub class_name: Option<String>,
    pub clickable: bool,
    pub collapsable: bool,
    /// Render fields as `Parent.field` when the parent type is known.
    pub show_parent_name: bool,
    /// Column of the explorer this row is in.
    pub x: usize,
    /// Position of this row within its column.
    pub y: usize,
}
impl TypeLinkProps {
    pub fn at(x: usize, y: usize) -> Self {
        Self { x, y, ..Self::default() }
    }
}
impl std::default::Default for TypeLinkProps {
    fn default() -> Self {
        Self {
            after: None,
            before: None,
            class_name: None,
            clickable: true,
            collapsable: false,
            show_parent_name: false,
            x: 0,
            y: 0,
        }
    }
}

/// Outcome of [`TypeLink::update_size`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeUpdate {
    /// `true` only on the measurement that caused the row to collapse.
    pub collapsed_now: bool,
    /// The measured scroll width, for callers that size their column to fit.
    pub scroll_width: f32,
}

/// A single row of the doc explorer.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeLink {
    collapsed: bool,
    entry: DocEntry,
    props: TypeLinkProps,
}
impl TypeLink {
    pub fn new(entry: impl Into<DocEntry>, props: TypeLinkProps) -> Self {
        Self {
            collapsed: false,
            entry: entry.into(),
            props,
        }
    }

    pub fn collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn entry(&self) -> &DocEntry {
        &self.entry
    }

    pub fn props(&self) -> &TypeLinkProps {
        &self.props
    }

    /// Open this row's entry in the column after it. Returns `false` (and
    /// leaves `nav` alone) for non-clickable rows and for rows whose column
    /// is not reachable from the current stack.
    pub fn click(&self, nav: &mut NavStack) -> bool {
        self.props.clickable
            && nav.add_stack(self.entry.clone(), self.props.x, self.props.y)
    }

    /// Feed the row's latest rendered dimensions back in.
    pub fn update_size(
        &mut self,
        metrics: RowMetrics,
        policy: &CollapsePolicy,
    ) -> SizeUpdate {
        let collapsed_now = policy.should_collapse(
            metrics.scroll_height,
            self.props.collapsable,
            self.collapsed,
        );
        if collapsed_now {
            log::debug!(
                "Collapsing arguments of `{}`: height {} exceeds {}.",
                self.entry.name(),
                metrics.scroll_height,
                policy.line_height_threshold,
            );
            self.collapsed = true;
        }
        SizeUpdate {
            collapsed_now,
            scroll_width: metrics.scroll_width,
        }
    }

    /// Whether moving from (`prev`, `prev_state`) to (`self`, `state`)
    /// changes anything the rendered label depends on.
    pub fn needs_rerender(
        &self,
        prev: &TypeLink,
        prev_state: RowState,
        state: RowState,
    ) -> bool {
        self.entry != prev.entry
            || self.collapsed != prev.collapsed
            || state != prev_state
    }

    pub fn render(&self, state: RowState) -> RowLabel {
        RowLabel {
            classes: self.classes(state),
            segments: self.segments(),
        }
    }

    fn classes(&self, state: RowState) -> Vec<String> {
        let mut classes = vec![ROW_CLASS.to_string()];
        if let Some(class_name) = &self.props.class_name {
            classes.push(class_name.to_owned());
        }
        let flags = [
            ("clickable", self.props.clickable),
            ("active", state.is_active),
            ("last-active", state.last_active),
            ("no-hover", state.key_move),
        ];
        classes.extend(
            flags.into_iter()
                .filter(|(_, enabled)| *enabled)
                .map(|(class, _)| class.to_string())
        );
        classes
    }

    fn segments(&self) -> Vec<LabelSegment> {
        let mut segments = vec![];

        if let Some(before) = &self.props.before {
            segments.push(LabelSegment::Text(before.to_owned()));
            segments.push(LabelSegment::Punct(" "));
        }

        if !self.entry.is_graphql_type() {
            self.push_field_name(&mut segments);
            self.push_args(&mut segments);
            segments.push(LabelSegment::Punct(": "));
        }

        segments.push(LabelSegment::TypeName(
            self.entry.display_type().to_string()
        ));

        if self.props.clickable {
            segments.push(LabelSegment::Icon);
        }

        if let Some(after) = &self.props.after {
            segments.push(LabelSegment::Punct(" "));
            segments.push(LabelSegment::Text(after.to_owned()));
        }

        segments
    }

    fn push_field_name(&self, segments: &mut Vec<LabelSegment>) {
        let parent_name = self.entry.parent_name()
            .filter(|_| self.props.show_parent_name);
        if let Some(parent_name) = parent_name {
            segments.push(LabelSegment::ParentName(parent_name.to_string()));
            segments.push(LabelSegment::Punct("."));
        }
        segments.push(LabelSegment::FieldName(self.entry.name().to_string()));
    }

    fn push_args(&self, segments: &mut Vec<LabelSegment>) {
        let args = self.entry.args();
        if args.is_empty() {
            return;
        }

        segments.push(LabelSegment::Punct("("));
        if self.collapsed {
            segments.push(LabelSegment::Dots);
        } else {
            for (idx, arg) in args.iter().enumerate() {
                if idx > 0 {
                    segments.push(LabelSegment::Punct(", "));
                }
                arg.push_inline_segments(segments);
            }
        }
        segments.push(LabelSegment::Punct(")"));
    }
}
