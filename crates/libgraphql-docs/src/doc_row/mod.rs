//! The model behind one row of a schema documentation explorer: a clickable
//! label for a field, argument, or type.
//!
//! Nothing here reads global state. Navigation state is handed to
//! [`RowState::from_nav`], measurements are handed to
//! [`TypeLink::update_size`], and [`TypeLink::render`] is a pure function of
//! the row plus its [`RowState`].

mod argument_entry;
mod collapse_policy;
mod doc_entry;
mod field_entry;
mod nav_stack;
mod row_label;
mod row_state;
mod type_link;

pub use argument_entry::ArgumentEntry;
pub use collapse_policy::CollapsePolicy;
pub use collapse_policy::RowMetrics;
pub use doc_entry::DocEntry;
pub use field_entry::FieldEntry;
pub use nav_stack::NavFrame;
pub use nav_stack::NavStack;
pub use row_label::LabelSegment;
pub use row_label::RowLabel;
pub use row_state::RowState;
pub use type_link::SizeUpdate;
pub use type_link::TypeLink;
pub use type_link::TypeLinkProps;

#[cfg(test)]
mod tests;
