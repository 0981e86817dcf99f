pub mod doc_row;
pub mod introspection;
mod invalid_type_descriptor;
pub mod type_name_formatter;
pub mod types;

pub use invalid_type_descriptor::InvalidTypeDescriptor;
pub use invalid_type_descriptor::InvalidTypeDescriptorReason;
pub use type_name_formatter::format_introspection_type_ref;
pub use type_name_formatter::format_type_name;
