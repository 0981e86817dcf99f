mod named_type;
mod type_descriptor;

pub use named_type::NamedType;
pub use type_descriptor::TypeDescriptor;
