use crate::doc_row::ArgumentEntry;
use crate::types::TypeDescriptor;

/// An output field on an object or interface type.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldEntry {
    pub(crate) args: Vec<ArgumentEntry>,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) parent_name: Option<String>,
    pub(crate) type_: TypeDescriptor,
}
impl FieldEntry {
    pub fn new(name: impl Into<String>, type_: TypeDescriptor) -> Self {
        Self {
            args: vec![],
            description: None,
            name: name.into(),
            parent_name: None,
            type_,
        }
    }

    pub fn with_args(mut self, args: Vec<ArgumentEntry>) -> Self {
        self.args = args;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The name of the type this field is defined on.
    pub fn with_parent_name(mut self, parent_name: impl Into<String>) -> Self {
        self.parent_name = Some(parent_name.into());
        self
    }

    pub fn args(&self) -> &[ArgumentEntry] {
        self.args.as_slice()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parent_name(&self) -> Option<&str> {
        self.parent_name.as_deref()
    }

    pub fn type_descriptor(&self) -> &TypeDescriptor {
        &self.type_
    }
}
