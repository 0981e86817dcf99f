use crate::doc_row::LabelSegment;
use crate::types::TypeDescriptor;

/// A field argument or input-object field.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ArgumentEntry {
    pub(crate) default_value: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) type_: TypeDescriptor,
}
impl ArgumentEntry {
    pub fn new(name: impl Into<String>, type_: TypeDescriptor) -> Self {
        Self {
            default_value: None,
            description: None,
            name: name.into(),
            type_,
        }
    }

    /// `default_value` is expected to already be printed as a GraphQL
    /// literal (which is how introspection reports it).
    pub fn with_default_value(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_descriptor(&self) -> &TypeDescriptor {
        &self.type_
    }

    /// The label segments for `name: Type` or `name: Type = default`.
    pub(crate) fn push_inline_segments(&self, segments: &mut Vec<LabelSegment>) {
        segments.push(LabelSegment::ArgName(self.name.to_owned()));
        segments.push(LabelSegment::Punct(": "));
        segments.push(LabelSegment::TypeName(self.type_.to_string()));
        if let Some(default_value) = &self.default_value {
            segments.push(LabelSegment::Punct(" = "));
            segments.push(LabelSegment::Text(default_value.to_owned()));
        }
    }

    /// Plain-text form of the argument exactly as it appears inside a row's
    /// argument list.
    pub fn to_inline_string(&self) -> String {
        let mut segments = vec![];
        self.push_inline_segments(&mut segments);
        segments.iter().map(LabelSegment::text).collect()
    }
}
