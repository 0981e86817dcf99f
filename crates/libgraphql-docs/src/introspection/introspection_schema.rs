use crate::doc_row::ArgumentEntry;
use crate::doc_row::DocEntry;
use crate::doc_row::FieldEntry;
use crate::introspection::IntrospectionError;
use crate::introspection::IntrospectionTypeRef;
use crate::introspection::TypeKind;
use crate::types::TypeDescriptor;
use indexmap::IndexMap;

/// An `__InputValue`: a field argument or an input-object field.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionInputValue {
    pub default_value: Option<String>,
    pub description: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: IntrospectionTypeRef,
}
impl IntrospectionInputValue {
    /// `coordinate` names this value in error messages, e.g.
    /// `Query.user(id:)`.
    pub fn to_argument_entry(
        &self,
        coordinate: &str,
    ) -> Result<ArgumentEntry, IntrospectionError> {
        let type_ = to_type_descriptor(&self.type_ref, coordinate)?;
        let mut entry = ArgumentEntry::new(self.name.as_str(), type_);
        if let Some(default_value) = &self.default_value {
            entry = entry.with_default_value(default_value.as_str());
        }
        if let Some(description) = &self.description {
            entry = entry.with_description(description.as_str());
        }
        Ok(entry)
    }
}

/// A `__Field` of an object or interface type.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionField {
    #[serde(default)]
    pub args: Vec<IntrospectionInputValue>,
    pub description: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: IntrospectionTypeRef,
}
impl IntrospectionField {
    pub fn to_field_entry(
        &self,
        parent_name: &str,
    ) -> Result<FieldEntry, IntrospectionError> {
        let coordinate = format!("{parent_name}.{}", self.name);
        let type_ = to_type_descriptor(&self.type_ref, coordinate.as_str())?;
        let args = self.args.iter()
            .map(|arg| arg.to_argument_entry(
                format!("{coordinate}({}:)", arg.name).as_str(),
            ))
            .collect::<Result<Vec<_>, _>>()?;

        let mut entry =
            FieldEntry::new(self.name.as_str(), type_)
                .with_args(args)
                .with_parent_name(parent_name);
        if let Some(description) = &self.description {
            entry = entry.with_description(description.as_str());
        }
        Ok(entry)
    }
}

/// A full `__Type` as listed in `__schema.types`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionType {
    pub description: Option<String>,
    pub fields: Option<Vec<IntrospectionField>>,
    pub input_fields: Option<Vec<IntrospectionInputValue>>,
    pub kind: TypeKind,
    pub name: String,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRootTypeRef {
    name: String,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawIntrospectionSchema {
    mutation_type: Option<RawRootTypeRef>,
    query_type: Option<RawRootTypeRef>,
    subscription_type: Option<RawRootTypeRef>,
    types: Vec<IntrospectionType>,
}

#[derive(serde::Deserialize)]
struct RawSchemaData {
    #[serde(rename = "__schema")]
    schema: RawIntrospectionSchema,
}

/// Accepts both a full response (`{"data": {"__schema": ...}}`) and a bare
/// `{"__schema": ...}` object.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawIntrospectionDocument {
    Response { data: RawSchemaData },
    Data(RawSchemaData),
}

/// The `__schema` portion of an introspection result, with types indexed by
/// name in the order the server listed them.
#[derive(Clone, Debug, PartialEq)]
pub struct IntrospectionSchema {
    mutation_type_name: Option<String>,
    query_type_name: Option<String>,
    subscription_type_name: Option<String>,
    types: IndexMap<String, IntrospectionType>,
}
impl IntrospectionSchema {
    pub fn from_json_str(json: &str) -> Result<Self, IntrospectionError> {
        let doc: RawIntrospectionDocument = serde_json::from_str(json)?;
        let raw = match doc {
            RawIntrospectionDocument::Response { data } => data.schema,
            RawIntrospectionDocument::Data(data) => data.schema,
        };

        let types = raw.types.into_iter()
            .map(|type_| (type_.name.to_owned(), type_))
            .collect::<IndexMap<_, _>>();
        log::debug!("Loaded {} types from introspection schema.", types.len());

        Ok(Self {
            mutation_type_name: raw.mutation_type.map(|t| t.name),
            query_type_name: raw.query_type.map(|t| t.name),
            subscription_type_name: raw.subscription_type.map(|t| t.name),
            types,
        })
    }

    pub fn mutation_type_name(&self) -> Option<&str> {
        self.mutation_type_name.as_deref()
    }

    pub fn query_type_name(&self) -> Option<&str> {
        self.query_type_name.as_deref()
    }

    pub fn subscription_type_name(&self) -> Option<&str> {
        self.subscription_type_name.as_deref()
    }

    pub fn type_named(&self, name: &str) -> Option<&IntrospectionType> {
        self.types.get(name)
    }

    pub fn types(&self) -> &IndexMap<String, IntrospectionType> {
        &self.types
    }

    /// The rows listed when `type_name` is opened in the explorer: fields for
    /// object and interface types, input fields for input objects.
    pub fn entries_for_type(
        &self,
        type_name: &str,
    ) -> Result<Vec<DocEntry>, IntrospectionError> {
        let type_ = self.type_named(type_name).ok_or_else(|| {
            IntrospectionError::UndefinedType {
                type_name: type_name.to_string(),
            }
        })?;

        match (type_.kind, &type_.fields, &type_.input_fields) {
            (TypeKind::Object | TypeKind::Interface, Some(fields), _) =>
                fields.iter()
                    .map(|field| field.to_field_entry(type_name).map(DocEntry::from))
                    .collect(),

            (TypeKind::InputObject, _, Some(input_fields)) =>
                input_fields.iter()
                    .map(|input_field| input_field.to_argument_entry(
                        format!("{type_name}.{}", input_field.name).as_str(),
                    ).map(DocEntry::from))
                    .collect(),

            (kind, _, _) => Err(IntrospectionError::TypeHasNoFields {
                kind,
                type_name: type_name.to_string(),
            }),
        }
    }
}

fn to_type_descriptor(
    type_ref: &IntrospectionTypeRef,
    coordinate: &str,
) -> Result<TypeDescriptor, IntrospectionError> {
    TypeDescriptor::try_from(type_ref).map_err(|source| {
        IntrospectionError::InvalidTypeRef {
            coordinate: coordinate.to_string(),
            source,
        }
    })
}
