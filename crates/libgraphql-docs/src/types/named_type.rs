/// A terminal type reference identified only by its name (e.g. `String`,
/// `Int`, or a custom object type like `User`).
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedType {
    pub(crate) name: String,
}
impl NamedType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
impl std::convert::From<&str> for NamedType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
impl std::fmt::Display for NamedType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name.as_str())
    }
}
