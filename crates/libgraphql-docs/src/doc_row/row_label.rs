/// One styled run of text inside a [`RowLabel`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LabelSegment {
    ArgName(String),
    /// The collapsed form of an argument list.
    Dots,
    FieldName(String),
    /// The disclosure marker shown on clickable rows. Has no text.
    Icon,
    ParentName(String),
    Punct(&'static str),
    Text(String),
    TypeName(String),
}
impl LabelSegment {
    pub fn text(&self) -> &str {
        match self {
            Self::ArgName(s)
            | Self::FieldName(s)
            | Self::ParentName(s)
            | Self::Text(s)
            | Self::TypeName(s) => s.as_str(),
            Self::Dots => "...",
            Self::Icon => "",
            Self::Punct(s) => *s,
        }
    }
}

/// The rendered form of a row: CSS-style class names plus an ordered list of
/// segments. `Display` yields the plain-text label.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RowLabel {
    pub(crate) classes: Vec<String>,
    pub(crate) segments: Vec<LabelSegment>,
}
impl RowLabel {
    pub fn classes(&self) -> &[String] {
        self.classes.as_slice()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn segments(&self) -> &[LabelSegment] {
        self.segments.as_slice()
    }

    /// Width of the plain-text label in characters.
    pub fn text_width(&self) -> usize {
        self.segments.iter()
            .map(|segment| segment.text().chars().count())
            .sum()
    }
}
impl std::fmt::Display for RowLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for segment in &self.segments {
            f.write_str(segment.text())?;
        }
        Ok(())
    }
}
