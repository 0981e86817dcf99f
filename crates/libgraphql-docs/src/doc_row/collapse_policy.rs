/// Rendered dimensions of a row, as measured by whatever is laying it out.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RowMetrics {
    pub scroll_height: f32,
    pub scroll_width: f32,
}

/// Decides when a row's argument list should collapse to `...`.
///
/// A row collapses once its measured height exceeds a single line. What "a
/// single line" means depends on the font and line height of the host, so
/// the threshold is supplied by the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollapsePolicy {
    pub line_height_threshold: f32,
}
impl CollapsePolicy {
    pub const DEFAULT_LINE_HEIGHT_THRESHOLD: f32 = 31.0;

    pub fn new(line_height_threshold: f32) -> Self {
        Self { line_height_threshold }
    }

    /// A row that is already collapsed never un-collapses here.
    pub fn should_collapse(
        &self,
        scroll_height: f32,
        collapsable: bool,
        collapsed: bool,
    ) -> bool {
        collapsable && !collapsed && scroll_height > self.line_height_threshold
    }
}
impl std::default::Default for CollapsePolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LINE_HEIGHT_THRESHOLD)
    }
}
