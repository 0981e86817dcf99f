use crate::doc_row::DocEntry;

/// One open column in the explorer: the entry that was clicked, and the
/// (column, row) coordinates of the row it was clicked from.
#[derive(Clone, Debug, PartialEq)]
pub struct NavFrame {
    pub(crate) entry: DocEntry,
    pub(crate) x: usize,
    pub(crate) y: usize,
}
impl NavFrame {
    pub fn entry(&self) -> &DocEntry {
        &self.entry
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }
}

/// The explorer's navigation stack. Frame `i` describes the row that was
/// selected in column `i`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavStack {
    frames: Vec<NavFrame>,
    key_move: bool,
}
impl NavStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `entry` from the row at `(x, y)`. Every frame at or to the
    /// right of column `x` is discarded first.
    ///
    /// Column `x` can only be opened once columns `0..x` are open, so a
    /// column past the end of the stack is ignored and `false` returned.
    pub fn add_stack(&mut self, entry: DocEntry, x: usize, y: usize) -> bool {
        if x > self.frames.len() {
            log::warn!(
                "Ignoring `{}` selected in column {x}: only {} columns are open.",
                entry.name(),
                self.frames.len(),
            );
            return false;
        }
        if x < self.frames.len() {
            log::trace!(
                "Truncating nav stack from {} to {x} frames.",
                self.frames.len(),
            );
            self.frames.truncate(x);
        }
        log::debug!("Pushing `{}` onto nav stack at ({x}, {y}).", entry.name());
        self.frames.push(NavFrame { entry, x, y });
        true
    }

    pub fn pop(&mut self) -> Option<NavFrame> {
        self.frames.pop()
    }

    pub fn frame(&self, x: usize) -> Option<&NavFrame> {
        self.frames.get(x)
    }

    pub fn frames(&self) -> &[NavFrame] {
        self.frames.as_slice()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the user is navigating with the keyboard. Hover highlighting
    /// is suppressed while this is set.
    pub fn key_move(&self) -> bool {
        self.key_move
    }

    pub fn set_key_move(&mut self, key_move: bool) {
        self.key_move = key_move;
    }
}
