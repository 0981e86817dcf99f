use crate::doc_row::NavStack;

/// Visual state of a row derived from the navigation stack.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RowState {
    pub is_active: bool,
    pub key_move: bool,
    pub last_active: bool,
}
impl RowState {
    /// A row at `(x, y)` is active when the frame for column `x` was opened
    /// from exactly that row, and last-active when that frame is also the
    /// top of the stack.
    pub fn from_nav(nav: Option<&NavStack>, x: usize, y: usize) -> Self {
        let Some(nav) = nav else {
            return Self::default();
        };
        let Some(frame) = nav.frame(x) else {
            return Self::default();
        };

        let is_active = frame.x() == x && frame.y() == y;
        Self {
            is_active,
            key_move: nav.key_move(),
            last_active: is_active && x == nav.len() - 1,
        }
    }
}
