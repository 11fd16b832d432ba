use serde::{Deserialize, Serialize};

/// Internal per-cell state owned by the engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Cell {
    pub has_mine: bool,
    pub revealed: bool,
    pub adjacent_mines: u8,
}

impl Cell {
    pub const fn view(self) -> CellView {
        match (self.revealed, self.has_mine) {
            (false, _) => CellView::Hidden,
            (true, false) => CellView::Safe(self.adjacent_mines),
            (true, true) => CellView::Mine,
        }
    }
}

/// Player-visible state of a cell. Hidden cells never disclose their contents.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Safe(u8),
    Mine,
}

impl CellView {
    pub const fn is_revealed(self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}
