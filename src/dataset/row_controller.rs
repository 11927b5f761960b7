// src/dataset/row_controller.rs

/// Tracks which row, if any, is in edit mode. At most one row at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowController {
    cursor: Option<usize>,
}

impl RowController {
    pub fn editing(&self) -> Option<usize> {
        self.cursor
    }

    pub fn is_editing(&self, row: usize) -> bool {
        self.cursor == Some(row)
    }

    /// Moves the cursor to `row`. Nothing is saved or reverted for the row left behind.
    pub fn begin_edit(&mut self, row: usize) {
        self.cursor = Some(row);
    }

    pub fn clear(&mut self) {
        self.cursor = None;
    }
}
