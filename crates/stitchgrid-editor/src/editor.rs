//! # Pattern Editor
//!
//! Owns a [`PatternGrid`] together with its history and clipboard. Every
//! transformation goes through the editor so that lock flags are honored and
//! each change lands in history as one undoable step.

use crate::clipboard::ClipboardData;
use crate::commands::{flip_area, EditorCommand, FlipAxis, RegionChange};
use crate::grid::{PatternGrid, SelectedArea};
use crate::history::{History, DEFAULT_HISTORY_LIMIT};
use stitchgrid_core::{thread_safe, ThreadSafe};

/// Editor shared between threads.
pub type SharedEditor = ThreadSafe<PatternEditor>;

/// Editing session over one pattern grid.
#[derive(Debug, Clone)]
pub struct PatternEditor {
    grid: PatternGrid,
    history: History,
    clipboard: Option<ClipboardData>,
    selection: Option<SelectedArea>,
    cursor: Option<(usize, usize)>,
    pub is_modified: bool,
}

impl PatternEditor {
    pub fn new(grid: PatternGrid) -> Self {
        Self::with_history_limit(grid, DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_history_limit(grid: PatternGrid, history_limit: usize) -> Self {
        Self {
            grid,
            history: History::new(history_limit),
            clipboard: None,
            selection: None,
            cursor: None,
            is_modified: false,
        }
    }

    /// Wraps the editor for use from several threads.
    pub fn into_shared(self) -> SharedEditor {
        thread_safe(self)
    }

    pub fn grid(&self) -> &PatternGrid {
        &self.grid
    }

    /// Gives the grid back, dropping history and clipboard.
    pub fn into_grid(self) -> PatternGrid {
        self.grid
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn clipboard(&self) -> Option<&ClipboardData> {
        self.clipboard.as_ref()
    }

    pub fn selection(&self) -> Option<SelectedArea> {
        self.selection
    }

    /// Sets the area used by keyboard-driven actions.
    pub fn select(&mut self, area: SelectedArea) {
        self.selection = Some(area);
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn cursor(&self) -> Option<(usize, usize)> {
        self.cursor
    }

    /// Sets the paste target used by keyboard-driven actions.
    pub fn set_cursor(&mut self, row: usize, col: usize) {
        self.cursor = Some((row, col));
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn commit(&mut self, command: EditorCommand) {
        tracing::debug!("Committed {}", command.name());
        self.history.record(command);
        self.is_modified = true;
    }

    /// Reverses the most recent edit. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.take_undo() {
            Some(command) => {
                command.undo(&mut self.grid);
                self.is_modified = true;
                true
            }
            None => false,
        }
    }

    /// Re-applies the most recently undone edit. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.take_redo() {
            Some(command) => {
                command.apply(&mut self.grid);
                self.is_modified = true;
                true
            }
            None => false,
        }
    }

    fn flip(&mut self, area: &SelectedArea, axis: FlipAxis) -> bool {
        let Some(area) = self.grid.clip(area) else {
            tracing::debug!("Flip skipped: area outside grid");
            return false;
        };
        if !flip_area(&mut self.grid, &area, axis) {
            tracing::debug!("Flip skipped: no unlocked cell changed");
            return false;
        }
        self.commit(EditorCommand::Flip { area, axis });
        true
    }

    /// Reverses the left-to-right order of the unlocked cells in each row of
    /// `area`. Locked cells keep their place and color.
    ///
    /// Returns true when the grid changed; an unchanged grid records no history.
    pub fn flip_horizontal(&mut self, area: &SelectedArea) -> bool {
        self.flip(area, FlipAxis::Horizontal)
    }

    /// Reverses the top-to-bottom order of the unlocked cells in each column of `area`.
    pub fn flip_vertical(&mut self, area: &SelectedArea) -> bool {
        self.flip(area, FlipAxis::Vertical)
    }

    /// Snapshots `area` into the clipboard. The grid is untouched.
    ///
    /// An area entirely outside the grid leaves the clipboard as it was.
    pub fn copy(&mut self, area: &SelectedArea) -> bool {
        let Some(area) = self.grid.clip(area) else {
            return false;
        };
        self.clipboard = Some(ClipboardData::new(self.grid.region(&area)));
        true
    }

    /// Copies `area`, then clears its unlocked cells.
    ///
    /// Returns true when any cell was cleared.
    pub fn cut(&mut self, area: &SelectedArea) -> bool {
        if !self.copy(area) {
            return false;
        }
        let Some(area) = self.grid.clip(area) else {
            return false;
        };
        let before = self.grid.colors(&area);
        let cleared = vec![vec![None; area.width()]; area.height()];
        self.grid.write_colors(area.start_row(), area.start_col(), &cleared);
        let after = self.grid.colors(&area);
        if after == before {
            return false;
        }
        self.commit(EditorCommand::Region {
            name: "Cut",
            change: RegionChange {
                row: area.start_row(),
                col: area.start_col(),
                before,
                after,
            },
        });
        true
    }

    /// Writes the clipboard with its top-left corner at `(row, col)`.
    ///
    /// Cells falling outside the grid or onto locked cells are skipped.
    /// Returns true when at least one cell was written; the clipboard is kept.
    pub fn paste(&mut self, row: usize, col: usize) -> bool {
        let Some(clipboard) = &self.clipboard else {
            return false;
        };
        if row >= self.grid.height() || col >= self.grid.width() {
            return false;
        }
        let target = SelectedArea::new(
            row,
            col,
            row.saturating_add(clipboard.height().saturating_sub(1)),
            col.saturating_add(clipboard.width().saturating_sub(1)),
        );
        let Some(area) = self.grid.clip(&target) else {
            return false;
        };
        let colors = clipboard.colors();

        let before = self.grid.colors(&area);
        let written = self.grid.write_colors(row, col, &colors);
        if written == 0 {
            return false;
        }
        let after = self.grid.colors(&area);
        self.commit(EditorCommand::Region {
            name: "Paste",
            change: RegionChange {
                row,
                col,
                before,
                after,
            },
        });
        true
    }

    fn set_cell(
        &mut self,
        row: usize,
        col: usize,
        color: Option<String>,
        name: &'static str,
    ) -> bool {
        let Some(cell) = self.grid.get(row, col) else {
            return false;
        };
        if cell.locked || cell.color == color {
            return false;
        }
        let before = vec![vec![cell.color.clone()]];
        self.grid.set_color(row, col, color.clone());
        self.commit(EditorCommand::Region {
            name,
            change: RegionChange {
                row,
                col,
                before,
                after: vec![vec![color]],
            },
        });
        true
    }

    /// Colors one unlocked cell.
    pub fn paint(&mut self, row: usize, col: usize, color: impl Into<String>) -> bool {
        self.set_cell(row, col, Some(color.into()), "Paint")
    }

    /// Clears one unlocked cell.
    pub fn erase(&mut self, row: usize, col: usize) -> bool {
        self.set_cell(row, col, None, "Erase")
    }

    /// Marks the current state as saved.
    pub fn mark_saved(&mut self) {
        self.is_modified = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor() -> PatternEditor {
        PatternEditor::new(PatternGrid::new(3, 3).unwrap())
    }

    #[test]
    fn paint_records_history() {
        let mut editor = editor();
        assert!(editor.paint(1, 1, "red"));
        assert!(editor.is_modified);
        assert_eq!(editor.grid().color(1, 1), Some("red"));
        assert!(!editor.paint(1, 1, "red"));
        assert_eq!(editor.history().undo_depth(), 1);
    }

    #[test]
    fn paint_out_of_range_is_noop() {
        let mut editor = editor();
        assert!(!editor.paint(3, 0, "red"));
        assert!(!editor.can_undo());
    }

    #[test]
    fn undo_on_empty_history_is_noop() {
        let mut editor = editor();
        assert!(!editor.undo());
        assert!(!editor.redo());
        assert!(!editor.is_modified);
    }

    #[test]
    fn paste_without_clipboard_is_noop() {
        let mut editor = editor();
        assert!(!editor.paste(0, 0));
    }

    #[test]
    fn paste_clips_to_bounds() {
        let mut editor = editor();
        editor.paint(0, 0, "a");
        editor.paint(0, 1, "b");
        editor.copy(&SelectedArea::new(0, 0, 0, 1));
        assert!(editor.paste(2, 2));
        assert_eq!(editor.grid().color(2, 2), Some("a"));
        assert!(editor.undo());
        assert_eq!(editor.grid().color(2, 2), None);
    }

    #[test]
    fn paste_far_outside_grid_is_noop() {
        let mut editor = editor();
        editor.paint(0, 0, "a");
        editor.paint(1, 1, "b");
        assert!(editor.copy(&SelectedArea::new(0, 0, 1, 1)));
        let grid = editor.grid().clone();
        let depth = editor.history().undo_depth();

        assert!(!editor.paste(usize::MAX, 0));
        assert!(!editor.paste(0, usize::MAX));
        assert!(!editor.paste(usize::MAX, usize::MAX));
        assert!(!editor.paste(3, 0));

        assert_eq!(editor.grid(), &grid);
        assert_eq!(editor.history().undo_depth(), depth);
    }

    #[test]
    fn erase_then_undo() {
        let mut editor = editor();
        editor.paint(2, 0, "blue");
        assert!(editor.erase(2, 0));
        assert_eq!(editor.grid().color(2, 0), None);
        editor.undo();
        assert_eq!(editor.grid().color(2, 0), Some("blue"));
    }

    #[test]
    fn mark_saved_clears_modified() {
        let mut editor = editor();
        editor.paint(0, 0, "red");
        editor.mark_saved();
        assert!(!editor.is_modified);
    }
}
