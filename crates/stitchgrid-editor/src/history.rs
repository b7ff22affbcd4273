//! Undo/redo stacks for the pattern editor.

use crate::commands::EditorCommand;

/// Number of edits kept when no limit is configured.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Bounded undo stack plus redo stack.
///
/// Recording a new edit clears the redo stack. When the undo stack exceeds
/// its limit the oldest entry is dropped.
#[derive(Debug, Clone)]
pub struct History {
    undo_stack: Vec<EditorCommand>,
    redo_stack: Vec<EditorCommand>,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl History {
    /// Creates an empty history. A limit of zero is treated as one.
    pub fn new(limit: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            limit: limit.max(1),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Records a freshly applied edit.
    pub fn record(&mut self, command: EditorCommand) {
        self.undo_stack.push(command);
        self.redo_stack.clear();
        if self.undo_stack.len() > self.limit {
            self.undo_stack.remove(0);
        }
    }

    /// Takes the most recent edit for undoing and moves it to the redo stack.
    pub(crate) fn take_undo(&mut self) -> Option<&EditorCommand> {
        let command = self.undo_stack.pop()?;
        self.redo_stack.push(command);
        self.redo_stack.last()
    }

    /// Takes the most recently undone edit and moves it back to the undo stack.
    pub(crate) fn take_redo(&mut self) -> Option<&EditorCommand> {
        let command = self.redo_stack.pop()?;
        self.undo_stack.push(command);
        self.undo_stack.last()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Name of the edit that undo would reverse.
    pub fn undo_name(&self) -> Option<&str> {
        self.undo_stack.last().map(EditorCommand::name)
    }

    /// Name of the edit that redo would re-apply.
    pub fn redo_name(&self) -> Option<&str> {
        self.redo_stack.last().map(EditorCommand::name)
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::FlipAxis;
    use crate::grid::SelectedArea;

    fn flip() -> EditorCommand {
        EditorCommand::Flip {
            area: SelectedArea::new(0, 0, 1, 1),
            axis: FlipAxis::Horizontal,
        }
    }

    #[test]
    fn record_clears_redo() {
        let mut history = History::default();
        history.record(flip());
        history.take_undo();
        assert!(history.can_redo());
        history.record(flip());
        assert!(!history.can_redo());
        assert_eq!(history.undo_depth(), 1);
    }

    #[test]
    fn oldest_entry_dropped_past_limit() {
        let mut history = History::new(2);
        for _ in 0..5 {
            history.record(flip());
        }
        assert_eq!(history.undo_depth(), 2);
    }

    #[test]
    fn undo_and_redo_move_between_stacks() {
        let mut history = History::new(3);
        history.record(flip());
        assert_eq!(history.undo_name(), Some("Flip Horizontal"));
        assert!(history.take_undo().is_some());
        assert!(history.take_undo().is_none());
        assert_eq!(history.redo_depth(), 1);
        assert_eq!(history.redo_name(), Some("Flip Horizontal"));
        assert!(history.take_redo().is_some());
        assert!(history.take_redo().is_none());
        assert_eq!(history.undo_depth(), 1);
    }

    #[test]
    fn clear_empties_both_stacks() {
        let mut history = History::default();
        history.record(flip());
        history.record(flip());
        history.take_undo();
        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn zero_limit_keeps_one_entry() {
        let mut history = History::new(0);
        history.record(flip());
        history.record(flip());
        assert_eq!(history.limit(), 1);
        assert_eq!(history.undo_depth(), 1);
    }
}
