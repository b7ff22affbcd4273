//! Named editor actions, as bound to keyboard shortcuts or menu entries.

use crate::editor::PatternEditor;
use std::fmt;
use std::str::FromStr;
use stitchgrid_core::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorAction {
    Undo,
    Redo,
    Copy,
    Cut,
    Paste,
    FlipHorizontal,
    FlipVertical,
}

impl EditorAction {
    pub const ALL: [EditorAction; 7] = [
        EditorAction::Undo,
        EditorAction::Redo,
        EditorAction::Copy,
        EditorAction::Cut,
        EditorAction::Paste,
        EditorAction::FlipHorizontal,
        EditorAction::FlipVertical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EditorAction::Undo => "undo",
            EditorAction::Redo => "redo",
            EditorAction::Copy => "copy",
            EditorAction::Cut => "cut",
            EditorAction::Paste => "paste",
            EditorAction::FlipHorizontal => "flip-horizontal",
            EditorAction::FlipVertical => "flip-vertical",
        }
    }
}

impl fmt::Display for EditorAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EditorAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        EditorAction::ALL
            .into_iter()
            .find(|action| action.as_str() == normalized)
            .ok_or_else(|| Error::other(format!("Unknown editor action: {}", s)))
    }
}

impl PatternEditor {
    /// Runs an action against the current selection and cursor.
    ///
    /// Area actions need a selection. Paste targets the cursor, falling back
    /// to the selection's top-left corner. Returns true when the grid changed.
    pub fn dispatch(&mut self, action: EditorAction) -> bool {
        tracing::debug!("Dispatching {}", action);
        match action {
            EditorAction::Undo => self.undo(),
            EditorAction::Redo => self.redo(),
            EditorAction::Copy => {
                if let Some(area) = self.selection() {
                    self.copy(&area);
                }
                false
            }
            EditorAction::Cut => match self.selection() {
                Some(area) => self.cut(&area),
                None => false,
            },
            EditorAction::Paste => {
                let target = self
                    .cursor()
                    .or_else(|| self.selection().map(|a| (a.start_row(), a.start_col())));
                match target {
                    Some((row, col)) => self.paste(row, col),
                    None => false,
                }
            }
            EditorAction::FlipHorizontal => match self.selection() {
                Some(area) => self.flip_horizontal(&area),
                None => false,
            },
            EditorAction::FlipVertical => match self.selection() {
                Some(area) => self.flip_vertical(&area),
                None => false,
            },
        }
    }
}
