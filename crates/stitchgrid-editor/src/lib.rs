//! # StitchGrid Editor
//!
//! Editing engine for knitting pattern charts: a fixed-size grid of colored
//! cells, some of which may be locked, with flips, clipboard operations and
//! undo/redo history.
//!
//! Locked cells are never changed by any operation. Every operation that
//! changes the grid commits exactly one history entry; operations that
//! change nothing commit none.

pub mod action;
pub mod clipboard;
pub mod commands;
pub mod editor;
pub mod grid;
pub mod history;

pub use action::EditorAction;
pub use clipboard::ClipboardData;
pub use commands::{EditorCommand, FlipAxis, RegionChange};
pub use editor::{PatternEditor, SharedEditor};
pub use grid::{Cell, CellRecord, PatternGrid, SelectedArea};
pub use history::{History, DEFAULT_HISTORY_LIMIT};
