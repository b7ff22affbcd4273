use crate::grid::{PatternGrid, SelectedArea};

/// Axis a flip mirrors across.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlipAxis {
    /// Reverses column order within each row.
    Horizontal,
    /// Reverses row order within each column.
    Vertical,
}

/// Reverses the unlocked cells of an already clipped area.
///
/// Each row (horizontal) or column (vertical) is read as the sequence of its
/// unlocked positions; their colors are reversed and written back to those
/// same positions. Locked cells keep their place and color and do not pin
/// any other cell. Reversal is its own inverse.
///
/// Returns true when any cell changed.
pub(crate) fn flip_area(grid: &mut PatternGrid, area: &SelectedArea, axis: FlipAxis) -> bool {
    let before = grid.region(area);
    let mut after: Vec<Vec<Option<String>>> = before
        .iter()
        .map(|row| row.iter().map(|cell| cell.color.clone()).collect())
        .collect();
    let (h, w) = (area.height(), area.width());

    let lines: Vec<Vec<(usize, usize)>> = match axis {
        FlipAxis::Horizontal => (0..h)
            .map(|r| (0..w).map(|c| (r, c)).collect())
            .collect(),
        FlipAxis::Vertical => (0..w)
            .map(|c| (0..h).map(|r| (r, c)).collect())
            .collect(),
    };

    let mut changed = false;
    for line in lines {
        let open: Vec<(usize, usize)> = line
            .into_iter()
            .filter(|&(r, c)| !before[r][c].locked)
            .collect();
        for (&(r, c), &(sr, sc)) in open.iter().zip(open.iter().rev()) {
            if before[r][c].color != before[sr][sc].color {
                after[r][c] = before[sr][sc].color.clone();
                changed = true;
            }
        }
    }

    if changed {
        grid.write_colors(area.start_row(), area.start_col(), &after);
    }
    changed
}

/// Color contents of a region before and after an edit.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionChange {
    pub row: usize,
    pub col: usize,
    pub before: Vec<Vec<Option<String>>>,
    pub after: Vec<Vec<Option<String>>>,
}

/// A committed edit, stored as enough information to reverse it.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    /// Flip of an area; applying it again reverses it.
    Flip { area: SelectedArea, axis: FlipAxis },
    /// Any edit that rewrites cell colors (cut, paste, paint, erase).
    Region { name: &'static str, change: RegionChange },
}

impl EditorCommand {
    /// Re-applies the edit.
    pub fn apply(&self, grid: &mut PatternGrid) {
        match self {
            EditorCommand::Flip { area, axis } => {
                flip_area(grid, area, *axis);
            }
            EditorCommand::Region { change, .. } => {
                grid.write_colors(change.row, change.col, &change.after);
            }
        }
    }

    /// Reverses the edit.
    pub fn undo(&self, grid: &mut PatternGrid) {
        match self {
            EditorCommand::Flip { area, axis } => {
                flip_area(grid, area, *axis);
            }
            EditorCommand::Region { change, .. } => {
                grid.write_colors(change.row, change.col, &change.before);
            }
        }
    }

    /// Returns the name of the command for display.
    pub fn name(&self) -> &str {
        match self {
            EditorCommand::Flip {
                axis: FlipAxis::Horizontal,
                ..
            } => "Flip Horizontal",
            EditorCommand::Flip {
                axis: FlipAxis::Vertical,
                ..
            } => "Flip Vertical",
            EditorCommand::Region { name, .. } => name,
        }
    }
}
