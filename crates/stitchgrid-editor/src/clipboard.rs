use crate::grid::Cell;

/// A rectangular snapshot of cells, lock flags included.
///
/// The editor holds at most one; each copy or cut replaces it and pasting
/// leaves it in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardData {
    cells: Vec<Vec<Cell>>,
}

impl ClipboardData {
    pub(crate) fn new(cells: Vec<Vec<Cell>>) -> Self {
        Self { cells }
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn width(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn cells(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    /// Colors only; lock flags never travel on paste.
    pub(crate) fn colors(&self) -> Vec<Vec<Option<String>>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|cell| cell.color.clone()).collect())
            .collect()
    }
}
