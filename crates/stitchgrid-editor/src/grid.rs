//! Pattern grid type definitions: Cell, SelectedArea, PatternGrid, CellRecord.

use serde::{Deserialize, Serialize};
use stitchgrid_core::{GridError, Result};

/// One stitch of the chart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    pub color: Option<String>,
    pub locked: bool,
}

impl Cell {
    /// Creates an unlocked cell with the given color.
    pub fn painted(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            locked: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_none()
    }
}

/// A rectangular region of the grid, inclusive on both ends.
///
/// Always normalized so that `start <= end` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawSelectedArea")]
pub struct SelectedArea {
    start_row: usize,
    start_col: usize,
    end_row: usize,
    end_col: usize,
}

/// Wire form of [`SelectedArea`]; corners may arrive in any order.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSelectedArea {
    start_row: usize,
    start_col: usize,
    end_row: usize,
    end_col: usize,
}

impl From<RawSelectedArea> for SelectedArea {
    fn from(raw: RawSelectedArea) -> Self {
        Self::new(raw.start_row, raw.start_col, raw.end_row, raw.end_col)
    }
}

impl SelectedArea {
    /// Creates an area from two opposite corners in any order.
    pub fn new(row_a: usize, col_a: usize, row_b: usize, col_b: usize) -> Self {
        Self {
            start_row: row_a.min(row_b),
            start_col: col_a.min(col_b),
            end_row: row_a.max(row_b),
            end_col: col_a.max(col_b),
        }
    }

    /// A single-cell area.
    pub fn cell(row: usize, col: usize) -> Self {
        Self::new(row, col, row, col)
    }

    pub fn start_row(&self) -> usize {
        self.start_row
    }

    pub fn start_col(&self) -> usize {
        self.start_col
    }

    pub fn end_row(&self) -> usize {
        self.end_row
    }

    pub fn end_col(&self) -> usize {
        self.end_col
    }

    pub fn height(&self) -> usize {
        (self.end_row - self.start_row).saturating_add(1)
    }

    pub fn width(&self) -> usize {
        (self.end_col - self.start_col).saturating_add(1)
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        (self.start_row..=self.end_row).contains(&row)
            && (self.start_col..=self.end_col).contains(&col)
    }

    /// Intersects the area with a `height x width` grid.
    ///
    /// Returns `None` when the area lies entirely outside the grid.
    pub fn clipped(&self, height: usize, width: usize) -> Option<Self> {
        if height == 0 || width == 0 || self.start_row >= height || self.start_col >= width {
            return None;
        }
        Some(Self {
            start_row: self.start_row,
            start_col: self.start_col,
            end_row: self.end_row.min(height - 1),
            end_col: self.end_col.min(width - 1),
        })
    }
}

/// A persisted cell, as handed to the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRecord {
    pub row: usize,
    pub col: usize,
    pub color: Option<String>,
    #[serde(default)]
    pub locked: bool,
}

/// Fixed-size 2-D array of cells, stored row-major.
///
/// Lock flags are decided while the grid is built and never change once the
/// grid is handed to a [`PatternEditor`](crate::PatternEditor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternGrid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl PatternGrid {
    /// Creates an empty, fully unlocked grid.
    pub fn new(height: usize, width: usize) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(GridError::InvalidDimensions { height, width }.into());
        }
        Ok(Self {
            height,
            width,
            cells: vec![Cell::default(); height * width],
        })
    }

    /// Creates a grid whose cells are locked where `mask(row, col)` is true.
    pub fn with_lock_mask<F>(height: usize, width: usize, mask: F) -> Result<Self>
    where
        F: Fn(usize, usize) -> bool,
    {
        let mut grid = Self::new(height, width)?;
        for row in 0..height {
            for col in 0..width {
                if mask(row, col) {
                    grid.cells[row * width + col].locked = true;
                }
            }
        }
        Ok(grid)
    }

    /// Creates a grid with its outer border locked.
    pub fn with_border_locked(height: usize, width: usize) -> Result<Self> {
        Self::with_lock_mask(height, width, |row, col| {
            row == 0 || col == 0 || row == height - 1 || col == width - 1
        })
    }

    /// Rebuilds a grid from persisted records.
    ///
    /// Records outside the grid are ignored.
    pub fn from_records(height: usize, width: usize, records: &[CellRecord]) -> Result<Self> {
        let mut grid = Self::new(height, width)?;
        for record in records {
            match grid.index(record.row, record.col) {
                Some(idx) => {
                    grid.cells[idx] = Cell {
                        color: record.color.clone(),
                        locked: record.locked,
                    };
                }
                None => tracing::warn!(
                    "Ignoring cell record ({}, {}) outside {}x{} grid",
                    record.row,
                    record.col,
                    height,
                    width
                ),
            }
        }
        Ok(grid)
    }

    /// Locks a cell, optionally giving it a fixed color. Construction-time only.
    pub fn lock_cell(&mut self, row: usize, col: usize, color: Option<String>) -> Result<()> {
        let idx = self.index(row, col).ok_or(GridError::OutOfBounds {
            row,
            col,
            height: self.height,
            width: self.width,
        })?;
        self.cells[idx] = Cell {
            color,
            locked: true,
        };
        Ok(())
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.index(row, col).map(|idx| &self.cells[idx])
    }

    pub fn is_locked(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(|cell| cell.locked)
    }

    pub fn color(&self, row: usize, col: usize) -> Option<&str> {
        self.get(row, col).and_then(|cell| cell.color.as_deref())
    }

    /// Sets an unlocked cell's color. Returns false for locked or missing cells.
    pub(crate) fn set_color(&mut self, row: usize, col: usize, color: Option<String>) -> bool {
        match self.index(row, col) {
            Some(idx) if !self.cells[idx].locked => {
                self.cells[idx].color = color;
                true
            }
            _ => false,
        }
    }

    /// Iterates rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Clips an area to this grid.
    pub fn clip(&self, area: &SelectedArea) -> Option<SelectedArea> {
        area.clipped(self.height, self.width)
    }

    /// Copies the cells of an already clipped area.
    pub(crate) fn region(&self, area: &SelectedArea) -> Vec<Vec<Cell>> {
        (area.start_row()..=area.end_row())
            .map(|row| {
                let start = row * self.width;
                self.cells[start + area.start_col()..=start + area.end_col()].to_vec()
            })
            .collect()
    }

    /// Colors of an already clipped area.
    pub(crate) fn colors(&self, area: &SelectedArea) -> Vec<Vec<Option<String>>> {
        self.region(area)
            .into_iter()
            .map(|row| row.into_iter().map(|cell| cell.color).collect())
            .collect()
    }

    /// Writes colors starting at `(row, col)`, skipping locked and
    /// out-of-range cells. Returns the number of cells written.
    pub(crate) fn write_colors(
        &mut self,
        row: usize,
        col: usize,
        colors: &[Vec<Option<String>>],
    ) -> usize {
        let mut written = 0;
        for (dr, line) in colors.iter().enumerate() {
            for (dc, color) in line.iter().enumerate() {
                let (Some(r), Some(c)) = (row.checked_add(dr), col.checked_add(dc)) else {
                    continue;
                };
                if self.set_color(r, c, color.clone()) {
                    written += 1;
                }
            }
        }
        written
    }

    /// Cells worth persisting: painted or locked.
    pub fn to_records(&self) -> Vec<CellRecord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.color.is_some() || cell.locked)
            .map(|(idx, cell)| CellRecord {
                row: idx / self.width,
                col: idx % self.width,
                color: cell.color.clone(),
                locked: cell.locked,
            })
            .collect()
    }
}
