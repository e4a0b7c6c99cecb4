//! Cell geometry - where each hand class is drawn on screen.
//!
//! The rendering layer draws the matrix as a square grid scaled around its
//! top-left corner. Touch moves carry screen coordinates only, so the same
//! geometry is used to map them back to cells.

use crate::constants::{DEFAULT_CELL_GAP, DEFAULT_CELL_SIZE, DEFAULT_ZOOM, GRID_SIZE};

/// Axis-aligned screen rectangle of one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl CellRect {
    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

/// Geometry of a rendered matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellLayout {
    /// Screen position of the grid's top-left corner
    pub origin: (f32, f32),
    /// Cell side length at zoom 1.0
    pub cell_size: f32,
    /// Gap between cells at zoom 1.0
    pub gap: f32,
    pub zoom: f32,
}

impl Default for CellLayout {
    fn default() -> Self {
        Self {
            origin: (0.0, 0.0),
            cell_size: DEFAULT_CELL_SIZE,
            gap: DEFAULT_CELL_GAP,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl CellLayout {
    pub fn new(origin: (f32, f32), cell_size: f32, gap: f32, zoom: f32) -> Self {
        Self {
            origin,
            cell_size,
            gap,
            zoom,
        }
    }

    /// Distance between the top-left corners of neighbouring cells
    #[inline]
    pub fn pitch(&self) -> f32 {
        (self.cell_size + self.gap) * self.zoom
    }

    /// Rendered side length of the whole grid
    pub fn extent(&self) -> f32 {
        self.pitch() * GRID_SIZE as f32 - self.gap * self.zoom
    }

    /// Screen rectangle of cell `(row, col)`
    pub fn cell_rect(&self, row: usize, col: usize) -> CellRect {
        let pitch = self.pitch();
        let size = self.cell_size * self.zoom;
        let min_x = self.origin.0 + col as f32 * pitch;
        let min_y = self.origin.1 + row as f32 * pitch;
        CellRect {
            min_x,
            min_y,
            max_x: min_x + size,
            max_y: min_y + size,
        }
    }
}
