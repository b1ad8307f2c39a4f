//! Board geometry
//!
//! The board is a fixed grid of `total_columns × total_rows` cells. Row 0 is
//! the water (goal) row at the top; the player starts on the bottom grass.
//! All pixel positions are derived from cell indices times the cell size.

use glam::Vec2;

use crate::consts::*;

/// Fixed board geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    /// Cell width in pixels
    pub column_width: f32,
    /// Cell height in pixels
    pub row_height: f32,
    pub total_columns: u32,
    pub total_rows: u32,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            column_width: COLUMN_WIDTH,
            row_height: ROW_HEIGHT,
            total_columns: TOTAL_COLUMNS,
            total_rows: TOTAL_ROWS,
        }
    }
}

impl Grid {
    /// Width of the visible board in pixels
    #[inline]
    pub fn width(&self) -> f32 {
        self.total_columns as f32 * self.column_width
    }

    /// Whether a cell lies on the board
    #[inline]
    pub fn contains(&self, column: u32, row: u32) -> bool {
        column < self.total_columns && row < self.total_rows
    }

    /// Top-left pixel corner of a cell
    #[inline]
    pub fn cell_origin(&self, column: u32, row: u32) -> Vec2 {
        Vec2::new(
            column as f32 * self.column_width,
            row as f32 * self.row_height,
        )
    }

    /// Row of the goal (water)
    #[inline]
    pub fn goal_row(&self) -> u32 {
        0
    }

    /// Last column index
    #[inline]
    pub fn last_column(&self) -> u32 {
        self.total_columns - 1
    }

    /// Last row index
    #[inline]
    pub fn last_row(&self) -> u32 {
        self.total_rows - 1
    }
}
