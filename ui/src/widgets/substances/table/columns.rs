//! Grid sizing for the substances table.

/// Narrowest a column may shrink to.
pub const MIN_COLUMN_WIDTH: f32 = 80.0;

/// Cells draw their own padding, so the grid adds none.
pub const CELL_SPACING: [f32; 2] = [0.0, 0.0];
