//! Conversions between surface sizes and the board's cell grid
use crate::consts;
use ratatui::layout::{Position, Positions, Rect, Size};

/// The dimensions of the board, in cells
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct GridSize {
    pub(crate) width: u16,
    pub(crate) height: u16,
}

impl GridSize {
    pub(crate) const fn new(width: u16, height: u16) -> GridSize {
        GridSize { width, height }
    }

    /// Compute the grid that fits on a surface of the given size when each
    /// cell occupies `cell`.  Partial cells are truncated.
    pub(crate) fn from_surface(surface: Size, cell: Size) -> GridSize {
        GridSize {
            width: surface.width.checked_div(cell.width).unwrap_or(0),
            height: surface.height.checked_div(cell.height).unwrap_or(0),
        }
    }

    /// Compute the grid to use for a terminal of the given size
    pub(crate) fn for_terminal(terminal: Size) -> GridSize {
        let available = Size {
            width: terminal.width.saturating_sub(consts::BOARD_CHROME.width),
            height: terminal.height.saturating_sub(consts::BOARD_CHROME.height),
        };
        let canvas = fit_canvas(available, consts::CELL_SIZE, consts::MAX_GRID_CELLS);
        let grid = GridSize::from_surface(canvas, consts::CELL_SIZE);
        let side = grid.width.max(consts::MIN_GRID_CELLS);
        GridSize::new(side, side)
    }

    /// The size of the surface needed to draw this grid with each cell
    /// occupying `cell`
    pub(crate) fn surface_size(self, cell: Size) -> Size {
        Size {
            width: self.width.saturating_mul(cell.width),
            height: self.height.saturating_mul(cell.height),
        }
    }

    /// Test whether the signed coordinates `(x, y)` lie on the grid
    pub(crate) fn contains(self, x: i32, y: i32) -> bool {
        (0..i32::from(self.width)).contains(&x) && (0..i32::from(self.height)).contains(&y)
    }

    pub(crate) fn contains_position(self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Iterate over every cell in the grid, row by row
    pub(crate) fn positions(self) -> Positions {
        Rect::from((Position::ORIGIN, Size::new(self.width, self.height))).positions()
    }
}

/// Choose a square canvas that fits inside `available`, is at most
/// `max_cells` cells along each side, and is an exact multiple of `cell` in
/// both dimensions
pub(crate) fn fit_canvas(available: Size, cell: Size, max_cells: u16) -> Size {
    let across = available.width.checked_div(cell.width).unwrap_or(0);
    let down = available.height.checked_div(cell.height).unwrap_or(0);
    let side = across.min(down).min(max_cells);
    GridSize::new(side, side).surface_size(cell)
}
