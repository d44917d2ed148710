use crate::geometry::GridSize;
use ratatui::layout::Position;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The unit displacement, in cells, of one move in this direction
    pub(crate) fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Move one cell from `pos` in this direction.  If the result is off of
    /// `grid`, it is wrapped around to the opposite edge when `wrap` is true;
    /// otherwise, `None` is returned.
    pub(crate) fn advance(self, pos: Position, grid: GridSize, wrap: bool) -> Option<Position> {
        let (dx, dy) = self.offset();
        let mut x = i32::from(pos.x) + dx;
        let mut y = i32::from(pos.y) + dy;
        if wrap {
            x = x.rem_euclid(i32::from(grid.width).max(1));
            y = y.rem_euclid(i32::from(grid.height).max(1));
        } else if !grid.contains(x, y) {
            return None;
        }
        Some(Position::new(u16::try_from(x).ok()?, u16::try_from(y).ok()?))
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}
