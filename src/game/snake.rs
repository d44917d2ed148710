use super::direction::Direction;
use crate::consts;
use crate::geometry::GridSize;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// The snake itself
///
/// All positions are grid cells relative to the top-left corner of the
/// board.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The cells occupied by the snake, head first
    pub(super) body: VecDeque<Position>,

    /// The direction in which the snake is currently facing
    pub(super) direction: Direction,
}

impl Snake {
    /// Create a new snake of length
    /// [`INITIAL_SNAKE_LENGTH`][consts::INITIAL_SNAKE_LENGTH] with its head
    /// at `head`, facing in `direction`, and its body trailing out behind it.
    /// If the body would run off of `grid`, it is cut short.
    pub(super) fn new(head: Position, direction: Direction, grid: GridSize) -> Snake {
        let behind = direction.reverse();
        let body = std::iter::successors(Some(head), |&p| behind.advance(p, grid, false))
            .take(consts::INITIAL_SNAKE_LENGTH)
            .collect();
        Snake { body, direction }
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Position {
        // The body is never empty.
        self.body.front().copied().unwrap_or_default()
    }

    pub(super) fn direction(&self) -> Direction {
        self.direction
    }

    /// Return the positions of the cells of the snake, head first
    pub(super) fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    pub(super) fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Change the snake's direction to `direction`
    pub(super) fn turn(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Move the snake's head to `head`.  Unless `grow` is true, the last cell
    /// of the tail is dropped so that the length stays the same.
    pub(super) fn advance(&mut self, head: Position, grow: bool) {
        self.body.push_front(head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Test whether the head occupies the same cell as a segment at index
    /// [`SELF_COLLISION_OFFSET`][consts::SELF_COLLISION_OFFSET] or later
    pub(super) fn bit_itself(&self) -> bool {
        let head = self.head();
        self.body
            .iter()
            .skip(consts::SELF_COLLISION_OFFSET)
            .any(|&p| p == head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trails_behind_head() {
        let snake = Snake::new(Position::new(15, 15), Direction::Right, GridSize::new(30, 30));
        assert_eq!(
            snake.body,
            [
                Position::new(15, 15),
                Position::new(14, 15),
                Position::new(13, 15)
            ]
        );
        assert_eq!(snake.head(), Position::new(15, 15));
    }

    #[test]
    fn new_clipped_at_edge() {
        let snake = Snake::new(Position::new(1, 0), Direction::Right, GridSize::new(5, 1));
        assert_eq!(snake.body, [Position::new(1, 0), Position::new(0, 0)]);
    }

    #[test]
    fn advance_keeps_length() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, GridSize::new(10, 10));
        snake.advance(Position::new(6, 5), false);
        assert_eq!(
            snake.body,
            [
                Position::new(6, 5),
                Position::new(5, 5),
                Position::new(4, 5)
            ]
        );
    }

    #[test]
    fn advance_and_grow() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, GridSize::new(10, 10));
        snake.advance(Position::new(6, 5), true);
        assert_eq!(snake.body().len(), 4);
        assert_eq!(snake.body.back(), Some(&Position::new(3, 5)));
    }

    #[test]
    fn neck_overlap_not_a_collision() {
        let snake = Snake {
            body: VecDeque::from([
                Position::new(5, 5),
                Position::new(6, 5),
                Position::new(6, 6),
                Position::new(5, 5),
            ]),
            direction: Direction::Left,
        };
        assert!(!snake.bit_itself());
    }

    #[test]
    fn overlap_at_offset_is_a_collision() {
        let snake = Snake {
            body: VecDeque::from([
                Position::new(6, 5),
                Position::new(5, 5),
                Position::new(5, 4),
                Position::new(6, 4),
                Position::new(6, 5),
            ]),
            direction: Direction::Right,
        };
        assert!(snake.bit_itself());
    }
}
