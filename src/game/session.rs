use super::direction::Direction;
use super::input::InputMapper;
use super::snake::Snake;
use crate::consts;
use crate::geometry::GridSize;
use crate::maps::MapVariant;
use rand::{seq::IteratorRandom, Rng};
use ratatui::layout::Position;
use std::collections::{HashSet, VecDeque};

/// The state of one game in progress
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Session {
    pub(super) map: MapVariant,
    pub(super) grid: GridSize,
    pub(super) snake: Snake,
    pub(super) input: InputMapper,
    /// `None` only when there is no free cell left on the board
    pub(super) food: Option<Position>,
    pub(super) obstacles: HashSet<Position>,
    pub(super) score: u32,
    pub(super) high_score: u32,
}

impl Session {
    /// Set up a fresh game on `map`: a new snake in the center of the board
    /// moving right, food in a random free cell, and a score of zero
    pub(crate) fn new<R: Rng>(
        map: MapVariant,
        grid: GridSize,
        high_score: u32,
        rng: &mut R,
    ) -> Session {
        let head = Position::new(grid.width / 2, grid.height / 2);
        let mut session = Session {
            map,
            grid,
            snake: Snake::new(head, Direction::Right, grid),
            input: InputMapper::new(),
            food: None,
            obstacles: map.obstacles(grid),
            score: 0,
            high_score,
        };
        session.food = session.place_food(rng);
        session
    }

    pub(crate) fn map(&self) -> MapVariant {
        self.map
    }

    pub(crate) fn grid(&self) -> GridSize {
        self.grid
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn high_score(&self) -> u32 {
        self.high_score
    }

    pub(crate) fn food(&self) -> Option<Position> {
        self.food
    }

    pub(crate) fn obstacles(&self) -> &HashSet<Position> {
        &self.obstacles
    }

    pub(crate) fn head(&self) -> Position {
        self.snake.head()
    }

    pub(crate) fn snake_cells(&self) -> &VecDeque<Position> {
        self.snake.body()
    }

    #[cfg(test)]
    pub(crate) fn direction(&self) -> Direction {
        self.snake.direction()
    }

    /// Ask the snake to turn.  Returns `true` if the request was accepted.
    pub(crate) fn turn(&mut self, direction: Direction) -> bool {
        if let Some(d) = self.input.request(self.snake.direction(), direction) {
            self.snake.turn(d);
            true
        } else {
            false
        }
    }

    /// Advance the simulation by one tick
    pub(crate) fn step<R: Rng>(&mut self, rng: &mut R) -> StepOutcome {
        self.input.unlock();
        let Some(head) = self
            .snake
            .direction()
            .advance(self.snake.head(), self.grid, self.map.wraps())
        else {
            return StepOutcome::Died(Collision::Wall);
        };
        let eating = self.food == Some(head);
        self.snake.advance(head, eating);
        if self.snake.bit_itself() {
            return StepOutcome::Died(Collision::Snake);
        }
        if self.obstacles.contains(&head) {
            return StepOutcome::Died(Collision::Obstacle);
        }
        if eating {
            self.score = self.score.saturating_add(consts::FOOD_POINTS);
            let new_high_score = self.score > self.high_score;
            if new_high_score {
                self.high_score = self.score;
            }
            self.food = self.place_food(rng);
            StepOutcome::Ate { new_high_score }
        } else {
            StepOutcome::Moved
        }
    }

    /// Adapt the session to a board of a different size.  The obstacles are
    /// regenerated for the new grid, and the food is moved if it is no longer
    /// on a free cell.
    pub(crate) fn resize<R: Rng>(&mut self, grid: GridSize, rng: &mut R) {
        if grid == self.grid {
            return;
        }
        self.grid = grid;
        self.obstacles = self.map.obstacles(grid);
        let food_ok = self
            .food
            .is_some_and(|f| grid.contains_position(f) && !self.obstacles.contains(&f));
        if !food_ok {
            self.food = self.place_food(rng);
        }
    }

    /// Pick a cell for the food uniformly at random from all cells not
    /// occupied by the snake or an obstacle.  Returns `None` if every cell is
    /// occupied.
    fn place_food<R: Rng>(&self, rng: &mut R) -> Option<Position> {
        self.grid
            .positions()
            .filter(|p| !self.obstacles.contains(p) && !self.snake.contains(*p))
            .choose(rng)
    }
}

/// What happened during a single step.  A step that ends in `Died` leaves
/// the session as it was at the moment of the crash, so the renderer can
/// show where it happened.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum StepOutcome {
    Moved,
    Ate {
        /// The score now exceeds the high score the session started with,
        /// or the one it last set
        new_high_score: bool,
    },
    Died(Collision),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Collision {
    /// Left the board on a map that doesn't wrap
    Wall,
    Snake,
    Obstacle,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn rng() -> ChaCha12Rng {
        ChaCha12Rng::seed_from_u64(RNG_SEED)
    }

    fn session_with_snake(
        map: MapVariant,
        grid: GridSize,
        cells: &[(u16, u16)],
        direction: Direction,
    ) -> Session {
        let mut session = Session::new(map, grid, 0, &mut rng());
        session.snake = Snake {
            body: cells.iter().map(|&(x, y)| Position::new(x, y)).collect(),
            direction,
        };
        session.food = Some(Position::new(0, grid.height - 1));
        session
    }

    fn assert_food_is_free(session: &Session) {
        let food = session.food().expect("board should not be full");
        assert!(session.grid().contains_position(food));
        assert!(!session.snake_cells().contains(&food));
        assert!(!session.obstacles().contains(&food));
    }

    #[test]
    fn new_session_layout() {
        let session = Session::new(MapVariant::Boxed, GridSize::new(30, 30), 70, &mut rng());
        assert_eq!(
            session.snake_cells(),
            &[
                Position::new(15, 15),
                Position::new(14, 15),
                Position::new(13, 15)
            ]
        );
        assert_eq!(session.direction(), Direction::Right);
        assert_eq!(session.score(), 0);
        assert_eq!(session.high_score(), 70);
        assert_eq!(session.obstacles().len(), 116);
        assert_food_is_free(&session);
    }

    #[test]
    fn boxed_first_tick() {
        let mut session = Session::new(MapVariant::Boxed, GridSize::new(30, 30), 0, &mut rng());
        session.food = Some(Position::new(3, 3));
        assert_eq!(session.step(&mut rng()), StepOutcome::Moved);
        assert_eq!(
            session.snake_cells(),
            &[
                Position::new(16, 15),
                Position::new(15, 15),
                Position::new(14, 15)
            ]
        );
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn eat_food() {
        let mut session = Session::new(MapVariant::Boxed, GridSize::new(30, 30), 0, &mut rng());
        session.food = Some(Position::new(16, 15));
        let mut rng = rng();
        assert_eq!(
            session.step(&mut rng),
            StepOutcome::Ate {
                new_high_score: true
            }
        );
        assert_eq!(session.score(), 10);
        assert_eq!(session.high_score(), 10);
        assert_eq!(session.snake_cells().len(), 4);
        assert_eq!(session.head(), Position::new(16, 15));
        assert_food_is_free(&session);
        assert_ne!(session.food(), Some(Position::new(16, 15)));
    }

    #[test]
    fn eat_food_below_high_score() {
        let mut session = Session::new(MapVariant::Classic, GridSize::new(30, 30), 50, &mut rng());
        session.food = Some(Position::new(16, 15));
        assert_eq!(
            session.step(&mut rng()),
            StepOutcome::Ate {
                new_high_score: false
            }
        );
        assert_eq!(session.score(), 10);
        assert_eq!(session.high_score(), 50);
    }

    #[test]
    fn length_constant_without_food() {
        let mut session = Session::new(MapVariant::Classic, GridSize::new(30, 30), 0, &mut rng());
        session.food = Some(Position::new(0, 0));
        let turns = [Direction::Down, Direction::Left, Direction::Up, Direction::Right];
        for i in 0..40 {
            let _ = session.turn(turns[(i / 5) % 4]);
            assert_eq!(session.step(&mut rng()), StepOutcome::Moved);
            assert_eq!(session.snake_cells().len(), 3);
        }
    }

    #[test]
    fn tunnel_top_wall() {
        let mut session = session_with_snake(
            MapVariant::Tunnel,
            GridSize::new(30, 30),
            &[(10, 1), (10, 2), (10, 3)],
            Direction::Up,
        );
        assert_eq!(
            session.step(&mut rng()),
            StepOutcome::Died(Collision::Obstacle)
        );
    }

    #[test]
    fn tunnel_side_is_fatal() {
        let mut session = session_with_snake(
            MapVariant::Tunnel,
            GridSize::new(30, 30),
            &[(0, 10), (1, 10), (2, 10)],
            Direction::Left,
        );
        assert_eq!(session.step(&mut rng()), StepOutcome::Died(Collision::Wall));
        assert_eq!(session.head(), Position::new(0, 10));
    }

    #[test]
    fn boxed_wall() {
        let mut session = session_with_snake(
            MapVariant::Boxed,
            GridSize::new(30, 30),
            &[(28, 10), (27, 10), (26, 10)],
            Direction::Right,
        );
        assert_eq!(
            session.step(&mut rng()),
            StepOutcome::Died(Collision::Obstacle)
        );
    }

    #[test]
    fn classic_wraps_left() {
        let mut session = session_with_snake(
            MapVariant::Classic,
            GridSize::new(30, 30),
            &[(0, 10), (1, 10), (2, 10)],
            Direction::Left,
        );
        assert_eq!(session.step(&mut rng()), StepOutcome::Moved);
        assert_eq!(session.head(), Position::new(29, 10));
    }

    #[test]
    fn classic_wraps_up() {
        let mut session = session_with_snake(
            MapVariant::Classic,
            GridSize::new(30, 20),
            &[(7, 0), (7, 1), (7, 2)],
            Direction::Up,
        );
        assert_eq!(session.step(&mut rng()), StepOutcome::Moved);
        assert_eq!(session.head(), Position::new(7, 19));
    }

    #[test]
    fn classic_head_stays_in_bounds() {
        let grid = GridSize::new(12, 9);
        let mut session = Session::new(MapVariant::Classic, grid, 0, &mut rng());
        session.food = None;
        let mut rng = rng();
        for i in 0..100 {
            if i % 17 == 0 {
                let _ = session.turn(Direction::Down);
            } else if i % 17 == 9 {
                let _ = session.turn(Direction::Right);
            }
            assert_eq!(session.step(&mut rng), StepOutcome::Moved);
            assert!(grid.contains_position(session.head()));
        }
    }

    #[test]
    fn moving_into_vacated_tail_is_safe() {
        let mut session = session_with_snake(
            MapVariant::Classic,
            GridSize::new(20, 20),
            &[(5, 5), (5, 4), (6, 4), (6, 5), (6, 6), (5, 6)],
            Direction::Down,
        );
        assert_eq!(session.step(&mut rng()), StepOutcome::Moved);
        assert_eq!(session.head(), Position::new(5, 6));
    }

    #[test]
    fn self_collision() {
        let mut session = session_with_snake(
            MapVariant::Classic,
            GridSize::new(20, 20),
            &[(5, 5), (5, 4), (6, 4), (6, 5), (6, 6), (5, 6), (4, 6)],
            Direction::Down,
        );
        assert_eq!(session.step(&mut rng()), StepOutcome::Died(Collision::Snake));
    }

    #[test]
    fn tight_turn_into_fourth_segment() {
        let mut session = session_with_snake(
            MapVariant::Classic,
            GridSize::new(20, 20),
            &[(5, 5), (5, 4), (6, 4), (6, 5), (6, 6)],
            Direction::Down,
        );
        assert!(session.turn(Direction::Right));
        assert_eq!(session.step(&mut rng()), StepOutcome::Died(Collision::Snake));
    }

    #[test]
    fn reverse_turn_rejected() {
        let mut session = Session::new(MapVariant::Classic, GridSize::new(30, 30), 0, &mut rng());
        assert!(!session.turn(Direction::Left));
        assert_eq!(session.direction(), Direction::Right);
    }

    #[test]
    fn turn_applies_on_next_step() {
        let mut session = Session::new(MapVariant::Classic, GridSize::new(30, 30), 0, &mut rng());
        session.food = None;
        assert!(session.turn(Direction::Up));
        assert!(!session.turn(Direction::Left));
        assert_eq!(session.step(&mut rng()), StepOutcome::Moved);
        assert_eq!(session.head(), Position::new(15, 14));
        assert!(session.turn(Direction::Left));
        assert_eq!(session.step(&mut rng()), StepOutcome::Moved);
        assert_eq!(session.head(), Position::new(14, 14));
    }

    #[test]
    fn food_never_on_snake_or_obstacle() {
        for seed in 0..50 {
            let mut rng = ChaCha12Rng::seed_from_u64(seed);
            let session = Session::new(MapVariant::Boxed, GridSize::new(8, 8), 0, &mut rng);
            assert_food_is_free(&session);
        }
    }

    #[test]
    fn board_full() {
        let mut session = session_with_snake(
            MapVariant::Classic,
            GridSize::new(4, 1),
            &[(2, 0), (1, 0), (0, 0)],
            Direction::Right,
        );
        session.food = Some(Position::new(3, 0));
        assert_eq!(
            session.step(&mut rng()),
            StepOutcome::Ate {
                new_high_score: true
            }
        );
        assert_eq!(session.food(), None);
        assert_eq!(session.snake_cells().len(), 4);
    }

    #[test]
    fn resize_regenerates_obstacles() {
        let mut session = Session::new(MapVariant::Boxed, GridSize::new(30, 30), 0, &mut rng());
        session.food = Some(Position::new(25, 25));
        session.resize(GridSize::new(20, 20), &mut rng());
        assert_eq!(session.grid(), GridSize::new(20, 20));
        assert_eq!(session.obstacles(), &MapVariant::Boxed.obstacles(GridSize::new(20, 20)));
        assert!(session.obstacles().contains(&Position::new(19, 10)));
        assert!(!session.obstacles().contains(&Position::new(29, 10)));
        assert_food_is_free(&session);
        assert!(session.grid().contains_position(session.food().unwrap()));
    }

    #[test]
    fn resize_keeps_free_food() {
        let mut session = Session::new(MapVariant::Tunnel, GridSize::new(30, 30), 0, &mut rng());
        session.food = Some(Position::new(4, 4));
        session.resize(GridSize::new(20, 20), &mut rng());
        assert_eq!(session.food(), Some(Position::new(4, 4)));
    }
}
