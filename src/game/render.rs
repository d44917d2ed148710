use super::paused::Paused;
use super::session::Session;
use super::{Ending, GameState};
use crate::consts;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
};

/// The game screen: score bar, board, and any pop-up or footer for the
/// current state
#[derive(Clone, Copy, Debug)]
pub(super) struct Board<'a> {
    session: &'a Session,
    state: &'a GameState,
}

impl<'a> Board<'a> {
    pub(super) fn new(session: &'a Session, state: &'a GameState) -> Board<'a> {
        Board { session, state }
    }

    fn draw_cells(&self, canvas: &mut Canvas<'_>) {
        for &pos in self.session.obstacles() {
            canvas.draw_cell(pos, consts::OBSTACLE_SYMBOL, consts::OBSTACLE_STYLE);
        }
        if let Some(food) = self.session.food() {
            canvas.draw_cell(food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        }
        for &pos in self.session.snake_cells().iter().skip(1) {
            canvas.draw_cell(pos, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_BODY_STYLE);
        }
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with
        if let GameState::GameOver(Ending::Collision(_)) = self.state {
            canvas.draw_cell(
                self.session.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
        } else {
            canvas.draw_cell(
                self.session.head(),
                consts::SNAKE_HEAD_SYMBOL,
                consts::SNAKE_HEAD_STYLE,
            );
        }
    }

    fn score_line(&self) -> Line<'static> {
        Line::styled(
            format!(
                " Score: {}   High Score: {}   Map: {}",
                self.session.score(),
                self.session.high_score(),
                self.session.map()
            ),
            consts::SCORE_BAR_STYLE,
        )
    }

    fn game_over_lines(&self, ending: Ending) -> [Line<'static>; 2] {
        let banner = match ending {
            Ending::Collision(_) => "GAME OVER",
            Ending::BoardFull => "BOARD FULL",
        };
        let summary = Line::from(format!(
            "{banner}  Score: {}  High Score: {}",
            self.session.score(),
            self.session.high_score()
        ))
        .centered();
        let choices = Line::from_iter([
            Span::raw("Choose One: Restart ("),
            Span::styled("r", consts::KEY_STYLE),
            Span::raw(") | Main Menu ("),
            Span::styled("m", consts::KEY_STYLE),
            Span::raw(") | Quit ("),
            Span::styled("q", consts::KEY_STYLE),
            Span::raw(")"),
        ])
        .centered();
        [summary, choices]
    }
}

impl Widget for Board<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let canvas_size = self.session.grid().surface_size(consts::CELL_SIZE);
        let block_size = Size {
            width: canvas_size.width.saturating_add(2),
            height: canvas_size.height.saturating_add(2),
        };
        let [score_area, board_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(block_size.height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(area);
        self.score_line().render(score_area, buf);

        let block_area = center_rect(board_area, block_size);
        if self.session.map().wraps() {
            DottedBorder.render(block_area, buf);
        } else {
            Block::bordered().render(block_area, buf);
        }
        let mut canvas = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        self.draw_cells(&mut canvas);

        match *self.state {
            GameState::Landing | GameState::Playing => (),
            GameState::Paused(paused) => {
                let pause_area = popup_area(
                    block_area,
                    Size {
                        width: Paused::WIDTH,
                        height: Paused::HEIGHT,
                    },
                );
                paused.render(pause_area, buf);
            }
            GameState::GameOver(ending) => {
                let [summary, choices] = self.game_over_lines(ending);
                summary.render(msg1_area, buf);
                choices.render(msg2_area, buf);
            }
        }
    }
}

/// Center a pop-up of the given size within `area`, rounding any odd
/// leftover space towards the top left
fn popup_area(area: Rect, size: Size) -> Rect {
    let x = area
        .x
        .saturating_add(area.width.saturating_sub(size.width) / 2);
    let y = area
        .y
        .saturating_add(area.height.saturating_sub(size.height) / 2);
    Rect::new(x, y, size.width, size.height).intersection(area)
}

/// A view of a region of a buffer addressed in grid cells
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_char(&mut self, pos: Position, symbol: char) {
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
        }
    }

    /// Fill the block of terminal cells making up grid cell `pos`
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(left) = pos.x.checked_mul(consts::CELL_SIZE.width) else {
            return;
        };
        let Some(top) = pos.y.checked_mul(consts::CELL_SIZE.height) else {
            return;
        };
        let cell_area = Rect::new(left, top, consts::CELL_SIZE.width, consts::CELL_SIZE.height);
        for p in cell_area.positions() {
            if p.x >= self.area.width || p.y >= self.area.height {
                continue;
            }
            self.draw_char(p, symbol);
            if let Some(cell) = self
                .buf
                .cell_mut((self.area.x.saturating_add(p.x), self.area.y.saturating_add(p.y)))
            {
                cell.set_style(Style::reset().patch(style));
            }
        }
    }
}

/// Border drawn around boards whose edges wrap around
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct DottedBorder;

impl Widget for DottedBorder {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let size = area.as_size();
        let max_x = size.width.saturating_sub(1);
        let max_y = size.height.saturating_sub(1);
        let mut canvas = Canvas { area, buf };
        canvas.draw_char(Position::ORIGIN, '·');
        canvas.draw_char(Position::new(max_x, 0), '·');
        canvas.draw_char(Position::new(max_x, max_y), '·');
        canvas.draw_char(Position::new(0, max_y), '·');
        for x in 1..max_x {
            canvas.draw_char(Position::new(x, 0), '⋯');
            canvas.draw_char(Position::new(x, max_y), '⋯');
        }
        for y in 1..max_y {
            canvas.draw_char(Position::new(0, y), '⋮');
            canvas.draw_char(Position::new(max_x, y), '⋮');
        }
    }
}
