//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Time between movements of the snake
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(150);

/// Draw menus inside a rectangle of this size in the center of the terminal
/// window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Size of one grid cell in terminal cells.  Terminal cells are roughly twice
/// as tall as they are wide, so a 2×1 block looks square.
pub(crate) const CELL_SIZE: Size = Size {
    width: 2,
    height: 1,
};

/// Terminal space around the board that the game screen needs for itself:
/// the border on each side, the score bar, and two message lines.
pub(crate) const BOARD_CHROME: Size = Size {
    width: 2,
    height: 5,
};

/// The board is at most this many cells along each side
pub(crate) const MAX_GRID_CELLS: u16 = 30;

/// The board is at least this many cells along each side, even if the
/// terminal is too small to show all of it
pub(crate) const MIN_GRID_CELLS: u16 = 8;

/// Snake length at the start of a game
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// When checking whether the snake has run into itself, the head is only
/// compared against segments at this index or later (the head is index 0).
pub(crate) const SELF_COLLISION_OFFSET: usize = 4;

/// Points awarded for eating one piece of food
pub(crate) const FOOD_POINTS: u32 = 10;

/// Prefix of the keys under which high scores are stored; the full key is
/// `{HIGH_SCORE_NAMESPACE}_{map}`.
pub(crate) const HIGH_SCORE_NAMESPACE: &str = "snakeHighScore";

/// Glyph for the snake's head
pub(crate) const SNAKE_HEAD_SYMBOL: char = '█';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '█';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '█';

/// Glyph for obstacles
pub(crate) const OBSTACLE_SYMBOL: char = '▒';

/// Glyph for the snake's head when it's collided with an obstacle, a wall, or
/// itself
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head
pub(crate) const SNAKE_HEAD_STYLE: Style = Style::new().fg(Color::Rgb(0x3F, 0xB9, 0x50));

/// Style for the snake's body
pub(crate) const SNAKE_BODY_STYLE: Style = Style::new().fg(Color::Rgb(0x58, 0xA6, 0xFF));

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::Rgb(0xF8, 0x51, 0x49));

/// Style for obstacles
pub(crate) const OBSTACLE_STYLE: Style = Style::new().fg(Color::Rgb(0x6E, 0x76, 0x81));

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the currently-selected menu item
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);
