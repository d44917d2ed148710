use crate::consts;
use crate::maps::MapVariant;
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{
        block::{Block, BorderType, Padding},
        Widget,
    },
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Logo;

impl Logo {
    const SNAKE_WIDTH: u16 = 28;
    const GRID_WIDTH: u16 = 20;
    pub(super) const HEIGHT: u16 = 5;
    pub(super) const WIDTH: u16 = Self::SNAKE_WIDTH + Self::GRID_WIDTH;

    #[rustfmt::skip]
    const SNAKE: [&'static str; Self::HEIGHT as usize] = [
         " ____              _        ",
         "/ ___| _ __   __ _| | _____ ",
        r"\___ \| '_ \ / _` | |/ / _ \",
         " ___) | | | | (_| |   <  __/",
        r"|____/|_| |_|\__,_|_|\_\___|",
    ];

    #[rustfmt::skip]
    const GRID: [&'static str; Self::HEIGHT as usize] = [
         "  ____      _     _ ",
         " / ___|_ __(_) __| |",
         "| |  _| '__| |/ _` |",
         "| |_| | |  | | (_| |",
        r" \____|_|  |_|\__,_|",
    ];
}

impl Widget for Logo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [snake_area, grid_area] = Layout::horizontal([Self::SNAKE_WIDTH, Self::GRID_WIDTH])
            .flex(Flex::Start)
            .areas(area);
        Text::from_iter(Self::SNAKE)
            .style(consts::SNAKE_HEAD_STYLE)
            .render(snake_area, buf);
        Text::from_iter(Self::GRID)
            .style(consts::FOOD_STYLE)
            .render(grid_area, buf);
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Instructions;

impl Instructions {
    pub(super) const HEIGHT: u16 = 6;
    pub(super) const WIDTH: u16 = 20;
}

impl Widget for Instructions {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Text::from_iter([
            Line::from("Move the snake with:"),
            Line::from_iter([
                Span::raw("       "),
                Span::styled("←", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("↓", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("↑", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("→", consts::KEY_STYLE),
            ]),
            Line::from_iter([
                Span::raw("   or: "),
                Span::styled("h", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("j", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("k", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("l", consts::KEY_STYLE),
            ]),
            Line::from_iter([
                Span::raw("   or: "),
                Span::styled("a", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("s", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("w", consts::KEY_STYLE),
                Span::raw(" "),
                Span::styled("d", consts::KEY_STYLE),
            ]),
            Line::from("Eat the food, but"),
            Line::from("don't hit yourself!"),
        ]);
        debug_assert_eq!(
            text.height(),
            usize::from(Self::HEIGHT),
            "Instructions::HEIGHT is wrong"
        );
        debug_assert_eq!(
            text.width(),
            usize::from(Self::WIDTH),
            "Instructions::WIDTH is wrong"
        );
        text.render(area, buf);
    }
}

/// A box describing one map variant on the landing screen
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct MapCard {
    pub(super) map: MapVariant,
    /// The key that selects this map
    pub(super) key: char,
    pub(super) best: u32,
    pub(super) selected: bool,
}

impl MapCard {
    const HORIZONTAL_PADDING: u16 = 1;
    const TEXT_WIDTH: u16 = 18;
    pub(super) const HEIGHT: u16 = 5;
    pub(super) const WIDTH: u16 = 2 + 2 * Self::HORIZONTAL_PADDING + Self::TEXT_WIDTH;
}

impl Widget for MapCard {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Line::from_iter([
            Span::raw(" "),
            Span::styled(self.key.to_string(), consts::KEY_STYLE),
            Span::raw(format!(" {} ", self.map.title())),
        ]);
        let border_type = if self.selected {
            BorderType::Double
        } else {
            BorderType::Plain
        };
        let block = Block::bordered()
            .border_type(border_type)
            .title(title)
            .padding(Padding::horizontal(Self::HORIZONTAL_PADDING));
        let inner = block.inner(area);
        block.render(area, buf);
        let [line1, line2] = self.map.blurb();
        Text::from_iter([
            Line::from(line1),
            Line::from(line2),
            Line::from(format!("Best: {}", self.best)),
        ])
        .render(inner, buf);
    }
}
