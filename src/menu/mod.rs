mod widgets;
use self::widgets::{Instructions, Logo, MapCard};
use crate::consts;
use crate::maps::MapVariant;
use crate::util::{get_display_area, EnumExt};
use enum_map::{Enum, EnumMap};
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    text::{Line, Span},
    widgets::Widget,
};

/// The landing screen, from which a map is chosen and a game started
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct LandingScreen<'a> {
    selected: MapVariant,
    scores: &'a EnumMap<MapVariant, u32>,
}

impl<'a> LandingScreen<'a> {
    pub(crate) fn new(selected: MapVariant, scores: &'a EnumMap<MapVariant, u32>) -> Self {
        LandingScreen { selected, scores }
    }
}

impl Widget for LandingScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [logo_area, instructions_area, hint_area, cards_area, start_area, quit_area] =
            Layout::vertical([
                Logo::HEIGHT,
                Instructions::HEIGHT,
                1,
                MapCard::HEIGHT,
                1,
                1,
            ])
            .flex(Flex::Start)
            .spacing(1)
            .areas(display);

        let [logo_area] = Layout::horizontal([Logo::WIDTH])
            .flex(Flex::Center)
            .areas(logo_area);
        Logo.render(logo_area, buf);

        let [instructions_area] = Layout::horizontal([Instructions::WIDTH])
            .flex(Flex::Center)
            .areas(instructions_area);
        Instructions.render(instructions_area, buf);

        Line::from_iter([
            Span::raw("Choose a map: "),
            Span::styled("1", consts::KEY_STYLE),
            Span::raw(" "),
            Span::styled("2", consts::KEY_STYLE),
            Span::raw(" "),
            Span::styled("3", consts::KEY_STYLE),
            Span::raw(" or "),
            Span::styled("←", consts::KEY_STYLE),
            Span::raw(" "),
            Span::styled("→", consts::KEY_STYLE),
        ])
        .centered()
        .render(hint_area, buf);

        let card_areas = Layout::horizontal([MapCard::WIDTH; MapVariant::LENGTH])
            .flex(Flex::Center)
            .spacing(2)
            .split(cards_area);
        for ((map, key), card_area) in MapVariant::iter().zip('1'..).zip(card_areas.iter()) {
            MapCard {
                map,
                key,
                best: self.scores[map],
                selected: map == self.selected,
            }
            .render(*card_area, buf);
        }

        Line::from_iter([
            Span::raw("[Start ("),
            Span::styled("Enter", consts::KEY_STYLE),
            Span::raw(")]"),
        ])
        .centered()
        .render(start_area, buf);

        Line::from_iter([
            Span::raw("[Quit ("),
            Span::styled("q", consts::KEY_STYLE),
            Span::raw(")]"),
        ])
        .centered()
        .render(quit_area, buf);
    }
}
