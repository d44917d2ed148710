mod direction;
mod input;
mod paused;
mod render;
mod session;
mod snake;
mod ticker;
pub(crate) use self::direction::Direction;
use self::paused::{PauseOpt, Paused};
pub(crate) use self::session::{Collision, Session, StepOutcome};
use self::ticker::Ticker;
use crate::command::Command;
use crate::consts;
use crate::geometry::GridSize;
use crate::highscores::HighScoreStore;
use crate::maps::MapVariant;
use crate::menu::LandingScreen;
use crate::util::EnumExt;
use enum_map::EnumMap;
use rand::Rng;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget, Frame};
use std::time::Instant;

/// The game state machine.  It owns the current session (if any), the
/// simulation timer, and the high score store, and is the only thing that
/// starts or stops the timer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    state: GameState,
    /// The map to use for the next game
    map: MapVariant,
    grid: GridSize,
    session: Option<Session>,
    ticker: Ticker,
    high_scores: HighScoreStore,
    /// High score for each map, as shown on the landing screen
    map_scores: EnumMap<MapVariant, u32>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(map: MapVariant, grid: GridSize, high_scores: HighScoreStore) -> Self {
        Game::new_with_rng(map, grid, high_scores, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(
        map: MapVariant,
        grid: GridSize,
        high_scores: HighScoreStore,
        rng: R,
    ) -> Game<R> {
        let mut game = Game {
            rng,
            state: GameState::Landing,
            map,
            grid,
            session: None,
            ticker: Ticker::new(consts::TICK_PERIOD),
            high_scores,
            map_scores: EnumMap::default(),
        };
        game.refresh_map_scores();
        game
    }

    /// Landing → Playing
    pub(crate) fn start(&mut self) {
        if self.state == GameState::Landing {
            self.begin();
        }
    }

    /// GameOver → Playing
    pub(crate) fn restart(&mut self) {
        if matches!(self.state, GameState::GameOver(_)) {
            self.begin();
        }
    }

    fn begin(&mut self) {
        let high_score = self.high_scores.get(self.map);
        self.session = Some(Session::new(self.map, self.grid, high_score, &mut self.rng));
        self.state = GameState::Playing;
        self.ticker.cancel();
        self.ticker.start();
        tracing::info!(map = %self.map, width = self.grid.width, height = self.grid.height, high_score, "Starting new game");
    }

    /// Run one step of the simulation.  Does nothing unless a game is being
    /// played.
    pub(crate) fn tick(&mut self) -> Option<StepOutcome> {
        if self.state != GameState::Playing {
            return None;
        }
        let session = self.session.as_mut()?;
        let outcome = session.step(&mut self.rng);
        tracing::debug!(?outcome, score = session.score(), "Tick");
        if let StepOutcome::Ate {
            new_high_score: true,
        } = outcome
        {
            self.high_scores.record(self.map, session.score());
        }
        let ending = match outcome {
            StepOutcome::Died(collision) => Some(Ending::Collision(collision)),
            _ if session.food().is_none() => Some(Ending::BoardFull),
            _ => None,
        };
        if let Some(ending) = ending {
            self.ticker.cancel();
            self.state = GameState::GameOver(ending);
            tracing::info!(
                cause = ending.describe(),
                score = session.score(),
                high_score = session.high_score(),
                "Game over"
            );
        } else {
            self.ticker.reschedule();
        }
        Some(outcome)
    }

    /// Record new board dimensions.  A game in progress has its obstacles
    /// regenerated for the new grid.
    pub(crate) fn resize(&mut self, grid: GridSize) {
        if grid == self.grid {
            return;
        }
        tracing::debug!(width = grid.width, height = grid.height, "Board resized");
        self.grid = grid;
        if let Some(session) = self.session.as_mut() {
            session.resize(grid, &mut self.rng);
        }
    }

    /// Handle a command from the user.  Returns `Some(Quit)` if the user
    /// asked to leave the program.
    pub(crate) fn handle_command(&mut self, cmd: Command) -> Option<Quit> {
        match self.state {
            GameState::Landing => match cmd {
                Command::Quit | Command::Q => return Some(Quit),
                Command::Enter | Command::Space => self.start(),
                Command::Left => {
                    if let Some(map) = self.map.prev() {
                        self.select_map(map);
                    }
                }
                Command::Right => {
                    if let Some(map) = self.map.next() {
                        self.select_map(map);
                    }
                }
                Command::Next => self.select_map(self.map.next().unwrap_or_else(MapVariant::min)),
                Command::Prev => self.select_map(self.map.prev().unwrap_or_else(MapVariant::max)),
                Command::Map(map) => self.select_map(map),
                _ => (),
            },
            GameState::Playing => match cmd {
                Command::Quit => return Some(Quit),
                Command::Up => self.turn(Direction::Up),
                Command::Down => self.turn(Direction::Down),
                Command::Left => self.turn(Direction::Left),
                Command::Right => self.turn(Direction::Right),
                Command::Esc | Command::P => self.pause(),
                Command::E => self.end_game(),
                _ => (),
            },
            GameState::Paused(ref mut paused) => match paused.handle_command(cmd)? {
                PauseOpt::Resume => self.resume(),
                PauseOpt::MainMenu => self.main_menu(),
                PauseOpt::Quit => return Some(Quit),
            },
            GameState::GameOver(_) => match cmd {
                Command::R | Command::Enter => self.restart(),
                Command::M => self.main_menu(),
                Command::Quit | Command::Q => return Some(Quit),
                _ => (),
            },
        }
        None
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    /// Playing → Paused
    pub(crate) fn pause(&mut self) {
        if self.state == GameState::Playing {
            self.ticker.cancel();
            self.state = GameState::Paused(Paused::new());
            tracing::info!("Game paused");
        }
    }

    /// Paused → Playing
    pub(crate) fn resume(&mut self) {
        if matches!(self.state, GameState::Paused(_)) {
            self.state = GameState::Playing;
            self.ticker.start();
            tracing::info!("Game resumed");
        }
    }

    /// Playing → Landing
    pub(crate) fn end_game(&mut self) {
        if self.state == GameState::Playing {
            tracing::info!("Game ended by user");
            self.leave();
        }
    }

    /// GameOver/Paused → Landing
    pub(crate) fn main_menu(&mut self) {
        if matches!(self.state, GameState::GameOver(_) | GameState::Paused(_)) {
            self.leave();
        }
    }

    fn leave(&mut self) {
        self.ticker.cancel();
        self.session = None;
        self.state = GameState::Landing;
        self.refresh_map_scores();
    }

    /// Choose the map for the next game.  Only possible on the landing
    /// screen.
    pub(crate) fn select_map(&mut self, map: MapVariant) {
        if self.state == GameState::Landing && map != self.map {
            tracing::debug!(%map, "Map selected");
            self.map = map;
        }
    }

    pub(crate) fn turn(&mut self, direction: Direction) {
        if self.state == GameState::Playing {
            if let Some(session) = self.session.as_mut() {
                session.turn(direction);
            }
        }
    }

    fn refresh_map_scores(&mut self) {
        for map in MapVariant::iter() {
            self.map_scores[map] = self.high_scores.get(map);
        }
    }

    /// When the next tick is due, if the game is running
    pub(crate) fn next_tick(&self) -> Option<Instant> {
        self.ticker.deadline()
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &GameState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn selected_map(&self) -> MapVariant {
        self.map
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match (&self.state, &self.session) {
            (GameState::Landing, _) | (_, None) => {
                LandingScreen::new(self.map, &self.map_scores).render(area, buf);
            }
            (state, Some(session)) => {
                render::Board::new(session, state).render(area, buf);
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GameState {
    /// The main menu, where a map is chosen
    Landing,
    Playing,
    Paused(Paused),
    GameOver(Ending),
}

/// Why a game ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Ending {
    Collision(Collision),
    /// The snake has filled the board and there are no more cells to place
    /// food in.
    BoardFull,
}

impl Ending {
    fn describe(self) -> &'static str {
        match self {
            Ending::Collision(Collision::Wall) => "ran off the board",
            Ending::Collision(Collision::Snake) => "ran into itself",
            Ending::Collision(Collision::Obstacle) => "hit an obstacle",
            Ending::BoardFull => "filled the board",
        }
    }
}

/// Returned by [`Game::handle_command()`] when the user asks to quit
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Quit;
