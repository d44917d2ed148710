use crate::command::Command;
use crate::game::Game;
use crate::geometry::GridSize;
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{backend::Backend, layout::Size, Terminal};
use std::io;
use std::time::Instant;

/// Drives the game: draws it, feeds it input events, and fires its ticks
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    game: Game<R>,
    quitting: bool,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(game: Game<R>) -> App<R> {
        App {
            game,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        let size = terminal.size()?;
        self.game.resize(GridSize::for_terminal(size));
        while !self.quitting {
            terminal.draw(|frame| self.game.draw(frame))?;
            self.process_input()?;
        }
        tracing::info!("Exiting");
        Ok(())
    }

    /// Wait for either an input event or the next tick, whichever comes
    /// first, and handle it
    fn process_input(&mut self) -> io::Result<()> {
        if let Some(when) = self.game.next_tick() {
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                let _ = self.game.tick();
                return Ok(());
            }
        }
        self.handle_event(read()?);
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Resize(width, height) => {
                self.game
                    .resize(GridSize::for_terminal(Size::new(width, height)));
            }
            Event::FocusLost => self.game.pause(),
            event => {
                if let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) {
                    if self.game.handle_command(cmd).is_some() {
                        self.quitting = true;
                    }
                }
            }
        }
    }
}
