mod app;
mod command;
mod config;
mod consts;
mod game;
mod geometry;
mod highscores;
mod maps;
mod menu;
mod util;
use crate::app::App;
use crate::config::Config;
use crate::game::Game;
use crate::geometry::GridSize;
use crate::maps::MapVariant;
use anyhow::Context;
use crossterm::event::{DisableFocusChange, EnableFocusChange};
use lexopt::{Arg, Parser, ValueExt};
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match Invocation::from_parser(Parser::from_env()) {
        Ok(Invocation::Run(args)) => exit_code(args.run()),
        Ok(Invocation::Help) => {
            print!("{}", usage());
            ExitCode::SUCCESS
        }
        Ok(Invocation::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("snakegrid: {e}");
            eprint!("{}", usage());
            ExitCode::from(2)
        }
    }
}

fn usage() -> String {
    format!(
        concat!(
            "Usage: {} [<options>]\n",
            "\n",
            "Options:\n",
            "  -c, --config <path>     Read configuration from the given file\n",
            "      --log-file <path>   Write log messages to the given file\n",
            "  -m, --map <map>         Initially select the given map (classic, tunnel, boxed)\n",
            "  -h, --help              Display this help message and exit\n",
            "  -V, --version           Show the program version and exit\n",
        ),
        env!("CARGO_PKG_NAME")
    )
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Invocation {
    Run(Arguments),
    Help,
    Version,
}

impl Invocation {
    fn from_parser(mut parser: Parser) -> Result<Invocation, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => args.log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Short('m') | Arg::Long("map") => args.map = Some(parser.value()?.parse()?),
                Arg::Short('h') | Arg::Long("help") => return Ok(Invocation::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Invocation::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Invocation::Run(args))
    }
}

/// Options given on the command line
#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
    log_file: Option<PathBuf>,
    map: Option<MapVariant>,
}

impl Arguments {
    fn run(self) -> anyhow::Result<()> {
        if let Some(path) = self.log_file {
            init_logging(path)?;
        }
        let config = match self.config {
            Some(path) => Config::load(&path, false),
            None => Config::default_path().and_then(|path| Config::load(&path, true)),
        }
        .context("Failed to load configuration")?;
        let map = self.map.unwrap_or(config.map);
        tracing::info!(%map, "Starting {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        let grid = GridSize::new(consts::MAX_GRID_CELLS, consts::MAX_GRID_CELLS);
        let game = Game::new(map, grid, config.high_score_store());
        let terminal = ratatui::init();
        if let Err(e) = crossterm::execute!(io::stdout(), EnableFocusChange) {
            tracing::warn!(error = %e, "Could not enable focus change events");
        }
        let r = App::new(game).run(terminal);
        if let Err(e) = crossterm::execute!(io::stdout(), DisableFocusChange) {
            tracing::warn!(error = %e, "Could not disable focus change events");
        }
        ratatui::restore();
        r.map_err(Into::into)
    }
}

/// Send `tracing` output to the file at `path`.  The level defaults to
/// `info` and can be overridden with `RUST_LOG`.
fn init_logging(path: PathBuf) -> anyhow::Result<()> {
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .context("Failed to open log file")?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn exit_code(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e.downcast_ref::<io::Error>()
                .is_some_and(|ioe| ioe.kind() == ErrorKind::BrokenPipe) =>
        {
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Fatal error: {e:#}");
            eprintln!("snakegrid: {e:?}");
            ExitCode::from(2)
        }
    }
}
