//! The catalog of board layouts
use crate::geometry::GridSize;
use enum_map::Enum;
use ratatui::layout::Position;
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A named obstacle layout together with its policy for what happens when
/// the snake crosses the edge of the board
#[derive(Clone, Copy, Debug, Default, Deserialize, Enum, Eq, Hash, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum MapVariant {
    /// No obstacles; the edges wrap around
    #[default]
    Classic,

    /// Walls along the top and bottom rows; the left & right edges are open
    /// but do not wrap
    Tunnel,

    /// Walls around the entire perimeter
    Boxed,
}

impl MapVariant {
    /// The identifier used for the map in configuration, on the command line,
    /// and in high score keys
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            MapVariant::Classic => "classic",
            MapVariant::Tunnel => "tunnel",
            MapVariant::Boxed => "boxed",
        }
    }

    /// Human-facing name
    pub(crate) fn title(self) -> &'static str {
        match self {
            MapVariant::Classic => "Classic",
            MapVariant::Tunnel => "Tunnel",
            MapVariant::Boxed => "Boxed",
        }
    }

    /// Two short lines describing the map for the main menu
    pub(crate) fn blurb(self) -> [&'static str; 2] {
        match self {
            MapVariant::Classic => ["No walls.", "Edges wrap around."],
            MapVariant::Tunnel => ["Walls top & bottom", "Sides are deadly."],
            MapVariant::Boxed => ["Walls on all sides", "Nowhere to run."],
        }
    }

    /// Whether leaving one edge of the board re-enters at the opposite edge.
    /// When this is false, leaving the board is fatal.
    pub(crate) fn wraps(self) -> bool {
        self == MapVariant::Classic
    }

    /// Generate the obstacle cells for this map on a grid of the given size
    pub(crate) fn obstacles(self, grid: GridSize) -> HashSet<Position> {
        let mut obstacles = HashSet::new();
        let (Some(right), Some(bottom)) = (grid.width.checked_sub(1), grid.height.checked_sub(1))
        else {
            return obstacles;
        };
        match self {
            MapVariant::Classic => (),
            MapVariant::Tunnel => {
                for x in 0..grid.width {
                    obstacles.insert(Position::new(x, 0));
                    obstacles.insert(Position::new(x, bottom));
                }
            }
            MapVariant::Boxed => {
                for x in 0..grid.width {
                    obstacles.insert(Position::new(x, 0));
                    obstacles.insert(Position::new(x, bottom));
                }
                for y in 1..bottom {
                    obstacles.insert(Position::new(0, y));
                    obstacles.insert(Position::new(right, y));
                }
            }
        }
        obstacles
    }
}

impl fmt::Display for MapVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for MapVariant {
    type Err = ParseMapError;

    fn from_str(s: &str) -> Result<MapVariant, ParseMapError> {
        match s.to_ascii_lowercase().as_str() {
            "classic" => Ok(MapVariant::Classic),
            "tunnel" => Ok(MapVariant::Tunnel),
            "boxed" => Ok(MapVariant::Boxed),
            _ => Err(ParseMapError(s.to_owned())),
        }
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("unknown map {0:?}; expected one of \"classic\", \"tunnel\", or \"boxed\"")]
pub(crate) struct ParseMapError(String);
