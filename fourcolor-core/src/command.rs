use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{error::ParseError, figure::Tile, geometry::point::Point};

/// A keyboard- or script-driven editing command, routed through
/// [`Scene::apply`](crate::scene::Scene::apply).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Toggle the tile under an output-space point of the focused view.
    Toggle(Tile),
    Translate(Point<i32>),
    RotateCcw,
    RotateCw,
    FlipX,
    FlipY,
    /// Return the focused view to its initial placement.
    Reset,
    /// Move focus to the next view.
    Focus,
    /// Erase the figure and reset every view.
    Clear,
}

impl FromStr for Command {
    type Err = ParseError;

    /// Script words: `toggle:X,Y`, `translate:DX,DY`, `ccw`, `cw`, `flip-x`,
    /// `flip-y`, the unit translations `left`/`right`/`up`/`down`, `reset`,
    /// `focus`, `clear`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(point) = s.strip_prefix("toggle:") {
            return Ok(Command::Toggle(point.parse()?));
        }
        if let Some(point) = s.strip_prefix("translate:") {
            return Ok(Command::Translate(point.parse()?));
        }
        match s {
            "ccw" => Ok(Command::RotateCcw),
            "cw" => Ok(Command::RotateCw),
            "flip-x" => Ok(Command::FlipX),
            "flip-y" => Ok(Command::FlipY),
            "left" => Ok(Command::Translate(Point { x: -1, y: 0 })),
            "right" => Ok(Command::Translate(Point { x: 1, y: 0 })),
            "up" => Ok(Command::Translate(Point { x: 0, y: 1 })),
            "down" => Ok(Command::Translate(Point { x: 0, y: -1 })),
            "reset" => Ok(Command::Reset),
            "focus" => Ok(Command::Focus),
            "clear" => Ok(Command::Clear),
            _ => Err(ParseError::UnknownCommand(s.to_string())),
        }
    }
}
