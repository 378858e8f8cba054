//! Heading-relative motion commands.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Movement direction relative to the robot's fixed heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Along the heading.
    Forward,
    /// Against the heading.
    Backward,
    /// Sideways, a quarter turn counter-clockwise from the heading.
    Left,
    /// Sideways, a quarter turn clockwise from the heading.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Forward,
        Direction::Backward,
        Direction::Left,
        Direction::Right,
    ];

    /// Clockwise quarter turns from the heading to this direction.
    pub(crate) fn quarter_turns(self) -> u8 {
        match self {
            Direction::Forward => 0,
            Direction::Right => 1,
            Direction::Backward => 2,
            Direction::Left => 3,
        }
    }

    pub(crate) fn from_quarter_turns(turns: u8) -> Self {
        match turns % 4 {
            0 => Direction::Forward,
            1 => Direction::Right,
            2 => Direction::Backward,
            _ => Direction::Left,
        }
    }

    /// Lowercase token, as printed in command listings.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl FromStr for Direction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forward" => Ok(Direction::Forward),
            "backward" => Ok(Direction::Backward),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(ConfigError::UnknownDirection {
                token: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Distance covered by one command: half a cell or a whole cell.
///
/// Serialized as the number `0.5` or `1.0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub enum Magnitude {
    /// Half a cell, used only for docking maneuvers.
    Half,
    /// One whole cell, used for every cell-to-cell step.
    Full,
}

impl Magnitude {
    /// Length in grid units.
    pub fn as_f64(self) -> f64 {
        match self {
            Magnitude::Half => 0.5,
            Magnitude::Full => 1.0,
        }
    }

    /// Length in exact half-cell units.
    pub fn half_units(self) -> i32 {
        match self {
            Magnitude::Half => 1,
            Magnitude::Full => 2,
        }
    }
}

impl From<Magnitude> for f64 {
    fn from(m: Magnitude) -> Self {
        m.as_f64()
    }
}

impl TryFrom<f64> for Magnitude {
    type Error = ConfigError;

    fn try_from(v: f64) -> Result<Self, Self::Error> {
        if v == 0.5 {
            Ok(Magnitude::Half)
        } else if v == 1.0 {
            Ok(Magnitude::Full)
        } else {
            Err(ConfigError::InvalidMagnitude { value: v })
        }
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Magnitude::Half => f.write_str("0.5"),
            Magnitude::Full => f.write_str("1"),
        }
    }
}

/// One motion command: a heading-relative direction and a magnitude.
///
/// Displays in the listing format the robot firmware consumes:
///
/// ```
/// use gridtour_core::{Command, Direction};
///
/// assert_eq!(Command::full(Direction::Forward).to_string(), "forward(1)");
/// assert_eq!(Command::half(Direction::Left).to_string(), "left(0.5)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Command {
    /// Heading-relative direction of travel.
    pub direction: Direction,
    /// Distance to travel.
    pub magnitude: Magnitude,
}

impl Command {
    /// A half-cell command.
    pub const fn half(direction: Direction) -> Self {
        Self {
            direction,
            magnitude: Magnitude::Half,
        }
    }

    /// A whole-cell command.
    pub const fn full(direction: Direction) -> Self {
        Self {
            direction,
            magnitude: Magnitude::Full,
        }
    }

    /// Distance covered in grid units.
    pub fn distance(&self) -> f64 {
        self.magnitude.as_f64()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.direction, self.magnitude)
    }
}

impl FromStr for Command {
    type Err = ConfigError;

    /// Parses the listing format, e.g. `backward(0.5)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ConfigError::MalformedCommand {
            token: s.to_string(),
        };
        let s_trim = s.trim();
        let (dir, rest) = s_trim.split_once('(').ok_or_else(malformed)?;
        let value = rest.strip_suffix(')').ok_or_else(malformed)?;
        let direction: Direction = dir.parse()?;
        let raw: f64 = value.trim().parse().map_err(|_| malformed())?;
        let magnitude = Magnitude::try_from(raw)?;
        Ok(Self {
            direction,
            magnitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_listing_format() {
        assert_eq!(Command::full(Direction::Backward).to_string(), "backward(1)");
        assert_eq!(Command::half(Direction::Right).to_string(), "right(0.5)");
    }

    #[test]
    fn parse_listing_format() {
        assert_eq!(
            "forward(0.5)".parse::<Command>().unwrap(),
            Command::half(Direction::Forward)
        );
        assert_eq!(
            "left(1)".parse::<Command>().unwrap(),
            Command::full(Direction::Left)
        );
        assert!(matches!(
            "left(2)".parse::<Command>(),
            Err(ConfigError::InvalidMagnitude { .. })
        ));
        assert!(matches!(
            "left 1".parse::<Command>(),
            Err(ConfigError::MalformedCommand { .. })
        ));
        assert!(matches!(
            "jump(1)".parse::<Command>(),
            Err(ConfigError::UnknownDirection { .. })
        ));
    }

    #[test]
    fn distance_sums_magnitudes() {
        let cmds = [
            Command::half(Direction::Left),
            Command::full(Direction::Forward),
            Command::half(Direction::Backward),
        ];
        let total: f64 = cmds.iter().map(Command::distance).sum();
        assert_eq!(total, 2.0);
    }

    #[test]
    fn command_json_shape() {
        let json = serde_json::to_string(&Command::half(Direction::Forward)).unwrap();
        assert_eq!(json, r#"{"direction":"forward","magnitude":0.5}"#);
        let back: Command = serde_json::from_str(r#"{"direction":"right","magnitude":1.0}"#)
            .unwrap();
        assert_eq!(back, Command::full(Direction::Right));
    }
}
