//! Robot pose vocabulary: the tour-wide heading and sub-cell docking positions.

use crate::command::Direction;
use crate::coord::Cardinal;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The robot's facing direction, fixed for the whole tour.
///
/// Every [`Command`](crate::Command) direction is interpreted relative to
/// the heading, never as an absolute compass direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Heading {
    /// Facing north (towards row 0).
    #[default]
    Up = 0,
    /// Facing east.
    Right = 1,
    /// Facing south.
    Down = 2,
    /// Facing west.
    Left = 3,
}

impl Heading {
    /// All headings in rotation order.
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Right, Heading::Down, Heading::Left];

    /// The absolute direction the robot faces.
    pub fn facing(self) -> Cardinal {
        Cardinal::from_index(self as u8)
    }

    /// Resolve a heading-relative direction to an absolute one.
    ///
    /// ```
    /// use gridtour_core::{Cardinal, Direction, Heading};
    ///
    /// assert_eq!(Heading::Up.resolve(Direction::Forward), Cardinal::North);
    /// assert_eq!(Heading::Left.resolve(Direction::Left), Cardinal::South);
    /// assert_eq!(Heading::Down.resolve(Direction::Right), Cardinal::West);
    /// ```
    pub fn resolve(self, dir: Direction) -> Cardinal {
        Cardinal::from_index(self as u8 + dir.quarter_turns())
    }

    /// Express an absolute direction relative to this heading.
    ///
    /// Inverse of [`resolve`](Self::resolve).
    pub fn relative(self, abs: Cardinal) -> Direction {
        Direction::from_quarter_turns(abs as u8 + 4 - self as u8)
    }

    /// Lowercase token used in setup input and snapshots.
    pub fn as_str(self) -> &'static str {
        match self {
            Heading::Up => "up",
            Heading::Right => "right",
            Heading::Down => "down",
            Heading::Left => "left",
        }
    }
}

impl FromStr for Heading {
    type Err = ConfigError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Heading::Up),
            "right" => Ok(Heading::Right),
            "down" => Ok(Heading::Down),
            "left" => Ok(Heading::Left),
            _ => Err(ConfigError::UnknownHeading {
                token: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where within its cell the robot physically sits.
///
/// This is a docking offset, not a cell: the center, the four edge
/// midpoints, or the four corners.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum SubCellPosition {
    /// Cell center.
    #[default]
    Center = 0,
    /// Midpoint of the top edge.
    MidTop = 1,
    /// Midpoint of the right edge.
    MidRight = 2,
    /// Midpoint of the bottom edge.
    MidBottom = 3,
    /// Midpoint of the left edge.
    MidLeft = 4,
    /// Top-left corner.
    CornerTopLeft = 5,
    /// Top-right corner.
    CornerTopRight = 6,
    /// Bottom-left corner.
    CornerBottomLeft = 7,
    /// Bottom-right corner.
    CornerBottomRight = 8,
}

impl SubCellPosition {
    /// All nine positions in declaration order.
    pub const ALL: [SubCellPosition; 9] = [
        SubCellPosition::Center,
        SubCellPosition::MidTop,
        SubCellPosition::MidRight,
        SubCellPosition::MidBottom,
        SubCellPosition::MidLeft,
        SubCellPosition::CornerTopLeft,
        SubCellPosition::CornerTopRight,
        SubCellPosition::CornerBottomLeft,
        SubCellPosition::CornerBottomRight,
    ];

    /// Offset from the cell center in half-cell units, as `(dx, dy)`.
    pub fn offset_half_cells(self) -> (i32, i32) {
        match self {
            SubCellPosition::Center => (0, 0),
            SubCellPosition::MidTop => (0, -1),
            SubCellPosition::MidRight => (1, 0),
            SubCellPosition::MidBottom => (0, 1),
            SubCellPosition::MidLeft => (-1, 0),
            SubCellPosition::CornerTopLeft => (-1, -1),
            SubCellPosition::CornerTopRight => (1, -1),
            SubCellPosition::CornerBottomLeft => (-1, 1),
            SubCellPosition::CornerBottomRight => (1, 1),
        }
    }

    /// Whether this is one of the four corners.
    pub fn is_corner(self) -> bool {
        matches!(
            self,
            SubCellPosition::CornerTopLeft
                | SubCellPosition::CornerTopRight
                | SubCellPosition::CornerBottomLeft
                | SubCellPosition::CornerBottomRight
        )
    }

    /// Classify a point inside a cell into a docking position.
    ///
    /// `local_x` / `local_y` are measured from the cell's top-left corner in
    /// the same units as `cell_size`. Anything within a quarter cell of an
    /// edge counts as that edge; corners win over edges.
    pub fn classify(local_x: u32, local_y: u32, cell_size: u32) -> Self {
        let t = cell_size / 4;
        let near_left = local_x < t;
        let near_right = local_x > cell_size.saturating_sub(t);
        let near_top = local_y < t;
        let near_bottom = local_y > cell_size.saturating_sub(t);

        if near_left && near_top {
            SubCellPosition::CornerTopLeft
        } else if near_right && near_top {
            SubCellPosition::CornerTopRight
        } else if near_left && near_bottom {
            SubCellPosition::CornerBottomLeft
        } else if near_right && near_bottom {
            SubCellPosition::CornerBottomRight
        } else if near_top {
            SubCellPosition::MidTop
        } else if near_right {
            SubCellPosition::MidRight
        } else if near_bottom {
            SubCellPosition::MidBottom
        } else if near_left {
            SubCellPosition::MidLeft
        } else {
            SubCellPosition::Center
        }
    }

    /// Snake-case token used in snapshots.
    pub fn as_str(self) -> &'static str {
        match self {
            SubCellPosition::Center => "center",
            SubCellPosition::MidTop => "mid_top",
            SubCellPosition::MidRight => "mid_right",
            SubCellPosition::MidBottom => "mid_bottom",
            SubCellPosition::MidLeft => "mid_left",
            SubCellPosition::CornerTopLeft => "corner_top_left",
            SubCellPosition::CornerTopRight => "corner_top_right",
            SubCellPosition::CornerBottomLeft => "corner_bottom_left",
            SubCellPosition::CornerBottomRight => "corner_bottom_right",
        }
    }
}

impl FromStr for SubCellPosition {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == token)
            .ok_or_else(|| ConfigError::UnknownPosition {
                token: s.to_string(),
            })
    }
}

impl fmt::Display for SubCellPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
