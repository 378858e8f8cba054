//! The planning snapshot and planner configuration.
//!
//! A [`GridSpec`] is everything a solve reads: the wall layout, the
//! checkpoints, and where the robot starts and exits. It is built either
//! through the editor-style mutators or by deserializing a
//! [`SnapshotDoc`], and is validated on construction so an inconsistent
//! snapshot never reaches the planner.

use gridtour_core::{ConfigError, Coord, GridSize, Heading, SubCellPosition};
use gridtour_grid::WallGrid;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

// ── Robot placement ────────────────────────────────────────────────

/// Where the robot begins the tour, and the heading it keeps throughout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotStart {
    /// Starting cell.
    pub cell: Coord,
    /// Docking offset within the starting cell.
    #[serde(default)]
    pub position: SubCellPosition,
    /// Tour-wide heading.
    #[serde(default)]
    pub heading: Heading,
}

/// Where the robot must finish docked after the last checkpoint.
///
/// There is no heading here: the start heading governs the whole tour,
/// including the final docking maneuver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotEnd {
    /// Exit cell.
    pub cell: Coord,
    /// Docking offset within the exit cell.
    #[serde(default)]
    pub position: SubCellPosition,
}

// ── GridSpec ───────────────────────────────────────────────────────

/// A validated planning snapshot.
///
/// Invariants held at all times:
/// - every coordinate lies inside the grid;
/// - checkpoints are distinct and keep insertion order;
/// - the end checkpoint is never also a plain checkpoint.
///
/// # Examples
///
/// ```
/// use gridtour_core::{Coord, GridSize, Heading, SubCellPosition};
/// use gridtour_plan::GridSpec;
///
/// let mut spec = GridSpec::new(GridSize::new(4).unwrap());
/// spec.toggle_checkpoint(Coord::new(1, 2)).unwrap();
/// spec.set_end_checkpoint(Coord::new(3, 3)).unwrap();
/// spec.place_robot_start(Coord::new(0, 0), SubCellPosition::Center, Heading::Up)
///     .unwrap();
/// spec.place_robot_end(Coord::new(3, 3), SubCellPosition::Center).unwrap();
/// assert_eq!(spec.checkpoints().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SnapshotDoc", into = "SnapshotDoc")]
pub struct GridSpec {
    walls: WallGrid,
    checkpoints: IndexSet<Coord>,
    end_checkpoint: Option<Coord>,
    robot_start: Option<RobotStart>,
    robot_end: Option<RobotEnd>,
}

impl GridSpec {
    /// An empty snapshot: no walls, no checkpoints, robot not placed.
    pub fn new(size: GridSize) -> Self {
        Self {
            walls: WallGrid::new(size),
            checkpoints: IndexSet::new(),
            end_checkpoint: None,
            robot_start: None,
            robot_end: None,
        }
    }

    /// Parse and validate a JSON snapshot.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let doc: SnapshotDoc = serde_json::from_str(text).map_err(|e| ConfigError::Snapshot {
            reason: e.to_string(),
        })?;
        Self::try_from(doc)
    }

    /// Serialize to pretty-printed JSON, walls as coordinate lists.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Snapshot {
            reason: e.to_string(),
        })
    }

    /// Grid side length.
    pub fn size(&self) -> GridSize {
        self.walls.size()
    }

    /// The wall layout.
    pub fn walls(&self) -> &WallGrid {
        &self.walls
    }

    // ── Walls ──────────────────────────────────────────────────

    /// Place or remove the vertical wall between column `x` and `x + 1` at row `y`.
    pub fn set_vertical_wall(&mut self, x: i32, y: i32, present: bool) -> Result<(), ConfigError> {
        self.walls.set_vertical_wall(x, y, present)
    }

    /// Place or remove the horizontal wall between row `y` and `y + 1` at column `x`.
    pub fn set_horizontal_wall(
        &mut self,
        x: i32,
        y: i32,
        present: bool,
    ) -> Result<(), ConfigError> {
        self.walls.set_horizontal_wall(x, y, present)
    }

    /// Flip a vertical wall, returning whether it is now present.
    pub fn toggle_vertical_wall(&mut self, x: i32, y: i32) -> Result<bool, ConfigError> {
        self.walls.toggle_vertical_wall(x, y)
    }

    /// Flip a horizontal wall, returning whether it is now present.
    pub fn toggle_horizontal_wall(&mut self, x: i32, y: i32) -> Result<bool, ConfigError> {
        self.walls.toggle_horizontal_wall(x, y)
    }

    /// Place or remove the wall on the shared edge of two adjacent cells.
    pub fn set_wall_between(&mut self, a: Coord, b: Coord, present: bool) -> Result<(), ConfigError> {
        self.walls.set_wall_between(a, b, present)
    }

    // ── Checkpoints ────────────────────────────────────────────

    /// Plain checkpoints in insertion order. Never contains the end checkpoint.
    pub fn checkpoints(&self) -> &IndexSet<Coord> {
        &self.checkpoints
    }

    /// The designated last checkpoint, if set.
    pub fn end_checkpoint(&self) -> Option<Coord> {
        self.end_checkpoint
    }

    /// Toggle `c` as a plain checkpoint, returning whether it is now one.
    ///
    /// If `c` is the end checkpoint, the end checkpoint is cleared and `c`
    /// becomes a plain checkpoint.
    pub fn toggle_checkpoint(&mut self, c: Coord) -> Result<bool, ConfigError> {
        self.size().check("checkpoint", c)?;
        if self.end_checkpoint == Some(c) {
            self.end_checkpoint = None;
        }
        if self.checkpoints.shift_remove(&c) {
            Ok(false)
        } else {
            self.checkpoints.insert(c);
            Ok(true)
        }
    }

    /// Designate `c` as the end checkpoint, replacing any previous one.
    ///
    /// `c` is removed from the plain checkpoints if present.
    pub fn set_end_checkpoint(&mut self, c: Coord) -> Result<(), ConfigError> {
        self.size().check("end checkpoint", c)?;
        self.checkpoints.shift_remove(&c);
        self.end_checkpoint = Some(c);
        Ok(())
    }

    /// Unset the end checkpoint.
    pub fn clear_end_checkpoint(&mut self) {
        self.end_checkpoint = None;
    }

    // ── Robot ──────────────────────────────────────────────────

    /// The robot start, if placed.
    pub fn robot_start(&self) -> Option<&RobotStart> {
        self.robot_start.as_ref()
    }

    /// The robot exit, if placed.
    pub fn robot_end(&self) -> Option<&RobotEnd> {
        self.robot_end.as_ref()
    }

    /// Place the robot start.
    pub fn place_robot_start(
        &mut self,
        cell: Coord,
        position: SubCellPosition,
        heading: Heading,
    ) -> Result<(), ConfigError> {
        self.size().check("robot start", cell)?;
        self.robot_start = Some(RobotStart {
            cell,
            position,
            heading,
        });
        Ok(())
    }

    /// Place the robot exit.
    pub fn place_robot_end(&mut self, cell: Coord, position: SubCellPosition) -> Result<(), ConfigError> {
        self.size().check("robot end", cell)?;
        self.robot_end = Some(RobotEnd { cell, position });
        Ok(())
    }

    /// Change the tour heading. Returns `false` if the start is not placed.
    pub fn set_heading(&mut self, heading: Heading) -> bool {
        match self.robot_start.as_mut() {
            Some(start) => {
                start.heading = heading;
                true
            }
            None => false,
        }
    }

    /// Mark the robot start as unset.
    pub fn clear_robot_start(&mut self) {
        self.robot_start = None;
    }

    /// Mark the robot exit as unset.
    pub fn clear_robot_end(&mut self) {
        self.robot_end = None;
    }
}

// ── Serialized form ────────────────────────────────────────────────

/// Wall placement as it appears in a snapshot document.
///
/// Either a list of `[x, y]` indices of present walls, or the full
/// boolean matrix indexed `[x][y]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WallsDoc {
    /// Indices of present walls.
    List(Vec<(i32, i32)>),
    /// Full boolean matrix.
    Matrix(Vec<Vec<bool>>),
}

impl Default for WallsDoc {
    fn default() -> Self {
        WallsDoc::List(Vec::new())
    }
}

impl WallsDoc {
    fn into_matrix(
        self,
        axis: &'static str,
        outer: usize,
        inner: usize,
    ) -> Result<Vec<Vec<bool>>, ConfigError> {
        match self {
            WallsDoc::Matrix(m) => Ok(m),
            WallsDoc::List(cells) => {
                let mut m = vec![vec![false; inner]; outer];
                for (x, y) in cells {
                    let slot = match (usize::try_from(x), usize::try_from(y)) {
                        (Ok(i), Ok(j)) => m.get_mut(i).and_then(|row| row.get_mut(j)),
                        _ => None,
                    };
                    match slot {
                        Some(s) => *s = true,
                        None => return Err(ConfigError::WallOutOfBounds { axis, x, y }),
                    }
                }
                Ok(m)
            }
        }
    }
}

/// Unvalidated snapshot document, the serde shape of [`GridSpec`].
///
/// ```json
/// {
///   "size": 4,
///   "vertical_walls": [[1, 0]],
///   "horizontal_walls": [],
///   "checkpoints": [[2, 1]],
///   "end_checkpoint": [3, 3],
///   "robot_start": { "cell": [0, 0], "position": "center", "heading": "up" },
///   "robot_end": { "cell": [3, 3], "position": "corner_top_left" }
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapshotDoc {
    /// Grid side length.
    pub size: i64,
    /// Vertical walls.
    #[serde(default)]
    pub vertical_walls: WallsDoc,
    /// Horizontal walls.
    #[serde(default)]
    pub horizontal_walls: WallsDoc,
    /// Plain checkpoints, in order.
    #[serde(default)]
    pub checkpoints: Vec<Coord>,
    /// End checkpoint, if set.
    #[serde(default)]
    pub end_checkpoint: Option<Coord>,
    /// Robot start, if placed.
    #[serde(default)]
    pub robot_start: Option<RobotStart>,
    /// Robot exit, if placed.
    #[serde(default)]
    pub robot_end: Option<RobotEnd>,
}

impl TryFrom<SnapshotDoc> for GridSpec {
    type Error = ConfigError;

    fn try_from(doc: SnapshotDoc) -> Result<Self, Self::Error> {
        let size = GridSize::new(doc.size)?;
        let n = size.get() as usize;
        let vertical = doc.vertical_walls.into_matrix("vertical", n - 1, n)?;
        let horizontal = doc.horizontal_walls.into_matrix("horizontal", n, n - 1)?;

        let mut spec = GridSpec {
            walls: WallGrid::from_matrices(size, &vertical, &horizontal)?,
            ..GridSpec::new(size)
        };
        for c in doc.checkpoints {
            size.check("checkpoint", c)?;
            if !spec.checkpoints.insert(c) {
                return Err(ConfigError::DuplicateCheckpoint { coord: c });
            }
        }
        if let Some(end) = doc.end_checkpoint {
            size.check("end checkpoint", end)?;
            if spec.checkpoints.contains(&end) {
                return Err(ConfigError::EndCheckpointIsCheckpoint { coord: end });
            }
            spec.end_checkpoint = Some(end);
        }
        if let Some(start) = doc.robot_start {
            spec.place_robot_start(start.cell, start.position, start.heading)?;
        }
        if let Some(end) = doc.robot_end {
            spec.place_robot_end(end.cell, end.position)?;
        }
        Ok(spec)
    }
}

impl From<GridSpec> for SnapshotDoc {
    fn from(spec: GridSpec) -> Self {
        SnapshotDoc {
            size: i64::from(spec.size().get()),
            vertical_walls: WallsDoc::List(spec.walls.vertical_walls().collect()),
            horizontal_walls: WallsDoc::List(spec.walls.horizontal_walls().collect()),
            checkpoints: spec.checkpoints.into_iter().collect(),
            end_checkpoint: spec.end_checkpoint,
            robot_start: spec.robot_start,
            robot_end: spec.robot_end,
        }
    }
}

// ── PlannerConfig ──────────────────────────────────────────────────

/// Tuning knobs for the planner. None of them change the result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Reuse leg searches for repeated `(from, to)` pairs within one
    /// solve. Default: `true`.
    pub cache_legs: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self { cache_legs: true }
    }
}
