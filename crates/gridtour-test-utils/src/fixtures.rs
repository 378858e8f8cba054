//! Reusable snapshot fixtures.
//!
//! - [`open_spec`]: wall-free grid with nothing placed.
//! - [`scenario_4x4`]: 4x4 open grid, start (0,0) center heading up, end
//!   checkpoint and exit both (3,3) center.
//! - [`corridor_spec`]: serpentine corridor forcing long detours.
//! - [`SpecBuilder`]: chained construction for everything else.

use gridtour_core::{Coord, GridSize, Heading, SubCellPosition};
use gridtour_plan::GridSpec;

fn size(n: u32) -> GridSize {
    GridSize::new(i64::from(n)).expect("fixture grid size")
}

/// A wall-free `n x n` snapshot with nothing placed.
pub fn open_spec(n: u32) -> GridSpec {
    GridSpec::new(size(n))
}

/// Wall off every open side of `cell`.
pub fn enclose(spec: &mut GridSpec, cell: Coord) {
    for nb in spec.walls().neighbours(cell) {
        spec.set_wall_between(cell, nb, true)
            .expect("fixture wall");
    }
}

/// The reference scenario: 4x4, no walls, no plain checkpoints, start at
/// (0,0) center facing up, end checkpoint and exit at (3,3) center.
pub fn scenario_4x4() -> GridSpec {
    SpecBuilder::new(4)
        .start(Coord::new(0, 0), SubCellPosition::Center, Heading::Up)
        .end_checkpoint(Coord::new(3, 3))
        .exit(Coord::new(3, 3), SubCellPosition::Center)
        .build()
}

/// An `n x n` grid whose rows form one serpentine corridor: every row
/// boundary is walled except at alternating ends.
///
/// The start is (0,0) and the end checkpoint and exit are the far end of
/// the last row, so the route visits every cell.
pub fn corridor_spec(n: u32) -> GridSpec {
    let n_i = size(n).as_i32();
    let mut spec = open_spec(n);
    for y in 0..n_i - 1 {
        let gap = if y % 2 == 0 { n_i - 1 } else { 0 };
        for x in 0..n_i {
            if x != gap {
                spec.set_horizontal_wall(x, y, true)
                    .expect("fixture wall");
            }
        }
    }
    let last = Coord::new(if n_i % 2 == 0 { 0 } else { n_i - 1 }, n_i - 1);
    spec.place_robot_start(Coord::new(0, 0), SubCellPosition::Center, Heading::Up)
        .expect("fixture start");
    spec.set_end_checkpoint(last).expect("fixture end checkpoint");
    spec.place_robot_end(last, SubCellPosition::Center)
        .expect("fixture exit");
    spec
}

/// `k` distinct checkpoint cells spread over an `n x n` grid, avoiding
/// (0,0) and (n-1, n-1).
///
/// Deterministic: a fixed quadratic probe, not an RNG.
pub fn scattered_checkpoints(n: u32, k: usize) -> Vec<Coord> {
    let n_i = size(n).as_i32();
    let cells = (n as usize) * (n as usize);
    let mut out = Vec::with_capacity(k);
    let mut i: usize = 1;
    while out.len() < k && i < cells * 4 {
        let idx = (i * i * 13 + i * 5) % cells;
        let c = Coord::new((idx % n as usize) as i32, (idx / n as usize) as i32);
        let corner = c == Coord::new(0, 0) || c == Coord::new(n_i - 1, n_i - 1);
        if !corner && !out.contains(&c) {
            out.push(c);
        }
        i += 1;
    }
    out
}

/// Chained snapshot construction.
///
/// ```
/// use gridtour_core::{Coord, Heading, SubCellPosition};
/// use gridtour_test_utils::SpecBuilder;
///
/// let spec = SpecBuilder::new(5)
///     .start(Coord::new(0, 0), SubCellPosition::Center, Heading::Up)
///     .checkpoint(Coord::new(2, 2))
///     .end_checkpoint(Coord::new(4, 4))
///     .exit(Coord::new(4, 0), SubCellPosition::MidRight)
///     .build();
/// assert_eq!(spec.checkpoints().len(), 1);
/// ```
pub struct SpecBuilder {
    spec: GridSpec,
}

impl SpecBuilder {
    pub fn new(n: u32) -> Self {
        Self {
            spec: open_spec(n),
        }
    }

    pub fn start(mut self, cell: Coord, position: SubCellPosition, heading: Heading) -> Self {
        self.spec
            .place_robot_start(cell, position, heading)
            .expect("fixture start");
        self
    }

    pub fn exit(mut self, cell: Coord, position: SubCellPosition) -> Self {
        self.spec
            .place_robot_end(cell, position)
            .expect("fixture exit");
        self
    }

    pub fn checkpoint(mut self, c: Coord) -> Self {
        self.spec.toggle_checkpoint(c).expect("fixture checkpoint");
        self
    }

    pub fn checkpoints(self, cs: impl IntoIterator<Item = Coord>) -> Self {
        cs.into_iter().fold(self, SpecBuilder::checkpoint)
    }

    pub fn end_checkpoint(mut self, c: Coord) -> Self {
        self.spec
            .set_end_checkpoint(c)
            .expect("fixture end checkpoint");
        self
    }

    /// Wall between two adjacent cells.
    pub fn wall(mut self, a: Coord, b: Coord) -> Self {
        self.spec
            .set_wall_between(a, b, true)
            .expect("fixture wall");
        self
    }

    /// Enclose `cell` on every side.
    pub fn enclosed(mut self, cell: Coord) -> Self {
        enclose(&mut self.spec, cell);
        self
    }

    pub fn build(self) -> GridSpec {
        self.spec
    }
}
