//! Sub-cell motion translation.
//!
//! Converts a cell-center [`Route`] plus the robot's docking offsets at the
//! start and exit into heading-relative [`Command`]s.
//!
//! Docking maneuvers come from two fixed tables indexed by
//! `(SubCellPosition, Heading)`:
//!
//! - [`to_center`]: from a docking offset to the cell center. Corners move
//!   along x first, then y.
//! - [`from_center`]: from the cell center to a docking offset. Corners
//!   move along y first, then x.
//!
//! Every entry is a list of half-cell steps: none for the center, one for
//! an edge midpoint, two for a corner.

use gridtour_core::{Cardinal, Command, Coord, Direction, GridSize, Heading, SubCellPosition};
use gridtour_grid::Route;
use smallvec::SmallVec;

/// Up to two docking commands.
pub type Maneuver = SmallVec<[Command; 2]>;

type Table = [[&'static [Direction]; 4]; 9];

const F: Direction = Direction::Forward;
const B: Direction = Direction::Backward;
const L: Direction = Direction::Left;
const R: Direction = Direction::Right;

// Rows follow `SubCellPosition` declaration order, columns follow
// `Heading` order: up, right, down, left.

const TO_CENTER: Table = [
    // Center
    [&[], &[], &[], &[]],
    // MidTop
    [&[B], &[R], &[F], &[L]],
    // MidRight
    [&[L], &[B], &[R], &[F]],
    // MidBottom
    [&[F], &[L], &[B], &[R]],
    // MidLeft
    [&[R], &[F], &[L], &[B]],
    // CornerTopLeft
    [&[R, B], &[F, R], &[L, F], &[B, L]],
    // CornerTopRight
    [&[L, B], &[B, R], &[R, F], &[F, L]],
    // CornerBottomLeft
    [&[R, F], &[F, L], &[L, B], &[B, R]],
    // CornerBottomRight
    [&[L, F], &[B, L], &[R, B], &[F, R]],
];

const FROM_CENTER: Table = [
    // Center
    [&[], &[], &[], &[]],
    // MidTop
    [&[F], &[L], &[B], &[R]],
    // MidRight
    [&[R], &[F], &[L], &[B]],
    // MidBottom
    [&[B], &[R], &[F], &[L]],
    // MidLeft
    [&[L], &[B], &[R], &[F]],
    // CornerTopLeft
    [&[F, L], &[L, B], &[B, R], &[R, F]],
    // CornerTopRight
    [&[F, R], &[L, F], &[B, L], &[R, B]],
    // CornerBottomLeft
    [&[B, L], &[R, B], &[F, R], &[L, F]],
    // CornerBottomRight
    [&[B, R], &[R, F], &[F, L], &[L, B]],
];

fn lookup(table: &Table, position: SubCellPosition, heading: Heading) -> Maneuver {
    table[position as usize][heading as usize]
        .iter()
        .map(|&d| Command::half(d))
        .collect()
}

/// Half-steps that take the robot from `position` to the cell center.
///
/// ```
/// use gridtour_core::{Command, Direction, Heading, SubCellPosition};
/// use gridtour_plan::motion::to_center;
///
/// let m = to_center(SubCellPosition::CornerTopLeft, Heading::Up);
/// assert_eq!(
///     m.as_slice(),
///     &[Command::half(Direction::Right), Command::half(Direction::Backward)]
/// );
/// ```
pub fn to_center(position: SubCellPosition, heading: Heading) -> Maneuver {
    lookup(&TO_CENTER, position, heading)
}

/// Half-steps that take the robot from the cell center to `position`.
pub fn from_center(position: SubCellPosition, heading: Heading) -> Maneuver {
    lookup(&FROM_CENTER, position, heading)
}

/// Whether executing `commands` from `cell` keeps the robot on the grid.
///
/// The simulation starts at the integer cell coordinate itself (the cell's
/// top-left corner in continuous space) and tracks position in exact
/// half-cell units. After every command the enclosing cell, found by
/// flooring, must lie in `[0, size)` on both axes. One bad intermediate
/// position fails the whole sequence.
pub fn feasible(size: GridSize, cell: Coord, heading: Heading, commands: &[Command]) -> bool {
    let n = i64::from(size.get());
    let mut x = 2 * i64::from(cell.x);
    let mut y = 2 * i64::from(cell.y);
    commands.iter().all(|cmd| {
        let (dx, dy) = heading.resolve(cmd.direction).offset();
        let h = i64::from(cmd.magnitude.half_units());
        x += i64::from(dx) * h;
        y += i64::from(dy) * h;
        let (cx, cy) = (x.div_euclid(2), y.div_euclid(2));
        (0..n).contains(&cx) && (0..n).contains(&cy)
    })
}

/// The whole-cell command for one step between adjacent cells.
///
/// Returns `None` if `a` and `b` are not 4-adjacent.
pub fn leg_to_command(a: Coord, b: Coord, heading: Heading) -> Option<Command> {
    Cardinal::between(a, b).map(|abs| Command::full(heading.relative(abs)))
}

/// The full command list for a route: dock to the first cell's center,
/// one whole-cell command per step, then dock to `end_position`.
///
/// Returns an empty list only when `route` is empty.
pub fn build_commands(
    route: &Route,
    start_position: SubCellPosition,
    end_position: SubCellPosition,
    heading: Heading,
) -> Vec<Command> {
    if route.is_empty() {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(route.length() + 4);
    out.extend(to_center(start_position, heading));
    out.extend(
        route
            .cells()
            .windows(2)
            .filter_map(|w| leg_to_command(w[0], w[1], heading)),
    );
    out.extend(from_center(end_position, heading));
    out
}
