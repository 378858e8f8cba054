//! Benchmark profiles for the gridtour planner.
//!
//! - [`reference_profile`]: 12x12 grid, scattered walls, 6 checkpoints (720 orderings)
//! - [`stress_profile`]: 40x40 grid, scattered walls, 8 checkpoints (40320 orderings)
//! - [`scatter_walls`]: deterministic wall placement via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridtour_core::{Coord, Heading, SubCellPosition};
use gridtour_plan::GridSpec;
use gridtour_test_utils::{scattered_checkpoints, SpecBuilder};

/// Reference profile: 12x12 grid with 6 checkpoints.
///
/// Start at (0,0) corner, end checkpoint (11,11), exit (0,11).
pub fn reference_profile(seed: u64) -> GridSpec {
    profile(12, 6, seed)
}

/// Stress profile: 40x40 grid with 8 checkpoints.
///
/// Same layout rules as [`reference_profile`]; the ordering count is 56x
/// larger.
pub fn stress_profile(seed: u64) -> GridSpec {
    profile(40, 8, seed)
}

fn profile(n: u32, k: usize, seed: u64) -> GridSpec {
    let last = n as i32 - 1;
    let mut spec = SpecBuilder::new(n)
        .start(
            Coord::new(0, 0),
            SubCellPosition::CornerTopLeft,
            Heading::Up,
        )
        .checkpoints(scattered_checkpoints(n, k))
        .end_checkpoint(Coord::new(last, last))
        .exit(Coord::new(0, last), SubCellPosition::MidRight)
        .build();
    scatter_walls(&mut spec, seed, 10);
    spec
}

/// Place roughly one wall per `one_in` wall slots, deterministically from
/// `seed`.
///
/// Walls touching a checkpoint, the end checkpoint, or either robot cell
/// are skipped.
pub fn scatter_walls(spec: &mut GridSpec, seed: u64, one_in: u64) {
    let n = spec.size().as_i32();
    let mut keep_open: Vec<Coord> = spec.checkpoints().iter().copied().collect();
    keep_open.extend(spec.end_checkpoint());
    keep_open.extend(spec.robot_start().map(|s| s.cell));
    keep_open.extend(spec.robot_end().map(|e| e.cell));

    let mut i = seed;
    for x in 0..n {
        for y in 0..n {
            let a = Coord::new(x, y);
            for b in [Coord::new(x + 1, y), Coord::new(x, y + 1)] {
                i = i.wrapping_add(1);
                let roll = i.wrapping_mul(6364136223846793007) >> 33;
                if roll % one_in != 0 || !spec.walls().contains(b) {
                    continue;
                }
                if keep_open.contains(&a) || keep_open.contains(&b) {
                    continue;
                }
                let _ = spec.set_wall_between(a, b, true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_are_deterministic() {
        assert_eq!(reference_profile(42), reference_profile(42));
        assert_eq!(reference_profile(42).checkpoints().len(), 6);
        assert_eq!(stress_profile(7).checkpoints().len(), 8);
    }

    #[test]
    fn scattered_walls_spare_waypoints() {
        let spec = reference_profile(3);
        assert!(spec.walls().wall_count() > 0);
        let start = spec.robot_start().unwrap().cell;
        let mut cells: Vec<Coord> = spec.checkpoints().iter().copied().collect();
        cells.push(start);
        cells.extend(spec.end_checkpoint());
        for c in cells {
            let in_grid = [(0, -1), (0, 1), (-1, 0), (1, 0)]
                .iter()
                .filter(|&&(dx, dy)| spec.walls().contains(Coord::new(c.x + dx, c.y + dy)))
                .count();
            assert_eq!(spec.walls().neighbours(c).len(), in_grid, "{c} walled");
        }
    }
}
