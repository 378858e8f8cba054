//! End-to-end solve scenarios.

use gridtour_core::{Command, Coord, Direction, Heading, Magnitude, SolveError, SubCellPosition};
use gridtour_plan::{solve, GridSpec, Planner, PlannerConfig};
use gridtour_test_utils::{corridor_spec, scattered_checkpoints, scenario_4x4, SpecBuilder};

fn c(x: i32, y: i32) -> Coord {
    Coord::new(x, y)
}

// ── Reference scenario ──────────────────────────────────────────

#[test]
fn open_4x4_corner_to_corner() {
    let sol = solve(&scenario_4x4()).unwrap();
    assert_eq!(sol.route.length(), 6);
    assert_eq!(sol.total_distance, 6.0);
    assert_eq!(sol.commands.len(), 6);
    assert!(sol
        .commands
        .iter()
        .all(|cmd| cmd.magnitude == Magnitude::Full));
    assert!(sol.order.is_empty());
}

#[test]
fn open_4x4_commands_follow_search_tie_break() {
    // Vertical probes come first, so the route runs down column 0 before
    // turning east. Facing up, south is "backward" and east is "right".
    let sol = solve(&scenario_4x4()).unwrap();
    let expected: Vec<Command> = [
        Direction::Backward,
        Direction::Backward,
        Direction::Backward,
        Direction::Right,
        Direction::Right,
        Direction::Right,
    ]
    .into_iter()
    .map(Command::full)
    .collect();
    assert_eq!(sol.commands, expected);
    let listing: Vec<String> = sol.commands.iter().map(ToString::to_string).collect();
    assert_eq!(listing[0], "backward(1)");
}

#[test]
fn enclosed_end_checkpoint_is_unreachable() {
    let spec = SpecBuilder::new(4)
        .start(c(0, 0), SubCellPosition::Center, Heading::Up)
        .checkpoints([c(1, 2), c(2, 1)])
        .end_checkpoint(c(3, 3))
        .exit(c(3, 3), SubCellPosition::Center)
        .enclosed(c(3, 3))
        .build();
    assert_eq!(
        solve(&spec),
        Err(SolveError::Unreachable {
            permutations_rejected: 2
        })
    );
}

#[test]
fn enclosed_end_checkpoint_without_checkpoints() {
    let spec = SpecBuilder::new(4)
        .start(c(0, 0), SubCellPosition::Center, Heading::Up)
        .end_checkpoint(c(3, 3))
        .exit(c(0, 3), SubCellPosition::Center)
        .enclosed(c(3, 3))
        .build();
    assert_eq!(
        solve(&spec),
        Err(SolveError::Unreachable {
            permutations_rejected: 1
        })
    );
}

// ── Larger layouts ──────────────────────────────────────────────

#[test]
fn corridor_visits_every_cell() {
    for n in [3, 4, 6] {
        let spec = corridor_spec(n);
        let sol = solve(&spec).unwrap();
        let cells = (n * n) as usize;
        assert_eq!(sol.route.len(), cells, "n = {n}");
        assert!(sol.route.is_walkable(spec.walls()));
    }
}

#[test]
fn checkpoints_all_visited_in_reported_order() {
    let cps = scattered_checkpoints(6, 4);
    assert_eq!(cps.len(), 4);
    let spec = SpecBuilder::new(6)
        .start(c(0, 0), SubCellPosition::CornerTopLeft, Heading::Right)
        .checkpoints(cps.iter().copied())
        .end_checkpoint(c(5, 5))
        .exit(c(5, 0), SubCellPosition::MidLeft)
        .wall(c(2, 2), c(3, 2))
        .wall(c(2, 3), c(3, 3))
        .build();
    let sol = solve(&spec).unwrap();
    assert_eq!(sol.metrics.permutations_evaluated, 24);

    // Each checkpoint appears on the route, first visits in `order`.
    let cells = sol.route.cells();
    let mut from = 0;
    for cp in &sol.order {
        let at = cells[from..]
            .iter()
            .position(|c| c == cp)
            .map(|i| i + from)
            .expect("checkpoint on route");
        from = at;
    }
    let mut sorted_order = sol.order.clone();
    sorted_order.sort();
    let mut sorted_cps = cps.clone();
    sorted_cps.sort();
    assert_eq!(sorted_order, sorted_cps);
    assert_eq!(sol.route.last(), Some(c(5, 0)));
}

#[test]
fn total_distance_counts_half_steps() {
    let spec = SpecBuilder::new(3)
        .start(c(1, 1), SubCellPosition::CornerBottomRight, Heading::Left)
        .end_checkpoint(c(1, 1))
        .exit(c(1, 1), SubCellPosition::CornerTopLeft)
        .build();
    let sol = solve(&spec).unwrap();
    assert_eq!(sol.route.length(), 0);
    assert_eq!(sol.commands.len(), 4);
    assert_eq!(sol.total_distance, 2.0);
}

// ── Determinism and configuration ───────────────────────────────

#[test]
fn repeated_solves_agree() {
    let spec = SpecBuilder::new(5)
        .start(c(0, 4), SubCellPosition::MidTop, Heading::Down)
        .checkpoints(scattered_checkpoints(5, 3))
        .end_checkpoint(c(4, 4))
        .exit(c(2, 2), SubCellPosition::Center)
        .wall(c(1, 1), c(1, 2))
        .build();
    let a = solve(&spec).unwrap();
    let b = solve(&spec).unwrap();
    let uncached = Planner::with_config(PlannerConfig { cache_legs: false })
        .solve(&spec)
        .unwrap();
    assert_eq!(a.commands, b.commands);
    assert_eq!(a.route, b.route);
    assert_eq!(a.commands, uncached.commands);
    assert_eq!(a.order, uncached.order);
}

#[test]
fn snapshot_loaded_from_json_solves() {
    let spec = GridSpec::from_json(
        r#"{
            "size": 4,
            "vertical_walls": [[0, 0], [0, 1], [0, 2]],
            "end_checkpoint": [1, 0],
            "robot_start": { "cell": [0, 0], "heading": "up" },
            "robot_end": { "cell": [1, 0] }
        }"#,
    )
    .unwrap();
    let sol = solve(&spec).unwrap();
    // Down column 0, across row 3, back up column 1.
    assert_eq!(sol.route.length(), 7);
    assert_eq!(sol.total_distance, 7.0);
}
