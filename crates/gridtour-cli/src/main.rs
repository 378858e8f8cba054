//! gridtour - plan a checkpoint tour from a JSON grid snapshot.
//!
//! Loads one snapshot, runs one solve, prints the command listing and the
//! total distance, then exits. Any failure is printed to stderr with exit
//! status 1.
//!
//! Usage:
//!   gridtour maze.json
//!   gridtour maze.json --heading left --json
//!   gridtour blank.json --init 6

use clap::Parser;
use gridtour::prelude::*;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info, warn};

/// Plan a motion-command tour for a grid robot.
#[derive(Parser, Debug)]
#[command(name = "gridtour", author, version, about, long_about = None)]
struct Args {
    /// Snapshot file (JSON)
    snapshot: PathBuf,

    /// Override the tour heading: up, right, down or left. Unrecognized
    /// values fall back to up.
    #[arg(long)]
    heading: Option<String>,

    /// Print the result as a JSON object
    #[arg(long)]
    json: bool,

    /// Search every leg afresh instead of reusing repeated ones
    #[arg(long)]
    no_cache: bool,

    /// Write an empty snapshot of this side length to SNAPSHOT instead of
    /// solving. Unparsable or out-of-range sizes fall back to 4.
    #[arg(long, value_name = "SIZE")]
    init: Option<String>,
}

#[derive(Debug)]
enum CliError {
    Read { path: PathBuf, source: std::io::Error },
    Write { path: PathBuf, source: std::io::Error },
    Config(ConfigError),
    Solve(SolveError),
    Output(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Write { path, source } => write!(f, "cannot write {}: {source}", path.display()),
            Self::Config(e) => write!(f, "invalid snapshot: {e}"),
            Self::Solve(e) => write!(f, "{e}"),
            Self::Output(e) => write!(f, "cannot encode result: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => Some(source),
            Self::Config(e) => Some(e),
            Self::Solve(e) => Some(e),
            Self::Output(e) => Some(e),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<SolveError> for CliError {
    fn from(e: SolveError) -> Self {
        Self::Solve(e)
    }
}

/// Parse a heading token, substituting the default on failure.
fn heading_or_default(token: &str) -> Heading {
    token.parse().unwrap_or_else(|e: ConfigError| {
        let fallback = Heading::default();
        warn!("{e}; using {fallback}");
        fallback
    })
}

/// Parse a grid side length, substituting the default on failure.
fn size_or_default(token: &str) -> GridSize {
    GridSize::parse(token).unwrap_or_else(|e| {
        let fallback = GridSize::DEFAULT;
        warn!("{e}; using {fallback}");
        fallback
    })
}

/// Write a blank snapshot to `path`, refusing to replace an existing file.
fn init_snapshot(path: &Path, size: GridSize) -> Result<String, CliError> {
    let text = GridSpec::new(size).to_json()?;
    let write_err = |source| CliError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(write_err)?;
    file.write_all(text.as_bytes()).map_err(write_err)?;
    info!(path = %path.display(), %size, "wrote empty snapshot");
    Ok(format!("wrote empty {size}x{size} snapshot to {}", path.display()))
}

fn load(path: &Path) -> Result<GridSpec, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(GridSpec::from_json(&text)?)
}

fn render_text(tour: &TourSolution) -> String {
    let mut out = String::new();
    for cmd in &tour.commands {
        out.push_str(&cmd.to_string());
        out.push('\n');
    }
    out.push_str(&format!("total distance: {}", tour.total_distance));
    out
}

fn render_json(tour: &TourSolution) -> Result<String, CliError> {
    let value = serde_json::json!({
        "commands": tour.commands,
        "total_distance": tour.total_distance,
        "route": tour.route.cells(),
        "order": tour.order,
        "metrics": tour.metrics,
    });
    serde_json::to_string_pretty(&value).map_err(CliError::Output)
}

fn run(args: &Args) -> Result<String, CliError> {
    if let Some(token) = &args.init {
        return init_snapshot(&args.snapshot, size_or_default(token));
    }

    info!(path = %args.snapshot.display(), "loading snapshot");
    let mut spec = load(&args.snapshot)?;

    if let Some(token) = &args.heading {
        let heading = heading_or_default(token);
        if !spec.set_heading(heading) {
            warn!("heading override ignored: robot start not placed");
        }
    }

    let planner = Planner::with_config(PlannerConfig {
        cache_legs: !args.no_cache,
    });
    let tour = planner.solve(&spec)?;
    debug!(metrics = ?tour.metrics, "solve finished");
    info!(
        commands = tour.commands.len(),
        total_distance = tour.total_distance,
        "tour planned"
    );

    if args.json {
        render_json(&tour)
    } else {
        Ok(render_text(&tour))
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("gridtour=info")),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> GridSpec {
        let mut spec = GridSpec::new(GridSize::new(4).unwrap());
        spec.place_robot_start(Coord::new(0, 0), SubCellPosition::Center, Heading::Up)
            .unwrap();
        spec.place_robot_end(Coord::new(3, 3), SubCellPosition::Center)
            .unwrap();
        spec.set_end_checkpoint(Coord::new(3, 3)).unwrap();
        spec
    }

    fn write_snapshot(name: &str, text: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("gridtour-cli-{}-{name}.json", std::process::id()));
        std::fs::write(&path, text).unwrap();
        path
    }

    fn args(path: PathBuf) -> Args {
        Args {
            snapshot: path,
            heading: None,
            json: false,
            no_cache: false,
            init: None,
        }
    }

    #[test]
    fn cli_parses_flags() {
        let a = Args::try_parse_from(["gridtour", "maze.json", "--heading", "left", "--json"]).unwrap();
        assert_eq!(a.snapshot, PathBuf::from("maze.json"));
        assert_eq!(a.heading.as_deref(), Some("left"));
        assert!(a.json);
        assert!(!a.no_cache);
        assert!(a.init.is_none());
        let a = Args::try_parse_from(["gridtour", "blank.json", "--init", "7"]).unwrap();
        assert_eq!(a.init.as_deref(), Some("7"));
        assert!(Args::try_parse_from(["gridtour"]).is_err());
    }

    #[test]
    fn heading_falls_back_to_up() {
        assert_eq!(heading_or_default("Left"), Heading::Left);
        assert_eq!(heading_or_default("sideways"), Heading::Up);
        assert_eq!(heading_or_default(""), Heading::Up);
    }

    #[test]
    fn size_falls_back_to_four() {
        assert_eq!(size_or_default("6").get(), 6);
        assert_eq!(size_or_default("1"), GridSize::DEFAULT);
        assert_eq!(size_or_default("huge"), GridSize::DEFAULT);
        assert_eq!(size_or_default("1000000000").get(), 4);
    }

    #[test]
    fn init_writes_blank_snapshot() {
        let path = std::env::temp_dir().join(format!("gridtour-cli-{}-init.json", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let mut a = args(path.clone());
        a.init = Some("nope".into());
        let out = run(&a).unwrap();
        assert!(out.starts_with("wrote empty 4x4 snapshot"));
        let spec = load(&path).unwrap();
        assert_eq!(spec.size().get(), 4);
        assert!(spec.robot_start().is_none());
        assert_eq!(spec.walls().wall_count(), 0);

        // An existing file is never replaced.
        a.init = Some("6".into());
        assert!(matches!(run(&a), Err(CliError::Write { .. })));
        assert_eq!(load(&path).unwrap().size().get(), 4);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn errors_expose_their_source() {
        use std::error::Error;

        let err = CliError::from(SolveError::OffGridStart);
        let inner = err.source().unwrap();
        assert_eq!(inner.to_string(), SolveError::OffGridStart.to_string());

        let err = CliError::from(ConfigError::GridTooSmall { size: 1 });
        assert!(err.source().unwrap().is::<ConfigError>());

        let missing = std::env::temp_dir().join("gridtour-cli-does-not-exist.json");
        let err = run(&args(missing)).unwrap_err();
        assert!(err.source().unwrap().is::<std::io::Error>());
    }

    #[test]
    fn huge_snapshot_is_rejected_not_allocated() {
        let path = write_snapshot("huge", r#"{ "size": 1000000000 }"#);
        let err = run(&args(path.clone())).unwrap_err();
        assert!(matches!(
            err,
            CliError::Config(ConfigError::GridTooLarge { .. })
        ));
        assert!(err.to_string().starts_with("invalid snapshot: "));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn text_listing_ends_with_total() {
        let tour = solve(&scenario()).unwrap();
        let text = render_text(&tour);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "backward(1)");
        assert_eq!(lines[6], "total distance: 6");
    }

    #[test]
    fn json_output_has_expected_fields() {
        let tour = solve(&scenario()).unwrap();
        let v: serde_json::Value = serde_json::from_str(&render_json(&tour).unwrap()).unwrap();
        assert_eq!(v["commands"].as_array().unwrap().len(), 6);
        assert_eq!(v["commands"][0]["direction"], "backward");
        assert_eq!(v["total_distance"], 6.0);
        assert_eq!(v["route"][0], serde_json::json!([0, 0]));
        assert!(v["metrics"]["leg_searches"].as_u64().unwrap() >= 1);
    }

    #[test]
    fn run_end_to_end() {
        let path = write_snapshot("ok", &scenario().to_json().unwrap());
        let out = run(&args(path.clone())).unwrap();
        assert!(out.ends_with("total distance: 6"));

        // Facing right, the same route starts with "right" (south).
        let mut a = args(path.clone());
        a.heading = Some("right".into());
        let out = run(&a).unwrap();
        assert!(out.starts_with("right(1)"));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn run_reports_failures() {
        let missing = std::env::temp_dir().join("gridtour-cli-does-not-exist.json");
        assert!(matches!(run(&args(missing)), Err(CliError::Read { .. })));

        let bad = write_snapshot("bad", r#"{ "size": 1 }"#);
        let err = run(&args(bad.clone())).unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::GridTooSmall { size: 1 })));
        let _ = std::fs::remove_file(bad);

        let unset = write_snapshot("unset", r#"{ "size": 3 }"#);
        let err = run(&args(unset.clone())).unwrap_err();
        assert_eq!(err.to_string(), "not all conditions met: robot start not set");
        let _ = std::fs::remove_file(unset);
    }
}
