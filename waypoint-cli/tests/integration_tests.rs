//! Integration tests for the Waypoint CLI
//!
//! Tests end-to-end command behavior using the CLI binary.
//! Uses tempfile for isolated test directories.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

const BUILDINGS: &str = "\
# abbr\tname\tx\ty
SEA\tSeattle Mariners\t1\t4
BOS\tBoston Red Sox\t3\t7
NYY\tNew York Yankees\t2\t3
OAK\tOakland Athletics\t10\t5
LAA\tLos Angeles Angels\t9\t8
TEX\tTexas Rangers\t3\t12
TOR\tToronto Blue Jays\t5\t5
";

const PATHS: &str = "\
1,4
\t3,7: 5.0
\t5,5: 4.5
3,7
\t2,3: 2.0
\t3,12: 6.0
5,5
\t2,3: 3.0
\t10,5: 5.5
10,5
\t9,8: 3.2
9,8
\t3,12: 7.8
";

/// Get the path to the waypoint binary (built by cargo)
fn waypoint_binary() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_waypoint"));
    cmd.env_remove("WAYPOINT_PATHS")
        .env_remove("WAYPOINT_BUILDINGS")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Run waypoint with the given args in the specified directory
fn run_waypoint(dir: &Path, args: &[&str]) -> Output {
    waypoint_binary()
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to execute waypoint command")
}

/// Get stdout as string
fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Get stderr as string
fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Write the baseball map to the default data locations
fn setup_campus(dir: &Path) {
    let data = dir.join("data");
    fs::create_dir_all(&data).expect("Failed to create data dir");
    fs::write(data.join("campus_paths.dat"), PATHS).expect("Failed to write paths");
    fs::write(data.join("campus_buildings.dat"), BUILDINGS).expect("Failed to write buildings");
}

// ============================================================================
// Route
// ============================================================================

#[test]
fn test_route_between_buildings() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    setup_campus(temp_dir.path());

    let output = run_waypoint(temp_dir.path(), &["route", "SEA", "NYY"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("Path from Seattle Mariners to New York Yankees:"));
    assert!(out.contains("Walk 5 feet SE to (3, 7)"), "got: {}", out);
    assert!(out.contains("Walk 2 feet N to (2, 3)"), "got: {}", out);
    assert!(out.contains("Total distance: 7 feet"), "got: {}", out);
}

#[test]
fn test_route_json_format() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    setup_campus(temp_dir.path());

    let output = run_waypoint(temp_dir.path(), &["route", "SEA", "NYY", "--format", "json"]);
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("Output should be valid JSON");
    assert_eq!(json["found"], true);
    assert_eq!(json["total_feet"], 7.0);
    assert_eq!(json["legs"][0]["heading"], "SE");
    assert_eq!(json["legs"][1]["building"], "NYY");
}

#[test]
fn test_route_csv_format() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    setup_campus(temp_dir.path());

    let output = run_waypoint(temp_dir.path(), &["route", "SEA", "NYY", "--format", "csv"]);
    assert!(output.status.success());

    let out = stdout(&output);
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines[0], "Step,Heading,Feet,To,Building");
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_route_unknown_building_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    setup_campus(temp_dir.path());

    let output = run_waypoint(temp_dir.path(), &["route", "SEA", "XYZ"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Unknown building: XYZ"));
}

#[test]
fn test_route_unreachable_succeeds() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    setup_campus(temp_dir.path());

    let output = run_waypoint(temp_dir.path(), &["route", "TEX", "SEA"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("No route exists"));
}

#[test]
fn test_missing_data_files_fail() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let output = run_waypoint(temp_dir.path(), &["route", "SEA", "NYY"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to load campus data"));
}

#[test]
fn test_malformed_data_reports_line() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    setup_campus(temp_dir.path());
    fs::write(
        temp_dir.path().join("data/campus_paths.dat"),
        "1,4\n\t3,7 5.0\n",
    )
    .unwrap();

    let output = run_waypoint(temp_dir.path(), &["buildings"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("line 2"), "stderr: {}", stderr(&output));
}

// ============================================================================
// Buildings
// ============================================================================

#[test]
fn test_buildings_json_sorted() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    setup_campus(temp_dir.path());

    let output = run_waypoint(temp_dir.path(), &["buildings", "--format", "json"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let abbrs: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["abbr"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(abbrs, ["BOS", "LAA", "NYY", "OAK", "SEA", "TEX", "TOR"]);
}

#[test]
fn test_buildings_table() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    setup_campus(temp_dir.path());

    let output = run_waypoint(temp_dir.path(), &["buildings"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Toronto Blue Jays"));
    assert!(out.contains("Abbr"));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_data_files_from_flags() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("p.dat"), PATHS).unwrap();
    fs::write(temp_dir.path().join("b.dat"), BUILDINGS).unwrap();

    let output = run_waypoint(
        temp_dir.path(),
        &["--paths", "p.dat", "--buildings", "b.dat", "route", "SEA", "TOR"],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Walk 5 feet"));
}

#[test]
fn test_config_file_sets_format_and_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("p.dat"), PATHS).unwrap();
    fs::write(temp_dir.path().join("b.dat"), BUILDINGS).unwrap();
    fs::write(
        temp_dir.path().join(".waypointrc.toml"),
        "[data]\npaths = \"p.dat\"\nbuildings = \"b.dat\"\n\n[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let output = run_waypoint(temp_dir.path(), &["buildings"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(serde_json::from_str::<serde_json::Value>(&stdout(&output)).is_ok());

    // CLI flag wins over config
    let output = run_waypoint(temp_dir.path(), &["buildings", "--format", "csv"]);
    assert!(stdout(&output).starts_with("Abbr,Name,X,Y"));
}

// ============================================================================
// Shell
// ============================================================================

#[test]
fn test_shell_session() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    setup_campus(temp_dir.path());

    let mut child = waypoint_binary()
        .current_dir(temp_dir.path())
        .arg("shell")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn waypoint shell");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"# comment\nb\nr\nSEA\nNYY\nr\nSEA\nABC\nzzz\nq\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("# comment\n"));
    assert!(out.contains("\tBOS: Boston Red Sox"));
    assert!(out.contains("Total distance: 7 feet"));
    assert!(out.contains("Unknown building: ABC"));
    assert!(out.contains("Unknown option"));
}

// ============================================================================
// Misc
// ============================================================================

#[test]
fn test_completions_bash() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_waypoint(temp_dir.path(), &["completions", "bash"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("waypoint"));
}

#[test]
fn test_no_command_prints_help() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_waypoint(temp_dir.path(), &[]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage"));
}
