//! Shell command - Interactive menu for routes and building lists
//!
//! Reads one option per line:
//! - `r` asks for two building abbreviations and prints the route
//! - `b` lists the buildings a route can start or end at
//! - `m` shows the menu again
//! - `q` quits (end of input also quits)
//!
//! Empty lines and lines starting with `#` are echoed back, which lets
//! scripted sessions carry comments.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use waypoint_core::CampusMap;

use super::buildings::BuildingList;
use super::find_building;
use super::route::RouteReport;
use crate::config::DataFiles;
use crate::output::{OutputConfig, OutputFormat, Outputter};

const MENU: &str = "Menu:\n\tr to find a route\n\tb to see a list of all buildings\n\tq to quit\n";
const PROMPT: &str = "Enter an option ('m' to see the menu): ";

fn prompt<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    write!(out, "{}", text)?;
    out.flush()
}

/// Print the route between two abbreviations, or which of them is unknown.
fn print_route<W: Write>(
    map: &CampusMap,
    start: &str,
    end: &str,
    speed_fps: f64,
    out: &mut W,
) -> Result<()> {
    let unknown: Vec<&str> = [start, end]
        .into_iter()
        .filter(|abbr| find_building(map, abbr).is_none())
        .collect();

    if unknown.is_empty() {
        let report = RouteReport::plan(map, start, end, speed_fps)?;
        write!(out, "{}", report.to_table(&OutputConfig::new(OutputFormat::Table)))?;
    } else {
        for abbr in unknown {
            writeln!(out, "Unknown building: {}", abbr)?;
        }
    }
    writeln!(out)?;
    Ok(())
}

/// Drive one interactive session over `input`, writing to `out`.
pub fn session<R: BufRead, W: Write>(
    map: &CampusMap,
    speed_fps: f64,
    input: R,
    out: &mut W,
) -> Result<()> {
    let mut lines = input.lines();

    writeln!(out, "{}", MENU)?;
    prompt(out, PROMPT)?;

    while let Some(line) = lines.next() {
        let option = line?;
        match option.as_str() {
            "q" => break,
            "r" => {
                prompt(out, "Abbreviated name of starting building: ")?;
                let Some(start) = lines.next().transpose()? else {
                    break;
                };
                prompt(out, "Abbreviated name of ending building: ")?;
                let Some(end) = lines.next().transpose()? else {
                    break;
                };
                print_route(map, &start, &end, speed_fps, out)?;
            }
            "b" => writeln!(out, "{}", BuildingList::routable(map).to_listing())?,
            "m" => writeln!(out, "{}", MENU)?,
            comment if comment.is_empty() || comment.starts_with('#') => {
                writeln!(out, "{}", comment)?;
                continue;
            }
            _ => writeln!(out, "Unknown option\n")?,
        }
        prompt(out, PROMPT)?;
    }

    tracing::debug!("Shell session ended");
    Ok(())
}

/// Run the interactive shell on stdin/stdout
pub async fn run(files: &DataFiles, speed_fps: f64) -> Result<()> {
    let map = super::load_map(files).await?;
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    session(&map, speed_fps, stdin.lock(), &mut stdout)
}
