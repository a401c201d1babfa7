//! Route command - Shortest walking route between two buildings

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use waypoint_core::{CampusMap, Compass};

use super::{find_building, CommandError};
use crate::config::DataFiles;
use crate::output::{Alignment, Column, CsvOutput, Output, OutputConfig, OutputFormat, Outputter};

/// A named endpoint of a route
#[derive(Debug, Serialize)]
pub struct Place {
    pub abbr: String,
    pub name: String,
}

/// One leg of the walk
#[derive(Debug, Serialize)]
pub struct LegRow {
    pub step: usize,
    pub heading: Compass,
    pub feet: f64,
    /// Destination as `(x, y)`
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
}

/// Result of a route query
#[derive(Debug, Serialize)]
pub struct RouteReport {
    pub from: Place,
    pub to: Place,
    pub found: bool,
    pub legs: Vec<LegRow>,
    pub total_feet: f64,
    pub walk_minutes: u64,
}

impl RouteReport {
    /// Plan a route between two building abbreviations.
    ///
    /// Fails with [`CommandError::UnknownBuilding`] for the first abbreviation
    /// that does not name a building on the map.
    pub fn plan(map: &CampusMap, from: &str, to: &str, speed_fps: f64) -> Result<Self> {
        let start = find_building(map, from)
            .ok_or_else(|| CommandError::UnknownBuilding(from.to_string()))?;
        let end = find_building(map, to)
            .ok_or_else(|| CommandError::UnknownBuilding(to.to_string()))?;

        let place = |abbr: &str, name: Option<&str>| Place {
            abbr: abbr.to_string(),
            name: name.unwrap_or(abbr).to_string(),
        };

        let mut report = RouteReport {
            from: place(from, start.name()),
            to: place(to, end.name()),
            found: false,
            legs: Vec::new(),
            total_feet: 0.0,
            walk_minutes: 0,
        };

        let Some(route) = map.find_path(start, end)? else {
            tracing::info!(from, to, "No route between buildings");
            return Ok(report);
        };

        report.found = true;
        report.legs = CampusMap::directions(&route)
            .into_iter()
            .enumerate()
            .map(|(i, leg)| LegRow {
                step: i + 1,
                heading: leg.heading,
                feet: leg.distance.value(),
                to: leg.to.to_string(),
                building: leg.to.abbr().map(str::to_string),
            })
            .collect();
        report.total_feet = route.total().value();
        report.walk_minutes = walk_minutes(report.total_feet, speed_fps);
        Ok(report)
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::new("Step", "step"),
            Column::new("Heading", "heading"),
            Column::new("Feet", "feet").with_alignment(Alignment::Right),
            Column::new("To", "to"),
            Column::new("Building", "building"),
        ]
    }
}

/// Minutes needed to walk `feet` at `speed_fps`, rounded to the nearest minute.
pub fn walk_minutes(feet: f64, speed_fps: f64) -> u64 {
    (feet / speed_fps / 60.0).round() as u64
}

impl Outputter for RouteReport {
    fn to_table(&self, _config: &OutputConfig) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {} {} {}:\n",
            "Path from".bold(),
            self.from.name.cyan(),
            "to".bold(),
            self.to.name.cyan()
        ));

        if !self.found {
            output.push_str(&format!("\t{} No route exists\n", "INFO".yellow()));
            return output;
        }

        for leg in &self.legs {
            output.push_str(&format!(
                "\tWalk {} feet {} to {}\n",
                leg.feet.round(),
                leg.heading.to_string().green(),
                leg.to
            ));
        }
        output.push_str(&format!(
            "{} {} feet\n",
            "Total distance:".bold(),
            self.total_feet.round()
        ));
        output.push_str(&format!(
            "{}\n",
            format!("Estimated walk time: {} minutes", self.walk_minutes).dimmed()
        ));
        output
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        CsvOutput::format_with_columns(&self.legs, &Self::columns())
    }
}

/// Run the route command
pub async fn run(
    from: &str,
    to: &str,
    files: &DataFiles,
    speed_fps: f64,
    format: OutputFormat,
) -> Result<()> {
    let map = super::load_map(files).await?;
    let report = RouteReport::plan(&map, from, to, speed_fps)?;
    Output::new(report, format).render()
}
