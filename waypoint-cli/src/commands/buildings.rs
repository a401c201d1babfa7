//! Buildings command - List every named building on the map

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use waypoint_core::{CampusMap, CampusPoint};

use super::find_building;

use crate::config::DataFiles;
use crate::output::{
    Alignment, Column, CsvOutput, Output, OutputConfig, OutputFormat, Outputter, TableOutput,
};

/// One building row
#[derive(Debug, Serialize)]
pub struct BuildingRow {
    pub abbr: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
}

/// Buildings sorted by abbreviation
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct BuildingList {
    pub buildings: Vec<BuildingRow>,
}

impl BuildingList {
    /// Every building from the buildings file.
    pub fn from_map(map: &CampusMap) -> Self {
        Self::from_points(map.buildings())
    }

    /// Only the buildings a route can start or end at.
    pub fn routable(map: &CampusMap) -> Self {
        Self::from_points(
            map.buildings()
                .filter(|b| b.abbr().is_some_and(|abbr| find_building(map, abbr).is_some())),
        )
    }

    fn from_points<'a, I: Iterator<Item = &'a CampusPoint>>(points: I) -> Self {
        let buildings = points
            .filter_map(|b| {
                Some(BuildingRow {
                    abbr: b.abbr()?.to_string(),
                    name: b.name()?.to_string(),
                    x: b.x(),
                    y: b.y(),
                })
            })
            .collect();
        Self { buildings }
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::new("Abbr", "abbr"),
            Column::new("Name", "name").with_max_width(48),
            Column::new("X", "x").with_alignment(Alignment::Right),
            Column::new("Y", "y").with_alignment(Alignment::Right),
        ]
    }

    /// Plain `abbr: name` listing, one building per line.
    pub fn to_listing(&self) -> String {
        let mut output = String::from("Buildings:\n");
        for b in &self.buildings {
            output.push_str(&format!("\t{}: {}\n", b.abbr, b.name));
        }
        output
    }
}

impl Outputter for BuildingList {
    fn to_table(&self, config: &OutputConfig) -> String {
        let mut output = format!(
            "{} ({})\n",
            "Buildings".bold(),
            self.buildings.len().to_string().cyan()
        );
        output.push_str(&TableOutput::format_with_columns(
            &self.buildings,
            &Self::columns(),
            config,
        ));
        output
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        CsvOutput::format_with_columns(&self.buildings, &Self::columns())
    }
}

/// Run the buildings command
pub async fn run(files: &DataFiles, format: OutputFormat) -> Result<()> {
    let map = super::load_map(files).await?;
    Output::new(BuildingList::from_map(&map), format).render()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BuildingList {
        let map = CampusMap::from_sources(
            "",
            "TOR\tToronto Blue Jays\t5\t5\nBOS\tBoston Red Sox\t3\t7\n",
        )
        .unwrap();
        BuildingList::from_map(&map)
    }

    #[test]
    fn test_sorted_by_abbr() {
        let list = sample();
        let abbrs: Vec<_> = list.buildings.iter().map(|b| b.abbr.as_str()).collect();
        assert_eq!(abbrs, vec!["BOS", "TOR"]);
    }

    #[test]
    fn test_routable_skips_buildings_off_the_paths() {
        let map = CampusMap::from_sources(
            "5,5\n\t3,7: 2.0\n",
            "TOR\tToronto Blue Jays\t5\t5\nBOS\tBoston Red Sox\t3\t7\nOFF\tOff Map\t50\t50\n",
        )
        .unwrap();

        assert_eq!(BuildingList::from_map(&map).buildings.len(), 3);
        let abbrs: Vec<_> = BuildingList::routable(&map)
            .buildings
            .into_iter()
            .map(|b| b.abbr)
            .collect();
        assert_eq!(abbrs, vec!["BOS", "TOR"]);
    }

    #[test]
    fn test_listing() {
        assert_eq!(
            sample().to_listing(),
            "Buildings:\n\tBOS: Boston Red Sox\n\tTOR: Toronto Blue Jays\n"
        );
    }

    #[test]
    fn test_csv() {
        let config = OutputConfig::new(OutputFormat::Csv);
        let csv = sample().to_csv(&config);
        assert_eq!(
            csv,
            "Abbr,Name,X,Y\nBOS,Boston Red Sox,3.0,7.0\nTOR,Toronto Blue Jays,5.0,5.0"
        );
    }

    #[test]
    fn test_json_is_array() {
        let config = OutputConfig::new(OutputFormat::Json);
        let json: serde_json::Value = serde_json::from_str(&sample().to_json(&config)).unwrap();
        assert_eq!(json[0]["abbr"], "BOS");
        assert_eq!(json[1]["name"], "Toronto Blue Jays");
    }
}
