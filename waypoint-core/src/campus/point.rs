//! Points on the campus map.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

/// Name data carried by points that are buildings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Building {
    abbr: String,
    name: String,
}

/// A location on campus, optionally a named building.
///
/// Identity is the coordinate pair only: a building and a plain point at the
/// same coordinates are equal, hash the same and sort together. This lets
/// the paths file refer to buildings by coordinates alone.
#[derive(Debug, Clone, Serialize)]
pub struct CampusPoint {
    x: f64,
    y: f64,
    #[serde(flatten)]
    building: Option<Building>,
}

impl CampusPoint {
    /// A plain point.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            // +0.0 folds -0.0 into 0.0 so equal points hash equally
            x: x + 0.0,
            y: y + 0.0,
            building: None,
        }
    }

    /// A building. Falls back to a plain point when `abbr` or `name` is empty.
    pub fn building(abbr: impl Into<String>, name: impl Into<String>, x: f64, y: f64) -> Self {
        let (abbr, name) = (abbr.into(), name.into());
        let mut point = Self::new(x, y);
        if !abbr.is_empty() && !name.is_empty() {
            point.building = Some(Building { abbr, name });
        }
        point
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Abbreviated building name, `None` for plain points.
    pub fn abbr(&self) -> Option<&str> {
        self.building.as_ref().map(|b| b.abbr.as_str())
    }

    /// Full building name, `None` for plain points.
    pub fn name(&self) -> Option<&str> {
        self.building.as_ref().map(|b| b.name.as_str())
    }

    pub fn is_building(&self) -> bool {
        self.building.is_some()
    }
}

impl PartialEq for CampusPoint {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CampusPoint {}

impl PartialOrd for CampusPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CampusPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }
}

impl Hash for CampusPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl fmt::Display for CampusPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x.round() as i64, self.y.round() as i64)
    }
}
