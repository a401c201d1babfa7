use std::f64::consts::PI;
use std::fmt;

use serde::Serialize;

use super::CampusPoint;

/// Eight-point compass heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Compass {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Compass {
    /// Heading of travel from `from` to `to`.
    ///
    /// Map coordinates grow downwards, so north is decreasing `y`. Cardinal
    /// directions own the closed quarter-sector around their axis.
    pub fn between(from: &CampusPoint, to: &CampusPoint) -> Self {
        let theta = (from.y() - to.y()).atan2(to.x() - from.x());
        let sector = PI / 8.0;

        if (-sector..=sector).contains(&theta) {
            Compass::E
        } else if theta > sector && theta < 3.0 * sector {
            Compass::NE
        } else if (3.0 * sector..=5.0 * sector).contains(&theta) {
            Compass::N
        } else if theta > 5.0 * sector && theta < 7.0 * sector {
            Compass::NW
        } else if theta >= 7.0 * sector || theta <= -7.0 * sector {
            Compass::W
        } else if theta > -7.0 * sector && theta < -5.0 * sector {
            Compass::SW
        } else if (-5.0 * sector..=-3.0 * sector).contains(&theta) {
            Compass::S
        } else {
            Compass::SE
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Compass::N => "N",
            Compass::NE => "NE",
            Compass::E => "E",
            Compass::SE => "SE",
            Compass::S => "S",
            Compass::SW => "SW",
            Compass::W => "W",
            Compass::NW => "NW",
        }
    }
}

impl fmt::Display for Compass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
