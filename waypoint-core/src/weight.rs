//! Edge weights.
//!
//! The shortest-path engine needs weights that can be summed and compared
//! with a *total* order, so that equal-cost candidates can be ranked the same
//! way on every run. Unsigned integers satisfy that directly. Floating point
//! distances go through [`Distance`], which validates the value once at
//! construction and then orders with [`f64::total_cmp`].

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};

/// A non-negative edge label that can be accumulated along a path.
pub trait Weight: Copy + Ord + Hash + fmt::Debug {
    /// Cost of the empty path.
    const ZERO: Self;

    /// Cost of extending a path of cost `self` by an edge of cost `step`.
    fn accumulate(self, step: Self) -> Self;
}

macro_rules! impl_unsigned_weight {
    ($($ty:ty),*) => {
        $(
            impl Weight for $ty {
                const ZERO: Self = 0;

                fn accumulate(self, step: Self) -> Self {
                    self.saturating_add(step)
                }
            }
        )*
    };
}

impl_unsigned_weight!(u8, u16, u32, u64, u128, usize);

/// A physical distance: finite, non-negative `f64`.
///
/// Equality, hashing and ordering are consistent with each other. `-0.0` is
/// stored as `0.0` so both compare and hash the same.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub struct Distance(f64);

impl Distance {
    /// Distance of zero.
    pub const ZERO: Distance = Distance(0.0);

    /// Validate and wrap a raw distance.
    ///
    /// Fails with [`GraphError::InvalidWeight`] for NaN, infinite or negative
    /// values.
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(GraphError::InvalidWeight { value });
        }
        // Adding positive zero turns -0.0 into 0.0.
        Ok(Distance(value + 0.0))
    }

    /// The wrapped value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Weight for Distance {
    const ZERO: Self = Distance::ZERO;

    /// Saturates at `f64::MAX` instead of overflowing to infinity.
    fn accumulate(self, step: Self) -> Self {
        Distance((self.0 + step.0).min(f64::MAX))
    }
}

impl TryFrom<f64> for Distance {
    type Error = GraphError;

    fn try_from(value: f64) -> Result<Self> {
        Distance::new(value)
    }
}

impl From<Distance> for f64 {
    fn from(distance: Distance) -> Self {
        distance.0
    }
}

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Distance {}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for Distance {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Debug for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_distance_rejects_invalid_values() {
        assert!(Distance::new(f64::NAN).is_err());
        assert!(Distance::new(f64::INFINITY).is_err());
        assert!(Distance::new(-0.5).is_err());
        assert_eq!(
            Distance::new(-1.0),
            Err(GraphError::InvalidWeight { value: -1.0 })
        );
    }

    #[test]
    fn test_distance_accepts_zero_and_positive() {
        assert_eq!(Distance::new(0.0).unwrap().value(), 0.0);
        assert_eq!(Distance::new(12.3).unwrap().value(), 12.3);
    }

    #[test]
    fn test_negative_zero_normalised() {
        let neg = Distance::new(-0.0).unwrap();
        assert_eq!(neg, Distance::ZERO);

        let mut set = HashSet::new();
        set.insert(neg);
        assert!(set.contains(&Distance::ZERO));
    }

    #[test]
    fn test_distance_ordering() {
        let a = Distance::new(5.0).unwrap();
        let b = Distance::new(7.2).unwrap();
        assert!(a < b);
        assert_eq!(a.accumulate(a), Distance::new(10.0).unwrap());
        assert!(a.accumulate(b) < Distance::new(12.3).unwrap());
    }

    #[test]
    fn test_unsigned_weights_saturate() {
        assert_eq!(u8::ZERO, 0);
        assert_eq!(200u8.accumulate(100), u8::MAX);
        assert_eq!(3u32.accumulate(4), 7);
    }

    #[test]
    fn test_distance_saturates() {
        let huge = Distance::new(f64::MAX).unwrap();
        let sum = huge.accumulate(huge);
        assert_eq!(sum.value(), f64::MAX);
        assert!(sum.value().is_finite());
        assert_eq!(serde_json::to_value(sum).unwrap(), serde_json::json!(f64::MAX));
    }

    #[test]
    fn test_distance_serde() {
        let d = Distance::new(4.5).unwrap();
        assert_eq!(serde_json::to_string(&d).unwrap(), "4.5");

        let back: Distance = serde_json::from_str("4.5").unwrap();
        assert_eq!(back, d);

        assert!(serde_json::from_str::<Distance>("-1.0").is_err());
    }
}
