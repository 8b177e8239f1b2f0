//! Range calculations over observed values

use serde::{Deserialize, Serialize};

/// Closed interval spanning a set of observations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
}

impl Extent {
    /// Widen the interval by `margin` on both sides
    pub fn widen(&self, margin: f64) -> Self {
        Self {
            min: self.min - margin,
            max: self.max + margin,
        }
    }

    /// Whether `value` lies inside the interval, bounds included
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Compute the extent of the given values, ignoring NaN
pub fn extent<I>(values: I) -> Option<Extent>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some(Extent { min: v, max: v }),
            Some(e) => Some(Extent {
                min: e.min.min(v),
                max: e.max.max(v),
            }),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent() {
        let e = extent(vec![26.1, 25.4, 27.3, 26.0]).unwrap();
        assert_eq!(e.min, 25.4);
        assert_eq!(e.max, 27.3);
        assert!(extent(Vec::<f64>::new()).is_none());
    }

    #[test]
    fn test_widen_and_contains() {
        let e = Extent { min: 25.0, max: 27.0 }.widen(1.5);
        assert!(e.contains(23.5));
        assert!(e.contains(28.5));
        assert!(!e.contains(28.5 + 1e-9));
        assert!(!e.contains(23.5 - 1e-9));
    }
}
