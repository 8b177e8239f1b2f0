//! Plausibility check of predictions against the observed record

use crate::data::ObservedYear;
use serde::{Deserialize, Serialize};
use temp_math::{extent, Extent};

/// Result of comparing a prediction with the historical annual means
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeCheck {
    /// Whether the prediction lies within `[allowed_min, allowed_max]`
    pub in_range: bool,
    /// Lowest observed annual mean minus the margin
    pub allowed_min: f64,
    /// Highest observed annual mean plus the margin
    pub allowed_max: f64,
}

impl RangeCheck {
    /// Advisory message for an out-of-range prediction
    pub fn warning(&self, prediction: f64) -> Option<String> {
        if self.in_range {
            return None;
        }

        Some(format!(
            "Warning: the predicted temperature ({:.2}°C) is outside the historical range \
             ({:.2}°C to {:.2}°C). This prediction may be unreliable.",
            prediction, self.allowed_min, self.allowed_max
        ))
    }
}

/// Check `prediction` against the observed annual-mean extremes widened by `margin`
///
/// Bounds are inclusive. The annual means are used rather than the smoothed
/// series so raw historical extremes define the band. With no observations
/// the band collapses to `[-margin, margin]` around zero.
pub fn validate_against_history(prediction: f64, series: &[ObservedYear], margin: f64) -> RangeCheck {
    let band = extent(series.iter().map(|r| r.annual_mean))
        .unwrap_or(Extent { min: 0.0, max: 0.0 })
        .widen(margin);

    RangeCheck {
        in_range: band.contains(prediction),
        allowed_min: band.min,
        allowed_max: band.max,
    }
}
