//! Stops
//!
//! A stop configuration decides which lightness values of a ramp become swatches.
//! Either a cubic Bézier easing curve is sampled at evenly spaced parameters, or
//! the values are listed explicitly.

mod curve;
mod names;

pub use curve::{Curve, Point};
pub use names::name_stops;

use serde::{Deserialize, Serialize};

/// Most Bézier stops ever sampled. Larger `numStops` values are capped.
pub const MAX_STOPS: usize = 1000;

/// How the stops of a project are produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StopsConfig {
    /// Sample `num_stops` points of an easing curve.
    Bezier {
        #[serde(rename = "numStops")]
        num_stops: usize,
        curve: Curve,
        #[serde(rename = "skipExtremes", default, skip_serializing_if = "Option::is_none")]
        skip_extremes: Option<bool>,
    },
    /// Use these lightness values as-is.
    Manual { values: Vec<f64> },
}

impl StopsConfig {
    /// Bézier stops without skipped extremes.
    pub fn bezier(num_stops: usize, curve: Curve) -> Self {
        Self::Bezier {
            num_stops,
            curve,
            skip_extremes: None,
        }
    }

    /// Explicit stops.
    pub fn manual(values: impl Into<Vec<f64>>) -> Self {
        Self::Manual {
            values: values.into(),
        }
    }

    /// The kind of configuration.
    pub fn stop_type(&self) -> StopType {
        match self {
            Self::Bezier { .. } => StopType::Bezier,
            Self::Manual { .. } => StopType::Manual,
        }
    }
}

/// Discriminant of [`StopsConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopType {
    Bezier,
    Manual,
}

impl StopType {
    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            StopType::Bezier => "Bézier",
            StopType::Manual => "Manual",
        }
    }
}

/// Lightness values in `[0, 1]` for a stop configuration.
///
/// Bézier samples are ordered dark → light, or light → dark when `inverted`.
/// Manual values are returned exactly as authored; their order is the user's
/// and the inversion flag only affects naming. At most [`MAX_STOPS`] Bézier
/// samples are produced.
pub fn sample_stops(config: &StopsConfig, inverted: bool) -> Vec<f64> {
    match config {
        StopsConfig::Manual { values } => values.clone(),
        StopsConfig::Bezier {
            num_stops,
            curve,
            skip_extremes,
        } => {
            let n = (*num_stops).min(MAX_STOPS);
            let skip = skip_extremes.unwrap_or(false);
            let mut values: Vec<f64> = (0..n)
                .map(|i| {
                    let t = if skip {
                        (i + 1) as f64 / (n + 1) as f64
                    } else if n == 1 {
                        0.5
                    } else {
                        i as f64 / (n - 1) as f64
                    };
                    curve.evaluate(t).y.clamp(0.0, 1.0)
                })
                .collect();
            if inverted {
                values.reverse();
            }
            values
        }
    }
}

/// Label for the stop ordering.
pub const fn direction_label(inverted: bool) -> &'static str {
    if inverted {
        "light → dark"
    } else {
        "dark → light"
    }
}
