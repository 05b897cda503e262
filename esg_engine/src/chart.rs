//! Chart series projection and display-range computation.
//!
//! Building a series is a pure projection: no filtering, no sorting, no
//! deduplication. Whatever shaped the input (a join, a grouping) owns its
//! order; this module only extracts labeled values from it.

use tracing::warn;

use crate::normalize::SCORE_FALLBACK;

/// Default padding applied around series extremes when computing axis bounds.
pub const DEFAULT_AXIS_MARGIN: f64 = 5.0;

/// A value heading into a series, either numeric or already rendered as text.
///
/// Rounded sector averages arrive as text; they are coerced to a number for
/// axis computation while the original text is kept for display.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesValue {
    /// A plain numeric value.
    Number(f64),
    /// A value already rendered for display (e.g., a rounded average).
    Text(String),
}

/// One labeled value in a series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    /// Category label (ticker, sector, ...).
    pub label: String,
    /// Numeric value used by axis computation and numeric consumers.
    pub value: f64,
    /// The value as it should be displayed.
    pub display: String,
}

/// An ordered sequence of labeled values prepared for a charting consumer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    /// Points in input order.
    pub points: Vec<SeriesPoint>,
}

impl ChartSeries {
    /// Numeric values in series order, for axis computation.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// True when the series holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points in the series.
    pub fn len(&self) -> usize {
        self.points.len()
    }
}

/// Projects items into a series, one point per item, in input order.
pub fn build_series<T, L, V>(items: &[T], label: L, value: V) -> ChartSeries
where
    L: Fn(&T) -> String,
    V: Fn(&T) -> SeriesValue,
{
    let points = items
        .iter()
        .map(|item| {
            let label = label(item);
            match value(item) {
                SeriesValue::Number(n) => SeriesPoint {
                    label,
                    value: n,
                    display: n.to_string(),
                },
                SeriesValue::Text(text) => {
                    let value = match text.trim().parse::<f64>() {
                        Ok(n) => n,
                        Err(_) => {
                            warn!(
                                label = %label,
                                text = %text,
                                "non-numeric series value; using score fallback"
                            );
                            SCORE_FALLBACK
                        }
                    };
                    SeriesPoint {
                        label,
                        value,
                        display: text,
                    }
                }
            }
        })
        .collect();
    ChartSeries { points }
}

/// Display bounds for a chart axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisRange {
    /// No bounds computed; the chart should scale itself. This is the
    /// documented result for an empty value set.
    Auto,
    /// Explicit padded bounds.
    Bounds {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
}

/// Computes padded display bounds for a value set.
///
/// `min` is the smallest value minus `margin`, floored at zero because these
/// are bounded score-like metrics; the floor is relaxed only when every value
/// is negative, where clamping would misrepresent the whole set. `max` is the
/// largest value plus `margin`. An empty set yields [`AxisRange::Auto`].
pub fn axis_range(values: &[f64], margin: f64) -> AxisRange {
    let Some(first) = values.first().copied() else {
        return AxisRange::Auto;
    };
    let (low, high) = values
        .iter()
        .skip(1)
        .fold((first, first), |(lo, hi), v| (lo.min(*v), hi.max(*v)));

    let mut min = low - margin;
    if values.iter().any(|v| *v >= 0.0) {
        min = min.max(0.0);
    }
    AxisRange::Bounds {
        min,
        max: high + margin,
    }
}
