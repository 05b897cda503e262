//! Grouping by sector and per-sector aggregates.
//!
//! Groups are held in an `IndexMap` so that emitted order is the insertion
//! order of the first-seen label, reproducible across runs for identical
//! input order. Empty groups cannot exist: a label appears only when at least
//! one member carried it.

use indexmap::IndexMap;

use crate::chart::{ChartSeries, SeriesValue, build_series};
use crate::models::CompanyProfile;

/// Mean of one metric across a sector's members.
///
/// The exact mean is kept; [`SectorAverage::rounded`] derives the integer
/// used for display so that callers needing precision are not short-changed.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorAverage {
    /// Sector label.
    pub sector: String,
    /// Arithmetic mean of the chosen metric, unrounded.
    pub mean: f64,
}

impl SectorAverage {
    /// The mean rounded to the nearest integer, as shown on cards and charts.
    pub fn rounded(&self) -> i64 {
        self.mean.round() as i64
    }
}

/// Partitions items into labeled groups, preserving first-seen label order.
///
/// Every input item lands in exactly one group; the key function owns any
/// defaulting (a missing sector has already become "Unknown" upstream, so an
/// unclassified record is grouped, never dropped).
pub fn group_by<T, K>(items: Vec<T>, key: K) -> IndexMap<String, Vec<T>>
where
    K: Fn(&T) -> String,
{
    let mut groups: IndexMap<String, Vec<T>> = IndexMap::new();
    for item in items {
        groups.entry(key(&item)).or_default().push(item);
    }
    groups
}

/// Groups profiles by their normalized sector label.
pub fn group_by_sector(profiles: Vec<CompanyProfile>) -> IndexMap<String, Vec<CompanyProfile>> {
    group_by(profiles, |p| p.company.sector.clone())
}

/// Computes the per-group mean of `metric`, one entry per non-empty group.
pub fn sector_averages<F>(
    groups: &IndexMap<String, Vec<CompanyProfile>>,
    metric: F,
) -> Vec<SectorAverage>
where
    F: Fn(&CompanyProfile) -> f64,
{
    groups
        .iter()
        .filter(|(_, members)| !members.is_empty())
        .map(|(sector, members)| {
            let sum: f64 = members.iter().map(&metric).sum();
            SectorAverage {
                sector: sector.clone(),
                mean: sum / members.len() as f64,
            }
        })
        .collect()
}

/// Projects sector averages into a chart series.
///
/// The rounded integer is the display text; it is also what feeds axis
/// computation, so the chart shows exactly the numbers printed on it.
pub fn average_series(averages: &[SectorAverage]) -> ChartSeries {
    build_series(
        averages,
        |a| a.sector.clone(),
        |a| SeriesValue::Text(a.rounded().to_string()),
    )
}
