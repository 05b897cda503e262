//! List-view assembly: every allow-listed company, grouped by sector.
//!
//! The company fetch is the primary read for this view and its failure is
//! terminal; a failed score fetch degrades to default-filled profiles so the
//! listing still renders.

use indexmap::IndexMap;
use tracing::debug;

use crate::allowlist::AllowList;
use crate::chart::{AxisRange, ChartSeries, DEFAULT_AXIS_MARGIN, axis_range};
use crate::errors::{AssemblyError, degrade};
use crate::join::join_profiles;
use crate::models::CompanyProfile;
use crate::normalize;
use crate::sector::{SectorAverage, average_series, group_by_sector, sector_averages};
use crate::source::DataSource;

/// The assembled list view: sector sections plus the sector-average chart.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketOverview {
    /// Profiles grouped by sector, sections in first-seen order.
    pub sectors: IndexMap<String, Vec<CompanyProfile>>,
    /// Mean total score per sector, one entry per non-empty sector.
    pub averages: Vec<SectorAverage>,
    /// Chart series over the rounded sector averages.
    pub sector_series: ChartSeries,
    /// Display bounds for the sector-average chart.
    pub sector_axis: AxisRange,
}

/// Assembles the list view for the allow-listed corpus.
pub async fn assemble_overview(
    source: &dyn DataSource,
    allowlist: &AllowList,
) -> Result<MarketOverview, AssemblyError> {
    let (companies, scores) = tokio::join!(
        source.companies_in(allowlist.tickers()),
        source.scores_in(allowlist.tickers()),
    );

    let companies = companies?;
    let scores = degrade(scores, "esg_scores").unwrap_or_default();

    let normalized = companies.into_iter().map(normalize::company).collect();
    let profiles = join_profiles(normalized, &scores);

    let sectors = group_by_sector(profiles);
    debug!(sections = sectors.len(), "grouped corpus into sector sections");
    let averages = sector_averages(&sectors, |p| p.scores.total);
    let sector_series = average_series(&averages);
    let sector_axis = axis_range(&sector_series.values(), DEFAULT_AXIS_MARGIN);

    Ok(MarketOverview {
        sectors,
        averages,
        sector_series,
        sector_axis,
    })
}
