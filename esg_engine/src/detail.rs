//! Single-company detail assembly.
//!
//! The sector is only known once the company row resolves, so the assembly is
//! one primary fetch followed by a fork-join of three independent record
//! reads: the company's own scores/narrative/news, its sector peers with
//! their scores, and the global per-sector averages. Only the primary fetch
//! can fail the assembly; each of the other segments degrades to an empty or
//! default-filled result on its own.

use tracing::debug;

use crate::allowlist::AllowList;
use crate::chart::{
    AxisRange, ChartSeries, DEFAULT_AXIS_MARGIN, SeriesValue, axis_range, build_series,
};
use crate::errors::{AssemblyError, degrade};
use crate::join::join_profiles;
use crate::models::{Company, CompanyNarrative, CompanyProfile, EsgScores, NewsArticle};
use crate::normalize;
use crate::sector::{SectorAverage, average_series, group_by_sector, sector_averages};
use crate::source::DataSource;

/// One chart series per score component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EsgSeriesSet {
    /// Environmental component, one point per peer.
    pub environmental: ChartSeries,
    /// Social component, one point per peer.
    pub social: ChartSeries,
    /// Governance component, one point per peer.
    pub governance: ChartSeries,
    /// Combined score, one point per peer.
    pub total: ChartSeries,
}

/// The assembled detail view for one company.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyDetail {
    /// The company itself.
    pub company: Company,
    /// Its scores, default-filled when the scoring source had nothing.
    pub scores: EsgScores,
    /// Its narrative, default-filled when the narrative source had nothing.
    pub narrative: CompanyNarrative,
    /// News coverage; empty when the news source had nothing.
    pub articles: Vec<NewsArticle>,
    /// Allow-listed companies sharing the sector, excluding the company
    /// itself, each with scores joined in.
    pub peers: Vec<CompanyProfile>,
    /// Per-component peer comparison series.
    pub peer_series: EsgSeriesSet,
    /// Mean total score per sector over the allow-listed corpus.
    pub sector_averages: Vec<SectorAverage>,
    /// Chart series over the rounded sector averages.
    pub sector_series: ChartSeries,
    /// Display bounds for the sector-average chart; the peer charts use the
    /// consumer's own scaling.
    pub sector_axis: AxisRange,
}

/// Assembles the detail view for one ticker.
///
/// # Errors
/// [`AssemblyError::NotFound`] when the company row does not exist;
/// [`AssemblyError::Source`] when the primary fetch itself fails. Secondary
/// failures degrade their own section and are logged instead.
pub async fn assemble_detail(
    source: &dyn DataSource,
    allowlist: &AllowList,
    ticker: &str,
) -> Result<CompanyDetail, AssemblyError> {
    let row = source.company_by_ticker(ticker).await?;
    let company =
        normalize::company(row.ok_or_else(|| AssemblyError::NotFound(ticker.to_string()))?);
    debug!(
        ticker = %company.ticker,
        sector = %company.sector,
        "resolved primary company; fanning out record reads"
    );

    // Everything below depends only on the resolved company; the three
    // segments are independent of each other and run concurrently.
    let ((scores, narrative, articles), peers, sector_averages) = tokio::join!(
        own_records(source, &company.ticker),
        peer_profiles(source, allowlist, &company.sector, &company.ticker),
        corpus_sector_averages(source, allowlist),
    );

    let peer_series = peer_series_set(&peers);
    let sector_series = average_series(&sector_averages);
    let sector_axis = axis_range(&sector_series.values(), DEFAULT_AXIS_MARGIN);

    Ok(CompanyDetail {
        company,
        scores,
        narrative,
        articles,
        peers,
        peer_series,
        sector_averages,
        sector_series,
        sector_axis,
    })
}

/// Fetches the company's own scores, narrative, and news concurrently; each
/// read degrades on its own.
async fn own_records(
    source: &dyn DataSource,
    ticker: &str,
) -> (EsgScores, CompanyNarrative, Vec<NewsArticle>) {
    let (scores, narrative, news) = tokio::join!(
        source.scores_by_ticker(ticker),
        source.narrative_by_ticker(ticker),
        source.news_by_ticker(ticker),
    );

    (
        normalize::scores(degrade(scores, "own scores").flatten().as_ref()),
        normalize::narrative(degrade(narrative, "own narrative").flatten()),
        degrade(news, "own news").unwrap_or_default(),
    )
}

/// Fetches allow-listed sector peers and joins their scores in.
///
/// The subject company is excluded. The score fetch waits on the peer list
/// (it needs the tickers) but both reads degrade independently: a failed
/// score fetch still yields default-filled peer profiles.
async fn peer_profiles(
    source: &dyn DataSource,
    allowlist: &AllowList,
    sector: &str,
    subject: &str,
) -> Vec<CompanyProfile> {
    let rows = degrade(source.companies_by_sector(sector).await, "peer companies")
        .unwrap_or_default();
    let peers: Vec<Company> = rows
        .into_iter()
        .filter(|c| c.ticker != subject && allowlist.contains(&c.ticker))
        .map(normalize::company)
        .collect();
    if peers.is_empty() {
        return Vec::new();
    }

    let tickers: Vec<String> = peers.iter().map(|c| c.ticker.clone()).collect();
    let scores = degrade(source.scores_in(&tickers).await, "peer scores").unwrap_or_default();
    join_profiles(peers, &scores)
}

/// Groups the full allow-listed corpus by sector and averages total scores.
async fn corpus_sector_averages(
    source: &dyn DataSource,
    allowlist: &AllowList,
) -> Vec<SectorAverage> {
    let (companies, scores) = tokio::join!(
        source.companies_in(allowlist.tickers()),
        source.scores_in(allowlist.tickers()),
    );
    let companies = degrade(companies, "sector corpus").unwrap_or_default();
    let scores = degrade(scores, "sector corpus scores").unwrap_or_default();

    let normalized = companies.into_iter().map(normalize::company).collect();
    let profiles = join_profiles(normalized, &scores);
    let groups = group_by_sector(profiles);
    sector_averages(&groups, |p| p.scores.total)
}

fn peer_series_set(peers: &[CompanyProfile]) -> EsgSeriesSet {
    let metric = |pick: fn(&EsgScores) -> f64| {
        build_series(
            peers,
            |p| p.company.ticker.clone(),
            move |p| SeriesValue::Number(pick(&p.scores)),
        )
    };
    EsgSeriesSet {
        environmental: metric(|s| s.environmental),
        social: metric(|s| s.social),
        governance: metric(|s| s.governance),
        total: metric(|s| s.total),
    }
}
