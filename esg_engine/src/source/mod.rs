//! Data-source abstraction for the record tables.
//!
//! This module defines the [`DataSource`] trait, the unified read interface
//! over the upstream tables (companies, scores, narratives, news) regardless
//! of where they live. The engine only ever consumes this contract; the
//! bundled [`RestSource`] speaks to a PostgREST-style endpoint, and tests
//! substitute in-memory fixtures.
//!
//! "No rows found" is not an error: by-key reads return `Option`, set reads
//! return possibly-empty `Vec`s. Transport and API failures surface as
//! [`SourceError`] so callers can tell the two apart.
//!
//! The trait supports dynamic dispatch (`dyn DataSource`), so assembly code
//! can run against any backing store selected at runtime.

pub mod errors;
mod rest;

pub use errors::{SourceError, SourceInitError};
pub use rest::RestSource;

use async_trait::async_trait;

use crate::models::{NewsArticle, RawCompany, RawEsgScores, RawNarrative};

/// Read access to the upstream record tables, keyed by ticker symbol.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// The company row for one ticker, if any.
    async fn company_by_ticker(&self, ticker: &str) -> Result<Option<RawCompany>, SourceError>;

    /// Company rows whose ticker is in the given set.
    async fn companies_in(&self, tickers: &[String]) -> Result<Vec<RawCompany>, SourceError>;

    /// Company rows carrying the given sector label.
    async fn companies_by_sector(&self, sector: &str) -> Result<Vec<RawCompany>, SourceError>;

    /// The score row for one ticker, if any.
    async fn scores_by_ticker(&self, ticker: &str) -> Result<Option<RawEsgScores>, SourceError>;

    /// Score rows whose ticker is in the given set.
    async fn scores_in(&self, tickers: &[String]) -> Result<Vec<RawEsgScores>, SourceError>;

    /// The narrative row for one ticker, if any.
    async fn narrative_by_ticker(&self, ticker: &str)
    -> Result<Option<RawNarrative>, SourceError>;

    /// All news articles collected for one ticker; empty when uncovered.
    async fn news_by_ticker(&self, ticker: &str) -> Result<Vec<NewsArticle>, SourceError>;
}
