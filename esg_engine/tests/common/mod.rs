//! Shared fixtures: an in-memory `DataSource` with per-operation failure
//! injection, plus row builders.

use std::collections::HashSet;

use async_trait::async_trait;

use esg_engine::models::{NewsArticle, RawCompany, RawEsgScores, RawNarrative};
use esg_engine::source::{DataSource, SourceError};

/// An in-memory record store implementing the full source contract.
///
/// `fail(op)` marks one operation as unavailable; that operation then returns
/// a `SourceError` while every other read keeps working, which is exactly the
/// degradation surface the assemblers must absorb.
#[derive(Default)]
pub struct MemorySource {
    pub companies: Vec<RawCompany>,
    pub scores: Vec<RawEsgScores>,
    pub narratives: Vec<RawNarrative>,
    pub news: Vec<NewsArticle>,
    pub failing: HashSet<&'static str>,
}

impl MemorySource {
    pub fn fail(mut self, op: &'static str) -> Self {
        self.failing.insert(op);
        self
    }

    fn check(&self, op: &str) -> Result<(), SourceError> {
        if self.failing.contains(op) {
            Err(SourceError::Api(format!("injected failure: {op}")))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl DataSource for MemorySource {
    async fn company_by_ticker(&self, ticker: &str) -> Result<Option<RawCompany>, SourceError> {
        self.check("company_by_ticker")?;
        Ok(self.companies.iter().find(|c| c.ticker == ticker).cloned())
    }

    async fn companies_in(&self, tickers: &[String]) -> Result<Vec<RawCompany>, SourceError> {
        self.check("companies_in")?;
        Ok(self
            .companies
            .iter()
            .filter(|c| tickers.contains(&c.ticker))
            .cloned()
            .collect())
    }

    async fn companies_by_sector(&self, sector: &str) -> Result<Vec<RawCompany>, SourceError> {
        self.check("companies_by_sector")?;
        Ok(self
            .companies
            .iter()
            .filter(|c| c.sector.as_deref() == Some(sector))
            .cloned()
            .collect())
    }

    async fn scores_by_ticker(&self, ticker: &str) -> Result<Option<RawEsgScores>, SourceError> {
        self.check("scores_by_ticker")?;
        Ok(self.scores.iter().find(|s| s.ticker == ticker).cloned())
    }

    async fn scores_in(&self, tickers: &[String]) -> Result<Vec<RawEsgScores>, SourceError> {
        self.check("scores_in")?;
        Ok(self
            .scores
            .iter()
            .filter(|s| tickers.contains(&s.ticker))
            .cloned()
            .collect())
    }

    async fn narrative_by_ticker(
        &self,
        ticker: &str,
    ) -> Result<Option<RawNarrative>, SourceError> {
        self.check("narrative_by_ticker")?;
        Ok(self.narratives.iter().find(|n| n.ticker == ticker).cloned())
    }

    async fn news_by_ticker(&self, ticker: &str) -> Result<Vec<NewsArticle>, SourceError> {
        self.check("news_by_ticker")?;
        Ok(self
            .news
            .iter()
            .filter(|a| a.ticker == ticker)
            .cloned()
            .collect())
    }
}

pub fn company(ticker: &str, name: &str, sector: Option<&str>) -> RawCompany {
    RawCompany {
        ticker: ticker.into(),
        name: name.into(),
        sector: sector.map(Into::into),
        summary: Some(format!("{name} does things.")),
    }
}

pub fn score_row(ticker: &str, e: f64, s: f64, g: f64, total: f64) -> RawEsgScores {
    RawEsgScores {
        ticker: ticker.into(),
        environmental_score: Some(e),
        social_score: Some(s),
        governance_score: Some(g),
        total_esg_score: Some(total),
    }
}

pub fn narrative_row(ticker: &str, summary: &str) -> RawNarrative {
    RawNarrative {
        ticker: ticker.into(),
        business_summary: Some(summary.into()),
        esg_breakdown: Some(format!("{ticker} breakdown")),
        outlook: None,
    }
}

pub fn article(ticker: &str, title: &str, published: Option<&str>) -> NewsArticle {
    NewsArticle {
        ticker: ticker.into(),
        title: title.into(),
        text: "Body text.".into(),
        url: "https://example.com/article".into(),
        image: "https://example.com/image.jpg".into(),
        published: published.map(Into::into),
    }
}
