use async_trait::async_trait;
use reqwest::{Client, header};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use shared_utils::env::require_env;

use crate::models::{NewsArticle, RawCompany, RawEsgScores, RawNarrative};
use crate::source::{DataSource, SourceError, SourceInitError};

/// Environment variable holding the source base URL.
pub const SOURCE_URL_VAR: &str = "ESG_SOURCE_URL";
/// Environment variable holding the source API key.
pub const SOURCE_KEY_VAR: &str = "ESG_SOURCE_KEY";

const COMPANIES: &str = "companies";
const SCORES: &str = "esg_scores";
const NARRATIVES: &str = "narratives";
const NEWS: &str = "sentiment_data";

/// A [`DataSource`] backed by a PostgREST-style HTTP endpoint.
///
/// Each table read is a `GET {base}/rest/v1/{table}` with `eq.`/`in.()`
/// filter parameters. The API key is sent both as `apikey` and as a bearer
/// token, and is held in a [`SecretString`] so it never lands in debug
/// output.
pub struct RestSource {
    client: Client,
    base_url: String,
    _api_key: SecretString,
}

impl RestSource {
    /// Creates a source client for the given endpoint.
    pub fn new(base_url: impl Into<String>, api_key: SecretString) -> Result<Self, SourceInitError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            "apikey",
            header::HeaderValue::from_str(api_key.expose_secret())?,
        );
        let mut bearer = header::HeaderValue::from_str(&format!(
            "Bearer {}",
            api_key.expose_secret()
        ))?;
        bearer.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, bearer);

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            _api_key: api_key,
        })
    }

    /// Creates a source client from the `ESG_SOURCE_URL` / `ESG_SOURCE_KEY`
    /// environment variables.
    pub fn from_env() -> Result<Self, SourceInitError> {
        let base_url = require_env(SOURCE_URL_VAR)?;
        let api_key = SecretString::new(require_env(SOURCE_KEY_VAR)?.into());
        Self::new(base_url, api_key)
    }

    async fn rows<T: DeserializeOwned>(
        &self,
        table: &str,
        filter: (&str, String),
    ) -> Result<Vec<T>, SourceError> {
        let url = format!("{}/rest/v1/{}", self.base_url, table);
        let (column, predicate) = filter;
        let response = self
            .client
            .get(&url)
            .query(&[("select", "*"), (column, predicate.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return Err(SourceError::Api(message));
        }

        Ok(response.json::<Vec<T>>().await?)
    }
}

/// Renders a PostgREST `in.(...)` predicate; values are quoted because
/// tickers contain dots.
fn in_list(values: &[String]) -> String {
    let quoted: Vec<String> = values.iter().map(|v| format!("\"{v}\"")).collect();
    format!("in.({})", quoted.join(","))
}

#[async_trait]
impl DataSource for RestSource {
    async fn company_by_ticker(&self, ticker: &str) -> Result<Option<RawCompany>, SourceError> {
        let rows: Vec<RawCompany> = self
            .rows(COMPANIES, ("ticker", format!("eq.{ticker}")))
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn companies_in(&self, tickers: &[String]) -> Result<Vec<RawCompany>, SourceError> {
        if tickers.is_empty() {
            return Ok(Vec::new());
        }
        self.rows(COMPANIES, ("ticker", in_list(tickers))).await
    }

    async fn companies_by_sector(&self, sector: &str) -> Result<Vec<RawCompany>, SourceError> {
        self.rows(COMPANIES, ("sector", format!("eq.{sector}"))).await
    }

    async fn scores_by_ticker(&self, ticker: &str) -> Result<Option<RawEsgScores>, SourceError> {
        let rows: Vec<RawEsgScores> = self
            .rows(SCORES, ("ticker", format!("eq.{ticker}")))
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn scores_in(&self, tickers: &[String]) -> Result<Vec<RawEsgScores>, SourceError> {
        if tickers.is_empty() {
            return Ok(Vec::new());
        }
        self.rows(SCORES, ("ticker", in_list(tickers))).await
    }

    async fn narrative_by_ticker(
        &self,
        ticker: &str,
    ) -> Result<Option<RawNarrative>, SourceError> {
        let rows: Vec<RawNarrative> = self
            .rows(NARRATIVES, ("ticker", format!("eq.{ticker}")))
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn news_by_ticker(&self, ticker: &str) -> Result<Vec<NewsArticle>, SourceError> {
        self.rows(NEWS, ("ticker", format!("eq.{ticker}"))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_list_quotes_each_ticker() {
        let values = vec!["ACX.TO".to_string(), "BIR.TO".to_string()];
        assert_eq!(in_list(&values), r#"in.("ACX.TO","BIR.TO")"#);
    }
}
