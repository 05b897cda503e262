//! ESG score records from the scoring table.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// An `esg_scores` row as returned by the data source.
///
/// Score columns are deserialized leniently: numbers pass through, numeric
/// strings are coerced, and anything else is treated as absent. The same
/// fallback then applies to absent and malformed values alike when the row is
/// normalized into [`EsgScores`].
#[derive(Debug, Clone, Deserialize)]
pub struct RawEsgScores {
    /// Ticker symbol this row belongs to.
    pub ticker: String,
    /// Environmental component score (0-100 scale).
    #[serde(default, deserialize_with = "lenient_f64")]
    pub environmental_score: Option<f64>,
    /// Social component score (0-100 scale).
    #[serde(default, deserialize_with = "lenient_f64")]
    pub social_score: Option<f64>,
    /// Governance component score (0-100 scale).
    #[serde(default, deserialize_with = "lenient_f64")]
    pub governance_score: Option<f64>,
    /// Combined ESG score (0-100 scale).
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_esg_score: Option<f64>,
}

/// A fully resolved score set for one company.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EsgScores {
    /// Environmental component score.
    pub environmental: f64,
    /// Social component score.
    pub social: f64,
    /// Governance component score.
    pub governance: f64,
    /// Combined ESG score.
    pub total: f64,
}

/// Accepts a JSON number or a numeric string; everything else becomes `None`.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}
