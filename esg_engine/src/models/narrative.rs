//! Narrative (free-text summary) records.

use serde::Deserialize;

/// A narrative row as returned by the data source; at most one per ticker.
#[derive(Debug, Clone, Deserialize)]
pub struct RawNarrative {
    /// Ticker symbol this row belongs to.
    pub ticker: String,
    /// Business summary paragraph.
    pub business_summary: Option<String>,
    /// ESG breakdown paragraph.
    pub esg_breakdown: Option<String>,
    /// Forward-looking outlook paragraph.
    pub outlook: Option<String>,
}

/// A fully resolved narrative set for one company.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyNarrative {
    /// Business summary paragraph.
    pub business_summary: String,
    /// ESG breakdown paragraph.
    pub esg_breakdown: String,
    /// Forward-looking outlook paragraph.
    pub outlook: String,
}
