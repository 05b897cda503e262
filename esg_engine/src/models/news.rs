//! News/sentiment event records.
//!
//! Unlike scores and narratives, news rows are one-to-many per ticker and are
//! carried through unchanged: a company with no coverage gets an empty list,
//! never a placeholder article. Timestamp formatting (including the malformed
//! case) happens at the display boundary in [`crate::timefmt`].

use serde::Deserialize;

/// A `sentiment_data` row: one article attributed to one ticker.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewsArticle {
    /// Ticker symbol the article was collected for.
    pub ticker: String,
    /// Headline.
    #[serde(rename = "article_title")]
    pub title: String,
    /// Body text (may be truncated upstream).
    #[serde(rename = "article_text")]
    pub text: String,
    /// Link to the full article.
    #[serde(rename = "article_resolved_url")]
    pub url: String,
    /// Lead image reference.
    #[serde(rename = "article_top_image")]
    pub image: String,
    /// Publication timestamp in `YYYY-MM-DD HH:MM:SS` form; may be absent or
    /// malformed.
    #[serde(rename = "article_published")]
    pub published: Option<String>,
}
