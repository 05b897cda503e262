//! The allow-list of tickers eligible for listing and aggregation.
//!
//! The set is injected configuration with a single owner, not data computed
//! by the engine: it is loaded once (typically from TOML) and passed by
//! reference into each assembly call. Normalization enforces uppercase
//! trimmed symbols and de-duplicates while preserving order.

use anyhow::{Context, bail};
use serde::Deserialize;
use toml::from_str;

/// The set of tickers allowed to participate in listing and aggregation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AllowList {
    tickers: Vec<String>,
}

/// TOML shape of an allow-list file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AllowListFile {
    /// Eligible ticker symbols, e.g. `["ACX.TO", "BIR.TO"]`.
    tickers: Vec<String>,
}

impl AllowList {
    /// Builds an allow-list, normalizing each entry (trim, uppercase) and
    /// dropping empties and duplicates while preserving first-seen order.
    pub fn new<I, S>(tickers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = std::collections::HashSet::new();
        let mut normalized = Vec::new();
        for raw in tickers {
            let ticker = raw.into().trim().to_uppercase();
            if ticker.is_empty() {
                continue;
            }
            if seen.insert(ticker.clone()) {
                normalized.push(ticker);
            }
        }
        AllowList { tickers: normalized }
    }

    /// True when the ticker is eligible.
    pub fn contains(&self, ticker: &str) -> bool {
        self.tickers.iter().any(|t| t == ticker)
    }

    /// The normalized tickers, in configured order.
    pub fn tickers(&self) -> &[String] {
        &self.tickers
    }

    /// True when no tickers are configured.
    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }

    /// Number of configured tickers.
    pub fn len(&self) -> usize {
        self.tickers.len()
    }
}

/// Parses and normalizes an allow-list from a TOML string.
///
/// Errors on TOML parse failures and on a list that normalizes to empty —
/// an engine with nothing eligible is a configuration mistake, not a state.
pub fn load_allowlist_str(toml_str: &str) -> anyhow::Result<AllowList> {
    let file: AllowListFile = from_str(toml_str).context("failed to parse allow-list TOML")?;
    let list = AllowList::new(file.tickers);
    if list.is_empty() {
        bail!("allow-list contains no tickers after normalization");
    }
    Ok(list)
}

/// Reads, parses, and normalizes an allow-list TOML file.
pub fn load_allowlist_path(path: impl AsRef<std::path::Path>) -> anyhow::Result<AllowList> {
    let text = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("read allow-list file {}", path.as_ref().display()))?;
    load_allowlist_str(&text)
}
