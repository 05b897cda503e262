//! Company records from the primary table.

use serde::Deserialize;

/// A `companies` row as returned by the data source.
///
/// Nullable columns stay optional here; [`crate::normalize`] turns this into
/// a total [`Company`].
#[derive(Debug, Clone, Deserialize)]
pub struct RawCompany {
    /// Ticker symbol, the key shared by every record source (e.g., "AAV.TO").
    pub ticker: String,
    /// Display name.
    pub name: String,
    /// Sector label; absent for companies the upstream never classified.
    pub sector: Option<String>,
    /// Free-text business description.
    pub summary: Option<String>,
}

/// A company record with every field resolved to a displayable value.
#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    /// Ticker symbol, unique within a record set.
    pub ticker: String,
    /// Display name.
    pub name: String,
    /// Sector label, never empty (unclassified companies carry "Unknown").
    pub sector: String,
    /// Free-text business description.
    pub summary: String,
}
