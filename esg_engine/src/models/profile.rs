//! The join product of a company and its score set.

use crate::models::{Company, EsgScores};

/// One company paired with exactly one score set.
///
/// Every company in a joined record set produces exactly one profile; when no
/// score row matches, the profile carries the default-filled scores from
/// [`crate::normalize`], so downstream grouping and charting never see gaps.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyProfile {
    /// The normalized company record.
    pub company: Company,
    /// The company's scores, default-filled when the scoring source had no row.
    pub scores: EsgScores,
}
