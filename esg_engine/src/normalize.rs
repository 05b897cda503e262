//! Default-value policy for partial records.
//!
//! Every record source may omit fields, and several call sites consume the
//! same records; the fallback for each field class is therefore defined once
//! here and referenced everywhere a record is made total. Absence is not an
//! error at this layer: normalization never fails.

use crate::models::{Company, CompanyNarrative, EsgScores, RawCompany, RawNarrative, RawEsgScores};

/// Sector label for companies the upstream never classified.
pub const UNKNOWN_SECTOR: &str = "Unknown";

/// Fallback for absent free-text fields.
pub const TEXT_FALLBACK: &str = "Not available";

/// Fallback for absent or non-numeric score fields.
pub const SCORE_FALLBACK: f64 = 0.0;

/// Resolves an optional text field against [`TEXT_FALLBACK`].
///
/// Whitespace-only values count as absent.
pub fn text_or_fallback(value: Option<String>) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s,
        _ => TEXT_FALLBACK.to_string(),
    }
}

/// Produces a total [`Company`] from a raw row.
pub fn company(raw: RawCompany) -> Company {
    Company {
        ticker: raw.ticker,
        name: raw.name,
        sector: match raw.sector {
            Some(s) if !s.trim().is_empty() => s,
            _ => UNKNOWN_SECTOR.to_string(),
        },
        summary: text_or_fallback(raw.summary),
    }
}

/// Produces a total [`EsgScores`] from an optional raw row.
///
/// `None` covers both "no row matched the join" and "the fetch degraded";
/// either way the result is the documented zero scores, not an omitted entry.
pub fn scores(raw: Option<&RawEsgScores>) -> EsgScores {
    EsgScores {
        environmental: raw
            .and_then(|r| r.environmental_score)
            .unwrap_or(SCORE_FALLBACK),
        social: raw.and_then(|r| r.social_score).unwrap_or(SCORE_FALLBACK),
        governance: raw
            .and_then(|r| r.governance_score)
            .unwrap_or(SCORE_FALLBACK),
        total: raw.and_then(|r| r.total_esg_score).unwrap_or(SCORE_FALLBACK),
    }
}

/// Produces a total [`CompanyNarrative`] from an optional raw row.
pub fn narrative(raw: Option<RawNarrative>) -> CompanyNarrative {
    match raw {
        Some(r) => CompanyNarrative {
            business_summary: text_or_fallback(r.business_summary),
            esg_breakdown: text_or_fallback(r.esg_breakdown),
            outlook: text_or_fallback(r.outlook),
        },
        None => CompanyNarrative {
            business_summary: TEXT_FALLBACK.to_string(),
            esg_breakdown: TEXT_FALLBACK.to_string(),
            outlook: TEXT_FALLBACK.to_string(),
        },
    }
}
