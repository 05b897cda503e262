//! Keyed joins between record collections.
//!
//! All sources share the ticker symbol as their key. The primary side drives
//! every join: each primary row yields exactly one output, in input order,
//! whether or not a secondary row matched. Secondary sources are indexed once
//! per join; a duplicate ticker on the secondary side is a warned condition
//! and the first occurrence wins.

use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::warn;

use crate::models::{Company, CompanyProfile, NewsArticle, RawCompany, RawEsgScores, RawNarrative};
use crate::normalize;

/// A record correlated across sources by ticker symbol.
pub trait Keyed {
    /// The ticker symbol this record belongs to.
    fn key(&self) -> &str;
}

impl Keyed for Company {
    fn key(&self) -> &str {
        &self.ticker
    }
}

impl Keyed for RawCompany {
    fn key(&self) -> &str {
        &self.ticker
    }
}

impl Keyed for RawEsgScores {
    fn key(&self) -> &str {
        &self.ticker
    }
}

impl Keyed for RawNarrative {
    fn key(&self) -> &str {
        &self.ticker
    }
}

impl Keyed for NewsArticle {
    fn key(&self) -> &str {
        &self.ticker
    }
}

/// Indexes secondary rows by key, keeping the first occurrence of duplicates.
pub fn index_by_key<S: Keyed>(rows: &[S]) -> HashMap<&str, &S> {
    let mut index: HashMap<&str, &S> = HashMap::with_capacity(rows.len());
    for row in rows {
        if index.contains_key(row.key()) {
            warn!(key = row.key(), "duplicate secondary row in join; keeping first occurrence");
            continue;
        }
        index.insert(row.key(), row);
    }
    index
}

/// Left-outer join: one output per primary row, primary order preserved.
///
/// `merge` receives the matching secondary row, or `None` when the secondary
/// source has no row for that key; the caller substitutes normalized defaults
/// rather than dropping the entry.
pub fn left_join<P, S, T, F>(primary: Vec<P>, secondary: &[S], mut merge: F) -> Vec<T>
where
    P: Keyed,
    S: Keyed,
    F: FnMut(P, Option<&S>) -> T,
{
    let index = index_by_key(secondary);
    primary
        .into_iter()
        .map(|row| {
            let hit = index.get(row.key()).copied();
            merge(row, hit)
        })
        .collect()
}

/// One-to-many grouping: ticker to the full matching subsequence.
///
/// Zero matches for a ticker simply means no entry; no defaults are
/// substituted. Group order is first occurrence, row order within a group is
/// input order.
pub fn group_by_key<T: Keyed>(rows: Vec<T>) -> IndexMap<String, Vec<T>> {
    let mut groups: IndexMap<String, Vec<T>> = IndexMap::new();
    for row in rows {
        groups.entry(row.key().to_string()).or_default().push(row);
    }
    groups
}

/// Joins normalized companies against raw score rows into profiles.
///
/// Companies with no matching score row get the default-filled score set, so
/// the output length always equals the input company count.
pub fn join_profiles(companies: Vec<Company>, scores: &[RawEsgScores]) -> Vec<CompanyProfile> {
    left_join(companies, scores, |company, hit| CompanyProfile {
        company,
        scores: normalize::scores(hit),
    })
}
