//! Aggregation and join engine for per-company ESG metrics.
//!
//! Record sets for companies, scores, narratives, and news arrive from a
//! [`source::DataSource`], keyed by ticker symbol. The engine normalizes
//! partial rows ([`normalize`]), joins them into profiles ([`join`]), groups
//! and averages by sector ([`sector`]), and projects the results into chart
//! series with computed display bounds ([`chart`]). The two assembly
//! entrypoints are [`overview::assemble_overview`] for the list view and
//! [`detail::assemble_detail`] for a single company.
//!
//! The engine is stateless: every assembly call builds its view from fresh
//! snapshots and holds nothing across invocations.

pub mod allowlist;
pub mod chart;
pub mod detail;
pub mod errors;
pub mod join;
pub mod models;
pub mod normalize;
pub mod overview;
pub mod sector;
pub mod source;
pub mod timefmt;
