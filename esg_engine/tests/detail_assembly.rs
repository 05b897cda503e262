mod common;

use common::{MemorySource, article, company, narrative_row, score_row};

use esg_engine::allowlist::AllowList;
use esg_engine::chart::AxisRange;
use esg_engine::detail::assemble_detail;
use esg_engine::errors::AssemblyError;
use esg_engine::normalize::TEXT_FALLBACK;
use esg_engine::timefmt::{INVALID_DATE, published_stamp};

fn tech_pair_source() -> MemorySource {
    MemorySource {
        companies: vec![
            company("A.TO", "Alpha", Some("Tech")),
            company("B.TO", "Beta", Some("Tech")),
        ],
        scores: vec![score_row("A.TO", 20.0, 17.0, 35.0, 72.0)],
        narratives: vec![narrative_row("A.TO", "Alpha in depth")],
        news: vec![
            article("A.TO", "Alpha wins award", Some("2024-12-23 15:47:57")),
            article("A.TO", "Alpha expands", Some("not a timestamp")),
            article("B.TO", "Beta item", None),
        ],
        ..Default::default()
    }
}

fn allow_ab() -> AllowList {
    AllowList::new(["A.TO", "B.TO"])
}

#[tokio::test]
async fn scoreless_peer_gets_defaults_and_halves_the_sector_mean() {
    let source = tech_pair_source();
    let detail = assemble_detail(&source, &allow_ab(), "A.TO").await.unwrap();

    assert_eq!(detail.company.name, "Alpha");
    assert_eq!(detail.scores.total, 72.0);

    // B has no score row: it still appears, default-filled.
    assert_eq!(detail.peers.len(), 1);
    assert_eq!(detail.peers[0].company.ticker, "B.TO");
    assert_eq!(detail.peers[0].scores.total, 0.0);

    // (72 + 0) / 2 over the corpus.
    assert_eq!(detail.sector_averages.len(), 1);
    assert_eq!(detail.sector_averages[0].sector, "Tech");
    assert_eq!(detail.sector_averages[0].rounded(), 36);
    assert_eq!(detail.sector_series.points[0].display, "36");
    assert_eq!(
        detail.sector_axis,
        AxisRange::Bounds { min: 31.0, max: 41.0 }
    );
}

#[tokio::test]
async fn own_records_resolve_and_articles_keep_order() {
    let source = tech_pair_source();
    let detail = assemble_detail(&source, &allow_ab(), "A.TO").await.unwrap();

    assert_eq!(detail.narrative.business_summary, "Alpha in depth");
    // The narrative row left outlook null; policy fills it.
    assert_eq!(detail.narrative.outlook, TEXT_FALLBACK);

    let titles: Vec<&str> = detail.articles.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, ["Alpha wins award", "Alpha expands"]);

    // Timestamp handling is a display concern; a malformed one never blocks
    // assembly and renders as the sentinel.
    let stamps: Vec<String> = detail
        .articles
        .iter()
        .map(|a| published_stamp(a.published.as_deref()).date)
        .collect();
    assert_eq!(stamps, ["Dec 23, 2024", INVALID_DATE]);
}

#[tokio::test]
async fn peer_series_covers_each_component() {
    let mut source = tech_pair_source();
    source.companies.push(company("C.TO", "Gamma", Some("Tech")));
    source.scores.push(score_row("C.TO", 10.0, 20.0, 30.0, 60.0));
    let allow = AllowList::new(["A.TO", "B.TO", "C.TO"]);

    let detail = assemble_detail(&source, &allow, "A.TO").await.unwrap();

    let labels: Vec<&str> = detail
        .peer_series
        .total
        .points
        .iter()
        .map(|p| p.label.as_str())
        .collect();
    assert_eq!(labels, ["B.TO", "C.TO"]);
    assert_eq!(detail.peer_series.total.values(), vec![0.0, 60.0]);
    assert_eq!(detail.peer_series.environmental.values(), vec![0.0, 10.0]);
    assert_eq!(detail.peer_series.governance.values(), vec![0.0, 30.0]);
}

#[tokio::test]
async fn unknown_ticker_is_terminal_not_found() {
    let source = tech_pair_source();
    let err = assemble_detail(&source, &allow_ab(), "Z.TO").await.unwrap_err();
    assert!(matches!(err, AssemblyError::NotFound(t) if t == "Z.TO"));
}

#[tokio::test]
async fn primary_fetch_failure_propagates() {
    let source = tech_pair_source().fail("company_by_ticker");
    let err = assemble_detail(&source, &allow_ab(), "A.TO").await.unwrap_err();
    assert!(matches!(err, AssemblyError::Source(_)));
}

#[tokio::test]
async fn peer_fetch_failure_degrades_only_the_peer_section() {
    let source = tech_pair_source().fail("companies_by_sector");
    let detail = assemble_detail(&source, &allow_ab(), "A.TO").await.unwrap();

    assert!(detail.peers.is_empty());
    assert!(detail.peer_series.total.is_empty());

    // Everything else is still populated.
    assert_eq!(detail.scores.total, 72.0);
    assert_eq!(detail.narrative.business_summary, "Alpha in depth");
    assert_eq!(detail.sector_averages[0].rounded(), 36);
}

#[tokio::test]
async fn every_own_record_fetch_failing_still_assembles() {
    let source = tech_pair_source()
        .fail("scores_by_ticker")
        .fail("narrative_by_ticker")
        .fail("news_by_ticker");
    let detail = assemble_detail(&source, &allow_ab(), "A.TO").await.unwrap();

    assert_eq!(detail.scores.total, 0.0);
    assert_eq!(detail.narrative.business_summary, TEXT_FALLBACK);
    assert!(detail.articles.is_empty());
    // The corpus segment is untouched by own-record failures.
    assert_eq!(detail.sector_averages[0].sector, "Tech");
}

#[tokio::test]
async fn corpus_failure_leaves_sector_chart_on_auto_scaling() {
    let source = tech_pair_source().fail("companies_in");
    let detail = assemble_detail(&source, &allow_ab(), "A.TO").await.unwrap();

    assert!(detail.sector_averages.is_empty());
    assert!(detail.sector_series.is_empty());
    assert_eq!(detail.sector_axis, AxisRange::Auto);
    // Peers come from the sector filter, not the corpus read.
    assert_eq!(detail.peers.len(), 1);
}

#[tokio::test]
async fn peers_exclude_the_subject_and_unlisted_tickers() {
    let mut source = tech_pair_source();
    source.companies.push(company("X.TO", "Xenon", Some("Tech")));
    // X.TO shares the sector but is not allow-listed.
    let detail = assemble_detail(&source, &allow_ab(), "A.TO").await.unwrap();

    let tickers: Vec<&str> = detail
        .peers
        .iter()
        .map(|p| p.company.ticker.as_str())
        .collect();
    assert_eq!(tickers, ["B.TO"]);
}
