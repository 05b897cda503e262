use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use esg_engine::allowlist::load_allowlist_path;
use esg_engine::chart::{AxisRange, ChartSeries};
use esg_engine::detail::assemble_detail;
use esg_engine::overview::assemble_overview;
use esg_engine::source::RestSource;
use esg_engine::timefmt::published_stamp;
use shared_utils::env::env_or;

#[derive(Parser)]
#[command(version, about = "ESG metrics report CLI")]
struct Cli {
    /// Path to the allow-list TOML file (overrides ESG_ALLOWLIST).
    #[arg(long, value_name = "FILE")]
    allowlist: Option<String>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Print the sector overview for the allow-listed corpus
    Overview,
    /// Print the detail view for one company
    Company {
        /// Ticker symbol (e.g. "ACX.TO")
        #[arg(long)]
        ticker: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let allowlist_path = cli
        .allowlist
        .unwrap_or_else(|| env_or("ESG_ALLOWLIST", "allowlist.toml"));
    let allowlist = load_allowlist_path(&allowlist_path)?;

    // Credentials come from ESG_SOURCE_URL / ESG_SOURCE_KEY.
    let source = RestSource::from_env()?;

    match cli.cmd {
        Cmd::Overview => {
            let overview = assemble_overview(&source, &allowlist).await?;
            for (sector, profiles) in &overview.sectors {
                println!("Sector: {sector}");
                for p in profiles {
                    println!(
                        "  {:<10} {:<28} E {:>5.1}  S {:>5.1}  G {:>5.1}  total {:>5.1}",
                        p.company.ticker,
                        p.company.name,
                        p.scores.environmental,
                        p.scores.social,
                        p.scores.governance,
                        p.scores.total,
                    );
                }
            }
            println!();
            print_series("Sector averages (total ESG)", &overview.sector_series);
            print_axis(overview.sector_axis);
        }
        Cmd::Company { ticker } => {
            let detail = assemble_detail(&source, &allowlist, &ticker).await?;
            println!("{}", detail.company.name.to_uppercase());
            println!("Sector: {}", detail.company.sector);
            println!(
                "E {:.0}/100  S {:.0}/100  G {:.0}/100  T {:.0}/100",
                detail.scores.environmental,
                detail.scores.social,
                detail.scores.governance,
                detail.scores.total,
            );
            println!();
            println!("Business summary: {}", detail.narrative.business_summary);
            println!("ESG breakdown:    {}", detail.narrative.esg_breakdown);
            println!("Outlook:          {}", detail.narrative.outlook);

            if !detail.articles.is_empty() {
                println!();
                println!("Latest news:");
                for article in &detail.articles {
                    let stamp = published_stamp(article.published.as_deref());
                    println!("  [{} {}] {}", stamp.date, stamp.time, article.title);
                }
            }

            println!();
            print_series("Peer total scores", &detail.peer_series.total);
            print_series("Sector averages (total ESG)", &detail.sector_series);
            print_axis(detail.sector_axis);
        }
    }

    Ok(())
}

fn print_series(title: &str, series: &ChartSeries) {
    println!("{title}:");
    if series.is_empty() {
        println!("  (no data)");
        return;
    }
    for point in &series.points {
        println!("  {:<24} {}", point.label, point.display);
    }
}

fn print_axis(axis: AxisRange) {
    match axis {
        AxisRange::Auto => println!("Axis: auto"),
        AxisRange::Bounds { min, max } => println!("Axis: {min} to {max}"),
    }
}
