use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use coinscope::catalog;
use coinscope::config::Config;
use coinscope::market::{MarketFeed, MarketQuote, FALLBACK_SOURCE};
use coinscope::model::Timeframe;
use coinscope::report::ReportBuilder;
use coinscope::watchlist;

const USAGE: &str = "usage:
  coinscope report <asset> [timeframe] [points] [seed]
  coinscope search <query>
  coinscope watch list|add <asset>|remove <asset>|clear
  coinscope timeframes";

#[tokio::main]
async fn main() -> Result<()> {
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {:#}", e);
            std::process::exit(1);
        }
    };

    // stdout carries the JSON output, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                config
                    .logging
                    .level
                    .parse()
                    .unwrap_or_else(|_| "info".into())
            }),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .json()
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    match args.as_slice() {
        ["report", asset, rest @ ..] => run_report(&config, asset, rest).await,
        ["search", query] => run_search(query),
        ["watch", rest @ ..] => run_watch(rest),
        ["timeframes"] => run_timeframes(),
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    }
}

async fn run_report(config: &Config, asset: &str, rest: &[&str]) -> Result<()> {
    let timeframe = match rest.first() {
        Some(token) => Timeframe::parse(token)?,
        None => config.chart.default_timeframe,
    };
    let points = rest
        .get(1)
        .map(|s| s.parse::<usize>())
        .transpose()
        .context("points must be a positive integer")?;
    let seed = rest
        .get(2)
        .map(|s| s.parse::<u64>())
        .transpose()
        .context("seed must be an unsigned integer")?
        .or(config.chart.seed);

    let mut feed = MarketFeed::new(config.market.clone())?;
    let resolved = feed.resolve(asset).await?;
    tracing::info!(
        asset = %resolved.quote.id,
        source = %resolved.quote.source,
        price = resolved.snapshot.current_price,
        timeframe = %timeframe,
        "Building chart report"
    );

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let builder = ReportBuilder::new(
        config.generator.clone(),
        config.indicators.clone(),
        config.patterns.clone(),
    );
    let report = builder.build(&resolved, timeframe, points, &mut rng)?;
    if let Some(summary) = &report.summary {
        tracing::info!(
            rsi = summary.rsi,
            zone = %summary.rsi_zone,
            patterns = report.patterns.len(),
            "Report ready"
        );
    }

    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("failed to serialize report")?
    );
    Ok(())
}

fn run_search(query: &str) -> Result<()> {
    let hits: Vec<MarketQuote> = catalog::search(query)
        .into_iter()
        .map(|a| MarketQuote::from_catalog(a, FALLBACK_SOURCE))
        .collect();
    println!("{}", serde_json::to_string_pretty(&hits)?);
    Ok(())
}

fn run_watch(args: &[&str]) -> Result<()> {
    let mut list = watchlist::load_watchlist()?;
    match args {
        [] | ["list"] => {
            println!("{}", serde_json::to_string_pretty(list.items())?);
            return Ok(());
        }
        ["add", asset] => {
            let Some(info) = catalog::find(asset) else {
                bail!("unknown asset '{}'", asset);
            };
            let now = chrono::Utc::now().timestamp_millis();
            if !list.add(info.id, info.symbol, info.name, now) {
                tracing::info!(asset = info.id, "Already on watchlist");
            }
        }
        ["remove", asset] => {
            let id = catalog::find(asset).map(|a| a.id).unwrap_or(*asset);
            if !list.remove(id) {
                tracing::info!(asset = id, "Not on watchlist");
            }
        }
        ["clear"] => list.clear(),
        _ => bail!("{}", USAGE),
    }
    watchlist::persist_watchlist(&list)?;
    println!("{}", serde_json::to_string_pretty(list.items())?);
    Ok(())
}

fn run_timeframes() -> Result<()> {
    for tf in Timeframe::all() {
        println!(
            "{:<5} {:<16} points={}",
            tf.to_string(),
            tf.label(),
            tf.default_point_count()
        );
    }
    Ok(())
}
