use clap::Parser;
use investx_engine::{Advisor, Period, ProductCount, Query, RiskProfile};
use investx_core::Weighting;
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// A small investment-product recommender
#[derive(Parser, Debug)]
#[command(name = "investx")]
#[command(about = "Recommend investment products for a risk profile, amount, and horizon", long_about = None)]
struct Args {
    /// Semicolon-delimited product files
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Risk profile
    #[arg(long, value_enum)]
    profile: RiskProfile,

    /// Investment amount (0 to 300000)
    #[arg(long)]
    amount: f64,

    /// Number of recommended products (1 to 5)
    #[arg(long, value_parser = parse_product_count)]
    products: ProductCount,

    /// Investment horizon
    #[arg(long, value_enum)]
    period: Period,

    /// Term weighting: tf or tfidf
    #[arg(long, default_value = "tf")]
    weighting: String,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn parse_product_count(input: &str) -> Result<ProductCount, String> {
    let count = ProductCount::parse(input).map_err(|e| e.to_string())?;
    if count.get() > 5 {
        return Err(format!("{} exceeds the maximum of 5 products", count));
    }
    Ok(count)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let weighting = match args.weighting.as_str() {
        "tfidf" => Weighting::TfIdf,
        _ => Weighting::TermFrequency,
    };

    info!("Starting investX v{}", env!("CARGO_PKG_VERSION"));
    info!("Input files: {}", args.files.len());

    let query = Query::new(args.profile, args.amount, args.products, args.period)?;

    let advisor = Advisor::new();
    let skipped = advisor.process(&args.files, weighting)?;
    if skipped > 0 {
        warn!("{} file(s) were skipped as unreadable", skipped);
    }

    let recommendation = advisor.recommend(&query)?;
    println!("{}", recommendation.summary);

    Ok(())
}
