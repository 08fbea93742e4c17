//! Build the JSON dataset from the curated PGN.

use mate_dataset::config::Config;
use mate_dataset::export;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let _ = dotenvy::dotenv();

    let config = Config::from_env();
    let (records, summary) = export::export(
        &config.curated_path,
        &config.dataset_path,
        config.positions_per_game,
    )?;

    println!("Games written: {}", summary.written);
    println!("Games skipped: {}", summary.skipped);
    if let Some(first) = records.first() {
        println!(
            "Sample: {} vs {} ({}) month={} round={} mateBy={}",
            first.white,
            first.black,
            first.year,
            first.month.as_deref().unwrap_or("None"),
            first.round.as_deref().unwrap_or("None"),
            first.mate_by
        );
    }

    Ok(())
}
