//! Fetch player archives from the upstream host into the raw directory.
//!
//! Already-downloaded files are skipped, so the command is safe to re-run
//! after a partial failure.

use mate_dataset::config::Config;
use mate_dataset::{curate, fetch};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let _ = dotenvy::dotenv();

    let config = Config::from_env();
    info!(
        dir = %config.raw_dir.display(),
        base_url = %config.archive_base_url,
        players = fetch::PLAYERS.len(),
        "fetching archives"
    );

    let summary = fetch::fetch_all(&config).await?;
    let total = curate::raw_pgn_files(&config.raw_dir)?.len();

    println!();
    println!(
        "Done. downloaded={}, skipped={}, failed={}",
        summary.downloaded, summary.skipped, summary.failed
    );
    println!("Total .pgn files in {}: {}", config.raw_dir.display(), total);

    Ok(())
}
