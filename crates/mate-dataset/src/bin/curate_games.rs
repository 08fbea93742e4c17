//! Curate raw archives into a single deduplicated PGN of checkmate games.
//!
//! Usage: cargo run --release --bin curate-games -- [--raw-dir DIR] [--max-games N]

use std::env;

use mate_dataset::config::Config;
use mate_dataset::curate;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let _ = dotenvy::dotenv();

    let mut config = Config::from_env();

    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--raw-dir" => {
                if let Some(dir) = args.get(i + 1) {
                    config.raw_dir = dir.into();
                }
                i += 2;
            }
            "--max-games" => {
                config.max_games = args
                    .get(i + 1)
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(config.max_games);
                i += 2;
            }
            _ => i += 1,
        }
    }

    let summary = curate::curate(&config.raw_dir, &config.curated_path, config.max_games)?;

    println!();
    println!(
        "Scanned {} files, {} games, {} checkmates kept ({} skipped)",
        summary.files, summary.games_seen, summary.checkmates_kept, summary.skipped
    );
    println!(
        "Output: {} games written to {}",
        summary.written,
        config.curated_path.display()
    );

    Ok(())
}
