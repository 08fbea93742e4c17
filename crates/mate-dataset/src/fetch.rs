//! Archive fetching: one zip per player, extracted to `<raw_dir>/<player>.pgn`.

use std::fs;
use std::io::{Cursor, Read};
use std::time::Duration;

use reqwest::Client;
use tracing::{info, warn};
use zip::ZipArchive;

use crate::config::Config;
use crate::error::PipelineError;

/// Players whose archives make up the raw corpus.
pub const PLAYERS: &[&str] = &[
    "Kasparov", "Fischer", "Karpov", "Carlsen", "Anand",
    "Tal", "Botvinnik", "Morphy", "Capablanca", "Alekhine",
    "Kramnik", "Petrosian", "Spassky", "Bronstein", "Smyslov",
];

// The archive host rejects default library user agents.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const ATTEMPTS: u32 = 2;

#[derive(Debug, Default)]
pub struct FetchSummary {
    pub downloaded: u32,
    pub skipped: u32,
    pub failed: u32,
}

pub struct ArchiveClient {
    client: Client,
    base_url: String,
}

impl ArchiveClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap();
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    /// Fetch one player's zip and return the bytes of its first PGN entry.
    /// Ok(None) means the player has no usable archive (404 or a zip with no
    /// PGN inside) and retrying is pointless.
    async fn try_fetch(&self, player: &str) -> Result<Option<Vec<u8>>, PipelineError> {
        let url = format!("{}{}.zip", self.base_url, player);
        info!(%url, "fetching archive");

        let resp = self.client.get(&url).send().await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            warn!(player, "archive not found (404)");
            return Ok(None);
        }
        let resp = resp.error_for_status()?;
        let body = resp.bytes().await?;

        let mut archive = ZipArchive::new(Cursor::new(body.as_ref()))?;
        let pgn_name = archive
            .file_names()
            .find(|name| name.to_ascii_lowercase().ends_with(".pgn"))
            .map(|name| name.to_string());
        let Some(name) = pgn_name else {
            warn!(player, "zip contains no PGN entry");
            return Ok(None);
        };

        let mut entry = archive.by_name(&name)?;
        let mut bytes = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut bytes)?;
        Ok(Some(bytes))
    }

    /// Up to two attempts per player; a 404 or empty zip gives up immediately.
    pub async fn fetch_pgn(&self, player: &str) -> Option<Vec<u8>> {
        for attempt in 1..=ATTEMPTS {
            match self.try_fetch(player).await {
                Ok(result) => return result,
                Err(e) => warn!(player, attempt, error = %e, "fetch attempt failed"),
            }
        }
        None
    }
}

/// Fetch every player archive into the raw directory. Per-player failures
/// are counted, never fatal; already-present files are left alone.
pub async fn fetch_all(config: &Config) -> Result<FetchSummary, PipelineError> {
    fs::create_dir_all(&config.raw_dir)?;
    let client = ArchiveClient::new(&config.archive_base_url);
    let mut summary = FetchSummary::default();

    for player in PLAYERS {
        let out_path = config.raw_dir.join(format!("{player}.pgn"));
        if out_path.exists() {
            info!(player, "already fetched, skipping");
            summary.skipped += 1;
            continue;
        }

        // Rate limit
        tokio::time::sleep(Duration::from_millis(500)).await;

        match client.fetch_pgn(player).await {
            Some(bytes) => match fs::write(&out_path, &bytes) {
                Ok(()) => {
                    info!(player, path = %out_path.display(), "saved archive");
                    summary.downloaded += 1;
                }
                Err(e) => {
                    warn!(player, error = %e, "failed to write PGN file");
                    summary.failed += 1;
                }
            },
            None => summary.failed += 1,
        }
    }

    Ok(summary)
}
