//! Curation: keep checkmate finishes, deduplicate, cap with stride sampling.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use chess_core::game_data::{GameKey, GameRecord};
use chess_core::{pgn, replay};

use crate::error::PipelineError;

#[derive(Debug, Default)]
pub struct CurateSummary {
    pub files: usize,
    pub games_seen: usize,
    pub checkmates_kept: usize,
    pub skipped: usize,
    pub written: usize,
}

/// Sorted `*.pgn` files under the raw directory.
pub fn raw_pgn_files(raw_dir: &Path) -> Result<Vec<PathBuf>, PipelineError> {
    let pattern = format!("{}/*.pgn", raw_dir.display());
    let mut files: Vec<PathBuf> = glob::glob(&pattern)?.filter_map(|p| p.ok()).collect();
    files.sort();
    Ok(files)
}

/// Keep games that end in checkmate and have not been seen before.
/// Unreplayable games are counted as skipped. First occurrence of a
/// (white, black, date, round) key wins.
pub fn filter_new_checkmates(
    records: Vec<GameRecord>,
    seen: &mut HashSet<GameKey>,
    summary: &mut CurateSummary,
) -> Vec<GameRecord> {
    let mut kept = Vec::new();

    for record in records {
        match replay::ends_in_checkmate(&record) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(e) => {
                warn!(white = %record.headers.white, black = %record.headers.black,
                      error = %e, "skipping game that does not replay");
                summary.skipped += 1;
                continue;
            }
        }
        if !seen.insert(GameKey::from_record(&record)) {
            continue;
        }
        kept.push(record);
    }

    kept
}

/// Filter + dedup pass over the raw files.
pub fn collect_checkmate_games(
    files: &[PathBuf],
) -> Result<(Vec<GameRecord>, CurateSummary), PipelineError> {
    let mut seen = HashSet::new();
    let mut games = Vec::new();
    let mut summary = CurateSummary {
        files: files.len(),
        ..Default::default()
    };

    for path in files {
        let records = pgn::read_games(path)?;
        let file_games = records.len();
        summary.games_seen += file_games;

        let kept = filter_new_checkmates(records, &mut seen, &mut summary);
        info!(file = %path.display(), games = file_games, checkmates = kept.len(),
              "scanned archive file");
        games.extend(kept);
    }

    summary.checkmates_kept = games.len();
    Ok((games, summary))
}

/// Deterministic order-preserving downsample: index floor(i * len / cap)
/// for i in 0..cap. Always keeps the first item.
pub fn stride_sample<T: Clone>(items: &[T], cap: usize) -> Vec<T> {
    if cap == 0 || items.len() <= cap {
        return items.to_vec();
    }
    let len = items.len();
    (0..cap).map(|i| items[i * len / cap].clone()).collect()
}

/// Full curation stage: scan, dedup, cap, write the curated PGN.
pub fn curate(
    raw_dir: &Path,
    curated_path: &Path,
    cap: usize,
) -> Result<CurateSummary, PipelineError> {
    let files = raw_pgn_files(raw_dir)?;
    info!(count = files.len(), dir = %raw_dir.display(), "found raw PGN files");

    let (games, mut summary) = collect_checkmate_games(&files)?;
    info!(total = games.len(), "checkmate games before cap");

    let selected = stride_sample(&games, cap);

    if let Some(parent) = curated_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut out = String::new();
    for game in &selected {
        out.push_str(&game.to_pgn());
        out.push('\n');
    }
    fs::write(curated_path, out)?;

    summary.written = selected.len();
    Ok(summary)
}
