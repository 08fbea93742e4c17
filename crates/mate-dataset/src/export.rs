//! JSON dataset export: trailing snapshots of each mating game plus
//! normalized player and tournament metadata.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;
use shakmaty::Color;
use tracing::warn;

use chess_core::game_data::GameRecord;
use chess_core::{metadata, pgn, replay};

use crate::error::PipelineError;

/// One dataset entry, shaped for the frontend consumer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetRecord {
    pub white: String,
    pub black: String,
    pub white_elo: String,
    pub black_elo: String,
    pub tournament: String,
    pub year: i32,
    pub month: Option<String>,
    pub round: Option<String>,
    pub mate_by: String,
    pub positions: Vec<String>,
}

#[derive(Debug, Default)]
pub struct ExportSummary {
    pub written: usize,
    pub skipped: usize,
}

/// Build one record. None when the game does not end in checkmate.
pub fn dataset_record(
    record: &GameRecord,
    positions_per_game: usize,
) -> Result<Option<DatasetRecord>, PipelineError> {
    let Some(snaps) = replay::mate_snapshots(record, positions_per_game)? else {
        return Ok(None);
    };

    let h = &record.headers;
    let mate_by = match snaps.mate_by {
        Color::White => "white",
        Color::Black => "black",
    };

    Ok(Some(DatasetRecord {
        white: h.white.clone(),
        black: h.black.clone(),
        white_elo: metadata::elo_of(h.white_elo.as_deref()),
        black_elo: metadata::elo_of(h.black_elo.as_deref()),
        tournament: metadata::tournament_of(h.event.as_deref()),
        year: metadata::year_of(h.date.as_deref()),
        month: metadata::month_of(h.date.as_deref()).map(String::from),
        round: metadata::round_of(h.round.as_deref()),
        mate_by: mate_by.to_string(),
        positions: snaps.positions,
    }))
}

/// Convert every curated game, skipping non-mating or broken records.
pub fn build_records(
    games: &[GameRecord],
    positions_per_game: usize,
) -> (Vec<DatasetRecord>, ExportSummary) {
    let mut records = Vec::new();
    let mut summary = ExportSummary::default();

    for game in games {
        match dataset_record(game, positions_per_game) {
            Ok(Some(record)) => records.push(record),
            Ok(None) => summary.skipped += 1,
            Err(e) => {
                warn!(white = %game.headers.white, black = %game.headers.black,
                      error = %e, "skipping game that does not replay");
                summary.skipped += 1;
            }
        }
    }

    summary.written = records.len();
    (records, summary)
}

/// Full export stage: read the curated PGN, extract, write a pretty-printed
/// JSON array.
pub fn export(
    curated_path: &Path,
    dataset_path: &Path,
    positions_per_game: usize,
) -> Result<(Vec<DatasetRecord>, ExportSummary), PipelineError> {
    let games = pgn::read_games(curated_path)?;
    let (records, summary) = build_records(&games, positions_per_game);

    if let Some(parent) = dataset_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(dataset_path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), &records)?;

    Ok((records, summary))
}
