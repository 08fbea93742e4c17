//! Pipeline configuration from environment variables.

use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    /// Directory holding one raw PGN file per player
    pub raw_dir: PathBuf,

    /// Curated (checkmates-only, deduplicated, capped) PGN output
    pub curated_path: PathBuf,

    /// Final JSON dataset output
    pub dataset_path: PathBuf,

    /// Cap on curated games
    pub max_games: usize,

    /// Board snapshots exported per game
    pub positions_per_game: usize,

    /// Archive host serving <Player>.zip files
    pub archive_base_url: String,
}

impl Config {
    /// Load configuration from environment variables, with defaults that
    /// keep everything under data/.
    pub fn from_env() -> Self {
        Self {
            raw_dir: env::var("RAW_GAMES_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/raw")),
            curated_path: env::var("CURATED_PGN_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/curated_games.pgn")),
            dataset_path: env::var("DATASET_JSON_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/games.json")),
            max_games: env::var("MAX_CURATED_GAMES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(730),
            positions_per_game: env::var("POSITIONS_PER_GAME")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(12),
            archive_base_url: env::var("ARCHIVE_BASE_URL")
                .unwrap_or_else(|_| "https://www.pgnmentor.com/players/".to_string()),
        }
    }
}
