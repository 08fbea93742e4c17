use std::fmt::Write;

use serde::{Deserialize, Serialize};

/// Header tags kept from a PGN game. Missing name tags read as "?",
/// matching how archive files mark unknown players.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameHeaders {
    pub white: String,
    pub black: String,
    pub result: String, // "1-0", "0-1", "1/2-1/2", "*"
    pub date: Option<String>,
    pub round: Option<String>,
    pub white_elo: Option<String>,
    pub black_elo: Option<String>,
    pub event: Option<String>,
}

impl Default for GameHeaders {
    fn default() -> Self {
        Self {
            white: "?".to_string(),
            black: "?".to_string(),
            result: "*".to_string(),
            date: None,
            round: None,
            white_elo: None,
            black_elo: None,
            event: None,
        }
    }
}

/// One complete game: headers plus the mainline in SAN notation
/// (check/mate suffixes included). Immutable once parsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub headers: GameHeaders,
    pub moves: Vec<String>,
}

impl GameRecord {
    /// Render back to PGN for the curated output file: seven-tag roster,
    /// Elo tags when present, numbered single-line movetext.
    pub fn to_pgn(&self) -> String {
        let h = &self.headers;
        let mut out = String::new();
        let _ = writeln!(out, "[Event \"{}\"]", tag_escape(h.event.as_deref().unwrap_or("?")));
        let _ = writeln!(out, "[Site \"?\"]");
        let _ = writeln!(out, "[Date \"{}\"]", tag_escape(h.date.as_deref().unwrap_or("????.??.??")));
        let _ = writeln!(out, "[Round \"{}\"]", tag_escape(h.round.as_deref().unwrap_or("?")));
        let _ = writeln!(out, "[White \"{}\"]", tag_escape(&h.white));
        let _ = writeln!(out, "[Black \"{}\"]", tag_escape(&h.black));
        let _ = writeln!(out, "[Result \"{}\"]", tag_escape(&h.result));
        if let Some(elo) = &h.white_elo {
            let _ = writeln!(out, "[WhiteElo \"{}\"]", tag_escape(elo));
        }
        if let Some(elo) = &h.black_elo {
            let _ = writeln!(out, "[BlackElo \"{}\"]", tag_escape(elo));
        }
        out.push('\n');

        let mut movetext = String::new();
        for (ply, san) in self.moves.iter().enumerate() {
            if !movetext.is_empty() {
                movetext.push(' ');
            }
            if ply % 2 == 0 {
                let _ = write!(movetext, "{}. ", ply / 2 + 1);
            }
            movetext.push_str(san);
        }
        if !movetext.is_empty() {
            movetext.push(' ');
        }
        movetext.push_str(&h.result);
        out.push_str(&movetext);
        out.push('\n');
        out
    }
}

/// Composite identity used to deduplicate games across archive files.
/// Whitespace-trimmed; absent date/round read as "?".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameKey {
    pub white: String,
    pub black: String,
    pub date: String,
    pub round: String,
}

impl GameKey {
    pub fn from_record(record: &GameRecord) -> Self {
        let h = &record.headers;
        Self {
            white: h.white.trim().to_string(),
            black: h.black.trim().to_string(),
            date: h.date.as_deref().unwrap_or("?").trim().to_string(),
            round: h.round.as_deref().unwrap_or("?").trim().to_string(),
        }
    }
}

fn tag_escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
