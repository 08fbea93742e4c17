//! PGN reading — streaming visitor over multi-game archive files.
//!
//! Mainline only: variations are skipped, comments and NAGs dropped. A game
//! with garbage movetext still comes out as a record; the bad SAN tokens
//! surface as replay errors, which callers count and skip.

use std::fs::File;
use std::io::BufReader;
use std::mem;
use std::ops::ControlFlow;
use std::path::Path;

use pgn_reader::{RawTag, Reader, SanPlus, Skip, Visitor};

use crate::error::CoreError;
use crate::game_data::{GameHeaders, GameRecord};

/// Visitor that builds one `GameRecord` per game.
pub struct GameCollector {
    headers: GameHeaders,
}

impl GameCollector {
    pub fn new() -> Self {
        Self {
            headers: GameHeaders::default(),
        }
    }
}

impl Visitor for GameCollector {
    type Tags = ();
    type Movetext = Vec<String>;
    type Output = GameRecord;

    fn begin_tags(&mut self) -> ControlFlow<Self::Output, Self::Tags> {
        self.headers = GameHeaders::default();
        ControlFlow::Continue(())
    }

    fn tag(
        &mut self,
        _tags: &mut Self::Tags,
        name: &[u8],
        value: RawTag<'_>,
    ) -> ControlFlow<Self::Output> {
        let value = value.decode_utf8_lossy().into_owned();
        match name {
            b"White" => self.headers.white = value,
            b"Black" => self.headers.black = value,
            b"Result" => self.headers.result = value,
            b"Date" => self.headers.date = Some(value),
            b"Round" => self.headers.round = Some(value),
            b"WhiteElo" => self.headers.white_elo = Some(value),
            b"BlackElo" => self.headers.black_elo = Some(value),
            b"Event" => self.headers.event = Some(value),
            _ => {}
        }
        ControlFlow::Continue(())
    }

    fn begin_movetext(&mut self, _tags: Self::Tags) -> ControlFlow<Self::Output, Self::Movetext> {
        ControlFlow::Continue(Vec::new())
    }

    fn begin_variation(&mut self, _movetext: &mut Self::Movetext) -> ControlFlow<Self::Output, Skip> {
        ControlFlow::Continue(Skip(true))
    }

    fn san(&mut self, movetext: &mut Self::Movetext, san: SanPlus) -> ControlFlow<Self::Output> {
        movetext.push(san.to_string());
        ControlFlow::Continue(())
    }

    fn end_game(&mut self, movetext: Self::Movetext) -> Self::Output {
        GameRecord {
            headers: mem::take(&mut self.headers),
            moves: movetext,
        }
    }
}

/// Read every game in a PGN file.
pub fn read_games(path: impl AsRef<Path>) -> Result<Vec<GameRecord>, CoreError> {
    let file = File::open(path.as_ref())?;
    let mut reader = Reader::new(BufReader::new(file));
    collect_games(&mut reader)
}

/// Read every game from in-memory PGN text.
pub fn parse_games(pgn: &str) -> Result<Vec<GameRecord>, CoreError> {
    let mut reader = Reader::new(pgn.as_bytes());
    collect_games(&mut reader)
}

fn collect_games<R: std::io::Read>(reader: &mut Reader<R>) -> Result<Vec<GameRecord>, CoreError> {
    let mut collector = GameCollector::new();
    let mut games = Vec::new();
    while let Some(game) = reader.read_game(&mut collector)? {
        games.push(game);
    }
    Ok(games)
}
