use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

#[allow(dead_code)]
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Generate a unique suffix based on timestamp to avoid collisions.
#[allow(dead_code)]
pub fn unique_suffix() -> String {
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{}", ts % 1_000_000_000)
}

/// Fresh scratch directory under the system temp dir.
#[allow(dead_code)]
pub fn scratch_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("mate-dataset-{label}-{}", unique_suffix()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// 1. f3 e5 2. g4 Qh4# — the fastest possible mate, delivered by black.
pub fn fools_mate_pgn(white: &str, date: &str, round: &str) -> String {
    format!(
        "[Event \"Casual\"]\n[Date \"{date}\"]\n[Round \"{round}\"]\n\
         [White \"{white}\"]\n[Black \"Smith\"]\n[Result \"0-1\"]\n\n\
         1. f3 e5 2. g4 Qh4# 0-1\n"
    )
}

/// 1. e4 e5 2. Bc4 Nc6 3. Qh5 Nf6 4. Qxf7# — white mates in seven plies.
#[allow(dead_code)]
pub fn scholars_mate_pgn() -> String {
    "[Event \"Exhibition\"]\n[Date \"1997.07.01\"]\n[Round \"5\"]\n\
     [White \"Morris\"]\n[Black \"Lane\"]\n[Result \"1-0\"]\n\
     [WhiteElo \"2550\"]\n\n\
     1. e4 e5 2. Bc4 Nc6 3. Qh5 Nf6 4. Qxf7# 1-0\n"
        .to_string()
}

/// A short agreed draw; no checkmate on the board.
pub fn quiet_draw_pgn() -> String {
    "[Event \"Casual\"]\n[White \"Adams\"]\n[Black \"Baker\"]\n[Result \"1/2-1/2\"]\n\n\
     1. e4 e5 1/2-1/2\n"
        .to_string()
}
