//! Integration tests: end-to-end JSON export from a curated PGN.

mod common;

use std::fs;

use mate_dataset::export;
use serde_json::Value;

#[test]
fn exports_json_with_normalized_metadata() {
    let dir = common::scratch_dir("export");
    let curated = dir.join("curated.pgn");
    let out = dir.join("games.json");

    let mut pgn = String::new();
    pgn.push_str(&common::fools_mate_pgn("Petrov", "1984.??.15", "?"));
    pgn.push('\n');
    pgn.push_str(&common::scholars_mate_pgn());
    pgn.push('\n');
    pgn.push_str(&common::quiet_draw_pgn());
    fs::write(&curated, pgn).unwrap();

    let (records, summary) = export::export(&curated, &out, 12).unwrap();
    assert_eq!(summary.written, 2);
    assert_eq!(summary.skipped, 1);
    assert_eq!(records.len(), 2);

    let text = fs::read_to_string(&out).unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), 2);

    let first = &array[0];
    assert_eq!(first["white"], "Petrov");
    assert_eq!(first["whiteElo"], "?");
    assert_eq!(first["tournament"], "Casual");
    assert_eq!(first["year"], 1984);
    assert!(first["month"].is_null());
    assert!(first["round"].is_null());
    assert_eq!(first["mateBy"], "black");
    assert_eq!(first["positions"].as_array().unwrap().len(), 12);

    let second = &array[1];
    assert_eq!(second["white"], "Morris");
    assert_eq!(second["whiteElo"], "2550");
    assert_eq!(second["blackElo"], "?");
    assert_eq!(second["month"], "July");
    assert_eq!(second["round"], "5");
    assert_eq!(second["mateBy"], "white");

    // human-readable indentation
    assert!(text.contains("\n  "));

    fs::remove_dir_all(&dir).ok();
}
