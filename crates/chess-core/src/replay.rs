//! Move replay and checkmate snapshot extraction.

use shakmaty::fen::Fen;
use shakmaty::san::SanPlus;
use shakmaty::{Chess, Color, EnPassantMode, Position};

use crate::error::CoreError;
use crate::game_data::GameRecord;

/// The trailing positions of a mating game, oldest first, ending at the
/// checkmate itself. Games shorter than the requested count are front-padded
/// with the initial position.
#[derive(Debug, Clone)]
pub struct MateSnapshots {
    pub mate_by: Color,
    pub positions: Vec<String>,
}

/// Replay the mainline from the standard initial position. Returns every
/// reached position, so the result has move-count + 1 entries with the
/// initial position first.
pub fn replay_positions(record: &GameRecord) -> Result<Vec<Chess>, CoreError> {
    let mut sequence = Vec::with_capacity(record.moves.len() + 1);
    let mut pos = Chess::default();
    sequence.push(pos.clone());

    for (ply, token) in record.moves.iter().enumerate() {
        let san: SanPlus = token
            .parse()
            .map_err(|_| CoreError::InvalidSan(token.clone()))?;
        let mv = san.san.to_move(&pos).map_err(|_| CoreError::IllegalMove {
            san: token.clone(),
            ply,
        })?;
        pos = pos.play(mv).map_err(|_| CoreError::IllegalMove {
            san: token.clone(),
            ply,
        })?;
        sequence.push(pos.clone());
    }

    Ok(sequence)
}

/// FEN snapshot of a position.
pub fn snapshot(pos: &Chess) -> String {
    Fen::from_position(pos, EnPassantMode::Legal).to_string()
}

/// Whether the game's final position is checkmate.
pub fn ends_in_checkmate(record: &GameRecord) -> Result<bool, CoreError> {
    let sequence = replay_positions(record)?;
    Ok(sequence[sequence.len() - 1].is_checkmate())
}

/// Extract the last `count` snapshots of a mating game.
///
/// Returns None when the final position is not checkmate. The side to move
/// there is the mated side, so the mating side is its opposite.
/// `positions[count - 1]` is the mate itself and `positions[i]` is the state
/// `count - 1 - i` plies earlier, clamped to the initial position for games
/// shorter than `count` plies.
pub fn mate_snapshots(
    record: &GameRecord,
    count: usize,
) -> Result<Option<MateSnapshots>, CoreError> {
    let sequence = replay_positions(record)?;
    let final_pos = &sequence[sequence.len() - 1];
    if !final_pos.is_checkmate() {
        return Ok(None);
    }

    let mate_by = final_pos.turn().other();
    let total = record.moves.len();
    let mut positions = Vec::with_capacity(count);
    for i in 0..count {
        let back = count - 1 - i;
        let idx = total.saturating_sub(back);
        positions.push(snapshot(&sequence[idx]));
    }

    Ok(Some(MateSnapshots { mate_by, positions }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_data::{GameHeaders, GameRecord};

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    const AFTER_F3_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/5P2/PPPPP1PP/RNBQKBNR b KQkq - 0 1";
    const FOOLS_MATE_FEN: &str = "rnbqkbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";

    fn record(moves: &[&str]) -> GameRecord {
        GameRecord {
            headers: GameHeaders::default(),
            moves: moves.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn fools_mate() -> GameRecord {
        record(&["f3", "e5", "g4", "Qh4#"])
    }

    #[test]
    fn test_replay_counts_positions() {
        let sequence = replay_positions(&fools_mate()).unwrap();
        assert_eq!(sequence.len(), 5);
        assert_eq!(snapshot(&sequence[0]), START_FEN);
        assert!(sequence[4].is_checkmate());
    }

    #[test]
    fn test_mate_by_is_opposite_of_side_to_move() {
        // White to move in the final position, so black delivered the mate.
        let snaps = mate_snapshots(&fools_mate(), 4).unwrap().unwrap();
        assert_eq!(snaps.mate_by, Color::Black);
    }

    #[test]
    fn test_game_of_exactly_count_plies() {
        let snaps = mate_snapshots(&fools_mate(), 4).unwrap().unwrap();
        assert_eq!(snaps.positions.len(), 4);
        assert_eq!(snaps.positions[0], AFTER_F3_FEN);
        assert_eq!(snaps.positions[3], FOOLS_MATE_FEN);
    }

    #[test]
    fn test_short_game_pads_with_initial_position() {
        let snaps = mate_snapshots(&fools_mate(), 12).unwrap().unwrap();
        assert_eq!(snaps.positions.len(), 12);
        for fen in &snaps.positions[..8] {
            assert_eq!(fen, START_FEN);
        }
        assert_eq!(snaps.positions[8], AFTER_F3_FEN);
        assert_eq!(snaps.positions[11], FOOLS_MATE_FEN);
    }

    #[test]
    fn test_non_mate_game_yields_nothing() {
        assert!(mate_snapshots(&record(&["e4", "e5"]), 12).unwrap().is_none());
        assert!(!ends_in_checkmate(&record(&["e4", "e5"])).unwrap());
    }

    #[test]
    fn test_illegal_move_is_an_error() {
        let err = replay_positions(&record(&["e4", "e4"])).unwrap_err();
        assert!(matches!(err, CoreError::IllegalMove { ply: 1, .. }));
    }

    #[test]
    fn test_invalid_san_is_an_error() {
        let err = replay_positions(&record(&["zz9"])).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSan(_)));
    }
}
