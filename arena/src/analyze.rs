use tictactoe_engine::log;
use tictactoe_engine::SessionRng;
use tictactoe_engine::tictactoe::{
    Board, BoardParseError, Difficulty, GameOutcome, SearchResult, evaluate, search, select_move,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Analysis {
    pub board: Board,
    pub outcome: GameOutcome,
    pub search: SearchResult,
    pub medium_move: Option<usize>,
}

/// Scores a position from O's side. Medium's random fallback uses a fixed seed
/// so repeated runs agree.
pub fn analyze(position: &str) -> Result<Analysis, BoardParseError> {
    let board: Board = position.parse()?;
    let mut rng = SessionRng::new(0);

    Ok(Analysis {
        board,
        outcome: evaluate(&board),
        search: search(&board, true),
        medium_move: select_move(&board, Difficulty::Medium, &mut rng),
    })
}

pub fn log_analysis(analysis: &Analysis) {
    for row in analysis.board.to_string().lines() {
        log!("  {}", row);
    }
    log!("Outcome: {}", analysis.outcome);
    match analysis.search.best_move {
        Some(index) => log!("Hard: cell {} (score {})", index, analysis.search.score),
        None => log!("Hard: no move (score {})", analysis.search.score),
    }
    match analysis.medium_move {
        Some(index) => log!("Medium: cell {}", index),
        None => log!("Medium: no move"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::tictactoe::{DRAW_SCORE, O_WIN_SCORE, Player};

    #[test]
    fn test_analyze_empty_board() {
        let analysis = analyze("... ... ...").unwrap();
        assert_eq!(analysis.outcome, GameOutcome::InProgress);
        assert_eq!(analysis.search.score, DRAW_SCORE);
        assert!(analysis.medium_move.is_some());
    }

    #[test]
    fn test_analyze_forced_position() {
        let analysis = analyze("XX. OO. ...").unwrap();
        assert_eq!(analysis.search.best_move, Some(2));
        assert_eq!(analysis.search.score, O_WIN_SCORE);
        assert_eq!(analysis.medium_move, Some(5));
    }

    #[test]
    fn test_analyze_finished_board() {
        let analysis = analyze("XXX OO. ...").unwrap();
        assert_eq!(analysis.outcome.winner(), Some(Player::X));
        assert_eq!(analysis.search.best_move, None);
    }

    #[test]
    fn test_analyze_rejects_bad_board() {
        assert!(analyze("XOXO").is_err());
    }
}
