//! Exhaustive game-tree search for the Hard bot.
//!
//! O is always the maximizing side and X the minimizing side. Terminal scores
//! are not discounted by depth, so among equally scored moves the lowest index
//! is kept.

use super::board::Board;
use super::types::{GameOutcome, Player};
use super::win_detector::evaluate;

pub const O_WIN_SCORE: i32 = 10;
pub const X_WIN_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    /// `None` when the board is already terminal.
    pub best_move: Option<usize>,
}

impl SearchResult {
    fn terminal(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

pub fn terminal_score(outcome: &GameOutcome) -> Option<i32> {
    match outcome {
        GameOutcome::Win(line) => Some(match line.player {
            Player::O => O_WIN_SCORE,
            Player::X => X_WIN_SCORE,
        }),
        GameOutcome::Draw => Some(DRAW_SCORE),
        GameOutcome::InProgress => None,
    }
}

/// Scores `board` with `maximizing` choosing whether O (true) or X moves next.
pub fn search(board: &Board, maximizing: bool) -> SearchResult {
    minimax(board, maximizing, i32::MIN, i32::MAX)
}

// Alpha-beta only cuts branches that cannot beat a strictly better score found
// earlier, so the root score and root move match a plain minimax.
fn minimax(board: &Board, maximizing: bool, mut alpha: i32, mut beta: i32) -> SearchResult {
    if let Some(score) = terminal_score(&evaluate(board)) {
        return SearchResult::terminal(score);
    }

    let mover = if maximizing { Player::O } else { Player::X };
    let mut best = SearchResult {
        score: if maximizing { i32::MIN } else { i32::MAX },
        best_move: None,
    };

    for index in board.available_moves() {
        let Ok(child) = board.with_move(index, mover) else {
            continue;
        };
        let score = minimax(&child, !maximizing, alpha, beta).score;

        if maximizing {
            if score > best.score {
                best = SearchResult {
                    score,
                    best_move: Some(index),
                };
            }
            alpha = alpha.max(score);
        } else {
            if score < best.score {
                best = SearchResult {
                    score,
                    best_move: Some(index),
                };
            }
            beta = beta.min(score);
        }

        if beta <= alpha {
            break;
        }
    }

    best
}
