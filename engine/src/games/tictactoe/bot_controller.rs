use crate::games::SessionRng;
use super::board::Board;
use super::minimax::search;
use super::types::{Difficulty, Player};
use super::win_detector::check_win_with_line;

/// Picks the computer's move. The computer always plays O.
pub fn select_move(board: &Board, difficulty: Difficulty, rng: &mut SessionRng) -> Option<usize> {
    select_move_for(board, difficulty, Player::O, rng)
}

/// Picks a move for `bot` at the given difficulty. Returns `None` only when
/// the board has no empty cell.
pub fn select_move_for(
    board: &Board,
    difficulty: Difficulty,
    bot: Player,
    rng: &mut SessionRng,
) -> Option<usize> {
    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return None;
    }

    match difficulty {
        Difficulty::Easy => calculate_random_move(&available_moves, rng),
        Difficulty::Medium => calculate_heuristic_move(board, bot, &available_moves, rng),
        Difficulty::Hard => calculate_minimax_move(board, bot),
    }
}

fn calculate_random_move(available_moves: &[usize], rng: &mut SessionRng) -> Option<usize> {
    rng.choose(available_moves).copied()
}

fn calculate_heuristic_move(
    board: &Board,
    bot: Player,
    available_moves: &[usize],
    rng: &mut SessionRng,
) -> Option<usize> {
    find_winning_move(board, bot, available_moves)
        .or_else(|| find_winning_move(board, bot.opponent(), available_moves))
        .or_else(|| calculate_random_move(available_moves, rng))
}

fn calculate_minimax_move(board: &Board, bot: Player) -> Option<usize> {
    search(board, bot == Player::O).best_move
}

/// First cell, in ascending order, where `player` would complete a line.
fn find_winning_move(board: &Board, player: Player, moves: &[usize]) -> Option<usize> {
    moves.iter().copied().find(|&index| {
        board
            .with_move(index, player)
            .ok()
            .and_then(|next| check_win_with_line(&next))
            .is_some_and(|line| line.player == player)
    })
}
