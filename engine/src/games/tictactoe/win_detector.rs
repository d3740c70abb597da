use super::board::Board;
use super::types::{GameOutcome, WinningLine};

/// Rows, then columns, then the two diagonals. The first complete line in
/// this order is the one reported.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    WINNING_LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let player = cells[a].owner()?;
        (cells[a] == cells[b] && cells[b] == cells[c]).then(|| WinningLine::new(player, line))
    })
}

/// Win is checked before fullness, so a board filled by a winning move is a win.
pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some(line) = check_win_with_line(board) {
        return GameOutcome::Win(line);
    }
    if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::Player;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_is_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameOutcome::InProgress);
    }

    #[test]
    fn test_every_line_is_detected_for_both_players() {
        for line in WINNING_LINES {
            for player in [Player::X, Player::O] {
                let mut b = Board::new();
                for index in line {
                    b = b.with_move(index, player).unwrap();
                }
                assert_eq!(
                    evaluate(&b),
                    GameOutcome::Win(WinningLine::new(player, line)),
                    "line {:?} for {}",
                    line,
                    player
                );
            }
        }
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        assert_eq!(evaluate(&board("XOX XOO OXO")), GameOutcome::Draw);
    }

    #[test]
    fn test_win_takes_precedence_over_full_board() {
        let outcome = evaluate(&board("XOX OXO OXX"));
        assert_eq!(
            outcome,
            GameOutcome::Win(WinningLine::new(Player::X, [0, 4, 8]))
        );
    }

    #[test]
    fn test_first_line_in_order_wins_ties() {
        // Malformed board with two complete rows.
        let outcome = evaluate(&board("OOO XXX ..."));
        assert_eq!(
            outcome,
            GameOutcome::Win(WinningLine::new(Player::O, [0, 1, 2]))
        );
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        assert_eq!(evaluate(&board("XX. OO. ...")), GameOutcome::InProgress);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let b = board("XOX .O. X..");
        assert_eq!(evaluate(&b), evaluate(&b));
        assert_eq!(b, board("XOX .O. X.."));
    }
}
