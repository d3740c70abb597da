use serde::{Deserialize, Serialize};
use std::fmt;

pub const BOARD_SIZE: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn mark(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark().symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Human plays X, the computer answers as O.
    SinglePlayer(Difficulty),
    TwoPlayer,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::SinglePlayer(Difficulty::default())
    }
}

impl GameMode {
    pub fn computer_difficulty(self) -> Option<Difficulty> {
        match self {
            GameMode::SinglePlayer(difficulty) => Some(difficulty),
            GameMode::TwoPlayer => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(player: Player, cells: [usize; 3]) -> Self {
        Self { player, cells }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Win(WinningLine),
    Draw,
}

impl GameOutcome {
    pub fn is_finished(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Win(line) => Some(line.player),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<&WinningLine> {
        match self {
            GameOutcome::Win(line) => Some(line),
            _ => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::InProgress => f.write_str("in progress"),
            GameOutcome::Win(line) => write!(
                f,
                "{} wins on {}-{}-{}",
                line.player, line.cells[0], line.cells[1], line.cells[2]
            ),
            GameOutcome::Draw => f.write_str("draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_mark_and_owner_agree() {
        for player in [Player::X, Player::O] {
            assert_eq!(player.mark().owner(), Some(player));
        }
        assert_eq!(Cell::Empty.owner(), None);
    }

    #[test]
    fn test_default_mode_is_single_player_easy() {
        assert_eq!(GameMode::default(), GameMode::SinglePlayer(Difficulty::Easy));
        assert_eq!(GameMode::TwoPlayer.computer_difficulty(), None);
    }

    #[test]
    fn test_outcome_display() {
        let win = GameOutcome::Win(WinningLine::new(Player::O, [2, 4, 6]));
        assert_eq!(win.to_string(), "O wins on 2-4-6");
        assert_eq!(GameOutcome::Draw.to_string(), "draw");
        assert!(win.is_finished());
        assert!(!GameOutcome::InProgress.is_finished());
    }
}
