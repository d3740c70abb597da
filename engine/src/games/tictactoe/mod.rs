mod board;
mod error;
mod game_state;
mod types;

pub mod bot_controller;
pub mod minimax;
pub mod win_detector;

pub use board::Board;
pub use bot_controller::{select_move, select_move_for};
pub use error::{BoardParseError, InvalidMove};
pub use game_state::{GameSession, MoveReport, SessionState};
pub use minimax::{DRAW_SCORE, O_WIN_SCORE, SearchResult, X_WIN_SCORE, search};
pub use types::{BOARD_SIZE, Cell, Difficulty, GameMode, GameOutcome, Player, WinningLine};
pub use win_detector::{WINNING_LINES, evaluate};
