use crate::games::SessionRng;
use super::board::Board;
use super::bot_controller::select_move;
use super::error::InvalidMove;
use super::types::{GameMode, GameOutcome, Player};
use super::win_detector::evaluate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingMove(Player),
    Finished(GameOutcome),
}

/// What a single `apply_human_move` call did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub human_move: usize,
    pub computer_move: Option<usize>,
    pub outcome: GameOutcome,
}

/// One game of tic-tac-toe. X always moves first.
///
/// In single-player mode the human plays X and the computer's answer is
/// applied inside the same `apply_human_move` call, so callers never observe
/// a board where the computer is still to move.
#[derive(Debug)]
pub struct GameSession {
    board: Board,
    current_player: Player,
    mode: GameMode,
    last_move: Option<usize>,
    move_count: usize,
    rng: SessionRng,
}

impl GameSession {
    pub fn new(mode: GameMode, rng: SessionRng) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            mode,
            last_move: None,
            move_count: 0,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Recomputed from the board on every call.
    pub fn outcome(&self) -> GameOutcome {
        evaluate(&self.board)
    }

    pub fn state(&self) -> SessionState {
        match self.outcome() {
            GameOutcome::InProgress => SessionState::AwaitingMove(self.current_player),
            outcome => SessionState::Finished(outcome),
        }
    }

    /// Applies the current mover's mark at `index`, then the computer's reply
    /// when one is due. On error nothing changes.
    pub fn apply_human_move(&mut self, index: usize) -> Result<MoveReport, InvalidMove> {
        if self.outcome().is_finished() {
            return Err(InvalidMove::GameFinished);
        }

        let outcome = self.place(index)?;
        let mut report = MoveReport {
            human_move: index,
            computer_move: None,
            outcome,
        };

        if outcome.is_finished() {
            return Ok(report);
        }

        if let Some(difficulty) = self.mode.computer_difficulty()
            && self.current_player == Player::O
            && let Some(reply) = select_move(&self.board, difficulty, &mut self.rng)
        {
            report.outcome = self.place(reply)?;
            report.computer_move = Some(reply);
        }

        Ok(report)
    }

    /// Takes effect from the next move; the board is kept.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = Player::X;
        self.last_move = None;
        self.move_count = 0;
    }

    fn place(&mut self, index: usize) -> Result<GameOutcome, InvalidMove> {
        self.board = self.board.with_move(index, self.current_player)?;
        self.last_move = Some(index);
        self.move_count += 1;

        let outcome = evaluate(&self.board);
        if !outcome.is_finished() {
            self.current_player = self.current_player.opponent();
        }
        Ok(outcome)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameMode::default(), SessionRng::from_random())
    }
}
