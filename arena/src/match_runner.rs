use std::fmt;
use tictactoe_engine::log;
use tictactoe_engine::SessionRng;
use tictactoe_engine::tictactoe::{
    Difficulty, GameMode, GameOutcome, GameSession, InvalidMove, Player, select_move_for,
};

use crate::arena_config::ArenaConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArenaReport {
    pub seed: u64,
    pub games: u32,
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl ArenaReport {
    fn record(&mut self, outcome: &GameOutcome) {
        self.games += 1;
        match outcome.winner() {
            Some(Player::X) => self.x_wins += 1,
            Some(Player::O) => self.o_wins += 1,
            None => self.draws += 1,
        }
    }
}

impl fmt::Display for ArenaReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games (seed {}): X won {}, O won {}, {} draws",
            self.games, self.seed, self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Plays `config.games` games. X is driven by a bot submitting moves as the
/// human player; O is the session's own computer opponent.
pub fn run_matches(config: &ArenaConfig) -> Result<ArenaReport, InvalidMove> {
    let mut rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let mut report = ArenaReport {
        seed: rng.seed(),
        ..ArenaReport::default()
    };

    log!(
        "Running {} games: X {} vs O {} (seed {})",
        config.games,
        config.x_difficulty,
        config.o_difficulty,
        report.seed
    );

    for game_index in 1..=config.games {
        let session_rng = SessionRng::new(rng.random_range(0..=u64::MAX));
        let mut session = GameSession::new(GameMode::SinglePlayer(config.o_difficulty), session_rng);
        let outcome = play_game(&mut session, config.x_difficulty, &mut rng)?;
        report.record(&outcome);

        if config.log_every > 0 && game_index % config.log_every == 0 {
            log!("Game {}/{}: {}", game_index, config.games, outcome);
        }
    }

    log!("{}", report);
    Ok(report)
}

pub fn play_game(
    session: &mut GameSession,
    x_difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Result<GameOutcome, InvalidMove> {
    while !session.outcome().is_finished() {
        let mover = session.current_player();
        let Some(index) = select_move_for(session.board(), x_difficulty, mover, rng) else {
            break;
        };
        session.apply_human_move(index)?;
    }
    Ok(session.outcome())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(games: u32, x: Difficulty, o: Difficulty) -> ArenaConfig {
        ArenaConfig {
            games,
            seed: Some(42),
            x_difficulty: x,
            o_difficulty: o,
            log_every: 0,
        }
    }

    #[test]
    fn test_tallies_add_up() {
        let report = run_matches(&config(30, Difficulty::Easy, Difficulty::Easy)).unwrap();
        assert_eq!(report.games, 30);
        assert_eq!(report.x_wins + report.o_wins + report.draws, 30);
        assert_eq!(report.seed, 42);
    }

    #[test]
    fn test_same_seed_reproduces_report() {
        let first = run_matches(&config(20, Difficulty::Easy, Difficulty::Medium)).unwrap();
        let second = run_matches(&config(20, Difficulty::Easy, Difficulty::Medium)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_hard_o_never_loses() {
        for x in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let report = run_matches(&config(15, x, Difficulty::Hard)).unwrap();
            assert_eq!(report.x_wins, 0, "X at {} beat Hard", x);
        }
    }

    #[test]
    fn test_hard_against_hard_always_draws() {
        let report = run_matches(&config(3, Difficulty::Hard, Difficulty::Hard)).unwrap();
        assert_eq!(report.draws, 3);
    }

    #[test]
    fn test_two_player_session_is_driven_for_both_sides() {
        let mut session = GameSession::new(GameMode::TwoPlayer, SessionRng::new(1));
        let mut rng = SessionRng::new(2);
        let outcome = play_game(&mut session, Difficulty::Hard, &mut rng).unwrap();
        assert_eq!(outcome, GameOutcome::Draw);
        assert_eq!(session.move_count(), 9);
    }

    #[test]
    fn test_report_display() {
        let report = ArenaReport {
            seed: 7,
            games: 3,
            x_wins: 1,
            o_wins: 1,
            draws: 1,
        };
        assert_eq!(report.to_string(), "3 games (seed 7): X won 1, O won 1, 1 draws");
    }
}
