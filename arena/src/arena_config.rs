use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tictactoe_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_engine::tictactoe::Difficulty;

const CONFIG_FILE_NAME: &str = "tictactoe_arena.yaml";
const MAX_GAMES: u32 = 100_000;

pub fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, ArenaConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ArenaConfig {
    pub games: u32,
    /// Fixed seed for reproducible runs; a random one is drawn when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    pub x_difficulty: Difficulty,
    pub o_difficulty: Difficulty,
    /// Log progress every this many games. Zero disables progress lines.
    #[serde(default)]
    pub log_every: u32,
}

impl Validate for ArenaConfig {
    fn validate(&self) -> Result<(), String> {
        if self.games == 0 || self.games > MAX_GAMES {
            return Err(format!(
                "Games must be between 1 and {}, got {}",
                MAX_GAMES, self.games
            ));
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed: None,
            x_difficulty: Difficulty::Easy,
            o_difficulty: Difficulty::Hard,
            log_every: 0,
        }
    }
}
