//! Layered table settings: built-in defaults, then the TOML file named by
//! `TABLESTAKES_CONFIG`, then `TABLESTAKES_*` environment variables. Command-line
//! flags are applied last by each command.

use serde::{Deserialize, Serialize};
use std::fs;
use tablestakes_ai::create_ai;
use tablestakes_engine::engine::TableConfig;
use tablestakes_engine::game::MAX_SEATS;
use thiserror::Error;

pub const CONFIG_PATH_VAR: &str = "TABLESTAKES_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub players: usize,
    /// Bot name, or a comma-separated list assigned to seats in turn.
    pub ai: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub stack: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub players: ValueSource,
    pub ai: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            stack: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            players: ValueSource::Default,
            ai: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            stack: 1_000,
            small_blind: 10,
            big_blind: 20,
            players: 2,
            ai: "baseline".into(),
        }
    }
}

impl Config {
    /// Equal stacks for `players` seats at this config's blinds.
    pub fn table(&self, players: usize) -> TableConfig {
        TableConfig::new(players, self.stack, self.small_blind, self.big_blind)
    }

    /// The bot name for `seat`, cycling through the comma-separated list.
    pub fn ai_for_seat(&self, seat: usize) -> &str {
        let names = ai_names(&self.ai);
        if names.is_empty() {
            return "baseline";
        }
        names[seat % names.len()]
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_PATH_VAR)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.stack {
            cfg.stack = v;
            sources.stack = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.ai {
            cfg.ai = v;
            sources.ai = ValueSource::File;
        }
    }

    if let Some(v) = env_value("TABLESTAKES_SEED")? {
        cfg.seed = Some(v);
        sources.seed = ValueSource::Env;
    }
    if let Some(v) = env_value("TABLESTAKES_STACK")? {
        cfg.stack = v;
        sources.stack = ValueSource::Env;
    }
    if let Some(v) = env_value("TABLESTAKES_SMALL_BLIND")? {
        cfg.small_blind = v;
        sources.small_blind = ValueSource::Env;
    }
    if let Some(v) = env_value("TABLESTAKES_BIG_BLIND")? {
        cfg.big_blind = v;
        sources.big_blind = ValueSource::Env;
    }
    if let Some(v) = env_value("TABLESTAKES_PLAYERS")? {
        cfg.players = v;
        sources.players = ValueSource::Env;
    }
    if let Ok(ai) = std::env::var("TABLESTAKES_AI")
        && !ai.is_empty()
    {
        cfg.ai = ai;
        sources.ai = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn env_value<T: std::str::FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("invalid value for {}: {:?}", name, raw))),
        _ => Ok(None),
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    stack: Option<u32>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    players: Option<usize>,
    #[serde(default)]
    ai: Option<String>,
}

pub fn ai_names(list: &str) -> Vec<&str> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Checks a bot list by building each bot once.
pub fn validate_ai_list(list: &str) -> Result<(), ConfigError> {
    let names = ai_names(list);
    if names.is_empty() {
        return Err(ConfigError::Invalid("ai must name at least one bot".into()));
    }
    for name in names {
        create_ai(name, 0).map_err(|e| ConfigError::Invalid(e.to_string()))?;
    }
    Ok(())
}

pub fn validate_players(players: usize) -> Result<(), ConfigError> {
    if !(2..=MAX_SEATS).contains(&players) {
        return Err(ConfigError::Invalid(format!(
            "players must be between 2 and {}, got {}",
            MAX_SEATS, players
        )));
    }
    Ok(())
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    validate_players(cfg.players)?;
    if cfg.stack == 0 {
        return Err(ConfigError::Invalid("stack must be > 0".into()));
    }
    if cfg.small_blind == 0 || cfg.big_blind == 0 {
        return Err(ConfigError::Invalid("blinds must be > 0".into()));
    }
    if cfg.small_blind > cfg.big_blind {
        return Err(ConfigError::Invalid(format!(
            "small_blind {} exceeds big_blind {}",
            cfg.small_blind, cfg.big_blind
        )));
    }
    validate_ai_list(&cfg.ai)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn seats_cycle_through_ai_list() {
        let cfg = Config {
            ai: "baseline, random".into(),
            ..Config::default()
        };
        assert_eq!(cfg.ai_for_seat(0), "baseline");
        assert_eq!(cfg.ai_for_seat(1), "random");
        assert_eq!(cfg.ai_for_seat(2), "baseline");
    }

    #[test]
    fn rejects_bad_values() {
        let bad_players = Config {
            players: 1,
            ..Config::default()
        };
        assert!(validate(&bad_players).is_err());

        let inverted = Config {
            small_blind: 50,
            big_blind: 20,
            ..Config::default()
        };
        assert!(validate(&inverted).is_err());

        let unknown = Config {
            ai: "baseline,shark".into(),
            ..Config::default()
        };
        let err = validate(&unknown).unwrap_err();
        assert!(err.to_string().contains("shark"));
    }

    #[test]
    fn table_uses_equal_stacks() {
        let t = Config::default().table(3);
        assert_eq!(t.stacks, vec![1000, 1000, 1000]);
        assert_eq!((t.small_blind, t.big_blind), (10, 20));
    }
}
