use qjack_ai::trainer::TrainConfig;
use qjack_engine::rules::{DEFAULT_NUM_DECKS, DEFAULT_RESHUFFLE_THRESHOLD, EnvConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub card_counting: bool,
    pub num_decks: u8,
    pub reshuffle_threshold: usize,
    pub episodes: u64,
    pub eval_episodes: u64,
    pub alpha: f64,
    pub gamma: f64,
    pub epsilon_start: f64,
    pub epsilon_min: f64,
    pub epsilon_decay: f64,
    pub progress_every: u64,
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
    pub card_counting: ValueSource,
    pub num_decks: ValueSource,
    pub reshuffle_threshold: ValueSource,
    pub episodes: ValueSource,
    pub eval_episodes: ValueSource,
    pub alpha: ValueSource,
    pub gamma: ValueSource,
    pub epsilon_start: ValueSource,
    pub epsilon_min: ValueSource,
    pub epsilon_decay: ValueSource,
    pub progress_every: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            card_counting: ValueSource::Default,
            num_decks: ValueSource::Default,
            reshuffle_threshold: ValueSource::Default,
            episodes: ValueSource::Default,
            eval_episodes: ValueSource::Default,
            alpha: ValueSource::Default,
            gamma: ValueSource::Default,
            epsilon_start: ValueSource::Default,
            epsilon_min: ValueSource::Default,
            epsilon_decay: ValueSource::Default,
            progress_every: ValueSource::Default,
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
        let train = TrainConfig::default();
        Self {
            seed: None,
            card_counting: false,
            num_decks: DEFAULT_NUM_DECKS,
            reshuffle_threshold: DEFAULT_RESHUFFLE_THRESHOLD,
            episodes: train.episodes,
            eval_episodes: train.eval_episodes,
            alpha: train.alpha,
            gamma: train.gamma,
            epsilon_start: train.epsilon_start,
            epsilon_min: train.epsilon_min,
            epsilon_decay: train.epsilon_decay,
            progress_every: train.progress_every,
        }
    }
}

impl Config {
    /// Environment settings handed to the engine.
    pub fn env_config(&self) -> EnvConfig {
        EnvConfig {
            num_decks: self.num_decks,
            reshuffle_threshold: self.reshuffle_threshold,
            card_counting: self.card_counting,
        }
    }

    pub fn train_config(&self) -> TrainConfig {
        TrainConfig {
            episodes: self.episodes,
            eval_episodes: self.eval_episodes,
            alpha: self.alpha,
            gamma: self.gamma,
            epsilon_start: self.epsilon_start,
            epsilon_min: self.epsilon_min,
            epsilon_decay: self.epsilon_decay,
            progress_every: self.progress_every,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Resolves defaults, then the TOML file named by `QJACK_CONFIG`, then
/// `QJACK_*` environment variables, and validates the result.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("QJACK_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        let file = ValueSource::File;
        apply(&mut cfg.seed, &mut sources.seed, f.seed.map(Some), file);
        apply(&mut cfg.card_counting, &mut sources.card_counting, f.card_counting, file);
        apply(&mut cfg.num_decks, &mut sources.num_decks, f.num_decks, file);
        apply(
            &mut cfg.reshuffle_threshold,
            &mut sources.reshuffle_threshold,
            f.reshuffle_threshold,
            file,
        );
        apply(&mut cfg.episodes, &mut sources.episodes, f.episodes, file);
        apply(&mut cfg.eval_episodes, &mut sources.eval_episodes, f.eval_episodes, file);
        apply(&mut cfg.alpha, &mut sources.alpha, f.alpha, file);
        apply(&mut cfg.gamma, &mut sources.gamma, f.gamma, file);
        apply(&mut cfg.epsilon_start, &mut sources.epsilon_start, f.epsilon_start, file);
        apply(&mut cfg.epsilon_min, &mut sources.epsilon_min, f.epsilon_min, file);
        apply(&mut cfg.epsilon_decay, &mut sources.epsilon_decay, f.epsilon_decay, file);
        apply(&mut cfg.progress_every, &mut sources.progress_every, f.progress_every, file);
    }

    let env = ValueSource::Env;
    apply(&mut cfg.seed, &mut sources.seed, env_value("QJACK_SEED")?.map(Some), env);
    if let Ok(v) = std::env::var("QJACK_CARD_COUNTING")
        && !v.is_empty()
    {
        cfg.card_counting = parse_bool(&v)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid QJACK_CARD_COUNTING: {}", v)))?;
        sources.card_counting = env;
    }
    apply(&mut cfg.num_decks, &mut sources.num_decks, env_value("QJACK_DECKS")?, env);
    apply(&mut cfg.episodes, &mut sources.episodes, env_value("QJACK_EPISODES")?, env);
    apply(
        &mut cfg.eval_episodes,
        &mut sources.eval_episodes,
        env_value("QJACK_EVAL_EPISODES")?,
        env,
    );

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    card_counting: Option<bool>,
    #[serde(default)]
    num_decks: Option<u8>,
    #[serde(default)]
    reshuffle_threshold: Option<usize>,
    #[serde(default)]
    episodes: Option<u64>,
    #[serde(default)]
    eval_episodes: Option<u64>,
    #[serde(default)]
    alpha: Option<f64>,
    #[serde(default)]
    gamma: Option<f64>,
    #[serde(default)]
    epsilon_start: Option<f64>,
    #[serde(default)]
    epsilon_min: Option<f64>,
    #[serde(default)]
    epsilon_decay: Option<f64>,
    #[serde(default)]
    progress_every: Option<u64>,
}

fn apply<T>(slot: &mut T, source: &mut ValueSource, value: Option<T>, origin: ValueSource) {
    if let Some(v) = value {
        *slot = v;
        *source = origin;
    }
}

fn env_value<T: FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(v) if !v.is_empty() => v
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", key, v))),
        _ => Ok(None),
    }
}

/// Checks the engine and training settings together.
pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    cfg.env_config()
        .validate()
        .map_err(|e| ConfigError::Invalid(e.to_string()))?;
    cfg.train_config()
        .validate()
        .map_err(|e| ConfigError::Invalid(e.to_string()))?;
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    const VARS: &[&str] = &[
        "QJACK_CONFIG",
        "QJACK_SEED",
        "QJACK_CARD_COUNTING",
        "QJACK_DECKS",
        "QJACK_EPISODES",
        "QJACK_EVAL_EPISODES",
    ];

    fn clear_env() {
        for v in VARS {
            unsafe {
                std::env::remove_var(v);
            }
        }
    }

    fn config_file(body: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(body.as_bytes()).unwrap();
        f
    }

    #[test]
    #[serial]
    fn defaults_when_nothing_is_set() {
        clear_env();
        let resolved = load_with_sources().unwrap();
        assert_eq!(resolved.config, Config::default());
        assert_eq!(resolved.sources.seed, ValueSource::Default);
        assert_eq!(resolved.sources.episodes, ValueSource::Default);
        assert_eq!(resolved.config.episodes, 3_000_000);
        assert_eq!(resolved.config.eval_episodes, 500_000);
        assert!(!resolved.config.card_counting);
    }

    #[test]
    #[serial]
    fn file_values_override_defaults() {
        clear_env();
        let f = config_file("seed = 7\nnum_decks = 6\nreshuffle_threshold = 60\nalpha = 0.2\n");
        unsafe {
            std::env::set_var("QJACK_CONFIG", f.path());
        }
        let resolved = load_with_sources().unwrap();
        clear_env();

        assert_eq!(resolved.config.seed, Some(7));
        assert_eq!(resolved.config.num_decks, 6);
        assert_eq!(resolved.config.reshuffle_threshold, 60);
        assert_eq!(resolved.config.alpha, 0.2);
        assert_eq!(resolved.sources.seed, ValueSource::File);
        assert_eq!(resolved.sources.alpha, ValueSource::File);
        assert_eq!(resolved.sources.gamma, ValueSource::Default);
    }

    #[test]
    #[serial]
    fn env_overrides_file() {
        clear_env();
        let f = config_file("seed = 7\ncard_counting = false\n");
        unsafe {
            std::env::set_var("QJACK_CONFIG", f.path());
            std::env::set_var("QJACK_SEED", "99");
            std::env::set_var("QJACK_CARD_COUNTING", "on");
            std::env::set_var("QJACK_EPISODES", "1234");
        }
        let resolved = load_with_sources().unwrap();
        clear_env();

        assert_eq!(resolved.config.seed, Some(99));
        assert!(resolved.config.card_counting);
        assert_eq!(resolved.config.episodes, 1234);
        assert_eq!(resolved.sources.seed, ValueSource::Env);
        assert_eq!(resolved.sources.card_counting, ValueSource::Env);
    }

    #[test]
    #[serial]
    fn malformed_env_values_are_rejected() {
        clear_env();
        unsafe {
            std::env::set_var("QJACK_SEED", "abc");
        }
        let res = load_with_sources();
        clear_env();
        assert!(matches!(res, Err(ConfigError::Invalid(_))));

        unsafe {
            std::env::set_var("QJACK_CARD_COUNTING", "maybe");
        }
        let res = load_with_sources();
        clear_env();
        assert!(matches!(res, Err(ConfigError::Invalid(_))));
    }

    #[test]
    #[serial]
    fn invalid_values_fail_validation() {
        clear_env();
        unsafe {
            std::env::set_var("QJACK_DECKS", "0");
        }
        let res = load_with_sources();
        clear_env();
        assert!(matches!(res, Err(ConfigError::Invalid(_))));

        unsafe {
            std::env::set_var("QJACK_EPISODES", "0");
        }
        let res = load_with_sources();
        clear_env();
        assert!(matches!(res, Err(ConfigError::Invalid(_))));
    }

    #[test]
    #[serial]
    fn threshold_larger_than_shoe_is_rejected() {
        clear_env();
        let f = config_file("reshuffle_threshold = 53\n");
        unsafe {
            std::env::set_var("QJACK_CONFIG", f.path());
        }
        let res = load_with_sources();
        clear_env();
        assert!(matches!(res, Err(ConfigError::Invalid(_))));
    }

    #[test]
    #[serial]
    fn unreadable_or_malformed_file_errors() {
        clear_env();
        unsafe {
            std::env::set_var("QJACK_CONFIG", "/nonexistent/qjack.toml");
        }
        let res = load_with_sources();
        clear_env();
        assert!(matches!(res, Err(ConfigError::Io(_))));

        let f = config_file("episodes = \"many\"\n");
        unsafe {
            std::env::set_var("QJACK_CONFIG", f.path());
        }
        let res = load_with_sources();
        clear_env();
        assert!(matches!(res, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("2"), None);
    }

    #[test]
    fn conversions_carry_every_field() {
        let cfg = Config {
            card_counting: true,
            num_decks: 2,
            reshuffle_threshold: 30,
            episodes: 10,
            ..Config::default()
        };
        let env = cfg.env_config();
        assert_eq!(env.num_decks, 2);
        assert_eq!(env.reshuffle_threshold, 30);
        assert!(env.card_counting);
        assert_eq!(cfg.train_config().episodes, 10);
        assert_eq!(cfg.train_config().epsilon_decay, 0.999995);
    }
}
