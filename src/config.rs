use std::{path::PathBuf, str::FromStr};

use tracing::Level;

use crate::render::Layout;

/// Runtime settings, read from the environment on top of built-in defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Seed for maze generation. `None` draws fresh entropy for every maze.
    pub seed: Option<u64>,
    /// Cell size in pixels for pixel renderers, `1..=Layout::MAX_CELL_SIZE`.
    /// Only the profiling binary draws to pixels; the terminal viewer ignores it.
    pub cell_size: u32,
    /// Directory for log files. Logs never go to stdout, which belongs to the UI.
    pub log_dir: PathBuf,
    /// Most verbose level that is logged
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            cell_size: 11,
            log_dir: PathBuf::from("logs"),
            log_level: Level::INFO,
        }
    }
}

impl Config {
    pub const SEED_VAR: &'static str = "MAZECARVE_SEED";
    pub const CELL_SIZE_VAR: &'static str = "MAZECARVE_CELL_SIZE";
    pub const LOG_DIR_VAR: &'static str = "MAZECARVE_LOG_DIR";
    pub const LOG_LEVEL_VAR: &'static str = "MAZECARVE_LOG";

    /// Reads overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Applies overrides from `(name, value)` pairs. Values that fail to parse are
    /// reported and the default is kept.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Config::default();
        for (key, value) in vars {
            let (key, value) = (key.as_ref(), value.as_ref().trim());
            match key {
                Self::SEED_VAR => config.seed = parse_or_warn(key, value).or(config.seed),
                Self::CELL_SIZE_VAR => {
                    match parse_or_warn::<u32>(key, value) {
                        Some(size) if (1..=Layout::MAX_CELL_SIZE).contains(&size) => {
                            config.cell_size = size;
                        }
                        Some(size) => {
                            tracing::warn!("[config] ignoring {}={}: out of range", key, size);
                        }
                        None => {}
                    }
                }
                Self::LOG_DIR_VAR if !value.is_empty() => config.log_dir = PathBuf::from(value),
                Self::LOG_LEVEL_VAR => {
                    if let Some(level) = parse_or_warn(key, value) {
                        config.log_level = level;
                    }
                }
                _ => {}
            }
        }
        config
    }
}

fn parse_or_warn<T: FromStr>(key: &str, value: &str) -> Option<T> {
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            // Logging may not be initialized yet, so this can go unseen
            tracing::warn!("[config] ignoring {}={:?}: cannot be parsed", key, value);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_overrides() {
        let config = Config::from_vars(Vec::<(String, String)>::new());
        assert_eq!(config, Config::default());
        assert_eq!(config.cell_size, 11);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_vars([
            ("MAZECARVE_SEED", "42"),
            ("MAZECARVE_CELL_SIZE", "5"),
            ("MAZECARVE_LOG_DIR", "/tmp/maze-logs"),
            ("MAZECARVE_LOG", "debug"),
            ("UNRELATED", "value"),
        ]);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.cell_size, 5);
        assert_eq!(config.log_dir, PathBuf::from("/tmp/maze-logs"));
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = Config::from_vars([
            ("MAZECARVE_SEED", "not-a-number"),
            ("MAZECARVE_CELL_SIZE", "0"),
            ("MAZECARVE_LOG_DIR", ""),
            ("MAZECARVE_LOG", "loud"),
        ]);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_cell_size_out_of_range_keeps_default() {
        let config = Config::from_vars([("MAZECARVE_CELL_SIZE", "4294967295")]);
        assert_eq!(config.cell_size, 11);
        let config = Config::from_vars([("MAZECARVE_CELL_SIZE", "1024")]);
        assert_eq!(config.cell_size, Layout::MAX_CELL_SIZE);
    }
}
