use std::sync::RwLock;
use std::path::Path;
use std::fs;
use anyhow::Context;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use toml::Table;

static GLOBAL_CONFIG: OnceCell<RwLock<Table>> = OnceCell::new();

/// `[system]` section: where logs go and how chatty they are.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    pub log_path: String,
    pub log_level: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            log_path: "logs/".into(),
            log_level: "info".into(),
        }
    }
}

/// Parses config text. Syntax errors are logged and yield an empty table.
pub fn parse(content: &str) -> Table {
    toml::from_str(content).unwrap_or_else(|e| {
        log::error!("Config syntax error: {}, using empty config.", e);
        Table::new()
    })
}

pub fn init<P: AsRef<Path>>(path: P) -> anyhow::Result<()> {
    let path = path.as_ref();

    let content = if path.exists() {
        log::info!("Loading config from {:?}", path);
        fs::read_to_string(path).with_context(|| format!("reading {:?}", path))?
    } else {
        log::warn!("Config file not found at {:?}, using defaults.", path);
        String::new()
    };

    GLOBAL_CONFIG.set(RwLock::new(parse(&content)))
        .map_err(|_| anyhow::anyhow!("Config already initialized"))?;

    Ok(())
}

/// Typed lookup of one section. Missing or mismatched sections fall back to
/// `T::default()`; so does a store that was never initialised.
pub fn get<T: DeserializeOwned + Default>(key: &str) -> T {
    let Some(store) = GLOBAL_CONFIG.get() else {
        log::warn!("Config not initialized, section '[{}]' uses defaults.", key);
        return T::default();
    };

    match store.read() {
        Ok(table) => section(&table, key),
        Err(_) => {
            log::error!("Config lock poisoned, section '[{}]' uses defaults.", key);
            T::default()
        }
    }
}

pub fn section<T: DeserializeOwned + Default>(table: &Table, key: &str) -> T {
    match table.get(key) {
        Some(value) => value.clone().try_into().unwrap_or_else(|e| {
            log::warn!("Config section '[{}]' mismatch: {}. Using default.", key, e);
            T::default()
        }),
        None => T::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_section_uses_default() {
        let table = parse("[window]\nwidth = 640\n");
        let sys: SystemConfig = section(&table, "system");
        assert_eq!(sys.log_level, "info");
    }

    #[test]
    fn partial_section_fills_in_defaults() {
        let table = parse("[system]\nlog_level = \"debug\"\n");
        let sys: SystemConfig = section(&table, "system");
        assert_eq!(sys.log_level, "debug");
        assert_eq!(sys.log_path, "logs/");
    }

    #[test]
    fn mismatched_section_uses_default() {
        let table = parse("[system]\nlog_level = 3\n");
        let sys: SystemConfig = section(&table, "system");
        assert_eq!(sys.log_level, "info");
    }

    #[test]
    fn broken_syntax_gives_empty_table() {
        assert!(parse("[system\nlog_level = ").is_empty());
    }
}
