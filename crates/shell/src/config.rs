//! Startup configuration, read once from the environment.

use std::path::PathBuf;

pub const STORE_NAME_VAR: &str = "STOREFRONT_NAME";
pub const SEED_PATH_VAR: &str = "STOREFRONT_SEED";
pub const DEFAULT_STORE_NAME: &str = "GCU Adventure Store";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Shown in the welcome banner.
    pub store_name: String,
    /// JSON seed file; the built-in seed is used when absent.
    pub seed_path: Option<PathBuf>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            store_name: DEFAULT_STORE_NAME.to_string(),
            seed_path: None,
        }
    }
}

impl ShellConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (tests pass a closure instead of touching the
    /// process environment).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_name = match lookup(STORE_NAME_VAR).map(|v| v.trim().to_string()) {
            Some(name) if !name.is_empty() => name,
            _ => {
                tracing::debug!("{STORE_NAME_VAR} not set; using default store name");
                DEFAULT_STORE_NAME.to_string()
            }
        };

        let seed_path = lookup(SEED_PATH_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Self {
            store_name,
            seed_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ShellConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn reads_name_and_seed_path() {
        let config = ShellConfig::from_lookup(lookup_from(&[
            (STORE_NAME_VAR, " Trailhead Outfitters "),
            (SEED_PATH_VAR, "/tmp/seed.json"),
        ]));
        assert_eq!(config.store_name, "Trailhead Outfitters");
        assert_eq!(config.seed_path, Some(PathBuf::from("/tmp/seed.json")));
    }

    #[test]
    fn blank_values_fall_back() {
        let config = ShellConfig::from_lookup(lookup_from(&[
            (STORE_NAME_VAR, "   "),
            (SEED_PATH_VAR, ""),
        ]));
        assert_eq!(config, ShellConfig::default());
    }
}
