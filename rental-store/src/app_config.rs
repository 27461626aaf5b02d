use config::Environment;
use serde::Deserialize;
use std::env;
use std::path::Path;

pub const DEFAULT_STORAGE_KEY: &str = "carRentalBookings";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub data_dir: String,
    pub key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub filter: String,
}

fn environment() -> Environment {
    Environment::with_prefix("RENTAL").separator("__")
}

/// `RUN_MODE` picks the `config/{run_mode}` layer.
fn run_mode(value: Option<String>) -> String {
    match value {
        Some(mode) if !mode.trim().is_empty() => mode,
        _ => "development".to_string(),
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = run_mode(env::var("RUN_MODE").ok());
        Self::load_from(Path::new("config"), &run_mode)
    }

    /// Defaults, then `{dir}/default`, `{dir}/{run_mode}`, `{dir}/local`
    /// (all optional), then `RENTAL__SECTION__KEY` environment variables.
    pub fn load_from(dir: &Path, run_mode: &str) -> Result<Self, config::ConfigError> {
        Self::load_layers(dir, run_mode, environment())
    }

    fn load_layers(
        dir: &Path,
        run_mode: &str,
        environment: Environment,
    ) -> Result<Self, config::ConfigError> {
        let file = |name: &str| {
            let path = dir.join(name);
            config::File::with_name(&path.to_string_lossy()).required(false)
        };

        let s = config::Config::builder()
            .set_default("storage.data_dir", "data")?
            .set_default("storage.key", DEFAULT_STORAGE_KEY)?
            .set_default(
                "logging.filter",
                "rental_cli=info,rental_booking=info,rental_store=info",
            )?
            .add_source(file("default"))
            .add_source(file(run_mode))
            // Not checked in
            .add_source(file("local"))
            .add_source(environment)
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    fn env_vars(pairs: &[(&str, &str)]) -> Environment {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        environment().source(Some(vars.into_iter().collect()))
    }

    #[test]
    fn test_defaults_without_files() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(temp_dir.path(), "test").unwrap();
        assert_eq!(config.storage.key, DEFAULT_STORAGE_KEY);
        assert!(config.logging.filter.contains("rental_booking"));
    }

    #[test]
    fn test_files_layer_in_order() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("default.toml"),
            "[storage]\ndata_dir = \"/var/lib/rental\"\nkey = \"fromDefault\"\n",
        )
        .unwrap();
        fs::write(temp_dir.path().join("test.toml"), "[storage]\nkey = \"fromRunMode\"\n").unwrap();

        let config = Config::load_from(temp_dir.path(), "test").unwrap();
        assert_eq!(config.storage.data_dir, "/var/lib/rental");
        assert_eq!(config.storage.key, "fromRunMode");
    }

    #[test]
    fn test_environment_overrides_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("default.toml"),
            "[storage]\ndata_dir = \"/var/lib/rental\"\n",
        )
        .unwrap();

        let config = Config::load_layers(
            temp_dir.path(),
            "test",
            env_vars(&[
                ("RENTAL__STORAGE__DATA_DIR", "/srv/bookings"),
                ("RENTAL__LOGGING__FILTER", "debug"),
                ("UNRELATED__STORAGE__KEY", "ignored"),
            ]),
        )
        .unwrap();

        assert_eq!(config.storage.data_dir, "/srv/bookings");
        assert_eq!(config.storage.key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn test_run_mode_selects_layer() {
        assert_eq!(run_mode(None), "development");
        assert_eq!(run_mode(Some(String::new())), "development");
        assert_eq!(run_mode(Some("production".to_string())), "production");

        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("development.toml"), "[storage]\nkey = \"dev\"\n").unwrap();
        fs::write(temp_dir.path().join("production.toml"), "[storage]\nkey = \"prod\"\n").unwrap();

        let dev = Config::load_layers(temp_dir.path(), &run_mode(None), env_vars(&[])).unwrap();
        assert_eq!(dev.storage.key, "dev");

        let prod = Config::load_layers(
            temp_dir.path(),
            &run_mode(Some("production".to_string())),
            env_vars(&[]),
        )
        .unwrap();
        assert_eq!(prod.storage.key, "prod");
    }
}
