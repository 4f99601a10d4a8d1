// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{HarnessError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub target: TargetConfig,
    pub suite: SuiteConfig,
}

/// Remote API under test.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TargetConfig {
    pub base_url: String,
    pub client_id: u64,
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SuiteConfig {
    /// Seconds to wait between steps so prior load settles.
    pub pause_secs: u64,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("RAG_STRESS")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| HarnessError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| HarnessError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            target: TargetConfig {
                base_url: "http://localhost:8080/api".to_string(),
                client_id: 1,
                api_key: "TEST_KEY".to_string(),
            },
            suite: SuiteConfig { pause_secs: 2 },
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.target.base_url.starts_with("http://")
            && !self.target.base_url.starts_with("https://")
        {
            return Err(HarnessError::Config(format!(
                "base_url must be an http(s) URL: {}",
                self.target.base_url
            )));
        }

        if self.target.api_key.is_empty() {
            return Err(HarnessError::Config(
                "api_key must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default_config();
        assert_eq!(config.target.base_url, "http://localhost:8080/api");
        assert_eq!(config.target.client_id, 1);
        assert_eq!(config.target.api_key, "TEST_KEY");
        assert_eq!(config.suite.pause_secs, 2);
    }

    #[test]
    fn test_load_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("harness.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
[target]
base_url = "http://127.0.0.1:9999/api"
client_id = 7
api_key = "LOCAL_KEY"

[suite]
pause_secs = 0
"#
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.target.base_url, "http://127.0.0.1:9999/api");
        assert_eq!(config.target.client_id, 7);
        assert_eq!(config.suite.pause_secs, 0);
    }

    #[test]
    fn test_rejects_bad_base_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("harness.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
[target]
base_url = "localhost:8080"
client_id = 1
api_key = "TEST_KEY"

[suite]
pause_secs = 2
"#
        )
        .unwrap();

        assert!(Config::load(Some(&path)).is_err());
    }
}
