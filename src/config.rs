use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringParams;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub cors: CorsSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
    #[serde(default = "default_payload_limit")]
    pub payload_limit_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
            payload_limit_bytes: default_payload_limit(),
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 9000 }
fn default_payload_limit() -> usize { 1024 * 1024 }

#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
    #[serde(default = "default_allowed_methods")]
    pub allowed_methods: Vec<String>,
    #[serde(default = "default_allowed_headers")]
    pub allowed_headers: Vec<String>,
    #[serde(default = "default_true")]
    pub allow_credentials: bool,
    pub max_age_secs: Option<usize>,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
            allowed_methods: default_allowed_methods(),
            allowed_headers: default_allowed_headers(),
            allow_credentials: true,
            max_age_secs: None,
        }
    }
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://localhost:8000".to_string(),
    ]
}

fn default_allowed_methods() -> Vec<String> {
    ["GET", "POST", "PUT", "DELETE", "OPTIONS"]
        .iter()
        .map(|m| m.to_string())
        .collect()
}

fn default_allowed_headers() -> Vec<String> {
    vec!["Content-Type".to_string(), "Authorization".to_string()]
}

fn default_true() -> bool { true }

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default = "default_neutral_score")]
    pub neutral_score: f64,
    #[serde(default = "default_dampening")]
    pub dampening: f64,
    /// TOML lexicon replacing the built-in table
    pub lexicon_path: Option<String>,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            neutral_score: default_neutral_score(),
            dampening: default_dampening(),
            lexicon_path: None,
        }
    }
}

impl ScoringSettings {
    pub fn params(&self) -> ScoringParams {
        ScoringParams {
            neutral_score: self.neutral_score,
            dampening: self.dampening,
        }
    }
}

fn default_neutral_score() -> f64 { 5.0 }
fn default_dampening() -> f64 { 0.7 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with MOOD_)
    /// 4. A bare PORT variable
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // e.g., MOOD__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?;

        apply_port_override(settings, std::env::var("PORT").ok())?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        settings.try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("MOOD")
        .prefix_separator("__")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("cors.allowed_origins")
        .with_list_parse_key("cors.allowed_methods")
        .with_list_parse_key("cors.allowed_headers")
        .try_parsing(true)
}

/// Hosting platforms hand the listen port over as a bare PORT variable
fn apply_port_override(settings: Config, port: Option<String>) -> Result<Config, ConfigError> {
    let Some(port) = port else {
        return Ok(settings);
    };

    let port: u16 = port
        .trim()
        .parse()
        .map_err(|e| ConfigError::Message(format!("Invalid PORT '{}': {}", port, e)))?;

    Config::builder()
        .add_source(settings)
        .set_override("server.port", i64::from(port))?
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_scoring() {
        let scoring = ScoringSettings::default();
        assert_eq!(scoring.params(), ScoringParams::default());
        assert_eq!(scoring.neutral_score, 5.0);
        assert_eq!(scoring.dampening, 0.7);
        assert!(scoring.lexicon_path.is_none());
    }

    #[test]
    fn test_default_server_and_cors() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 9000);
        assert_eq!(
            settings.cors.allowed_origins,
            vec!["http://localhost:3000", "http://localhost:8000"]
        );
        assert_eq!(settings.cors.allowed_methods.len(), 5);
        assert!(settings.cors.allow_credentials);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_load_from_partial_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[server]\nport = 9100\n\n[scoring]\ndampening = 0.5").unwrap();

        let settings = Settings::load_from(file.path()).unwrap();
        assert_eq!(settings.server.port, 9100);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.scoring.dampening, 0.5);
        assert_eq!(settings.scoring.neutral_score, 5.0);
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_port_override() {
        let base = Config::builder().build().unwrap();
        let settings: Settings = apply_port_override(base, Some("8080".to_string()))
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings.server.port, 8080);

        let base = Config::builder().build().unwrap();
        assert!(apply_port_override(base, Some("not-a-port".to_string())).is_err());
    }
}
