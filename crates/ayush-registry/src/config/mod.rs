use std::env;
use std::fmt;

use crate::applications::scoring::{ScoringConfig, ScoringProfile};

/// Distinguishes runtime behavior for different stages of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the registry.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub scoring: ScoringConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_profile(None)
    }

    /// Like [`AppConfig::load`], but an explicit profile skips `APP_SCORING_PROFILE` entirely.
    pub fn load_with_profile(profile: Option<ScoringProfile>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let format = match env::var("APP_LOG_FORMAT") {
            Ok(raw) => {
                LogFormat::from_name(&raw).ok_or(ConfigError::InvalidLogFormat { value: raw })?
            }
            Err(_) => LogFormat::Compact,
        };

        let profile = match (profile, env::var("APP_SCORING_PROFILE")) {
            (Some(profile), _) => profile,
            (None, Ok(raw)) => ScoringProfile::from_name(&raw)
                .ok_or(ConfigError::InvalidScoringProfile { value: raw })?,
            (None, Err(_)) => ScoringProfile::default(),
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level, format },
            scoring: ScoringConfig::for_profile(profile),
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Full,
}

impl LogFormat {
    fn from_name(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Some(Self::Compact),
            "pretty" => Some(Self::Pretty),
            "full" => Some(Self::Full),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidScoringProfile { value: String },
    InvalidLogFormat { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidScoringProfile { value } => write!(
                f,
                "APP_SCORING_PROFILE must be 'density' or 'count' (found '{}')",
                value
            ),
            ConfigError::InvalidLogFormat { value } => write!(
                f,
                "APP_LOG_FORMAT must be 'compact', 'pretty' or 'full' (found '{}')",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::applications::scoring::StatusPolicy;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_SCORING_PROFILE");
        env::remove_var("APP_LOG_FORMAT");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.telemetry.format, LogFormat::Compact);
        assert_eq!(config.scoring.profile, ScoringProfile::KeywordDensity);
        assert_eq!(
            config.scoring.status_policy,
            StatusPolicy::Cutoff { approve_at: 45.0 }
        );
    }

    #[test]
    fn selects_keyword_count_profile() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "production");
        env::set_var("APP_SCORING_PROFILE", "count");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(config.scoring.profile, ScoringProfile::KeywordCount);
        assert_eq!(
            config.scoring.status_policy,
            StatusPolicy::Banded {
                approve_at: 70.0,
                reject_below: 40.0
            }
        );
        reset_env();
    }

    #[test]
    fn rejects_unknown_profile() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_SCORING_PROFILE", "vibes");
        let err = AppConfig::load().expect_err("unknown profile rejected");
        assert!(err.to_string().contains("vibes"));
        reset_env();
    }

    #[test]
    fn explicit_profile_wins_over_invalid_env_value() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_SCORING_PROFILE", "vibes");
        let config = AppConfig::load_with_profile(Some(ScoringProfile::KeywordCount))
            .expect("override bypasses env profile");
        assert_eq!(config.scoring.profile, ScoringProfile::KeywordCount);
        reset_env();
    }
}
