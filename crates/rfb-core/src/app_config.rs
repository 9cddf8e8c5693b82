use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the feedback REST API, without the `/api` prefix.
    pub api_url: String,
    pub env: Environment,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub geo_high_accuracy: bool,
    pub geo_timeout_ms: u64,
    /// Oldest cached position fix that may be reused.
    pub geo_max_age_ms: u64,
}

impl AppConfig {
    #[must_use]
    pub fn geo_timeout(&self) -> Duration {
        Duration::from_millis(self.geo_timeout_ms)
    }

    #[must_use]
    pub fn geo_max_age(&self) -> Duration {
        Duration::from_millis(self.geo_max_age_ms)
    }
}
