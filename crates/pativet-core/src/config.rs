use crate::advisory::AdvisoryConfig;
use crate::notify::DEFAULT_NOTIFY_TTL_MS;

/// Process-wide configuration snapshot, read once from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Absent when `PATIVET_ADVISORY_URL` is unset; the advisory section of
    /// the app then answers with the fallback string only.
    pub advisory: Option<AdvisoryConfig>,
    pub notify_ttl_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            advisory: None,
            notify_ttl_ms: DEFAULT_NOTIFY_TTL_MS,
        }
    }
}

impl AppConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            advisory: AdvisoryConfig::from_env(),
            notify_ttl_ms: read_env_u64("PATIVET_NOTIFY_TTL_MS").unwrap_or(DEFAULT_NOTIFY_TTL_MS),
        }
    }
}

pub(crate) fn read_env_u64(name: &str) -> Option<u64> {
    std::env::var(name).ok().and_then(|s| s.parse::<u64>().ok())
}
