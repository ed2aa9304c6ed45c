use crate::advisory::{AdvisoryClient, FALLBACK_ADVISORY};
use crate::config::AppConfig;
use crate::error::Result;
use crate::seed::SeedProfile;
use crate::state::ClinicState;

/// Top-level application facade: owns the state aggregate and the optional
/// advisory call-through client.
#[derive(Clone)]
pub struct Clinic {
    pub state: ClinicState,
    advisory: Option<AdvisoryClient>,
}

impl std::fmt::Debug for Clinic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clinic").finish_non_exhaustive()
    }
}

impl Clinic {
    pub fn new(config: AppConfig) -> Result<Self> {
        let advisory = config.advisory.map(AdvisoryClient::new).transpose()?;
        Ok(Self {
            state: ClinicState::new(config.notify_ttl_ms),
            advisory,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(AppConfig::from_env())
    }

    pub fn seeded(profile: SeedProfile, config: AppConfig) -> Result<Self> {
        let advisory = config.advisory.map(AdvisoryClient::new).transpose()?;
        Ok(Self {
            state: ClinicState::seeded(profile, config.notify_ttl_ms),
            advisory,
        })
    }

    /// Symptom triage; answers with the fixed fallback string when no
    /// endpoint is configured or the call fails.
    #[must_use]
    pub fn analyze_symptoms(&self, species_label: &str, symptoms: &str) -> String {
        match &self.advisory {
            Some(client) => client.analyze_symptoms(species_label, symptoms),
            None => FALLBACK_ADVISORY.to_string(),
        }
    }

    #[must_use]
    pub fn has_advisory_endpoint(&self) -> bool {
        self.advisory.is_some()
    }
}
