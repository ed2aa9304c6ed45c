//! One-shot symptom triage against an external text-generation endpoint.
//!
//! The call-through is a single request/response exchange with fixed
//! sampling parameters. Every failure path collapses into one fixed
//! user-facing fallback string; no retries, no streaming, no structured
//! error surface.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::{Value, json};

use crate::error::{ClinicError, Result};

pub const DEFAULT_ADVISORY_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_ADVISORY_TIMEOUT_MS: u64 = 8000;

pub const ADVISORY_TEMPERATURE: f64 = 0.7;
pub const ADVISORY_TOP_P: f64 = 0.95;
pub const ADVISORY_TOP_K: u32 = 40;

/// Returned verbatim whenever the advisory service cannot produce text.
pub const FALLBACK_ADVISORY: &str =
    "The AI service cannot be reached right now. Please contact a veterinarian directly.";

#[derive(Debug, Clone)]
pub struct AdvisoryConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub timeout_ms: u64,
}

impl AdvisoryConfig {
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var("PATIVET_ADVISORY_URL").ok()?;
        let model = std::env::var("PATIVET_ADVISORY_MODEL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ADVISORY_MODEL.to_string());
        let timeout_ms = std::env::var("PATIVET_ADVISORY_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_ADVISORY_TIMEOUT_MS);

        Some(Self {
            base_url: normalize_base_url(&base_url),
            api_key: std::env::var("PATIVET_ADVISORY_API_KEY").ok(),
            model,
            timeout_ms,
        })
    }
}

#[derive(Clone)]
pub struct AdvisoryClient {
    config: AdvisoryConfig,
    http: Client,
}

impl std::fmt::Debug for AdvisoryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdvisoryClient")
            .field("base_url", &self.config.base_url)
            .field("model", &self.config.model)
            .finish_non_exhaustive()
    }
}

impl AdvisoryClient {
    pub fn new(config: AdvisoryConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(key) = &config.api_key {
            let value = HeaderValue::from_str(key).map_err(|e| {
                ClinicError::Validation(format!("invalid PATIVET_ADVISORY_API_KEY: {e}"))
            })?;
            headers.insert("x-goog-api-key", value);
        }

        let http = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self { config, http })
    }

    pub fn config(&self) -> &AdvisoryConfig {
        &self.config
    }

    /// Total function: any failure maps to [`FALLBACK_ADVISORY`].
    #[must_use]
    pub fn analyze_symptoms(&self, species_label: &str, symptoms: &str) -> String {
        self.request_advisory(species_label, symptoms)
            .unwrap_or_else(|_| FALLBACK_ADVISORY.to_string())
    }

    fn request_advisory(&self, species_label: &str, symptoms: &str) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        );
        let body = build_generate_request(&advisory_prompt(species_label, symptoms));
        let resp = self.http.post(url).json(&body).send()?;
        if !resp.status().is_success() {
            return Err(ClinicError::Internal(format!(
                "advisory request failed with status {}",
                resp.status()
            )));
        }

        let value = resp.json::<Value>()?;
        extract_generated_text(&value)
            .ok_or_else(|| ClinicError::Validation("empty advisory response".to_string()))
    }
}

#[must_use]
pub fn advisory_prompt(species_label: &str, symptoms: &str) -> String {
    format!(
        "A {species_label} owner reports the following symptoms: \"{symptoms}\". \
         Give short advice on what these symptoms could mean, how urgent they are, \
         and what can be done before seeing a veterinarian. \
         IMPORTANT: this is not a diagnosis, it is informational only. \
         Stress that a veterinarian must be consulted."
    )
}

#[must_use]
pub fn build_generate_request(prompt: &str) -> Value {
    json!({
        "contents": [{
            "parts": [{"text": prompt}]
        }],
        "generationConfig": {
            "temperature": ADVISORY_TEMPERATURE,
            "topP": ADVISORY_TOP_P,
            "topK": ADVISORY_TOP_K,
        }
    })
}

/// Reads the first candidate's first text part; tolerates the flat `text`
/// shape some proxies return.
#[must_use]
pub fn extract_generated_text(value: &Value) -> Option<String> {
    if let Some(text) = value
        .get("candidates")
        .and_then(|candidates| candidates.as_array())
        .and_then(|candidates| candidates.first())
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(|parts| parts.as_array())
        .and_then(|parts| parts.first())
        .and_then(|part| part.get("text"))
        .and_then(|text| text.as_str())
    {
        return Some(text.to_string());
    }
    if let Some(text) = value.get("text").and_then(|text| text.as_str()) {
        return Some(text.to_string());
    }
    None
}

fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_species_and_symptoms() {
        let prompt = advisory_prompt("Dog", "lethargy and loss of appetite");
        assert!(prompt.contains("A Dog owner"));
        assert!(prompt.contains("lethargy and loss of appetite"));
        assert!(prompt.contains("not a diagnosis"));
    }

    #[test]
    fn request_body_carries_fixed_sampling_parameters() {
        let body = build_generate_request("hello");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(body["generationConfig"]["temperature"], 0.7);
        assert_eq!(body["generationConfig"]["topP"], 0.95);
        assert_eq!(body["generationConfig"]["topK"], 40);
    }

    #[test]
    fn extract_generated_text_reads_first_candidate_part() {
        let value = json!({
            "candidates": [{
                "content": {"parts": [{"text": "rest and hydrate"}, {"text": "second"}]}
            }]
        });
        assert_eq!(
            extract_generated_text(&value).as_deref(),
            Some("rest and hydrate")
        );
    }

    #[test]
    fn extract_generated_text_accepts_flat_text_shape() {
        let value = json!({"text": "flat"});
        assert_eq!(extract_generated_text(&value).as_deref(), Some("flat"));
    }

    #[test]
    fn extract_generated_text_rejects_empty_shapes() {
        assert!(extract_generated_text(&json!({})).is_none());
        assert!(extract_generated_text(&json!({"candidates": []})).is_none());
    }

    #[test]
    fn unreachable_endpoint_yields_the_fallback_string() {
        let client = AdvisoryClient::new(AdvisoryConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            api_key: None,
            model: DEFAULT_ADVISORY_MODEL.to_string(),
            timeout_ms: 200,
        })
        .expect("client");
        let advice = client.analyze_symptoms("Cat", "sneezing");
        assert_eq!(advice, FALLBACK_ADVISORY);
    }
}
