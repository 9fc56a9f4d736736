use std::env;
use tracing::warn;

pub const DEFAULT_PATIENT_API_BASE_URL: &str = "https://seenless-patient-fastapi-server.hf.space";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub patient_api_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            patient_api_base_url: env::var("PATIENT_API_BASE_URL")
                .unwrap_or_else(|_| {
                    warn!("PATIENT_API_BASE_URL not set, using default");
                    DEFAULT_PATIENT_API_BASE_URL.to_string()
                }),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - PATIENT_API_BASE_URL is empty");
        }

        config
    }

    /// Replaces the base URL, e.g. from a command-line flag.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.patient_api_base_url = base_url.into();
        self
    }

    pub fn is_configured(&self) -> bool {
        !self.patient_api_base_url.trim().is_empty()
    }

    /// Base URL without trailing slashes, ready to have a `/path` appended.
    pub fn api_base_url(&self) -> &str {
        self.patient_api_base_url.trim_end_matches('/')
    }
}
