use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub collaborator: CollaboratorConfig,
    pub booking: BookingRules,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CollaboratorConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub request_timeout_seconds: u64,
}

impl CollaboratorConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct BookingRules {
    /// Payment method sent on every submission. A payment-method field
    /// exists end-to-end but is not user-selectable today; the constant is
    /// preserved until product requirements say otherwise.
    #[serde(default = "default_payment_method")]
    pub payment_method: String,
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_payment_method() -> String {
    "transfer".to_string()
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `KERETA__COLLABORATOR__BASE_URL=...`
            .add_source(config::Environment::with_prefix("KERETA").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply() {
        let cfg: Config = serde_json::from_value(serde_json::json!({
            "collaborator": { "base_url": "https://inventory.example.test" },
            "booking": {}
        }))
        .unwrap();

        assert_eq!(cfg.collaborator.request_timeout(), Duration::from_secs(30));
        assert_eq!(cfg.booking.payment_method, "transfer");
    }
}
