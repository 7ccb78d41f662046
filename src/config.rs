use thiserror::Error;

pub const RAPIDAPI_HOST: &str = "PORTFOLIO_RAPIDAPI_HOST";
pub const RAPIDAPI_KEY: &str = "PORTFOLIO_RAPIDAPI_KEY";
pub const VERIFY_ENDPOINT: &str = "PORTFOLIO_VERIFY_ENDPOINT";
pub const EMAIL_SERVICE_ID: &str = "PORTFOLIO_EMAIL_SERVICE_ID";
pub const EMAIL_TEMPLATE_ID: &str = "PORTFOLIO_EMAIL_TEMPLATE_ID";
pub const EMAIL_PUBLIC_KEY: &str = "PORTFOLIO_EMAIL_PUBLIC_KEY";
pub const RELAY_ENDPOINT: &str = "PORTFOLIO_RELAY_ENDPOINT";

const DEFAULT_RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing configuration value `{0}`")]
    Missing(&'static str),
}

/// Credentials for the email verification API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationConfig {
    pub endpoint: String,
    pub api_host: String,
    pub api_key: String,
}

/// Identifiers for the email delivery relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// Everything the contact form needs to reach its external services.
///
/// Passed explicitly (through Leptos context) instead of being looked up
/// ad hoc at call time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub verification: VerificationConfig,
    pub relay: RelayConfig,
}

impl SiteConfig {
    /// Build the config from an arbitrary key lookup.
    ///
    /// Empty values count as missing. The verification endpoint defaults to
    /// `https://<host>/verify`; the relay endpoint defaults to EmailJS.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| optional(key).ok_or(ConfigError::Missing(key));

        let api_host = required(RAPIDAPI_HOST)?;
        let verification = VerificationConfig {
            endpoint: optional(VERIFY_ENDPOINT)
                .unwrap_or_else(|| format!("https://{}/verify", api_host)),
            api_key: required(RAPIDAPI_KEY)?,
            api_host,
        };

        let relay = RelayConfig {
            endpoint: optional(RELAY_ENDPOINT).unwrap_or_else(|| DEFAULT_RELAY_ENDPOINT.to_string()),
            service_id: required(EMAIL_SERVICE_ID)?,
            template_id: required(EMAIL_TEMPLATE_ID)?,
            public_key: required(EMAIL_PUBLIC_KEY)?,
        };

        Ok(Self { verification, relay })
    }

    /// Build the config from variables captured when the WASM bundle was compiled.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(build_env)
    }
}

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        RAPIDAPI_HOST => option_env!("PORTFOLIO_RAPIDAPI_HOST"),
        RAPIDAPI_KEY => option_env!("PORTFOLIO_RAPIDAPI_KEY"),
        VERIFY_ENDPOINT => option_env!("PORTFOLIO_VERIFY_ENDPOINT"),
        EMAIL_SERVICE_ID => option_env!("PORTFOLIO_EMAIL_SERVICE_ID"),
        EMAIL_TEMPLATE_ID => option_env!("PORTFOLIO_EMAIL_TEMPLATE_ID"),
        EMAIL_PUBLIC_KEY => option_env!("PORTFOLIO_EMAIL_PUBLIC_KEY"),
        RELAY_ENDPOINT => option_env!("PORTFOLIO_RELAY_ENDPOINT"),
        _ => None,
    };
    value.map(str::to_owned)
}
