use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 15;
const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_CHATGPT_MODEL: &str = "gpt-3.5-turbo";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provider {
    Gemini,
    ChatGpt,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("unknown AI_PROVIDER {0:?}, expected \"gemini\" or \"chatgpt\"")]
    UnknownProvider(String),
    #[error("AI_TIMEOUT_SECS must be a positive number of seconds, got {0:?}")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub provider: Provider,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through `lookup`, so tests need not touch the real environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let provider = match var("AI_PROVIDER").as_deref().map(str::trim) {
            None => Provider::Gemini,
            Some(p) if p.eq_ignore_ascii_case("gemini") => Provider::Gemini,
            Some(p) if p.eq_ignore_ascii_case("chatgpt") => Provider::ChatGpt,
            Some(other) => return Err(ConfigError::UnknownProvider(other.to_string())),
        };

        let api_key = match provider {
            Provider::Gemini => var("GEMINI_API_KEY")
                .or_else(|| var("API_KEY"))
                .ok_or(ConfigError::Missing("GEMINI_API_KEY"))?,
            Provider::ChatGpt => var("CHATGPT_API_KEY").ok_or(ConfigError::Missing("CHATGPT_API_KEY"))?,
        };

        let model = var("AI_MODEL").unwrap_or_else(|| match provider {
            Provider::Gemini => DEFAULT_GEMINI_MODEL.to_string(),
            Provider::ChatGpt => DEFAULT_CHATGPT_MODEL.to_string(),
        });

        let timeout = match var("AI_TIMEOUT_SECS") {
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
        };

        Ok(Self {
            provider,
            api_key,
            model,
            timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn gemini_is_the_default_provider() {
        let config = config(&[("GEMINI_API_KEY", "g-key")]).unwrap();
        assert_eq!(config.provider, Provider::Gemini);
        assert_eq!(config.api_key, "g-key");
        assert_eq!(config.model, "gemini-3-flash-preview");
        assert_eq!(config.timeout, Duration::from_secs(15));
    }

    #[test]
    fn gemini_key_falls_back_to_api_key() {
        let config = config(&[("API_KEY", "legacy")]).unwrap();
        assert_eq!(config.api_key, "legacy");
    }

    #[test]
    fn chatgpt_needs_its_own_key() {
        assert_eq!(
            config(&[("AI_PROVIDER", "chatgpt"), ("GEMINI_API_KEY", "g")]),
            Err(ConfigError::Missing("CHATGPT_API_KEY"))
        );
        let config = config(&[("AI_PROVIDER", "ChatGPT"), ("CHATGPT_API_KEY", "c")]).unwrap();
        assert_eq!(config.provider, Provider::ChatGpt);
        assert_eq!(config.model, "gpt-3.5-turbo");
    }

    #[test]
    fn unknown_provider_is_rejected() {
        assert_eq!(
            config(&[("AI_PROVIDER", "llama")]),
            Err(ConfigError::UnknownProvider("llama".into()))
        );
    }

    #[test]
    fn timeout_and_model_overrides() {
        let config = config(&[
            ("GEMINI_API_KEY", "k"),
            ("AI_MODEL", "gemini-2.5-pro"),
            ("AI_TIMEOUT_SECS", "40"),
        ])
        .unwrap();
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.timeout, Duration::from_secs(40));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(matches!(
            config(&[("GEMINI_API_KEY", "k"), ("AI_TIMEOUT_SECS", "0")]),
            Err(ConfigError::InvalidTimeout(_))
        ));
    }
}
