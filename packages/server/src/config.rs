use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

pub const DEFAULT_PORT: u16 = 3000;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Single origin allowed by CORS. `None` allows any origin.
    pub cors_allowed_origin: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            cors_allowed_origin: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(port) => port.trim().parse().context("PORT must be a valid number")?,
            None => DEFAULT_PORT,
        };

        let cors_allowed_origin = lookup("CORS_ALLOWED_ORIGIN")
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty());

        if let Some(origin) = &cors_allowed_origin {
            axum::http::HeaderValue::from_str(origin)
                .context("CORS_ALLOWED_ORIGIN must be a valid header value")?;
        }

        Ok(Self {
            port,
            cors_allowed_origin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config(&[]).unwrap(), Config::default());
        assert_eq!(Config::default().port, 3000);
    }

    #[test]
    fn test_port_and_origin() {
        let config = config(&[
            ("PORT", "8080"),
            ("CORS_ALLOWED_ORIGIN", "https://waitlist.example.com"),
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.cors_allowed_origin.as_deref(),
            Some("https://waitlist.example.com")
        );
    }

    #[test]
    fn test_blank_origin_is_permissive() {
        assert_eq!(
            config(&[("CORS_ALLOWED_ORIGIN", "  ")])
                .unwrap()
                .cors_allowed_origin,
            None
        );
    }

    #[test]
    fn test_bad_port_is_rejected() {
        let err = config(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
