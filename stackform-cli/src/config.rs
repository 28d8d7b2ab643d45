//! Configuration module
//!
//! Holds the API connection settings gathered from flags and environment.

use anyhow::Result;
use stackform_client::ApiClient;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// GraphQL endpoint of the platform
    pub api_url: String,

    /// Bearer token for the API
    pub api_token: Option<String>,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_url.is_empty() {
            anyhow::bail!("api_url cannot be empty");
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            anyhow::bail!("api_url must start with http:// or https://");
        }

        if matches!(&self.api_token, Some(token) if token.trim().is_empty()) {
            anyhow::bail!("api_token cannot be blank");
        }

        Ok(())
    }

    /// Build an API client from this configuration
    pub fn client(&self) -> Result<ApiClient> {
        self.validate()?;

        let client = ApiClient::new(&self.api_url);
        Ok(match &self.api_token {
            Some(token) => client.with_token(token),
            None => client,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            api_url: "https://example.app.io/graphql".to_string(),
            api_token: None,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = config();
        assert!(config.validate().is_ok());

        config.api_url = String::new();
        assert!(config.validate().is_err());

        config.api_url = "example.app.io".to_string();
        assert!(config.validate().is_err());

        config.api_url = "http://localhost:8080/graphql".to_string();
        config.api_token = Some("  ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_client_carries_token() {
        let mut config = config();
        assert!(!config.client().unwrap().is_authenticated());

        config.api_token = Some("secret".to_string());
        let client = config.client().unwrap();
        assert!(client.is_authenticated());
        assert_eq!(client.endpoint(), "https://example.app.io/graphql");
    }
}
