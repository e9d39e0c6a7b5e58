use std::env;

use url::Url;

use crate::client::{ApiKey, DEFAULT_BASE_URL};
use crate::error::{Error, Result};
use crate::team::TeamId;

pub const API_KEY_VAR: &str = "WAKATIME_API_KEY";
pub const TEAM_VAR: &str = "WAKATIME_TEAM_GUID";
pub const API_URL_VAR: &str = "WAKATIME_API_URL";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: ApiKey,
    pub team: TeamId,
    pub base_url: Url,
}

impl Config {
    /// Read secrets from `.env` and the process environment.
    pub fn load() -> Result<Self> {
        dotenv::dotenv()
            .map_err(|err| Error::Config(format!("error loading .env file: {}", err)))?;
        Config::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| Error::Config(format!("{} must be set", name)))
        };

        let api_key = ApiKey::new(required(API_KEY_VAR)?);
        let team = TeamId::new(required(TEAM_VAR)?);
        let base_url: Url = match lookup(API_URL_VAR).filter(|value| !value.trim().is_empty()) {
            Some(url) => url.trim().parse::<Url>()?,
            None => DEFAULT_BASE_URL.parse::<Url>()?,
        };

        Ok(Config {
            api_key,
            team,
            base_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn reads_credentials_and_default_url() {
        let config = Config::from_lookup(lookup(&[
            (API_KEY_VAR, "waka_key"),
            (TEAM_VAR, "team-guid"),
        ]))
        .unwrap();

        assert_eq!(config.api_key.as_str(), "waka_key");
        assert_eq!(config.team.as_str(), "team-guid");
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
    }

    #[test]
    fn missing_api_key_is_a_config_error() {
        let result = Config::from_lookup(lookup(&[(TEAM_VAR, "team-guid")]));
        match result {
            Err(Error::Config(message)) => assert!(message.contains(API_KEY_VAR)),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn blank_team_is_a_config_error() {
        let result = Config::from_lookup(lookup(&[
            (API_KEY_VAR, "waka_key"),
            (TEAM_VAR, "  "),
        ]));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn api_url_can_be_overridden() {
        let config = Config::from_lookup(lookup(&[
            (API_KEY_VAR, "waka_key"),
            (TEAM_VAR, "team-guid"),
            (API_URL_VAR, "http://127.0.0.1:8080/api/v1/"),
        ]))
        .unwrap();
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:8080/api/v1/");
    }

    #[test]
    fn invalid_api_url_is_rejected() {
        let result = Config::from_lookup(lookup(&[
            (API_KEY_VAR, "waka_key"),
            (TEAM_VAR, "team-guid"),
            (API_URL_VAR, "not a url"),
        ]));
        assert!(matches!(result, Err(Error::Url(_))));
    }
}
