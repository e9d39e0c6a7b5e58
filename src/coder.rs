use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A team member who may or may not be coding at this very moment.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Coder {
    pub email: String,
    #[serde(default, with = "empty_string")]
    pub username: Option<String>,
    #[serde(default, rename = "last_project", with = "empty_string")]
    pub current_project: Option<String>,
    #[serde(default, with = "empty_string")]
    pub timezone: Option<String>,
    /// `null` for members that have never sent a heartbeat.
    #[serde(default)]
    pub last_heartbeat: Option<DateTime<Utc>>,
}

impl Coder {
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or(self.email.as_str())
    }

    pub fn project(&self) -> &str {
        self.current_project.as_deref().unwrap_or("")
    }
}

/// The API reports unset strings as either `null` or `""`; both map to `None`.
mod empty_string {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.filter(|s| !s.trim().is_empty()))
    }
}
