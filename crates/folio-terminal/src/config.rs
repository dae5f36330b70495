//! Terminal session configuration

use serde::{Deserialize, Serialize};
use crate::error::TerminalError;

/// Identity and location of the simulated shell session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TerminalConfig {
    /// Name shown in the prompt and by `whoami`
    pub user: String,
    /// Account name used in file listings and the `neofetch` header
    pub login: String,
    /// Host name shown in the prompt
    pub host: String,
    /// Absolute home directory
    pub home: String,
    /// Working directory relative to home, `~` for home itself
    pub cwd: String,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            user: "MrFawsDK".to_string(),
            login: "mrfawsdk".to_string(),
            host: "portfolio".to_string(),
            home: "/home/mrfawsdk".to_string(),
            cwd: "~".to_string(),
        }
    }
}

impl TerminalConfig {
    /// Parse and validate config from JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, TerminalError> {
        let config: TerminalConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), TerminalError> {
        if self.user.is_empty() || self.login.is_empty() || self.host.is_empty() {
            return Err(TerminalError::InvalidConfig(
                "user, login and host must not be empty".to_string(),
            ));
        }
        if !self.home.starts_with('/') {
            return Err(TerminalError::InvalidConfig(format!(
                "home must be an absolute path, got {:?}",
                self.home
            )));
        }
        Ok(())
    }

    /// Prompt echoed before each submitted line
    pub fn prompt(&self) -> String {
        format!("{}@{}:{}$ ", self.user, self.host, self.cwd)
    }

    /// Absolute working directory
    pub fn working_dir(&self) -> String {
        if self.cwd == "~" {
            self.home.clone()
        } else {
            format!("{}/{}", self.home, self.cwd)
        }
    }
}
