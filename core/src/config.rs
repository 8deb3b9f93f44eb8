//! Host-supplied settings and the endpoint URLs derived from them.

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://reqres.in/api";

/// Largest id the get-one input accepts; the remote API seeds this many users.
pub const DEFAULT_MAX_ID: u64 = 12;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub max_id: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_id: DEFAULT_MAX_ID,
        }
    }
}

impl Config {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(&self.base_url)
    }
}

/// The three fixed resource URLs under one host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn list_users(&self) -> String {
        format!("{}/users", self.base_url)
    }

    pub fn user(&self, id: u64) -> String {
        format!("{}/users/{id}", self.base_url)
    }

    pub fn create_user(&self) -> String {
        format!("{}/users", self.base_url)
    }
}
