//! Configuration utilities

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub app_name: String,
    pub log_level: String,
    pub pretty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "employee".to_string(),
            log_level: "info".to_string(),
            pretty: true,
        }
    }
}

impl AppConfig {
    /// Load config từ environment variables
    ///
    /// Biến thiếu hoặc không parse được thì dùng giá trị mặc định.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load config từ một hàm lookup bất kỳ (dùng trong test)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            app_name: lookup("APP_NAME").unwrap_or(defaults.app_name),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            pretty: parse_or(lookup("PRETTY_JSON"), defaults.pretty),
        }
    }

    /// Serialize một giá trị sang JSON theo `pretty`
    pub fn to_json<T: Serialize>(&self, value: &T) -> serde_json::Result<String> {
        if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
    }
}

fn parse_or<T: FromStr>(raw: Option<String>, default: T) -> T {
    match raw {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("Ignoring unparsable config value {:?}", raw);
            default
        }),
        None => default,
    }
}
