use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

pub static CONFIG: Lazy<Arc<Config>> = Lazy::new(|| Arc::new(Config::load()));

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_copied_reset_millis")]
    pub copied_reset_millis: u64,
    #[serde(default = "default_referral_cap")]
    pub referral_cap: u32,
    #[serde(default = "default_share_title")]
    pub share_title: String,
    #[serde(default = "default_share_text")]
    pub share_text: String,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Config {
    /// Loads the config file.
    ///
    /// The frontend has no file system to read from, so the config is packaged into
    /// the binary with include_str. The build script creates an empty `config.toml`
    /// if none exists, which deserializes into the defaults.
    ///
    /// A config that fails to parse falls back to the defaults rather than taking
    /// the whole app down.
    pub fn load() -> Self {
        let config_str = include_str!("../../config.toml");
        Self::parse(config_str).unwrap_or_default()
    }

    pub fn parse(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn copied_reset_delay(&self) -> Duration {
        Duration::from_millis(self.copied_reset_millis)
    }
}

fn default_copied_reset_millis() -> u64 {
    2000
}

fn default_referral_cap() -> u32 {
    5
}

fn default_share_title() -> String {
    "Learn with me!".to_string()
}

fn default_share_text() -> String {
    "Join me on the app and we both get a free month of PRO.".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            copied_reset_millis: default_copied_reset_millis(),
            referral_cap: default_referral_cap(),
            share_title: default_share_title(),
            share_text: default_share_text(),
            log_filter: default_log_filter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_default() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.copied_reset_delay(), Duration::from_millis(2000));
        assert_eq!(config.referral_cap, 5);
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = Config::parse("share_title = \"Hey\"\nlog_filter = \"debug\"").unwrap();
        assert_eq!(config.share_title, "Hey");
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.copied_reset_millis, 2000);
    }

    #[test]
    fn invalid_config_is_an_error() {
        assert!(Config::parse("copied_reset_millis = \"soon\"").is_err());
    }

    #[test]
    fn bundled_config_loads() {
        let config = Config::load();
        assert_eq!(config.referral_cap, 5);
    }
}
