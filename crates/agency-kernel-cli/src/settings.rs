use std::fs;
use std::path::Path;

use agency_kernel_core::Period;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Settings screen toggles plus the analytics period used when `--period` is omitted.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub push_notifications: bool,
    pub email_reports: bool,
    pub campaign_alerts: bool,
    pub default_period: Period,
    pub offline_banner: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            push_notifications: true,
            email_reports: true,
            campaign_alerts: false,
            default_period: Period::Month,
            offline_banner: true,
        }
    }
}

impl Settings {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let body = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        let settings = Self::from_yaml(&body)
            .with_context(|| format!("failed to parse settings file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    pub fn from_yaml(body: &str) -> Result<Self> {
        if body.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_settings_screen() {
        let settings = Settings::default();
        assert!(settings.push_notifications);
        assert!(settings.email_reports);
        assert!(!settings.campaign_alerts);
        assert!(settings.offline_banner);
        assert_eq!(settings.default_period, Period::Month);
    }

    #[test]
    fn partial_yaml_keeps_remaining_defaults() {
        let settings = Settings::from_yaml("campaign_alerts: true\ndefault_period: quarter\n")
            .unwrap_or_else(|err| panic!("settings should parse: {err}"));
        assert!(settings.campaign_alerts);
        assert_eq!(settings.default_period, Period::Quarter);
        assert!(settings.push_notifications);
    }

    #[test]
    fn empty_file_means_defaults() {
        let settings =
            Settings::from_yaml("\n").unwrap_or_else(|err| panic!("empty settings: {err}"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn unknown_keys_and_periods_are_rejected() {
        assert!(Settings::from_yaml("dark_mode: true\n").is_err());
        assert!(Settings::from_yaml("default_period: year\n").is_err());
    }

    #[test]
    fn missing_file_names_path_in_error() {
        let err = Settings::load(Some(Path::new("/nonexistent/agency-settings.yaml")))
            .err()
            .unwrap_or_else(|| panic!("missing settings file should fail"));
        assert!(format!("{err:#}").contains("/nonexistent/agency-settings.yaml"));
    }
}
