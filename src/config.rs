use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

/// Cricket match preview generator
#[derive(Parser, Debug, Clone)]
#[command(name = "ipl-insights", version, about)]
pub struct Config {
    /// Run without any network calls (every fetch uses its fallback)
    #[arg(long, env = "OFFLINE", default_value = "false")]
    pub offline: bool,

    /// CricAPI base URL
    #[arg(long, env = "CRICAPI_URL", default_value = "https://api.cricapi.com/v1")]
    pub api_url: String,

    /// CricAPI key (required unless --offline)
    #[arg(long, env = "CRICAPI_KEY")]
    pub api_key: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value = "10")]
    pub request_timeout_secs: u64,

    /// Override team A (otherwise taken from the first fetched fixture)
    #[arg(long, env = "TEAM_A")]
    pub team_a: Option<String>,

    /// Override team B
    #[arg(long, env = "TEAM_B")]
    pub team_b: Option<String>,

    /// Override the venue name
    #[arg(long, env = "VENUE")]
    pub venue: Option<String>,

    /// Recent form for team A: W/L/D tokens, space or comma separated
    #[arg(long, env = "FORM_A", default_value = "W L W W L")]
    pub form_a: String,

    /// Recent form for team B
    #[arg(long, env = "FORM_B", default_value = "L W L L W")]
    pub form_b: String,

    /// Match date (YYYY-MM-DD); defaults to today in UTC
    #[arg(long, env = "MATCH_DATE")]
    pub date: Option<NaiveDate>,

    /// Local JSON file of historical meetings (newest first), used for the
    /// head-to-head summary instead of any provider endpoint
    #[arg(long, env = "HISTORY_FILE")]
    pub history_file: Option<PathBuf>,

    /// Root directory for all generated artifacts
    #[arg(long, env = "OUT_DIR", default_value = "site")]
    pub out_dir: PathBuf,

    /// TTF font for the match card; missing font skips the text layers
    #[arg(long, env = "CARD_FONT", default_value = "assets/fonts/DejaVuSans.ttf")]
    pub card_font: PathBuf,

    /// Directory holding optional team logo PNGs (<slug>.png)
    #[arg(long, env = "LOGO_DIR", default_value = "assets/img/logos")]
    pub logo_dir: PathBuf,

    /// Public base URL of the published site, used in Telegram and RSS links
    #[arg(
        long,
        env = "SITE_BASE_URL",
        default_value = "https://example.github.io/ipl-insights"
    )]
    pub site_base_url: String,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.offline && self.api_key.is_none() {
            anyhow::bail!(
                "CRICAPI_KEY is required for live data. Use --offline to generate from fallbacks."
            );
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 120 {
            anyhow::bail!("request_timeout_secs must be between 1 and 120");
        }
        if self.site_base_url.trim_end_matches('/').is_empty() {
            anyhow::bail!("site_base_url must not be empty");
        }
        Ok(())
    }

    /// Site base URL without a trailing slash.
    pub fn site_root(&self) -> &str {
        self.site_base_url.trim_end_matches('/')
    }

    #[cfg(test)]
    pub fn offline_for_tests() -> Self {
        Config {
            offline: true,
            api_url: "https://api.cricapi.com/v1".into(),
            api_key: None,
            request_timeout_secs: 10,
            team_a: None,
            team_b: None,
            venue: None,
            form_a: "W L W W L".into(),
            form_b: "L W L L W".into(),
            date: None,
            history_file: None,
            out_dir: PathBuf::from("site"),
            card_font: PathBuf::from("assets/fonts/DejaVuSans.ttf"),
            logo_dir: PathBuf::from("assets/img/logos"),
            site_base_url: "https://example.github.io/ipl-insights".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offline_needs_no_key() {
        let config = Config::offline_for_tests();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn live_mode_requires_key() {
        let mut config = Config::offline_for_tests();
        config.offline = false;
        assert!(config.validate().is_err());
        config.api_key = Some("k".into());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn timeout_bounds_are_enforced() {
        let mut config = Config::offline_for_tests();
        config.request_timeout_secs = 0;
        assert!(config.validate().is_err());
        config.request_timeout_secs = 121;
        assert!(config.validate().is_err());
    }

    #[test]
    fn site_root_strips_trailing_slash() {
        let mut config = Config::offline_for_tests();
        config.site_base_url = "https://example.org/site/".into();
        assert_eq!(config.site_root(), "https://example.org/site");
    }
}
