use log::LevelFilter;
use madden_api::LeagueId;
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_REFRESH_SECS: u64 = 300;

#[derive(Debug, Default, Clone)]
pub struct AppSettings {
    pub full_screen: bool,
    pub log_level: Option<LevelFilter>,
    pub api_url: String,
    pub league: LeagueId,
    pub snapshot: Option<PathBuf>,
    pub refresh_secs: u64,
}

/// Optional `settings.json` next to the other per-user config.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct FileSettings {
    pub api_url: Option<String>,
    pub league_id: Option<String>,
    pub snapshot: Option<PathBuf>,
    pub log_level: Option<String>,
    pub refresh_secs: Option<u64>,
    pub full_screen: Option<bool>,
}

impl AppSettings {
    pub fn load() -> Self {
        let file = settings_path().and_then(|path| {
            let content = std::fs::read_to_string(&path).ok()?;
            match serde_json::from_str::<FileSettings>(&content) {
                Ok(settings) => Some(settings),
                Err(e) => {
                    eprintln!("ignoring {}: {e}", path.display());
                    None
                }
            }
        });
        Self::from_sources(file, |key| std::env::var(key).ok())
    }

    /// Defaults, then the settings file, then environment variables.
    pub fn from_sources(file: Option<FileSettings>, env: impl Fn(&str) -> Option<String>) -> Self {
        let file = file.unwrap_or_default();
        let env = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let api_url = env("LEAGUE_HUB_API_URL")
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let league = env("LEAGUE_HUB_LEAGUE_ID")
            .or(file.league_id)
            .map(|id| LeagueId::new(id.trim()))
            .unwrap_or_default();
        let snapshot = env("LEAGUE_HUB_SNAPSHOT").map(PathBuf::from).or(file.snapshot);
        let log_level = env("LEAGUE_HUB_LOG")
            .or(file.log_level)
            .and_then(|level| LevelFilter::from_str(level.trim()).ok());

        Self {
            full_screen: file.full_screen.unwrap_or(false),
            log_level,
            api_url,
            league,
            snapshot,
            refresh_secs: file.refresh_secs.filter(|s| *s > 0).unwrap_or(DEFAULT_REFRESH_SECS),
        }
    }
}

fn settings_path() -> Option<PathBuf> {
    if let Ok(config_dir) = std::env::var("XDG_CONFIG_HOME")
        && !config_dir.trim().is_empty()
    {
        return Some(PathBuf::from(config_dir).join("league-hub").join("settings.json"));
    }
    if let Ok(home) = std::env::var("HOME")
        && !home.trim().is_empty()
    {
        return Some(
            PathBuf::from(home)
                .join(".config")
                .join("league-hub")
                .join("settings.json"),
        );
    }
    None
}
