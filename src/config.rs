use xdg::BaseDirectories;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use ratatui::style::Color;

use crate::formatting::BoxChars;
use crate::types::GameStatus;

pub const DEFAULT_DATA_BASE_URL: &str = "http://data.nba.com/data/5s/json/cms/noseason";
pub const DEFAULT_STATS_BASE_URL: &str = "https://stats.nba.com/stats";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    pub time_format: String,
    pub live: LiveConfig,
    pub api: ApiConfig,
    pub display: DisplayConfig,
}

/// Polling cadence of the live dashboard, in seconds
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LiveConfig {
    pub poll_interval: u64,
    pub halftime_poll_interval: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub data_base_url: String,
    pub stats_base_url: String,
    /// Per-request timeout in seconds
    pub request_timeout: u64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub use_unicode: bool,
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub header_fg: Color,
    #[serde(skip)]
    pub box_chars: BoxChars,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            time_format: "%H:%M".to_string(),
            live: LiveConfig::default(),
            api: ApiConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for LiveConfig {
    fn default() -> Self {
        LiveConfig {
            poll_interval: 3,
            halftime_poll_interval: 15,
        }
    }
}

impl LiveConfig {
    /// How long to wait before the next poll, given the refreshed game status
    pub fn interval_for(&self, status: GameStatus) -> Duration {
        match status {
            GameStatus::Halftime => Duration::from_secs(self.halftime_poll_interval),
            _ => Duration::from_secs(self.poll_interval),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            data_base_url: DEFAULT_DATA_BASE_URL.to_string(),
            stats_base_url: DEFAULT_STATS_BASE_URL.to_string(),
            request_timeout: 10,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            use_unicode: true,
            selection_fg: Color::Rgb(255, 165, 0), // Orange
            header_fg: Color::Rgb(159, 226, 191), // Seafoam
            box_chars: BoxChars::unicode(),
        }
    }
}

/// Deserialize a color from a string (supports named colors, RGB hex, or RGB tuple)
fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s)))
}

/// Parse a color string into a ratatui Color
/// Supports:
/// - Named colors: "red", "blue", "cyan", "orange", etc.
/// - Hex colors: "#FF6600", "#f60"
/// - RGB tuples: "255,165,0"
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    match s.as_str() {
        "black" => return Some(Color::Black),
        "red" => return Some(Color::Red),
        "green" => return Some(Color::Green),
        "yellow" => return Some(Color::Yellow),
        "blue" => return Some(Color::Blue),
        "magenta" => return Some(Color::Magenta),
        "cyan" => return Some(Color::Cyan),
        "gray" | "grey" => return Some(Color::Gray),
        "darkgray" | "darkgrey" => return Some(Color::DarkGray),
        "white" => return Some(Color::White),
        "orange" => return Some(Color::Rgb(255, 165, 0)),
        _ => {}
    }

    if let Some(hex) = s.strip_prefix('#') {
        if !hex.is_ascii() {
            return None;
        }
        return match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Color::Rgb(r, g, b))
            }
            3 => {
                let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
                Some(Color::Rgb(r, g, b))
            }
            _ => None,
        };
    }

    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() == 3 {
        let r = parts[0].trim().parse::<u8>().ok()?;
        let g = parts[1].trim().parse::<u8>().ok()?;
        let b = parts[2].trim().parse::<u8>().ok()?;
        return Some(Color::Rgb(r, g, b));
    }

    None
}

/// Parse a config file body; box characters follow `display.use_unicode`
pub fn parse(content: &str) -> Result<Config, toml::de::Error> {
    let mut config: Config = toml::from_str(content)?;
    config.display.box_chars = BoxChars::from_use_unicode(config.display.use_unicode);
    Ok(config)
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

pub fn read() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default(),
    };

    if !config_path.exists() {
        return Config::default();
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };

    parse(&content).unwrap_or_else(|_| Config::default())
}
