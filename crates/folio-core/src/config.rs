use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            motion: MotionConfig::default(),
            contact: ContactConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log files live here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Tuning knobs for the scroll-driven animation engine.
///
/// Durations are in milliseconds and thresholds are area fractions; both are
/// unit-free. Distances are in page units as the original design was tuned
/// (pixels); hosts scale them to their own geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Fraction of a section that must be visible before it reveals
    #[serde(default = "default_reveal_threshold")]
    pub reveal_threshold: f64,
    /// Distance shaved off the top and bottom of the viewport when
    /// measuring section visibility
    #[serde(default = "default_reveal_margin")]
    pub reveal_margin: f64,
    /// Delay before the first child of a revealed section animates
    #[serde(default = "default_stagger_base_ms")]
    pub stagger_base_ms: u64,
    /// Additional delay per child index
    #[serde(default = "default_stagger_step_ms")]
    pub stagger_step_ms: u64,
    /// Total budget for a stepped stat counter
    #[serde(default = "default_counter_duration_ms")]
    pub counter_duration_ms: u64,
    /// Floor for the stepped counter interval
    #[serde(default = "default_counter_min_step_ms")]
    pub counter_min_step_ms: u64,
    /// Duration of an eased percent counter
    #[serde(default = "default_percent_duration_ms")]
    pub percent_duration_ms: u64,
    /// Duration of a skill-bar fill
    #[serde(default = "default_bar_fill_ms")]
    pub bar_fill_ms: u64,
    /// Visibility fraction that arms stat counters and skill bars
    #[serde(default = "default_trigger_threshold")]
    pub trigger_threshold: f64,
    /// Scroll offset below which the header never hides
    #[serde(default = "default_header_floor")]
    pub header_floor: f64,
    /// Distance added to the scroll offset when probing for the active
    /// section
    #[serde(default = "default_nav_probe_offset")]
    pub nav_probe_offset: f64,
    /// Distance subtracted from a section top when jumping to it, so the
    /// sticky header does not cover the heading
    #[serde(default = "default_nav_anchor_offset")]
    pub nav_anchor_offset: f64,
    /// Skip animations and render final values immediately
    #[serde(default)]
    pub reduced_motion: bool,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: default_reveal_threshold(),
            reveal_margin: default_reveal_margin(),
            stagger_base_ms: default_stagger_base_ms(),
            stagger_step_ms: default_stagger_step_ms(),
            counter_duration_ms: default_counter_duration_ms(),
            counter_min_step_ms: default_counter_min_step_ms(),
            percent_duration_ms: default_percent_duration_ms(),
            bar_fill_ms: default_bar_fill_ms(),
            trigger_threshold: default_trigger_threshold(),
            header_floor: default_header_floor(),
            nav_probe_offset: default_nav_probe_offset(),
            nav_anchor_offset: default_nav_anchor_offset(),
            reduced_motion: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Endpoint the contact form posts to (multipart form data)
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            request_timeout_secs: default_timeout(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Animate nav jumps instead of snapping
    #[serde(default = "default_true")]
    pub smooth_scroll: bool,
    /// Duration of an animated nav jump
    #[serde(default = "default_scroll_duration")]
    pub scroll_duration_ms: u64,
    /// Rows scrolled per key press
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            smooth_scroll: default_true(),
            scroll_duration_ms: default_scroll_duration(),
            scroll_lines: default_scroll_lines(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_reveal_threshold() -> f64 {
    0.15
}

fn default_reveal_margin() -> f64 {
    50.0
}

fn default_stagger_base_ms() -> u64 {
    100
}

fn default_stagger_step_ms() -> u64 {
    100
}

fn default_counter_duration_ms() -> u64 {
    1100
}

fn default_counter_min_step_ms() -> u64 {
    12
}

fn default_percent_duration_ms() -> u64 {
    900
}

fn default_bar_fill_ms() -> u64 {
    800
}

fn default_trigger_threshold() -> f64 {
    0.35
}

fn default_header_floor() -> f64 {
    100.0
}

fn default_nav_probe_offset() -> f64 {
    100.0
}

fn default_nav_anchor_offset() -> f64 {
    70.0
}

fn default_timeout() -> u64 {
    30
}

fn default_tick_rate() -> u64 {
    33
}

fn default_scroll_duration() -> u64 {
    150
}

fn default_scroll_lines() -> u16 {
    2
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/folio/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("folio")
            .join("config.toml")
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("folio.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_motion_config() {
        let config = MotionConfig::default();
        assert!((config.reveal_threshold - 0.15).abs() < f64::EPSILON);
        assert!((config.reveal_margin - 50.0).abs() < f64::EPSILON);
        assert_eq!(config.stagger_base_ms, 100);
        assert_eq!(config.stagger_step_ms, 100);
        assert_eq!(config.counter_duration_ms, 1100);
        assert_eq!(config.counter_min_step_ms, 12);
        assert_eq!(config.percent_duration_ms, 900);
        assert_eq!(config.bar_fill_ms, 800);
        assert!((config.trigger_threshold - 0.35).abs() < f64::EPSILON);
        assert!(!config.reduced_motion);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [motion]
            reduced_motion = true

            [contact]
            endpoint = "https://formspree.io/f/demo"
            "#,
        )
        .unwrap();

        assert!(config.motion.reduced_motion);
        assert_eq!(config.motion.counter_duration_ms, 1100);
        assert_eq!(
            config.contact.endpoint.as_deref(),
            Some("https://formspree.io/f/demo")
        );
        assert_eq!(config.contact.request_timeout_secs, 30);
    }
}
