use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub autoscroll: AutoscrollConfig,
    #[serde(default)]
    pub page_control: PageControlConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Geometry and content description of the carousel, supplied by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Number of logical items (N)
    #[serde(default = "default_item_count")]
    pub item_count: usize,
    /// Item width in layout units
    #[serde(default = "default_item_width")]
    pub item_width: f64,
    /// Item height in layout units
    #[serde(default = "default_item_height")]
    pub item_height: f64,
    /// Gap between adjacent items in layout units
    #[serde(default = "default_item_spacing")]
    pub item_spacing: f64,
    /// Padded slot shown first (1 = first real item)
    #[serde(default = "default_initial_slot")]
    pub initial_slot: usize,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            item_count: default_item_count(),
            item_width: default_item_width(),
            item_height: default_item_height(),
            item_spacing: default_item_spacing(),
            initial_slot: default_initial_slot(),
        }
    }
}

impl CarouselConfig {
    /// Distance between the leading edges of two adjacent items
    #[inline]
    pub fn item_extent(&self) -> f64 {
        self.item_width + self.item_spacing
    }

    /// Check that the geometry can drive a carousel
    pub fn validate(&self) -> crate::Result<()> {
        let fields = [
            ("item_width", self.item_width),
            ("item_height", self.item_height),
            ("item_spacing", self.item_spacing),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(crate::Error::InvalidGeometry(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }
        if self.item_width <= 0.0 || self.item_height <= 0.0 {
            return Err(crate::Error::InvalidGeometry(format!(
                "item size must be positive, got {}x{}",
                self.item_width, self.item_height
            )));
        }
        if self.item_spacing < 0.0 {
            return Err(crate::Error::InvalidGeometry(format!(
                "item_spacing must not be negative, got {}",
                self.item_spacing
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoscrollConfig {
    /// Advance automatically while the user is not interacting
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Delay between automatic advances in milliseconds
    #[serde(default = "default_autoscroll_interval")]
    pub interval_ms: u64,
}

impl Default for AutoscrollConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            interval_ms: default_autoscroll_interval(),
        }
    }
}

/// Dot geometry and colors of the page control
///
/// Colors accept a hex string ("#RRGGBB", "RGB", "#RRGGBBAA") or a named
/// color such as "gray" or "indigo". Anything unresolvable falls back to the
/// built-in default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageControlConfig {
    #[serde(default = "default_dot_width")]
    pub dot_width: f64,
    #[serde(default = "default_dot_height")]
    pub dot_height: f64,
    /// Extra width of the fully active dot
    #[serde(default = "default_dot_add_active_width")]
    pub dot_add_active_width: f64,
    #[serde(default = "default_dot_spacing")]
    pub dot_spacing: f64,
    #[serde(default = "default_corner_radius")]
    pub corner_radius: f64,
    #[serde(default = "default_active_color")]
    pub active_color: String,
    #[serde(default = "default_inactive_color")]
    pub inactive_color: String,
}

impl Default for PageControlConfig {
    fn default() -> Self {
        Self {
            dot_width: default_dot_width(),
            dot_height: default_dot_height(),
            dot_add_active_width: default_dot_add_active_width(),
            dot_spacing: default_dot_spacing(),
            corner_radius: default_corner_radius(),
            active_color: default_active_color(),
            inactive_color: default_inactive_color(),
        }
    }
}

/// Easing curve used by settle animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    EaseOut,
}

/// Settle animation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate snaps; when false every snap is an instant jump
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Frame rate the host should tick at while an animation runs
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds while nothing animates
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Layout units per terminal column
    #[serde(default = "default_units_per_column")]
    pub units_per_column: f64,
    /// Labels of the demo items; item_count is taken from here when non-empty
    #[serde(default)]
    pub items: Vec<String>,
    /// Theme name
    #[serde(default = "default_theme_name")]
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            units_per_column: default_units_per_column(),
            items: Vec::new(),
            theme: default_theme_name(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_item_count() -> usize {
    3
}

fn default_item_width() -> f64 {
    256.0
}

fn default_item_height() -> f64 {
    128.0
}

fn default_item_spacing() -> f64 {
    12.0
}

fn default_initial_slot() -> usize {
    1
}

fn default_autoscroll_interval() -> u64 {
    5000
}

fn default_dot_width() -> f64 {
    8.0
}

fn default_dot_height() -> f64 {
    4.0
}

fn default_dot_add_active_width() -> f64 {
    16.0
}

fn default_dot_spacing() -> f64 {
    4.0
}

fn default_corner_radius() -> f64 {
    2.0
}

fn default_active_color() -> String {
    "gray".to_string()
}

fn default_inactive_color() -> String {
    "indigo".to_string()
}

fn default_animation_duration() -> u64 {
    300
}

fn default_animation_fps() -> u32 {
    60
}

fn default_tick_rate() -> u64 {
    100
}

fn default_units_per_column() -> f64 {
    8.0
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml_str(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        let mut config: Self =
            toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;
        if !config.ui.items.is_empty() {
            config.carousel.item_count = config.ui.items.len();
        }
        config.carousel.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = self.to_toml_string()?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Serialize configuration as pretty TOML
    pub fn to_toml_string(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/carousel/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("carousel")
            .join("config.toml")
    }
}
