use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_DIR_NAME: &str = "expense-tracker";

/// Stores user-configurable display preferences and the data location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for expense and category files.
    pub data_dir: Option<PathBuf>,
    pub page_size: usize,
    pub trend_window: usize,
    pub line_chart: LineChartConfig,
    pub pie_size: f64,
    /// Display-only prefix for amounts.
    pub currency_symbol: String,
    pub ui_color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            page_size: 10,
            trend_window: 6,
            line_chart: LineChartConfig::default(),
            pie_size: 200.0,
            currency_symbol: "₹".into(),
            ui_color_enabled: true,
        }
    }
}

impl Config {
    /// Returns the configured data directory, or `<platform data dir>/expense-tracker`.
    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(path) = &self.data_dir {
            return path.clone();
        }

        let base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join(APP_DIR_NAME)
    }

    /// Default location of the config file itself.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
            .join("config.json")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineChartConfig {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 200.0,
            padding: 20.0,
        }
    }
}
