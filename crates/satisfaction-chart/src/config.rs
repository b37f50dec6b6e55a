// File: crates/satisfaction-chart/src/config.rs
// Summary: TOML configuration (sampling, categories, chart bundle) with defaults for every key.

use anyhow::{anyhow, Context, Result};
use chart_core::{theme, Theme};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use survey_sim::{default_categories, Category, DEFAULT_SAMPLES_PER_CATEGORY, DEFAULT_SEED};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SamplingConfig {
    #[serde(default = "SamplingConfig::default_seed")]
    pub seed: u64,
    #[serde(default = "SamplingConfig::default_samples")]
    pub samples_per_category: usize,
}

impl SamplingConfig {
    fn default_seed() -> u64 {
        DEFAULT_SEED
    }
    fn default_samples() -> usize {
        DEFAULT_SAMPLES_PER_CATEGORY
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            seed: Self::default_seed(),
            samples_per_category: Self::default_samples(),
        }
    }
}

/// Everything the renderer needs besides the data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartConfig {
    pub width: i32,
    pub height: i32,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Upper limit of the value axis; the lower limit is always 0.
    pub y_max: f64,
    pub value_decimals: usize,
    pub theme: String,
    /// Error-bar cap width as a fraction of the bar width.
    pub cap_width: f32,
    pub output: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            title: "Customer Satisfaction by Product Category".into(),
            x_label: "Product Category".into(),
            y_label: "Average Satisfaction (1–5)".into(),
            y_max: 5.2,
            value_decimals: 2,
            theme: "whitegrid".into(),
            cap_width: 0.0,
            output: "chart.png".into(),
        }
    }
}

impl ChartConfig {
    /// The preset named by `theme`; an unknown name is an error listing the presets.
    pub fn resolve_theme(&self) -> Result<Theme> {
        theme::find(&self.theme).ok_or_else(|| {
            let known: Vec<_> = theme::presets().iter().map(|t| t.name).collect();
            anyhow!("unknown theme {:?} (expected one of: {})", self.theme, known.join(", "))
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub sampling: SamplingConfig,
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sampling: SamplingConfig::default(),
            chart: ChartConfig::default(),
            categories: default_categories(),
        }
    }
}

impl AppConfig {
    /// Parse `path` when it exists; defaults otherwise. A file that exists but
    /// cannot be read or parsed is an error, never silently replaced.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
        let cfg = Self::from_toml(&contents).with_context(|| format!("parsing config {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(cfg)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_run() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.sampling.seed, 42);
        assert_eq!(cfg.sampling.samples_per_category, 60);
        assert_eq!(cfg.categories.len(), 5);
        assert_eq!((cfg.chart.width, cfg.chart.height), (512, 512));
        assert_eq!(cfg.chart.value_decimals, 2);
        assert_eq!(cfg.chart.output, "chart.png");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let text = r#"
            [sampling]
            seed = 7

            [chart]
            title = "Custom"

            [[categories]]
            name = "Books"
            mean = 4.4
            spread = 0.3
        "#;
        let cfg = AppConfig::from_toml(text).expect("parse");
        assert_eq!(cfg.sampling.seed, 7);
        assert_eq!(cfg.sampling.samples_per_category, 60);
        assert_eq!(cfg.chart.title, "Custom");
        assert_eq!(cfg.chart.y_max, 5.2);
        assert_eq!(cfg.categories, vec![Category::new("Books", 4.4, 0.3)]);
    }

    #[test]
    fn empty_file_is_all_defaults() {
        assert_eq!(AppConfig::from_toml("").expect("parse"), AppConfig::default());
    }

    #[test]
    fn toml_roundtrip_of_defaults() {
        let text = AppConfig::default().to_toml().expect("serialize");
        assert!(text.contains("[[categories]]"));
        assert_eq!(AppConfig::from_toml(&text).expect("reparse"), AppConfig::default());
    }

    #[test]
    fn missing_file_gives_defaults_and_bad_file_errors() {
        let dir = std::env::temp_dir().join(format!("satisfaction-chart-cfg-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("tmp dir");

        let missing = dir.join("absent.toml");
        assert_eq!(AppConfig::load_or_default(&missing).expect("defaults"), AppConfig::default());

        let bad = dir.join("bad.toml");
        fs::write(&bad, "[sampling]\nseed = \"not a number\"\n").expect("write");
        assert!(AppConfig::load_or_default(&bad).is_err());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn theme_names_resolve_or_error() {
        let mut chart = ChartConfig::default();
        assert_eq!(chart.resolve_theme().expect("default theme").name, "whitegrid");
        chart.theme = "Dark".into();
        assert_eq!(chart.resolve_theme().expect("dark").name, "dark");
        chart.theme = "whitegird".into();
        let msg = chart.resolve_theme().expect_err("misspelled").to_string();
        assert!(msg.contains("whitegird") && msg.contains("high-contrast"), "{msg}");
    }
}
