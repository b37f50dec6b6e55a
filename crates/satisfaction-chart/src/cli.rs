// File: crates/satisfaction-chart/src/cli.rs
// Summary: Command-line flags; each one overrides the matching config value.

use clap::Parser;
use std::path::PathBuf;

use crate::config::AppConfig;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Render a customer satisfaction bar chart with 95% confidence intervals")]
pub struct Args {
    /// Path to config TOML (defaults apply when the file is absent)
    #[arg(long, default_value = "satisfaction.toml")]
    pub config: PathBuf,

    /// Random seed (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Observations per category (overrides config)
    #[arg(long)]
    pub samples: Option<usize>,

    /// Output PNG path (overrides config)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Theme preset: whitegrid, dark, high-contrast
    #[arg(long)]
    pub theme: Option<String>,

    /// Also write the generated observations as CSV
    #[arg(long, value_name = "CSV")]
    pub export_csv: Option<PathBuf>,

    /// Aggregate observations from this CSV instead of generating them
    #[arg(long, value_name = "CSV", conflicts_with = "export_csv")]
    pub input: Option<PathBuf>,

    /// Print the effective config as TOML and exit
    #[arg(long, default_value_t = false)]
    pub print_config: bool,
}

impl Args {
    pub fn apply(&self, cfg: &mut AppConfig) {
        if let Some(seed) = self.seed {
            cfg.sampling.seed = seed;
        }
        if let Some(n) = self.samples {
            cfg.sampling.samples_per_category = n;
        }
        if let Some(out) = &self.output {
            cfg.chart.output = out.display().to_string();
        }
        if let Some(theme) = &self.theme {
            cfg.chart.theme = theme.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_leaves_config_untouched() {
        let args = Args::try_parse_from(["satisfaction-chart"]).expect("parse");
        let mut cfg = AppConfig::default();
        args.apply(&mut cfg);
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(args.config, PathBuf::from("satisfaction.toml"));
    }

    #[test]
    fn flags_override_config() {
        let args = Args::try_parse_from([
            "satisfaction-chart", "--seed", "9", "--samples", "12", "-o", "out/c.png", "--theme", "dark",
        ])
        .expect("parse");
        let mut cfg = AppConfig::default();
        args.apply(&mut cfg);
        assert_eq!(cfg.sampling.seed, 9);
        assert_eq!(cfg.sampling.samples_per_category, 12);
        assert_eq!(cfg.chart.output, "out/c.png");
        assert_eq!(cfg.chart.theme, "dark");
    }

    #[test]
    fn input_conflicts_with_export() {
        let res = Args::try_parse_from(["satisfaction-chart", "--input", "a.csv", "--export-csv", "b.csv"]);
        assert!(res.is_err());
    }
}
