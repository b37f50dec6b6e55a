// File: crates/satisfaction-chart/src/main.rs
// Summary: Generates synthetic satisfaction scores, aggregates mean and 95% CI per category, renders a PNG.

mod cli;
mod config;
mod pipeline;
mod render;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::config::AppConfig;
use crate::pipeline::Source;
use crate::render::SkiaPngRenderer;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args = Args::parse();
    let mut cfg = AppConfig::load_or_default(&args.config)?;
    args.apply(&mut cfg);
    cfg.chart.resolve_theme()?;
    tracing::debug!(?cfg, "effective config");

    if args.print_config {
        print!("{}", cfg.to_toml()?);
        return Ok(());
    }

    let source = match &args.input {
        Some(path) => Source::Csv(path.clone()),
        None => Source::Generate { export_csv: args.export_csv.clone() },
    };

    let report = pipeline::run(&cfg, &source, &SkiaPngRenderer)?;
    tracing::info!(observations = report.observations, categories = report.summaries.len(), "done");
    println!("Saved {} ({}x{}).", report.output.display(), cfg.chart.width, cfg.chart.height);
    Ok(())
}
