// File: crates/satisfaction-chart/src/pipeline.rs
// Summary: generate (or load) -> aggregate -> render -> write, driven by the effective config.

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use survey_sim::{aggregate, read_observations, write_observations, CategorySummary, Observation, SampleGenerator};

use crate::config::AppConfig;
use crate::render::Renderer;

/// Where observations come from for one run.
#[derive(Debug, Clone)]
pub enum Source {
    /// Seeded generation from the configured categories.
    Generate { export_csv: Option<PathBuf> },
    /// A previously exported `Category,Satisfaction` table.
    Csv(PathBuf),
}

pub struct RunReport {
    pub observations: usize,
    pub summaries: Vec<CategorySummary>,
    pub output: PathBuf,
}

pub fn collect_observations(cfg: &AppConfig, source: &Source) -> Result<Vec<Observation>> {
    match source {
        Source::Generate { export_csv } => {
            let generator = SampleGenerator::new(cfg.categories.clone(), cfg.sampling.samples_per_category)
                .context("invalid sampling parameters")?;
            let mut rng = StdRng::seed_from_u64(cfg.sampling.seed);
            let observations = generator.generate(&mut rng);
            tracing::info!(
                seed = cfg.sampling.seed,
                categories = generator.categories().len(),
                per_category = generator.per_category(),
                "generated observations"
            );
            if let Some(path) = export_csv {
                export(path, &observations, cfg)?;
            }
            Ok(observations)
        }
        Source::Csv(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            let observations = read_observations(file, &cfg.categories)
                .with_context(|| format!("reading observations from {}", path.display()))?;
            tracing::info!(path = %path.display(), rows = observations.len(), "loaded observations");
            Ok(observations)
        }
    }
}

fn export(path: &Path, observations: &[Observation], cfg: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_observations(BufWriter::new(file), observations, &cfg.categories)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), rows = observations.len(), "exported observations");
    Ok(())
}

pub fn run(cfg: &AppConfig, source: &Source, renderer: &dyn Renderer) -> Result<RunReport> {
    let observations = collect_observations(cfg, source)?;
    let summaries = aggregate(&observations, &cfg.categories).context("aggregating observations")?;
    for s in &summaries {
        tracing::info!(
            category = %s.name,
            n = s.count,
            mean = %format!("{:.3}", s.mean),
            ci_low = %format!("{:.3}", s.lower()),
            ci_high = %format!("{:.3}", s.upper()),
            "summary"
        );
    }

    let bytes = renderer.render(&cfg.chart, &summaries).context("rendering chart")?;
    let output = PathBuf::from(&cfg.chart.output);
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&output, &bytes).with_context(|| format!("writing {}", output.display()))?;
    tracing::info!(path = %output.display(), bytes = bytes.len(), "wrote chart");

    Ok(RunReport { observations: observations.len(), summaries, output })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChartConfig;
    use std::cell::RefCell;
    use survey_sim::Category;

    /// Records what it was asked to draw and returns fixed bytes.
    #[derive(Default)]
    struct Recording {
        seen: RefCell<Vec<(String, f64)>>,
    }

    impl Renderer for Recording {
        fn render(&self, _cfg: &ChartConfig, summaries: &[CategorySummary]) -> Result<Vec<u8>> {
            self.seen.borrow_mut().extend(summaries.iter().map(|s| (s.name.clone(), s.mean)));
            Ok(b"img".to_vec())
        }
    }

    fn tmp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("satisfaction-chart-{tag}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("tmp dir");
        dir
    }

    fn cfg_in(dir: &Path) -> AppConfig {
        let mut cfg = AppConfig::default();
        cfg.chart.output = dir.join("chart.png").display().to_string();
        cfg
    }

    #[test]
    fn run_hands_ordered_summaries_to_renderer() {
        let dir = tmp_dir("order");
        let cfg = cfg_in(&dir);
        let rec = Recording::default();
        let report = run(&cfg, &Source::Generate { export_csv: None }, &rec).expect("run");

        assert_eq!(report.observations, 5 * 60);
        let names: Vec<_> = rec.seen.borrow().iter().map(|(n, _)| n.clone()).collect();
        let want: Vec<_> = cfg.categories.iter().map(|c| c.name.clone()).collect();
        assert_eq!(names, want);
        assert_eq!(std::fs::read(&report.output).expect("output"), b"img");
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn same_seed_same_summaries() {
        let dir = tmp_dir("seed");
        let cfg = cfg_in(&dir);
        let a = run(&cfg, &Source::Generate { export_csv: None }, &Recording::default()).expect("run a");
        let b = run(&cfg, &Source::Generate { export_csv: None }, &Recording::default()).expect("run b");
        assert_eq!(a.summaries, b.summaries);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn exported_csv_feeds_an_identical_run() {
        let dir = tmp_dir("csv");
        let cfg = cfg_in(&dir);
        let csv = dir.join("obs.csv");
        let first = run(&cfg, &Source::Generate { export_csv: Some(csv.clone()) }, &Recording::default()).expect("generate");
        let second = run(&cfg, &Source::Csv(csv), &Recording::default()).expect("from csv");
        assert_eq!(first.observations, second.observations);
        for (x, y) in first.summaries.iter().zip(&second.summaries) {
            assert_eq!(x.name, y.name);
            assert!((x.mean - y.mean).abs() < 1e-12);
        }
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn invalid_parameters_abort_before_render() {
        let dir = tmp_dir("invalid");
        let mut cfg = cfg_in(&dir);
        cfg.categories = vec![Category::new("flat", 3.0, 0.0)];
        let rec = Recording::default();
        assert!(run(&cfg, &Source::Generate { export_csv: None }, &rec).is_err());
        assert!(rec.seen.borrow().is_empty());

        cfg.categories = survey_sim::default_categories();
        cfg.sampling.samples_per_category = 0;
        assert!(run(&cfg, &Source::Generate { export_csv: None }, &rec).is_err());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn out_of_range_csv_scores_abort_before_render() {
        let dir = tmp_dir("range");
        let cfg = cfg_in(&dir);
        let csv = dir.join("bad.csv");
        std::fs::write(&csv, "Category,Satisfaction\nElectronics,4.2\nElectronics,9.5\n").expect("write csv");
        let rec = Recording::default();
        let err = run(&cfg, &Source::Csv(csv), &rec).expect_err("out of range");
        assert!(format!("{err:#}").contains("row 2"), "{err:#}");
        assert!(rec.seen.borrow().is_empty());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
