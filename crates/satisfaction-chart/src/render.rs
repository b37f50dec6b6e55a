// File: crates/satisfaction-chart/src/render.rs
// Summary: Renderer boundary: turns per-category summaries plus the chart config into image bytes.

use anyhow::Result;
use chart_core::{Axis, Bar, BarChart, RenderOptions};
use survey_sim::CategorySummary;

use crate::config::ChartConfig;

/// Produces an encoded image from ordered summaries. Implementations own all styling.
pub trait Renderer {
    fn render(&self, cfg: &ChartConfig, summaries: &[CategorySummary]) -> Result<Vec<u8>>;
}

/// Skia CPU raster renderer emitting PNG.
pub struct SkiaPngRenderer;

impl Renderer for SkiaPngRenderer {
    fn render(&self, cfg: &ChartConfig, summaries: &[CategorySummary]) -> Result<Vec<u8>> {
        let chart = build_chart(cfg, summaries);
        let opts = render_options(cfg)?;
        Ok(chart.render_to_png_bytes(&opts)?)
    }
}

/// One bar per summary, in summary order, with the 95% interval as its error bar.
pub fn build_chart(cfg: &ChartConfig, summaries: &[CategorySummary]) -> BarChart {
    let mut chart = BarChart::new();
    chart.title = cfg.title.clone();
    chart.x_label = cfg.x_label.clone();
    chart.y_axis = Axis::new(cfg.y_label.clone(), 0.0, cfg.y_max);
    chart.value_decimals = cfg.value_decimals;
    for s in summaries {
        chart.add_bar(Bar::new(s.name.clone(), s.mean).with_half_width(s.half_width));
    }
    chart
}

pub fn render_options(cfg: &ChartConfig) -> Result<RenderOptions> {
    Ok(RenderOptions {
        width: cfg.width,
        height: cfg.height,
        theme: cfg.resolve_theme()?,
        cap_width: cfg.cap_width,
        ..RenderOptions::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_sim::CategoryId;

    fn summary(i: usize, name: &str, mean: f64, half_width: f64) -> CategorySummary {
        CategorySummary { category: CategoryId(i), name: name.into(), count: 60, mean, std_dev: 0.4, half_width }
    }

    #[test]
    fn bars_follow_summary_order() {
        let cfg = ChartConfig::default();
        let s = [summary(0, "Electronics", 4.12, 0.11), summary(1, "Apparel", 3.58, 0.14)];
        let chart = build_chart(&cfg, &s);
        assert_eq!(chart.title, "Customer Satisfaction by Product Category");
        assert_eq!(chart.y_axis.max, 5.2);
        let labels: Vec<_> = chart.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["Electronics", "Apparel"]);
        let (lo, hi) = chart.bars[1].interval.expect("interval");
        assert!((lo - 3.44).abs() < 1e-12 && (hi - 3.72).abs() < 1e-12);
        assert_eq!(chart.format_value(chart.bars[0].value), "4.12");
    }

    #[test]
    fn options_track_config() {
        let cfg = ChartConfig { width: 300, height: 200, theme: "dark".into(), ..ChartConfig::default() };
        let opts = render_options(&cfg).expect("options");
        assert_eq!((opts.width, opts.height), (300, 200));
        assert_eq!(opts.theme.name, "dark");
    }

    #[test]
    fn misspelled_theme_fails_render() {
        let cfg = ChartConfig { theme: "darkk".into(), ..ChartConfig::default() };
        let err = SkiaPngRenderer.render(&cfg, &[summary(0, "A", 4.0, 0.1)]).expect_err("unknown theme");
        assert!(err.to_string().contains("darkk"), "{err}");
    }

    #[test]
    fn skia_renderer_emits_png_of_configured_size() {
        let cfg = ChartConfig::default();
        let s = [summary(0, "A", 4.0, 0.1), summary(1, "B", 2.5, 0.2)];
        let bytes = SkiaPngRenderer.render(&cfg, &s).expect("render");
        let img = image::load_from_memory(&bytes).expect("decode");
        assert_eq!((img.width(), img.height()), (512, 512));
    }
}
