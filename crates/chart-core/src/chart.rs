// File: crates/chart-core/src/chart.rs
// Summary: BarChart struct and headless rendering pipeline (PNG bytes/file, RGBA) using Skia CPU raster surfaces.

use skia_safe as skia;

use crate::bar::Bar;
use crate::error::{ChartError, Result};
use crate::geometry::RectI32;
use crate::grid::{nice_step, nice_ticks, tick_decimals};
use crate::scale::{BandScale, ValueScale};
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::{
    Insets, ANNOTATION_OFFSET, ANNOTATION_SIZE, AXIS_LABEL_SIZE, HEIGHT, TICK_LABEL_SIZE, TITLE_SIZE, WIDTH,
};
use crate::Axis;

/// Target number of value-axis ticks.
const Y_TICKS: usize = 6;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text is skipped entirely when false (snapshot tests avoid font variance this way).
    pub draw_labels: bool,
    /// Bar width as a fraction of its category band, in (0, 1].
    pub bar_width: f32,
    /// Error-bar cap width as a fraction of the bar width; 0 draws no caps.
    pub cap_width: f32,
    /// Counter-clockwise rotation of category tick labels, in degrees.
    pub tick_label_rotation_deg: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::whitegrid(),
            draw_labels: true,
            bar_width: 0.7,
            cap_width: 0.0,
            tick_label_rotation_deg: 15.0,
        }
    }
}

pub struct BarChart {
    pub bars: Vec<Bar>,
    pub title: String,
    pub x_label: String,
    pub y_axis: Axis,
    /// Decimal places of the value annotation above each bar.
    pub value_decimals: usize,
}

impl Default for BarChart {
    fn default() -> Self { Self::new() }
}

impl BarChart {
    pub fn new() -> Self {
        Self {
            bars: Vec::new(),
            title: String::new(),
            x_label: String::new(),
            y_axis: Axis::default_y(),
            value_decimals: 2,
        }
    }

    pub fn add_bar(&mut self, bar: Bar) {
        self.bars.push(bar);
    }

    /// Fit the value axis to the bars and their intervals, always including zero,
    /// with `margin` (fraction of the span) of headroom on top.
    pub fn autoscale_y(&mut self, margin: f64) {
        let mut lo = 0.0f64;
        let mut hi = f64::NEG_INFINITY;
        for b in &self.bars {
            lo = lo.min(b.bottom());
            hi = hi.max(b.top());
        }
        if !hi.is_finite() || hi <= lo { hi = lo + 1.0; }
        self.y_axis.min = lo;
        self.y_axis.max = hi + (hi - lo) * margin.max(0.0);
    }

    /// Format a bar value for its annotation.
    pub fn format_value(&self, v: f64) -> String {
        format!("{:.*}", self.value_decimals, v)
    }

    fn validate(&self, opts: &RenderOptions) -> Result<RectI32> {
        if opts.width <= 0 || opts.height <= 0 {
            return Err(ChartError::InvalidSize { width: opts.width, height: opts.height });
        }
        let plot = RectI32::inset(opts.width, opts.height, &opts.insets);
        if plot.is_empty() {
            return Err(ChartError::EmptyPlotArea { width: opts.width, height: opts.height });
        }
        if !self.y_axis.is_valid() {
            return Err(ChartError::InvalidRange { min: self.y_axis.min, max: self.y_axis.max });
        }
        for b in &self.bars {
            b.check().map_err(|reason| ChartError::InvalidBar { label: b.label.clone(), reason })?;
        }
        Ok(plot)
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let plot = self.validate(opts)?;
        // Create raster surface
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height)).ok_or(ChartError::Surface)?;
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);

        let ys = ValueScale::new_linear(plot.top as f32, plot.bottom as f32, self.y_axis.min, self.y_axis.max);
        let xs = BandScale::new(plot.left as f32, plot.right as f32, self.bars.len());
        let shaper = opts.draw_labels.then(TextShaper::new);

        draw_grid(canvas, &plot, &ys, &opts.theme);
        draw_bars(canvas, &self.bars, &xs, &ys, opts);
        draw_axes(canvas, &plot, &opts.theme);

        if let Some(shaper) = &shaper {
            draw_annotations(canvas, shaper, self, &xs, &ys, opts);
            draw_tick_labels(canvas, shaper, &self.bars, &plot, &xs, &ys, opts);
            draw_titles(canvas, shaper, self, &plot, opts);
        }
        Ok(surface)
    }

    /// Render to PNG-encoded bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render to an unpremultiplied RGBA8 buffer: `(pixels, width, height, row_stride_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let (w, h) = (opts.width, opts.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        Ok((pixels, w as u32, h as u32, stride))
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, plot: &RectI32, ys: &ValueScale, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // horizontals only; categories need no vertical guides
    for v in nice_ticks(ys.vmin, ys.vmax, Y_TICKS) {
        let y = ys.to_px(v);
        canvas.draw_line((plot.left as f32, y), (plot.right as f32, y), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, plot: &RectI32, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.25);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);
}

fn draw_bars(canvas: &skia::Canvas, bars: &[Bar], xs: &BandScale, ys: &ValueScale, opts: &RenderOptions) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);

    let mut edge = skia::Paint::default();
    edge.set_anti_alias(true);
    edge.set_style(skia::paint::Style::Stroke);
    edge.set_stroke_width(1.0);
    edge.set_color(opts.theme.bar_edge);

    let mut err = skia::Paint::default();
    err.set_anti_alias(true);
    err.set_style(skia::paint::Style::Stroke);
    err.set_stroke_width(2.0);
    err.set_color(opts.theme.error_bar);

    let half = xs.band_px() * opts.bar_width.clamp(0.05, 1.0) * 0.5;
    let y_base = ys.to_px(ys.baseline());

    for (i, bar) in bars.iter().enumerate() {
        let cx = xs.center_px(i);
        let y_val = ys.to_px_clamped(bar.value);
        let rect = skia::Rect::from_ltrb(cx - half, y_val.min(y_base), cx + half, y_val.max(y_base));

        fill.set_color(opts.theme.bar_fill(i));
        canvas.draw_rect(rect, &fill);
        canvas.draw_rect(rect, &edge);

        if let Some((lo, hi)) = bar.interval {
            let (y_lo, y_hi) = (ys.to_px_clamped(lo), ys.to_px_clamped(hi));
            canvas.draw_line((cx, y_lo), (cx, y_hi), &err);
            let cap = half * opts.cap_width;
            if cap > 0.0 {
                canvas.draw_line((cx - cap, y_lo), (cx + cap, y_lo), &err);
                canvas.draw_line((cx - cap, y_hi), (cx + cap, y_hi), &err);
            }
        }
    }
}

fn draw_annotations(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    chart: &BarChart,
    xs: &BandScale,
    ys: &ValueScale,
    opts: &RenderOptions,
) {
    for (i, bar) in chart.bars.iter().enumerate() {
        // sits above the error bar so the whisker never crosses the digits
        let y = ys.to_px_clamped(bar.top()) - ANNOTATION_OFFSET;
        let text = chart.format_value(bar.value);
        shaper.draw(canvas, &text, xs.center_px(i), y, ANNOTATION_SIZE, opts.theme.annotation, false, Anchor::Center);
    }
}

fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    bars: &[Bar],
    plot: &RectI32,
    xs: &BandScale,
    ys: &ValueScale,
    opts: &RenderOptions,
) {
    let theme = &opts.theme;

    // Value ticks, right-aligned against the axis
    let step = nice_step((ys.vmax - ys.vmin) / Y_TICKS as f64);
    let decimals = tick_decimals(step);
    for v in nice_ticks(ys.vmin, ys.vmax, Y_TICKS) {
        let y = ys.to_px(v) + TICK_LABEL_SIZE * 0.35;
        let text = format!("{:.*}", decimals, v);
        shaper.draw(canvas, &text, plot.left as f32 - 6.0, y, TICK_LABEL_SIZE, theme.tick, false, Anchor::Right);
    }

    // Category ticks: right end of the text pinned under the band centre, tilted up to the left
    let y0 = plot.bottom as f32 + TICK_LABEL_SIZE + 4.0;
    for (i, bar) in bars.iter().enumerate() {
        canvas.save();
        canvas.translate((xs.center_px(i), y0));
        canvas.rotate(-opts.tick_label_rotation_deg, None);
        shaper.draw(canvas, &bar.label, 0.0, 0.0, TICK_LABEL_SIZE, theme.tick, false, Anchor::Right);
        canvas.restore();
    }
}

fn draw_titles(canvas: &skia::Canvas, shaper: &TextShaper, chart: &BarChart, plot: &RectI32, opts: &RenderOptions) {
    let theme = &opts.theme;

    if !chart.title.is_empty() {
        let y = (plot.top as f32 * 0.5 + TITLE_SIZE * 0.4).max(TITLE_SIZE);
        shaper.draw(canvas, &chart.title, opts.width as f32 * 0.5, y, TITLE_SIZE, theme.title, true, Anchor::Center);
    }

    if !chart.x_label.is_empty() {
        let y = opts.height as f32 - AXIS_LABEL_SIZE * 0.6;
        shaper.draw(canvas, &chart.x_label, plot.center_x(), y, AXIS_LABEL_SIZE, theme.axis_label, false, Anchor::Center);
    }

    if !chart.y_axis.label.is_empty() {
        canvas.save();
        canvas.translate((AXIS_LABEL_SIZE * 1.1, plot.center_y()));
        canvas.rotate(-90.0, None);
        shaper.draw(canvas, &chart.y_axis.label, 0.0, 0.0, AXIS_LABEL_SIZE, theme.axis_label, false, Anchor::Center);
        canvas.restore();
    }
}
