// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for bar chart colors.

use skia_safe as skia;

/// Ten-colour qualitative palette; bars cycle through it in order.
pub type Palette = [skia::Color; 10];

const DEEP: Palette = [
    skia::Color::from_argb(255, 0x4c, 0x72, 0xb0),
    skia::Color::from_argb(255, 0xdd, 0x84, 0x52),
    skia::Color::from_argb(255, 0x55, 0xa8, 0x68),
    skia::Color::from_argb(255, 0xc4, 0x4e, 0x52),
    skia::Color::from_argb(255, 0x81, 0x72, 0xb3),
    skia::Color::from_argb(255, 0x93, 0x78, 0x60),
    skia::Color::from_argb(255, 0xda, 0x8b, 0xc3),
    skia::Color::from_argb(255, 0x8c, 0x8c, 0x8c),
    skia::Color::from_argb(255, 0xcc, 0xb9, 0x74),
    skia::Color::from_argb(255, 0x64, 0xb5, 0xcd),
];

const BRIGHT: Palette = [
    skia::Color::from_argb(255, 0x02, 0x3e, 0xff),
    skia::Color::from_argb(255, 0xff, 0x7c, 0x00),
    skia::Color::from_argb(255, 0x1a, 0xc9, 0x38),
    skia::Color::from_argb(255, 0xe8, 0x00, 0x0b),
    skia::Color::from_argb(255, 0x8b, 0x2b, 0xe2),
    skia::Color::from_argb(255, 0x9f, 0x48, 0x00),
    skia::Color::from_argb(255, 0xf1, 0x4c, 0xc1),
    skia::Color::from_argb(255, 0xa3, 0xa3, 0xa3),
    skia::Color::from_argb(255, 0xff, 0xc4, 0x00),
    skia::Color::from_argb(255, 0x00, 0xd7, 0xff),
];

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub title: skia::Color,
    pub tick: skia::Color,
    pub bar_edge: skia::Color,
    pub error_bar: skia::Color,
    pub annotation: skia::Color,
    pub palette: Palette,
}

impl Theme {
    /// White background with light horizontal grid lines.
    pub fn whitegrid() -> Self {
        Self {
            name: "whitegrid",
            background: skia::Color::WHITE,
            grid: skia::Color::from_argb(255, 0xeb, 0xeb, 0xeb),
            axis_line: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            axis_label: skia::Color::from_argb(255, 0x26, 0x26, 0x26),
            title: skia::Color::from_argb(255, 0x10, 0x10, 0x10),
            tick: skia::Color::from_argb(255, 0x26, 0x26, 0x26),
            bar_edge: skia::Color::BLACK,
            error_bar: skia::Color::from_argb(255, 0x42, 0x42, 0x42),
            annotation: skia::Color::from_argb(255, 0x26, 0x26, 0x26),
            palette: DEEP,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            title: skia::Color::from_argb(255, 245, 245, 250),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            bar_edge: skia::Color::from_argb(255, 220, 220, 230),
            error_bar: skia::Color::from_argb(255, 235, 235, 245),
            annotation: skia::Color::from_argb(255, 235, 235, 245),
            palette: DEEP,
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            background: skia::Color::WHITE,
            grid: skia::Color::from_argb(255, 0xdd, 0xdd, 0xdd),
            axis_line: skia::Color::BLACK,
            axis_label: skia::Color::BLACK,
            title: skia::Color::BLACK,
            tick: skia::Color::BLACK,
            bar_edge: skia::Color::BLACK,
            error_bar: skia::Color::BLACK,
            annotation: skia::Color::BLACK,
            palette: BRIGHT,
        }
    }

    /// Fill colour for the bar at position `i`.
    pub fn bar_fill(&self, i: usize) -> skia::Color {
        self.palette[i % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Self::whitegrid() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::whitegrid(), Theme::dark(), Theme::high_contrast()]
}

/// Find a preset by its `name`, ignoring case.
pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}
