//! Chart rendering
//!
//! Static SVG charts. Hovering a bar or marker shows its value through the
//! SVG `<title>` element; nothing is scripted.

use crate::dataset::Domain;

/// Rendered chart width in px
pub const CHART_WIDTH: f64 = 900.0;
/// Rendered chart height in px
pub const CHART_HEIGHT: f64 = 420.0;

/// Series colors, indexed by [`Domain::index`] for known domains
const SERIES_COLORS: [&str; 7] = [
    "#636EFA", // Blue
    "#EF553B", // Red
    "#00CC96", // Green
    "#AB63FA", // Purple
    "#FFA15A", // Orange
    "#19D3F3", // Cyan
    "#FF6692", // Pink
];

/// Ends of the bar color scale (low count, high count)
const SCALE_LOW: (u8, u8, u8) = (224, 231, 255);
const SCALE_HIGH: (u8, u8, u8) = (49, 46, 129);

const AXIS_COLOR: &str = "#444";
const GRID_COLOR: &str = "#e5e5e5";
const FONT: &str = "font-family=\"Arial, sans-serif\"";

/// Line color for a domain label
///
/// Known domains keep a fixed color; any other label takes the color at its
/// position in the legend.
pub fn series_color(label: &str, position: usize) -> &'static str {
    let slot = Domain::from_label(label)
        .map(|domain| domain.index())
        .unwrap_or(position);
    SERIES_COLORS[slot % SERIES_COLORS.len()]
}

/// Escape text for HTML and SVG content
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Integer tick positions from 0 covering `max`, about five steps
pub fn count_ticks(max: usize) -> Vec<usize> {
    let step = tick_step(max);
    let top = max.div_ceil(step).max(1) * step;
    (0..=top).step_by(step).collect()
}

fn tick_step(max: usize) -> usize {
    if max <= 5 {
        return 1;
    }

    let raw = max as f64 / 5.0;
    let magnitude = 10f64.powf(raw.log10().floor());
    let nice = match raw / magnitude {
        n if n <= 1.0 => 1.0,
        n if n <= 2.0 => 2.0,
        n if n <= 5.0 => 5.0,
        _ => 10.0,
    };
    ((nice * magnitude) as usize).max(1)
}

/// Interpolate the bar color scale at `t` in [0, 1]
fn scale_color(t: f64) -> String {
    let t = t.clamp(0.0, 1.0);
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        lerp(SCALE_LOW.0, SCALE_HIGH.0),
        lerp(SCALE_LOW.1, SCALE_HIGH.1),
        lerp(SCALE_LOW.2, SCALE_HIGH.2)
    )
}

fn svg_open(title: &str) -> String {
    let mut s = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {w} {h}\" width=\"100%\" role=\"img\" aria-label=\"{t}\" {font}>",
        w = CHART_WIDTH,
        h = CHART_HEIGHT,
        t = escape(title),
        font = FONT,
    );
    s.push_str(&format!(
        "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"#ffffff\"/>",
        CHART_WIDTH, CHART_HEIGHT
    ));
    s.push_str(&format!(
        "<text x=\"20\" y=\"28\" font-size=\"17\" fill=\"#2a3f5f\">{}</text>",
        escape(title)
    ));
    s
}

fn no_data(s: &mut String) {
    s.push_str(&format!(
        "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"14\" fill=\"#999\">No data</text>",
        CHART_WIDTH / 2.0,
        CHART_HEIGHT / 2.0
    ));
}

/// One bar of a bar chart
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: usize,
}

/// Horizontal bar chart. The first bar is drawn at the bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub value_label: String,
    pub bars: Vec<Bar>,
}

impl BarChart {
    const LEFT: f64 = 170.0;
    const RIGHT: f64 = 40.0;
    const TOP: f64 = 50.0;
    const BOTTOM: f64 = 55.0;

    pub fn to_svg(&self) -> String {
        let mut s = svg_open(&self.title);
        if self.bars.is_empty() {
            no_data(&mut s);
            s.push_str("</svg>");
            return s;
        }

        let plot_w = CHART_WIDTH - Self::LEFT - Self::RIGHT;
        let plot_h = CHART_HEIGHT - Self::TOP - Self::BOTTOM;
        let bottom = Self::TOP + plot_h;

        let max = self.bars.iter().map(|b| b.value).max().unwrap_or(0);
        let min = self.bars.iter().map(|b| b.value).min().unwrap_or(0);
        let ticks = count_ticks(max);
        let axis_max = *ticks.last().unwrap_or(&1) as f64;
        let x = |v: usize| Self::LEFT + v as f64 / axis_max * plot_w;

        for tick in &ticks {
            let tx = x(*tick);
            s.push_str(&format!(
                "<line x1=\"{tx:.1}\" y1=\"{top:.1}\" x2=\"{tx:.1}\" y2=\"{bottom:.1}\" stroke=\"{GRID_COLOR}\"/>",
                top = Self::TOP,
            ));
            s.push_str(&format!(
                "<text x=\"{tx:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"12\" fill=\"{AXIS_COLOR}\">{tick}</text>",
                bottom + 18.0,
            ));
        }

        let band = plot_h / self.bars.len() as f64;
        for (i, bar) in self.bars.iter().enumerate() {
            let y = bottom - (i + 1) as f64 * band;
            let t = if max > min {
                (bar.value - min) as f64 / (max - min) as f64
            } else {
                1.0
            };
            s.push_str(&format!(
                "<rect class=\"bar\" x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"{}\"><title>{}: {}</title></rect>",
                Self::LEFT,
                y + band * 0.15,
                x(bar.value) - Self::LEFT,
                band * 0.7,
                scale_color(t),
                escape(&bar.label),
                bar.value,
            ));
            s.push_str(&format!(
                "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" dominant-baseline=\"middle\" font-size=\"13\" fill=\"{AXIS_COLOR}\">{}</text>",
                Self::LEFT - 8.0,
                y + band / 2.0,
                escape(&bar.label),
            ));
        }

        s.push_str(&format!(
            "<line x1=\"{left:.1}\" y1=\"{top:.1}\" x2=\"{left:.1}\" y2=\"{bottom:.1}\" stroke=\"{AXIS_COLOR}\"/>",
            left = Self::LEFT,
            top = Self::TOP,
        ));
        s.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"13\" fill=\"{AXIS_COLOR}\">{}</text>",
            Self::LEFT + plot_w / 2.0,
            CHART_HEIGHT - 12.0,
            escape(&self.value_label),
        ));
        s.push_str("</svg>");
        s
    }
}

/// One line of a line chart
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub color: String,
    /// `(year, count)` ordered by year
    pub points: Vec<(i32, usize)>,
}

/// Line chart over integer years, one tick per year
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub legend_title: String,
    pub series: Vec<LineSeries>,
}

impl LineChart {
    const LEFT: f64 = 75.0;
    const RIGHT: f64 = 210.0;
    const TOP: f64 = 50.0;
    const BOTTOM: f64 = 60.0;

    /// Every integer year between the first and last data point
    pub fn x_ticks(&self) -> Vec<i32> {
        let years = self.series.iter().flat_map(|s| s.points.iter().map(|(y, _)| *y));
        match (years.clone().min(), years.max()) {
            (Some(first), Some(last)) => (first..=last).collect(),
            _ => Vec::new(),
        }
    }

    pub fn to_svg(&self) -> String {
        let mut s = svg_open(&self.title);
        let years = self.x_ticks();
        if years.is_empty() {
            no_data(&mut s);
            s.push_str("</svg>");
            return s;
        }

        let plot_w = CHART_WIDTH - Self::LEFT - Self::RIGHT;
        let plot_h = CHART_HEIGHT - Self::TOP - Self::BOTTOM;
        let bottom = Self::TOP + plot_h;
        let first_year = years[0];
        let slots = years.len() as f64;

        let max = self
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(|(_, c)| *c))
            .max()
            .unwrap_or(0);
        let ticks = count_ticks(max);
        let axis_max = *ticks.last().unwrap_or(&1) as f64;

        let x = |year: i32| Self::LEFT + plot_w * ((year - first_year) as f64 + 0.5) / slots;
        let y = |count: usize| bottom - count as f64 / axis_max * plot_h;

        for tick in &ticks {
            let ty = y(*tick);
            s.push_str(&format!(
                "<line x1=\"{left:.1}\" y1=\"{ty:.1}\" x2=\"{right:.1}\" y2=\"{ty:.1}\" stroke=\"{GRID_COLOR}\"/>",
                left = Self::LEFT,
                right = Self::LEFT + plot_w,
            ));
            s.push_str(&format!(
                "<text x=\"{:.1}\" y=\"{ty:.1}\" text-anchor=\"end\" dominant-baseline=\"middle\" font-size=\"12\" fill=\"{AXIS_COLOR}\">{tick}</text>",
                Self::LEFT - 8.0,
            ));
        }

        for year in &years {
            s.push_str(&format!(
                "<text class=\"x-tick\" x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"12\" fill=\"{AXIS_COLOR}\">{year}</text>",
                x(*year),
                bottom + 18.0,
            ));
        }

        s.push_str(&format!(
            "<line x1=\"{left:.1}\" y1=\"{bottom:.1}\" x2=\"{right:.1}\" y2=\"{bottom:.1}\" stroke=\"{AXIS_COLOR}\"/>",
            left = Self::LEFT,
            right = Self::LEFT + plot_w,
        ));

        for series in &self.series {
            let path: Vec<String> = series
                .points
                .iter()
                .map(|(year, count)| format!("{:.1},{:.1}", x(*year), y(*count)))
                .collect();
            s.push_str(&format!(
                "<polyline class=\"series\" points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\"/>",
                path.join(" "),
                series.color,
            ));
            for (year, count) in &series.points {
                s.push_str(&format!(
                    "<circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"4\" fill=\"{}\"><title>{}, {}: {}</title></circle>",
                    x(*year),
                    y(*count),
                    series.color,
                    escape(&series.name),
                    year,
                    count,
                ));
            }
        }

        // Legend
        let legend_x = Self::LEFT + plot_w + 24.0;
        s.push_str(&format!(
            "<text x=\"{legend_x:.1}\" y=\"{:.1}\" font-size=\"13\" fill=\"{AXIS_COLOR}\">{}</text>",
            Self::TOP + 4.0,
            escape(&self.legend_title),
        ));
        for (i, series) in self.series.iter().enumerate() {
            let ly = Self::TOP + 26.0 + i as f64 * 22.0;
            s.push_str(&format!(
                "<line x1=\"{legend_x:.1}\" y1=\"{ly:.1}\" x2=\"{:.1}\" y2=\"{ly:.1}\" stroke=\"{}\" stroke-width=\"2\"/>",
                legend_x + 22.0,
                series.color,
            ));
            s.push_str(&format!(
                "<text x=\"{:.1}\" y=\"{ly:.1}\" dominant-baseline=\"middle\" font-size=\"12\" fill=\"{AXIS_COLOR}\">{}</text>",
                legend_x + 30.0,
                escape(&series.name),
            ));
        }

        s.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"13\" fill=\"{AXIS_COLOR}\">{}</text>",
            Self::LEFT + plot_w / 2.0,
            CHART_HEIGHT - 14.0,
            escape(&self.x_label),
        ));
        s.push_str(&format!(
            "<text x=\"18\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"13\" fill=\"{AXIS_COLOR}\" transform=\"rotate(-90 18 {:.1})\">{}</text>",
            Self::TOP + plot_h / 2.0,
            Self::TOP + plot_h / 2.0,
            escape(&self.y_label),
        ));
        s.push_str("</svg>");
        s
    }
}

/// A chart embedded in a dashboard section
#[derive(Debug, Clone, PartialEq)]
pub enum Chart {
    Bar(BarChart),
    Line(LineChart),
}

impl Chart {
    pub fn to_svg(&self) -> String {
        match self {
            Chart::Bar(chart) => chart.to_svg(),
            Chart::Line(chart) => chart.to_svg(),
        }
    }
}
