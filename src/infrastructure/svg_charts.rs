// Inline SVG implementation of the chart primitive (line, bar, pie)
use crate::application::chart_renderer::ChartRenderer;
use crate::domain::chart::{
    ChartKind, ChartSpec, Datum, AXIS_STROKE, GRID_DASH, GRID_STROKE, LINE_WIDTH, PIE_OUTER_RADIUS,
};
use maud::{html, Markup};

const TICK_COUNT: usize = 5;
const STEP_FACTORS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];
const BAR_GAP: f64 = 0.1;
const LEGEND_HEIGHT: f64 = 28.0;
const LEGEND_ITEM_WIDTH: f64 = 72.0;
const PIE_LABEL_OFFSET: f64 = 14.0;
const PIE_STROKE: &str = "#ffffff";

#[derive(Debug, Clone, Copy, PartialEq)]
struct Plot {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl Plot {
    fn width(&self) -> f64 {
        self.right - self.left
    }

    fn height(&self) -> f64 {
        self.bottom - self.top
    }

    fn y(&self, value: f64, domain_max: f64) -> f64 {
        if domain_max <= 0.0 {
            return self.bottom;
        }
        self.bottom - value / domain_max * self.height()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub start_deg: f64,
    pub end_deg: f64,
}

impl Slice {
    pub fn mid_deg(&self) -> f64 {
        (self.start_deg + self.end_deg) / 2.0
    }
}

/// Draws charts as self-contained SVG with native `<title>` tooltips.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgChartRenderer {
    width: f64,
    height: f64,
}

impl Default for SvgChartRenderer {
    fn default() -> Self {
        // Matches the 16rem chart frame at roughly the half-width card size.
        Self::new(560.0, 256.0)
    }
}

impl ChartRenderer for SvgChartRenderer {
    fn render(&self, chart: &ChartSpec) -> Markup {
        tracing::debug!("Drawing {:?} chart {} ({} points)", chart.kind, chart.id, chart.data.len());
        match chart.kind {
            ChartKind::Line => self.line(chart),
            ChartKind::Bar => self.bar(chart),
            ChartKind::Pie => self.pie(chart),
        }
    }
}

impl SvgChartRenderer {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn plot(&self) -> Plot {
        Plot {
            left: 60.0,
            right: self.width - 12.0,
            top: 12.0,
            bottom: self.height - 30.0,
        }
    }

    fn view_box(&self) -> String {
        format!("0 0 {} {}", fmt(self.width), fmt(self.height))
    }

    fn line(&self, chart: &ChartSpec) -> Markup {
        let plot = self.plot();
        let ticks = nice_ticks(chart.max_value(), TICK_COUNT);
        let domain_max = ticks.last().copied().unwrap_or(1.0);
        let xs = point_positions(&plot, chart.data.len());
        let points: Vec<(f64, f64)> = xs
            .iter()
            .zip(chart.data)
            .map(|(x, d)| (*x, plot.y(d.value, domain_max)))
            .collect();
        let labels: Vec<(f64, &str)> = xs.iter().zip(chart.data).map(|(x, d)| (*x, d.key)).collect();

        html! {
            svg class="chart chart-line" data-kind="line" xmlns="http://www.w3.org/2000/svg" viewBox=(self.view_box()) role="img" aria-label=(chart.title) {
                (cartesian_frame(&plot, &ticks, domain_max, &labels, chart.y_unit))
                path class="chart-series" d=(monotone_path(&points)) fill="none" stroke=(chart.color) stroke-width=(fmt(LINE_WIDTH)) {}
                @for ((x, y), datum) in points.iter().zip(chart.data) {
                    circle class="chart-hit" cx=(fmt(*x)) cy=(fmt(*y)) r="4" fill="transparent" {
                        title { (tooltip(chart, datum)) }
                    }
                }
            }
        }
    }

    fn bar(&self, chart: &ChartSpec) -> Markup {
        let plot = self.plot();
        let ticks = nice_ticks(chart.max_value(), TICK_COUNT);
        let domain_max = ticks.last().copied().unwrap_or(1.0);
        let band = if chart.data.is_empty() {
            plot.width()
        } else {
            plot.width() / chart.data.len() as f64
        };
        let bar_width = band * (1.0 - 2.0 * BAR_GAP);
        let labels: Vec<(f64, &str)> = chart
            .data
            .iter()
            .enumerate()
            .map(|(i, d)| (plot.left + band * (i as f64 + 0.5), d.key))
            .collect();

        html! {
            svg class="chart chart-bar" data-kind="bar" xmlns="http://www.w3.org/2000/svg" viewBox=(self.view_box()) role="img" aria-label=(chart.title) {
                (cartesian_frame(&plot, &ticks, domain_max, &labels, chart.y_unit))
                @for (i, datum) in chart.data.iter().enumerate() {
                    @let top = plot.y(datum.value, domain_max);
                    rect class="chart-bar" x=(fmt(plot.left + band * i as f64 + band * BAR_GAP)) y=(fmt(top)) width=(fmt(bar_width)) height=(fmt(plot.bottom - top)) fill=(chart.color) {
                        title { (tooltip(chart, datum)) }
                    }
                }
            }
        }
    }

    fn pie(&self, chart: &ChartSpec) -> Markup {
        let radius = PIE_OUTER_RADIUS;
        let label_room = PIE_LABEL_OFFSET + 16.0;
        let width = self.width.max(2.0 * (radius + label_room));
        let height = 2.0 * (radius + label_room) + LEGEND_HEIGHT;
        let (cx, cy) = (width / 2.0, radius + label_room);
        let slices = pie_slices(chart);
        let legend_left = cx - LEGEND_ITEM_WIDTH * chart.data.len() as f64 / 2.0;
        let legend_y = height - LEGEND_HEIGHT / 2.0;

        html! {
            svg class="chart chart-pie" data-kind="pie" xmlns="http://www.w3.org/2000/svg" viewBox=(format!("0 0 {} {}", fmt(width), fmt(height))) role="img" aria-label=(chart.title) {
                @for (slice, datum) in slices.iter().zip(chart.data) {
                    @let (label_x, label_y) = polar(cx, cy, radius + PIE_LABEL_OFFSET, slice.mid_deg());
                    g class="chart-slice" {
                        path d=(slice_path(cx, cy, radius, slice)) fill=(chart.color) stroke=(PIE_STROKE) {
                            title { (tooltip(chart, datum)) }
                        }
                        text class="chart-label" x=(fmt(label_x)) y=(fmt(label_y)) text-anchor=(if label_x >= cx { "start" } else { "end" }) dominant-baseline="central" {
                            (fmt(datum.value))
                        }
                    }
                }
                g class="chart-legend" {
                    @for (i, datum) in chart.data.iter().enumerate() {
                        @let x = legend_left + LEGEND_ITEM_WIDTH * i as f64;
                        rect x=(fmt(x + 8.0)) y=(fmt(legend_y - 5.0)) width="10" height="10" fill=(chart.color) {}
                        text x=(fmt(x + 24.0)) y=(fmt(legend_y)) dominant-baseline="central" { (datum.key) }
                    }
                }
            }
        }
    }
}

fn cartesian_frame(
    plot: &Plot,
    ticks: &[f64],
    domain_max: f64,
    labels: &[(f64, &str)],
    unit: Option<&str>,
) -> Markup {
    let unit = unit.unwrap_or_default();
    html! {
        g class="chart-grid" {
            @for tick in ticks {
                @let y = fmt(plot.y(*tick, domain_max));
                line x1=(fmt(plot.left)) y1=(y) x2=(fmt(plot.right)) y2=(y) stroke=(GRID_STROKE) stroke-dasharray=(GRID_DASH) {}
            }
            @for (x, _) in labels {
                line x1=(fmt(*x)) y1=(fmt(plot.top)) x2=(fmt(*x)) y2=(fmt(plot.bottom)) stroke=(GRID_STROKE) stroke-dasharray=(GRID_DASH) {}
            }
        }
        g class="chart-axis" {
            line x1=(fmt(plot.left)) y1=(fmt(plot.bottom)) x2=(fmt(plot.right)) y2=(fmt(plot.bottom)) stroke=(AXIS_STROKE) {}
            line x1=(fmt(plot.left)) y1=(fmt(plot.top)) x2=(fmt(plot.left)) y2=(fmt(plot.bottom)) stroke=(AXIS_STROKE) {}
            @for (x, label) in labels {
                text x=(fmt(*x)) y=(fmt(plot.bottom + 18.0)) text-anchor="middle" { (label) }
            }
            @for tick in ticks {
                text x=(fmt(plot.left - 8.0)) y=(fmt(plot.y(*tick, domain_max) + 4.0)) text-anchor="end" {
                    (fmt(*tick)) (unit)
                }
            }
        }
    }
}

fn tooltip(chart: &ChartSpec, datum: &Datum) -> String {
    format!(
        "{}: {} {}{}",
        datum.key,
        chart.y_key,
        fmt(datum.value),
        chart.y_unit.unwrap_or_default()
    )
}

/// X positions for a point scale: first and last points sit on the plot edges.
fn point_positions(plot: &Plot, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![plot.left + plot.width() / 2.0],
        n => {
            let step = plot.width() / (n - 1) as f64;
            (0..n).map(|i| plot.left + step * i as f64).collect()
        }
    }
}

/// `count` evenly spaced axis ticks from zero. The step is the smallest
/// 1, 2, 2.5, 5 or 10 times a power of ten that lets the last tick reach `max`.
pub fn nice_ticks(max: f64, count: usize) -> Vec<f64> {
    let count = count.max(2);
    let max = if max.is_finite() && max > 0.0 { max } else { 1.0 };

    let raw = max / (count - 1) as f64;
    let base = 10f64.powf(raw.log10().floor());
    let factor = STEP_FACTORS
        .iter()
        .copied()
        .find(|f| base * f >= raw * (1.0 - 1e-9))
        .unwrap_or(10.0);
    let step = base * factor;

    (0..count).map(|i| round_to(i as f64 * step, 1e9)).collect()
}

/// Tangents for a monotone cubic through points sorted by x.
pub fn monotone_tangents(points: &[(f64, f64)]) -> Vec<f64> {
    let n = points.len();
    if n < 2 {
        return vec![0.0; n];
    }
    if n == 2 {
        let (x0, y0) = points[0];
        let (x1, y1) = points[1];
        let slope = if x1 == x0 { 0.0 } else { (y1 - y0) / (x1 - x0) };
        return vec![slope, slope];
    }

    let mut tangents = vec![0.0; n];
    for i in 1..n - 1 {
        let (x0, y0) = points[i - 1];
        let (x1, y1) = points[i];
        let (x2, y2) = points[i + 1];
        let h0 = x1 - x0;
        let h1 = x2 - x1;
        let s0 = if h0 == 0.0 { 0.0 } else { (y1 - y0) / h0 };
        let s1 = if h1 == 0.0 { 0.0 } else { (y2 - y1) / h1 };
        let p = if h0 + h1 == 0.0 { 0.0 } else { (s0 * h1 + s1 * h0) / (h0 + h1) };
        let limited = s0.abs().min(s1.abs()).min(0.5 * p.abs());
        tangents[i] = (sign(s0) + sign(s1)) * limited;
    }

    let end_slope = |a: (f64, f64), b: (f64, f64), t: f64| {
        let h = b.0 - a.0;
        if h == 0.0 { t } else { (3.0 * (b.1 - a.1) / h - t) / 2.0 }
    };
    tangents[0] = end_slope(points[0], points[1], tangents[1]);
    tangents[n - 1] = end_slope(points[n - 2], points[n - 1], tangents[n - 2]);
    tangents
}

fn sign(value: f64) -> f64 {
    if value < 0.0 { -1.0 } else { 1.0 }
}

/// SVG path for a monotone-X curve; never overshoots between neighbouring points.
pub fn monotone_path(points: &[(f64, f64)]) -> String {
    let Some(&(x0, y0)) = points.first() else {
        return String::new();
    };
    let mut d = format!("M{},{}", fmt(x0), fmt(y0));
    if points.len() == 2 {
        let (x1, y1) = points[1];
        d.push_str(&format!("L{},{}", fmt(x1), fmt(y1)));
        return d;
    }

    let tangents = monotone_tangents(points);
    for (i, pair) in points.windows(2).enumerate() {
        let ((xa, ya), (xb, yb)) = (pair[0], pair[1]);
        let dx = (xb - xa) / 3.0;
        d.push_str(&format!(
            "C{},{},{},{},{},{}",
            fmt(xa + dx),
            fmt(ya + dx * tangents[i]),
            fmt(xb - dx),
            fmt(yb - dx * tangents[i + 1]),
            fmt(xb),
            fmt(yb)
        ));
    }
    d
}

/// Slice angles in degrees, starting at 3 o'clock and running counter-clockwise.
pub fn pie_slices(chart: &ChartSpec) -> Vec<Slice> {
    let total = chart.total();
    let mut start = 0.0;
    chart
        .data
        .iter()
        .map(|d| {
            let sweep = if total > 0.0 { d.value / total * 360.0 } else { 0.0 };
            let slice = Slice {
                start_deg: start,
                end_deg: start + sweep,
            };
            start += sweep;
            slice
        })
        .collect()
}

fn polar(cx: f64, cy: f64, radius: f64, deg: f64) -> (f64, f64) {
    let rad = deg.to_radians();
    (cx + radius * rad.cos(), cy - radius * rad.sin())
}

fn slice_path(cx: f64, cy: f64, radius: f64, slice: &Slice) -> String {
    let sweep = slice.end_deg - slice.start_deg;
    if sweep >= 360.0 {
        // A full circle needs two arcs.
        return format!(
            "M{},{}m{},0a{r},{r} 0 1,0 {},0a{r},{r} 0 1,0 {},0",
            fmt(cx),
            fmt(cy),
            fmt(-radius),
            fmt(2.0 * radius),
            fmt(-2.0 * radius),
            r = fmt(radius)
        );
    }
    let (x0, y0) = polar(cx, cy, radius, slice.start_deg);
    let (x1, y1) = polar(cx, cy, radius, slice.end_deg);
    let large_arc = if sweep > 180.0 { 1 } else { 0 };
    format!(
        "M{},{}L{},{}A{r},{r} 0 {},0 {},{}Z",
        fmt(cx),
        fmt(cy),
        fmt(x0),
        fmt(y0),
        large_arc,
        fmt(x1),
        fmt(y1),
        r = fmt(radius)
    )
}

fn round_to(value: f64, scale: f64) -> f64 {
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Two-decimal number formatting for SVG attributes and labels.
fn fmt(value: f64) -> String {
    round_to(value, 100.0).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::{DAILY_ORDERS, REGION_MIX, RETURNS_BY_CATEGORY, REVENUE_TREND, TOP_CATEGORIES};

    #[test]
    fn test_nice_ticks() {
        assert_eq!(nice_ticks(260.0, 5), vec![0.0, 100.0, 200.0, 300.0, 400.0]);
        assert_eq!(nice_ticks(420.0, 5), vec![0.0, 200.0, 400.0, 600.0, 800.0]);
        assert_eq!(nice_ticks(400.0, 5), vec![0.0, 100.0, 200.0, 300.0, 400.0]);
        assert_eq!(nice_ticks(10.0, 5), vec![0.0, 2.5, 5.0, 7.5, 10.0]);
        assert_eq!(nice_ticks(3.8, 5), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(nice_ticks(0.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_every_axis_gets_five_ticks() {
        for chart in [REVENUE_TREND, TOP_CATEGORIES, DAILY_ORDERS, RETURNS_BY_CATEGORY] {
            let ticks = nice_ticks(chart.max_value(), TICK_COUNT);
            assert_eq!(ticks.len(), 5, "{}", chart.id);
            assert_eq!(ticks[0], 0.0);
            assert!(ticks[4] >= chart.max_value(), "{}", chart.id);
        }
    }

    #[test]
    fn test_monotone_tangents_do_not_overshoot() {
        let straight = monotone_tangents(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
        assert_eq!(straight, vec![1.0, 1.0, 1.0]);

        // A plateau after a rise must flatten at the corner.
        let plateau = monotone_tangents(&[(0.0, 0.0), (1.0, 1.0), (2.0, 1.0)]);
        assert_eq!(plateau[1], 0.0);
    }

    #[test]
    fn test_monotone_path_shape() {
        assert_eq!(monotone_path(&[]), "");
        assert_eq!(monotone_path(&[(0.0, 0.0), (3.0, 3.0)]), "M0,0L3,3");
        let d = monotone_path(&[(0.0, 0.0), (3.0, 3.0), (6.0, 6.0)]);
        assert_eq!(d, "M0,0C1,1,2,2,3,3C4,4,5,5,6,6");
    }

    #[test]
    fn test_pie_slices_cover_full_circle() {
        let slices = pie_slices(&REGION_MIX);
        assert_eq!(slices.len(), 4);
        assert_eq!(slices[0].start_deg, 0.0);
        assert!((slices[0].end_deg - 165.6).abs() < 1e-9);
        assert!((slices[3].end_deg - 360.0).abs() < 1e-9);
        for pair in slices.windows(2) {
            assert_eq!(pair[0].end_deg, pair[1].start_deg);
        }
    }

    #[test]
    fn test_line_chart_markup() {
        let svg = SvgChartRenderer::default().render(&REVENUE_TREND).into_string();
        assert!(svg.contains("stroke=\"#60a5fa\""));
        assert!(svg.contains("stroke-width=\"2\""));
        assert!(svg.contains("stroke-dasharray=\"3 3\""));
        assert_eq!(svg.matches("<circle class=\"chart-hit\"").count(), 6);
        assert!(svg.contains("<title>W6: rev 260</title>"));
        assert!(svg.contains(">W1</text>"));
    }

    #[test]
    fn test_daily_orders_has_one_tick_per_day() {
        let svg = SvgChartRenderer::default().render(&DAILY_ORDERS).into_string();
        for day in 1..=7 {
            assert!(svg.contains(&format!("text-anchor=\"middle\">{}</text>", day)));
        }
        assert!(svg.contains("stroke=\"#22c55e\""));
    }

    #[test]
    fn test_bar_chart_markup() {
        let svg = SvgChartRenderer::default().render(&TOP_CATEGORIES).into_string();
        assert_eq!(svg.matches("<rect class=\"chart-bar\"").count(), 4);
        assert!(svg.contains("fill=\"#34d399\""));
        assert!(svg.contains("<title>Electronics: rev 380</title>"));
    }

    #[test]
    fn test_bar_chart_unit_on_ticks() {
        let svg = SvgChartRenderer::default().render(&RETURNS_BY_CATEGORY).into_string();
        assert!(svg.contains(">4%</text>"));
        assert!(svg.contains("<title>Kitchen: r 1.7%</title>"));
    }

    #[test]
    fn test_pie_chart_markup() {
        let svg = SvgChartRenderer::default().render(&REGION_MIX).into_string();
        assert_eq!(svg.matches("<g class=\"chart-slice\">").count(), 4);
        assert!(svg.contains("fill=\"#8884d8\""));
        assert!(svg.contains("A100,100 0 0,0 "));
        for name in ["NA", "EU", "APAC", "LATAM"] {
            assert!(svg.contains(&format!("dominant-baseline=\"central\">{}</text>", name)));
        }
    }
}
