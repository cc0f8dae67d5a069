use dioxus::prelude::*;
use tidewatch_shared::models::ChartPoint;

/// Slice colors, cycled when a series has more points than the palette.
const PALETTE: [&str; 6] = [
    "#0ea5e9", "#22c55e", "#f59e0b", "#8b5cf6", "#ef4444", "#64748b",
];

const BAR_FILL: &str = "#0ea5e9";
const AXIS_STROKE: &str = "#334155";
const TEXT_FILL: &str = "#94a3b8";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Pie,
}

// ---------------------------------------------------------------------------
// SVG builders
// ---------------------------------------------------------------------------

fn slice_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Drop trailing ".0" on whole values so axis text stays compact.
fn format_value(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Point on a circle of radius `r`, `frac` turns clockwise from 12 o'clock.
fn arc_point(cx: f64, cy: f64, r: f64, frac: f64) -> (f64, f64) {
    let angle = frac * std::f64::consts::TAU;
    (cx + r * angle.sin(), cy - r * angle.cos())
}

/// Pie wedge path between two fractions of the full turn.
fn slice_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    let (x0, y0) = arc_point(cx, cy, r, start);
    let (x1, y1) = arc_point(cx, cy, r, end);
    let large = if end - start > 0.5 { 1 } else { 0 };
    format!("M{cx:.1},{cy:.1} L{x0:.1},{y0:.1} A{r:.0},{r:.0} 0 {large},1 {x1:.1},{y1:.1} Z")
}

fn build_pie_svg(points: &[ChartPoint]) -> String {
    let total: f64 = points.iter().map(|p| p.value.max(0.0)).sum();
    if total <= 0.0 {
        return String::new();
    }

    let mut svg = String::new();
    svg.push_str(r#"<svg viewBox="0 0 240 240" xmlns="http://www.w3.org/2000/svg">"#);

    let mut start = 0.0_f64;
    for (i, point) in points.iter().enumerate() {
        let frac = point.value.max(0.0) / total;
        if frac <= 0.0 {
            continue;
        }
        let color = slice_color(i);
        if frac >= 1.0 - 1e-9 {
            // A path arc degenerates when start and end coincide.
            svg.push_str(&format!(
                r#"<circle cx="120" cy="120" r="90" fill="{color}"/>"#
            ));
        } else {
            let d = slice_path(120.0, 120.0, 90.0, start, start + frac);
            svg.push_str(&format!(r#"<path d="{d}" fill="{color}"/>"#));
        }
        start += frac;
    }

    svg.push_str("</svg>");
    svg
}

fn build_bar_svg(points: &[ChartPoint]) -> String {
    if points.is_empty() {
        return String::new();
    }
    let max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);

    let mut svg = String::new();
    svg.push_str(r#"<svg viewBox="0 0 400 260" xmlns="http://www.w3.org/2000/svg">"#);
    svg.push_str(&format!(
        r#"<line x1="20" y1="220" x2="380" y2="220" stroke="{AXIS_STROKE}" stroke-width="1"/>"#
    ));

    let slot = 360.0 / points.len() as f64;
    for (i, point) in points.iter().enumerate() {
        let x = 20.0 + i as f64 * slot;
        let height = if max > 0.0 {
            (point.value.max(0.0) / max) * 170.0
        } else {
            0.0
        };
        let top = 220.0 - height;
        let bar_x = x + slot * 0.2;
        let bar_w = slot * 0.6;
        let center = x + slot / 2.0;
        let value_y = top - 6.0;
        let value = format_value(point.value);

        svg.push_str(&format!(
            r#"<rect x="{bar_x:.1}" y="{top:.1}" width="{bar_w:.1}" height="{height:.1}" rx="3" fill="{BAR_FILL}"/>"#
        ));
        svg.push_str(&format!(
            r#"<text x="{center:.1}" y="{value_y:.1}" text-anchor="middle" font-size="12" fill="{TEXT_FILL}">{value}</text>"#
        ));
        svg.push_str(&format!(
            r#"<text x="{center:.1}" y="240" text-anchor="middle" font-size="12" fill="{TEXT_FILL}">{}</text>"#,
            point.label
        ));
    }

    svg.push_str("</svg>");
    svg
}

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

/// Card wrapping a bar or pie rendering of one labeled series. An empty
/// series renders a placeholder message instead of a chart.
#[component]
pub fn DataChart(title: String, kind: ChartKind, points: Vec<ChartPoint>) -> Element {
    let svg = match kind {
        ChartKind::Bar => build_bar_svg(&points),
        ChartKind::Pie => build_pie_svg(&points),
    };

    rsx! {
        div { class: "chart-card",
            h3 { "{title}" }
            if svg.is_empty() {
                p { class: "chart-empty", "No data to display." }
            } else {
                div { class: "chart-body",
                    div { class: "chart-svg", dangerous_inner_html: "{svg}" }
                    if kind == ChartKind::Pie {
                        div { class: "chart-legend",
                            for (i, point) in points.iter().enumerate() {
                                div { class: "legend-item",
                                    span {
                                        class: "legend-swatch",
                                        style: "background:{slice_color(i)};"
                                    }
                                    span { class: "legend-label", "{point.label}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arc_point_cardinals() {
        let (x, y) = arc_point(120.0, 120.0, 90.0, 0.0);
        assert!((x - 120.0).abs() < 1e-9);
        assert!((y - 30.0).abs() < 1e-9);

        let (x, y) = arc_point(120.0, 120.0, 90.0, 0.25);
        assert!((x - 210.0).abs() < 1e-9);
        assert!((y - 120.0).abs() < 1e-9);

        let (x, y) = arc_point(120.0, 120.0, 90.0, 0.5);
        assert!((x - 120.0).abs() < 1e-9);
        assert!((y - 210.0).abs() < 1e-9);
    }

    #[test]
    fn test_slice_path_half_turn_uses_small_arc() {
        let d = slice_path(120.0, 120.0, 90.0, 0.0, 0.5);
        assert!(d.starts_with("M120.0,120.0 L120.0,30.0"));
        assert!(d.contains("A90,90 0 0,1 120.0,210.0"));
    }

    #[test]
    fn test_slice_path_majority_slice_sets_large_arc_flag() {
        let d = slice_path(120.0, 120.0, 90.0, 0.0, 0.75);
        assert!(d.contains("A90,90 0 1,1"));
    }

    #[test]
    fn test_pie_svg_one_path_per_point() {
        let points = vec![
            ChartPoint::new("Tuna", 35.0),
            ChartPoint::new("Sardine", 25.0),
            ChartPoint::new("Mackerel", 20.0),
        ];
        let svg = build_pie_svg(&points);
        assert_eq!(svg.matches("<path").count(), 3);
        assert!(svg.contains(r##"fill="#0ea5e9""##));
        assert!(svg.contains(r##"fill="#22c55e""##));
    }

    #[test]
    fn test_pie_svg_single_point_is_full_circle() {
        let svg = build_pie_svg(&[ChartPoint::new("Only", 10.0)]);
        assert_eq!(svg.matches("<circle").count(), 1);
        assert_eq!(svg.matches("<path").count(), 0);
    }

    #[test]
    fn test_pie_svg_empty_and_zero_series() {
        assert!(build_pie_svg(&[]).is_empty());
        assert!(build_pie_svg(&[ChartPoint::new("Flat", 0.0)]).is_empty());
    }

    #[test]
    fn test_bar_svg_scales_to_max() {
        let points = vec![ChartPoint::new("Jan", 100.0), ChartPoint::new("Feb", 50.0)];
        let svg = build_bar_svg(&points);
        assert_eq!(svg.matches("<rect").count(), 2);
        assert_eq!(svg.matches("<line").count(), 1);
        // Tallest bar spans the full plot height, the half value half of it.
        assert!(svg.contains(r#"y="50.0" width="108.0" height="170.0""#));
        assert!(svg.contains(r#"y="135.0" width="108.0" height="85.0""#));
        assert!(svg.contains(">100<"));
        assert!(svg.contains(">Feb<"));
    }

    #[test]
    fn test_bar_svg_empty_series() {
        assert!(build_bar_svg(&[]).is_empty());
    }

    #[test]
    fn test_slice_color_cycles() {
        assert_eq!(slice_color(0), PALETTE[0]);
        assert_eq!(slice_color(5), PALETTE[5]);
        assert_eq!(slice_color(6), PALETTE[0]);
    }

    #[test]
    fn test_format_value_trims_whole_numbers() {
        assert_eq!(format_value(2400.0), "2400");
        assert_eq!(format_value(28.7), "28.7");
    }
}
