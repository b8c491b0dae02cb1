//! Chart Components
//!
//! Proportion (pie) and magnitude (bar) charts drawn on HTML5 Canvas.

use guessbook::guess::{ChartSlice, SummaryStats};
use leptos::*;
use std::f64::consts::PI;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Series colors
pub const CHART_COLORS: [&str; 5] = ["#8884d8", "#82ca9d", "#ffc658", "#ff7300", "#8dd1e1"];

const CANVAS_WIDTH: u32 = 480;
const CANVAS_HEIGHT: u32 = 200;

/// Sex distribution pie chart
#[component]
pub fn SexChart(stats: Memo<SummaryStats>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let slices = stats.get().sex_distribution();
        if let Some(canvas) = canvas_ref.get() {
            draw_pie(&canvas, &slices);
        }
    });

    view! {
        <div>
            <h3 class="text-lg font-semibold mb-2">"Distribuição por Sexo"</h3>
            <canvas
                node_ref=canvas_ref
                width=CANVAS_WIDTH
                height=CANVAS_HEIGHT
                class="w-full h-[200px]"
            />
            <ChartLegend slices=Signal::derive(move || stats.get().sex_distribution().to_vec()) />
        </div>
    }
}

/// Average weight vs. average length bar chart
#[component]
pub fn AveragesChart(stats: Memo<SummaryStats>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let slices = stats.get().averages();
        if let Some(canvas) = canvas_ref.get() {
            draw_bars(&canvas, &slices, CHART_COLORS[1]);
        }
    });

    view! {
        <div>
            <h3 class="text-lg font-semibold mb-2">"Médias dos Palpites"</h3>
            <canvas
                node_ref=canvas_ref
                width=CANVAS_WIDTH
                height=CANVAS_HEIGHT
                class="w-full h-[200px]"
            />
        </div>
    }
}

/// Legend with one colored dot per slice
#[component]
fn ChartLegend(#[prop(into)] slices: Signal<Vec<ChartSlice>>) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-2">
            {move || {
                slices.get()
                    .into_iter()
                    .enumerate()
                    .map(|(idx, slice)| {
                        let color = CHART_COLORS[idx % CHART_COLORS.len()];
                        view! {
                            <div class="flex items-center space-x-2">
                                <div
                                    class="w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", color)
                                />
                                <span class="text-sm text-gray-600">
                                    {format!("{}: {}", slice.label, slice.value)}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

/// Start/end angles (radians, clockwise from 12 o'clock) for each slice.
/// Zero-valued slices get an empty arc; an all-zero series yields no arcs.
pub fn pie_angles(slices: &[ChartSlice]) -> Vec<(f64, f64)> {
    let total: f64 = slices.iter().map(|s| s.value.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = -PI / 2.0;
    slices
        .iter()
        .map(|slice| {
            let sweep = slice.value.max(0.0) / total * 2.0 * PI;
            let arc = (start, start + sweep);
            start += sweep;
            arc
        })
        .collect()
}

/// Upper bound of the value axis: the largest value rounded up to a "nice"
/// step so grid lines land on round numbers.
pub fn axis_max(slices: &[ChartSlice]) -> f64 {
    let max = slices.iter().map(|s| s.value).fold(0.0, f64::max);
    if max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    let step = if max / magnitude > 5.0 {
        magnitude
    } else {
        magnitude / 2.0
    };
    (max / step).ceil() * step
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Draw the pie chart on canvas
fn draw_pie(canvas: &HtmlCanvasElement, slices: &[ChartSlice]) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    ctx.clear_rect(0.0, 0.0, width, height);

    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = 80.0_f64.min(height / 2.0 - 10.0);

    for (idx, (slice, (start, end))) in slices.iter().zip(pie_angles(slices)).enumerate() {
        if end <= start {
            continue;
        }
        let color = CHART_COLORS[idx % CHART_COLORS.len()];
        ctx.set_fill_style(&color.into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, start, end);
        ctx.close_path();
        ctx.fill();

        // Label outside the slice midpoint
        let mid = (start + end) / 2.0;
        let lx = cx + (radius + 12.0) * mid.cos();
        let ly = cy + (radius + 12.0) * mid.sin();
        ctx.set_fill_style(&"#374151".into()); // gray-700
        ctx.set_font("12px sans-serif");
        ctx.set_text_align(if mid.cos() >= 0.0 { "left" } else { "right" });
        let _ = ctx.fill_text(&format!("{}: {}", slice.label, slice.value), lx, ly + 4.0);
    }
}

/// Draw the bar chart on canvas
fn draw_bars(canvas: &HtmlCanvasElement, slices: &[ChartSlice], color: &str) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 40.0;
    let margin_right = 10.0;
    let margin_top = 10.0;
    let margin_bottom = 30.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    ctx.clear_rect(0.0, 0.0, width, height);

    let y_max = axis_max(slices);

    // Horizontal grid lines (4 lines)
    ctx.set_stroke_style(&"#e5e7eb".into()); // gray-200
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    for i in 0..=4 {
        let y = margin_top + (i as f64 / 4.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 4.0) * y_max;
        ctx.set_fill_style(&"#6b7280".into()); // gray-500
        ctx.set_text_align("right");
        let _ = ctx.fill_text(&format!("{}", value), margin_left - 6.0, y + 4.0);
    }

    if slices.is_empty() {
        return;
    }

    let band = chart_width / slices.len() as f64;
    let bar_width = band * 0.6;

    for (idx, slice) in slices.iter().enumerate() {
        let bar_height = (slice.value / y_max).clamp(0.0, 1.0) * chart_height;
        let x = margin_left + idx as f64 * band + (band - bar_width) / 2.0;
        let y = margin_top + chart_height - bar_height;

        ctx.set_fill_style(&color.into());
        ctx.fill_rect(x, y, bar_width, bar_height);

        ctx.set_fill_style(&"#374151".into());
        ctx.set_text_align("center");
        let _ = ctx.fill_text(&format!("{:.2}", slice.value), x + bar_width / 2.0, y - 4.0);
        let _ = ctx.fill_text(slice.label, x + bar_width / 2.0, height - 10.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice(label: &'static str, value: f64) -> ChartSlice {
        ChartSlice { label, value }
    }

    #[test]
    fn test_pie_angles_cover_circle() {
        let angles = pie_angles(&[slice("a", 1.0), slice("b", 3.0)]);
        assert_eq!(angles.len(), 2);

        let (start, _) = angles[0];
        let (_, end) = angles[1];
        assert!((start + PI / 2.0).abs() < 1e-9);
        assert!((end - start - 2.0 * PI).abs() < 1e-9);
        assert!((angles[0].1 - angles[0].0 - PI / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_pie_angles_empty_series() {
        assert!(pie_angles(&[slice("a", 0.0), slice("b", 0.0)]).is_empty());
    }

    #[test]
    fn test_axis_max() {
        assert_eq!(axis_max(&[slice("peso", 3.2), slice("tamanho", 50.0)]), 50.0);
        assert_eq!(axis_max(&[slice("peso", 3.2), slice("tamanho", 51.0)]), 60.0);
        assert_eq!(axis_max(&[slice("x", 0.0)]), 1.0);
    }
}
