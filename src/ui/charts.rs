//! Central panel UI: the chart stack.
//!
//! Each chart consumes one derived view and paints directly with the egui
//! `Painter`: vertical bars scaled to the view's maximum, with an optional
//! overlay line series on its own implicit right axis (production vs.
//! economy, years of production). An empty view renders a placeholder label,
//! never an error.

use eframe::egui::{
    self, Align2, Color32, FontId, Pos2, Rect, RichText, ScrollArea, Sense, Stroke, StrokeKind,
    Vec2,
};

use crate::data::DerivedViews;
use crate::format::{format_compact, format_number, format_years};
use crate::ui::colors;

const CHART_HEIGHT: f32 = 240.0;
const LABEL_BAND: f32 = 34.0;
const GRID_LINES: usize = 4;

pub fn render_charts(ctx: &egui::Context, views: &DerivedViews) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().show(ui, |ui| {
            chart_section(
                ui,
                "Crude oil exports",
                "Export volume in bbl/day, ordered by production rate",
                |ui| {
                    let bars = bars_from(views.exports_by_production.iter().map(|r| {
                        (r.country.clone(), r.exports_bbl_day)
                    }));
                    draw_bar_chart(ui, &bars, colors::chart::EXPORTS, &|v| format_compact(v));
                },
            );

            chart_section(
                ui,
                "Production and economy",
                "Production in bbl/day with oil share of GDP overlaid",
                |ui| {
                    let bars = bars_from(views.exports_by_production.iter().map(|r| {
                        (r.country.clone(), r.production_bbl_day)
                    }));
                    let line: Vec<f64> = views
                        .exports_by_production
                        .iter()
                        .map(|r| r.gdp_oil_percent)
                        .collect();
                    draw_composed_chart(
                        ui,
                        &bars,
                        &line,
                        colors::chart::PRODUCTION,
                        &|v| format_compact(v),
                        &|v| format!("{v:.0}%"),
                    );
                },
            );

            chart_section(
                ui,
                "Years of production",
                "How long proven reserves last at current production rates",
                |ui| {
                    let bars = bars_from(views.producers_by_production.iter().map(|r| {
                        (r.country.clone(), r.production_bbl_day)
                    }));
                    let line: Vec<f64> = views
                        .producers_by_production
                        .iter()
                        .map(|r| r.years_remaining)
                        .collect();
                    draw_composed_chart(
                        ui,
                        &bars,
                        &line,
                        colors::chart::PRODUCTION,
                        &|v| format_compact(v),
                        &|v| format_years(v),
                    );
                },
            );

            chart_section(
                ui,
                "Production",
                "Crude production rate in bbl/day",
                |ui| {
                    let bars = bars_from(views.producers_by_production.iter().map(|r| {
                        (r.country.clone(), r.production_bbl_day)
                    }));
                    draw_bar_chart(ui, &bars, colors::chart::PRODUCTION, &|v| format_number(v));
                },
            );

            chart_section(
                ui,
                "Proven reserves",
                "Proven reserves in billions of barrels",
                |ui| {
                    let bars = bars_from(views.producers_by_reserves.iter().map(|r| {
                        (r.country.clone(), r.reserves_bn_bbl)
                    }));
                    draw_bar_chart(ui, &bars, colors::chart::RESERVES, &|v| {
                        format!("{v:.1} bn")
                    });
                },
            );

            chart_section(
                ui,
                "Population",
                "2024 population in millions",
                |ui| {
                    let bars = bars_from(views.exports_by_population.iter().map(|r| {
                        (r.country.clone(), r.population_2024_millions)
                    }));
                    draw_bar_chart(ui, &bars, colors::chart::POPULATION, &|v| {
                        format!("{v:.1}M")
                    });
                },
            );

            chart_section(
                ui,
                "Fracking share",
                "Share of production from hydraulic fracturing",
                |ui| {
                    let bars = bars_from(views.producers_by_production.iter().map(|r| {
                        (r.country.clone(), r.fracking_share_percent)
                    }));
                    draw_bar_chart(ui, &bars, colors::chart::FRACKING, &|v| {
                        format!("{v:.0}%")
                    });
                },
            );
        });
    });
}

struct Bar {
    label: String,
    value: f64,
}

fn bars_from(items: impl Iterator<Item = (String, f64)>) -> Vec<Bar> {
    items.map(|(label, value)| Bar { label, value }).collect()
}

fn chart_section(
    ui: &mut egui::Ui,
    title: &str,
    subtitle: &str,
    body: impl FnOnce(&mut egui::Ui),
) {
    ui.group(|ui| {
        ui.label(RichText::new(title).strong().size(15.0));
        ui.label(RichText::new(subtitle).small().color(colors::ui::LABEL));
        ui.add_space(4.0);
        body(ui);
    });
    ui.add_space(10.0);
}

fn draw_bar_chart(
    ui: &mut egui::Ui,
    bars: &[Bar],
    color: Color32,
    format_value: &dyn Fn(f64) -> String,
) {
    draw_chart(ui, bars, None, color, format_value, &|_| String::new());
}

fn draw_composed_chart(
    ui: &mut egui::Ui,
    bars: &[Bar],
    line: &[f64],
    color: Color32,
    format_value: &dyn Fn(f64) -> String,
    format_line: &dyn Fn(f64) -> String,
) {
    draw_chart(ui, bars, Some(line), color, format_value, format_line);
}

fn draw_chart(
    ui: &mut egui::Ui,
    bars: &[Bar],
    line: Option<&[f64]>,
    color: Color32,
    format_value: &dyn Fn(f64) -> String,
    format_line: &dyn Fn(f64) -> String,
) {
    if bars.is_empty() {
        ui.label(
            RichText::new("No countries match the current filters")
                .italics()
                .color(colors::ui::DIM),
        );
        return;
    }

    let width = ui.available_width();
    let (response, painter) =
        ui.allocate_painter(Vec2::new(width, CHART_HEIGHT + LABEL_BAND), Sense::hover());
    let rect = response.rect;

    painter.rect_filled(rect, 4.0, colors::chart::BACKGROUND);
    painter.rect_stroke(
        rect,
        4.0,
        Stroke::new(1.0, colors::chart::BORDER),
        StrokeKind::Inside,
    );

    let plot = Rect::from_min_max(
        Pos2::new(rect.left() + 10.0, rect.top() + 16.0),
        Pos2::new(rect.right() - 10.0, rect.bottom() - LABEL_BAND),
    );

    for i in 1..=GRID_LINES {
        let y = plot.bottom() - plot.height() * i as f32 / GRID_LINES as f32;
        painter.line_segment(
            [Pos2::new(plot.left(), y), Pos2::new(plot.right(), y)],
            Stroke::new(1.0, colors::chart::GRID),
        );
    }

    let max_value = bars
        .iter()
        .fold(0.0_f64, |max, bar| max.max(bar.value))
        .max(f64::EPSILON);
    let slot = plot.width() / bars.len() as f32;
    let bar_width = (slot * 0.7).min(48.0);

    for (i, bar) in bars.iter().enumerate() {
        let x = plot.left() + slot * (i as f32 + 0.5);
        let height = (bar.value / max_value) as f32 * plot.height();
        let bar_rect = Rect::from_min_max(
            Pos2::new(x - bar_width / 2.0, plot.bottom() - height),
            Pos2::new(x + bar_width / 2.0, plot.bottom()),
        );
        painter.rect_filled(bar_rect, 2.0, color);

        painter.text(
            Pos2::new(x, bar_rect.top() - 2.0),
            Align2::CENTER_BOTTOM,
            format_value(bar.value),
            FontId::proportional(9.0),
            colors::ui::VALUE,
        );
        painter.text(
            Pos2::new(x, plot.bottom() + 4.0),
            Align2::CENTER_TOP,
            truncate_label(&bar.label),
            FontId::proportional(10.0),
            colors::ui::DIM,
        );
    }

    if let Some(values) = line {
        draw_line_series(&painter, &plot, slot, values, format_line);
    }
}

/// Overlay line series on its own implicit right axis (scaled to the series
/// maximum, independent of the bar scale).
fn draw_line_series(
    painter: &egui::Painter,
    plot: &Rect,
    slot: f32,
    values: &[f64],
    format_line: &dyn Fn(f64) -> String,
) {
    let max_value = values
        .iter()
        .fold(0.0_f64, |max, v| max.max(*v))
        .max(f64::EPSILON);

    let mut previous: Option<Pos2> = None;
    for (i, value) in values.iter().enumerate() {
        let x = plot.left() + slot * (i as f32 + 0.5);
        let y = plot.bottom() - (value / max_value) as f32 * plot.height();
        let point = Pos2::new(x, y);

        if let Some(prev) = previous {
            painter.line_segment([prev, point], Stroke::new(2.0, colors::chart::LINE));
        }
        painter.circle_filled(point, 3.0, colors::chart::LINE);
        painter.text(
            Pos2::new(x + 6.0, y - 6.0),
            Align2::LEFT_BOTTOM,
            format_line(*value),
            FontId::proportional(9.0),
            colors::chart::LINE,
        );

        previous = Some(point);
    }
}

/// Country names longer than the bar slot get ellipsized.
fn truncate_label(label: &str) -> String {
    const MAX_CHARS: usize = 12;
    if label.chars().count() <= MAX_CHARS {
        label.to_string()
    } else {
        let truncated: String = label.chars().take(MAX_CHARS - 1).collect();
        format!("{truncated}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_label_short_names_unchanged() {
        assert_eq!(truncate_label("Norway"), "Norway");
        assert_eq!(truncate_label("Saudi Arabia"), "Saudi Arabia");
    }

    #[test]
    fn test_truncate_label_long_names_ellipsized() {
        assert_eq!(truncate_label("United Arab Emirates"), "United Arab…");
    }
}
