//! Left panel UI: filter controls.
//!
//! Widgets edit a working copy of the current filter selection; the copy is
//! applied wholesale through `AppState::apply_filters`, so the holder only
//! ever sees complete filter states.

use eframe::egui::{self, RichText, ScrollArea};

use crate::data::{GdpCategory, Region};
use crate::state::{AppState, FilterState, TopRange};

const TOP_PRESETS: [TopRange; 5] = [
    TopRange::All,
    TopRange::Top(5),
    TopRange::Top(10),
    TopRange::Top(15),
    TopRange::Top(20),
];

pub fn render_filter_panel(ctx: &egui::Context, state: &mut AppState) {
    let countries = state.dataset.country_names();

    egui::SidePanel::left("filter_panel")
        .resizable(true)
        .default_width(240.0)
        .min_width(200.0)
        .max_width(360.0)
        .show(ctx, |ui| {
            ui.heading("Filters");
            ui.separator();

            let mut edited = state.filters.clone();

            render_top_range_section(ui, &mut edited);
            ui.add_space(5.0);

            render_category_section(ui, &mut edited);
            ui.add_space(5.0);

            render_region_section(ui, &mut edited);
            ui.add_space(5.0);

            render_country_section(ui, &mut edited, &countries);
            ui.add_space(10.0);

            if ui.button("Reset filters").clicked() {
                edited = FilterState::default();
            }

            state.apply_filters(edited);
        });
}

fn render_top_range_section(ui: &mut egui::Ui, filters: &mut FilterState) {
    egui::CollapsingHeader::new(RichText::new("Top N").strong())
        .default_open(true)
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for preset in TOP_PRESETS {
                    ui.selectable_value(&mut filters.top_range, preset, preset.label());
                }
            });

            if let TopRange::Top(ref mut n) = filters.top_range {
                ui.add(egui::Slider::new(n, 1..=30).text("countries"));
            }
        });
}

fn render_category_section(ui: &mut egui::Ui, filters: &mut FilterState) {
    egui::CollapsingHeader::new(RichText::new("Income tier").strong())
        .default_open(true)
        .show(ui, |ui| {
            for category in GdpCategory::all() {
                let mut checked = filters.gdp_categories.contains(category);
                if ui.checkbox(&mut checked, category.label()).changed() {
                    if checked {
                        filters.gdp_categories.insert(*category);
                    } else {
                        filters.gdp_categories.remove(category);
                    }
                }
            }
        });
}

fn render_region_section(ui: &mut egui::Ui, filters: &mut FilterState) {
    egui::CollapsingHeader::new(RichText::new("Region").strong())
        .default_open(true)
        .show(ui, |ui| {
            for region in Region::all() {
                let mut checked = filters.regions.contains(region);
                if ui.checkbox(&mut checked, region.label()).changed() {
                    if checked {
                        filters.regions.insert(*region);
                    } else {
                        filters.regions.remove(region);
                    }
                }
            }
        });
}

fn render_country_section(ui: &mut egui::Ui, filters: &mut FilterState, countries: &[String]) {
    egui::CollapsingHeader::new(RichText::new("Countries").strong())
        .default_open(false)
        .show(ui, |ui| {
            ScrollArea::vertical()
                .max_height(220.0)
                .show(ui, |ui| {
                    for country in countries {
                        let mut checked = filters.countries.contains(country);
                        if ui.checkbox(&mut checked, country).changed() {
                            if checked {
                                filters.countries.insert(country.clone());
                            } else {
                                filters.countries.remove(country);
                            }
                        }
                    }
                });

            if !filters.countries.is_empty() && ui.button("Clear selection").clicked() {
                filters.countries.clear();
            }
        });
}
