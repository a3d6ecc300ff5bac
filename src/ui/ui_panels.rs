use eframe::egui::{Button, Grid, RichText, ScrollArea, TextEdit, Ui};

use crate::app::FetchState;
use crate::catalog::SERIES_CATALOG;
use crate::table::ResultTable;
use crate::ui::ui_config::{UI_CONFIG, UI_TEXT};

pub(crate) enum SettingsEvent {
    FetchRequested,
}

/// Left panel: series multi-select, year range, fetch trigger, and the
/// inline success/error line for the last fetch.
pub(crate) struct SettingsPanel<'a> {
    selected: &'a mut Vec<bool>,
    start_year: &'a mut String,
    end_year: &'a mut String,
    state: &'a FetchState,
}

impl<'a> SettingsPanel<'a> {
    pub(crate) fn new(
        selected: &'a mut Vec<bool>,
        start_year: &'a mut String,
        end_year: &'a mut String,
        state: &'a FetchState,
    ) -> Self {
        Self {
            selected,
            start_year,
            end_year,
            state,
        }
    }

    pub(crate) fn render(&mut self, ui: &mut Ui) -> Option<SettingsEvent> {
        let mut event = None;

        ui.add_space(4.0);
        ui.heading(UI_TEXT.settings_heading);
        ui.separator();

        ui.label(RichText::new(UI_TEXT.series_heading).strong());
        for (entry, on) in SERIES_CATALOG.iter().zip(self.selected.iter_mut()) {
            ui.checkbox(on, entry.display_name);
        }

        ui.separator();
        ui.horizontal(|ui| {
            ui.label(UI_TEXT.start_year_label);
            ui.add(TextEdit::singleline(self.start_year).desired_width(60.0));
        });
        ui.horizontal(|ui| {
            ui.label(UI_TEXT.end_year_label);
            ui.add(TextEdit::singleline(self.end_year).desired_width(60.0));
        });

        ui.add_space(8.0);
        let any_selected = self.selected.iter().any(|on| *on);
        if ui
            .add_enabled(any_selected, Button::new(UI_TEXT.fetch_button))
            .clicked()
        {
            event = Some(SettingsEvent::FetchRequested);
        }
        if !any_selected {
            ui.label(
                RichText::new(UI_TEXT.no_selection_hint)
                    .small()
                    .color(UI_CONFIG.colors.error),
            );
        }

        match self.state {
            FetchState::Loaded(table) => {
                ui.add_space(8.0);
                ui.label(
                    RichText::new(format!(
                        "{} ({} rows)",
                        UI_TEXT.success_prefix,
                        table.len()
                    ))
                    .color(UI_CONFIG.colors.success),
                );
            }
            FetchState::Failed(msg) => {
                ui.add_space(8.0);
                ui.label(RichText::new(msg).color(UI_CONFIG.colors.error));
            }
            FetchState::Idle => {}
        }

        event
    }
}

/// Bottom panel: the flat observation table, one row per monthly data point.
pub(crate) struct ObservationTablePanel<'a> {
    table: &'a ResultTable,
}

impl<'a> ObservationTablePanel<'a> {
    pub(crate) fn new(table: &'a ResultTable) -> Self {
        Self { table }
    }

    pub(crate) fn render(&self, ui: &mut Ui) {
        ui.add_space(4.0);
        ui.heading(UI_TEXT.table_heading);
        ui.separator();

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                Grid::new("observation_grid")
                    .striped(true)
                    .num_columns(4)
                    .show(ui, |ui| {
                        ui.label(RichText::new(UI_TEXT.col_series).strong());
                        ui.label(RichText::new(UI_TEXT.col_year).strong());
                        ui.label(RichText::new(UI_TEXT.col_month).strong());
                        ui.label(RichText::new(UI_TEXT.col_value).strong());
                        ui.end_row();

                        for obs in &self.table.rows {
                            ui.label(obs.series_name.as_str());
                            ui.label(obs.year.to_string());
                            ui.label(obs.month.to_string());
                            ui.label(obs.value.to_string());
                            ui.end_row();
                        }
                    });
            });
    }
}
