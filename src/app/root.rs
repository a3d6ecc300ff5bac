use eframe::{
    Frame,
    egui::{CentralPanel, Context, SidePanel, TopBottomPanel, Visuals},
};

use crate::{
    app::FetchState,
    catalog::SERIES_CATALOG,
    data::BlsClient,
    table::build_table,
    ui::{ObservationTablePanel, PlotView, SettingsEvent, SettingsPanel, UI_CONFIG, UI_TEXT},
};

pub struct App {
    /// Checkbox state, parallel to SERIES_CATALOG. All on by default.
    pub(crate) selected: Vec<bool>,
    /// Free text, passed to the API as typed. The API does the coercion.
    pub(crate) start_year: String,
    pub(crate) end_year: String,
    pub(crate) state: FetchState,
    client: BlsClient,
    plot_view: PlotView,
}

impl Default for App {
    fn default() -> Self {
        Self {
            selected: vec![true; SERIES_CATALOG.len()],
            start_year: UI_TEXT.default_start_year.to_string(),
            end_year: UI_TEXT.default_end_year.to_string(),
            state: FetchState::Idle,
            client: BlsClient::new(),
            plot_view: PlotView::new(),
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>) -> Self {
        setup_custom_visuals(&cc.egui_ctx);
        Self::default()
    }

    fn selected_ids(&self) -> Vec<&'static str> {
        SERIES_CATALOG
            .iter()
            .zip(&self.selected)
            .filter(|(_, on)| **on)
            .map(|(s, _)| s.id)
            .collect()
    }

    /// The whole pipeline for one user action: fetch, build, display.
    /// Blocks the UI for the duration of the network call, which is the
    /// interaction model here: one action completes before the next begins.
    fn run_fetch(&mut self) {
        let ids = self.selected_ids();
        if ids.is_empty() {
            // The settings panel disables the button; belt for the buckle.
            return;
        }

        let outcome = self
            .client
            .fetch_timeseries(&ids, &self.start_year, &self.end_year)
            .and_then(|response| build_table(&response).map_err(Into::into));

        self.state = match outcome {
            Ok(table) => {
                log::info!("built table with {} observations", table.len());
                FetchState::Loaded(table)
            }
            Err(err) => {
                log::error!("fetch failed: {:#}", err);
                FetchState::Failed(format!("{:#}", err))
            }
        };
    }

    fn render_settings_panel(&mut self, ctx: &Context) {
        let mut event = None;
        SidePanel::left("settings_panel")
            .frame(UI_CONFIG.side_panel_frame())
            .resizable(false)
            .default_width(280.0)
            .show(ctx, |ui| {
                let mut panel = SettingsPanel::new(
                    &mut self.selected,
                    &mut self.start_year,
                    &mut self.end_year,
                    &self.state,
                );
                event = panel.render(ui);
            });

        if let Some(SettingsEvent::FetchRequested) = event {
            self.run_fetch();
        }
    }

    fn render_table_panel(&self, ctx: &Context) {
        let Some(table) = self.state.table() else {
            return;
        };
        TopBottomPanel::bottom("table_panel")
            .frame(UI_CONFIG.bottom_panel_frame())
            .resizable(true)
            .default_height(220.0)
            .show(ctx, |ui| {
                ObservationTablePanel::new(table).render(ui);
            });
    }

    fn render_central_panel(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| match &self.state {
                FetchState::Loaded(table) if !table.is_empty() => {
                    self.plot_view.show_observations(ui, table);
                }
                FetchState::Loaded(_) => {
                    ui.centered_and_justified(|ui| ui.label(UI_TEXT.empty_table_hint));
                }
                FetchState::Idle | FetchState::Failed(_) => {
                    ui.centered_and_justified(|ui| ui.label(UI_TEXT.idle_hint));
                }
            });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.render_settings_panel(ctx);
        self.render_table_panel(ctx);
        self.render_central_panel(ctx);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
}
