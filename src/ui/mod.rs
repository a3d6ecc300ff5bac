mod ui_config;
mod ui_panels;
mod ui_plot_view;
mod ui_text;

pub(crate) use ui_config::UI_CONFIG;
pub(crate) use ui_panels::{ObservationTablePanel, SettingsEvent, SettingsPanel};
pub(crate) use ui_plot_view::PlotView;
pub(crate) use ui_text::UI_TEXT;
