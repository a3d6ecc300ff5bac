use eframe::egui::{Color32, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub error: Color32,
    pub success: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// Gradient stops the per-series line colors are sampled from.
    pub series_gradient_colors: &'static [&'static str],
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::LIGHT_BLUE,
        error: Color32::LIGHT_RED,
        success: Color32::LIGHT_GREEN,
        central_panel: Color32::from_rgb(18, 18, 24),
        side_panel: Color32::from_rgb(25, 25, 25),
    },
    series_gradient_colors: &[
        "#4fc3f7", "#81c784", "#ffb74d", "#e57373", "#ba68c8", "#f06292",
    ],
};

impl UiConfig {
    /// Frame for the settings panel (Standard padding)
    pub fn side_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for the observation table (Tighter vertical padding)
    pub fn bottom_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(8, 4),
            ..Default::default()
        }
    }

    // Frame for the plot area
    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin {
                left: 0,
                right: 8,
                top: 0,
                bottom: 0,
            },
            ..Default::default()
        }
    }
}
