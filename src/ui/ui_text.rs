pub struct UiText {
    pub app_title: &'static str,

    // --- Settings panel ---
    pub settings_heading: &'static str,
    pub series_heading: &'static str,
    pub start_year_label: &'static str,
    pub end_year_label: &'static str,
    pub fetch_button: &'static str,
    pub no_selection_hint: &'static str,
    pub success_prefix: &'static str,

    // --- Table panel ---
    pub table_heading: &'static str,
    pub col_series: &'static str,
    pub col_year: &'static str,
    pub col_month: &'static str,
    pub col_value: &'static str,

    // --- Plot ---
    pub plot_x_axis: &'static str,
    pub plot_y_axis: &'static str,
    pub idle_hint: &'static str,
    pub empty_table_hint: &'static str,

    // --- Defaults ---
    pub default_start_year: &'static str,
    pub default_end_year: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    app_title: "BLS Interactive Dashboard",

    settings_heading: "Dashboard Settings",
    series_heading: "Data Series",
    start_year_label: "Start Year",
    end_year_label: "End Year",
    fetch_button: "Fetch Data",
    no_selection_hint: "Select at least one series",
    success_prefix: "Data fetched successfully",

    table_heading: "Raw Data",
    col_series: "Series Name",
    col_year: "Year",
    col_month: "Month",
    col_value: "Value",

    plot_x_axis: "Date",
    plot_y_axis: "Value",
    idle_hint: "Choose series and a year range, then press Fetch Data.",
    empty_table_hint: "No monthly observations in the selected range.",

    default_start_year: "2023",
    default_end_year: "2024",
};
