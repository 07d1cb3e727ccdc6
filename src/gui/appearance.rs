use eframe::egui::Color32;

/// Appearance of the window.
pub struct Appearance;

impl Appearance {
    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 300.;
    pub const MAX_BOARD_PX: f32 = 720.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const BUTTON_STROKE_WIDTH: f32 = 2.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::from_rgb(0x22, 0x26, 0x2e);
    pub const BACKGROUND_COLOR: Color32 = Color32::from_rgb(0x0f, 0x11, 0x15);

    pub const CELL_ON_COLOR: Color32 = Color32::from_rgb(0x4a, 0xde, 0x80);
    pub const CELL_OFF_COLOR: Color32 = Color32::from_rgb(0x1a, 0x1d, 0x23);
    pub const GRID_LINE_COLOR: Color32 = Color32::from_rgba_premultiplied(10, 10, 10, 10);
    pub const GRID_LINE_WIDTH: f32 = 1.;

    pub const WIDGET_GAP: f32 = 20.;
}
