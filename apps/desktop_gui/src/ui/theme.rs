use eframe::egui::Color32;

pub const BACKGROUND: Color32 = Color32::from_gray(190);
pub const COLUMN_PANEL: Color32 = Color32::from_gray(70);
pub const COLUMN_LABEL: Color32 = Color32::WHITE;
pub const OVERLAY_TEXT: Color32 = Color32::BLACK;
pub const STATUS_TEXT: Color32 = Color32::from_rgb(120, 20, 20);

pub const BAND_CURRENT: Color32 = Color32::from_rgb(100, 255, 50);
pub const BAND_OTHER: Color32 = Color32::from_rgb(100, 0, 50);

pub const BUTTON_REGISTERED: Color32 = Color32::from_gray(30);
pub const BUTTON_IDLE: Color32 = Color32::from_gray(100);
pub const LAMP_ON: Color32 = Color32::from_rgb(200, 0, 0);
pub const LAMP_OFF: Color32 = Color32::from_gray(100);
pub const INDICATOR_ACTIVE: Color32 = Color32::from_rgb(50, 200, 50);
pub const INDICATOR_IDLE: Color32 = Color32::from_gray(20);

pub const CABIN_DOOR_OPEN: Color32 = Color32::from_rgb(50, 150, 50);
pub const CABIN_DOOR_CLOSED: Color32 = Color32::from_rgb(150, 50, 50);
