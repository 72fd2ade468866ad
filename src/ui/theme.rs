//! Theme constants for the GUI

use egui::Color32;

// Board colors - plain light canvas with dark rule lines
pub const BOARD_BG: Color32 = Color32::from_rgb(245, 243, 238);
pub const GRID_LINE: Color32 = Color32::from_rgb(45, 45, 50);

// Mark colors
pub const X_MARK: Color32 = Color32::from_rgb(40, 70, 160);
pub const O_MARK: Color32 = Color32::from_rgb(190, 60, 50);

// Markers
pub const LAST_MOVE_BG: Color32 = Color32::from_rgb(255, 240, 200);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 180, 80);

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_SUCCESS: Color32 = Color32::from_rgb(45, 80, 55);
pub const STATUS_INFO: Color32 = Color32::from_rgb(40, 60, 85);
pub const STATUS_DANGER: Color32 = Color32::from_rgb(95, 45, 40);

// Hover preview alpha applied to the mark colors
pub fn hover_preview(color: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 90)
}

// Sizes
pub const BOARD_MARGIN: f32 = 12.0;
pub const GRID_LINE_WIDTH: f32 = 1.5;
pub const MARK_STROKE_WIDTH_RATIO: f32 = 0.08;
/// Inset of the X strokes from the cell edge, as a fraction of cell size
pub const X_INSET_RATIO: f32 = 0.1;
/// O radius as a fraction of cell size
pub const O_RADIUS_RATIO: f32 = 0.4;
