//! Shared color constants for the UI.

use egui::Color32;

/// Error panel background (red-50).
pub const ERROR_BG: Color32 = Color32::from_rgb(254, 242, 242);

/// Error panel left accent border (red-500).
pub const ERROR_BORDER: Color32 = Color32::from_rgb(239, 68, 68);

/// Error heading text (red-700).
pub const ERROR_HEADING: Color32 = Color32::from_rgb(185, 28, 28);

/// Error message text (red-600).
pub const ERROR_TEXT: Color32 = Color32::from_rgb(220, 38, 38);

/// Loading panel background (gray-50).
pub const LOADING_BG: Color32 = Color32::from_rgb(249, 250, 251);

/// Loading heading text (gray-700).
pub const LOADING_TEXT: Color32 = Color32::from_rgb(55, 65, 81);

/// Title bar background (blue-600).
pub const TITLE_BG: Color32 = Color32::from_rgb(37, 99, 235);

/// Header row background (blue-50).
pub const HEADER_BG: Color32 = Color32::from_rgb(239, 246, 255);

/// Header label and navigation icon color (blue-700).
pub const HEADER_TEXT: Color32 = Color32::from_rgb(29, 78, 216);

/// Data cell text (gray-700).
pub const CELL_TEXT: Color32 = Color32::from_rgb(55, 65, 81);

/// Subtle gray table border.
pub const TABLE_BORDER: Color32 = Color32::from_rgb(229, 231, 235);

/// Footer background (gray-50).
pub const FOOTER_BG: Color32 = Color32::from_rgb(249, 250, 251);

/// Page indicator text (gray-600).
pub const FOOTER_TEXT: Color32 = Color32::from_rgb(75, 85, 99);
