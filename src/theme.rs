//! Centralized theme constants for Weight Tracker
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x0b, 0x0f, 0x19); // slate-950
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x11, 0x18, 0x27); // gray-900
pub const BG_INPUT: Color32 = Color32::from_rgb(0x0f, 0x15, 0x22);
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x1f, 0x29, 0x37); // gray-800

// =============================================================================
// COLORS - Accent (Blue) and goal (Emerald)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x3b, 0x82, 0xf6); // blue-500
pub const ACCENT_DARK: Color32 = Color32::from_rgb(0x25, 0x63, 0xeb); // blue-600
pub const GOAL: Color32 = Color32::from_rgb(0x10, 0xb9, 0x81); // emerald-500

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe5, 0xe7, 0xeb); // gray-200
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x9c, 0xa3, 0xaf); // gray-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x6b, 0x72, 0x80); // gray-500

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x1f, 0x29, 0x37);
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x37, 0x41, 0x51); // gray-700

// =============================================================================
// COLORS - Status
// =============================================================================
pub const STATUS_SUCCESS: Color32 = Color32::from_rgb(0x22, 0xc5, 0x5e); // green-500
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xef, 0x44, 0x44); // red-500

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 22.0;
pub const FONT_HEADING: f32 = 18.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const CONTENT_MAX_WIDTH: f32 = 560.0;
pub const ROW_HEIGHT: f32 = 28.0;
pub const BUTTON_HEIGHT_LARGE: f32 = 36.0;
pub const PROGRESS_HEIGHT: f32 = 16.0;
pub const CHART_HEIGHT: f32 = 300.0;

// =============================================================================
// CORNER RADIUS / STROKES / SPACING
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 8.0;

pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_THICK: f32 = 2.0;

pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: BG_ELEVATED,
        extreme_bg_color: BG_INPUT,
        faint_bg_color: BG_ELEVATED,
        hyperlink_color: ACCENT,
        selection: egui::style::Selection {
            bg_fill: ACCENT_DARK,
            stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
        },
        widgets: egui::style::Widgets {
            noninteractive: egui::style::WidgetVisuals {
                bg_fill: BG_ELEVATED,
                weak_bg_fill: BG_SURFACE,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_SECONDARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            inactive: egui::style::WidgetVisuals {
                bg_fill: BG_SURFACE,
                weak_bg_fill: BG_SURFACE,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_SECONDARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            hovered: egui::style::WidgetVisuals {
                bg_fill: Color32::from_rgb(0x2b, 0x36, 0x48),
                weak_bg_fill: Color32::from_rgb(0x2b, 0x36, 0x48),
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, ACCENT),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            active: egui::style::WidgetVisuals {
                bg_fill: ACCENT_DARK,
                weak_bg_fill: ACCENT_DARK,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: -1.0,
            },
            open: egui::style::WidgetVisuals {
                bg_fill: BG_SURFACE,
                weak_bg_fill: BG_ELEVATED,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
        },
        striped: true,
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_corner_radius: egui::CornerRadius::same(8),
        menu_corner_radius: egui::CornerRadius::same(8),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.scroll.bar_width = 6.0;
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================

/// Rounded card used for summaries and the quote box
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_ELEVATED)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

/// Banner frame tinted with the given status color
pub fn banner_frame(color: Color32, alpha: f32) -> egui::Frame {
    let fill_alpha = (220.0 * alpha) as u8;
    egui::Frame::new()
        .fill(Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), fill_alpha))
        .corner_radius(RADIUS_DEFAULT)
        .inner_margin(egui::Margin::symmetric(12, 10))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Accent blue button (for primary actions like Save)
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(TEXT_PRIMARY).strong())
        .fill(ACCENT_DARK)
        .corner_radius(RADIUS_DEFAULT)
}
