// src/theme.rs
use egui::{Context, Color32, Stroke, Visuals, Style};

// ── Palette ──────────────────────────────────────────────────────────────────
pub const ACCENT:        Color32 = Color32::from_rgb( 60, 220, 230);
pub const ACCENT_DIM:    Color32 = Color32::from_rgb( 25, 130, 140);
pub const ACCENT_HOVER:  Color32 = Color32::from_rgb(120, 240, 250);
pub const ACCENT_ALT:    Color32 = Color32::from_rgb(170, 110, 240);

pub const DARK_BG_0:     Color32 = Color32::from_rgb( 10,  12,  18);
pub const DARK_BG_1:     Color32 = Color32::from_rgb( 16,  18,  26);
pub const DARK_BG_2:     Color32 = Color32::from_rgb( 24,  27,  38);
pub const DARK_BG_3:     Color32 = Color32::from_rgb( 34,  38,  52);
pub const DARK_BG_4:     Color32 = Color32::from_rgb( 46,  52,  70);

pub const DARK_TEXT:     Color32 = Color32::from_rgb(218, 224, 235);
pub const DARK_TEXT_DIM: Color32 = Color32::from_rgb(115, 124, 148);
pub const DARK_BORDER:   Color32 = Color32::from_rgb( 50,  56,  76);

/// Muted green used for success banners and the "complete" state.
pub const GREEN_DIM:     Color32 = Color32::from_rgb( 80, 190, 120);
/// Muted red used for error banners and validation notices.
pub const RED_DIM:       Color32 = Color32::from_rgb(210,  85,  85);
/// Warning tint for the low-remaining-chars readout.
pub const AMBER_DIM:     Color32 = Color32::from_rgb(225, 180,  70);

pub fn configure_style(ctx: &Context) {
    let mut style = Style::default();

    style.spacing.item_spacing     = egui::vec2(6.0, 5.0);
    style.spacing.window_margin    = egui::Margin::same(10);
    style.spacing.button_padding   = egui::vec2(10.0, 5.0);
    style.spacing.scroll.bar_width = 8.0;
    style.spacing.indent           = 12.0;

    let cr = egui::CornerRadius::same(4);

    let mut v = Visuals::dark();
    v.panel_fill       = DARK_BG_1;
    v.window_fill      = DARK_BG_2;
    v.faint_bg_color   = DARK_BG_0;
    v.extreme_bg_color = DARK_BG_0;
    v.window_stroke    = Stroke::new(1.0, DARK_BORDER);

    v.selection.bg_fill = ACCENT_DIM;
    v.selection.stroke  = Stroke::new(1.0, Color32::BLACK);
    v.hyperlink_color   = ACCENT_HOVER;

    v.widgets.noninteractive.bg_fill       = DARK_BG_2;
    v.widgets.noninteractive.bg_stroke     = Stroke::new(1.0, DARK_BORDER);
    v.widgets.noninteractive.fg_stroke     = Stroke::new(1.0, DARK_TEXT_DIM);
    v.widgets.noninteractive.corner_radius = cr;

    v.widgets.inactive.bg_fill       = DARK_BG_3;
    v.widgets.inactive.bg_stroke     = Stroke::new(1.0, DARK_BORDER);
    v.widgets.inactive.fg_stroke     = Stroke::new(1.0, DARK_TEXT);
    v.widgets.inactive.corner_radius = cr;

    v.widgets.hovered.bg_fill        = DARK_BG_4;
    v.widgets.hovered.bg_stroke      = Stroke::new(1.0, ACCENT_DIM);
    v.widgets.hovered.fg_stroke      = Stroke::new(1.5, ACCENT_HOVER);
    v.widgets.hovered.corner_radius  = cr;

    v.widgets.active.bg_fill         = ACCENT_DIM;
    v.widgets.active.bg_stroke       = Stroke::new(1.0, ACCENT);
    v.widgets.active.fg_stroke       = Stroke::new(2.0, Color32::WHITE);
    v.widgets.active.corner_radius   = cr;

    v.widgets.open.bg_fill           = DARK_BG_4;
    v.widgets.open.bg_stroke         = Stroke::new(1.0, ACCENT_DIM);
    v.widgets.open.fg_stroke         = Stroke::new(1.5, ACCENT_HOVER);
    v.widgets.open.corner_radius     = cr;

    v.override_text_color = Some(DARK_TEXT);

    ctx.set_visuals(v);
    ctx.set_style(style);

    ctx.style_mut(|s| {
        s.visuals.window_corner_radius = cr;
        s.visuals.menu_corner_radius   = cr;
    });
}
