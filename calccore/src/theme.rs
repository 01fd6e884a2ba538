//! Built-in themes
//!
//! Themes are a closed set. Picking one resolves its [`Palette`] once; the
//! palette is then read by the app when it paints buttons and the screen.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use serde::{Deserialize, Serialize};

/// Colours for one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub application_background: Color32,
    pub text: Color32,
    pub numbers_background: Color32,
    pub operator_background: Color32,
    pub equals_background: Color32,
    pub equals_text: Color32,
    /// Light or dark base visuals.
    pub dark: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeKind {
    #[default]
    Light,
    Dark,
    DarkBlue,
    /// Pure black and white, 1px outlines.
    Slow,
}

impl ThemeKind {
    pub const ALL: [ThemeKind; 4] = [
        ThemeKind::Light,
        ThemeKind::Dark,
        ThemeKind::DarkBlue,
        ThemeKind::Slow,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ThemeKind::Light => "Light",
            ThemeKind::Dark => "Dark",
            ThemeKind::DarkBlue => "Dark Blue",
            ThemeKind::Slow => "Slow",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            ThemeKind::Light => Palette {
                application_background: Color32::from_rgb(0xF3, 0xF3, 0xF3),
                text: Color32::from_rgb(0x1F, 0x1F, 0x1F),
                numbers_background: Color32::from_rgb(0xFF, 0xFF, 0xFF),
                operator_background: Color32::from_rgb(0xE1, 0xE1, 0xE1),
                equals_background: Color32::from_rgb(0x00, 0x5F, 0xB8),
                equals_text: Color32::from_rgb(0xFF, 0xFF, 0xFF),
                dark: false,
            },
            ThemeKind::Dark => Palette {
                application_background: Color32::from_rgb(0x20, 0x20, 0x20),
                text: Color32::from_rgb(0xEE, 0xEE, 0xEE),
                numbers_background: Color32::from_rgb(0x3B, 0x3B, 0x3B),
                operator_background: Color32::from_rgb(0x32, 0x32, 0x32),
                equals_background: Color32::from_rgb(0xF0, 0x8A, 0x24),
                equals_text: Color32::from_rgb(0x20, 0x20, 0x20),
                dark: true,
            },
            ThemeKind::DarkBlue => Palette {
                application_background: Color32::from_rgb(0x0F, 0x1B, 0x2D),
                text: Color32::from_rgb(0xE6, 0xF0, 0xFF),
                numbers_background: Color32::from_rgb(0x1D, 0x32, 0x52),
                operator_background: Color32::from_rgb(0x16, 0x27, 0x41),
                equals_background: Color32::from_rgb(0x4C, 0xC2, 0xFF),
                equals_text: Color32::from_rgb(0x0F, 0x1B, 0x2D),
                dark: true,
            },
            ThemeKind::Slow => Palette {
                application_background: Color32::WHITE,
                text: Color32::BLACK,
                numbers_background: Color32::WHITE,
                operator_background: Color32::WHITE,
                equals_background: Color32::BLACK,
                equals_text: Color32::WHITE,
                dark: false,
            },
        }
    }

    /// Apply base visuals and text sizes to an egui context.
    pub fn apply(self, ctx: &egui::Context) {
        let palette = self.palette();
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(11.0, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(22.0, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(22.0, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(14.0, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = if palette.dark { Visuals::dark() } else { Visuals::light() };
        visuals.override_text_color = Some(palette.text);
        visuals.window_fill = palette.application_background;
        visuals.panel_fill = palette.application_background;
        visuals.extreme_bg_color = palette.application_background;

        let outline = Stroke::new(1.0, palette.text);
        let widget = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_stroke = outline;
            ws.fg_stroke = Stroke::new(1.0, palette.text);
            ws.rounding = Rounding::same(2.0);
        };
        widget(&mut visuals.widgets.inactive);
        widget(&mut visuals.widgets.hovered);
        widget(&mut visuals.widgets.active);
        widget(&mut visuals.widgets.open);

        if self == ThemeKind::Slow {
            // No grays, no shadows, square corners.
            for ws in [
                &mut visuals.widgets.noninteractive,
                &mut visuals.widgets.inactive,
                &mut visuals.widgets.hovered,
                &mut visuals.widgets.active,
                &mut visuals.widgets.open,
            ] {
                ws.bg_fill = Color32::WHITE;
                ws.weak_bg_fill = Color32::WHITE;
                ws.rounding = Rounding::ZERO;
            }
            visuals.window_rounding = Rounding::ZERO;
            visuals.menu_rounding = Rounding::ZERO;
            visuals.window_shadow = egui::epaint::Shadow::NONE;
            visuals.popup_shadow = egui::epaint::Shadow::NONE;
        }

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
        tracing::debug!(theme = self.label(), "theme applied");
    }
}

/// Screen frame: application background, 1px outline in the text colour.
pub fn display_frame(palette: &Palette) -> egui::Frame {
    egui::Frame::none()
        .fill(palette.application_background)
        .stroke(Stroke::new(1.0, palette.text))
        .inner_margin(egui::Margin::symmetric(10.0, 6.0))
}
