//! Calculator application

use crate::keypad::{self, KeypadButton};
use calccore::theme::display_frame;
use calccore::{CalcMode, Calculator, Input, Palette, Preferences, ThemeKind};
use egui::{Context, RichText};

const BUTTON_HEIGHT: f32 = 56.0;
const DISPLAY_HEIGHT: f32 = 64.0;
const DISPLAY_FONT_SIZE: f32 = 32.0;
const SELECTOR_WIDTH: f32 = 120.0;

pub struct CalculatorApp {
    calc: Calculator,
    prefs: Preferences,
    palette: Palette,
    prev_mode: CalcMode,
}

impl CalculatorApp {
    pub fn new(cc: &eframe::CreationContext<'_>, prefs: Preferences) -> Self {
        prefs.theme.apply(&cc.egui_ctx);
        Self {
            calc: Calculator::new(),
            prefs,
            palette: prefs.theme.palette(),
            prev_mode: prefs.mode,
        }
    }

    fn press(&mut self, input: Input) {
        self.calc.press(input);
    }

    fn handle_keys(&mut self, ctx: &Context) {
        let inputs = ctx.input(|i| keypad::inputs_from_events(&i.events));
        for input in inputs {
            self.press(input);
        }
    }

    fn set_theme(&mut self, ctx: &Context, theme: ThemeKind) {
        self.prefs.theme = theme;
        self.palette = theme.palette();
        theme.apply(ctx);
        self.save_prefs();
    }

    fn save_prefs(&self) {
        if let Err(e) = self.prefs.save() {
            tracing::warn!(error = %e, "could not save preferences");
        }
    }

    fn render_selectors(&mut self, ui: &mut egui::Ui) {
        let mut mode = self.prefs.mode;
        let mut theme = self.prefs.theme;

        ui.horizontal(|ui| {
            egui::ComboBox::from_id_source("calculator_type")
                .width(SELECTOR_WIDTH)
                .selected_text(mode.label())
                .show_ui(ui, |ui| {
                    for m in CalcMode::ALL {
                        ui.selectable_value(&mut mode, m, m.label());
                    }
                })
                .response
                .on_hover_text("Calculator type");

            egui::ComboBox::from_id_source("theme")
                .width(SELECTOR_WIDTH)
                .selected_text(theme.label())
                .show_ui(ui, |ui| {
                    for t in ThemeKind::ALL {
                        ui.selectable_value(&mut theme, t, t.label());
                    }
                })
                .response
                .on_hover_text("Theme");
        });

        if mode != self.prefs.mode {
            tracing::info!(mode = mode.label(), "mode changed");
            self.prefs.mode = mode;
            self.save_prefs();
        }
        if theme != self.prefs.theme {
            tracing::info!(theme = theme.label(), "theme changed");
            self.set_theme(ui.ctx(), theme);
        }
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        display_frame(&self.palette).show(ui, |ui| {
            ui.set_min_height(DISPLAY_HEIGHT);
            ui.set_max_height(DISPLAY_HEIGHT);
            ui.set_width(ui.available_width());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add(
                    egui::Label::new(
                        RichText::new(self.calc.display_text())
                            .size(DISPLAY_FONT_SIZE)
                            .color(self.palette.text),
                    )
                    .truncate(true),
                );
            });
        });
    }

    fn render_button(&self, ui: &mut egui::Ui, button: &KeypadButton, width: f32) -> bool {
        let (fill, text) = button.colors(&self.palette);
        ui.add(
            egui::Button::new(RichText::new(button.input.label()).color(text))
                .fill(fill)
                .min_size(egui::vec2(width, BUTTON_HEIGHT)),
        )
        .clicked()
    }

    fn render_keypad(&mut self, ui: &mut egui::Ui) {
        let mode = self.prefs.mode;
        let spacing = ui.spacing().item_spacing.x;
        let columns = keypad::columns(mode) as f32;
        let btn_w = (ui.available_width() - spacing * (columns - 1.0)) / columns;

        let mut pressed = None;
        for row in keypad::rows(mode) {
            ui.horizontal(|ui| {
                for button in &row {
                    let span = button.span as f32;
                    let width = btn_w * span + spacing * (span - 1.0);
                    if self.render_button(ui, button, width) {
                        pressed = Some(button.input);
                    }
                }
            });
        }
        if let Some(input) = pressed {
            self.press(input);
        }
    }
}

impl eframe::App for CalculatorApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        // Scientific mode is one column wider
        if self.prefs.mode != self.prev_mode {
            ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(
                self.prefs.mode.window_size().into(),
            ));
            self.prev_mode = self.prefs.mode;
        }

        egui::TopBottomPanel::top("selectors")
            .frame(egui::Frame::none().fill(self.palette.application_background).inner_margin(egui::Margin::same(12.0)))
            .show(ctx, |ui| self.render_selectors(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(self.palette.application_background).inner_margin(egui::Margin::same(12.0)))
            .show(ctx, |ui| {
                self.render_display(ui);
                ui.add_space(12.0);
                self.render_keypad(ui);
            });
    }
}
