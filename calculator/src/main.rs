//! Calculator - standard and scientific modes
//!
//! One accumulated value, one pending operator, no precedence.

mod app;
mod keypad;

use app::CalculatorApp;
use calccore::Preferences;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    calccore::logging::init();

    let prefs = Preferences::load();
    tracing::info!(mode = prefs.mode.label(), theme = prefs.theme.label(), "starting calculator");

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(prefs.mode.window_size())
            .with_resizable(false)
            .with_title("Calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "calculator",
        options,
        Box::new(move |cc| Box::new(CalculatorApp::new(cc, prefs))),
    )
}
