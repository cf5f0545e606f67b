#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

// Application struct and frame loop
mod app;

// Application constants
mod constants;

// Dose calculation core
mod dose;

// Error handling
mod error;

// Settings model and persistence
mod settings;

// Application state modules
mod state;

// Panel render functions
mod ui;

// Reusable widgets
mod widgets;

use app::DoseOxide;
use constants::layout;

fn main() {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(layout::WINDOW_SIZE)
            .with_min_inner_size(layout::MIN_WINDOW_SIZE),
        ..Default::default()
    };
    eframe::run_native(
        "DoseOxide - Insulin Dose Calculator",
        options,
        Box::new(|_| Ok(Box::new(DoseOxide::startup()))),
    )
    .unwrap();
}
