use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, views};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LabourDashApp {
    pub state: AppState,
}

impl Default for LabourDashApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for LabourDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: header and tab strip ----
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            panels::header(ui, &mut self.state);
            ui.separator();
            panels::tab_strip(ui, &mut self.state);
        });

        // ---- Central panel: active tab ----
        egui::CentralPanel::default().show(ctx, |ui| {
            views::central(ui, &self.state);
        });
    }
}
