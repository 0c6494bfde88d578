use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::export::export_csv;
use crate::data::seed;
use crate::data::template::TemplateKind;
use crate::i18n::Translations;
use crate::state::{AppState, Tab, UploadStatus};

// ---------------------------------------------------------------------------
// Header bar
// ---------------------------------------------------------------------------

/// Title, last-updated stamp, upload / template / export actions, language
/// toggle and the status of the last upload.
pub fn header(ui: &mut Ui, state: &mut AppState) {
    let t = state.lang.strings();

    ui.horizontal(|ui: &mut Ui| {
        ui.heading(t.title);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            if ui.button(state.lang.toggle_label()).clicked() {
                state.lang = state.lang.toggled();
            }
            ui.label(format!("{} {}", t.last_updated, seed::LAST_UPDATED));
        });
    });

    ui.horizontal(|ui: &mut Ui| {
        if ui.button(t.upload_data).clicked() {
            upload_dialog(state);
        }

        ui.menu_button(t.download_template, |ui: &mut Ui| {
            for kind in TemplateKind::ALL {
                if ui.button(kind.filename()).clicked() {
                    save_template(state, kind);
                    ui.close_menu();
                }
            }
        });

        if ui.button(t.export_data).clicked() {
            export_dialog(state);
        }

        status_label(ui, &state.status, t);
    });
}

fn status_label(ui: &mut Ui, status: &UploadStatus, t: &Translations) {
    let (text, color) = match status {
        UploadStatus::Idle => return,
        UploadStatus::SuccessMonthly => (t.status_monthly_replaced.to_string(), Color32::DARK_GREEN),
        UploadStatus::SuccessMetrics => (t.status_metrics_updated.to_string(), Color32::DARK_GREEN),
        UploadStatus::SuccessGeneral => (t.status_general_stored.to_string(), Color32::DARK_GREEN),
        UploadStatus::Error(msg) => (format!("{}: {msg}", t.status_error_prefix), Color32::RED),
    };
    ui.label(RichText::new(text).color(color));
}

// ---------------------------------------------------------------------------
// Tab strip
// ---------------------------------------------------------------------------

pub fn tab_strip(ui: &mut Ui, state: &mut AppState) {
    let t = state.lang.strings();
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for tab in Tab::ALL {
            if ui
                .selectable_label(state.tab == tab, tab.label(t))
                .clicked()
            {
                state.tab = tab;
            }
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

/// Pick an upload and run it through the ingestion pipeline.  The picker is
/// restricted to the supported extensions; the loader re-checks anyway.
fn upload_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Upload labour market data")
        .add_filter("Spreadsheet or CSV", &["csv", "xlsx", "xls"])
        .add_filter("CSV", &["csv"])
        .add_filter("Excel", &["xlsx", "xls"])
        .pick_file();

    if let Some(path) = file {
        state.ingest_file(&path);
    }
}

/// Save one of the example templates under its deterministic filename.
fn save_template(state: &mut AppState, kind: TemplateKind) {
    let target = rfd::FileDialog::new()
        .set_title("Save template")
        .set_file_name(kind.filename())
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = target {
        match std::fs::write(&path, kind.csv()) {
            Ok(()) => log::info!("Wrote {kind} template to {}", path.display()),
            Err(e) => {
                log::error!("Failed to write template: {e}");
                state.status = UploadStatus::Error(format!("template write failed: {e}"));
            }
        }
    }
}

/// Export everything the dashboard displays as CSV blocks.
fn export_dialog(state: &mut AppState) {
    let target = rfd::FileDialog::new()
        .set_title("Export data")
        .set_file_name("labour_market_data.csv")
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = target {
        let result = std::fs::File::create(&path)
            .map_err(anyhow::Error::from)
            .and_then(|file| export_csv(&state.export_data(), file));
        match result {
            Ok(()) => log::info!("Exported dashboard data to {}", path.display()),
            Err(e) => {
                log::error!("Export failed: {e:#}");
                state.status = UploadStatus::Error(format!("export failed: {e:#}"));
            }
        }
    }
}
