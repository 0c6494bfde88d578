use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::SectorColors;
use crate::data::model::{GeneralUpload, MetricSet};
use crate::i18n::Translations;
use crate::state::{AppState, Tab};
use crate::ui::charts;

// ---------------------------------------------------------------------------
// Central panel – one render fn per tab
// ---------------------------------------------------------------------------

pub fn central(ui: &mut Ui, state: &AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| match state.tab {
            Tab::Overview => overview(ui, state),
            Tab::UnemploymentTrends => unemployment_trends(ui, state),
            Tab::Demographics => demographics(ui, state),
            Tab::Employment => employment(ui, state),
            Tab::SectoralEmployment => sectoral_employment(ui, state),
            Tab::WageComparison => wage_comparison(ui, state),
            Tab::DataTables => data_tables(ui, state),
        });
}

// ---- Overview ----

fn overview(ui: &mut Ui, state: &AppState) {
    let t = state.lang.strings();

    ui.columns(2, |cols| {
        metric_card(&mut cols[0], t.cyprus_key_metrics, &state.cyprus, state);
        metric_card(&mut cols[1], t.eu_average_metrics, &state.eu, state);
    });

    ui.add_space(12.0);
    ui.heading(t.cyprus.to_string() + " vs " + t.eu_average);
    charts::comparison_bars(ui, &state.cyprus, &state.eu, t);
}

fn metric_card(ui: &mut Ui, heading: &str, set: &MetricSet, state: &AppState) {
    let t = state.lang.strings();
    ui.group(|ui: &mut Ui| {
        ui.heading(heading);
        ui.separator();
        egui::Grid::new(heading).num_columns(2).show(ui, |ui: &mut Ui| {
            ui.label(t.unemployment_rate);
            ui.strong(format!("{:.1}%", set.unemployment_rate));
            ui.end_row();
            ui.label(t.employment_rate);
            ui.strong(format!("{:.1}%", set.employment_rate));
            ui.end_row();
            ui.label(t.average_salary);
            ui.strong(format!("€{:.0}", set.average_salary));
            ui.end_row();
            ui.label(t.youth_unemployment);
            ui.strong(format!("{:.1}%", set.youth_unemployment));
            ui.end_row();
            ui.label(t.labour_force_participation);
            ui.strong(format!("{:.1}%", set.labour_force_participation));
            ui.end_row();
        });
    });
}

// ---- Unemployment trends ----

fn unemployment_trends(ui: &mut Ui, state: &AppState) {
    let t = state.lang.strings();
    ui.heading(t.tab_unemployment_trends);
    charts::trend_chart(ui, &state.trend, t);

    ui.add_space(8.0);
    TableBuilder::new(ui)
        .id_salt("trend_table")
        .striped(true)
        .columns(Column::auto().at_least(90.0), 4)
        .header(20.0, |mut header| {
            for title in [t.col_month, t.cyprus, t.eu_average, t.col_date] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for p in &state.trend {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&p.month);
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.1}", p.cyprus));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.1}", p.eu));
                    });
                    row.col(|ui| {
                        ui.label(&p.date);
                    });
                });
            }
        });
}

// ---- Demographics ----

fn demographics(ui: &mut Ui, state: &AppState) {
    let t = state.lang.strings();
    ui.heading(t.tab_demographics);
    ui.label(t.unemployment_rate);
    charts::age_bars(ui, &state.by_age, t);
}

// ---- Employment ----

fn employment(ui: &mut Ui, state: &AppState) {
    let t = state.lang.strings();
    let Some(latest) = state.by_gender.last() else {
        ui.label(t.no_employment_series);
        return;
    };

    ui.heading(format!("{} ({})", t.key_findings, latest.year));
    egui::Grid::new("employment_summary")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui: &mut Ui| {
            ui.label(t.total_labour_force);
            ui.strong(group_thousands(latest.total));
            ui.end_row();
            ui.label(t.male);
            ui.strong(group_thousands(latest.male));
            ui.end_row();
            ui.label(t.female);
            ui.strong(group_thousands(latest.female));
            ui.end_row();
            ui.label(t.labour_force_participation);
            ui.strong(format!("{:.1}%", latest.participation_rate));
            ui.end_row();
        });

    ui.add_space(12.0);
    ui.heading(t.labour_force_over_time);
    charts::gender_lines(ui, &state.by_gender, t);
}

/// `511862` → `"511,862"`.
fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// ---- Sectoral employment ----

fn sectoral_employment(ui: &mut Ui, state: &AppState) {
    let t = state.lang.strings();
    ui.heading(t.tab_sectoral_employment);
    let colors = SectorColors::new(state.sectors.iter().map(|s| s.sector.as_str()));
    charts::sector_share_bars(ui, &state.sectors, &colors);
}

// ---- Wage comparison ----

fn wage_comparison(ui: &mut Ui, state: &AppState) {
    let t = state.lang.strings();
    ui.heading(t.tab_wage_comparison);
    charts::wage_bars(ui, &state.sectors, t);
}

// ---- Data tables ----

fn data_tables(ui: &mut Ui, state: &AppState) {
    let t = state.lang.strings();
    ui.heading(t.tab_data_tables);

    egui::CollapsingHeader::new(RichText::new(t.table_gender_title).strong())
        .default_open(true)
        .show(ui, |ui: &mut Ui| gender_table(ui, state));

    egui::CollapsingHeader::new(RichText::new(t.tab_sectoral_employment).strong())
        .default_open(false)
        .show(ui, |ui: &mut Ui| sector_table(ui, state));

    if let Some(general) = &state.general {
        egui::CollapsingHeader::new(RichText::new(t.table_uploaded_title).strong())
            .default_open(true)
            .show(ui, |ui: &mut Ui| general_table(ui, general, t));
    }
}

fn gender_table(ui: &mut Ui, state: &AppState) {
    let t = state.lang.strings();
    TableBuilder::new(ui)
        .id_salt("gender_table")
        .striped(true)
        .columns(Column::auto().at_least(80.0), 5)
        .header(20.0, |mut header| {
            for title in [t.col_year, t.col_total, t.male, t.female, t.col_participation] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for p in &state.by_gender {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(p.year.to_string());
                    });
                    row.col(|ui| {
                        ui.label(group_thousands(p.total));
                    });
                    row.col(|ui| {
                        ui.label(group_thousands(p.male));
                    });
                    row.col(|ui| {
                        ui.label(group_thousands(p.female));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.1}%", p.participation_rate));
                    });
                });
            }
        });
}

fn sector_table(ui: &mut Ui, state: &AppState) {
    let t = state.lang.strings();
    TableBuilder::new(ui)
        .id_salt("sector_table")
        .striped(true)
        .columns(Column::auto().at_least(90.0), 4)
        .header(20.0, |mut header| {
            for title in [t.col_sector, t.col_share, t.col_cyprus_wage, t.col_eu_wage] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for s in &state.sectors {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&s.sector);
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.1}", s.share));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.0}", s.cyprus_wage));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.0}", s.eu_wage));
                    });
                });
            }
        });
}

/// Render an uninterpreted upload exactly as it arrived: header order
/// preserved, cells shown as text.
fn general_table(ui: &mut Ui, general: &GeneralUpload, t: &Translations) {
    if general.headers.is_empty() {
        ui.label(t.no_header_row);
        return;
    }
    TableBuilder::new(ui)
        .id_salt("general_table")
        .striped(true)
        .columns(Column::auto().at_least(80.0), general.headers.len())
        .header(20.0, |mut header| {
            for title in &general.headers {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for upload_row in &general.rows {
                body.row(18.0, |mut row| {
                    for name in &general.headers {
                        row.col(|ui| {
                            let text = upload_row
                                .get(name)
                                .map(|c| c.to_string())
                                .unwrap_or_default();
                            ui.label(text);
                        });
                    }
                });
            }
        });
}

#[cfg(test)]
mod tests {
    use super::group_thousands;

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(511_862), "511,862");
    }
}
