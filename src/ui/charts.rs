use std::ops::RangeInclusive;

use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoints};

use crate::color::{self, SectorColors};
use crate::data::model::{AgeBandPoint, GenderYearPoint, MetricSet, MonthlyTrendPoint, SectorPoint};
use crate::i18n::Translations;

// ---------------------------------------------------------------------------
// Chart widgets (thin egui_plot wrappers)
// ---------------------------------------------------------------------------

/// Axis formatter that shows the category label at integer positions and
/// nothing in between.
fn category_axis(labels: Vec<String>) -> impl Fn(GridMark, &RangeInclusive<f64>) -> String {
    move |mark, _range| {
        let i = mark.value.round() as usize;
        if (mark.value - i as f64).abs() < 1e-6 {
            labels.get(i).cloned().unwrap_or_default()
        } else {
            String::new()
        }
    }
}

/// Cyprus vs EU monthly unemployment trend as two line series.
pub fn trend_chart(ui: &mut Ui, trend: &[MonthlyTrendPoint], t: &Translations) {
    let labels: Vec<String> = trend.iter().map(|p| p.month.clone()).collect();

    let cyprus: PlotPoints = trend
        .iter()
        .enumerate()
        .map(|(i, p)| [i as f64, p.cyprus])
        .collect();
    let eu: PlotPoints = trend
        .iter()
        .enumerate()
        .map(|(i, p)| [i as f64, p.eu])
        .collect();

    Plot::new("trend_chart")
        .legend(Legend::default())
        .y_axis_label(t.percentage)
        .height(320.0)
        .x_axis_formatter(category_axis(labels))
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(cyprus)
                    .name(t.cyprus)
                    .color(color::CYPRUS)
                    .width(2.0),
            );
            plot_ui.line(Line::new(eu).name(t.eu_average).color(color::EU).width(2.0));
        });
}

/// Grouped bars comparing the percentage indicators between the regions.
pub fn comparison_bars(ui: &mut Ui, cyprus: &MetricSet, eu: &MetricSet, t: &Translations) {
    let indicators = [
        (t.unemployment_rate, cyprus.unemployment_rate, eu.unemployment_rate),
        (t.employment_rate, cyprus.employment_rate, eu.employment_rate),
        (t.youth_unemployment, cyprus.youth_unemployment, eu.youth_unemployment),
        (
            t.labour_force_participation,
            cyprus.labour_force_participation,
            eu.labour_force_participation,
        ),
    ];
    let labels: Vec<String> = indicators.iter().map(|(l, _, _)| l.to_string()).collect();

    let cy_bars: Vec<Bar> = indicators
        .iter()
        .enumerate()
        .map(|(i, (_, cy, _))| Bar::new(i as f64 - 0.18, *cy).width(0.32))
        .collect();
    let eu_bars: Vec<Bar> = indicators
        .iter()
        .enumerate()
        .map(|(i, (_, _, eu))| Bar::new(i as f64 + 0.18, *eu).width(0.32))
        .collect();

    Plot::new("comparison_bars")
        .legend(Legend::default())
        .y_axis_label(t.percentage)
        .height(320.0)
        .x_axis_formatter(category_axis(labels))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(cy_bars).name(t.cyprus).color(color::CYPRUS));
            plot_ui.bar_chart(BarChart::new(eu_bars).name(t.eu_average).color(color::EU));
        });
}

/// Employment share per sector, one coloured bar each.
pub fn sector_share_bars(ui: &mut Ui, sectors: &[SectorPoint], colors: &SectorColors) {
    let labels: Vec<String> = sectors.iter().map(|s| s.sector.clone()).collect();
    let bars: Vec<Bar> = sectors
        .iter()
        .enumerate()
        .map(|(i, s)| {
            Bar::new(i as f64, s.share)
                .width(0.6)
                .fill(colors.color_for(&s.sector))
                .name(&s.sector)
        })
        .collect();

    Plot::new("sector_share_bars")
        .height(320.0)
        .x_axis_formatter(category_axis(labels))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

/// Gross monthly wages per sector, Cyprus vs EU.
pub fn wage_bars(ui: &mut Ui, sectors: &[SectorPoint], t: &Translations) {
    let labels: Vec<String> = sectors.iter().map(|s| s.sector.clone()).collect();
    let cy_bars: Vec<Bar> = sectors
        .iter()
        .enumerate()
        .map(|(i, s)| Bar::new(i as f64 - 0.18, s.cyprus_wage).width(0.32))
        .collect();
    let eu_bars: Vec<Bar> = sectors
        .iter()
        .enumerate()
        .map(|(i, s)| Bar::new(i as f64 + 0.18, s.eu_wage).width(0.32))
        .collect();

    Plot::new("wage_bars")
        .legend(Legend::default())
        .y_axis_label(t.eur_per_month)
        .height(320.0)
        .x_axis_formatter(category_axis(labels))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(cy_bars).name(t.cyprus).color(color::CYPRUS));
            plot_ui.bar_chart(BarChart::new(eu_bars).name(t.eu_average).color(color::EU));
        });
}

/// Labour force size over time, with male/female breakdown lines.
pub fn gender_lines(ui: &mut Ui, by_gender: &[GenderYearPoint], t: &Translations) {
    let total: PlotPoints = by_gender
        .iter()
        .map(|p| [p.year as f64, p.total as f64])
        .collect();
    let male: PlotPoints = by_gender
        .iter()
        .map(|p| [p.year as f64, p.male as f64])
        .collect();
    let female: PlotPoints = by_gender
        .iter()
        .map(|p| [p.year as f64, p.female as f64])
        .collect();

    Plot::new("gender_lines")
        .legend(Legend::default())
        .y_axis_label(t.persons)
        .height(320.0)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(total)
                    .name(t.col_total)
                    .color(color::ACCENT)
                    .width(2.0),
            );
            plot_ui.line(Line::new(male).name(t.male).color(color::CYPRUS).width(1.5));
            plot_ui.line(Line::new(female).name(t.female).color(color::EU).width(1.5));
        });
}

/// Unemployment by age band, Cyprus vs EU.
pub fn age_bars(ui: &mut Ui, by_age: &[AgeBandPoint], t: &Translations) {
    let labels: Vec<String> = by_age.iter().map(|p| p.age_band.clone()).collect();
    let cy_bars: Vec<Bar> = by_age
        .iter()
        .enumerate()
        .map(|(i, p)| Bar::new(i as f64 - 0.18, p.cyprus).width(0.32))
        .collect();
    let eu_bars: Vec<Bar> = by_age
        .iter()
        .enumerate()
        .map(|(i, p)| Bar::new(i as f64 + 0.18, p.eu).width(0.32))
        .collect();

    Plot::new("age_bars")
        .legend(Legend::default())
        .y_axis_label(t.percentage)
        .height(320.0)
        .x_axis_formatter(category_axis(labels))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(cy_bars).name(t.cyprus).color(color::CYPRUS));
            plot_ui.bar_chart(BarChart::new(eu_bars).name(t.eu_average).color(color::EU));
        });
}
