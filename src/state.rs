use std::path::Path;

use crate::data::export::ExportData;
use crate::data::ingest::{classify, Classified};
use crate::data::loader::load_rows;
use crate::data::model::{
    AgeBandPoint, GenderYearPoint, GeneralUpload, MetricSet, MonthlyTrendPoint,
    SectorPoint,
};
use crate::data::seed;
use crate::i18n::{Lang, Translations};

// ---------------------------------------------------------------------------
// Tabs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    UnemploymentTrends,
    Demographics,
    Employment,
    SectoralEmployment,
    WageComparison,
    DataTables,
}

impl Tab {
    pub const ALL: [Tab; 7] = [
        Tab::Overview,
        Tab::UnemploymentTrends,
        Tab::Demographics,
        Tab::Employment,
        Tab::SectoralEmployment,
        Tab::WageComparison,
        Tab::DataTables,
    ];

    pub fn label(self, t: &Translations) -> &'static str {
        match self {
            Tab::Overview => t.tab_overview,
            Tab::UnemploymentTrends => t.tab_unemployment_trends,
            Tab::Demographics => t.tab_demographics,
            Tab::Employment => t.tab_employment,
            Tab::SectoralEmployment => t.tab_sectoral_employment,
            Tab::WageComparison => t.tab_wage_comparison,
            Tab::DataTables => t.tab_data_tables,
        }
    }
}

// ---------------------------------------------------------------------------
// Upload status
// ---------------------------------------------------------------------------

/// Outcome of the most recent upload, shown in the header bar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadStatus {
    #[default]
    Idle,
    SuccessMonthly,
    SuccessMetrics,
    SuccessGeneral,
    Error(String),
}

// ---------------------------------------------------------------------------
// Application state (the dataset store)
// ---------------------------------------------------------------------------

/// The full in-memory view of everything the dashboard displays.  Seeded
/// with static defaults at startup, mutated only through [`Self::ingest_file`]
/// and the small UI setters; never persisted.
pub struct AppState {
    /// Monthly unemployment trend; replaced wholesale by a monthly upload.
    pub trend: Vec<MonthlyTrendPoint>,
    /// Headline indicators; merged field-by-field by a metrics upload.
    pub cyprus: MetricSet,
    pub eu: MetricSet,

    // Static view-only series.
    pub by_gender: Vec<GenderYearPoint>,
    pub sectors: Vec<SectorPoint>,
    pub by_age: Vec<AgeBandPoint>,

    /// Last upload that matched neither known shape.
    pub general: Option<GeneralUpload>,

    pub status: UploadStatus,
    pub tab: Tab,
    pub lang: Lang,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            trend: seed::monthly_trend(),
            cyprus: seed::cyprus_metrics(),
            eu: seed::eu_metrics(),
            by_gender: seed::employment_by_gender(),
            sectors: seed::sectors(),
            by_age: seed::unemployment_by_age(),
            general: None,
            status: UploadStatus::Idle,
            tab: Tab::default(),
            lang: Lang::default(),
        }
    }
}

impl AppState {
    /// Run one upload through the full pipeline: read rows, classify, merge.
    /// Any failure sets an error status and leaves the store untouched.
    pub fn ingest_file(&mut self, path: &Path) {
        let table = match load_rows(path) {
            Ok(table) => table,
            Err(e) => {
                log::error!("Failed to read upload {}: {e:#}", path.display());
                self.status = UploadStatus::Error(format!("{e:#}"));
                return;
            }
        };
        match classify(&table) {
            Ok(classified) => self.apply_upload(classified),
            Err(e) => {
                log::error!("Rejected upload {}: {e}", path.display());
                self.status = UploadStatus::Error(e.to_string());
            }
        }
    }

    /// Commit a classified upload to the store.
    pub fn apply_upload(&mut self, classified: Classified) {
        match classified {
            Classified::MonthlyTrend(trend) => {
                log::info!("Replacing monthly trend with {} uploaded rows", trend.len());
                self.trend = trend;
                self.status = UploadStatus::SuccessMonthly;
            }
            Classified::Metrics(updates) => {
                log::info!("Merging {} metric updates", updates.len());
                for update in updates {
                    self.cyprus.set(update.key, update.cyprus);
                    self.eu.set(update.key, update.eu);
                }
                self.status = UploadStatus::SuccessMetrics;
            }
            Classified::General(general) => {
                log::info!(
                    "Storing general upload: {} columns, {} rows",
                    general.headers.len(),
                    general.rows.len()
                );
                self.general = Some(general);
                self.status = UploadStatus::SuccessGeneral;
            }
        }
    }

    /// Gather everything displayed, for the CSV export action.
    pub fn export_data(&self) -> ExportData<'_> {
        ExportData {
            trend: &self.trend,
            cyprus: &self.cyprus,
            eu: &self.eu,
            by_gender: &self.by_gender,
            sectors: &self.sectors,
            by_age: &self.by_age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::rows_from_csv;
    use crate::data::model::MetricKey;

    fn ingest_csv(state: &mut AppState, text: &str) {
        let table = rows_from_csv(text.as_bytes()).unwrap();
        match classify(&table) {
            Ok(classified) => state.apply_upload(classified),
            Err(e) => state.status = UploadStatus::Error(e.to_string()),
        }
    }

    #[test]
    fn monthly_upload_replaces_the_trend() {
        let mut state = AppState::default();
        ingest_csv(
            &mut state,
            "month,Cyprus,EU,date\nJun 2025,4.4,5.7,2025-06\n",
        );
        assert_eq!(state.status, UploadStatus::SuccessMonthly);
        assert_eq!(state.trend.len(), 1);
        assert_eq!(state.trend[0].month, "Jun 2025");
        assert_eq!(state.trend[0].cyprus, 4.4);
    }

    #[test]
    fn metrics_upload_merges_field_by_field() {
        let mut state = AppState::default();
        let before = state.cyprus;
        ingest_csv(
            &mut state,
            "metric,cyprus_value,eu_value\nUnemployment Rate,4.2,5.5\n",
        );
        assert_eq!(state.status, UploadStatus::SuccessMetrics);
        assert_eq!(state.cyprus.unemployment_rate, 4.2);
        assert_eq!(state.eu.unemployment_rate, 5.5);
        // Untouched fields keep their seeded values.
        assert_eq!(state.cyprus.employment_rate, before.employment_rate);
        assert_eq!(state.cyprus.average_salary, before.average_salary);
    }

    #[test]
    fn unknown_metric_rows_change_nothing() {
        let mut state = AppState::default();
        let cyprus_before = state.cyprus;
        let eu_before = state.eu;
        ingest_csv(
            &mut state,
            "metric,cyprus_value,eu_value\nUnknown Thing,1.0,2.0\n",
        );
        assert_eq!(state.status, UploadStatus::SuccessMetrics);
        for key in [
            MetricKey::UnemploymentRate,
            MetricKey::EmploymentRate,
            MetricKey::AverageSalary,
            MetricKey::YouthUnemployment,
        ] {
            assert_eq!(state.cyprus.get(key), cyprus_before.get(key));
            assert_eq!(state.eu.get(key), eu_before.get(key));
        }
    }

    #[test]
    fn general_upload_is_stored_opaquely() {
        let mut state = AppState::default();
        let trend_before = state.trend.clone();
        ingest_csv(&mut state, "region,gdp\nCyprus,29.4\n");
        assert_eq!(state.status, UploadStatus::SuccessGeneral);
        assert_eq!(state.trend, trend_before);
        let general = state.general.as_ref().unwrap();
        assert_eq!(general.headers, vec!["region", "gdp"]);
    }

    #[test]
    fn unsupported_extension_leaves_the_store_untouched() {
        let mut state = AppState::default();
        let trend_before = state.trend.clone();
        let cyprus_before = state.cyprus;
        state.ingest_file(Path::new("upload.txt"));
        assert!(matches!(state.status, UploadStatus::Error(_)));
        assert_eq!(state.trend, trend_before);
        assert_eq!(state.cyprus, cyprus_before);
        assert!(state.general.is_none());
    }

    #[test]
    fn header_only_upload_is_a_deterministic_error() {
        let mut state = AppState::default();
        let trend_before = state.trend.clone();
        ingest_csv(&mut state, "month,Cyprus,EU,date\n");
        assert!(matches!(state.status, UploadStatus::Error(_)));
        assert_eq!(state.trend, trend_before);
    }
}
