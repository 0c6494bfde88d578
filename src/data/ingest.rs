use thiserror::Error;

use super::model::{
    GeneralUpload, MetricKey, MonthlyTrendPoint, RawUploadRow, UploadTable,
};

// ---------------------------------------------------------------------------
// Error taxonomy for the upload boundary
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("uploaded file contains no data rows")]
    EmptyUpload,
}

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

/// A metrics-shape row resolved to a known metric family.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricUpdate {
    pub key: MetricKey,
    pub cyprus: f64,
    pub eu: f64,
}

/// The recognized shapes an upload can take, with the parsed payload.
#[derive(Debug, Clone)]
pub enum Classified {
    /// Full replacement for the monthly unemployment trend.
    MonthlyTrend(Vec<MonthlyTrendPoint>),
    /// Field-by-field updates to the Cyprus and EU metric sets.
    Metrics(Vec<MetricUpdate>),
    /// Anything else: stored opaquely, shown in the Data Tables tab.
    General(GeneralUpload),
}

/// Classify an upload by inspecting the key set of the first row.
///
/// Only the first row decides the shape; a heterogeneous upload is processed
/// under the first row's shape and mismatched rows degrade row-by-row
/// (metrics rows that don't parse are skipped silently).
pub fn classify(table: &UploadTable) -> Result<Classified, IngestError> {
    let first = table.rows.first().ok_or(IngestError::EmptyUpload)?;

    if first.contains_key("month") && first.contains_key("Cyprus") {
        let trend = table.rows.iter().map(trend_point).collect();
        return Ok(Classified::MonthlyTrend(trend));
    }

    if first.contains_key("metric")
        && first.contains_key("cyprus_value")
        && first.contains_key("eu_value")
    {
        let updates = table.rows.iter().filter_map(metric_update).collect();
        return Ok(Classified::Metrics(updates));
    }

    Ok(Classified::General(GeneralUpload {
        headers: table.headers.clone(),
        rows: table.rows.clone(),
    }))
}

/// Convert a monthly-shape row.  Per contract the rows are taken verbatim:
/// no validation beyond the first-row key check, so absent or non-numeric
/// percentage cells simply become zero.
fn trend_point(row: &RawUploadRow) -> MonthlyTrendPoint {
    let text = |key: &str| {
        row.get(key)
            .map(|c| c.to_string())
            .unwrap_or_default()
    };
    let number = |key: &str| row.get(key).and_then(|c| c.as_f64()).unwrap_or(0.0);
    MonthlyTrendPoint {
        month: text("month"),
        cyprus: number("Cyprus"),
        eu: number("EU"),
        date: text("date"),
    }
}

/// Resolve one metrics-shape row, or `None` when the label matches no known
/// family or either value is missing/non-numeric.  Skipped rows produce no
/// warning; the remaining rows still merge.
fn metric_update(row: &RawUploadRow) -> Option<MetricUpdate> {
    let label = row.get("metric")?.to_string().to_lowercase();
    let label = label.trim();
    let key = match_family(label)?;
    let cyprus = row.get("cyprus_value")?.as_f64()?;
    let eu = row.get("eu_value")?.as_f64()?;
    Some(MetricUpdate { key, cyprus, eu })
}

/// Substring match against the known metric families.
///
/// Order matters: "youth unemployment" contains "unemployment", and
/// "unemployment" contains "employment", so the most specific family is
/// checked first.
fn match_family(label: &str) -> Option<MetricKey> {
    if label.contains("youth") {
        Some(MetricKey::YouthUnemployment)
    } else if label.contains("unemployment") {
        Some(MetricKey::UnemploymentRate)
    } else if label.contains("employment") {
        Some(MetricKey::EmploymentRate)
    } else if label.contains("salary") || label.contains("wage") {
        Some(MetricKey::AverageSalary)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::rows_from_csv;
    use crate::data::model::MetricKey;

    fn table(text: &str) -> UploadTable {
        rows_from_csv(text.as_bytes()).unwrap()
    }

    #[test]
    fn monthly_shape_replaces_trend_verbatim() {
        let t = table(
            "month,Cyprus,EU,date\n\
             Jun 2025,4.4,5.7,2025-06\n\
             Jul 2025,4.3,5.6,2025-07\n",
        );
        let Classified::MonthlyTrend(trend) = classify(&t).unwrap() else {
            panic!("expected monthly trend");
        };
        assert_eq!(
            trend,
            vec![
                MonthlyTrendPoint {
                    month: "Jun 2025".into(),
                    cyprus: 4.4,
                    eu: 5.7,
                    date: "2025-06".into(),
                },
                MonthlyTrendPoint {
                    month: "Jul 2025".into(),
                    cyprus: 4.3,
                    eu: 5.6,
                    date: "2025-07".into(),
                },
            ]
        );
    }

    #[test]
    fn metrics_shape_parses_known_families() {
        let t = table(
            "metric,cyprus_value,eu_value\n\
             Unemployment Rate,4.6,5.9\n\
             Employment Rate,79.8,75.3\n\
             Average Salary (EUR),2363,2790\n\
             Youth Unemployment,10.5,14.5\n",
        );
        let Classified::Metrics(updates) = classify(&t).unwrap() else {
            panic!("expected metrics");
        };
        assert_eq!(updates.len(), 4);
        assert_eq!(updates[0].key, MetricKey::UnemploymentRate);
        assert_eq!(updates[0].cyprus, 4.6);
        assert_eq!(updates[0].eu, 5.9);
        assert_eq!(updates[1].key, MetricKey::EmploymentRate);
        assert_eq!(updates[2].key, MetricKey::AverageSalary);
        assert_eq!(updates[3].key, MetricKey::YouthUnemployment);
    }

    #[test]
    fn family_matching_is_most_specific_first() {
        assert_eq!(
            match_family("youth unemployment"),
            Some(MetricKey::YouthUnemployment)
        );
        assert_eq!(
            match_family("unemployment rate"),
            Some(MetricKey::UnemploymentRate)
        );
        assert_eq!(
            match_family("employment rate"),
            Some(MetricKey::EmploymentRate)
        );
        assert_eq!(match_family("average wage"), Some(MetricKey::AverageSalary));
        assert_eq!(match_family("gdp growth"), None);
    }

    #[test]
    fn unknown_and_malformed_metric_rows_are_skipped() {
        let t = table(
            "metric,cyprus_value,eu_value\n\
             Unknown Thing,1.0,2.0\n\
             Unemployment Rate,not a number,5.9\n\
             Employment Rate,79.8,75.3\n",
        );
        let Classified::Metrics(updates) = classify(&t).unwrap() else {
            panic!("expected metrics");
        };
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].key, MetricKey::EmploymentRate);
    }

    #[test]
    fn unrecognized_shape_falls_back_to_general() {
        let t = table("region,gdp\nCyprus,29.4\n");
        let Classified::General(general) = classify(&t).unwrap() else {
            panic!("expected general");
        };
        assert_eq!(general.headers, vec!["region", "gdp"]);
        assert_eq!(general.rows.len(), 1);
    }

    #[test]
    fn empty_upload_is_an_error() {
        let t = table("month,Cyprus,EU,date\n");
        assert!(matches!(classify(&t), Err(IngestError::EmptyUpload)));
    }

    #[test]
    fn metric_labels_are_case_and_whitespace_insensitive() {
        let t = table(
            "metric,cyprus_value,eu_value\n\
             \"  UNEMPLOYMENT rate \",4.1,5.5\n",
        );
        let Classified::Metrics(updates) = classify(&t).unwrap() else {
            panic!("expected metrics");
        };
        assert_eq!(updates[0].key, MetricKey::UnemploymentRate);
        assert_eq!(updates[0].cyprus, 4.1);
    }
}
