use std::fmt;

// ---------------------------------------------------------------------------
// Template emitter – downloadable example files for the two known shapes
// ---------------------------------------------------------------------------

/// The upload shapes a template exists for.  The kind comes from a fixed UI
/// menu, so there is no error path here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Monthly,
    Metrics,
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateKind::Monthly => write!(f, "monthly"),
            TemplateKind::Metrics => write!(f, "metrics"),
        }
    }
}

const MONTHLY_TEMPLATE: &str = "\
month,Cyprus,EU,date
Jan 2025,4.8,6.1,2025-01
Feb 2025,4.7,6.0,2025-02
Mar 2025,4.6,5.9,2025-03
";

const METRICS_TEMPLATE: &str = "\
metric,cyprus_value,eu_value
Unemployment Rate,4.6,5.9
Employment Rate,79.8,75.3
Average Salary,2363,2790
Youth Unemployment,10.5,14.5
";

impl TemplateKind {
    pub const ALL: [TemplateKind; 2] = [TemplateKind::Monthly, TemplateKind::Metrics];

    /// The literal CSV blob.  Headers match exactly what the classifier
    /// looks for, so a template re-uploaded unchanged always ingests.
    pub fn csv(self) -> &'static str {
        match self {
            TemplateKind::Monthly => MONTHLY_TEMPLATE,
            TemplateKind::Metrics => METRICS_TEMPLATE,
        }
    }

    /// Deterministic download filename.
    pub fn filename(self) -> String {
        format!("{self}_data_template.csv")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ingest::{classify, Classified};
    use crate::data::loader::rows_from_csv;

    #[test]
    fn monthly_template_header_matches_classifier() {
        assert!(TemplateKind::Monthly.csv().starts_with("month,Cyprus,EU,date"));
    }

    #[test]
    fn metrics_template_header_matches_classifier() {
        assert!(TemplateKind::Metrics
            .csv()
            .starts_with("metric,cyprus_value,eu_value"));
    }

    #[test]
    fn filenames_are_deterministic() {
        assert_eq!(TemplateKind::Monthly.filename(), "monthly_data_template.csv");
        assert_eq!(TemplateKind::Metrics.filename(), "metrics_data_template.csv");
    }

    #[test]
    fn templates_round_trip_through_the_classifier() {
        let monthly = rows_from_csv(TemplateKind::Monthly.csv().as_bytes()).unwrap();
        assert!(matches!(
            classify(&monthly).unwrap(),
            Classified::MonthlyTrend(_)
        ));

        let metrics = rows_from_csv(TemplateKind::Metrics.csv().as_bytes()).unwrap();
        let Classified::Metrics(updates) = classify(&metrics).unwrap() else {
            panic!("expected metrics");
        };
        assert_eq!(updates.len(), 4);
    }
}
