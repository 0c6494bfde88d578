use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// CellValue – a single cell of an uploaded table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell as produced by the CSV and workbook readers.
/// The shape of an upload is unknown until the first row is inspected.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Empty,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Empty => Ok(()),
        }
    }
}

impl CellValue {
    /// Try to interpret the cell as a finite `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        let v = match self {
            CellValue::Float(v) => *v,
            CellValue::Integer(i) => *i as f64,
            CellValue::String(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        v.is_finite().then_some(v)
    }

    /// Parse a raw CSV field into the closest-fitting variant.
    pub fn from_field(s: &str) -> CellValue {
        if s.is_empty() {
            return CellValue::Empty;
        }
        if let Ok(i) = s.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return CellValue::Float(f);
        }
        if s == "true" || s == "false" {
            return CellValue::Bool(s == "true");
        }
        CellValue::String(s.to_string())
    }
}

/// One uploaded row: column name → cell, shape unknown until inspected.
pub type RawUploadRow = BTreeMap<String, CellValue>;

/// A parsed upload: header order plus the row objects.
#[derive(Debug, Clone)]
pub struct UploadTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawUploadRow>,
}

// ---------------------------------------------------------------------------
// MonthlyTrendPoint – one month of the unemployment trend
// ---------------------------------------------------------------------------

/// One month's unemployment percentages for Cyprus and the EU.
/// The sequence is kept in chronological order for chart rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTrendPoint {
    /// Axis label, e.g. "Jan 2025".
    pub month: String,
    #[serde(rename = "Cyprus")]
    pub cyprus: f64,
    #[serde(rename = "EU")]
    pub eu: f64,
    /// `YYYY-MM`.
    pub date: String,
}

// ---------------------------------------------------------------------------
// MetricSet – snapshot of the headline indicators for one region
// ---------------------------------------------------------------------------

/// Five headline labour-market indicators for one region.
/// All values are finite; unrecognized metric labels are never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSet {
    pub unemployment_rate: f64,
    pub employment_rate: f64,
    pub average_salary: f64,
    pub youth_unemployment: f64,
    pub labour_force_participation: f64,
}

/// The metric families an uploaded `metric` label can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKey {
    UnemploymentRate,
    EmploymentRate,
    AverageSalary,
    YouthUnemployment,
}

impl MetricSet {
    pub fn get(&self, key: MetricKey) -> f64 {
        match key {
            MetricKey::UnemploymentRate => self.unemployment_rate,
            MetricKey::EmploymentRate => self.employment_rate,
            MetricKey::AverageSalary => self.average_salary,
            MetricKey::YouthUnemployment => self.youth_unemployment,
        }
    }

    pub fn set(&mut self, key: MetricKey, value: f64) {
        match key {
            MetricKey::UnemploymentRate => self.unemployment_rate = value,
            MetricKey::EmploymentRate => self.employment_rate = value,
            MetricKey::AverageSalary => self.average_salary = value,
            MetricKey::YouthUnemployment => self.youth_unemployment = value,
        }
    }
}

// ---------------------------------------------------------------------------
// GeneralUpload – an uploaded table we display but do not interpret
// ---------------------------------------------------------------------------

/// An upload that matched neither known shape, kept opaque for the
/// Data Tables tab.
#[derive(Debug, Clone)]
pub struct GeneralUpload {
    pub headers: Vec<String>,
    pub rows: Vec<RawUploadRow>,
}

// ---------------------------------------------------------------------------
// Static series used by the view-only tabs
// ---------------------------------------------------------------------------

/// Employment by gender for one year (labour force survey series).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GenderYearPoint {
    pub year: i32,
    pub total: u32,
    pub male: u32,
    pub female: u32,
    pub participation_rate: f64,
}

/// Employment share and average wage for one economic sector.
#[derive(Debug, Clone, Serialize)]
pub struct SectorPoint {
    pub sector: String,
    /// Share of total employment, percent.
    pub share: f64,
    /// Average gross monthly wage in Cyprus, EUR.
    pub cyprus_wage: f64,
    /// EU average gross monthly wage, EUR.
    pub eu_wage: f64,
}

/// Unemployment rate for one age band, Cyprus vs EU.
#[derive(Debug, Clone, Serialize)]
pub struct AgeBandPoint {
    pub age_band: String,
    pub cyprus: f64,
    pub eu: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_from_field_guesses_types() {
        assert_eq!(CellValue::from_field("42"), CellValue::Integer(42));
        assert_eq!(CellValue::from_field("4.6"), CellValue::Float(4.6));
        assert_eq!(CellValue::from_field("true"), CellValue::Bool(true));
        assert_eq!(CellValue::from_field(""), CellValue::Empty);
        assert_eq!(
            CellValue::from_field("Jan 2025"),
            CellValue::String("Jan 2025".into())
        );
    }

    #[test]
    fn as_f64_rejects_non_numeric_and_non_finite() {
        assert_eq!(CellValue::String("4.6".into()).as_f64(), Some(4.6));
        assert_eq!(CellValue::String(" 5.9 ".into()).as_f64(), Some(5.9));
        assert_eq!(CellValue::String("n/a".into()).as_f64(), None);
        assert_eq!(CellValue::Float(f64::NAN).as_f64(), None);
        assert_eq!(CellValue::Empty.as_f64(), None);
    }
}
