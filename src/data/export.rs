use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use super::model::{
    AgeBandPoint, GenderYearPoint, MetricSet, MonthlyTrendPoint, SectorPoint,
};

// ---------------------------------------------------------------------------
// CSV export of the displayed datasets
// ---------------------------------------------------------------------------

/// One line of the key-indicator summary block.
#[derive(Debug, Serialize)]
struct IndicatorRow {
    metric: &'static str,
    cyprus: f64,
    eu: f64,
}

/// Everything the dashboard currently displays, gathered for export.
pub struct ExportData<'a> {
    pub trend: &'a [MonthlyTrendPoint],
    pub cyprus: &'a MetricSet,
    pub eu: &'a MetricSet,
    pub by_gender: &'a [GenderYearPoint],
    pub sectors: &'a [SectorPoint],
    pub by_age: &'a [AgeBandPoint],
}

/// Write the current datasets as blank-line-separated CSV blocks, one block
/// per dashboard table.
pub fn export_csv<W: Write>(data: &ExportData<'_>, mut out: W) -> Result<()> {
    write_block(&mut out, data.trend)?;
    write_block(&mut out, &indicator_rows(data.cyprus, data.eu))?;
    write_block(&mut out, data.by_gender)?;
    write_block(&mut out, data.sectors)?;
    write_block(&mut out, data.by_age)?;
    Ok(())
}

fn indicator_rows(cyprus: &MetricSet, eu: &MetricSet) -> Vec<IndicatorRow> {
    vec![
        IndicatorRow {
            metric: "Unemployment Rate",
            cyprus: cyprus.unemployment_rate,
            eu: eu.unemployment_rate,
        },
        IndicatorRow {
            metric: "Employment Rate",
            cyprus: cyprus.employment_rate,
            eu: eu.employment_rate,
        },
        IndicatorRow {
            metric: "Average Salary",
            cyprus: cyprus.average_salary,
            eu: eu.average_salary,
        },
        IndicatorRow {
            metric: "Youth Unemployment",
            cyprus: cyprus.youth_unemployment,
            eu: eu.youth_unemployment,
        },
        IndicatorRow {
            metric: "Labour Force Participation",
            cyprus: cyprus.labour_force_participation,
            eu: eu.labour_force_participation,
        },
    ]
}

fn write_block<W: Write, T: Serialize>(out: &mut W, rows: &[T]) -> Result<()> {
    {
        let mut writer = csv::Writer::from_writer(&mut *out);
        for row in rows {
            writer.serialize(row).context("serializing export row")?;
        }
        writer.flush().context("flushing export block")?;
    }
    out.write_all(b"\n").context("writing block separator")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed;

    #[test]
    fn export_contains_all_blocks() {
        let trend = seed::monthly_trend();
        let cyprus = seed::cyprus_metrics();
        let eu = seed::eu_metrics();
        let by_gender = seed::employment_by_gender();
        let sectors = seed::sectors();
        let by_age = seed::unemployment_by_age();

        let data = ExportData {
            trend: &trend,
            cyprus: &cyprus,
            eu: &eu,
            by_gender: &by_gender,
            sectors: &sectors,
            by_age: &by_age,
        };

        let mut buf = Vec::new();
        export_csv(&data, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("month,Cyprus,EU,date"));
        assert!(text.contains("Unemployment Rate,4.6,5.9"));
        assert!(text.contains("year,total,male,female,participation_rate"));
        assert!(text.contains("sector,share,cyprus_wage,eu_wage"));
        assert!(text.contains("age_band,cyprus,eu"));
    }
}
