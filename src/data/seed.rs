use super::model::{
    AgeBandPoint, GenderYearPoint, MetricSet, MonthlyTrendPoint, SectorPoint,
};

// ---------------------------------------------------------------------------
// Static baseline datasets
// ---------------------------------------------------------------------------
//
// Everything here is seeded into the in-memory store at startup and replaced
// (trend) or merged (metrics) by successful uploads. Nothing is persisted, so
// a restart returns to these values.

/// Default monthly unemployment trend, Cyprus vs EU.
pub fn monthly_trend() -> Vec<MonthlyTrendPoint> {
    let raw = [
        ("Jan 2025", 4.8, 6.1, "2025-01"),
        ("Feb 2025", 4.7, 6.0, "2025-02"),
        ("Mar 2025", 4.6, 5.9, "2025-03"),
        ("Apr 2025", 4.5, 5.8, "2025-04"),
        ("May 2025", 4.6, 5.9, "2025-05"),
    ];
    raw.into_iter()
        .map(|(month, cyprus, eu, date)| MonthlyTrendPoint {
            month: month.to_string(),
            cyprus,
            eu,
            date: date.to_string(),
        })
        .collect()
}

/// Default headline indicators for Cyprus (latest reference month).
pub fn cyprus_metrics() -> MetricSet {
    MetricSet {
        unemployment_rate: 4.6,
        employment_rate: 79.8,
        average_salary: 2363.0,
        youth_unemployment: 10.5,
        labour_force_participation: 65.1,
    }
}

/// Default EU-average headline indicators.
pub fn eu_metrics() -> MetricSet {
    MetricSet {
        unemployment_rate: 5.9,
        employment_rate: 75.3,
        average_salary: 2790.0,
        youth_unemployment: 14.5,
        labour_force_participation: 64.9,
    }
}

/// Cyprus employment by gender, 2002–2024 (labour force survey).
pub fn employment_by_gender() -> Vec<GenderYearPoint> {
    const RAW: [(i32, u32, u32, u32, f64); 23] = [
        (2002, 326_075, 181_489, 144_585, 61.9),
        (2003, 341_203, 188_733, 152_470, 63.2),
        (2004, 354_686, 197_787, 156_899, 63.0),
        (2005, 367_524, 206_395, 161_129, 63.2),
        (2006, 374_285, 208_403, 165_882, 63.5),
        (2007, 393_377, 216_805, 176_572, 64.4),
        (2008, 397_374, 219_184, 178_191, 64.2),
        (2009, 404_622, 215_967, 188_655, 63.7),
        (2010, 421_628, 222_377, 199_252, 64.3),
        (2011, 432_165, 227_143, 205_022, 63.7),
        (2012, 436_742, 230_198, 206_544, 63.4),
        (2013, 433_949, 227_806, 206_143, 63.3),
        (2014, 432_288, 223_168, 209_120, 63.7),
        (2015, 420_961, 216_156, 204_805, 62.3),
        (2016, 417_069, 215_602, 201_467, 61.3),
        (2017, 426_789, 221_782, 205_006, 61.6),
        (2018, 437_495, 228_509, 208_985, 62.4),
        (2019, 457_246, 241_488, 215_759, 63.7),
        (2020, 464_839, 247_940, 216_900, 63.4),
        (2021, 479_000, 253_187, 225_813, 63.9),
        (2022, 497_967, 259_203, 238_764, 65.1),
        (2023, 509_585, 262_076, 247_510, 65.5),
        (2024, 511_862, 264_630, 247_232, 65.1),
    ];
    RAW.into_iter()
        .map(|(year, total, male, female, participation_rate)| GenderYearPoint {
            year,
            total,
            male,
            female,
            participation_rate,
        })
        .collect()
}

/// Employment share and gross monthly wage by economic sector.
pub fn sectors() -> Vec<SectorPoint> {
    let raw = [
        ("Services", 62.4, 2180.0, 2650.0),
        ("Trade & Tourism", 18.3, 1690.0, 1980.0),
        ("Industry", 7.8, 2050.0, 2890.0),
        ("Construction", 6.9, 1880.0, 2310.0),
        ("ICT", 4.6, 3420.0, 3780.0),
        ("Agriculture", 2.0, 1350.0, 1540.0),
    ];
    raw.into_iter()
        .map(|(sector, share, cyprus_wage, eu_wage)| SectorPoint {
            sector: sector.to_string(),
            share,
            cyprus_wage,
            eu_wage,
        })
        .collect()
}

/// Unemployment rate by age band, Cyprus vs EU.
pub fn unemployment_by_age() -> Vec<AgeBandPoint> {
    let raw = [
        ("15-24", 10.5, 14.5),
        ("25-34", 5.8, 6.9),
        ("35-44", 4.1, 5.2),
        ("45-54", 3.7, 4.8),
        ("55-64", 3.9, 5.1),
    ];
    raw.into_iter()
        .map(|(age_band, cyprus, eu)| AgeBandPoint {
            age_band: age_band.to_string(),
            cyprus,
            eu,
        })
        .collect()
}

/// Reference date shown in the header.
pub const LAST_UPDATED: &str = "2025-05-31";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_is_chronological() {
        let trend = monthly_trend();
        assert!(trend.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn gender_series_covers_survey_years() {
        let series = employment_by_gender();
        assert_eq!(series.first().map(|p| p.year), Some(2002));
        assert_eq!(series.last().map(|p| p.year), Some(2024));
        // Source figures are independently rounded, so male + female can be
        // off the published total by a head or two.
        for p in &series {
            let sum = p.male + p.female;
            assert!(p.total.abs_diff(sum) <= 2, "year {}", p.year);
            assert!(p.participation_rate > 50.0 && p.participation_rate < 80.0);
        }
    }
}
