// ---------------------------------------------------------------------------
// Static translation tables (English / Greek)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    El,
}

/// All user-visible strings for one language.
pub struct Translations {
    pub title: &'static str,
    pub last_updated: &'static str,
    pub export_data: &'static str,
    pub upload_data: &'static str,
    pub download_template: &'static str,

    pub tab_overview: &'static str,
    pub tab_unemployment_trends: &'static str,
    pub tab_demographics: &'static str,
    pub tab_employment: &'static str,
    pub tab_sectoral_employment: &'static str,
    pub tab_wage_comparison: &'static str,
    pub tab_data_tables: &'static str,

    pub cyprus_key_metrics: &'static str,
    pub eu_average_metrics: &'static str,
    pub unemployment_rate: &'static str,
    pub employment_rate: &'static str,
    pub average_salary: &'static str,
    pub youth_unemployment: &'static str,
    pub labour_force_participation: &'static str,

    pub cyprus: &'static str,
    pub eu_average: &'static str,
    pub percentage: &'static str,

    pub status_monthly_replaced: &'static str,
    pub status_metrics_updated: &'static str,
    pub status_general_stored: &'static str,
    pub status_error_prefix: &'static str,

    pub key_findings: &'static str,
    pub total_labour_force: &'static str,
    pub male: &'static str,
    pub female: &'static str,
    pub labour_force_over_time: &'static str,
    pub persons: &'static str,
    pub no_employment_series: &'static str,
    pub eur_per_month: &'static str,

    pub table_gender_title: &'static str,
    pub table_uploaded_title: &'static str,
    pub no_header_row: &'static str,
    pub col_month: &'static str,
    pub col_date: &'static str,
    pub col_year: &'static str,
    pub col_total: &'static str,
    pub col_participation: &'static str,
    pub col_sector: &'static str,
    pub col_share: &'static str,
    pub col_cyprus_wage: &'static str,
    pub col_eu_wage: &'static str,
}

static EN: Translations = Translations {
    title: "Cyprus and EU Labour Market Dashboard",
    last_updated: "Last Updated:",
    export_data: "Export Data",
    upload_data: "Upload Data…",
    download_template: "Download Template",

    tab_overview: "Overview",
    tab_unemployment_trends: "Unemployment Trends",
    tab_demographics: "Demographics",
    tab_employment: "Employment",
    tab_sectoral_employment: "Sectoral Employment",
    tab_wage_comparison: "Wage Comparison",
    tab_data_tables: "Data Tables",

    cyprus_key_metrics: "Cyprus Key Metrics",
    eu_average_metrics: "EU Average Metrics",
    unemployment_rate: "Unemployment Rate",
    employment_rate: "Employment Rate",
    average_salary: "Average Salary",
    youth_unemployment: "Youth Unemployment",
    labour_force_participation: "Labour Force Participation",

    cyprus: "Cyprus",
    eu_average: "EU Average",
    percentage: "Percentage (%)",

    status_monthly_replaced: "Monthly trend replaced",
    status_metrics_updated: "Key metrics updated",
    status_general_stored: "Data uploaded",
    status_error_prefix: "Error",

    key_findings: "Key Employment Findings",
    total_labour_force: "Total Labour Force",
    male: "Male",
    female: "Female",
    labour_force_over_time: "Labour Force Over Time",
    persons: "Persons",
    no_employment_series: "No employment series available.",
    eur_per_month: "EUR / month",

    table_gender_title: "Employment by Gender (2002–2024)",
    table_uploaded_title: "Uploaded Data",
    no_header_row: "Uploaded table had no header row.",
    col_month: "Month",
    col_date: "Date",
    col_year: "Year",
    col_total: "Total",
    col_participation: "Participation",
    col_sector: "Sector",
    col_share: "Share (%)",
    col_cyprus_wage: "Cyprus Wage (€)",
    col_eu_wage: "EU Wage (€)",
};

static EL: Translations = Translations {
    title: "Πίνακας Ελέγχου Αγοράς Εργασίας Κύπρου και ΕΕ",
    last_updated: "Τελευταία Ενημέρωση:",
    export_data: "Εξαγωγή Δεδομένων",
    upload_data: "Μεταφόρτωση Δεδομένων…",
    download_template: "Λήψη Προτύπου",

    tab_overview: "Επισκόπηση",
    tab_unemployment_trends: "Τάσεις Ανεργίας",
    tab_demographics: "Δημογραφικά",
    tab_employment: "Απασχόληση",
    tab_sectoral_employment: "Τομεακή Απασχόληση",
    tab_wage_comparison: "Σύγκριση Μισθών",
    tab_data_tables: "Πίνακες Δεδομένων",

    cyprus_key_metrics: "Κύρια Μετρικά Κύπρου",
    eu_average_metrics: "Μέσα Μετρικά ΕΕ",
    unemployment_rate: "Ποσοστό Ανεργίας",
    employment_rate: "Ποσοστό Απασχόλησης",
    average_salary: "Μέσος Μισθός",
    youth_unemployment: "Ανεργία Νέων",
    labour_force_participation: "Συμμετοχή στο Εργατικό Δυναμικό",

    cyprus: "Κύπρος",
    eu_average: "Μέσος Όρος ΕΕ",
    percentage: "Ποσοστό (%)",

    status_monthly_replaced: "Η μηνιαία τάση αντικαταστάθηκε",
    status_metrics_updated: "Τα βασικά μετρικά ενημερώθηκαν",
    status_general_stored: "Τα δεδομένα μεταφορτώθηκαν",
    status_error_prefix: "Σφάλμα",

    key_findings: "Βασικά Ευρήματα Απασχόλησης",
    total_labour_force: "Συνολικό Εργατικό Δυναμικό",
    male: "Άνδρες",
    female: "Γυναίκες",
    labour_force_over_time: "Εργατικό Δυναμικό Διαχρονικά",
    persons: "Άτομα",
    no_employment_series: "Δεν υπάρχει διαθέσιμη σειρά απασχόλησης.",
    eur_per_month: "EUR / μήνα",

    table_gender_title: "Απασχόληση κατά Φύλο (2002–2024)",
    table_uploaded_title: "Μεταφορτωμένα Δεδομένα",
    no_header_row: "Ο μεταφορτωμένος πίνακας δεν είχε γραμμή κεφαλίδων.",
    col_month: "Μήνας",
    col_date: "Ημερομηνία",
    col_year: "Έτος",
    col_total: "Σύνολο",
    col_participation: "Συμμετοχή",
    col_sector: "Τομέας",
    col_share: "Μερίδιο (%)",
    col_cyprus_wage: "Μισθός Κύπρου (€)",
    col_eu_wage: "Μισθός ΕΕ (€)",
};

impl Lang {
    pub fn strings(self) -> &'static Translations {
        match self {
            Lang::En => &EN,
            Lang::El => &EL,
        }
    }

    /// Label for the language toggle button.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Lang::En => "EL",
            Lang::El => "EN",
        }
    }

    pub fn toggled(self) -> Lang {
        match self {
            Lang::En => Lang::El,
            Lang::El => Lang::En,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_and_table_strings_are_translated() {
        let en = Lang::En.strings();
        let el = Lang::El.strings();
        for (a, b) in [
            (en.status_monthly_replaced, el.status_monthly_replaced),
            (en.status_metrics_updated, el.status_metrics_updated),
            (en.status_general_stored, el.status_general_stored),
            (en.status_error_prefix, el.status_error_prefix),
            (en.table_gender_title, el.table_gender_title),
            (en.table_uploaded_title, el.table_uploaded_title),
        ] {
            assert!(!a.is_empty() && !b.is_empty());
            assert_ne!(a, b);
        }
    }

    #[test]
    fn toggle_round_trips() {
        assert_eq!(Lang::En.toggled(), Lang::El);
        assert_eq!(Lang::El.toggled().toggled(), Lang::El);
    }
}
