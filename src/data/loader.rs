use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Data, Reader};

use super::ingest::IngestError;
use super::model::{CellValue, RawUploadRow, UploadTable};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Read an uploaded file into row objects.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`          – comma-separated, header row required
/// * `.xlsx` / `.xls` – workbook, first sheet only, header row required
///
/// Any other extension is rejected before the file is opened, so the caller's
/// state stays untouched.
pub fn load_rows(path: &Path) -> Result<UploadTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => {
            let file = std::fs::File::open(path).context("opening CSV")?;
            rows_from_csv(file)
        }
        "xlsx" | "xls" => rows_from_workbook(path),
        other => Err(IngestError::UnsupportedExtension(other.to_string()).into()),
    }
}

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

/// Parse CSV text into an [`UploadTable`].  Header row becomes the column
/// names; each data row becomes a column→cell map.
pub fn rows_from_csv<R: Read>(input: R) -> Result<UploadTable> {
    let mut reader = csv::Reader::from_reader(input);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let mut row = RawUploadRow::new();
        for (col_idx, field) in record.iter().enumerate() {
            let Some(name) = headers.get(col_idx) else {
                continue;
            };
            row.insert(name.clone(), CellValue::from_field(field.trim()));
        }
        rows.push(row);
    }

    Ok(UploadTable { headers, rows })
}

// ---------------------------------------------------------------------------
// Workbook reader
// ---------------------------------------------------------------------------

/// Read the first sheet of an Excel workbook.  The first row is taken as the
/// header row; remaining rows become column→cell maps.
fn rows_from_workbook(path: &Path) -> Result<UploadTable> {
    let mut workbook = open_workbook_auto(path).context("opening workbook")?;
    let range = workbook
        .worksheet_range_at(0)
        .context("workbook has no sheets")?
        .context("reading first sheet")?;

    let mut sheet_rows = range.rows();
    let headers: Vec<String> = match sheet_rows.next() {
        Some(header_row) => header_row
            .iter()
            .map(|c| c.to_string().trim().to_string())
            .collect(),
        None => Vec::new(),
    };

    let mut rows = Vec::new();
    for sheet_row in sheet_rows {
        let mut row = RawUploadRow::new();
        for (col_idx, cell) in sheet_row.iter().enumerate() {
            let Some(name) = headers.get(col_idx) else {
                continue;
            };
            row.insert(name.clone(), cell_from_workbook(cell));
        }
        rows.push(row);
    }

    Ok(UploadTable { headers, rows })
}

fn cell_from_workbook(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::from_field(s.trim()),
        Data::Float(f) => CellValue::Float(*f),
        Data::Int(i) => CellValue::Integer(*i),
        Data::Bool(b) => CellValue::Bool(*b),
        // Dates and cell errors are kept as their text rendering; the
        // classifier treats them like any other free-text cell.
        other => CellValue::String(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_headers_and_cells_are_typed() {
        let text = "month,Cyprus,EU,date\nJan 2025,4.8,6.1,2025-01\n";
        let table = rows_from_csv(text.as_bytes()).unwrap();
        assert_eq!(table.headers, vec!["month", "Cyprus", "EU", "date"]);
        assert_eq!(table.rows.len(), 1);
        let row = &table.rows[0];
        assert_eq!(row["month"], CellValue::String("Jan 2025".into()));
        assert_eq!(row["Cyprus"], CellValue::Float(4.8));
        assert_eq!(row["date"], CellValue::String("2025-01".into()));
    }

    #[test]
    fn header_only_csv_yields_no_rows() {
        let table = rows_from_csv("metric,cyprus_value,eu_value\n".as_bytes()).unwrap();
        assert_eq!(table.headers.len(), 3);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn workbook_headers_and_cells_are_typed() {
        let path = Path::new(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/tests/fixtures/monthly_trend.xlsx"
        ));
        let table = load_rows(path).unwrap();
        assert_eq!(table.headers, vec!["month", "Cyprus", "EU", "date"]);
        assert_eq!(table.rows.len(), 2);
        let row = &table.rows[0];
        assert_eq!(row["month"], CellValue::String("Jun 2025".into()));
        assert_eq!(row["Cyprus"], CellValue::Float(4.4));
        assert_eq!(row["EU"], CellValue::Float(5.7));
        assert_eq!(row["date"], CellValue::String("2025-06".into()));
        assert_eq!(table.rows[1]["month"], CellValue::String("Jul 2025".into()));
    }

    #[test]
    fn txt_extension_is_rejected() {
        let err = load_rows(Path::new("notes.txt")).unwrap_err();
        let ingest = err.downcast_ref::<IngestError>().unwrap();
        assert!(matches!(ingest, IngestError::UnsupportedExtension(e) if e == "txt"));
    }
}
