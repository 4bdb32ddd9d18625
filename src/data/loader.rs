use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{LoadError, Result};

use super::model::{Column, Table};

/// Cell texts read as a missing value (`NaN`) rather than a parse failure.
/// Same set pandas treats as NA by default; the data generators write `N/A`.
const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a table from a delimited text file.  Delimiter by extension.
///
/// * `.tsv`, `.tab` – tab separated
/// * anything else  – comma separated
///
/// The first row is the header.  Every cell must be a number or a
/// missing-value marker.
pub fn load_file(path: &Path) -> Result<Table> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let delimiter = match ext.as_str() {
        "tsv" | "tab" => b'\t',
        _ => b',',
    };

    let file = File::open(path).map_err(|e| LoadError::open(path, e))?;
    let table = load_reader(file, delimiter)?;

    log::info!(
        "Loaded {} rows with columns {:?} from {}",
        table.len(),
        table.column_names(),
        path.display()
    );

    Ok(table)
}

/// Parse delimited text with a header row from any reader.
pub fn load_reader<R: Read>(reader: R, delimiter: u8) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers().map_err(LoadError::from_csv)?;
    if headers.is_empty() {
        return Err(LoadError::Empty);
    }
    let names = unique_headers(headers.iter());

    if names[0] != "n" {
        log::warn!(
            "first column is '{}', plotting it as the independent variable n",
            names[0]
        );
    }

    let mut values: Vec<Vec<f64>> = vec![Vec::new(); names.len()];

    for result in reader.records() {
        let record = result.map_err(LoadError::from_csv)?;
        let line = record.position().map_or(0, |p| p.line());

        for ((cell, name), column) in record.iter().zip(&names).zip(values.iter_mut()) {
            column.push(parse_cell(cell).ok_or_else(|| LoadError::NonNumeric {
                column: name.clone(),
                line,
                value: cell.to_string(),
            })?);
        }
    }

    Table::new(
        names
            .into_iter()
            .zip(values)
            .map(|(name, values)| Column::new(name, values))
            .collect(),
    )
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_cell(s: &str) -> Option<f64> {
    if MISSING_MARKERS.contains(&s) {
        return Some(f64::NAN);
    }
    s.parse::<f64>().ok()
}

/// Rename repeated headers `x` to `x.1`, `x.2`, ... so lookups by name stay
/// unambiguous.
fn unique_headers<'a>(headers: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut taken = BTreeSet::new();
    let mut names = Vec::new();

    for header in headers {
        let mut name = header.to_string();
        let mut suffix = 1;
        while taken.contains(&name) {
            name = format!("{header}.{suffix}");
            suffix += 1;
        }
        taken.insert(name.clone());
        names.push(name);
    }

    names
}
