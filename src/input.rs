use anyhow::{Context, Result, anyhow, bail};
use std::io::Cursor;
use std::path::Path;
use tokio::fs;

#[derive(Debug, Clone, PartialEq)]
pub struct TrendRecord {
    pub label: Option<String>,
    pub value: f64,
}

impl TrendRecord {
    pub const fn unlabeled(value: f64) -> Self {
        Self { label: None, value }
    }
}

pub struct CsvColumns<'a> {
    pub(crate) value: &'a str,
    pub(crate) label: &'a str,
}

/// Argument values first, then CSV rows in file order.
pub fn collect_records(
    values: Vec<f64>,
    csv_records: Option<Vec<TrendRecord>>,
) -> Result<Vec<TrendRecord>> {
    let mut records: Vec<TrendRecord> = values.into_iter().map(TrendRecord::unlabeled).collect();
    records.extend(csv_records.unwrap_or_default());
    if records.is_empty() {
        bail!("no values to format; pass values as arguments or use --input");
    }
    Ok(records)
}

pub async fn load_csv_records(path: &Path, columns: &CsvColumns<'_>) -> Result<Vec<TrendRecord>> {
    let bytes = fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_csv_records(&bytes, columns).with_context(|| format!("invalid CSV {}", path.display()))
}

pub fn parse_csv_records(data: &[u8], columns: &CsvColumns<'_>) -> Result<Vec<TrendRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(Cursor::new(data));

    let headers = reader.headers().context("missing CSV headers")?.clone();
    let idx_value = headers
        .iter()
        .position(|h| h == columns.value)
        .ok_or_else(|| anyhow!("missing '{}' column", columns.value))?;
    let idx_label = headers.iter().position(|h| h == columns.label);

    let mut records = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let row = index + 1;
        let record = record.with_context(|| format!("failed to read CSV row {row}"))?;
        let raw = record.get(idx_value).unwrap_or("");
        if raw.is_empty() {
            continue;
        }
        let value = raw.parse::<f64>().with_context(|| {
            format!("row {row}: '{raw}' in column '{}' is not a number", columns.value)
        })?;
        let label = idx_label
            .and_then(|idx| record.get(idx))
            .filter(|label| !label.is_empty())
            .map(str::to_string);
        records.push(TrendRecord { label, value });
    }

    Ok(records)
}
