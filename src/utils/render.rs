use crate::core::session::Outcome;
use crate::domain::model::{Record, SearchOutcome, SortReport};
use crate::utils::error::{InventoryError, Result};
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown format '{}', expected table, csv or json",
                other
            )),
        }
    }
}

#[derive(Serialize)]
struct BenchRow<'a> {
    algorithm: &'a str,
    elapsed_seconds: f64,
    comparisons: usize,
}

impl<'a> From<&'a SortReport> for BenchRow<'a> {
    fn from(report: &'a SortReport) -> Self {
        Self {
            algorithm: report.algorithm.name(),
            elapsed_seconds: report.elapsed_seconds(),
            comparisons: report.comparisons,
        }
    }
}

#[derive(Serialize)]
struct StatusRow<'a> {
    status: &'a str,
}

#[derive(Serialize)]
struct SearchRow<'a> {
    name: &'a str,
    position: Option<usize>,
    comparisons: usize,
}

impl<'a> SearchRow<'a> {
    fn new(name: &'a str, outcome: &SearchOutcome) -> Self {
        Self {
            name,
            position: outcome.position,
            comparisons: outcome.comparisons,
        }
    }
}

/// Turns a command outcome into the text written to stdout.
///
/// Every outcome has a form in each format. CSV output is always a header
/// plus rows; the sort report of a `Sorted` outcome is not part of the CSV
/// body, it only reaches stderr through the session log.
pub fn render_outcome(outcome: &Outcome, format: OutputFormat) -> Result<String> {
    match outcome {
        Outcome::Inserted => match format {
            OutputFormat::Table => Ok("Item inserted successfully.".to_string()),
            OutputFormat::Csv => to_csv(&[StatusRow { status: "inserted" }]),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "status": "inserted",
            }))?),
        },
        Outcome::Removed(record) => match format {
            OutputFormat::Table => Ok(format!("Item '{}' removed.", record.name)),
            OutputFormat::Csv => to_csv(std::slice::from_ref(record)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "status": "removed",
                "item": record,
            }))?),
        },
        Outcome::Listing(records) => render_records(records, format),
        Outcome::Found { name, outcome } => {
            let row = SearchRow::new(name, outcome);
            match format {
                OutputFormat::Table => Ok(render_search_text(&row)),
                OutputFormat::Csv => to_csv(&[row]),
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&row)?),
            }
        }
        Outcome::Sorted { report, listing } => match format {
            OutputFormat::Table => Ok(format!("{}\n{}", report, render_table(listing))),
            OutputFormat::Csv => to_csv(listing.as_slice()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "report": BenchRow::from(report),
                "items": listing,
            }))?),
        },
        Outcome::Bench(reports) => render_bench(reports, format),
    }
}

pub fn render_records(records: &[Record], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(records)),
        OutputFormat::Csv => to_csv(records),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
    }
}

fn render_search_text(row: &SearchRow<'_>) -> String {
    let found = match row.position {
        Some(position) => format!("Item '{}' found at position {}.", row.name, position),
        None => format!("Item '{}' not found.", row.name),
    };
    format!("{}\nComparisons: {}", found, row.comparisons)
}

fn render_table(records: &[Record]) -> String {
    if records.is_empty() {
        return "The inventory is empty.".to_string();
    }

    let name_width = column_width("Name", records.iter().map(|r| r.name.as_str()));
    let category_width = column_width("Category", records.iter().map(|r| r.category.as_str()));

    let header = format!(
        "{:>3}  {:<name_width$}  {:<category_width$}  {:>8}",
        "#", "Name", "Category", "Quantity"
    );
    std::iter::once(header)
        .chain(records.iter().enumerate().map(|(position, record)| {
            format!(
                "{:>3}  {:<name_width$}  {:<category_width$}  {:>8}",
                position, record.name, record.category, record.quantity
            )
        }))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_bench(reports: &[SortReport], format: OutputFormat) -> Result<String> {
    let rows: Vec<BenchRow<'_>> = reports.iter().map(BenchRow::from).collect();
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&rows)?),
        OutputFormat::Csv => to_csv(&rows),
        OutputFormat::Table => Ok(reports
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(header.len())
}

fn to_csv<T: Serialize>(rows: &[T]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| InventoryError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| InventoryError::ConfigError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}
