//! Reading primer tables and writing result tables.
//!
//! Input rows follow the `Name<TAB>Sequence<TAB>Notes` template. The header row is optional
//! and blank names become `Primer-<n>`. Notes stay on the CLI side and are joined back onto
//! results by batch index.

use crate::error::{CliError, Result};
use meltpoint::core::models::conditions::ReactionConditions;
use meltpoint::core::models::request::BatchEntry;
use meltpoint::engine::batch::{BatchItem, BatchReport};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::debug;

pub const TEMPLATE_HEADER: [&str; 3] = ["Name", "Sequence", "Notes"];

/// Primers read from a table, with the notes column kept alongside by position.
#[derive(Debug, Clone, Default)]
pub struct PrimerSheet {
    pub entries: Vec<BatchEntry>,
    notes: Vec<String>,
}

impl PrimerSheet {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Notes of the entry at `index`, empty when the row had none.
    pub fn notes(&self, index: usize) -> &str {
        self.notes.get(index).map(String::as_str).unwrap_or_default()
    }
}

pub fn delimiter_for(path: &Path) -> u8 {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => b',',
        _ => b'\t',
    }
}

fn is_header(record: &csv::StringRecord) -> bool {
    record
        .get(1)
        .or_else(|| record.get(0))
        .is_some_and(|field| field.eq_ignore_ascii_case("sequence"))
}

pub fn read_primers(path: &Path, conditions: &ReactionConditions) -> Result<PrimerSheet> {
    let file = std::fs::File::open(path)?;
    parse_primers(file, delimiter_for(path), conditions).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

fn parse_primers<R: std::io::Read>(
    reader: R,
    delimiter: u8,
    conditions: &ReactionConditions,
) -> std::result::Result<PrimerSheet, csv::Error> {
    // Tab-separated rows are split on tabs only; a stray quote must not swallow later rows.
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .quoting(delimiter != b'\t')
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut sheet = PrimerSheet::default();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        if row == 0 && is_header(&record) {
            debug!("Skipping header row.");
            continue;
        }

        let (name, sequence, notes) = match record.len() {
            1 => ("", record.get(0).unwrap_or_default(), ""),
            _ => (
                record.get(0).unwrap_or_default(),
                record.get(1).unwrap_or_default(),
                record.get(2).unwrap_or_default(),
            ),
        };
        let label = if name.is_empty() {
            format!("Primer-{}", sheet.len() + 1)
        } else {
            name.to_string()
        };
        sheet
            .entries
            .push(BatchEntry::new(label, sequence, conditions.clone()));
        sheet.notes.push(notes.to_string());
    }

    debug!("Parsed {} primer entries.", sheet.len());
    Ok(sheet)
}

/// Writes the empty input template, header only.
pub fn write_template<W: Write>(writer: W, delimiter: u8) -> std::result::Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);
    writer.write_record(TEMPLATE_HEADER)?;
    writer.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct AnnotatedItem<'a> {
    #[serde(flatten)]
    item: &'a BatchItem,
    notes: &'a str,
}

/// A batch report with each item's notes attached, for JSON output.
#[derive(Serialize)]
pub struct AnnotatedReport<'a> {
    items: Vec<AnnotatedItem<'a>>,
    cancelled: bool,
    skipped: usize,
}

impl<'a> AnnotatedReport<'a> {
    pub fn new(report: &'a BatchReport, sheet: &'a PrimerSheet) -> Self {
        Self {
            items: report
                .items
                .iter()
                .map(|item| AnnotatedItem {
                    item,
                    notes: sheet.notes(item.index),
                })
                .collect(),
            cancelled: report.cancelled,
            skipped: report.skipped,
        }
    }
}

#[derive(Serialize)]
struct ResultRow<'a> {
    name: &'a str,
    sequence: &'a str,
    length: Option<usize>,
    gc_percent: Option<String>,
    tm: Option<String>,
    ta: Option<String>,
    status: String,
    notes: &'a str,
}

impl<'a> ResultRow<'a> {
    fn new(item: &'a BatchItem, notes: &'a str) -> Self {
        match &item.outcome {
            Ok(result) => Self {
                name: &item.label,
                sequence: result.sequence().as_str(),
                length: Some(result.length()),
                gc_percent: Some(format!("{:.1}", result.gc_percent())),
                tm: Some(format!("{:.1}", result.corrected_tm())),
                ta: Some(format!("{:.1}", result.annealing_temp())),
                status: "ok".to_string(),
                notes,
            },
            Err(failure) => Self {
                name: &item.label,
                sequence: &failure.input,
                length: None,
                gc_percent: None,
                tm: None,
                ta: None,
                status: failure.reason.to_string(),
                notes,
            },
        }
    }
}

pub fn write_table<W: Write>(
    writer: W,
    delimiter: u8,
    report: &BatchReport,
    sheet: &PrimerSheet,
) -> std::result::Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);
    for item in &report.items {
        writer.serialize(ResultRow::new(item, sheet.notes(item.index)))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_report_file(
    path: &Path,
    report: &BatchReport,
    sheet: &PrimerSheet,
    as_json: bool,
) -> Result<()> {
    let file = std::fs::File::create(path)?;
    let written = if as_json {
        serde_json::to_writer_pretty(file, &AnnotatedReport::new(report, sheet))
            .map_err(anyhow::Error::from)
    } else {
        write_table(file, delimiter_for(path), report, sheet).map_err(anyhow::Error::from)
    };
    written.map_err(|source| CliError::FileWriting {
        path: path.to_path_buf(),
        source,
    })
}
