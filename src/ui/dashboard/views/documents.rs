//! Document table view model

use crate::consts::cli_consts::messages;
use crate::snapshot::DocumentRecord;
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Offset-less forms the service emits, `T` or space separated.
const NAIVE_DATE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Confidence tier used to colour the badge.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// High above 0.8, medium above 0.5, low otherwise. Both cutoffs are strict.
    pub fn from_score(score: f64) -> Self {
        if score > 0.8 {
            Severity::High
        } else if score > 0.5 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfidenceBadge {
    pub severity: Severity,
    pub label: String,
}

impl ConfidenceBadge {
    pub fn from_score(score: f64) -> Self {
        Self {
            severity: Severity::from_score(score),
            label: format_confidence(score),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRow {
    pub name: String,
    pub category: String,
    pub confidence: ConfidenceBadge,
    pub language: String,
    pub modified: String,
}

impl DocumentRow {
    pub fn from_record(record: &DocumentRecord) -> Self {
        Self {
            name: basename(&record.filename).to_string(),
            category: record.predicted_category.clone(),
            confidence: ConfidenceBadge::from_score(record.confidence_score),
            language: record.language.to_uppercase(),
            modified: format_local_timestamp(&record.modified_date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    /// Spans the whole table and explains why it is empty.
    Placeholder(String),
    Document(DocumentRow),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTable {
    rows: Vec<TableRow>,
}

impl Default for DocumentTable {
    fn default() -> Self {
        Self {
            rows: vec![TableRow::Placeholder(messages::NO_DOCUMENTS.to_string())],
        }
    }
}

impl DocumentTable {
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn document_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| matches!(row, TableRow::Document(_)))
            .count()
    }
}

/// Replaces every row of the table with the given documents.
pub fn render_documents(table: &mut DocumentTable, documents: &[DocumentRecord]) {
    table.rows = if documents.is_empty() {
        vec![TableRow::Placeholder(messages::NO_DOCUMENTS.to_string())]
    } else {
        documents
            .iter()
            .map(|record| TableRow::Document(DocumentRow::from_record(record)))
            .collect()
    };
}

/// Last `/`-separated segment of a path.
pub fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Percentage with one decimal place, e.g. `0.9234` -> `92.3%`.
pub fn format_confidence(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

/// Renders a server timestamp in the viewer's time zone.
///
/// Timestamps without an offset are taken as local wall-clock time; anything
/// unparseable is returned as-is.
pub fn format_local_timestamp(raw: &str) -> String {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return with_offset
            .with_timezone(&Local)
            .format(DISPLAY_DATE_FORMAT)
            .to_string();
    }
    NAIVE_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
        .map(|local| local.format(DISPLAY_DATE_FORMAT).to_string())
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(filename: &str, score: f64) -> DocumentRecord {
        DocumentRecord {
            filename: filename.to_string(),
            predicted_category: "Contract".to_string(),
            confidence_score: score,
            language: "de".to_string(),
            modified_date: "2024-03-01T09:30:00".to_string(),
        }
    }

    #[test]
    fn severity_boundaries_are_strict() {
        assert_eq!(Severity::from_score(1.0), Severity::High);
        assert_eq!(Severity::from_score(0.81), Severity::High);
        assert_eq!(Severity::from_score(0.8), Severity::Medium);
        assert_eq!(Severity::from_score(0.51), Severity::Medium);
        assert_eq!(Severity::from_score(0.5), Severity::Low);
        assert_eq!(Severity::from_score(0.0), Severity::Low);
        assert_eq!(Severity::High.to_string(), "high");
    }

    #[test]
    fn empty_input_renders_one_placeholder_row() {
        let mut table = DocumentTable::default();
        render_documents(&mut table, &[record("/a/b.pdf", 0.9)]);
        assert_eq!(table.document_count(), 1);

        render_documents(&mut table, &[]);
        assert_eq!(
            table.rows(),
            &[TableRow::Placeholder("No documents processed yet.".to_string())]
        );
    }

    #[test]
    fn rows_replace_previous_contents() {
        let mut table = DocumentTable::default();
        render_documents(&mut table, &[record("/a/1.pdf", 0.9), record("/a/2.pdf", 0.4)]);
        render_documents(&mut table, &[record("/a/3.pdf", 0.6)]);
        assert_eq!(table.rows().len(), 1);
        match &table.rows()[0] {
            TableRow::Document(row) => assert_eq!(row.name, "3.pdf"),
            other => panic!("unexpected row: {:?}", other),
        }
    }

    #[test]
    fn rendering_is_idempotent() {
        let docs = [record("/a/1.pdf", 0.9), record("/a/2.pdf", 0.4)];
        let mut once = DocumentTable::default();
        render_documents(&mut once, &docs);
        let mut twice = DocumentTable::default();
        render_documents(&mut twice, &docs);
        render_documents(&mut twice, &docs);
        assert_eq!(once, twice);
    }

    #[test]
    fn row_formatting() {
        let row = DocumentRow::from_record(&record("/scan-targets/share/q1/report.docx", 0.9234));
        assert_eq!(row.name, "report.docx");
        assert_eq!(row.category, "Contract");
        assert_eq!(row.confidence.label, "92.3%");
        assert_eq!(row.confidence.severity, Severity::High);
        assert_eq!(row.language, "DE");
        assert_eq!(row.modified, "2024-03-01 09:30:00");
    }

    #[test]
    fn basename_handles_plain_names_and_trailing_slashes() {
        assert_eq!(basename("report.pdf"), "report.pdf");
        assert_eq!(basename("/a/b/c.pdf"), "c.pdf");
        assert_eq!(basename("/a/b/"), "");
    }

    #[test]
    fn confidence_labels() {
        assert_eq!(format_confidence(0.5), "50.0%");
        assert_eq!(format_confidence(1.0), "100.0%");
        assert_eq!(format_confidence(0.0), "0.0%");
        assert_eq!(format_confidence(0.87654), "87.7%");
    }

    #[test]
    fn naive_timestamps_accept_either_separator() {
        assert_eq!(format_local_timestamp("2024-05-01 10:00:00"), "2024-05-01 10:00:00");
        assert_eq!(
            format_local_timestamp("2024-05-01 10:00:00.5"),
            "2024-05-01 10:00:00"
        );
        assert_eq!(
            format_local_timestamp("2024-05-01T10:00:00"),
            format_local_timestamp("2024-05-01 10:00:00")
        );
    }

    #[test]
    fn timestamps_fall_back_to_raw_text() {
        assert_eq!(format_local_timestamp("yesterday"), "yesterday");
        assert_eq!(
            format_local_timestamp("2024-03-01T09:30:00.123456"),
            "2024-03-01 09:30:00"
        );
        assert_eq!(format_local_timestamp("2024-03-01T09:30:00"), "2024-03-01 09:30:00");
        // Offsets are converted, so only check that it parsed.
        assert_ne!(
            format_local_timestamp("2024-03-01T09:30:00+00:00"),
            "2024-03-01T09:30:00+00:00"
        );
    }
}
