use std::collections::BTreeSet;

use super::diagnostics_sink::DiagnosticsSink;
use crate::schema::ResumeSchema;
use crate::validator::{ActualType, Discrepancy};

/// The one repeated-entry section that gets per-entry labels in reports
const ENTRIES_SECTION: &str = "experiences";

/// Consolidated issues for one top-level section
#[derive(Debug, Default)]
pub struct SectionReport {
    /// Top-level section name (first path segment)
    pub section: String,
    /// Names of required fields absent from the document
    pub missing: Vec<String>,
    /// (field, actual type, expected type) for present-but-mistyped values
    pub incorrect: Vec<(String, &'static str, &'static str)>,
    /// Distinct malformed entry indices, `experiences` only
    pub entries: BTreeSet<usize>,
}

impl SectionReport {
    fn new(section: String) -> Self {
        Self {
            section,
            ..Default::default()
        }
    }
}

/// Turns raw discrepancies into one composite, example-annotated message.
pub struct DiagnosticReporter;

impl DiagnosticReporter {
    /// Group discrepancies by top-level section, in the order each section
    /// is first encountered, and classify them as missing or incorrect.
    pub fn consolidate(discrepancies: &[Discrepancy]) -> Vec<SectionReport> {
        let mut reports: Vec<SectionReport> = Vec::new();

        for discrepancy in discrepancies {
            let section = discrepancy.section();
            let position = match reports.iter().position(|r| r.section == section) {
                Some(position) => position,
                None => {
                    reports.push(SectionReport::new(section.to_string()));
                    reports.len() - 1
                }
            };
            let report = &mut reports[position];

            if report.section == ENTRIES_SECTION {
                if let Some(index) = discrepancy.entry_index() {
                    report.entries.insert(index);
                }
            }

            match &discrepancy.actual {
                ActualType::Missing => report.missing.push(discrepancy.leaf_label()),
                ActualType::Type(actual) => {
                    report
                        .incorrect
                        .push((discrepancy.leaf_label(), *actual, discrepancy.expected))
                }
            }
        }

        reports
    }

    /// Render the composite diagnostic message, or `None` when there is
    /// nothing to report (the document is valid).
    pub fn render(discrepancies: &[Discrepancy], schema: &ResumeSchema) -> Option<String> {
        if discrepancies.is_empty() {
            return None;
        }

        let mut message = String::new();
        for report in Self::consolidate(discrepancies) {
            let example = schema.example_for(&report.section);

            if report.section == ENTRIES_SECTION && !report.entries.is_empty() {
                let entries = report
                    .entries
                    .iter()
                    .map(|index| format!("{}[{}]", ENTRIES_SECTION, index))
                    .collect::<Vec<_>>()
                    .join(", ");
                message.push_str(&format!(
                    "\nYou have formatting errors in these {} entries: '{}'.{}",
                    ENTRIES_SECTION,
                    entries,
                    example_clause(example)
                ));
            }

            if !report.missing.is_empty() {
                let missing_keys = report.missing.join(", ");
                message.push_str(&format!(
                    "\nYou are missing these keys: '{}' in the '{}' section.{}",
                    missing_keys,
                    report.section,
                    example_clause(example)
                ));
            }

            for (field, actual_type, expected_type) in &report.incorrect {
                message.push_str(&format!(
                    "\nThe value for '{}' in the '{}' section is of type '{}'.\nExpected type: '{}'.{}",
                    field,
                    report.section,
                    actual_type,
                    expected_type,
                    example_clause(example)
                ));
            }
        }

        Some(message)
    }

    /// Render and, when there is anything to report, deliver the message
    /// through `sink` at error severity. Returns the rendered message.
    pub fn report(
        discrepancies: &[Discrepancy],
        schema: &ResumeSchema,
        sink: &dyn DiagnosticsSink,
    ) -> Option<String> {
        let message = Self::render(discrepancies, schema)?;
        sink.report_error(&message);
        Some(message)
    }
}

/// Corrective-example sentence with a fenced snippet, or nothing when the
/// section declares no example.
fn example_clause(example: Option<&str>) -> String {
    match example {
        Some(snippet) => format!(
            " Make sure it is formatted like this example:\n\n```yaml\n{}\n```",
            snippet
        ),
        None => String::new(),
    }
}
