//! Row-by-row bulk processing for CSV-driven operations.
//!
//! A bulk operation applies the same action (one directory-tool invocation)
//! to every row of a parsed file: first field is the identifier, second is
//! an optional modifier such as a group role. Rows are processed strictly in
//! order and no single outcome aborts the batch; the caller gets back final
//! counts plus an ordered diagnostic per row.
//!
//! Header skipping is deliberately NOT assumed: a first row like
//! `email,role` is handed to validation like any other row (and fails it,
//! since `email` contains no `@`). Callers that know their file has a header
//! slice it off before calling [`process`].

use rowboat::Row;

/// How rows are validated before the action runs.
pub struct BulkSpec {
    /// Rows with fewer fields than this are skipped as invalid.
    pub min_fields: usize,
    /// Modifier used when the second field is missing or empty.
    pub default_modifier: String,
    /// Identifier validity predicate.
    pub validator: fn(&str) -> bool,
}

fn looks_like_email(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.contains('@')
}

impl Default for BulkSpec {
    fn default() -> Self {
        Self {
            min_fields: 1,
            default_modifier: "member".to_string(),
            validator: looks_like_email,
        }
    }
}

impl BulkSpec {
    pub fn with_default_modifier(modifier: impl Into<String>) -> Self {
        Self {
            default_modifier: modifier.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStatus {
    Succeeded,
    Failed,
}

/// One per-row diagnostic, in original row order. Row numbers are 1-based.
#[derive(Debug, Clone)]
pub struct RowDiagnostic {
    pub row: usize,
    pub status: RowStatus,
    pub message: String,
}

/// Final accounting for one bulk invocation.
#[derive(Debug, Default)]
pub struct BulkReport {
    pub succeeded: usize,
    pub failed: usize,
    pub diagnostics: Vec<RowDiagnostic>,
}

impl BulkReport {
    fn success(&mut self, row: usize, message: String) {
        self.succeeded += 1;
        self.diagnostics.push(RowDiagnostic {
            row,
            status: RowStatus::Succeeded,
            message,
        });
    }

    fn failure(&mut self, row: usize, message: String) {
        self.failed += 1;
        self.diagnostics.push(RowDiagnostic {
            row,
            status: RowStatus::Failed,
            message,
        });
    }
}

/// Run `action` once per valid row, accumulating counts and diagnostics.
///
/// Invalid rows (too few fields, or an identifier the spec's validator
/// rejects) are counted as failed without invoking the action. Action
/// failures are recorded with the action's own error text and processing
/// continues with the next row.
pub fn process<F>(rows: &[Row], spec: &BulkSpec, mut action: F) -> BulkReport
where
    F: FnMut(&str, &str) -> std::result::Result<String, String>,
{
    let mut report = BulkReport::default();

    for (i, row) in rows.iter().enumerate() {
        let row_num = i + 1;

        if row.len() < spec.min_fields {
            report.failure(
                row_num,
                format!(
                    "skipped: invalid row {} (expected at least {} fields)",
                    row_num, spec.min_fields
                ),
            );
            continue;
        }

        let identifier = row.first().map(String::as_str).unwrap_or("");
        if !(spec.validator)(identifier) {
            report.failure(
                row_num,
                format!("skipped: invalid identifier on row {}: {}", row_num, identifier),
            );
            continue;
        }

        let modifier = row
            .get(1)
            .map(String::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or(&spec.default_modifier);

        match action(identifier, modifier) {
            Ok(message) => report.success(row_num, message),
            Err(message) => report.failure(row_num, message),
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(raw: &[&[&str]]) -> Vec<Row> {
        raw.iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn invalid_rows_never_invoke_the_action() {
        let rows = rows(&[&["no-at-sign"], &[], &["ok@x.com", "manager"]]);
        let spec = BulkSpec::default();

        let mut calls = 0;
        let report = process(&rows, &spec, |id, modifier| {
            calls += 1;
            assert_eq!(id, "ok@x.com");
            assert_eq!(modifier, "manager");
            Ok("added".to_string())
        });

        assert_eq!(calls, 1);
        assert_eq!(report.succeeded, 1);
        assert_eq!(report.failed, 2);
        assert!(report.diagnostics[0].message.contains("skipped"));
    }

    #[test]
    fn min_fields_is_enforced_before_the_action() {
        let rows = rows(&[&["a@x.com"], &["b@x.com", "manager"]]);
        let spec = BulkSpec {
            min_fields: 2,
            ..BulkSpec::default()
        };

        let mut calls = 0;
        let report = process(&rows, &spec, |_, _| {
            calls += 1;
            Ok("ok".to_string())
        });

        assert_eq!(calls, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(report.diagnostics[0].row, 1);
    }

    #[test]
    fn missing_or_empty_modifier_takes_the_default() {
        let rows = rows(&[&["a@x.com"], &["b@x.com", ""]]);
        let spec = BulkSpec::with_default_modifier("member");

        let mut seen = Vec::new();
        process(&rows, &spec, |id, modifier| {
            seen.push((id.to_string(), modifier.to_string()));
            Ok(String::new())
        });

        assert_eq!(seen[0].1, "member");
        assert_eq!(seen[1].1, "member");
    }

    #[test]
    fn mixed_outcomes_keep_counts_and_order() {
        let rows = rows(&[
            &["a@x.com"],
            &["b@x.com"],
            &["c@x.com"],
            &["d@x.com"],
            &["e@x.com"],
        ]);
        let spec = BulkSpec::default();

        let mut i = 0;
        let report = process(&rows, &spec, |id, _| {
            let outcome = if i % 2 == 0 {
                Ok(format!("added {}", id))
            } else {
                Err(format!("tool rejected {}", id))
            };
            i += 1;
            outcome
        });

        assert_eq!(report.succeeded, 3);
        assert_eq!(report.failed, 2);
        let order: Vec<usize> = report.diagnostics.iter().map(|d| d.row).collect();
        assert_eq!(order, vec![1, 2, 3, 4, 5]);
        assert_eq!(report.diagnostics[1].status, RowStatus::Failed);
        assert!(report.diagnostics[1].message.contains("b@x.com"));
    }

    #[test]
    fn header_row_is_just_another_row() {
        // No header skipping: `email,role` fails validity like any bad row.
        let table = rowboat::Table::parse("email,role\na@x.com,member\nbad-row\nb@x.com,manager\n");
        let spec = BulkSpec::default();

        let report = process(table.rows(), &spec, |_, _| Ok("added".to_string()));

        assert_eq!(report.succeeded, 2);
        assert_eq!(report.failed, 2);
    }

    #[test]
    fn action_error_text_becomes_the_diagnostic() {
        let rows = rows(&[&["a@x.com", "member"]]);
        let report = process(&rows, &BulkSpec::default(), |_, _| {
            Err("Group not found".to_string())
        });

        assert_eq!(report.failed, 1);
        assert_eq!(report.diagnostics[0].message, "Group not found");
    }
}
