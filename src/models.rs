// src/models.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single entry of the command catalog.
///
/// `argv` holds the program name followed by its arguments; it is never run
/// through a shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Task {
    /// The display string shown in the picker. Unique within a catalog.
    pub label: &'static str,
    /// The program followed by its arguments.
    pub argv: &'static [&'static str],
}

impl Task {
    /// Returns the program to spawn, if the argv is not empty.
    pub fn program(&self) -> Option<&'static str> {
        self.argv.first().copied()
    }

    /// Returns the arguments that follow the program.
    pub fn args(&self) -> &'static [&'static str] {
        self.argv.get(1..).unwrap_or_default()
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// The built-in catalog. Operators address entries by their 1-based position.
///
/// To add or remove a maintenance command, edit this table; nothing else needs
/// to change.
pub static CATALOG: &[Task] = &[
    Task {
        label: "php artisan optimize:clear",
        argv: &["php", "artisan", "optimize:clear"],
    },
    Task {
        label: "php artisan config:clear",
        argv: &["php", "artisan", "config:clear"],
    },
    Task {
        label: "php artisan route:clear",
        argv: &["php", "artisan", "route:clear"],
    },
    Task {
        label: "php artisan cache:clear",
        argv: &["php", "artisan", "cache:clear"],
    },
];

/// The persisted last-used selection.
///
/// `last_selections` holds 1-based catalog positions, exactly as the operator
/// would type them with `--numbers`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PreferenceRecord {
    /// 1-based catalog positions, in run order. Signed so that a stale or
    /// hand-edited entry below 1 is skipped instead of rejecting the record.
    pub last_selections: Vec<i64>,
    /// RFC 3339 timestamp of the save.
    pub saved_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_labels_are_unique() {
        let labels: HashSet<_> = CATALOG.iter().map(|t| t.label).collect();
        assert_eq!(labels.len(), CATALOG.len());
    }

    #[test]
    fn test_catalog_entries_are_program_plus_two_args() {
        for task in CATALOG {
            assert_eq!(task.program(), Some("php"));
            assert_eq!(task.args().len(), 2);
        }
    }

    #[test]
    fn test_record_json_field_names() {
        let record = PreferenceRecord {
            last_selections: vec![2, 4],
            saved_at: "2026-01-02T03:04:05+00:00".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["last_selections"], serde_json::json!([2, 4]));
        assert_eq!(json["saved_at"], "2026-01-02T03:04:05+00:00");
    }
}
