use crate::{
    core::{console, selection::Selection},
    models::Task,
    system::executor::{self, ExecutionError},
};
use std::path::Path;

/// Tally of one run. Individual failures never stop the run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Tasks that exited successfully.
    pub succeeded: usize,
    /// Tasks that failed to launch or exited non-zero.
    pub failed: usize,
    /// Indices with no catalog entry.
    pub skipped: usize,
}

impl RunReport {
    /// Tasks that were actually launched or tried.
    pub fn attempted(&self) -> usize {
        self.succeeded + self.failed
    }

    /// True when no attempted task failed.
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// Runs every task of `selection` in order, one at a time, inside `cwd`.
///
/// An index outside the catalog is skipped with a warning. A task that fails
/// to launch or exits non-zero is reported and the next task runs.
pub fn execute_selection(catalog: &[Task], selection: &Selection, cwd: &Path) -> RunReport {
    let mut report = RunReport::default();

    for &index in selection.indices() {
        let Some(task) = catalog.get(index) else {
            console::warn(format!(t!("exec.warn.skip_invalid"), index = index + 1));
            report.skipped += 1;
            continue;
        };

        match execute_task(task, cwd) {
            Ok(()) => {
                console::success(t!("exec.ok.done"));
                report.succeeded += 1;
            }
            Err(e) => {
                console::error(format!(
                    t!("exec.error.task_failed"),
                    label = task.label,
                    error = e
                ));
                report.failed += 1;
            }
        }
    }

    log::debug!("Run finished: {:?}", report);
    report
}

fn execute_task(task: &Task, cwd: &Path) -> Result<(), ExecutionError> {
    console::step(format!(
        t!("exec.step.running"),
        command = executor::display_command(task.argv)
    ));
    executor::execute_command(task.argv, cwd)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    static MIXED: &[Task] = &[
        Task { label: "ok", argv: &["true"] },
        Task { label: "fails", argv: &["false"] },
        Task { label: "missing", argv: &["artisan-runner-no-such-program", "a", "b"] },
        Task { label: "ok again", argv: &["true"] },
    ];

    #[test]
    fn test_failures_do_not_stop_later_tasks() {
        let cwd = std::env::temp_dir();
        let report = execute_selection(MIXED, &Selection::all(MIXED.len()), &cwd);
        assert_eq!(
            report,
            RunReport {
                succeeded: 2,
                failed: 2,
                skipped: 0
            }
        );
        assert!(!report.all_succeeded());
        assert_eq!(report.attempted(), 4);
    }

    #[test]
    fn test_out_of_range_index_is_skipped() {
        let cwd = std::env::temp_dir();
        let selection = Selection::from_indices([9, 0]);
        let report = execute_selection(MIXED, &selection, &cwd);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.succeeded, 1);
    }

    #[test]
    fn test_tasks_run_in_selection_order() {
        let dir = tempfile::TempDir::new().unwrap();
        static ORDERED: &[Task] = &[
            Task { label: "first", argv: &["sh", "-c", "echo first >> log"] },
            Task { label: "second", argv: &["sh", "-c", "echo second >> log"] },
        ];
        let report = execute_selection(ORDERED, &Selection::from_indices([1, 0]), dir.path());
        assert!(report.all_succeeded());
        let log = std::fs::read_to_string(dir.path().join("log")).unwrap();
        assert_eq!(log, "second\nfirst\n");
    }
}
