use crate::{
    cli::Cli,
    constants::ENTRY_MARKER_FILENAME,
    core::{
        console,
        paths::{self, PathError},
        picker,
        preferences::{PreferenceError, PreferenceStore, SavePolicy},
        selection::{self, Selection},
        task_executor,
    },
    models::{CATALOG, Task},
};
use anyhow::{Context, Result, bail};
use std::path::Path;

/// Where this run's selection comes from. The first applicable source wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionSource {
    /// `--numbers` was given with a non-empty value.
    Numbers(String),
    /// `--use-last` was given.
    LastSaved,
    /// Neither; ask the operator.
    Interactive,
}

impl SelectionSource {
    /// Picks the source implied by the flags.
    pub fn from_cli(cli: &Cli) -> Self {
        match cli.numbers.as_deref() {
            Some(raw) if !raw.is_empty() => Self::Numbers(raw.to_string()),
            _ if cli.use_last => Self::LastSaved,
            _ => Self::Interactive,
        }
    }
}

///
/// Main entry point: resolves the project, the selection, remembers it and
/// runs it.
///
pub fn handle(cli: Cli) -> Result<()> {
    console::set_colors(!cli.no_color);

    // 1. Resolve and announce the project root.
    let project_root = paths::resolve_project_path(&cli.path)
        .with_context(|| format!(t!("run.error.resolve_path"), path = cli.path))?;
    console::info(format!(
        t!("run.info.project_path"),
        path = project_root.display()
    ));

    // 2. The marker is only a hint; PHP may still find artisan elsewhere.
    if !check_marker(&project_root) {
        console::warn(format!(
            t!("run.warn.marker_missing"),
            marker = ENTRY_MARKER_FILENAME
        ));
    }

    // 3. Determine the selection.
    let store = match PreferenceStore::open_default() {
        Ok(store) => Some(store),
        Err(e) => {
            log::debug!("No preference store available: {}", e);
            None
        }
    };
    let source = SelectionSource::from_cli(&cli);
    log::debug!("Selection source: {:?}", source);
    let selection = resolve_selection(&source, CATALOG, store.as_ref())?;

    // 4. Remember it.
    persist_selection(
        SavePolicy::from_no_save(cli.no_save),
        store.as_ref(),
        &selection,
    );

    // 5. Run it.
    console::success(t!("run.ok.executing"));
    let report = task_executor::execute_selection(CATALOG, &selection, &project_root);
    if !report.all_succeeded() {
        console::warn(format!(
            t!("run.warn.failures"),
            failed = report.failed,
            total = report.attempted()
        ));
    }
    console::success(t!("run.ok.finished"));
    Ok(())
}

/// True when the project's `artisan` entry file exists under `project_root`.
pub fn check_marker(project_root: &Path) -> bool {
    project_root.join(ENTRY_MARKER_FILENAME).exists()
}

/// Produces the non-empty selection for this run from the given source.
pub fn resolve_selection(
    source: &SelectionSource,
    catalog: &[Task],
    store: Option<&PreferenceStore>,
) -> Result<Selection> {
    let selection = match source {
        SelectionSource::Numbers(raw) => selection::parse_numbers(raw, catalog.len())?,
        SelectionSource::LastSaved => load_last_selection(store)?,
        SelectionSource::Interactive => {
            let last = store.and_then(|s| s.load().ok());
            picker::pick(catalog, last.as_deref())?
        }
    };

    if selection.is_empty() {
        bail!(t!("run.error.no_selection"));
    }
    Ok(selection)
}

fn load_last_selection(store: Option<&PreferenceStore>) -> Result<Selection> {
    let store = store
        .ok_or(PathError::NoConfigLocation)
        .context(t!("run.error.load_last"))?;

    let positions = match store.load() {
        Ok(positions) if !positions.is_empty() => positions,
        Ok(_) | Err(PreferenceError::NotFound(_)) => bail!(t!("run.error.no_last")),
        Err(e) => return Err(e).context(t!("run.error.load_last")),
    };

    let (selection, rejected) = Selection::from_positions(&positions);
    for position in rejected {
        console::warn(format!(t!("exec.warn.skip_invalid"), index = position));
    }
    Ok(selection)
}

/// Applies the save policy. A failed write is shown as a warning and never
/// aborts the run. Returns whether the record was written.
pub fn persist_selection(
    policy: SavePolicy,
    store: Option<&PreferenceStore>,
    selection: &Selection,
) -> bool {
    if policy == SavePolicy::Skip {
        log::debug!("Not saving this selection (--no-save).");
        return false;
    }

    let result = store
        .ok_or(PreferenceError::Path(PathError::NoConfigLocation))
        .and_then(|s| s.save(&selection.positions()));
    match result {
        Ok(()) => {
            if let Some(store) = store {
                log::debug!("Selection remembered in '{}'", store.path().display());
            }
            true
        }
        Err(e) => {
            console::warn(format!(t!("run.warn.save_failed"), error = e));
            false
        }
    }
}
