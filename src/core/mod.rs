// src/core/mod.rs

/// Symbol-prefixed operator messages.
pub mod console;
/// Preference file and project path resolution.
pub mod paths;
/// Checkbox picker and numeric fallback prompt.
pub mod picker;
/// The persisted last selection.
pub mod preferences;
/// Numeric selection parsing and the `Selection` type.
pub mod selection;
/// Runs a selection against the catalog.
pub mod task_executor;
