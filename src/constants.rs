// src/constants.rs

/// The file name of the preference record inside the platform config directory.
pub const PREFERENCE_FILENAME: &str = "artisan-runner.json";

/// The dotfile used in the home directory when no config directory can be resolved.
pub const PREFERENCE_DOTFILE: &str = ".artisan-runner.json";

/// The file expected at the root of the target project.
pub const ENTRY_MARKER_FILENAME: &str = "artisan";

/// The synthetic picker option that expands to every catalog entry.
pub const RUN_ALL_LABEL: &str = "[Run ALL]";

/// The token that expands a numeric selection to the whole catalog.
pub const RUN_ALL_TOKEN: &str = "0";
