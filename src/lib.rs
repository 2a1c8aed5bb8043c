//! # artisan-runner
//!
//! Presents a fixed catalog of artisan maintenance commands, lets the operator
//! pick some or all of them, remembers the pick, and runs the chosen commands
//! one after another inside the project directory.

include!(concat!(env!("OUT_DIR"), "/translations.rs"));

/// Command-line arguments and the launcher's action.
pub mod cli;
/// File names and fixed labels.
pub mod constants;
/// Selection, preferences, picker, console output and the run loop.
pub mod core;
/// The task catalog and the preference record.
pub mod models;
/// Process spawning.
pub mod system;
