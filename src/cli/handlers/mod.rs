// src/cli/handlers/mod.rs

// Logic for each CLI action. The launcher has a single action.

/// Resolves, remembers and runs a selection.
pub mod run;
