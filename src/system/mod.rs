//! # System Interaction Layer
//!
//! The boundary between the launcher and the operating system.
//!
//! - **`executor`**: spawns one command with inherited standard streams in a
//!   given working directory and waits for it, with a `cmd /C` fallback for
//!   Windows shims.

/// Spawns a single command and waits for it.
pub mod executor;
