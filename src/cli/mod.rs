use clap::Parser;

/// One handler per CLI action.
pub mod handlers;

/// artisan-runner: pick and run artisan maintenance commands for a Laravel project.
///
/// Without flags, a checkbox list is shown with the last selection pre-checked.
/// `--numbers` and `--use-last` skip the list.
#[derive(Parser, Debug, Default)]
#[command(
    author,
    version,
    about,
    styles = clap::builder::Styles::styled()
        .header(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .usage(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .literal(clap::builder::styling::AnsiColor::Cyan.on_default().bold())
        .placeholder(clap::builder::styling::AnsiColor::Green.on_default()),
)]
pub struct Cli {
    /// Path to the Laravel project (where artisan lives).
    #[arg(long, default_value = ".")]
    pub path: String,

    /// Run the last selections without prompting.
    #[arg(long)]
    pub use_last: bool,

    /// Comma-separated indices to run (1-based). Use 0 for all. Example: --numbers 1,3
    #[arg(long, value_name = "LIST")]
    pub numbers: Option<String>,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Do not remember this selection.
    #[arg(long)]
    pub no_save: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["artisan-runner"]).unwrap();
        assert_eq!(cli.path, ".");
        assert!(!cli.use_last);
        assert!(cli.numbers.is_none());
        assert!(!cli.no_color);
        assert!(!cli.no_save);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "artisan-runner",
            "--path",
            "/srv/app",
            "--use-last",
            "--numbers",
            "1,3",
            "--no-color",
            "--no-save",
        ])
        .unwrap();
        assert_eq!(cli.path, "/srv/app");
        assert!(cli.use_last);
        assert_eq!(cli.numbers.as_deref(), Some("1,3"));
        assert!(cli.no_color);
        assert!(cli.no_save);
    }

    #[test]
    fn test_clap_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
