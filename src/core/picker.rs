// src/core/picker.rs

use crate::{
    constants::RUN_ALL_LABEL,
    core::{
        console,
        selection::{self, Selection, SelectionError},
    },
    models::Task,
};
use dialoguer::{
    MultiSelect,
    theme::{ColorfulTheme, SimpleTheme, Theme},
};
use log::debug;
use std::io::{self, BufRead, IsTerminal, Write};
use thiserror::Error;

/// Errors raised while asking the operator for a selection.
#[derive(Error, Debug)]
pub enum PickerError {
    /// The checkbox list could not be drawn or was interrupted.
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
    /// The numeric fallback could not read or write the terminal.
    #[error("Could not read the selection: {0}")]
    Input(#[from] io::Error),
    /// The numeric fallback received an invalid list.
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

/// The picker options: the run-all option first, then every catalog label.
pub fn option_labels(catalog: &[Task]) -> Vec<&'static str> {
    std::iter::once(RUN_ALL_LABEL)
        .chain(catalog.iter().map(|t| t.label))
        .collect()
}

/// Which options start checked, given the previously saved positions.
///
/// A previous selection covering the whole catalog checks only the run-all
/// option. Otherwise each saved position that still exists checks its task;
/// positions that no longer exist are ignored.
pub fn default_checks(catalog: &[Task], last: Option<&[i64]>) -> Vec<bool> {
    let options = option_labels(catalog);
    let Some(last) = last.filter(|l| !l.is_empty()) else {
        return vec![false; options.len()];
    };

    let (previous, _) = Selection::from_positions(last);
    let checked: Vec<&str> = if previous.covers_all(catalog.len()) {
        vec![RUN_ALL_LABEL]
    } else {
        previous
            .indices()
            .iter()
            .filter_map(|&i| catalog.get(i).map(|t| t.label))
            .collect()
    };

    options.iter().map(|o| checked.contains(o)).collect()
}

/// Maps the picked option labels back to a selection.
///
/// The run-all option wins over anything picked alongside it. Labels that are
/// not in the catalog are dropped.
pub fn translate_picks(catalog: &[Task], picks: &[&str]) -> Selection {
    if picks.contains(&RUN_ALL_LABEL) {
        return Selection::all(catalog.len());
    }
    Selection::from_indices(
        picks
            .iter()
            .filter_map(|p| catalog.iter().position(|t| t.label == *p)),
    )
}

/// Asks the operator for a selection.
///
/// Draws a checkbox list when stdin is a terminal. Otherwise reads a single
/// line of comma-separated numbers from stdin.
pub fn pick(catalog: &[Task], last: Option<&[i64]>) -> Result<Selection, PickerError> {
    if io::stdin().is_terminal() {
        prompt_checkboxes(catalog, last)
    } else {
        debug!("stdin is not a terminal, falling back to the numeric prompt");
        prompt_numeric(catalog, &mut io::stdin().lock(), &mut io::stdout())
    }
}

/// Shows the checkbox list until at least one option is checked.
pub fn prompt_checkboxes(catalog: &[Task], last: Option<&[i64]>) -> Result<Selection, PickerError> {
    let options = option_labels(catalog);
    let checks = default_checks(catalog, last);
    let theme: Box<dyn Theme> = if console::colors_enabled() {
        Box::new(ColorfulTheme::default())
    } else {
        Box::new(SimpleTheme)
    };

    loop {
        let chosen = MultiSelect::with_theme(theme.as_ref())
            .with_prompt(t!("picker.prompt"))
            .items(&options)
            .defaults(&checks)
            .interact()?;

        let picks: Vec<&str> = chosen
            .iter()
            .filter_map(|&i| options.get(i).copied())
            .collect();
        if picks.is_empty() {
            console::warn(t!("picker.warn.empty"));
            continue;
        }
        debug!("Picked: {:?}", picks);
        return Ok(translate_picks(catalog, &picks));
    }
}

/// Prints the numbered catalog and parses one line of input.
///
/// A blank line yields an empty selection; the caller decides what that means.
pub fn prompt_numeric<R: BufRead, W: Write>(
    catalog: &[Task],
    input: &mut R,
    output: &mut W,
) -> Result<Selection, PickerError> {
    writeln!(output, "  0) {}", RUN_ALL_LABEL)?;
    for (i, task) in catalog.iter().enumerate() {
        writeln!(output, "  {}) {}", i + 1, task.label)?;
    }
    write!(output, "{}", t!("picker.numeric.prompt"))?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(selection::parse_numbers(line.trim(), catalog.len())?)
}
