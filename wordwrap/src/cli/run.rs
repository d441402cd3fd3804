// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{BufWriter, Read, Write};

use miette::{IntoDiagnostic, WrapErr};

use super::CLIArg;
use crate::{OutputLine, SplitConfig, ok, split_with_config};

/// Read the input (files in order, or stdin when there are none), then write the wrapped
/// lines to stdout.
///
/// # Errors
///
/// - A file or stdin can't be read, or stdout can't be written to.
/// - An oversized grapheme cluster is found and `--continue-on-error` is not set. Lines
///   before it have been written by then.
pub fn run(cli_arg: &CLIArg) -> miette::Result<()> {
    let input = read_input(&cli_arg.file_paths)?;
    let config = SplitConfig::from(&cli_arg.split_options);

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = write_lines(&input, config, cli_arg.split_options.show_status, &mut out);
    out.flush().into_diagnostic()?;
    result
}

/// Concatenate the contents of `file_paths`, or read all of stdin if it is empty. A file
/// that doesn't end in `'\n'` gets one before the next file's content, so the last word of
/// one file never runs into the first word of the next.
///
/// # Errors
///
/// Returns an error if any file (or stdin) can't be read, or isn't valid `UTF-8`.
pub fn read_input(file_paths: &[String]) -> miette::Result<String> {
    if file_paths.is_empty() {
        let mut acc = String::new();
        std::io::stdin()
            .read_to_string(&mut acc)
            .into_diagnostic()
            .wrap_err("Could not read from stdin")?;
        return ok!(acc);
    }

    let mut acc = String::new();
    for file_path in file_paths {
        let content = std::fs::read_to_string(file_path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Could not read file: {file_path}"))?;
        if !content.is_empty() && !acc.is_empty() && !acc.ends_with('\n') {
            acc.push('\n');
        }
        acc.push_str(&content);
    }
    ok!(acc)
}

/// Split `input` and write each line followed by `'\n'` to `out`. Lines are written as
/// they are produced.
///
/// # Errors
///
/// Returns the diagnostic for the first oversized cluster when
/// [`SplitConfig::continue_on_error`] is not set, or an IO error.
pub fn write_lines(
    input: &str,
    config: SplitConfig,
    show_status: bool,
    out: &mut impl Write,
) -> miette::Result<()> {
    for line in split_with_config(input, config) {
        if let Some(error) = line.error() {
            // % is Display, ? is Debug.
            tracing::warn!(
                message = "line does not fit",
                index = %line.index,
                byte_range = ?line.byte_range
            );
            if !config.continue_on_error {
                return Err(miette::Report::new(error));
            }
        }
        write_line(&line, show_status, out)?;
    }
    ok!()
}

fn write_line(
    line: &OutputLine<'_>,
    show_status: bool,
    out: &mut impl Write,
) -> miette::Result<()> {
    let result = if show_status {
        let status = line.status.to_string();
        writeln!(out, "{:>4} {status:<17} {}", line.index, line.content)
    } else {
        writeln!(out, "{}", line.content)
    };
    result.into_diagnostic()
}
