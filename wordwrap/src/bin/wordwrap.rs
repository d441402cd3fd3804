// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use clap::Parser;
use r3bl_wordwrap::{cli::{CLIArg, run}, ok, set_mimalloc_in_main,
                    try_initialize_logging_global};

fn main() -> miette::Result<()> {
    set_mimalloc_in_main!();

    let cli_arg = CLIArg::parse();

    let log_to_file = cli_arg.global_options.enable_logging;
    let log_to_stderr = cli_arg.global_options.log_to_stderr;
    let should_log = log_to_file || log_to_stderr;

    should_log.then(|| {
        try_initialize_logging_global(
            tracing_core::LevelFilter::DEBUG,
            log_to_file,
            log_to_stderr,
        )
        .ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    run(&cli_arg)?;

    should_log.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    ok!()
}
