// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser};

use crate::SplitConfig;

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "wordwrap")]
#[command(
    about = "🧱 Split text into lines that fit in a byte budget, without breaking grapheme clusters"
)]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
      /* cspell:disable-next-line */
      help_template = "{about}\nVersion: {bin} {version} 💻\n\nProvide file paths, separated by spaces, to wrap their contents. Or no file paths to wrap stdin.\nUSAGE 📓:\n  wordwrap [\x1b[32mfile paths\x1b[0m] [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
  )]
pub struct CLIArg {
    #[arg(name = "file paths")]
    pub file_paths: Vec<String>,

    #[command(flatten)]
    pub split_options: SplitOption,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct SplitOption {
    #[arg(
        long,
        short = 'b',
        default_value_t = 80,
        help = "Max number of UTF-8 bytes in each line"
    )]
    pub byte_limit: usize,

    #[arg(
        long,
        short = 'c',
        help = "Print grapheme clusters that don't fit on their own line and keep going, instead of stopping with an error"
    )]
    pub continue_on_error: bool,

    #[arg(
        long,
        short = 'a',
        help = "Split grapheme clusters that don't fit at code point boundaries (this can change how they are displayed)"
    )]
    pub allow_bisection: bool,

    #[arg(long, short = 't', help = "Remove trailing whitespace from each line")]
    pub trim: bool,

    #[arg(
        long,
        short = 's',
        help = "Prefix each line with its index and status (`ok` or `oversized-cluster`)"
    )]
    pub show_status: bool,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging."
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        help = "Log app output to stderr for debugging. Can be combined with `-l`."
    )]
    pub log_to_stderr: bool,
}

impl From<&SplitOption> for SplitConfig {
    fn from(it: &SplitOption) -> Self {
        SplitConfig::new(it.byte_limit)
            .with_continue_on_error(it.continue_on_error)
            .with_allow_cluster_bisection(it.allow_bisection)
            .with_trim_trailing_whitespace(it.trim)
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_clap_config_is_valid() { CLIArg::command().debug_assert(); }

    #[test]
    fn test_parse_flags_into_split_config() {
        let cli_arg =
            CLIArg::parse_from(["wordwrap", "-b", "16", "-c", "-t", "a.txt", "b.txt"]);
        assert_eq2!(cli_arg.file_paths, vec!["a.txt", "b.txt"]);
        assert_eq2!(
            SplitConfig::from(&cli_arg.split_options),
            SplitConfig::new(16)
                .with_continue_on_error(true)
                .with_trim_trailing_whitespace(true)
        );
        assert!(!cli_arg.split_options.show_status);
        assert!(!cli_arg.global_options.enable_logging);
        assert!(!cli_arg.global_options.log_to_stderr);
    }

    #[test]
    fn test_defaults() {
        let cli_arg = CLIArg::parse_from(["wordwrap"]);
        assert!(cli_arg.file_paths.is_empty());
        assert_eq2!(SplitConfig::from(&cli_arg.split_options), SplitConfig::new(80));
    }

    #[test]
    fn test_long_flags() {
        let cli_arg = CLIArg::parse_from([
            "wordwrap",
            "--byte-limit",
            "7",
            "--allow-bisection",
            "--show-status",
            "--enable-logging",
            "--log-to-stderr",
        ]);
        assert_eq2!(cli_arg.split_options.byte_limit, 7);
        assert!(cli_arg.split_options.allow_bisection);
        assert!(cli_arg.split_options.show_status);
        assert!(cli_arg.global_options.enable_logging);
        assert!(cli_arg.global_options.log_to_stderr);
    }
}
