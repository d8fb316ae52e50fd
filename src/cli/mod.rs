pub mod commands;
pub mod context;
pub mod logging;
pub mod output;

use std::ffi::OsString;

use clap::Parser;

/// Resolve project environment variables and secrets, then run docker-compose.
///
/// pose takes no options of its own: every argument is forwarded verbatim
/// to the downstream tool.
#[derive(Parser, Debug)]
#[command(
    name = "pose",
    version,
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Arguments for the downstream tool
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    pub args: Vec<OsString>,
}

impl Cli {
    /// Parse `argv` (program name first) keeping the forwarded arguments
    /// exactly as given.
    ///
    /// clap consumes a leading `--` as its own separator; the downstream
    /// tool must still receive it, so `args` is taken from the raw vector.
    pub fn parse_verbatim<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
        let mut cli = Self::parse_from(&argv);
        cli.args = argv.into_iter().skip(1).collect();
        cli
    }
}
