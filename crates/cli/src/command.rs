//! Argument parsing.

use crate::PROGRAM_NAME;
use crate::error::CliError;
use clap::{Arg, ArgAction, Command, builder::OsStringValueParser};
use std::ffi::OsString;

/// Options recognised on the command line.
#[derive(Debug, Default, Eq, PartialEq)]
pub(crate) struct ParsedArgs {
    pub(crate) show_help: bool,
    pub(crate) show_version: bool,
    pub(crate) goroot: Option<OsString>,
    pub(crate) gopath: Option<OsString>,
    pub(crate) follow_symlinks: bool,
    pub(crate) verbose: u8,
    pub(crate) quiet: bool,
    pub(crate) packages: Vec<String>,
}

fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("goroot")
                .long("goroot")
                .value_name("DIR")
                .value_parser(OsStringValueParser::new())
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("gopath")
                .long("gopath")
                .value_name("LIST")
                .value_parser(OsStringValueParser::new())
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("no-follow-symlinks")
                .long("no-follow-symlinks")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("packages")
                .value_name("PACKAGE")
                .num_args(0..)
                .action(ArgAction::Append),
        )
}

pub(crate) fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    let mut matches = clap_command().try_get_matches_from(arguments)?;

    Ok(ParsedArgs {
        show_help: matches.get_flag("help"),
        show_version: matches.get_flag("version"),
        goroot: matches.remove_one::<OsString>("goroot"),
        gopath: matches.remove_one::<OsString>("gopath"),
        follow_symlinks: !matches.get_flag("no-follow-symlinks"),
        verbose: matches.get_count("verbose"),
        quiet: matches.get_flag("quiet"),
        packages: matches
            .remove_many::<String>("packages")
            .map(|values| values.collect())
            .unwrap_or_default(),
    })
}
