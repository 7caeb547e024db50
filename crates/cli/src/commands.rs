//! Clap command tree definition.

use clap::{Arg, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("autolink")
        .about("Find unlinked mentions of note titles, aliases and tags")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("vault")
                .long("vault")
                .help("Directory of Markdown notes to index (required)")
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Config file (default: <vault>/autolink.toml if present)")
                .global(true),
        )
        .arg(
            Arg::new("no-stemming")
                .long("no-stemming")
                .help("Match keywords literally instead of by word stem")
                .action(clap::ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(clap::ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("active")
                .long("active")
                .help("Note being edited, by title or vault-relative path; its own keywords are ignored")
                .global(true),
        )
        .subcommand(build_find())
        .subcommand(build_suggest())
        .subcommand(build_keywords())
}

fn build_find() -> Command {
    Command::new("find")
        .about("Report keyword matches in a file")
        .arg(
            Arg::new("input")
                .required(true)
                .help("File to scan, or - for stdin"),
        )
}

fn build_suggest() -> Command {
    Command::new("suggest")
        .about("List link replacements for an index keyword")
        .arg(Arg::new("keyword").required(true).help("Index keyword"))
}

fn build_keywords() -> Command {
    Command::new("keywords").about("List every distinct index keyword")
}
