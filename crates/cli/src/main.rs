//! Autolink CLI: report unlinked mentions of notes in a Markdown vault.
//!
//! `autolink --vault <dir> [--config <file>] [--no-stemming] [--json] [--active <note>] COMMAND`
//!
//! Commands:
//! - `find <file|->`: matches in a document, `start..end  original -> keyword`
//! - `suggest <keyword>`: link replacements for an index keyword
//! - `keywords`: the distinct keyword set
//!
//! Logging goes to stderr, filtered by `AUTOLINK_LOG` (default `warn`).

mod commands;
mod format;
mod parse;
mod vault;

use std::path::{Path, PathBuf};
use std::process;

use autolink_core::{AutolinkConfig, AutolinkError, AutolinkResult, CONFIG_FILE_NAME};
use autolink_engine::Session;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{
    format_error, format_keywords, format_matches, format_message, format_suggestions, OutputMode,
};
use parse::{matches_to_action, read_input, CliAction};
use vault::FsCorpus;

const LOG_ENV: &str = "AUTOLINK_LOG";

fn main() {
    let cli = build_cli();
    let matches = cli.get_matches();

    init_logging();

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let action = match matches_to_action(&matches) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("{}", format_message(&e, output_mode));
            process::exit(1);
        }
    };

    let session = match open_session(&matches) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("{}", format_error(&e, output_mode));
            process::exit(1);
        }
    };

    let exit_code = run(&session, action, output_mode);
    process::exit(exit_code);
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_session(matches: &clap::ArgMatches) -> AutolinkResult<Session<FsCorpus>> {
    let root = matches
        .get_one::<String>("vault")
        .map(PathBuf::from)
        .ok_or_else(|| AutolinkError::config("--vault is required"))?;
    let corpus = FsCorpus::open(root)?;

    let mut config = load_config(
        corpus.root(),
        matches.get_one::<String>("config").map(Path::new),
    )?;
    if matches.get_flag("no-stemming") {
        config.enable_stemming = false;
    }

    let active = match matches.get_one::<String>("active") {
        Some(name) => Some(corpus.find_note(name).ok_or_else(|| {
            AutolinkError::corpus(format!("no note named '{}' in the vault", name))
        })?),
        None => None,
    };

    let mut session = Session::new(corpus, config)?;
    session.set_active_document(active)?;
    Ok(session)
}

fn load_config(root: &Path, explicit: Option<&Path>) -> AutolinkResult<AutolinkConfig> {
    if let Some(path) = explicit {
        return AutolinkConfig::from_file(path);
    }

    let default_path = root.join(CONFIG_FILE_NAME);
    if default_path.is_file() {
        debug!(target: "autolink::cli", path = %default_path.display(), "Loading vault config");
        AutolinkConfig::from_file(&default_path)
    } else {
        Ok(AutolinkConfig::default())
    }
}

fn run(session: &Session<FsCorpus>, action: CliAction, mode: OutputMode) -> i32 {
    match action {
        CliAction::Find { input } => match read_input(&input) {
            Ok(text) => {
                println!("{}", format_matches(&session.find(&text), mode));
                0
            }
            Err(e) => {
                eprintln!("{}", format_message(&e, mode));
                1
            }
        },
        CliAction::Suggest { keyword } => {
            println!("{}", format_suggestions(&suggestions_for(session, &keyword), mode));
            0
        }
        CliAction::Keywords => {
            let engine = session.engine();
            println!("{}", format_keywords(engine.keywords(), mode));
            0
        }
    }
}

/// Link replacements for a keyword typed on the command line, normalized
/// the same way index keywords are.
fn suggestions_for(session: &Session<FsCorpus>, keyword: &str) -> Vec<String> {
    let keyword = session.indexer().extractor().normalize(keyword);
    session.suggestions(&keyword)
}
