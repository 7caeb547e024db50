//! ArgMatches → CliAction conversion.

use std::io::Read;

use clap::ArgMatches;

/// The result of parsing the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    /// Scan a file (or stdin when `input` is "-") for keyword matches.
    Find { input: String },
    /// Look up link replacements for an index keyword.
    Suggest { keyword: String },
    /// Dump the distinct keyword set.
    Keywords,
}

/// Convert matched arguments into an action.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    match matches.subcommand() {
        Some(("find", sub)) => {
            let input = sub
                .get_one::<String>("input")
                .ok_or("find requires an input")?;
            Ok(CliAction::Find {
                input: input.clone(),
            })
        }
        Some(("suggest", sub)) => {
            let keyword = sub
                .get_one::<String>("keyword")
                .ok_or("suggest requires a keyword")?;
            Ok(CliAction::Suggest {
                keyword: keyword.clone(),
            })
        }
        Some(("keywords", _)) => Ok(CliAction::Keywords),
        Some((other, _)) => Err(format!("Unknown command: {}", other)),
        None => Err("No command given".to_string()),
    }
}

/// Read text from a file or stdin.
///
/// If `source` is "-", reads from stdin.
pub fn read_input(source: &str) -> Result<String, String> {
    if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("Failed to read stdin: {}", e))?;
        Ok(buf)
    } else {
        std::fs::read_to_string(source).map_err(|e| format!("Failed to read '{}': {}", source, e))
    }
}
