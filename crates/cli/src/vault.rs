//! Filesystem corpus provider
//!
//! A vault is a directory tree of Markdown notes. Every `.md` file outside a
//! hidden directory is a document:
//! - title: the file stem
//! - source id: the vault-relative path with `/` separators
//! - aliases: front-matter `aliases` (or `alias`)
//! - tags: front-matter `tags` (or `tag`) merged with inline `#tags`

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use autolink_core::{
    AutolinkError, AutolinkResult, CorpusProvider, DocumentMetadata, DocumentRef, SourceId,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_yaml::Value;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

const NOTE_EXTENSION: &str = "md";

static FRONT_MATTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\A[\r\n]*---[ \t]*\r?\n(?s:(.*?))\r?\n---[ \t]*(?:\r?\n|\z)")
        .expect("invalid front matter regex")
});

static CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```.*?```|`[^`\n]*`").expect("invalid code regex"));

static INLINE_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|[\s(\[,;])(#[\p{L}\p{N}_/-]+)").expect("invalid inline tag regex")
});

// ============================================================================
// FsCorpus
// ============================================================================

/// Corpus provider over a directory of Markdown notes.
#[derive(Debug, Clone)]
pub struct FsCorpus {
    root: PathBuf,
}

impl FsCorpus {
    /// Open a vault rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> AutolinkResult<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(AutolinkError::corpus(format!(
                "vault '{}' is not a directory",
                root.display()
            )));
        }
        Ok(Self { root })
    }

    /// Vault directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a note by vault-relative path (with or without `.md`) or by
    /// title, ignoring case.
    pub fn find_note(&self, name: &str) -> Option<SourceId> {
        let name = name.trim().trim_start_matches("./");
        let with_ext = format!("{}.{}", name, NOTE_EXTENSION);
        let docs = self.list_documents();

        docs.iter()
            .find(|doc| doc.as_str() == name || doc.as_str() == with_ext)
            .or_else(|| {
                docs.iter()
                    .find(|doc| title_of(doc.as_str()).eq_ignore_ascii_case(name))
            })
            .map(|doc| SourceId::new(doc.as_str()))
    }
}

impl CorpusProvider for FsCorpus {
    fn list_documents(&self) -> Vec<DocumentRef> {
        let mut docs: Vec<DocumentRef> = WalkDir::new(&self.root)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(target: "autolink::vault", error = %e, "Skipping unreadable entry");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file() && is_note(entry.path()))
            .filter_map(|entry| relative_locator(&self.root, entry.path()))
            .map(DocumentRef::new)
            .collect();
        docs.sort();
        docs
    }

    fn metadata(&self, doc: &DocumentRef) -> AutolinkResult<DocumentMetadata> {
        let path = self.root.join(doc.as_str());
        let content = std::fs::read_to_string(&path).map_err(|e| {
            AutolinkError::corpus(format!("failed to read note '{}': {}", path.display(), e))
        })?;

        let mut meta = parse_note(doc.as_str(), &content);
        meta.created_at = std::fs::metadata(&path)
            .and_then(|m| m.created().or_else(|_| m.modified()))
            .ok();

        debug!(
            target: "autolink::vault",
            note = %doc,
            aliases = meta.aliases.len(),
            tags = meta.tags.len(),
            "Read note metadata"
        );
        Ok(meta)
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn is_note(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(NOTE_EXTENSION))
        .unwrap_or(false)
}

fn relative_locator(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Option<Vec<&str>> = relative.components().map(|c| c.as_os_str().to_str()).collect();
    Some(parts?.join("/"))
}

fn title_of(locator: &str) -> &str {
    let file = locator.rsplit('/').next().unwrap_or(locator);
    match file.rfind('.') {
        Some(dot) if dot > 0 => &file[..dot],
        _ => file,
    }
}

// ============================================================================
// Note parsing
// ============================================================================

/// Build metadata for a note from its locator and content.
pub fn parse_note(locator: &str, content: &str) -> DocumentMetadata {
    let (front_matter, body) = split_front_matter(locator, content);

    let aliases = front_matter
        .as_ref()
        .map(|fm| parse_aliases(fm.get("aliases").or_else(|| fm.get("alias"))))
        .unwrap_or_default();

    let mut tags = front_matter
        .as_ref()
        .map(|fm| front_matter_tags(fm.get("tags").or_else(|| fm.get("tag"))))
        .unwrap_or_default();
    tags.extend(inline_tags(body));

    DocumentMetadata::new(title_of(locator), locator)
        .with_aliases(aliases)
        .with_tags(dedupe_ignore_case(tags))
}

fn split_front_matter<'a>(locator: &str, content: &'a str) -> (Option<Value>, &'a str) {
    let Some(caps) = FRONT_MATTER.captures(content) else {
        return (None, content);
    };
    let body = &content[caps.get(0).map_or(0, |m| m.end())..];
    let yaml = caps.get(1).map_or("", |m| m.as_str());

    match serde_yaml::from_str::<Value>(yaml) {
        Ok(value @ Value::Mapping(_)) => (Some(value), body),
        Ok(_) => (None, body),
        Err(e) => {
            warn!(target: "autolink::vault", note = locator, error = %e, "Ignoring malformed front matter");
            (None, body)
        }
    }
}

/// Normalize a front-matter alias value.
///
/// A string is split on commas; a list contributes each scalar entry, with
/// numbers and booleans stringified and nulls dropped. Entries are trimmed
/// and empty ones discarded.
pub fn parse_aliases(value: Option<&Value>) -> Vec<String> {
    let raw: Vec<String> = match value {
        Some(Value::String(s)) => s.split(',').map(str::to_string).collect(),
        Some(Value::Sequence(items)) => items.iter().filter_map(scalar_to_string).collect(),
        Some(other) => scalar_to_string(other).into_iter().collect(),
        None => Vec::new(),
    };

    raw.into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn front_matter_tags(value: Option<&Value>) -> Vec<String> {
    let raw: Vec<String> = match value {
        Some(Value::String(s)) => s
            .split(|c: char| c == ',' || c.is_whitespace())
            .map(str::to_string)
            .collect(),
        Some(Value::Sequence(items)) => items.iter().filter_map(scalar_to_string).collect(),
        Some(other) => scalar_to_string(other).into_iter().collect(),
        None => Vec::new(),
    };

    raw.into_iter()
        .map(|s| s.trim().trim_start_matches('#').to_string())
        .filter(|s| !s.is_empty())
        .map(|s| format!("#{}", s))
        .collect()
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Inline `#tags` in a note body, ignoring code. Purely numeric tags such as
/// `#123` are not tags.
pub fn inline_tags(body: &str) -> Vec<String> {
    let stripped = CODE.replace_all(body, " ");
    INLINE_TAG
        .captures_iter(&stripped)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|tag| !tag[1..].chars().all(|c| c.is_ascii_digit()))
        .map(str::to_string)
        .collect()
}

fn dedupe_ignore_case(tags: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    tags.into_iter()
        .filter(|tag| seen.insert(tag.to_lowercase()))
        .collect()
}
