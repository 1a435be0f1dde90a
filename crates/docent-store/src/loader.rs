//! Filesystem document source
//!
//! Walks a docs root, reads every markdown file and derives the document
//! record: title, summary, type, section headings, read time and last
//! modification time. Files are returned sorted by identifier so corpus
//! order is reproducible across runs.

use crate::config::LoaderConfig;
use crate::error::StoreError;
use crate::front_matter::{split_front_matter, string_field};
use chrono::{DateTime, NaiveDate};
use docent_domain::traits::DocumentSource;
use docent_domain::{Document, DocumentType, Metadata};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

/// Front-matter keys holding a modification date, in precedence order
const DATE_KEYS: [&str; 4] = ["last_modified", "updated", "lastUpdated", "date"];

/// Loads documents from a directory tree
#[derive(Debug, Clone)]
pub struct FsDocumentSource {
    root: PathBuf,
    config: LoaderConfig,
}

impl FsDocumentSource {
    /// Create a source for a docs root
    pub fn new(root: impl Into<PathBuf>, config: LoaderConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Docs root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Loader configuration
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    fn is_hidden(entry: &DirEntry) -> bool {
        entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
    }

    /// Document files under the root, sorted by identifier
    fn collect_files(&self) -> Result<Vec<(String, PathBuf)>, StoreError> {
        if !self.root.is_dir() {
            return Err(StoreError::DocsRootNotFound(self.root.clone()));
        }
        if let Err(source) = fs::read_dir(&self.root) {
            return Err(StoreError::Io {
                path: self.root.clone(),
                source,
            });
        }

        let skip_hidden = self.config.skip_hidden;
        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !(skip_hidden && Self::is_hidden(e)))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", self.root.display(), e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let accepted = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| self.config.accepts_extension(e));
            if !accepted {
                continue;
            }
            if let Some(id) = identifier_for(&self.root, path) {
                files.push((id, path.to_path_buf()));
            }
        }

        files.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(files)
    }

    /// Read and derive one document; `None` if the file cannot be read
    fn load_file(&self, id: String, path: &Path) -> Option<Document> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Skipping unreadable file {}: {}", path.display(), e);
                return None;
            }
        };

        let (metadata, body) = match split_front_matter(&raw) {
            Ok(parsed) => (parsed.metadata, parsed.body.to_string()),
            Err(e) => {
                warn!("Malformed front matter in {}, keeping raw text: {}", id, e);
                (Metadata::new(), raw.clone())
            }
        };

        let mtime = fs::metadata(path)
            .and_then(|m| m.modified())
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .and_then(|d| u64::try_from(d.as_millis()).ok());

        Some(derive_document(id, body, metadata, mtime, &self.config))
    }
}

impl DocumentSource for FsDocumentSource {
    type Error = StoreError;

    fn load_documents(&self) -> Result<Vec<Document>, StoreError> {
        let files = self.collect_files()?;
        let found = files.len();
        let documents: Vec<Document> = files
            .into_iter()
            .filter_map(|(id, path)| self.load_file(id, &path))
            .collect();

        info!(
            "Loaded {} documents from {} ({} skipped)",
            documents.len(),
            self.root.display(),
            found - documents.len()
        );
        Ok(documents)
    }
}

/// Corpus-relative `/`-separated identifier for a file under `root`
fn identifier_for(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    (!parts.is_empty()).then(|| parts.join("/"))
}

/// Build a document record from its identifier, body and front matter
///
/// Front-matter fields win over anything derived from the body. `mtime` is
/// the fallback modification time when no date field is declared.
pub fn derive_document(
    id: String,
    body: String,
    metadata: Metadata,
    mtime: Option<u64>,
    config: &LoaderConfig,
) -> Document {
    let title = string_field(&metadata, "title")
        .map(str::to_string)
        .or_else(|| first_heading(&body))
        .unwrap_or_else(|| file_stem(&id));

    let doc_type = ["type", "doc_type"]
        .iter()
        .find_map(|key| string_field(&metadata, key))
        .and_then(DocumentType::parse)
        .unwrap_or_else(|| infer_document_type(&id, &title));

    let summary = ["summary", "description"]
        .iter()
        .find_map(|key| string_field(&metadata, key))
        .map(str::to_string)
        .or_else(|| first_paragraph(&body))
        .map(|s| truncate_summary(&s, config.summary_chars))
        .unwrap_or_default();

    let last_modified = DATE_KEYS
        .iter()
        .find_map(|key| string_field(&metadata, key).and_then(parse_timestamp))
        .or(mtime);

    let sections = section_headings(&body);
    let read_minutes = read_minutes(&body, config.words_per_minute);

    debug!("Derived {} as {} ({} sections)", id, doc_type, sections.len());

    let mut doc = Document::new(id, title, body)
        .with_type(doc_type)
        .with_summary(summary)
        .with_metadata(metadata);
    doc.sections = sections;
    doc.read_minutes = read_minutes;
    doc.last_modified = last_modified;
    doc
}

fn file_stem(id: &str) -> String {
    let name = id.rsplit('/').next().unwrap_or(id);
    name.rsplit_once('.').map_or(name, |(stem, _)| stem).to_string()
}

/// Lines outside fenced code blocks
fn prose_lines(body: &str) -> impl Iterator<Item = &str> {
    let mut in_fence = false;
    body.lines().filter(move |line| {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
            return false;
        }
        !in_fence
    })
}

fn heading(line: &str) -> Option<(usize, &str)> {
    let trimmed = line.trim_start();
    let level = trimmed.chars().take_while(|c| *c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let text = trimmed[level..].strip_prefix(' ')?.trim().trim_end_matches('#').trim();
    (!text.is_empty()).then_some((level, text))
}

fn first_heading(body: &str) -> Option<String> {
    prose_lines(body)
        .filter_map(heading)
        .find(|(level, _)| *level == 1)
        .map(|(_, text)| text.to_string())
}

/// Second- and third-level headings, in document order
pub fn section_headings(body: &str) -> Vec<String> {
    prose_lines(body)
        .filter_map(heading)
        .filter(|(level, _)| (2..=3).contains(level))
        .map(|(_, text)| text.to_string())
        .collect()
}

/// First prose paragraph, joined onto one line
fn first_paragraph(body: &str) -> Option<String> {
    let mut paragraph: Vec<&str> = Vec::new();
    for line in prose_lines(body) {
        let trimmed = line.trim();
        if trimmed.is_empty() || heading(trimmed).is_some() {
            if paragraph.is_empty() {
                continue;
            }
            break;
        }
        paragraph.push(trimmed);
    }
    (!paragraph.is_empty()).then(|| paragraph.join(" "))
}

/// Truncate to `max_chars` characters on a word boundary, appending `...`
pub fn truncate_summary(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    let trimmed = match cut.rfind(char::is_whitespace) {
        Some(space) if space > 0 => &cut[..space],
        _ => cut.as_str(),
    };
    format!("{}...", trimmed.trim_end())
}

/// Estimated minutes to read, at least one
pub fn read_minutes(body: &str, words_per_minute: u32) -> u32 {
    let words = body.split_whitespace().count() as u32;
    words.div_ceil(words_per_minute.max(1)).max(1)
}

/// Milliseconds since the epoch for an RFC 3339 timestamp or a `YYYY-MM-DD` date
pub fn parse_timestamp(value: &str) -> Option<u64> {
    let millis = if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        dt.timestamp_millis()
    } else {
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()?
            .and_hms_opt(0, 0, 0)?
            .and_utc()
            .timestamp_millis()
    };
    u64::try_from(millis).ok()
}

/// Keyword table for type inference, checked in order
const TYPE_KEYWORDS: [(DocumentType, &[&str]); 5] = [
    (DocumentType::Rfc, &["rfc"]),
    (DocumentType::ApiDocs, &["api", "endpoint", "reference"]),
    (
        DocumentType::SetupGuide,
        &["setup", "install", "getting-started", "getting started", "quickstart", "onboarding"],
    ),
    (DocumentType::Testing, &["test"]),
    (DocumentType::Guide, &["guide", "tutorial", "how-to", "howto", "walkthrough"]),
];

/// Document type from the path and title when none is declared
///
/// The file name and title are consulted first; the directory only decides
/// when they name nothing, so `setup/guide.md` is a guide.
pub fn infer_document_type(id: &str, title: &str) -> DocumentType {
    let (directory, file) = id.rsplit_once('/').unwrap_or(("", id));
    let own = format!("{} {}", file_stem(file), title).to_lowercase();
    let directory = directory.to_lowercase();

    keyword_type(&own)
        .or_else(|| keyword_type(&directory))
        .unwrap_or(DocumentType::Documentation)
}

fn keyword_type(text: &str) -> Option<DocumentType> {
    TYPE_KEYWORDS
        .iter()
        .find(|(_, terms)| terms.iter().any(|term| text.contains(term)))
        .map(|(doc_type, _)| *doc_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(id: &str, body: &str, metadata: Metadata) -> Document {
        derive_document(id.to_string(), body.to_string(), metadata, None, &LoaderConfig::default())
    }

    #[test]
    fn test_title_precedence() {
        let mut metadata = Metadata::new();
        metadata.insert("title".to_string(), serde_json::json!("From front matter"));
        assert_eq!(derive("a/x.md", "# Heading", metadata).title, "From front matter");
        assert_eq!(derive("a/x.md", "intro\n# Heading\n", Metadata::new()).title, "Heading");
        assert_eq!(derive("a/file-name.md", "no headings", Metadata::new()).title, "file-name");
    }

    #[test]
    fn test_heading_in_code_fence_ignored() {
        let body = "```\n# not a title\n## nor a section\n```\n## Real";
        let doc = derive("a/x.md", body, Metadata::new());
        assert_eq!(doc.title, "x");
        assert_eq!(doc.sections, vec!["Real"]);
    }

    #[test]
    fn test_sections_and_summary() {
        let body = "# Deploy\n\nShip the service\nto production.\n\nMore text.\n\n## Steps\n### Rollback ###\n#### Too deep\n";
        let doc = derive("ops/deploy.md", body, Metadata::new());
        assert_eq!(doc.sections, vec!["Steps", "Rollback"]);
        assert_eq!(doc.summary, "Ship the service to production.");
    }

    #[test]
    fn test_declared_type_and_inference() {
        let mut metadata = Metadata::new();
        metadata.insert("type".to_string(), serde_json::json!("testing"));
        assert_eq!(derive("a/x.md", "", metadata).doc_type, DocumentType::Testing);

        assert_eq!(infer_document_type("api/users.md", "Users"), DocumentType::ApiDocs);
        assert_eq!(infer_document_type("setup/README.md", "Welcome"), DocumentType::SetupGuide);
        assert_eq!(infer_document_type("x/y.md", "Getting Started"), DocumentType::SetupGuide);
        assert_eq!(infer_document_type("qa/plan.md", "Test plan"), DocumentType::Testing);
        assert_eq!(infer_document_type("guides/deploy.md", "Deploy"), DocumentType::Guide);
        assert_eq!(infer_document_type("rfcs/0001.md", "Proposal"), DocumentType::Rfc);
        assert_eq!(infer_document_type("misc/notes.md", "Notes"), DocumentType::Documentation);
    }

    #[test]
    fn test_unknown_declared_type_falls_back() {
        let mut metadata = Metadata::new();
        metadata.insert("type".to_string(), serde_json::json!("poem"));
        assert_eq!(derive("guides/x.md", "", metadata).doc_type, DocumentType::Guide);
    }

    #[test]
    fn test_read_minutes() {
        assert_eq!(read_minutes("", 200), 1);
        assert_eq!(read_minutes(&"word ".repeat(200), 200), 1);
        assert_eq!(read_minutes(&"word ".repeat(201), 200), 2);
    }

    #[test]
    fn test_truncate_summary() {
        assert_eq!(truncate_summary("short", 10), "short");
        assert_eq!(truncate_summary("one two three four", 9), "one two...");
        assert_eq!(truncate_summary("ééééé", 3), "ééé...");
    }

    #[test]
    fn test_parse_timestamp() {
        assert_eq!(parse_timestamp("1970-01-02"), Some(86_400_000));
        assert_eq!(parse_timestamp("1970-01-01T00:00:01Z"), Some(1_000));
        assert_eq!(parse_timestamp("1970-01-01T01:00:00+01:00"), Some(0));
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp("1960-01-01"), None);
    }

    #[test]
    fn test_front_matter_date_beats_mtime() {
        let mut metadata = Metadata::new();
        metadata.insert("updated".to_string(), serde_json::json!("1970-01-02"));
        let doc = derive_document("a.md".to_string(), String::new(), metadata, Some(5), &LoaderConfig::default());
        assert_eq!(doc.last_modified, Some(86_400_000));

        let doc = derive_document("a.md".to_string(), String::new(), Metadata::new(), Some(5), &LoaderConfig::default());
        assert_eq!(doc.last_modified, Some(5));
    }

    #[test]
    fn test_identifier_for() {
        let root = Path::new("/docs");
        assert_eq!(identifier_for(root, Path::new("/docs/setup/README.md")), Some("setup/README.md".to_string()));
        assert_eq!(identifier_for(root, Path::new("/docs/top.md")), Some("top.md".to_string()));
        assert_eq!(identifier_for(root, Path::new("/elsewhere/x.md")), None);
    }
}
