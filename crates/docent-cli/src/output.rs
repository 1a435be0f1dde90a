//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use colored::*;
use docent_domain::{Document, DocumentSummary, EdgeType};
use docent_search::{OutdatedDocument, RelatedDocuments, ScoredDocument};
use serde_json::{json, Value};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format ranked search results.
    pub fn format_search(&self, results: &[ScoredDocument<'_>]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let hits: Vec<Value> = results
                    .iter()
                    .map(|hit| {
                        let mut value = document_json(hit.document, false);
                        value["score"] = json!(hit.score);
                        value
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&hits)?)
            }
            OutputFormat::Quiet => Ok(join_ids(results.iter().map(|hit| hit.document.id.as_str()))),
            OutputFormat::Table => {
                if results.is_empty() {
                    return Ok(self.colorize("No documents found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Score", "Document", "Title", "Type", "Read", "Updated"]);
                for hit in results {
                    let doc = hit.document;
                    builder.push_record([
                        hit.score.to_string(),
                        doc.id.clone(),
                        doc.title.clone(),
                        doc.doc_type.to_string(),
                        format!("{} min", doc.read_minutes),
                        format_date(doc.last_modified),
                    ]);
                }
                Ok(render_table(builder))
            }
        }
    }

    /// Format one document, optionally with its related documents.
    pub fn format_document(&self, doc: &Document, related: Option<&RelatedDocuments>) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let mut value = document_json(doc, true);
                if let Some(related) = related.filter(|r| !r.is_empty()) {
                    value["related"] = related_json(related);
                }
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => Ok(doc.id.clone()),
            OutputFormat::Table => {
                let mut out = String::new();
                out.push_str(&self.colorize(&doc.title, "cyan"));
                out.push('\n');
                out.push_str(&format!(
                    "{} | {} | {} | {} min | updated {}\n",
                    doc.id,
                    doc.category,
                    doc.doc_type,
                    doc.read_minutes,
                    format_date(doc.last_modified)
                ));
                if !doc.summary.is_empty() {
                    out.push_str(&format!("\n{}\n", doc.summary));
                }
                if !doc.sections.is_empty() {
                    out.push_str(&format!("\nSections: {}\n", doc.sections.join(", ")));
                }
                for edge in EdgeType::ALL {
                    let ids = doc.relationships.get(edge);
                    if !ids.is_empty() {
                        out.push_str(&format!("{}: {}\n", edge_label(edge), ids.join(", ")));
                    }
                }
                if let Some(related) = related.filter(|r| !r.is_empty()) {
                    out.push('\n');
                    out.push_str(&self.related_table(related));
                    out.push('\n');
                }
                out.push('\n');
                out.push_str(doc.content.trim_end());
                Ok(out)
            }
        }
    }

    /// Format the related documents of `doc`.
    pub fn format_related(&self, doc: &Document, related: &RelatedDocuments) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "id": doc.id,
                "count": related.len(),
                "related": related_json(related),
            }))?),
            OutputFormat::Quiet => Ok(join_ids(
                related
                    .groups
                    .iter()
                    .flat_map(|group| group.documents.iter().map(|d| d.id.as_str())),
            )),
            OutputFormat::Table => {
                if related.is_empty() {
                    return Ok(self.colorize(&format!("No related documents for {}.", doc.id), "yellow"));
                }
                Ok(self.related_table(related))
            }
        }
    }

    /// Format categories with their document counts.
    pub fn format_categories(&self, categories: &[(String, usize)]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<Value> = categories
                    .iter()
                    .map(|(name, count)| json!({ "name": name, "documents": count }))
                    .collect();
                Ok(serde_json::to_string_pretty(&rows)?)
            }
            OutputFormat::Quiet => Ok(join_ids(categories.iter().map(|(name, _)| name.as_str()))),
            OutputFormat::Table => {
                if categories.is_empty() {
                    return Ok(self.colorize("No documents loaded.", "yellow"));
                }
                let mut builder = Builder::default();
                builder.push_record(["Category", "Documents"]);
                for (name, count) in categories {
                    builder.push_record([name.clone(), count.to_string()]);
                }
                Ok(render_table(builder))
            }
        }
    }

    /// Format outdated documents with their reasons.
    pub fn format_outdated(&self, outdated: &[OutdatedDocument<'_>]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<Value> = outdated
                    .iter()
                    .map(|entry| {
                        json!({
                            "id": entry.document.id,
                            "title": entry.document.title,
                            "last_modified": entry.document.last_modified.and_then(rfc3339),
                            "reasons": entry.report.reasons.iter().map(ToString::to_string).collect::<Vec<_>>(),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&rows)?)
            }
            OutputFormat::Quiet => Ok(join_ids(outdated.iter().map(|entry| entry.document.id.as_str()))),
            OutputFormat::Table => {
                if outdated.is_empty() {
                    return Ok(self.success("No outdated documents."));
                }
                let mut builder = Builder::default();
                builder.push_record(["Document", "Updated", "Reasons"]);
                for entry in outdated {
                    let reasons: Vec<String> = entry.report.reasons.iter().map(ToString::to_string).collect();
                    builder.push_record([
                        entry.document.id.clone(),
                        format_date(entry.document.last_modified),
                        reasons.join("\n"),
                    ]);
                }
                Ok(render_table(builder))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn related_table(&self, related: &RelatedDocuments) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Relationship", "Document", "Title", "Type"]);
        for group in &related.groups {
            for doc in &group.documents {
                builder.push_record([
                    edge_label(group.edge).to_string(),
                    doc.id.clone(),
                    doc.title.clone(),
                    doc.doc_type.to_string(),
                ]);
            }
        }
        render_table(builder)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().bold().to_string(),
            _ => text.to_string(),
        }
    }
}

fn render_table(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn join_ids<'a>(ids: impl Iterator<Item = &'a str>) -> String {
    ids.collect::<Vec<_>>().join("\n")
}

fn edge_label(edge: EdgeType) -> &'static str {
    match edge {
        EdgeType::Prerequisites => "Prerequisites",
        EdgeType::FollowUps => "Next steps",
        EdgeType::SeeAlso => "See also",
        EdgeType::Dependents => "Referenced by",
    }
}

fn document_json(doc: &Document, include_content: bool) -> Value {
    let mut value = json!({
        "id": doc.id,
        "title": doc.title,
        "category": doc.category,
        "type": doc.doc_type.as_str(),
        "summary": doc.summary,
        "sections": doc.sections,
        "read_minutes": doc.read_minutes,
        "last_modified": doc.last_modified.and_then(rfc3339),
        "metadata": doc.metadata,
        "relationships": {
            "prerequisites": doc.relationships.prerequisites,
            "follow_ups": doc.relationships.follow_ups,
            "see_also": doc.relationships.see_also,
            "dependents": doc.relationships.dependents,
        },
        "links": {
            "internal": doc.links.internal,
            "external": doc.links.external,
        },
    });
    if include_content {
        value["content"] = json!(doc.content);
    }
    value
}

fn summary_json(doc: &DocumentSummary) -> Value {
    json!({
        "id": doc.id,
        "title": doc.title,
        "summary": doc.summary,
        "type": doc.doc_type.as_str(),
        "read_minutes": doc.read_minutes,
        "category": doc.category,
    })
}

fn related_json(related: &RelatedDocuments) -> Value {
    let mut groups = serde_json::Map::new();
    for group in &related.groups {
        let docs: Vec<Value> = group.documents.iter().map(summary_json).collect();
        groups.insert(group.edge.as_str().to_string(), Value::Array(docs));
    }
    Value::Object(groups)
}

fn rfc3339(millis: u64) -> Option<String> {
    let millis = i64::try_from(millis).ok()?;
    DateTime::<Utc>::from_timestamp_millis(millis).map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
}

/// Calendar date of a timestamp, or `-` when unknown
pub fn format_date(millis: Option<u64>) -> String {
    millis
        .and_then(|m| i64::try_from(m).ok())
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use docent_domain::DocumentType;
    use docent_search::RelatedGroup;

    fn create_test_document() -> Document {
        let mut doc = Document::new("setup/README.md", "Getting Started", "# Welcome\n\nInstall the tools.\n")
            .with_type(DocumentType::SetupGuide)
            .with_summary("Install the tools.")
            .with_last_modified(1_709_251_200_000);
        doc.relationships.follow_ups.push("setup/guide".to_string());
        doc
    }

    fn related_to_guide() -> RelatedDocuments {
        let guide = Document::new("setup/guide.md", "Guide", "").with_type(DocumentType::Guide);
        RelatedDocuments {
            groups: vec![RelatedGroup {
                edge: EdgeType::FollowUps,
                documents: vec![guide.summary_view()],
            }],
        }
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let doc = create_test_document();
        let output = formatter.format_document(&doc, Some(&related_to_guide())).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["type"], "setup-guide");
        assert_eq!(value["last_modified"], "2024-03-01T00:00:00Z");
        assert_eq!(value["relationships"]["follow_ups"][0], "setup/guide");
        assert_eq!(value["related"]["follow_ups"][0]["id"], "setup/guide.md");
        assert!(value["content"].as_str().unwrap().contains("Install"));
    }

    #[test]
    fn test_json_omits_empty_related() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter
            .format_document(&create_test_document(), Some(&RelatedDocuments::default()))
            .unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert!(value.get("related").is_none());
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let doc = create_test_document();
        let output = formatter.format_related(&doc, &related_to_guide()).unwrap();
        assert_eq!(output, "setup/guide.md");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let doc = create_test_document();
        let hits = [ScoredDocument {
            document: &doc,
            score: 175,
        }];
        let output = formatter.format_search(&hits).unwrap();
        assert!(output.contains("Score"));
        assert!(output.contains("setup/README.md"));
        assert!(output.contains("2024-03-01"));
    }

    #[test]
    fn test_empty_results() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_search(&[]).unwrap();
        assert!(output.contains("No documents found"));
    }

    #[test]
    fn test_document_table_lists_edges() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_document(&create_test_document(), None).unwrap();
        assert!(output.starts_with("Getting Started"));
        assert!(output.contains("Next steps: setup/guide"));
        assert!(output.ends_with("Install the tools."));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some(1_709_251_200_000)), "2024-03-01");
        assert_eq!(format_date(None), "-");
    }
}
