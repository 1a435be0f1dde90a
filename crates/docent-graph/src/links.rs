//! Parse markdown content into links and explicit relationship declarations

use crate::types::ExtractedLinks;
use docent_domain::path::{has_file_extension, resolve_relative, strip_markdown_extension, MARKDOWN_EXTENSION};
use docent_domain::EdgeType;
use regex::Regex;
use std::sync::LazyLock;

static INLINE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(!?)\[[^\]]*\]\(([^)]*)\)").expect("valid regex"));

static REFERENCE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]{0,3}\[[^\]^][^\]]*\]:[ \t]*(\S+)").expect("valid regex"));

static URI_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").expect("valid regex"));

static RELATIONSHIP_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?:#{1,6}\s+)?(?:\*\*|__)?\s*(prerequisites?|prereqs?|see also|related(?:\s+(?:docs|documents|reading))?|next(?:\s+steps)?|follow[- ]?ups?|what's next)\s*(?:\*\*|__)?\s*:?\s*(?:\*\*|__)?\s*(.*)$",
    )
    .expect("valid regex")
});

static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:[-*+]|\d+[.)])\s+(.*)$").expect("valid regex"));

/// A classified link target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Raw corpus-relative target (extension stripped, not yet resolved)
    Internal(String),
    /// URL with a scheme
    External(String),
}

/// Extract links and explicit relationship edges from one document
///
/// `doc_id` is the document's own identifier, used to resolve `./` and `../`
/// references. Content inside fenced code blocks is ignored.
pub fn extract_links(doc_id: &str, content: &str) -> ExtractedLinks {
    let prose = prose_lines(content);
    let mut extracted = ExtractedLinks::default();

    for line in &prose {
        for caps in INLINE_LINK.captures_iter(line) {
            // Images are not document references
            if !caps[1].is_empty() {
                continue;
            }
            add_link(&mut extracted, classify_target(doc_id, &caps[2]));
        }
        if let Some(caps) = REFERENCE_LINK.captures(line) {
            add_link(&mut extracted, classify_target(doc_id, &caps[1]));
        }
    }

    extract_relationship_sections(doc_id, &prose, &mut extracted);
    extracted
}

fn add_link(extracted: &mut ExtractedLinks, target: Option<LinkTarget>) {
    match target {
        Some(LinkTarget::Internal(path)) => {
            extracted.links.internal.insert(path);
        }
        Some(LinkTarget::External(url)) => {
            extracted.links.external.insert(url);
        }
        None => {}
    }
}

/// Classify a raw link target found in `doc_id`
///
/// Returns `None` for empty, anchor-only and non-document targets.
pub fn classify_target(doc_id: &str, raw: &str) -> Option<LinkTarget> {
    // Drop an optional link title: [t](target "Title")
    let target = raw.split_whitespace().next()?;
    let target = target.trim_start_matches('<').trim_end_matches('>');

    if target.is_empty() || target.starts_with('#') {
        return None;
    }
    if URI_SCHEME.is_match(target) {
        return Some(LinkTarget::External(target.to_string()));
    }

    let path = target
        .split(['#', '?'])
        .next()
        .unwrap_or_default();
    if path.is_empty() {
        return None;
    }

    let is_relative = path.starts_with("./") || path.starts_with("../");
    let looks_internal = path.ends_with(MARKDOWN_EXTENSION)
        || (!has_file_extension(path) && (is_relative || path.starts_with('/') || path.contains('/')));
    if !looks_internal {
        return None;
    }

    let resolved = if is_relative {
        resolve_relative(doc_id, path)
    } else {
        path.to_string()
    };
    let normalized = strip_markdown_extension(resolved.trim_start_matches('/'))
        .trim_end_matches('/')
        .to_string();

    if normalized.is_empty() {
        None
    } else {
        Some(LinkTarget::Internal(normalized))
    }
}

/// Lines outside fenced code blocks
fn prose_lines(content: &str) -> Vec<&str> {
    let mut in_fence = false;
    content
        .lines()
        .filter(|line| {
            let trimmed = line.trim_start();
            if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
                in_fence = !in_fence;
                return false;
            }
            !in_fence
        })
        .collect()
}

/// Map a label to the edge type it declares
fn label_edge(label: &str) -> EdgeType {
    let label = label.to_lowercase();
    if label.starts_with("prereq") {
        EdgeType::Prerequisites
    } else if label.starts_with("see also") || label.starts_with("related") {
        EdgeType::SeeAlso
    } else {
        EdgeType::FollowUps
    }
}

fn extract_relationship_sections(doc_id: &str, lines: &[&str], extracted: &mut ExtractedLinks) {
    let mut i = 0;
    while i < lines.len() {
        let Some(caps) = RELATIONSHIP_LABEL.captures(lines[i]) else {
            i += 1;
            continue;
        };

        let edge = label_edge(&caps[1]);
        let rest = caps[2].trim();
        let mut j = i + 1;

        if !rest.is_empty() {
            // Only "Label: - item" continues on the same line
            let Some(item) = BULLET.captures(rest) else {
                i += 1;
                continue;
            };
            push_bullet(doc_id, edge, &item[1], extracted);
        } else {
            while j < lines.len() && lines[j].trim().is_empty() {
                j += 1;
            }
        }

        while j < lines.len() {
            let Some(item) = BULLET.captures(lines[j]) else {
                break;
            };
            push_bullet(doc_id, edge, &item[1], extracted);
            j += 1;
        }

        i = j.max(i + 1);
    }
}

fn push_bullet(doc_id: &str, edge: EdgeType, bullet: &str, extracted: &mut ExtractedLinks) {
    if let Some(target) = bullet_target(doc_id, bullet) {
        extracted.explicit.push_unique(edge, target);
    }
}

/// Raw target named by one bullet item
fn bullet_target(doc_id: &str, bullet: &str) -> Option<String> {
    if let Some(caps) = INLINE_LINK.captures(bullet) {
        return match classify_target(doc_id, &caps[2]) {
            Some(LinkTarget::Internal(path)) => Some(path),
            _ => None,
        };
    }

    let text = bullet.trim().trim_matches('`').trim();
    if text.is_empty() {
        return None;
    }
    if is_path_like(text) {
        return match classify_target(doc_id, text) {
            Some(LinkTarget::Internal(path)) => Some(path),
            _ => None,
        };
    }
    Some(text.to_string())
}

/// Plain bullet text written as a file path rather than an identifier
fn is_path_like(text: &str) -> bool {
    text.starts_with("./")
        || text.starts_with("../")
        || text.starts_with('/')
        || text.ends_with(MARKDOWN_EXTENSION)
}
