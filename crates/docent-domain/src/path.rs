//! Corpus-relative path helpers
//!
//! Document identifiers are `/`-delimited paths relative to the docs root,
//! e.g. `setup/README.md`. The first segment is the document's category.

/// Extension carried by canonical markdown identifiers
pub const MARKDOWN_EXTENSION: &str = ".md";

/// Category assigned to documents that sit directly under the docs root
pub const ROOT_CATEGORY: &str = "root";

/// Strip a trailing `.md` extension, if present
pub fn strip_markdown_extension(path: &str) -> &str {
    path.strip_suffix(MARKDOWN_EXTENSION).unwrap_or(path)
}

/// Append the `.md` extension unless it is already there
pub fn with_markdown_extension(path: &str) -> String {
    if path.ends_with(MARKDOWN_EXTENSION) {
        path.to_string()
    } else {
        format!("{}{}", path, MARKDOWN_EXTENSION)
    }
}

/// Category of an identifier (its first path segment)
pub fn category_of(id: &str) -> &str {
    let trimmed = id.trim_start_matches('/');
    match trimmed.split_once('/') {
        Some((first, _)) if !first.is_empty() => first,
        _ => ROOT_CATEGORY,
    }
}

/// Directory segments containing an identifier
pub fn parent_segments(id: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = id.split('/').filter(|s| !s.is_empty()).collect();
    segments.pop();
    segments
}

/// Resolve a `./` or `../` reference against the directory of `from_id`
///
/// `..` pops one segment (clamped at the root) and `.` is a no-op.
/// The result has no leading slash.
pub fn resolve_relative(from_id: &str, target: &str) -> String {
    let mut segments = parent_segments(from_id);
    for part in target.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    segments.join("/")
}

/// Whether a path segment list ends in something that looks like a file extension
pub fn has_file_extension(path: &str) -> bool {
    let last = path.rsplit('/').next().unwrap_or(path);
    match last.rsplit_once('.') {
        Some((stem, ext)) => !stem.is_empty() && !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_helpers() {
        assert_eq!(strip_markdown_extension("a/b.md"), "a/b");
        assert_eq!(strip_markdown_extension("a/b"), "a/b");
        assert_eq!(with_markdown_extension("a/b"), "a/b.md");
        assert_eq!(with_markdown_extension("a/b.md"), "a/b.md");
    }

    #[test]
    fn test_category() {
        assert_eq!(category_of("setup/README.md"), "setup");
        assert_eq!(category_of("api/v2/users.md"), "api");
        assert_eq!(category_of("README.md"), ROOT_CATEGORY);
    }

    #[test]
    fn test_resolve_relative() {
        assert_eq!(resolve_relative("guides/deploy.md", "./setup.md"), "guides/setup.md");
        assert_eq!(resolve_relative("guides/deploy.md", "../api/index.md"), "api/index.md");
        assert_eq!(resolve_relative("a/b/c.md", "../../x.md"), "x.md");
        assert_eq!(resolve_relative("top.md", "../../x.md"), "x.md");
    }

    #[test]
    fn test_has_file_extension() {
        assert!(has_file_extension("img/logo.png"));
        assert!(has_file_extension("guide.md"));
        assert!(!has_file_extension("setup/README"));
        assert!(!has_file_extension("v1.2/notes"));
    }
}
