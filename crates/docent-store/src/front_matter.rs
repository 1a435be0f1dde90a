//! YAML front matter splitting

use docent_domain::Metadata;

const DELIMITER: &str = "---";

/// A document split into declared metadata and body
#[derive(Debug, Clone, PartialEq)]
pub struct FrontMatter<'a> {
    /// Parsed front-matter fields
    pub metadata: Metadata,
    /// Markdown after the closing delimiter
    pub body: &'a str,
}

/// Split `raw` into front matter and body
///
/// Text without an opening `---` line, or without a closing one, has no front
/// matter and is returned whole. A block that is present but is not a YAML
/// mapping is an error; the caller decides how to recover.
pub fn split_front_matter(raw: &str) -> Result<FrontMatter<'_>, serde_yaml::Error> {
    let text = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let Some((yaml, body)) = delimited_block(text) else {
        return Ok(FrontMatter {
            metadata: Metadata::new(),
            body: text,
        });
    };

    let metadata = if yaml.trim().is_empty() {
        Metadata::new()
    } else {
        serde_yaml::from_str::<Metadata>(yaml)?
    };
    Ok(FrontMatter { metadata, body })
}

/// The YAML between the delimiters and the remaining body
fn delimited_block(text: &str) -> Option<(&str, &str)> {
    let first_end = text.find('\n')?;
    if text[..first_end].trim_end() != DELIMITER {
        return None;
    }

    let rest = &text[first_end + 1..];
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Some((yaml, body));
        }
        offset += line.len();
    }
    None
}

/// String value of a front-matter field
pub fn string_field<'m>(metadata: &'m Metadata, key: &str) -> Option<&'m str> {
    metadata
        .get(key)
        .and_then(|value| value.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
