use serde::{Deserialize, Deserializer};

use crate::error::{DeskError, DeskResult};

const FENCE: &str = "---";

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct FrontMatter {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "tag_list")]
    pub tags: Vec<String>,
}

/// `tags: [a, b]`, `tags: "a, b"` and a missing/null key are all accepted.
fn tag_list<'de, D>(de: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        List(Vec<String>),
        One(String),
    }

    Ok(match Option::<Raw>::deserialize(de)? {
        Some(Raw::List(v)) => v,
        Some(Raw::One(s)) => s
            .split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect(),
        None => Vec::new(),
    })
}

/// Splits a leading `---` YAML block from the body. Text without an opening
/// fence is all body.
pub fn split_front_matter(raw: &str) -> DeskResult<(FrontMatter, &str)> {
    let text = raw.strip_prefix('\u{feff}').unwrap_or(raw);

    let Some(rest) = strip_fence_line(text) else {
        return Ok((FrontMatter::default(), text));
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FENCE {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            let meta = if yaml.trim().is_empty() {
                FrontMatter::default()
            } else {
                serde_yaml::from_str(yaml).map_err(|err| DeskError::parse("front matter", err))?
            };
            return Ok((meta, body.trim_start_matches(['\r', '\n'])));
        }
        offset += line.len();
    }

    Err(DeskError::parse("front matter", "missing closing `---`"))
}

fn strip_fence_line(text: &str) -> Option<&str> {
    let rest = text.strip_prefix(FENCE)?;
    if let Some(r) = rest.strip_prefix("\r\n") {
        return Some(r);
    }
    rest.strip_prefix('\n')
}

#[cfg(test)]
#[path = "../tests/document/front_matter_tests.rs"]
mod tests;
