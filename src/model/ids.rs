use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Accepts either a JSON string or a JSON integer; the API is not consistent
/// about which one it emits for identifiers.
fn string_or_number<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Int(i64),
        Uint(u64),
    }

    Ok(match Raw::deserialize(de)? {
        Raw::Str(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Uint(n) => n.to_string(),
    })
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditorialId(#[serde(deserialize_with = "string_or_number")] pub String);

impl EditorialId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EditorialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EditorialId {
    fn from(s: &str) -> Self {
        EditorialId(s.to_string())
    }
}

/// External reference used by the status endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AthenaId(#[serde(deserialize_with = "string_or_number")] pub String);

impl AthenaId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AthenaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AthenaId {
    fn from(s: &str) -> Self {
        AthenaId(s.to_string())
    }
}

pub(super) fn deserialize_loose_string<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    string_or_number(de)
}
