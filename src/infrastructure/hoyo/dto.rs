//! Wire types of the upstream catalog APIs.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Envelope of the avatar list API.
#[derive(Debug, Default, Deserialize)]
pub struct AvatarListResponse {
    /// Payload wrapper.
    #[serde(default)]
    pub data: AvatarListData,
}

/// Avatar records keyed by id, in document order.
#[derive(Debug, Default, Deserialize)]
pub struct AvatarListData {
    /// Raw records; decoded one at a time so a bad record only drops itself.
    #[serde(default)]
    pub items: Map<String, Value>,
}

/// One avatar record of the avatar list API.
#[derive(Debug, Deserialize)]
pub struct AvatarRecord {
    /// Numeric or string id.
    #[serde(default)]
    pub id: Option<RecordId>,
    /// Localized name.
    #[serde(default)]
    pub name: Option<String>,
    /// Star rank.
    #[serde(default)]
    pub rank: Option<u8>,
    /// Element tag.
    #[serde(default)]
    pub element: Option<String>,
    /// Icon asset name, without extension.
    #[serde(default)]
    pub icon: Option<String>,
}

/// One character record of the Star Rail index file.
#[derive(Debug, Deserialize)]
pub struct CharacterIndexRecord {
    /// Character id.
    #[serde(default)]
    pub id: Option<RecordId>,
    /// Localized name.
    #[serde(default)]
    pub name: Option<String>,
    /// Star rarity.
    #[serde(default)]
    pub rarity: Option<u8>,
    /// Element tag.
    #[serde(default)]
    pub element: Option<String>,
    /// Repository-relative preview image path.
    #[serde(default)]
    pub preview: Option<String>,
}

/// Upstream ids come as either numbers or strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    /// Numeric id.
    Number(i64),
    /// String id.
    Text(String),
}

impl RecordId {
    /// Resolves the id, falling back to the record's map key.
    #[must_use]
    pub fn resolve(id: Option<Self>, key: &str) -> String {
        match id {
            Some(Self::Number(n)) => n.to_string(),
            Some(Self::Text(s)) if !s.is_empty() => s,
            _ => key.to_string(),
        }
    }
}
