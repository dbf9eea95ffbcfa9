//! Parsers for the JSON-shaped upstream catalogs.

use std::collections::HashSet;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use super::dto::{AvatarListResponse, AvatarRecord, CharacterIndexRecord, RecordId};
use crate::domain::entities::ResourceItem;
use crate::domain::errors::UpstreamError;

const ENKA_UI_BASE: &str = "https://enka.network/ui";
const STARRAIL_RES_BASE: &str = "https://raw.githubusercontent.com/Mar-7th/StarRailRes/master";
const DEFAULT_RARITY: u8 = 4;

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Parses the Genshin avatar list API.
///
/// # Errors
/// Returns error if the payload is not a JSON object.
pub fn parse_avatar_list(payload: &str) -> Result<Vec<ResourceItem>, UpstreamError> {
    let response: AvatarListResponse = serde_json::from_str(payload)?;

    let mut seen = HashSet::new();
    let mut items = Vec::new();

    for (key, value) in response.data.items {
        let record: AvatarRecord = match serde_json::from_value(value) {
            Ok(record) => record,
            Err(e) => {
                trace!(key = %key, error = %e, "Skipping malformed avatar record");
                continue;
            }
        };

        let Some(name) = non_empty(record.name) else {
            continue;
        };
        if !seen.insert(name.clone()) {
            continue;
        }
        let Some(icon) = non_empty(record.icon) else {
            continue;
        };

        items.push(ResourceItem {
            id: RecordId::resolve(record.id, &key),
            name,
            rarity: record.rank.unwrap_or(DEFAULT_RARITY),
            element: record.element.unwrap_or_default(),
            icon_url: format!("{ENKA_UI_BASE}/{icon}.png"),
            filename: format!("{icon}.png"),
        });
    }

    ResourceItem::sort_by_rarity(&mut items);
    debug!(count = items.len(), "Parsed avatar list");
    Ok(items)
}

/// Parses the Star Rail character index file.
///
/// # Errors
/// Returns error if the payload is not a JSON object.
pub fn parse_character_index(payload: &str) -> Result<Vec<ResourceItem>, UpstreamError> {
    let records: Map<String, Value> = serde_json::from_str(payload)?;

    let mut items = Vec::new();
    for (key, value) in records {
        let record: CharacterIndexRecord = match serde_json::from_value(value) {
            Ok(record) => record,
            Err(e) => {
                trace!(key = %key, error = %e, "Skipping malformed character record");
                continue;
            }
        };

        let (Some(name), Some(preview)) = (non_empty(record.name), non_empty(record.preview))
        else {
            continue;
        };
        let id = RecordId::resolve(record.id, &key);

        items.push(ResourceItem {
            filename: format!("sr_{id}.png"),
            id,
            name,
            rarity: record.rarity.unwrap_or(DEFAULT_RARITY),
            element: record.element.unwrap_or_default(),
            icon_url: format!("{STARRAIL_RES_BASE}/{preview}"),
        });
    }

    let mut items = ResourceItem::dedup_by_name(items);
    ResourceItem::sort_by_rarity(&mut items);
    debug!(count = items.len(), "Parsed character index");
    Ok(items)
}
