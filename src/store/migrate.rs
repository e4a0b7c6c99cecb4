//! Upgrades of stored action records.
//!
//! Early libraries stored actions as plain `{ id, name, color }` records
//! without a `type` tag. They load as simple actions with adaptive fonts.

use crate::action::{ActionButton, FontColor, SimpleAction};
use crate::constants::DEFAULT_FONT_SIZE;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Deserialize)]
struct LegacyAction {
    id: String,
    name: String,
    color: String,
}

impl From<LegacyAction> for SimpleAction {
    fn from(legacy: LegacyAction) -> Self {
        Self {
            id: legacy.id,
            name: legacy.name,
            color: legacy.color,
            is_font_adaptive: true,
            font_size: Some(DEFAULT_FONT_SIZE),
            font_color: FontColor::White,
        }
    }
}

/// Records carrying a `type` key must parse as current buttons; only
/// untyped records take the legacy path.
pub(crate) fn deserialize_actions<'de, D>(deserializer: D) -> Result<Vec<ActionButton>, D::Error>
where
    D: Deserializer<'de>,
{
    let records = Vec::<Value>::deserialize(deserializer)?;
    records
        .into_iter()
        .map(|record| {
            if record.get("type").is_some() {
                return ActionButton::deserialize(record).map_err(D::Error::custom);
            }
            let legacy = LegacyAction::deserialize(record).map_err(D::Error::custom)?;
            tracing::debug!(id = %legacy.id, "migrating untyped action record");
            Ok(ActionButton::Simple(legacy.into()))
        })
        .collect()
}
