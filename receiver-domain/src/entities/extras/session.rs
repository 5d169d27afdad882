// Session and free-form extras: login snapshot, chat, third-party plugins

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatExtra {
    #[serde(rename = "type")]
    pub message_type: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, rename = "clanTitle", skip_serializing_if = "Option::is_none")]
    pub clan_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalPluginExtra {
    pub source_plugin: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub completed: u32,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsSnapshot {
    pub total_experience: i64,
    pub total_level: u32,
    #[serde(default)]
    pub levels: BTreeMap<String, u32>,
    #[serde(default)]
    pub experience: BTreeMap<String, i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarbarianAssaultSnapshot {
    pub high_gamble_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlayerSnapshot {
    pub points: u32,
    pub streak: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedPet {
    pub item_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginExtra {
    pub world: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_log: Option<Progress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combat_achievement_points: Option<Progress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievement_diary: Option<Progress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievement_diary_tasks: Option<Progress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barbarian_assault: Option<BarbarianAssaultSnapshot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<SkillsSnapshot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quest_count: Option<Progress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quest_points: Option<Progress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slayer: Option<SlayerSnapshot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pets: Option<Vec<OwnedPet>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_type_field_is_renamed() {
        let extra: ChatExtra = serde_json::from_str(
            r#"{"type":"GAMEMESSAGE","message":"You've completed 500 clue scrolls.","source":null}"#,
        )
        .expect("chat");
        assert_eq!(extra.message_type, "GAMEMESSAGE");
        assert!(extra.source.is_none());
        let encoded = serde_json::to_value(&extra).expect("encode");
        assert_eq!(encoded["type"], "GAMEMESSAGE");
    }

    #[test]
    fn login_snapshot_sections_are_optional() {
        let extra: LoginExtra = serde_json::from_str(
            r#"{"world":338,"collectionLog":{"completed":651,"total":1477},"slayer":{"points":2204,"streak":1074}}"#,
        )
        .expect("login");
        assert_eq!(extra.collection_log, Some(Progress { completed: 651, total: 1477 }));
        assert!(extra.skills.is_none());
    }
}
