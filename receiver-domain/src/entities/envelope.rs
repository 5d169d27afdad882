// Envelope entity
// The object carried in the `payload_json` form field

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::DecodeError;
use crate::value_objects::{AccountType, NotificationKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub extra: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
    #[serde(default)]
    pub seasonal_world: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dink_account_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub embeds: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clan_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_iron_clan_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discord_user: Option<DiscordUser>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub world: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_id: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscordUser {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_hash: Option<String>,
}

impl Envelope {
    pub fn from_json(raw: &str) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_str(raw).map_err(DecodeError::InvalidJson)?;
        if !value.is_object() {
            return Err(DecodeError::NotAnObject);
        }
        match value.get("type") {
            Some(Value::String(_)) => {}
            Some(_) => return Err(DecodeError::InvalidType),
            None => return Err(DecodeError::MissingType),
        }
        serde_json::from_value(value).map_err(DecodeError::InvalidEnvelope)
    }

    pub fn notification_kind(&self) -> Option<NotificationKind> {
        NotificationKind::parse(&self.kind)
    }

    /// Display name, falling back to the account hash for anonymous senders.
    pub fn player_label(&self) -> &str {
        self.player_name
            .as_deref()
            .or(self.dink_account_hash.as_deref())
            .unwrap_or("unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOGIN_ENVELOPE: &str = r#"{
        "content": "%USERNAME% logged into World %WORLD%",
        "extra": {"world": 338},
        "type": "LOGIN",
        "playerName": "Zezima",
        "accountType": "GROUP_IRONMAN",
        "seasonalWorld": false,
        "dinkAccountHash": "abcdefghijklmnopqrstuvwxyz1234abcdefghijklmnopqrstuvwxyz",
        "clanName": "Dink QA",
        "groupIronClanName": "Dink QA",
        "discordUser": {"id": "012345678910111213", "name": "Gamer", "avatarHash": "abc123"},
        "world": 338,
        "regionId": 12850,
        "embeds": []
    }"#;

    #[test]
    fn decodes_metadata_fields() {
        let envelope = Envelope::from_json(LOGIN_ENVELOPE).expect("envelope");
        assert_eq!(envelope.kind, "LOGIN");
        assert_eq!(envelope.notification_kind(), Some(NotificationKind::Login));
        assert_eq!(envelope.account_type, Some(AccountType::GroupIronman));
        assert_eq!(envelope.world, Some(338));
        assert_eq!(envelope.region_id, Some(12850));
        assert_eq!(
            envelope.discord_user.as_ref().map(|user| user.name.as_str()),
            Some("Gamer")
        );
        assert_eq!(envelope.player_label(), "Zezima");
    }

    #[test]
    fn survives_serialize_and_reparse() {
        let envelope = Envelope::from_json(LOGIN_ENVELOPE).expect("envelope");
        let encoded = serde_json::to_string(&envelope).expect("encode");
        let reparsed = Envelope::from_json(&encoded).expect("reparse");
        assert_eq!(envelope, reparsed);
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let envelope = Envelope::from_json(r#"{"type":"LOGOUT"}"#).expect("envelope");
        assert_eq!(envelope.extra, Value::Null);
        assert!(envelope.player_name.is_none());
        assert!(!envelope.seasonal_world);
        assert_eq!(envelope.player_label(), "unknown");
    }

    #[test]
    fn rejects_malformed_inputs() {
        assert!(matches!(
            Envelope::from_json("{not json"),
            Err(DecodeError::InvalidJson(_))
        ));
        assert!(matches!(Envelope::from_json("[1,2]"), Err(DecodeError::NotAnObject)));
        assert!(matches!(
            Envelope::from_json(r#"{"extra":{}}"#),
            Err(DecodeError::MissingType)
        ));
        assert!(matches!(
            Envelope::from_json(r#"{"type":7}"#),
            Err(DecodeError::InvalidType)
        ));
    }
}
