// Account type value object

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AccountType {
    Normal,
    Ironman,
    HardcoreIronman,
    UltimateIronman,
    GroupIronman,
    HardcoreGroupIronman,
    UnrankedGroupIronman,
    Other(String),
}

impl AccountType {
    pub fn as_str(&self) -> &str {
        match self {
            AccountType::Normal => "NORMAL",
            AccountType::Ironman => "IRONMAN",
            AccountType::HardcoreIronman => "HARDCORE_IRONMAN",
            AccountType::UltimateIronman => "ULTIMATE_IRONMAN",
            AccountType::GroupIronman => "GROUP_IRONMAN",
            AccountType::HardcoreGroupIronman => "HARDCORE_GROUP_IRONMAN",
            AccountType::UnrankedGroupIronman => "UNRANKED_GROUP_IRONMAN",
            AccountType::Other(raw) => raw,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(
            self,
            AccountType::GroupIronman
                | AccountType::HardcoreGroupIronman
                | AccountType::UnrankedGroupIronman
        )
    }
}

impl From<&str> for AccountType {
    fn from(s: &str) -> Self {
        match s {
            "NORMAL" => AccountType::Normal,
            "IRONMAN" => AccountType::Ironman,
            "HARDCORE_IRONMAN" => AccountType::HardcoreIronman,
            "ULTIMATE_IRONMAN" => AccountType::UltimateIronman,
            "GROUP_IRONMAN" => AccountType::GroupIronman,
            "HARDCORE_GROUP_IRONMAN" => AccountType::HardcoreGroupIronman,
            "UNRANKED_GROUP_IRONMAN" => AccountType::UnrankedGroupIronman,
            other => AccountType::Other(other.to_string()),
        }
    }
}

impl From<String> for AccountType {
    fn from(s: String) -> Self {
        AccountType::from(s.as_str())
    }
}

impl From<AccountType> for String {
    fn from(value: AccountType) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values_map_to_variants() {
        assert_eq!(AccountType::from("GROUP_IRONMAN"), AccountType::GroupIronman);
        assert!(AccountType::from("HARDCORE_GROUP_IRONMAN").is_group());
        assert!(!AccountType::Ironman.is_group());
    }

    #[test]
    fn unknown_values_are_preserved() {
        let parsed: AccountType = serde_json::from_str("\"SEASONAL_DEADMAN\"").expect("parse");
        assert_eq!(parsed, AccountType::Other("SEASONAL_DEADMAN".to_string()));
        assert_eq!(
            serde_json::to_string(&parsed).expect("serialize"),
            "\"SEASONAL_DEADMAN\""
        );
    }
}
