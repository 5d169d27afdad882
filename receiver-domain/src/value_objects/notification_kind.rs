// Notification kind value object
// The `type` tag of an envelope

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    Loot,
    GrandExchange,
    Death,
    Level,
    Collection,
    Slayer,
    Quest,
    Clue,
    KillCount,
    CombatAchievement,
    AchievementDiary,
    Pet,
    Speedrun,
    BarbarianAssaultGamble,
    PlayerKill,
    GroupStorage,
    Trade,
    LeaguesArea,
    LeaguesRelic,
    LeaguesTask,
    LeaguesMastery,
    Chat,
    ExternalPlugin,
    Login,
    Logout,
    XpMilestone,
    ToaUnique,
}

impl NotificationKind {
    pub const COUNT: usize = 27;

    pub const ALL: [NotificationKind; Self::COUNT] = [
        NotificationKind::Loot,
        NotificationKind::GrandExchange,
        NotificationKind::Death,
        NotificationKind::Level,
        NotificationKind::Collection,
        NotificationKind::Slayer,
        NotificationKind::Quest,
        NotificationKind::Clue,
        NotificationKind::KillCount,
        NotificationKind::CombatAchievement,
        NotificationKind::AchievementDiary,
        NotificationKind::Pet,
        NotificationKind::Speedrun,
        NotificationKind::BarbarianAssaultGamble,
        NotificationKind::PlayerKill,
        NotificationKind::GroupStorage,
        NotificationKind::Trade,
        NotificationKind::LeaguesArea,
        NotificationKind::LeaguesRelic,
        NotificationKind::LeaguesTask,
        NotificationKind::LeaguesMastery,
        NotificationKind::Chat,
        NotificationKind::ExternalPlugin,
        NotificationKind::Login,
        NotificationKind::Logout,
        NotificationKind::XpMilestone,
        NotificationKind::ToaUnique,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Loot => "LOOT",
            NotificationKind::GrandExchange => "GRAND_EXCHANGE",
            NotificationKind::Death => "DEATH",
            NotificationKind::Level => "LEVEL",
            NotificationKind::Collection => "COLLECTION",
            NotificationKind::Slayer => "SLAYER",
            NotificationKind::Quest => "QUEST",
            NotificationKind::Clue => "CLUE",
            NotificationKind::KillCount => "KILL_COUNT",
            NotificationKind::CombatAchievement => "COMBAT_ACHIEVEMENT",
            NotificationKind::AchievementDiary => "ACHIEVEMENT_DIARY",
            NotificationKind::Pet => "PET",
            NotificationKind::Speedrun => "SPEEDRUN",
            NotificationKind::BarbarianAssaultGamble => "BARBARIAN_ASSAULT_GAMBLE",
            NotificationKind::PlayerKill => "PLAYER_KILL",
            NotificationKind::GroupStorage => "GROUP_STORAGE",
            NotificationKind::Trade => "TRADE",
            NotificationKind::LeaguesArea => "LEAGUES_AREA",
            NotificationKind::LeaguesRelic => "LEAGUES_RELIC",
            NotificationKind::LeaguesTask => "LEAGUES_TASK",
            NotificationKind::LeaguesMastery => "LEAGUES_MASTERY",
            NotificationKind::Chat => "CHAT",
            NotificationKind::ExternalPlugin => "EXTERNAL_PLUGIN",
            NotificationKind::Login => "LOGIN",
            NotificationKind::Logout => "LOGOUT",
            NotificationKind::XpMilestone => "XP_MILESTONE",
            NotificationKind::ToaUnique => "TOA_UNIQUE",
        }
    }

    /// Exact, case-sensitive lookup of a wire tag.
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.as_str() == tag)
    }

    /// Position in [`NotificationKind::ALL`], stable for per-kind counters.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tag_parses_back_to_itself() {
        for (idx, kind) in NotificationKind::ALL.iter().enumerate() {
            assert_eq!(NotificationKind::parse(kind.as_str()), Some(*kind));
            assert_eq!(kind.index(), idx);
        }
    }

    #[test]
    fn serde_tag_matches_wire_tag() {
        let encoded =
            serde_json::to_string(&NotificationKind::BarbarianAssaultGamble).expect("encode");
        assert_eq!(encoded, "\"BARBARIAN_ASSAULT_GAMBLE\"");
        let encoded = serde_json::to_string(&NotificationKind::ToaUnique).expect("encode");
        assert_eq!(encoded, "\"TOA_UNIQUE\"");
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(NotificationKind::parse("loot"), None);
        assert_eq!(NotificationKind::parse("HISCORE"), None);
    }
}
