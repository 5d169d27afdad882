// Account progression extras

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelExtra {
    pub levelled_skills: BTreeMap<String, u32>,
    #[serde(default)]
    pub all_skills: BTreeMap<String, u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combat_level: Option<CombatLevel>,
}

impl LevelExtra {
    pub fn total_level(&self) -> u32 {
        self.all_skills.values().sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatLevel {
    pub value: u32,
    pub increased: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XpMilestoneExtra {
    #[serde(default)]
    pub xp_data: BTreeMap<String, i64>,
    pub milestone_achieved: Vec<String>,
    pub interval: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestExtra {
    pub quest_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_quests: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_quests: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quest_points: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_quest_points: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatAchievementExtra {
    pub tier: String,
    pub task: String,
    pub task_points: u32,
    pub total_points: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier_progress: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier_total_points: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_possible_points: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_tier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_tier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub just_completed_tier: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementDiaryExtra {
    pub area: String,
    pub difficulty: String,
    pub total: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks_completed: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks_total: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_tasks_completed: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_tasks_total: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeedrunExtra {
    pub quest_name: String,
    pub personal_best: String,
    pub current_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_personal_best: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_extra_reads_skill_maps() {
        let extra: LevelExtra = serde_json::from_str(
            r#"{"levelledSkills":{"Attack":30},"allSkills":{"Attack":30,"Strength":20,"Defence":10},"combatLevel":{"value":25,"increased":true}}"#,
        )
        .expect("level");
        assert_eq!(extra.levelled_skills.get("Attack"), Some(&30));
        assert_eq!(extra.total_level(), 60);
        assert_eq!(extra.combat_level.map(|level| level.increased), Some(true));
    }

    #[test]
    fn combat_achievement_optional_progress() {
        let extra: CombatAchievementExtra = serde_json::from_str(
            r#"{"tier":"HARD","task":"Whack-a-Mole","taskPoints":3,"totalPoints":331,"tierProgress":131,"tierTotalPoints":335,"currentTier":"MEDIUM","nextTier":"HARD"}"#,
        )
        .expect("combat achievement");
        assert_eq!(extra.task_points, 3);
        assert!(extra.just_completed_tier.is_none());
    }
}
