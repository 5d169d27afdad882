// Seasonal league extras

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaguesAreaExtra {
    pub area: String,
    pub index: u32,
    pub tasks_completed: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks_until_next_area: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaguesRelicExtra {
    pub relic: String,
    pub tier: u32,
    pub required_points: u32,
    pub total_points: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_until_next_tier: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaguesTaskExtra {
    pub task_name: String,
    pub difficulty: String,
    pub task_points: u32,
    pub total_points: u32,
    pub tasks_completed: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_until_next_relic: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_until_next_trophy: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earned_trophy: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaguesMasteryExtra {
    pub mastery_type: String,
    pub mastery_tier: u32,
}
