// Drop-style extras: loot, clue caskets, gambles, raid uniques, collection log, pets

use serde::{Deserialize, Serialize};

use crate::entities::item::{total_value, ItemStack};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LootExtra {
    pub items: Vec<ItemStack>,
    pub source: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kill_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarest_probability: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npc_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party: Option<Vec<String>>,
}

impl LootExtra {
    pub fn total_value(&self) -> i64 {
        total_value(&self.items)
    }

    pub fn most_valuable(&self) -> Option<&ItemStack> {
        self.items.iter().max_by_key(|item| item.total_value())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClueExtra {
    pub clue_type: String,
    pub number_completed: u32,
    #[serde(default)]
    pub items: Vec<ItemStack>,
}

impl ClueExtra {
    pub fn total_value(&self) -> i64 {
        total_value(&self.items)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarbarianAssaultGambleExtra {
    pub gamble_count: u32,
    #[serde(default)]
    pub items: Vec<ItemStack>,
}

impl BarbarianAssaultGambleExtra {
    pub fn total_value(&self) -> i64 {
        total_value(&self.items)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToaUniqueExtra {
    #[serde(default)]
    pub party: Vec<String>,
    pub reward_points: u32,
    pub raid_levels: u32,
    pub probability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionExtra {
    pub item_name: String,
    pub item_id: u32,
    #[serde(default)]
    pub price: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_entries: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_entries: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_rank: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank_progress: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logs_needed_for_next_rank: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_rank: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub just_completed_rank: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropper_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropper_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropper_kill_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetExtra {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone: Option<String>,
    #[serde(default)]
    pub duplicate: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previously_owned: Option<bool>,
}
