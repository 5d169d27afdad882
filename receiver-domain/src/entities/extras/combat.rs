// Combat extras: deaths, boss kill counts, slayer tasks, player kills

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::entities::item::{total_value, EquippedItem, ItemStack};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeathExtra {
    #[serde(default)]
    pub value_lost: i64,
    #[serde(default)]
    pub is_pvp: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub killer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub killer_npc_id: Option<u32>,
    #[serde(default)]
    pub kept_items: Vec<ItemStack>,
    #[serde(default)]
    pub lost_items: Vec<ItemStack>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<RegionLocation>,
}

impl DeathExtra {
    pub fn kept_value(&self) -> i64 {
        total_value(&self.kept_items)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionLocation {
    pub region_id: u32,
    pub plane: i32,
    #[serde(default)]
    pub instanced: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldPoint {
    pub x: i32,
    pub y: i32,
    pub plane: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KillCountExtra {
    pub boss: String,
    pub count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_personal_best: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_best: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party: Option<Vec<String>>,
}

impl KillCountExtra {
    pub fn completion_time(&self) -> Option<Duration> {
        self.time.as_deref().and_then(parse_iso_duration)
    }

    pub fn personal_best_time(&self) -> Option<Duration> {
        self.personal_best.as_deref().and_then(parse_iso_duration)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlayerExtra {
    pub slayer_task: String,
    pub slayer_completed: String,
    pub slayer_points: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kill_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monster: Option<String>,
}

impl SlayerExtra {
    /// Tasks completed; the wire value is a formatted string such as "1,024".
    pub fn completed_tasks(&self) -> Option<u32> {
        parse_grouped_number(&self.slayer_completed)
    }

    pub fn points(&self) -> Option<u32> {
        parse_grouped_number(&self.slayer_points)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerKillExtra {
    pub victim_name: String,
    pub victim_combat_level: u32,
    #[serde(default)]
    pub victim_equipment: BTreeMap<String, EquippedItem>,
    #[serde(default)]
    pub world: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<WorldPoint>,
    #[serde(default)]
    pub my_hitpoints: u32,
    #[serde(default)]
    pub my_last_damage: u32,
}

impl PlayerKillExtra {
    pub fn equipment_value(&self) -> i64 {
        self.victim_equipment
            .values()
            .fold(0i64, |acc, item| acc.saturating_add(item.price_each))
    }
}

fn parse_grouped_number(raw: &str) -> Option<u32> {
    raw.trim().replace(',', "").parse().ok()
}

/// Parses the `PT#H#M#.#S` durations the sender emits.
pub fn parse_iso_duration(raw: &str) -> Option<Duration> {
    let rest = raw.trim().strip_prefix("PT")?;
    if rest.is_empty() {
        return None;
    }
    let mut total = 0f64;
    let mut number = String::new();
    for ch in rest.chars() {
        match ch {
            '0'..='9' | '.' => number.push(ch),
            'H' | 'M' | 'S' => {
                let value: f64 = number.parse().ok()?;
                number.clear();
                total += match ch {
                    'H' => value * 3600.0,
                    'M' => value * 60.0,
                    _ => value,
                };
            }
            _ => return None,
        }
    }
    if !number.is_empty() {
        return None;
    }
    Some(Duration::from_secs_f64(total))
}
