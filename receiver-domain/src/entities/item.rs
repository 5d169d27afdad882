// Item stack entity
// Shared by every notification that carries items

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemStack {
    pub id: u32,
    pub quantity: i64,
    pub price_each: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criteria: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<f64>,
}

impl ItemStack {
    pub fn total_value(&self) -> i64 {
        self.quantity.saturating_mul(self.price_each)
    }
}

/// An equipped item; player-kill notifications omit the quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquippedItem {
    pub id: u32,
    pub price_each: i64,
    pub name: String,
}

pub fn total_value(items: &[ItemStack]) -> i64 {
    items
        .iter()
        .fold(0i64, |acc, item| acc.saturating_add(item.total_value()))
}
