// Player tally entity
// Running totals per player, fed by every known notification

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::notification::Notification;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerTally {
    pub player_name: String,
    pub notifications: u64,
    pub by_kind: BTreeMap<String, u64>,
    pub loot_value: i64,
    pub grand_exchange_proceeds: i64,
    pub grand_exchange_spend: i64,
    pub deaths: u64,
    pub value_lost: i64,
    pub levels_gained: u64,
    pub last_seen: i64,
}

impl PlayerTally {
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            ..Self::default()
        }
    }

    pub fn record(&mut self, notification: &Notification, at: i64) {
        self.notifications += 1;
        *self.by_kind.entry(notification.tag().to_string()).or_insert(0) += 1;
        self.last_seen = self.last_seen.max(at);

        match notification {
            Notification::Loot(extra) => {
                self.loot_value = self.loot_value.saturating_add(extra.total_value());
            }
            Notification::Clue(extra) => {
                self.loot_value = self.loot_value.saturating_add(extra.total_value());
            }
            Notification::BarbarianAssaultGamble(extra) => {
                self.loot_value = self.loot_value.saturating_add(extra.total_value());
            }
            Notification::GrandExchange(extra) => {
                if let Some(proceeds) = extra.net_proceeds() {
                    self.grand_exchange_proceeds =
                        self.grand_exchange_proceeds.saturating_add(proceeds);
                }
                if let Some(spend) = extra.spend() {
                    self.grand_exchange_spend = self.grand_exchange_spend.saturating_add(spend);
                }
            }
            Notification::Death(extra) => {
                self.deaths += 1;
                self.value_lost = self.value_lost.saturating_add(extra.value_lost);
            }
            Notification::Level(extra) => {
                self.levels_gained += extra.levelled_skills.len() as u64;
            }
            _ => {}
        }
    }
}
