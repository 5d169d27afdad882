// Extras that move wealth between players or the exchange

use serde::{Deserialize, Serialize};

use crate::entities::item::{total_value, ItemStack};
use crate::value_objects::GrandExchangeStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrandExchangeExtra {
    pub slot: u8,
    pub status: GrandExchangeStatus,
    pub item: ItemStack,
    #[serde(default)]
    pub market_price: i64,
    #[serde(default)]
    pub target_price: i64,
    #[serde(default)]
    pub target_quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_tax: Option<i64>,
}

impl GrandExchangeExtra {
    /// Coins received for the filled part of a sell offer, after tax.
    pub fn net_proceeds(&self) -> Option<i64> {
        if !self.status.is_sell() {
            return None;
        }
        let tax = self.seller_tax.unwrap_or(0);
        Some(self.item.total_value().saturating_sub(tax))
    }

    /// Coins paid for the filled part of a buy offer.
    pub fn spend(&self) -> Option<i64> {
        if !self.status.is_buy() {
            return None;
        }
        Some(self.item.total_value())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeExtra {
    pub counterparty: String,
    #[serde(default)]
    pub received_items: Vec<ItemStack>,
    #[serde(default)]
    pub given_items: Vec<ItemStack>,
    #[serde(default)]
    pub received_value: i64,
    #[serde(default)]
    pub given_value: i64,
}

impl TradeExtra {
    pub fn net_value(&self) -> i64 {
        self.received_value.saturating_sub(self.given_value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupStorageExtra {
    pub group_name: String,
    #[serde(default)]
    pub deposits: Vec<ItemStack>,
    #[serde(default)]
    pub withdrawals: Vec<ItemStack>,
    #[serde(default)]
    pub net_value: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_purchase: Option<bool>,
}

impl GroupStorageExtra {
    pub fn deposited_value(&self) -> i64 {
        total_value(&self.deposits)
    }

    pub fn withdrawn_value(&self) -> i64 {
        total_value(&self.withdrawals)
    }
}
