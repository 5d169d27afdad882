// Grand Exchange offer state

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GrandExchangeStatus {
    Empty,
    CancelledBuy,
    CancelledSell,
    Buying,
    Bought,
    Selling,
    Sold,
    #[serde(other)]
    Unknown,
}

impl GrandExchangeStatus {
    pub fn is_sell(&self) -> bool {
        matches!(
            self,
            GrandExchangeStatus::Selling
                | GrandExchangeStatus::Sold
                | GrandExchangeStatus::CancelledSell
        )
    }

    pub fn is_buy(&self) -> bool {
        matches!(
            self,
            GrandExchangeStatus::Buying
                | GrandExchangeStatus::Bought
                | GrandExchangeStatus::CancelledBuy
        )
    }
}
