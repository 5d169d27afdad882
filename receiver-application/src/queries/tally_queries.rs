use receiver_domain::PlayerTally;

use crate::handlers::tally_handler::tally_key;
use crate::{AppError, AppState};

pub async fn get_player_tally(state: &AppState, player: &str) -> Result<PlayerTally, AppError> {
    let tallies = state.tallies.read().await;
    tallies
        .get(&tally_key(player))
        .cloned()
        .ok_or(AppError::NotFound)
}

/// Every known player, most recently seen first.
pub async fn list_player_tallies(state: &AppState) -> Vec<PlayerTally> {
    let tallies = state.tallies.read().await;
    let mut out: Vec<PlayerTally> = tallies.values().cloned().collect();
    out.sort_by(|a, b| {
        b.last_seen
            .cmp(&a.last_seen)
            .then_with(|| a.player_name.cmp(&b.player_name))
    });
    out
}
