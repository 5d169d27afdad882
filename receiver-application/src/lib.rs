// Receiver Application Layer

pub mod commands;
pub mod dedup;
pub mod dispatch;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod queries;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use error::AppError;
pub use metrics::Metrics;
pub use state::AppState;
