// Read-side use cases

pub mod notification_queries;
pub mod ops_queries;
pub mod tally_queries;

pub use notification_queries::*;
pub use ops_queries::*;
pub use tally_queries::*;
