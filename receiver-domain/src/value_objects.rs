// Domain value objects
pub mod account_type;
pub mod exchange_status;
pub mod notification_kind;

pub use account_type::*;
pub use exchange_status::*;
pub use notification_kind::*;
