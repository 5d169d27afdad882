// Notification handlers wired into the dispatcher

pub mod archive_handler;
pub mod relay_handler;
pub mod tally_handler;

pub use archive_handler::ArchiveHandler;
pub use relay_handler::RelayHandler;
pub use tally_handler::{TallyBook, TallyHandler};
