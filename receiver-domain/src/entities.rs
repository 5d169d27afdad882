// Domain entities
pub mod archive;
pub mod config;
pub mod envelope;
pub mod extras;
pub mod item;
pub mod notification;
pub mod received;
pub mod tally;

pub use archive::*;
pub use config::*;
pub use envelope::*;
pub use extras::*;
pub use item::*;
pub use notification::*;
pub use received::*;
pub use tally::*;
