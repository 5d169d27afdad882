// Per-type `extra` payloads
pub mod combat;
pub mod economy;
pub mod leagues;
pub mod loot;
pub mod progression;
pub mod session;

pub use combat::*;
pub use economy::*;
pub use leagues::*;
pub use loot::*;
pub use progression::*;
pub use session::*;
