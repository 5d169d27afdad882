pub mod auth;
pub mod multipart;

pub use auth::*;
pub use multipart::*;
