// Write-side use cases

pub mod intake_commands;

pub use intake_commands::*;
