pub mod types;
pub mod clans;
pub mod setup;

mod tests;

pub use types::*;
