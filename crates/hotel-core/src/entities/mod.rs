//! Domain entities - core business objects

mod guest;

pub use guest::Guest;
