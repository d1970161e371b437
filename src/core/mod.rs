//! Balance rules and progression.

pub mod balance;
pub mod progression;

pub use balance::*;
pub use progression::*;
