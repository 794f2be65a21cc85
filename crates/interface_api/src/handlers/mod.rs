//! Request handlers

pub mod claims;
pub mod covers;
pub mod health;
