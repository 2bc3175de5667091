//! Data models for the People screen.
//!
//! These models match the portal's JSON wire contract exactly.

mod person;

pub use person::*;
