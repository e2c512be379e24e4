//! Fixture helpers for inserting rows directly, bypassing repositories and services.
//!
//! - `user` - User accounts
//! - `catalog` - Planets and characters
//! - `favorite` - Favorites rows, including shapes the API never produces

pub mod catalog;
pub mod favorite;
pub mod user;
