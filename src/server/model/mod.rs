//! Server-side domain types.
//!
//! `app` holds the shared router state, `db` aliases the sea-orm models, and `favorite`
//! describes favorite targets along with the policies that govern how favorites are matched
//! and what happens to them when their target is deleted.

pub mod app;
pub mod db;
pub mod favorite;
