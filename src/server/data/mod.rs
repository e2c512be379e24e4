//! Data access layer repositories.
//!
//! One repository per table. Repositories are generic over [`sea_orm::ConnectionTrait`] so
//! services can run them against the pooled connection or inside a transaction. Lookups
//! report absence as `Ok(None)` and deletes report how many rows they touched, a missing
//! row is never an error at this layer.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;

use sea_orm::{DbErr, SqlErr};

/// Whether the database rejected a write because of a unique index
///
/// Services treat this as the authoritative duplicate signal, their lookups beforehand only
/// exit early for the common case.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
