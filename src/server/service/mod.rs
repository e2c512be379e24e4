//! Service layer for business logic.
//!
//! Services wrap repositories with the rules of each resource: natural key uniqueness for
//! users, planets, and characters, and the pairing rules for favorites. Every operation that
//! checks before it writes runs inside a single transaction opened for that call, so a request
//! never shares a unit of work with another.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;

use sea_orm::DbErr;

use crate::server::{data::is_unique_violation, error::Error};

/// Maps a failed insert onto `conflict` when the database rejected it for a unique index
///
/// Any other database error is passed through unchanged.
pub fn unique_violation_or(err: DbErr, conflict: impl Into<Error>) -> Error {
    if is_unique_violation(&err) {
        conflict.into()
    } else {
        Error::from(err)
    }
}
