//! Shared test infrastructure for Holocron.
//!
//! Tests declare what they need with [`TestBuilder`] and receive a [`TestContext`] backed by
//! an in-memory SQLite database, with fixture helpers for inserting rows directly.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{TestBuilder, TestContext, TestError};
}
