//! Server application core modules.
//!
//! HTTP routing, request handlers, the favorites rule engine, database access, and
//! configuration for the Holocron backend.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
