//! Shared library for Platelist services
//!
//! Holds the pieces every Platelist binary needs: the common error type,
//! configuration and root folder resolution, database initialization, and
//! the entity models for the review catalog.

pub mod config;
pub mod db;
pub mod error;
pub mod models;

pub use error::{Error, Result};
