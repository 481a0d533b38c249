//! Repository layer: typed CRUD over the store
//!
//! Single source of truth for persistence semantics. Reads return `Option`
//! for missing targets (never an error), deletes report whether a row was
//! actually removed, and create/update accept only pre-validated input.

pub mod contact;
pub mod lists;
pub mod pages;
pub mod reviews;
pub mod social;
pub mod taxonomies;
