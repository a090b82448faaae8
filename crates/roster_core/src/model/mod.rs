//! Domain model for the user registry.
//!
//! # Responsibility
//! - Define the canonical `User` record and its validation rules.
//!
//! # Invariants
//! - A persisted user always carries a positive database id.
//! - First names are unique registry-wide, enforced by the repository
//!   through a pre-insert lookup rather than a schema constraint.

pub mod user;
