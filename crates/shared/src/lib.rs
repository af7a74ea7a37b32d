//! Shared utilities for the franchise site backend.
//!
//! This crate provides functionality used across the other crates:
//! - Admin password hashing with Argon2id
//! - Admin session tokens (HS256 JWT)
//! - Common validation logic

pub mod password;
pub mod session;
pub mod validation;
