//! Storage keys.
//!
//! Each collection lives under one key as a single JSON document.

pub const PAGES_KEY: &str = "jaitea_pages";
pub const LEADS_KEY: &str = "jaitea_leads";
pub const CONFIG_KEY: &str = "jaitea_config";

/// Marks a store as seeded. Bump the version suffix whenever the seed schema
/// changes so existing stores are reseeded.
pub const SEED_MARKER_KEY: &str = "jaitea_initialized_v3";
