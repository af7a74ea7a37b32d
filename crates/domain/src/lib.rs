//! Domain layer for the franchise site backend.
//!
//! This crate contains:
//! - Domain models (Page, Lead, SiteConfig, AdminStats)
//! - Route resolution and SEO head computation
//! - The lead relay abstraction used by the intake pipeline

pub mod models;
pub mod services;
