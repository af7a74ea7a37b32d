//! HTTP route handlers.

pub mod admin;
pub mod admin_leads;
pub mod admin_pages;
pub mod admin_settings;
pub mod blog;
pub mod health;
pub mod leads;
pub mod site;
