//! Brand and navigation constants shared by every public view.

use serde::Serialize;

pub const BRAND_NAME: &str = "JAITEA";

/// A top-level navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAVIGATION_LINKS: [NavigationLink; 6] = [
    NavigationLink { label: "Home", href: "/" },
    NavigationLink { label: "About", href: "/about" },
    NavigationLink { label: "Services", href: "/services" },
    NavigationLink { label: "Franchise", href: "/franchise" },
    NavigationLink { label: "Blog", href: "/blog" },
    NavigationLink { label: "Contact", href: "/contact" },
];

/// Selling points listed on the franchise page.
pub const FRANCHISE_BENEFITS: [&str; 6] = [
    "Proven Business Model",
    "Low Investment (Starts @ 5 Lakhs)",
    "Complete Staff Training",
    "Marketing & Branding Support",
    "No Chef Required (Standard Recipes)",
    "High Profit Margins (40-50%)",
];
