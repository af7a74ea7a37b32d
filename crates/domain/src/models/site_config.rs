//! Site-wide configuration edited from the admin settings screen.
//!
//! There is exactly one `SiteConfig` per store. It is read on every public
//! render and replaced wholesale on save.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Public contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct ContactInfo {
    pub phone: String,
    #[validate(email(message = "Contact email must be a valid email address"))]
    pub email: String,
    pub address: String,
    pub whatsapp: String,
}

/// A `{label, value}` statistic shown on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeStat {
    pub label: String,
    pub value: String,
}

impl HomeStat {
    fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// Home page hero block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct HomeContent {
    #[validate(length(min = 1, message = "Hero title must not be empty"))]
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_image: String,
    /// Display order is preserved.
    #[serde(default)]
    pub stats: Vec<HomeStat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct SiteConfig {
    #[validate(nested)]
    pub contact: ContactInfo,
    #[validate(nested)]
    pub home: HomeContent,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact: ContactInfo {
                phone: "+91 98765 43210".to_string(),
                email: "franchise@jaitea.com".to_string(),
                address: "Plot No. 45, Jubilee Hills, Hyderabad, Telangana - 500033".to_string(),
                whatsapp: "+919876543210".to_string(),
            },
            home: HomeContent {
                hero_title: "Brew Success with JAITEA".to_string(),
                hero_subtitle: "Low Investment, High ROI. Start your own profitable tea business today in Telangana or Andhra Pradesh.".to_string(),
                hero_image: "https://picsum.photos/1920/1080?blur=5".to_string(),
                stats: vec![
                    HomeStat::new("Outlets", "50+"),
                    HomeStat::new("Happy Customers", "10k+"),
                    HomeStat::new("Cities", "12+"),
                    HomeStat::new("Tea Varieties", "25+"),
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = SiteConfig::default();
        assert_eq!(config.contact.phone, "+91 98765 43210");
        assert_eq!(config.home.hero_title, "Brew Success with JAITEA");
        assert_eq!(config.home.stats.len(), 4);
        assert_eq!(config.home.stats[0].label, "Outlets");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_contact_email() {
        let mut config = SiteConfig::default();
        config.contact.email = "franchise-at-jaitea".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_stats_default_to_empty() {
        let config: SiteConfig = serde_json::from_value(serde_json::json!({
            "contact": {"phone": "1", "email": "a@b.co", "address": "x", "whatsapp": "1"},
            "home": {"hero_title": "Hi", "hero_subtitle": "", "hero_image": ""}
        }))
        .unwrap();
        assert!(config.home.stats.is_empty());
    }
}
