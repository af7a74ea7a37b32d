//! First-run content.
//!
//! Written by [`Store::initialize_if_empty`](crate::Store::initialize_if_empty)
//! exactly once per seed marker version.

use chrono::{DateTime, Duration, Utc};
use domain::models::{Lead, LeadStatus, LeadType, Page, PageType, SeoMetadata};
use uuid::Uuid;

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

struct SeedPage {
    slug: &'static str,
    title: &'static str,
    content: &'static str,
    page_type: PageType,
    seo_title: &'static str,
    seo_description: &'static str,
    og_image: Option<&'static str>,
    category: Option<&'static str>,
    featured_image: Option<&'static str>,
}

impl SeedPage {
    fn into_page(self, now: DateTime<Utc>) -> Page {
        let mut seo = SeoMetadata::basic(self.seo_title, self.seo_description);
        seo.og_image = self.og_image.map(str::to_string);

        Page {
            id: new_id(),
            slug: self.slug.to_string(),
            title: self.title.to_string(),
            content: self.content.trim().to_string(),
            is_published: true,
            page_type: self.page_type,
            seo,
            last_modified: now,
            author: None,
            category: self.category.map(str::to_string),
            tags: Vec::new(),
            featured_image: self.featured_image.map(str::to_string),
        }
    }
}

const ABOUT_CONTENT: &str = r#"
<h2>Our Story</h2>
<p>Welcome to <strong>JAITEA</strong>, the fastest-growing tea franchise network across Telangana and Andhra Pradesh. Born from a passion for the perfect cup of chai, we started our journey with a single outlet in Hyderabad and have now expanded to over 50+ locations.</p>
<p>We believe that tea is not just a beverage; it's an emotion that connects people. Our unique blend of tea leaves, sourced from the finest gardens in Assam and Darjeeling, ensures that every sip delivers an authentic and refreshing experience.</p>
<h3>Our Mission</h3>
<p>To provide a high-quality, hygienic, and affordable tea experience to millions of customers while empowering entrepreneurs to build successful businesses through our franchise model.</p>
<h3>Our Vision</h3>
<p>To become the most loved tea brand in South India by 2025, known for our taste, quality, and hospitality.</p>
<img src="https://picsum.photos/800/400?grayscale" alt="JAITEA Store" style="border-radius: 8px; margin: 20px 0; width: 100%; object-fit: cover; height: 300px;" />
<h3>Core Values</h3>
<ul>
  <li><strong>Quality:</strong> We never compromise on ingredients.</li>
  <li><strong>Hygiene:</strong> Cleanliness is our priority.</li>
  <li><strong>Customer First:</strong> We serve smiles with every cup.</li>
</ul>
"#;

const SERVICES_CONTENT: &str = r#"
<p>At JAITEA, we offer a diverse range of beverages and snacks tailored to the local palate. Our menu is designed to cater to all age groups, making our outlets a perfect hangout spot.</p>
<h3>🍵 Premium Tea Varieties</h3>
<ul>
  <li><strong>JAITEA Special Chai:</strong> Our signature blend with secret spices.</li>
  <li><strong>Ginger Tea (Allam Tea):</strong> Perfect for a refreshing kick.</li>
  <li><strong>Masala Chai:</strong> Traditional spices blended to perfection.</li>
  <li><strong>Lemon Tea:</strong> Zesty and refreshing.</li>
  <li><strong>Green Tea:</strong> For the health-conscious.</li>
</ul>
<h3>☕ Coffee &amp; Milk</h3>
<ul>
  <li><strong>Filter Coffee:</strong> Authentic South Indian taste.</li>
  <li><strong>Boost / Horlicks:</strong> Comfort drinks for everyone.</li>
  <li><strong>Badam Milk:</strong> Rich and creamy.</li>
</ul>
<h3>🍪 Snacks</h3>
<ul>
  <li><strong>Osmania Biscuits:</strong> The classic Hyderabad combo.</li>
  <li><strong>Samosa:</strong> Hot and crispy aloo samosas.</li>
  <li><strong>Sandwiches:</strong> Grilled to perfection.</li>
  <li><strong>Bun Maska:</strong> Soft bun with generous butter.</li>
</ul>
<h3>🥤 Coolers &amp; Shakes</h3>
<p>We also serve a variety of thick shakes, cold coffee, and mojitos to beat the heat.</p>
"#;

const CONTACT_CONTENT: &str = r#"
<p>Have questions? Want to know more about our franchise model? Reach out to us!</p>
<div style="background: #f5f5f4; padding: 20px; border-radius: 8px; border: 1px solid #e7e5e4;">
  <h3>Corporate Office</h3>
  <p><strong>JAITEA Foods Pvt Ltd.</strong><br/>
  Plot No. 45, Jubilee Hills,<br/>
  Hyderabad, Telangana - 500033</p>
  <p><strong>Phone:</strong> <a href="tel:+919876543210">+91 98765 43210</a></p>
  <p><strong>Email:</strong> <a href="mailto:franchise@jaitea.com">franchise@jaitea.com</a></p>
  <p><strong>Business Hours:</strong> Mon - Sat: 10:00 AM - 7:00 PM</p>
</div>
<h3>Franchise Inquiries</h3>
<p>For immediate assistance regarding franchise opportunities, please fill out the application form on our <a href="/franchise" style="color: #059669; font-weight: bold;">Franchise Page</a> or call us directly.</p>
"#;

const TEA_TRENDS_CONTENT: &str = r#"
<p>The tea industry in India is witnessing a massive shift. From traditional tapri culture to premium tea cafes, the evolution is evident.</p>
<h3>1. Health Consciousness</h3>
<p>Customers are increasingly opting for Green Tea, Lemon Tea, and herbal blends over sugary milk tea.</p>
<h3>2. Ambiance Matters</h3>
<p>Tea drinking is now a social activity. Outlets like JAITEA provide a clean, green, and pleasant environment for meetings and hangouts.</p>
<h3>3. Technology Integration</h3>
<p>From digital menus to loyalty programs, technology is playing a key role in customer retention.</p>
"#;

const WHY_INVEST_CONTENT: &str = r#"
<p>Investing in a tea franchise is one of the safest and most profitable business decisions in India right now.</p>
<h3>Low Investment, High Returns</h3>
<p>Compared to fine dining restaurants, a tea cafe requires significantly lower capital but offers high profit margins due to low raw material costs.</p>
<h3>All-Season Demand</h3>
<p>Tea is an essential part of Indian culture. Come rain or shine, the demand for chai never drops.</p>
<h3>Standardized Operations</h3>
<p>With JAITEA, you get a proven business model, standard recipes, and staff training, making it easy to run the business even without prior experience.</p>
"#;

/// The seven pages every new store starts with.
pub fn seed_pages(now: DateTime<Utc>) -> Vec<Page> {
    vec![
        SeedPage {
            slug: "/",
            title: "Home",
            content: "<h1>Welcome to JAITEA</h1><p>The premium tea franchise of Telugu states.</p>",
            page_type: PageType::Page,
            seo_title: "JAITEA - Premium Tea Franchise in Telangana & Andhra Pradesh",
            seo_description: "Start your own profitable business with JAITEA. Best Tea Franchise in Hyderabad, Vijayawada, and Visakhapatnam.",
            og_image: Some("https://picsum.photos/1200/630"),
            category: None,
            featured_image: None,
        },
        SeedPage {
            slug: "/about",
            title: "About JAITEA",
            content: ABOUT_CONTENT,
            page_type: PageType::Page,
            seo_title: "About JAITEA - Our Story & Vision",
            seo_description: "Learn about JAITEA, the leading tea franchise in Telugu states. Our mission is to serve the best tea.",
            og_image: None,
            category: None,
            featured_image: Some("https://picsum.photos/1200/500?blur=2"),
        },
        SeedPage {
            slug: "/services",
            title: "Our Menu & Services",
            content: SERVICES_CONTENT,
            page_type: PageType::Page,
            seo_title: "JAITEA Menu - Tea, Coffee & Snacks",
            seo_description: "Explore our wide range of teas, coffees, and snacks. From Masala Chai to Osmania Biscuits.",
            og_image: None,
            category: None,
            featured_image: Some("https://picsum.photos/1200/500?grayscale"),
        },
        SeedPage {
            slug: "/contact",
            title: "Contact Us",
            content: CONTACT_CONTENT,
            page_type: PageType::Page,
            seo_title: "Contact JAITEA - Hyderabad Corporate Office",
            seo_description: "Get in touch with JAITEA for franchise inquiries or general support.",
            og_image: None,
            category: None,
            featured_image: None,
        },
        SeedPage {
            slug: "/franchise",
            title: "Franchise Opportunities",
            content: "<h2>Become a Partner</h2><p>Join the fastest growing tea network.</p>",
            page_type: PageType::Page,
            seo_title: "Apply for JAITEA Franchise | Low Investment High Return",
            seo_description: "Looking for a business opportunity? Apply for JAITEA franchise today.",
            og_image: None,
            category: None,
            featured_image: None,
        },
        SeedPage {
            slug: "/blog/tea-trends-2024",
            title: "Tea Industry Trends in 2024",
            content: TEA_TRENDS_CONTENT,
            page_type: PageType::Blog,
            seo_title: "Tea Trends 2024 - JAITEA Insights",
            seo_description: "Read about the latest trends in the tea industry.",
            og_image: None,
            category: Some("Market Insights"),
            featured_image: Some("https://picsum.photos/800/400"),
        },
        SeedPage {
            slug: "/blog/why-invest-in-tea-franchise",
            title: "Why Invest in a Tea Franchise?",
            content: WHY_INVEST_CONTENT,
            page_type: PageType::Blog,
            seo_title: "Is Tea Franchise Profitable? - JAITEA Blog",
            seo_description: "Discover why investing in a tea franchise is a smart business move.",
            og_image: None,
            category: Some("Business Tips"),
            featured_image: Some("https://picsum.photos/800/401"),
        },
    ]
    .into_iter()
    .map(|page| page.into_page(now))
    .collect()
}

/// One sample franchise inquiry, received a day before seeding.
pub fn seed_leads(now: DateTime<Utc>) -> Vec<Lead> {
    vec![Lead {
        id: new_id(),
        name: "Ramesh Gupta".to_string(),
        email: "ramesh@example.com".to_string(),
        phone: "9876543210".to_string(),
        message: "Interested in opening a franchise in Warangal.".to_string(),
        lead_type: LeadType::Franchise,
        status: LeadStatus::New,
        created_at: now - Duration::days(1),
    }]
}
