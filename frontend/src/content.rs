use serde::Deserialize;

const EMBEDDED: &str = include_str!("content.json");

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Brand {
    pub name: String,
    pub tagline: String,
    pub cta_primary: String,
    pub cta_secondary: String,
    pub email: String,
    pub location: String,
    pub instagram: String,
    pub about: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Product {
    pub title: String,
    pub description: String,
    pub image: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SiteContent {
    pub brand: Brand,
    pub hero_image: String,
    pub hero_pills: Vec<String>,
    pub products: Vec<Product>,
    pub testimonials: Vec<Testimonial>,
}

impl SiteContent {
    /// Parses the copy bundled into the binary.
    pub fn load() -> Result<Self, serde_json::Error> {
        Self::from_json(EMBEDDED)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let content = SiteContent::load().expect("embedded content should parse");
        assert_eq!(content.brand.name, "Hauz of Dabs");
        assert_eq!(content.products.len(), 3);
        assert_eq!(content.testimonials.len(), 3);
        assert_eq!(content.hero_pills, vec!["Long-lasting", "Premium blends", "Gift-ready"]);
        assert!(content.products.iter().all(|p| p.image.starts_with("/assets/")));
    }

    #[test]
    fn missing_fields_are_rejected() {
        let err = SiteContent::from_json(r#"{ "brand": { "name": "x" } }"#).unwrap_err();
        assert!(err.is_data());
    }
}
