use serde::{Deserialize, Serialize};

use crate::layout::assignment::Slugged;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Service {
    pub slug: String,
    pub name: String,
    pub summary: String,
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub slug: String,
    pub city: String,
    pub state: String,
    pub summary: String,
    pub description: String,
    #[serde(default)]
    pub market_notes: Vec<String>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
}

impl Location {
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyType {
    pub slug: String,
    pub name: String,
    pub summary: String,
    pub description: String,
    #[serde(default)]
    pub faqs: Vec<Faq>,
}

impl Slugged for Service {
    fn slug(&self) -> &str {
        &self.slug
    }
}

impl Slugged for Location {
    fn slug(&self) -> &str {
        &self.slug
    }
}

impl Slugged for PropertyType {
    fn slug(&self) -> &str {
        &self.slug
    }
}

/// All site content. Order within each list is the display order and drives
/// layout rotation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    pub services: Vec<Service>,
    pub locations: Vec<Location>,
    #[serde(default)]
    pub property_types: Vec<PropertyType>,
}
