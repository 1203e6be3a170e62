//! Core data types for decoded FINN feeds.
//!
//! All values are kept as the strings found in the feed. Numbers, dates and
//! prices are never parsed or reformatted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapping from link relation (`self`, `next`, `alternate`, ...) to URL.
pub type Links = BTreeMap<String, String>;

/// A contact person attached to a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Contact name.
    pub name: String,

    /// Role or title (e.g. "Eiendomsmegler").
    pub title: String,

    /// Work phone number.
    pub work: String,

    /// Mobile phone number.
    pub mobile: String,

    /// Fax number.
    pub fax: String,
}

/// Plot (tomt) information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plot {
    /// Plot area as given by the feed.
    pub area: String,

    /// Set when the feed carries an `owned` marker, whatever its value.
    pub owned: bool,
}

/// Energy rating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Energy {
    pub label: String,
    pub label_color_code: String,
}

/// Cadastral identifiers (gnr/bnr/snr) of the first registered unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cadastre {
    pub cadastral_unit_number: String,
    pub property_unit_number: String,
    pub section_number: String,
}

/// One free-text block with a heading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralText {
    pub title: String,
    pub value: String,
}

/// A scheduled viewing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewing {
    /// Viewing date.
    pub date: String,

    /// Start time.
    pub from: String,

    /// End time.
    pub to: String,
}

/// Price block of a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    /// Asking price (prisantydning).
    pub main: String,

    /// Lower bound when the asking price is a range.
    pub main_from: String,

    /// Upper bound when the asking price is a range.
    pub main_to: String,

    /// Total price including costs.
    pub total: String,

    /// Collective debt (fellesgjeld).
    pub collective_debt: String,

    /// Shared monthly cost (felleskostnader).
    pub shared_cost: String,

    /// Estimated value (verditakst).
    pub estimated_value: String,

    /// Price per square meter.
    pub square_meter: String,
}

/// One decoded listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// FINN code, from `dc:identifier`.
    pub id: String,
    pub title: String,
    pub updated: String,
    pub published: String,

    /// Link relations of the entry.
    pub links: Links,

    /// `"true"`/`"false"` flag for private sellers, `"false"` when absent.
    pub is_private: String,

    /// Disposal label (e.g. "Solgt"), only set for disposed ads.
    pub status: String,

    /// Ad type label.
    pub ad_type: String,

    /// `georss:point`, "lat lon".
    pub georss: String,
    pub city: String,
    pub address: String,
    pub postal_code: String,

    /// Contacts in document order.
    pub contacts: Vec<Contact>,

    /// Image references in document order.
    pub images: Vec<String>,

    /// Author name.
    pub author: String,

    pub living_size_from: String,
    pub living_size_to: String,
    pub property_type: String,
    pub number_of_bedrooms: String,
    pub ownership_type: String,
    pub usable_size: String,
    pub primary_size: String,

    /// Teaser text.
    pub ingress: String,

    /// Description of the surroundings.
    pub situation: String,

    pub plot: Plot,
    pub energy: Energy,
    pub cadastre: Cadastre,
    pub facilities: Vec<String>,
    pub general_text: Vec<GeneralText>,
    pub viewings: Vec<Viewing>,
    pub price: Price,
}

impl Default for Property {
    /// An empty listing. Counters start at `"0"` and the private flag at
    /// `"false"`; everything else is empty.
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            updated: String::new(),
            published: String::new(),
            links: Links::new(),
            is_private: "false".to_string(),
            status: String::new(),
            ad_type: String::new(),
            georss: String::new(),
            city: String::new(),
            address: String::new(),
            postal_code: String::new(),
            contacts: Vec::new(),
            images: Vec::new(),
            author: String::new(),
            living_size_from: "0".to_string(),
            living_size_to: "0".to_string(),
            property_type: String::new(),
            number_of_bedrooms: "0".to_string(),
            ownership_type: String::new(),
            usable_size: String::new(),
            primary_size: String::new(),
            ingress: String::new(),
            situation: String::new(),
            plot: Plot::default(),
            energy: Energy::default(),
            cadastre: Cadastre::default(),
            facilities: Vec::new(),
            general_text: Vec::new(),
            viewings: Vec::new(),
            price: Price::default(),
        }
    }
}

impl Property {
    /// URL of the given link relation.
    ///
    /// # Examples
    /// ```
    /// use finn_client::types::Property;
    ///
    /// let mut property = Property::default();
    /// property.links.insert("alternate".to_string(), "https://www.finn.no/1".to_string());
    /// assert_eq!(property.link("alternate"), Some("https://www.finn.no/1"));
    /// assert_eq!(property.link("self"), None);
    /// ```
    #[must_use]
    pub fn link(&self, rel: &str) -> Option<&str> {
        self.links.get(rel).map(String::as_str)
    }

    /// Whether the ad has been marked as disposed (sold/rented).
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        !self.status.is_empty()
    }
}

/// A decoded search response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resultset {
    pub title: String,
    pub subtitle: String,

    /// `os:totalResults`, as given by the feed.
    pub total_results: String,

    /// Navigation links (`self`, `next`, `previous`, ...).
    pub links: Links,

    /// Listings in document order.
    pub results: Vec<Property>,
}

impl Resultset {
    /// URL of the next page, if the feed has one.
    #[must_use]
    pub fn next_link(&self) -> Option<&str> {
        self.links.get("next").map(String::as_str)
    }

    /// Number of listings on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether this page has no listings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Either kind of decoded document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Decoded {
    /// A single `entry` document.
    Entry(Box<Property>),
    /// A `feed` document.
    Feed(Resultset),
}
