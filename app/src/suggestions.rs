//! Autocomplete candidates for the two place fields of the trip form.

use crate::components_impl::SuggestionField;
use std::fmt::Display;
use tracing::{debug, warn};

/// Origin cities offered regardless of what the destination catalog returns.
pub const MAJOR_CITIES: [&str; 18] = [
    "Mumbai",
    "Delhi",
    "Bangalore",
    "Hyderabad",
    "Chennai",
    "Kolkata",
    "Pune",
    "Ahmedabad",
    "Surat",
    "Jaipur",
    "Lucknow",
    "Kanpur",
    "Nagpur",
    "Indore",
    "Thane",
    "Bhopal",
    "Visakhapatnam",
    "Patna",
];

/// Destinations offered when the catalog cannot be loaded.
pub const FALLBACK_DESTINATIONS: [&str; 22] = [
    "Goa",
    "Jaipur",
    "Kerala",
    "Manali",
    "Udaipur",
    "Rishikesh",
    "Varanasi",
    "Andaman Islands",
    "Shimla",
    "Agra",
    "Ladakh",
    "Munnar",
    "Darjeeling",
    "Mysore",
    "Hampi",
    "Ooty",
    "Coorg",
    "Nainital",
    "Mussoorie",
    "Gokarna",
    "Pondicherry",
    "Kasol",
];

/// Known origin cities and destinations, loaded once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionSource {
    cities: Vec<String>,
    destinations: Vec<String>,
}

impl SuggestionSource {
    pub fn new(cities: Vec<String>, destinations: Vec<String>) -> Self {
        Self {
            cities,
            destinations,
        }
    }

    /// The static lists used when no catalog is available.
    pub fn fallback() -> Self {
        Self::new(to_owned_list(&MAJOR_CITIES), to_owned_list(&FALLBACK_DESTINATIONS))
    }

    /// Build the source from the outcome of the destination catalog call.
    ///
    /// A failed catalog load is downgraded to the static lists and only logged.
    pub fn from_catalog<E: Display>(catalog: Result<Vec<String>, E>) -> Self {
        match catalog {
            Ok(destinations) => {
                debug!("Loaded {} destinations from catalog", destinations.len());
                Self::new(to_owned_list(&MAJOR_CITIES), destinations)
            }
            Err(e) => {
                warn!("Failed to fetch destinations, using fallback list: {}", e);
                Self::fallback()
            }
        }
    }

    /// The full candidate list backing the given field.
    pub fn candidates(&self, field: SuggestionField) -> &[String] {
        match field {
            SuggestionField::StartCity => &self.cities,
            SuggestionField::Destination => &self.destinations,
        }
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Filter `source` down to the entries containing `query`, ignoring case.
///
/// An empty query yields the whole source. Order is preserved and no
/// ranking, dedup or limit is applied.
pub fn filter_candidates(source: &[String], query: &str) -> Vec<String> {
    if query.is_empty() {
        return source.to_vec();
    }

    let needle = query.to_lowercase();
    source
        .iter()
        .filter(|candidate| candidate.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
