//! Keyword-tagged activity search.
//!
//! One lookup per keyword, issued sequentially; every result is tagged with
//! the keyword that produced it. Concatenation without deduplication is the
//! documented default: a place matching two keywords appears twice, once per
//! tag. [`TagOptions::dedupe`] is the explicit opt-in for collapsing repeats.

use std::collections::HashSet;

use serde::Serialize;

use crate::client::{PlacesClient, SearchFilter};
use crate::error::PlacesError;
use crate::types::PlaceEntry;

/// Default search radius for tagging lookups, in meters.
pub const DEFAULT_TAG_RADIUS_M: u32 = 5000;

/// Options for [`PlacesClient::tag_activity_places`].
#[derive(Debug, Clone)]
pub struct TagOptions {
    /// Search radius around the resolved center, in meters.
    pub radius_m: u32,
    /// Collapse repeat (name, address) pairs across keywords to their first
    /// occurrence. Off by default.
    pub dedupe: bool,
}

impl Default for TagOptions {
    fn default() -> Self {
        Self {
            radius_m: DEFAULT_TAG_RADIUS_M,
            dedupe: false,
        }
    }
}

/// A place produced by a keyword lookup, tagged with that keyword.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaggedPlace {
    /// The search keyword that matched this place.
    pub tag: String,
    pub name: Option<String>,
    pub address: Option<String>,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u32>,
}

impl TaggedPlace {
    fn from_entry(tag: &str, entry: PlaceEntry) -> Self {
        Self {
            tag: tag.to_owned(),
            name: entry.name,
            address: entry.vicinity,
            rating: entry.rating,
            user_ratings_total: entry.user_ratings_total,
        }
    }
}

/// Drops every place whose (name, address) pair already appeared earlier in
/// the list, regardless of tag.
#[must_use]
pub fn dedupe_places(places: Vec<TaggedPlace>) -> Vec<TaggedPlace> {
    let mut seen = HashSet::new();
    places
        .into_iter()
        .filter(|p| seen.insert((p.name.clone(), p.address.clone())))
        .collect()
}

impl PlacesClient {
    /// Finds activity places around a named location, one sequential lookup
    /// per keyword, tagging every result with the keyword that produced it.
    ///
    /// Results concatenate in keyword-list order. An unresolvable location
    /// yields an empty list without issuing any per-keyword lookup; a failed
    /// lookup for one keyword is logged and skipped while the remaining
    /// keywords still run.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError`] only for transport or decode failures.
    pub async fn tag_activity_places(
        &self,
        location: &str,
        keywords: &[&str],
        options: &TagOptions,
    ) -> Result<Vec<TaggedPlace>, PlacesError> {
        let Some(center) = self.geocode(location).await? else {
            tracing::warn!(location, "location did not resolve; skipping activity search");
            return Ok(Vec::new());
        };

        let mut tagged = Vec::new();
        for keyword in keywords.iter().copied() {
            let filter = SearchFilter::Keyword(keyword.to_owned());
            match self.nearby_search(center, options.radius_m, &filter).await? {
                Some(entries) => {
                    tagged.extend(
                        entries
                            .into_iter()
                            .map(|entry| TaggedPlace::from_entry(keyword, entry)),
                    );
                }
                None => {
                    tracing::warn!(keyword, "places lookup failed for keyword; skipping");
                }
            }
        }

        if options.dedupe {
            return Ok(dedupe_places(tagged));
        }
        Ok(tagged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(tag: &str, name: &str, address: Option<&str>) -> TaggedPlace {
        TaggedPlace {
            tag: tag.to_owned(),
            name: Some(name.to_owned()),
            address: address.map(str::to_owned),
            rating: None,
            user_ratings_total: None,
        }
    }

    #[test]
    fn dedupe_keeps_first_occurrence_across_tags() {
        let places = vec![
            place("museum", "Riverbanks", Some("500 Wildlife Pkwy")),
            place("park", "Riverbanks", Some("500 Wildlife Pkwy")),
            place("park", "Finlay Park", Some("930 Laurel St")),
        ];
        let deduped = dedupe_places(places);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].tag, "museum");
        assert_eq!(deduped[1].name.as_deref(), Some("Finlay Park"));
    }

    #[test]
    fn dedupe_treats_different_addresses_as_different_places() {
        let places = vec![
            place("coffee", "Drip", Some("Main St")),
            place("coffee", "Drip", Some("Five Points")),
        ];
        assert_eq!(dedupe_places(places).len(), 2);
    }

    #[test]
    fn default_options_use_tag_radius_without_dedupe() {
        let options = TagOptions::default();
        assert_eq!(options.radius_m, DEFAULT_TAG_RADIUS_M);
        assert!(!options.dedupe);
    }
}
