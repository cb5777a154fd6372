//! Search-page wiring.
//!
//! The host application drives the actual search loop; this module owns the
//! extension-point mapping that decides which component renders at each slot.
//! The mapping is resolved once at startup from the built-in defaults plus
//! whatever the host overrides, and is immutable afterwards.

use std::collections::BTreeMap;

/// Namespace prefixing every extension-point key of the search page.
pub const SEARCH_APP_NAME: &str = "FacultyProfiles.Search";

/// Default component for each extension point, keyed by the bare slot name.
const DEFAULT_COMPONENTS: &[(&str, &str)] = &[
    ("BucketAggregation.element", "BucketAggregation"),
    ("BucketAggregationValues.element", "BucketAggregationValues"),
    ("SearchApp.facets", "SearchFacets"),
    ("SearchApp.layout", "SearchLayout"),
    ("SearchApp.results", "SearchResults"),
    ("SearchBar.element", "SearchBar"),
    ("ResultsList.item", "ResultItem"),
    ("ResultsGrid.item", "GridItem"),
];

/// Immutable extension-point registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideRegistry {
    components: BTreeMap<String, String>,
}

impl OverrideRegistry {
    /// The full namespaced key for a slot, e.g.
    /// `FacultyProfiles.Search.ResultsList.item`.
    #[must_use]
    pub fn key(slot: &str) -> String {
        format!("{SEARCH_APP_NAME}.{slot}")
    }

    /// Builds the registry from the defaults and the host's overrides. An
    /// override shadows the default for its slot; overrides for unknown
    /// slots register as-is so the host can introduce new slots.
    #[must_use]
    pub fn new(overrides: BTreeMap<String, String>) -> Self {
        let mut components: BTreeMap<String, String> = DEFAULT_COMPONENTS
            .iter()
            .map(|(slot, component)| (Self::key(slot), (*component).to_string()))
            .collect();
        components.extend(overrides);
        Self { components }
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(BTreeMap::new())
    }

    /// The component registered for a fully-namespaced extension point.
    #[must_use]
    pub fn resolve(&self, extension_point: &str) -> Option<&str> {
        self.components.get(extension_point).map(String::as_str)
    }
}

impl Default for OverrideRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
