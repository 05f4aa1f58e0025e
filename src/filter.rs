//! POI filtering and the cuisine index
//!
//! The filter state is an explicit value object passed into the filter
//! functions; there is no module-level state, so concurrent or test-isolated
//! invocations see only their own selections. Filtering is always re-evaluated
//! from the full dataset and never mutates it.

use crate::poi::{Poi, PoiCategory};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Active category selection of the filter control
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategorySelection {
    #[default]
    All,
    Only(PoiCategory),
}

/// Active cuisine selection; only effective while the category selection is
/// food & drinks
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CuisineSelection {
    #[default]
    All,
    /// A lowercase cuisine value, as emitted by the filter control
    Only(String),
}

impl CuisineSelection {
    /// Select a specific cuisine, normalized to lowercase
    pub fn only(cuisine: &str) -> Self {
        Self::Only(cuisine.to_lowercase())
    }
}

/// The pair of active filter selections controlling POI visibility
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    category: CategorySelection,
    cuisine: CuisineSelection,
}

impl FilterState {
    /// Create a filter state showing everything
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn category(&self) -> CategorySelection {
        self.category
    }

    #[inline]
    pub fn cuisine(&self) -> &CuisineSelection {
        &self.cuisine
    }

    /// Change the category selection
    ///
    /// Switching away from food & drinks resets the cuisine selection, so a
    /// stale cuisine can never leak into a later food & drinks selection.
    pub fn set_category(&mut self, selection: CategorySelection) {
        self.category = selection;
        if self.category != CategorySelection::Only(PoiCategory::FoodAndDrinks) {
            self.cuisine = CuisineSelection::All;
        }
    }

    pub fn set_cuisine(&mut self, selection: CuisineSelection) {
        self.cuisine = selection;
    }
}

/// Compute the visible subset of `pois` for the given filter state
///
/// A POI passes when the category selection is All or matches its category,
/// and, for the food & drinks selection, when the cuisine selection is All or
/// matches its cuisine case-insensitively. Input order is preserved.
pub fn filter_pois<'a>(pois: &'a [Poi], state: &FilterState) -> Vec<&'a Poi> {
    pois.iter().filter(|poi| matches_filter(poi, state)).collect()
}

fn matches_filter(poi: &Poi, state: &FilterState) -> bool {
    if let CategorySelection::Only(category) = state.category {
        if poi.category != category {
            return false;
        }
        if category == PoiCategory::FoodAndDrinks {
            if let CuisineSelection::Only(selected) = &state.cuisine {
                match &poi.cuisine {
                    Some(cuisine) => {
                        if cuisine.to_lowercase() != *selected {
                            return false;
                        }
                    }
                    None => return false,
                }
            }
        }
    }
    true
}

/// Distinct cuisine values across the food & drinks POIs of a dataset
///
/// Values keep the case they appeared with in the data; the display order for
/// the filter dropdown is case-insensitive alphabetical.
#[derive(Clone, Debug, Default)]
pub struct CuisineIndex {
    values: HashSet<String>,
}

impl CuisineIndex {
    /// Build the index from a POI dataset
    pub fn build(pois: &[Poi]) -> Self {
        let values = pois
            .iter()
            .filter(|poi| poi.category == PoiCategory::FoodAndDrinks)
            .filter_map(|poi| poi.cuisine.as_deref())
            .filter(|cuisine| !cuisine.is_empty())
            .map(str::to_owned)
            .collect();
        Self { values }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Exact-match membership test (case preserved)
    pub fn contains(&self, cuisine: &str) -> bool {
        self.values.contains(cuisine)
    }

    /// Cuisine values sorted case-insensitively for the filter dropdown
    pub fn sorted_for_display(&self) -> Vec<&str> {
        let mut cuisines: Vec<&str> = self.values.iter().map(String::as_str).collect();
        cuisines.sort_by(|a, b| {
            a.to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b))
        });
        cuisines
    }
}

/// A loaded POI dataset together with its cuisine index
///
/// Owning both keeps the invariant that the index always reflects exactly the
/// food & drinks cuisines of the current data: every replacement rebuilds it.
#[derive(Clone, Debug, Default)]
pub struct PoiDataset {
    pois: Vec<Poi>,
    cuisines: CuisineIndex,
}

impl PoiDataset {
    pub fn new(pois: Vec<Poi>) -> Self {
        let cuisines = CuisineIndex::build(&pois);
        Self { pois, cuisines }
    }

    /// Replace the dataset, rebuilding the cuisine index
    pub fn replace(&mut self, pois: Vec<Poi>) {
        self.cuisines = CuisineIndex::build(&pois);
        self.pois = pois;
    }

    #[inline]
    pub fn pois(&self) -> &[Poi] {
        &self.pois
    }

    #[inline]
    pub fn cuisines(&self) -> &CuisineIndex {
        &self.cuisines
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pois.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pois.is_empty()
    }

    /// Compute the visible subset for the given filter state
    pub fn filter(&self, state: &FilterState) -> Vec<&Poi> {
        filter_pois(&self.pois, state)
    }
}
