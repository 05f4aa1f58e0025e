//! POI model and category mapping

use geo::Point;
use geojson::{Feature, JsonObject};
use serde::{Deserialize, Serialize};

/// POI categories, mapped from the numeric `type` codes in the data files
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoiCategory {
    Culture,
    Nature,
    Activity,
    FoodAndDrinks,
    /// Unrecognized or missing category code. Carries no icon and fails any
    /// specific-category filter.
    Default,
}

impl PoiCategory {
    /// Map a numeric category code to its category (1-4, anything else is Default)
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Culture,
            2 => Self::Nature,
            3 => Self::Activity,
            4 => Self::FoodAndDrinks,
            _ => Self::Default,
        }
    }

    /// Display label, as shown in the filter dropdown
    pub fn label(&self) -> &'static str {
        match self {
            Self::Culture => "culture",
            Self::Nature => "nature",
            Self::Activity => "activity",
            Self::FoodAndDrinks => "food & drinks",
            Self::Default => "default",
        }
    }

    /// Icon asset for map markers; the Default category has none
    pub fn icon_path(&self) -> Option<&'static str> {
        match self {
            Self::Culture => Some("css/kapr_type1.svg"),
            Self::Nature => Some("css/kapr_type2.svg"),
            Self::Activity => Some("css/kapr_type3.svg"),
            Self::FoodAndDrinks => Some("css/kapr_type4.svg"),
            Self::Default => None,
        }
    }

    /// The categories offered by the filter control
    pub fn selectable() -> &'static [Self] {
        &[
            Self::Culture,
            Self::Nature,
            Self::Activity,
            Self::FoodAndDrinks,
        ]
    }
}

/// A point of interest along the route
#[derive(Clone, Debug)]
pub struct Poi {
    pub category: PoiCategory,
    /// Only meaningful for the food & drinks category
    pub cuisine: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub location: Option<String>,
    /// WGS84 position (x = lon, y = lat)
    pub position: Point<f64>,
}

impl Poi {
    /// Build a POI from a GeoJSON point feature
    ///
    /// Returns `None` for features without a usable point geometry; these are
    /// skipped with a warning rather than failing the whole dataset. Missing
    /// or malformed properties degrade to the Default category, never error.
    pub fn from_feature(feature: &Feature) -> Option<Self> {
        let Some(geometry) = feature.geometry.as_ref() else {
            tracing::warn!("Skipping POI feature without geometry");
            return None;
        };

        let position = match &geometry.value {
            geojson::Value::Point(position) if position.len() >= 2 => {
                Point::new(position[0], position[1])
            }
            other => {
                tracing::warn!(
                    "Skipping POI with unusable geometry: {}",
                    crate::route::geometry_type_name(other)
                );
                return None;
            }
        };

        if !position.x().is_finite() || !position.y().is_finite() {
            tracing::warn!(
                "Skipping POI with non-finite position: ({}, {})",
                position.x(),
                position.y()
            );
            return None;
        }

        let props = feature.properties.as_ref();
        let category = props
            .and_then(|p| p.get("type"))
            .and_then(category_code)
            .map(PoiCategory::from_code)
            .unwrap_or(PoiCategory::Default);

        Some(Poi {
            category,
            cuisine: string_prop(props, &["cuisine"]).filter(|c| !c.is_empty()),
            name: string_prop(props, &["name"]),
            description: string_prop(props, &["description"]),
            // Some datasets use alternate property names for the same field
            photo: string_prop(props, &["photo", "image"]),
            location: string_prop(props, &["location", "address"]),
            position,
        })
    }
}

/// Category codes appear both as JSON numbers and as digit strings
fn category_code(value: &serde_json::Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
}

fn string_prop(props: Option<&JsonObject>, keys: &[&str]) -> Option<String> {
    let props = props?;
    keys.iter()
        .find_map(|key| props.get(*key).and_then(|v| v.as_str()).map(str::to_owned))
}
