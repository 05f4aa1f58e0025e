//! Static registry of marathon events
//!
//! Each event carries the metadata its detail page is driven by: display
//! name, continent grouping for the overview carousels, and, for published
//! events, the initial map view and the GeoJSON data files.

/// Continents used to group events on the overview page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Continent {
    Europe,
    NorthAmerica,
    SouthAmerica,
    Asia,
    Africa,
    AustraliaOceania,
}

impl Continent {
    /// Slug used in element ids and data paths
    pub fn label(&self) -> &'static str {
        match self {
            Self::Europe => "europe",
            Self::NorthAmerica => "north-america",
            Self::SouthAmerica => "south-america",
            Self::Asia => "asia",
            Self::Africa => "africa",
            Self::AustraliaOceania => "australia-oceania",
        }
    }

    pub fn all() -> &'static [Self] {
        &[
            Self::Europe,
            Self::NorthAmerica,
            Self::SouthAmerica,
            Self::Asia,
            Self::Africa,
            Self::AustraliaOceania,
        ]
    }
}

/// Publication status of an event page
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EventStatus {
    /// Published event with map data available
    Open {
        /// Initial map center as (lat, lon)
        center: (f64, f64),
        /// Initial map zoom level
        zoom: u8,
        route_file: &'static str,
        pois_file: &'static str,
    },
    /// Announced event; no map is shown yet
    ComingSoon,
}

/// One entry of the event registry
#[derive(Debug, PartialEq)]
pub struct EventInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub continent: Continent,
    pub status: EventStatus,
}

impl EventInfo {
    /// All registered events
    pub fn all() -> &'static [EventInfo] {
        &EVENTS
    }

    /// Look up an event by its page id; unknown ids are the caller's
    /// "marathon not found" path
    pub fn find(id: &str) -> Option<&'static EventInfo> {
        EVENTS.iter().find(|event| event.id == id)
    }

    /// Events of one continent, in registry order
    pub fn by_continent(continent: Continent) -> impl Iterator<Item = &'static EventInfo> {
        EVENTS.iter().filter(move |event| event.continent == continent)
    }

    /// True when the event page only shows a placeholder
    pub fn is_coming_soon(&self) -> bool {
        matches!(self.status, EventStatus::ComingSoon)
    }
}

static EVENTS: [EventInfo; 19] = [
    EventInfo {
        id: "almaty",
        name: "almaty marathon",
        continent: Continent::Asia,
        status: EventStatus::ComingSoon,
    },
    EventInfo {
        id: "auckland",
        name: "barfoot & thompson auckland marathon",
        continent: Continent::AustraliaOceania,
        status: EventStatus::Open {
            center: (-36.8485, 174.7633),
            zoom: 11,
            route_file: "data/oceania/auckland-route.geojson",
            pois_file: "data/oceania/auckland-pois.geojson",
        },
    },
    EventInfo {
        id: "berlin",
        name: "bmw berlin-marathon",
        continent: Continent::Europe,
        status: EventStatus::Open {
            center: (52.5200, 13.4050),
            zoom: 11,
            route_file: "data/europe/berlin-route.geojson",
            pois_file: "data/europe/berlin-pois.geojson",
        },
    },
    EventInfo {
        id: "boston",
        name: "boston marathon",
        continent: Continent::NorthAmerica,
        status: EventStatus::Open {
            center: (42.3601, -71.0589),
            zoom: 11,
            route_file: "data/north-america/boston-route.geojson",
            pois_file: "data/north-america/boston-pois.geojson",
        },
    },
    EventInfo {
        id: "brasilia",
        name: "maratona monumental de brasília",
        continent: Continent::SouthAmerica,
        status: EventStatus::ComingSoon,
    },
    EventInfo {
        id: "brisbane",
        name: "brisbane marathon",
        continent: Continent::AustraliaOceania,
        status: EventStatus::Open {
            center: (-27.4698, 153.0251),
            zoom: 11,
            route_file: "data/oceania/brisbane-route.geojson",
            pois_file: "data/oceania/brisbane-pois.geojson",
        },
    },
    EventInfo {
        id: "buenos-aires",
        name: "buenos aires international marathon",
        continent: Continent::SouthAmerica,
        status: EventStatus::Open {
            center: (-34.6037, -58.3816),
            zoom: 12,
            route_file: "data/south-america/buenos-aires-route.geojson",
            pois_file: "data/south-america/buenos-aires-pois.geojson",
        },
    },
    EventInfo {
        id: "cape-town",
        name: "cape town marathon",
        continent: Continent::Africa,
        status: EventStatus::ComingSoon,
    },
    EventInfo {
        id: "caracas",
        name: "maratón caf caracas",
        continent: Continent::SouthAmerica,
        status: EventStatus::Open {
            center: (10.4806, -66.9036),
            zoom: 11,
            route_file: "data/south-america/caracas-route.geojson",
            pois_file: "data/south-america/caracas-pois.geojson",
        },
    },
    EventInfo {
        id: "chicago",
        name: "bank of america chicago marathon",
        continent: Continent::NorthAmerica,
        status: EventStatus::Open {
            center: (41.8781, -87.6298),
            zoom: 11,
            route_file: "data/north-america/chicago-route.geojson",
            pois_file: "data/north-america/chicago-pois.geojson",
        },
    },
    EventInfo {
        id: "london",
        name: "tcs london marathon",
        continent: Continent::Europe,
        status: EventStatus::Open {
            center: (51.5074, -0.1278),
            zoom: 11,
            route_file: "data/europe/london-route.geojson",
            pois_file: "data/europe/london-pois.geojson",
        },
    },
    EventInfo {
        id: "lagos",
        name: "access bank lagos city marathon",
        continent: Continent::Africa,
        status: EventStatus::Open {
            center: (6.5244, 3.3792),
            zoom: 11,
            route_file: "data/africa/lagos-route.geojson",
            pois_file: "data/africa/lagos-pois.geojson",
        },
    },
    EventInfo {
        id: "nagano",
        name: "the nagano marathon",
        continent: Continent::Asia,
        status: EventStatus::Open {
            center: (36.6513, 138.1810),
            zoom: 11,
            route_file: "data/asia/nagano-route.geojson",
            pois_file: "data/asia/nagano-pois.geojson",
        },
    },
    EventInfo {
        id: "nyc",
        name: "tcs new york city marathon (nyrr)",
        continent: Continent::NorthAmerica,
        status: EventStatus::Open {
            center: (40.7128, -74.0060),
            zoom: 11,
            route_file: "data/north-america/nyc-route.geojson",
            pois_file: "data/north-america/nyc-pois.geojson",
        },
    },
    EventInfo {
        id: "pietermaritzburg",
        name: "capital city42",
        continent: Continent::Africa,
        status: EventStatus::ComingSoon,
    },
    EventInfo {
        id: "stockholm",
        name: "adidas stockholm marathon",
        continent: Continent::Europe,
        status: EventStatus::Open {
            center: (59.3293, 18.0686),
            zoom: 11,
            route_file: "data/europe/stockholm-route.geojson",
            pois_file: "data/europe/stockholm-pois.geojson",
        },
    },
    EventInfo {
        id: "sydney",
        name: "tcs sydney marathon presented by asics",
        continent: Continent::AustraliaOceania,
        status: EventStatus::Open {
            center: (-33.8688, 151.2093),
            zoom: 11,
            route_file: "data/oceania/sydney-route.geojson",
            pois_file: "data/oceania/sydney-pois.geojson",
        },
    },
    EventInfo {
        id: "tokyo",
        name: "tokyo marathon",
        continent: Continent::Asia,
        status: EventStatus::Open {
            center: (35.6762, 139.6503),
            zoom: 11,
            route_file: "data/asia/tokyo-route.geojson",
            pois_file: "data/asia/tokyo-pois.geojson",
        },
    },
    EventInfo {
        id: "toronto",
        name: "tcs toronto waterfront marathon",
        continent: Continent::NorthAmerica,
        status: EventStatus::ComingSoon,
    },
];
