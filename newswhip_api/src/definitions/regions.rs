//! Region and city ids used by the `region/...` and `local/...` endpoints.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Region {
    pub id: u32,
    pub name: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct City {
    pub id: u32,
    pub name: &'static str,
}

pub const REGIONS: &[(u32, &str)] = &[
    (279, "World"),
    (45, "U.S."),
    (46, "U.K."),
    (49, "Australia"),
    (47, "Canada"),
    (48, "Ireland"),
    (50, "New Zealand"),
    (51, "India"),
    (52, "Europe"),
    (54, "China"),
    (57, "Africa"),
    (56, "South Africa"),
    (99, "Brasil"),
    (634, "México"),
    (100, "Portugal"),
    (139, "España"),
    (277, "France"),
    (278, "Deutschland"),
    (318, "België"),
    (370, "Belgique"),
    (371, "Nederland"),
    (367, "Eesti"),
    (416, "Suomi"),
    (536, "Sverige"),
    (580, "Italia"),
    (631, "South East Asia"),
    (632, "Middle East"),
    (650, "Argentina"),
    (656, "Norge"),
    (666, "U.S. Hispanic"),
];

pub const CITIES: &[(&str, &[(u32, &str)])] = &[
    (
        "U.S.",
        &[
            (163, "Atlanta, GA"),
            (140, "Austin, TX"),
            (164, "Baltimore, MD"),
            (165, "Boston, MA"),
            (141, "North Carolina"),
            (166, "Chicago, IL"),
            (142, "Cincinnati, OH"),
            (143, "Cleveland, OH"),
            (144, "Columbus, OH"),
            (167, "Connecticut, CT"),
            (145, "Dallas, TX"),
            (168, "Denver, CO"),
            (146, "Detroit, MI"),
            (147, "Houston, TX"),
            (169, "Indianapolis, IN"),
            (170, "Jacksonville, FL"),
            (148, "Kansas City, MO"),
            (171, "L.A., CA"),
            (149, "Las Vegas, NV"),
            (150, "Long Island, NY"),
            (151, "Memphis, TN"),
            (172, "Miami, FL"),
            (152, "Minneapolis, MN"),
            (153, "Nashville, TN"),
            (173, "New Orleans, LA"),
            (174, "New York, NY"),
            (154, "Oklahoma City, OK"),
            (175, "Orlando, FL"),
            (155, "Philadelphia, PA"),
            (176, "Phoenix, AZ"),
            (156, "Pittsburgh, PA"),
            (157, "Portland, OR"),
            (630, "Richmond, VA"),
            (177, "Sacramento, CA"),
            (158, "Salt Lake City, UT"),
            (159, "San Antonio, TX"),
            (178, "San Diego, CA"),
            (179, "San Francisco, CA"),
            (180, "San Jose, CA"),
            (160, "Seattle, WA"),
            (161, "St. Louis, MO"),
            (181, "Tampa, FL"),
            (162, "Washington, DC"),
            (657, "Omaha, NE"),
            (658, "Des Moines, IA"),
            (659, "Little Rock, AR"),
            (660, "Milwaukee, WI"),
        ],
    ),
    (
        "U.K.",
        &[
            (417, "London"),
            (418, "Birmingham"),
            (419, "Manchester"),
            (420, "Liverpool"),
            (421, "Scotland"),
            (422, "Wales"),
            (424, "Midlands"),
            (425, "North England"),
            (426, "Yorkshire and Humber"),
            (427, "South East England"),
            (428, "East England"),
            (431, "South West England"),
        ],
    ),
    (
        "Canada",
        &[
            (186, "Calgary"),
            (187, "Edmonton"),
            (183, "Montreal"),
            (185, "Ottawa"),
            (182, "Toronto"),
            (184, "Vancouver"),
        ],
    ),
    (
        "Deutschland",
        &[
            (263, "Baden-Württemberg"),
            (264, "Bayern"),
            (265, "Berlin-Brandenburg"),
            (266, "Hamburg-Schleswig-Holstein"),
            (267, "Hessen"),
            (440, "Lower Saxony"),
            (268, "Mecklenburg-Vorpommern"),
            (269, "Niedersachsen-Bremen"),
            (270, "Nordrhein-Westfalen"),
            (272, "Rheinland-Pfalz"),
            (273, "Saarland"),
            (274, "Sachsen"),
            (275, "Sachsen-Anhalt"),
            (276, "Thüringen"),
        ],
    ),
];

pub fn region_name(id: u32) -> Option<&'static str> {
    REGIONS
        .iter()
        .find(|(region_id, _)| *region_id == id)
        .map(|(_, name)| *name)
}

/// Looks up a region by display name, ignoring ASCII case.
pub fn region_by_name(name: &str) -> Option<Region> {
    REGIONS
        .iter()
        .find(|(_, region_name)| region_name.eq_ignore_ascii_case(name))
        .map(|(id, name)| Region { id: *id, name: *name })
}

/// Cities covered for a country, in table order. Empty when the country has
/// no local coverage.
pub fn cities(country: &str) -> Vec<City> {
    CITIES
        .iter()
        .filter(|(name, _)| name.eq_ignore_ascii_case(country))
        .flat_map(|(_, cities)| cities.iter())
        .map(|(id, name)| City { id: *id, name: *name })
        .collect()
}

/// Looks up a city in any country by display name, ignoring ASCII case.
pub fn city_by_name(name: &str) -> Option<City> {
    CITIES
        .iter()
        .flat_map(|(_, cities)| cities.iter())
        .find(|(_, city_name)| city_name.eq_ignore_ascii_case(name))
        .map(|(id, name)| City { id: *id, name: *name })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_lookups() {
        assert_eq!(region_name(45), Some("U.S."));
        assert_eq!(region_by_name("ireland").map(|r| r.id), Some(48));
        assert!(region_name(1).is_none());
    }

    #[test]
    fn cities_grouped_by_country() {
        assert_eq!(cities("U.K.").len(), 12);
        assert_eq!(cities("canada").len(), 6);
        assert!(cities("France").is_empty());
        assert_eq!(cities("U.S.")[0], City { id: 163, name: "Atlanta, GA" });
    }

    #[test]
    fn city_lookup_spans_countries() {
        assert_eq!(city_by_name("Toronto").map(|c| c.id), Some(182));
        assert_eq!(city_by_name("thüringen").map(|c| c.id), Some(276));
        assert!(city_by_name("Paris").is_none());
    }
}
