// SPDX-License-Identifier: MPL-2.0

use crate::model::Launch;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort orders offered for launch lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Earliest launch first
    #[default]
    DateAsc,
    DateDesc,
    NameAsc,
    NameDesc,
    /// Launch service provider, A to Z
    Agency,
    /// Pad country, A to Z
    Country,
    /// Rocket configuration, A to Z; launches without a rocket go last
    Rocket,
}

impl SortOrder {
    pub const ALL: &'static [SortOrder] = &[
        SortOrder::DateAsc,
        SortOrder::DateDesc,
        SortOrder::NameAsc,
        SortOrder::NameDesc,
        SortOrder::Agency,
        SortOrder::Country,
        SortOrder::Rocket,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::DateAsc => "Date (soonest first)",
            SortOrder::DateDesc => "Date (latest first)",
            SortOrder::NameAsc => "Name (A-Z)",
            SortOrder::NameDesc => "Name (Z-A)",
            SortOrder::Agency => "Agency",
            SortOrder::Country => "Country",
            SortOrder::Rocket => "Rocket",
        }
    }

    /// Compare two launches under this order.
    ///
    /// NET strings are fixed-width ISO-8601, so lexicographic order is
    /// chronological order.
    pub fn compare(self, a: &Launch, b: &Launch) -> Ordering {
        match self {
            SortOrder::DateAsc => a.net.cmp(&b.net),
            SortOrder::DateDesc => b.net.cmp(&a.net),
            SortOrder::NameAsc => a.name.cmp(&b.name),
            SortOrder::NameDesc => b.name.cmp(&a.name),
            SortOrder::Agency => a.launch_service_provider.cmp(&b.launch_service_provider),
            SortOrder::Country => a.pad.location.country.cmp(&b.pad.location.country),
            SortOrder::Rocket => match (a.rocket_name(), b.rocket_name()) {
                (Some(x), Some(y)) => x.cmp(y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }

    /// Stable in-place sort
    pub fn sort(self, launches: &mut [Launch]) {
        launches.sort_by(|a, b| self.compare(a, b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LaunchStatus, Location, Pad, Rocket, RocketConfiguration};

    fn launch(id: &str, name: &str, net: &str, rocket: Option<&str>) -> Launch {
        Launch {
            id: id.to_string(),
            name: name.to_string(),
            status: LaunchStatus {
                name: "Go".to_string(),
                description: None,
            },
            launch_service_provider: "SpaceX".to_string(),
            mission: None,
            rocket: rocket.map(|name| Rocket {
                configuration: RocketConfiguration {
                    name: name.to_string(),
                    family: None,
                    variant: None,
                },
            }),
            pad: Pad {
                name: "LC-39A".to_string(),
                location: Location {
                    name: "Kennedy".to_string(),
                    country: "USA".to_string(),
                },
            },
            net: net.to_string(),
            image: None,
        }
    }

    fn ids(launches: &[Launch]) -> Vec<&str> {
        launches.iter().map(|l| l.id.as_str()).collect()
    }

    #[test]
    fn test_date_ascending() {
        let mut launches = vec![
            launch("c", "C", "2024-01-03T00:00:00Z", None),
            launch("a", "A", "2024-01-01T00:00:00Z", None),
            launch("b", "B", "2024-01-02T00:00:00Z", None),
        ];
        SortOrder::DateAsc.sort(&mut launches);
        assert_eq!(ids(&launches), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_name_descending() {
        let mut launches = vec![
            launch("1", "Alpha", "2024-01-01T00:00:00Z", None),
            launch("2", "Bravo", "2024-01-01T00:00:00Z", None),
            launch("3", "Charlie", "2024-01-01T00:00:00Z", None),
        ];
        SortOrder::NameDesc.sort(&mut launches);
        assert_eq!(ids(&launches), vec!["3", "2", "1"]);
    }

    #[test]
    fn test_name_is_case_sensitive() {
        let mut launches = vec![
            launch("lower", "alpha", "", None),
            launch("upper", "Bravo", "", None),
        ];
        SortOrder::NameAsc.sort(&mut launches);
        assert_eq!(ids(&launches), vec!["upper", "lower"]);
    }

    #[test]
    fn test_missing_rocket_sorts_last() {
        let mut launches = vec![
            launch("none", "A", "", None),
            launch("falcon", "B", "", Some("Falcon 9")),
            launch("atlas", "C", "", Some("Atlas V")),
        ];
        SortOrder::Rocket.sort(&mut launches);
        assert_eq!(ids(&launches), vec!["atlas", "falcon", "none"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut launches = vec![
            launch("first", "Same", "2024-01-01T00:00:00Z", None),
            launch("second", "Same", "2024-01-01T00:00:00Z", None),
            launch("third", "Same", "2024-01-01T00:00:00Z", None),
        ];
        SortOrder::NameDesc.sort(&mut launches);
        assert_eq!(ids(&launches), vec!["first", "second", "third"]);
        SortOrder::DateDesc.sort(&mut launches);
        assert_eq!(ids(&launches), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&SortOrder::DateDesc).unwrap();
        assert_eq!(json, "\"date_desc\"");
        let parsed: SortOrder = serde_json::from_str("\"rocket\"").unwrap();
        assert_eq!(parsed, SortOrder::Rocket);
    }
}
