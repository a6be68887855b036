// SPDX-License-Identifier: MPL-2.0

use serde::{Deserialize, Serialize};

/// Summary projection used by launch lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Launch {
    pub id: String,
    pub name: String,
    pub status: LaunchStatus,
    /// Name of the launch service provider
    pub launch_service_provider: String,
    pub mission: Option<Mission>,
    pub rocket: Option<Rocket>,
    pub pad: Pad,
    /// "No Earlier Than" time as an ISO-8601 string
    pub net: String,
    pub image: Option<String>,
}

impl Launch {
    /// Rocket configuration name, if the launch has a rocket assigned
    pub fn rocket_name(&self) -> Option<&str> {
        self.rocket.as_ref().map(|r| r.configuration.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchStatus {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub name: String,
    pub description: Option<String>,
    pub mission_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rocket {
    pub configuration: RocketConfiguration,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RocketConfiguration {
    pub name: String,
    pub family: Option<String>,
    pub variant: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pad {
    pub name: String,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    /// Country code as reported by the provider
    pub country: String,
}
