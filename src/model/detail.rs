// SPDX-License-Identifier: MPL-2.0

use crate::model::LaunchStatus;
use serde::{Deserialize, Serialize};

/// Full launch record for the detail view.
///
/// A detail reconstructed from the cache only carries the columns the cache
/// persists; nested lists come back empty and numeric ids come back as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchDetail {
    pub id: String,
    pub name: String,
    pub status: LaunchStatus,
    pub launch_service_provider: LaunchServiceProvider,
    pub mission: Option<MissionDetail>,
    pub rocket: Option<RocketDetail>,
    pub pad: PadDetail,
    pub window_start: String,
    pub window_end: String,
    pub net: String,
    pub image: Option<String>,
    pub infographic: Option<String>,
    pub programs: Vec<Program>,
    pub video_urls: Vec<String>,
    pub hold_reason: Option<String>,
    pub fail_reason: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchServiceProvider {
    pub id: i64,
    pub name: String,
    pub provider_type: Option<String>,
    pub country_code: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub wiki_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionDetail {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub mission_type: Option<String>,
    pub orbit: Option<Orbit>,
    pub agencies: Vec<Agency>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Orbit {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub abbreviation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RocketDetail {
    pub id: i64,
    pub configuration: RocketConfigurationDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RocketConfigurationDetail {
    pub id: i64,
    pub name: String,
    pub family: Option<String>,
    pub variant: Option<String>,
    pub full_name: Option<String>,
    pub description: Option<String>,
    /// Tonnes
    pub launch_mass: Option<f64>,
    /// Metres
    pub length: Option<f64>,
    /// Metres
    pub diameter: Option<f64>,
    pub image_url: Option<String>,
    pub info_url: Option<String>,
    pub wiki_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PadDetail {
    pub id: i64,
    pub name: String,
    pub location: LocationDetail,
    pub map_url: Option<String>,
    pub total_launch_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationDetail {
    pub id: i64,
    pub name: String,
    pub country_code: String,
    pub description: Option<String>,
    pub map_image: Option<String>,
    pub total_launch_count: Option<u32>,
    pub total_landing_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agency {
    pub id: i64,
    pub name: String,
    pub agency_type: Option<String>,
    pub country_code: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub agencies: Vec<Agency>,
    pub image_url: Option<String>,
    pub wiki_url: Option<String>,
}

/// Launch vehicle configuration from the launcher config listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LauncherConfig {
    pub id: i64,
    pub name: String,
    pub family: Option<String>,
    pub variant: Option<String>,
    pub full_name: Option<String>,
    pub description: Option<String>,
}
