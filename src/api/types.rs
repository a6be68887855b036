// SPDX-License-Identifier: MPL-2.0

//! Wire types for Launch Library 2.
//!
//! Almost everything the API marks as required has been observed as null or
//! missing at some point, so fields are optional here and the mappers decide
//! the defaults.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteLaunchPage {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub results: Vec<RemoteLaunch>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteLaunch {
    pub id: Option<String>,
    pub name: Option<String>,
    pub status: Option<RemoteStatus>,
    pub launch_service_provider: Option<RemoteProvider>,
    pub mission: Option<RemoteMission>,
    pub rocket: Option<RemoteRocket>,
    pub pad: Option<RemotePad>,
    pub net: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteStatus {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteProvider {
    pub id: Option<i64>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub provider_type: Option<String>,
    pub country_code: Option<String>,
    pub description: Option<String>,
    pub info_url: Option<String>,
    pub wiki_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteMission {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub mission_type: Option<String>,
    pub orbit: Option<RemoteOrbit>,
    pub agencies: Option<Vec<RemoteAgency>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteOrbit {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub abbrev: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteRocket {
    pub id: Option<i64>,
    pub configuration: Option<RemoteRocketConfiguration>,
}

/// Rocket configuration; the upcoming list carries the first three fields,
/// the detail endpoint carries all of them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteRocketConfiguration {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub family: Option<String>,
    pub variant: Option<String>,
    pub full_name: Option<String>,
    pub description: Option<String>,
    pub launch_mass: Option<f64>,
    pub length: Option<f64>,
    pub diameter: Option<f64>,
    pub image_url: Option<String>,
    pub info_url: Option<String>,
    pub wiki_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemotePad {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub location: Option<RemoteLocation>,
    pub map_url: Option<String>,
    pub total_launch_count: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteLocation {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub country_code: Option<String>,
    pub description: Option<String>,
    pub map_image: Option<String>,
    pub total_launch_count: Option<u32>,
    pub total_landing_count: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteLaunchDetail {
    pub id: Option<String>,
    pub name: Option<String>,
    pub status: Option<RemoteStatus>,
    pub launch_service_provider: Option<RemoteProvider>,
    pub mission: Option<RemoteMission>,
    pub rocket: Option<RemoteRocket>,
    pub pad: Option<RemotePad>,
    pub window_start: Option<String>,
    pub window_end: Option<String>,
    pub net: Option<String>,
    pub image: Option<String>,
    pub infographic: Option<String>,
    pub program: Option<Vec<RemoteProgram>>,
    #[serde(rename = "vidURLs")]
    pub vid_urls: Option<Vec<RemoteVideoUrl>>,
    #[serde(rename = "holdreason")]
    pub hold_reason: Option<String>,
    #[serde(rename = "failreason")]
    pub fail_reason: Option<String>,
    pub mission_description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteAgency {
    pub id: Option<i64>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub agency_type: Option<String>,
    pub country_code: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteProgram {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub agencies: Option<Vec<RemoteAgency>>,
    pub image_url: Option<String>,
    pub wiki_url: Option<String>,
}

/// Older API revisions send bare strings, newer ones send link objects
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RemoteVideoUrl {
    Plain(String),
    Link {
        url: String,
        #[serde(default)]
        title: Option<String>,
    },
}

impl RemoteVideoUrl {
    pub fn url(&self) -> &str {
        match self {
            RemoteVideoUrl::Plain(url) => url,
            RemoteVideoUrl::Link { url, .. } => url,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteLauncherConfigPage {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub results: Vec<RemoteLauncherConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteLauncherConfig {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub family: Option<String>,
    pub variant: Option<String>,
    pub full_name: Option<String>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_upcoming_page() {
        let json = r#"{
            "count": 1,
            "next": "https://ll.thespacedevs.com/2.0.0/launch/upcoming/?offset=10",
            "results": [{
                "id": "e3df2ecd-c239-472f-95e4-2b89b4f75800",
                "name": "Falcon 9 Block 5 | Starlink Group 6-30",
                "status": {"id": 1, "name": "Go for Launch", "abbrev": "Go"},
                "net": "2024-01-03T03:44:00Z",
                "launch_service_provider": {"id": 121, "name": "SpaceX", "type": "Commercial"},
                "rocket": {"id": 7900, "configuration": {"id": 164, "name": "Falcon 9", "family": "Falcon", "variant": "Block 5"}},
                "mission": null,
                "pad": {"id": 80, "name": "Space Launch Complex 40", "location": {"id": 12, "name": "Cape Canaveral, FL, USA", "country_code": "USA"}},
                "image": null
            }]
        }"#;

        let page: RemoteLaunchPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 1);
        let launch = &page.results[0];
        assert_eq!(launch.name.as_deref(), Some("Falcon 9 Block 5 | Starlink Group 6-30"));
        assert!(launch.mission.is_none());
        let config = launch.rocket.as_ref().unwrap().configuration.as_ref().unwrap();
        assert_eq!(config.variant.as_deref(), Some("Block 5"));
    }

    #[test]
    fn test_missing_fields_still_parse() {
        let json = r#"{"results": [{"id": "x", "status": {}, "pad": {"location": {}}}]}"#;
        let page: RemoteLaunchPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 0);
        assert!(page.results[0].status.as_ref().unwrap().name.is_none());
    }

    #[test]
    fn test_video_urls_accept_both_shapes() {
        let json = r#"{
            "id": "x",
            "vidURLs": ["https://a.example/1", {"url": "https://a.example/2", "title": "Webcast", "priority": 10}]
        }"#;
        let detail: RemoteLaunchDetail = serde_json::from_str(json).unwrap();
        let urls: Vec<&str> = detail
            .vid_urls
            .as_ref()
            .unwrap()
            .iter()
            .map(RemoteVideoUrl::url)
            .collect();
        assert_eq!(urls, vec!["https://a.example/1", "https://a.example/2"]);
    }
}
