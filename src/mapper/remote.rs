// SPDX-License-Identifier: MPL-2.0

//! Wire → domain. Every function is total: missing fields get placeholder
//! values so one bad record cannot sink a whole page.

use crate::api::{
    RemoteAgency, RemoteLaunch, RemoteLaunchDetail, RemoteLauncherConfig, RemoteLocation,
    RemoteMission, RemotePad, RemoteProgram, RemoteProvider, RemoteRocket, RemoteStatus,
    RemoteVideoUrl,
};
use crate::model::{
    Agency, Launch, LaunchDetail, LaunchServiceProvider, LaunchStatus, LauncherConfig, Location,
    LocationDetail, Mission, MissionDetail, Orbit, Pad, PadDetail, Program, Rocket,
    RocketConfiguration, RocketConfigurationDetail, RocketDetail,
};

pub const UNKNOWN: &str = "Unknown";
pub const UNKNOWN_ID: &str = "unknown";
pub const UNKNOWN_PROVIDER: &str = "Unknown Provider";
pub const UNKNOWN_MISSION: &str = "Unknown Mission";
pub const UNKNOWN_ROCKET: &str = "Unknown Rocket";
pub const UNKNOWN_PAD: &str = "Unknown Pad";
pub const UNKNOWN_LOCATION: &str = "Unknown Location";
pub const UNNAMED_LAUNCH: &str = "Unnamed Launch";

fn or_default(value: Option<String>, default: &str) -> String {
    value.unwrap_or_else(|| default.to_string())
}

fn status(remote: Option<RemoteStatus>) -> LaunchStatus {
    let remote = remote.unwrap_or_default();
    LaunchStatus {
        name: or_default(remote.name, UNKNOWN),
        description: remote.description,
    }
}

fn location(remote: Option<RemoteLocation>) -> Location {
    let remote = remote.unwrap_or_default();
    Location {
        name: or_default(remote.name, UNKNOWN_LOCATION),
        country: or_default(remote.country_code, UNKNOWN),
    }
}

fn pad(remote: Option<RemotePad>) -> Pad {
    let remote = remote.unwrap_or_default();
    Pad {
        name: or_default(remote.name, UNKNOWN_PAD),
        location: location(remote.location),
    }
}

fn mission(remote: RemoteMission) -> Mission {
    Mission {
        name: or_default(remote.name, UNKNOWN_MISSION),
        description: remote.description,
        mission_type: remote.mission_type,
    }
}

fn rocket(remote: RemoteRocket) -> Rocket {
    let config = remote.configuration.unwrap_or_default();
    Rocket {
        configuration: RocketConfiguration {
            name: or_default(config.name, UNKNOWN_ROCKET),
            family: config.family,
            variant: config.variant,
        },
    }
}

/// Map one entry of the upcoming launch list
pub fn launch_from_remote(remote: RemoteLaunch) -> Launch {
    Launch {
        id: or_default(remote.id, UNKNOWN_ID),
        name: or_default(remote.name, UNNAMED_LAUNCH),
        status: status(remote.status),
        launch_service_provider: remote
            .launch_service_provider
            .and_then(|p| p.name)
            .unwrap_or_else(|| UNKNOWN_PROVIDER.to_string()),
        mission: remote.mission.map(mission),
        rocket: remote.rocket.map(rocket),
        pad: pad(remote.pad),
        net: remote.net.unwrap_or_default(),
        image: remote.image,
    }
}

fn provider(remote: Option<RemoteProvider>) -> LaunchServiceProvider {
    let remote = remote.unwrap_or_default();
    LaunchServiceProvider {
        id: remote.id.unwrap_or(0),
        name: or_default(remote.name, UNKNOWN_PROVIDER),
        provider_type: remote.provider_type,
        country_code: remote.country_code,
        description: remote.description,
        website: remote.info_url,
        wiki_url: remote.wiki_url,
    }
}

fn agency(remote: RemoteAgency) -> Agency {
    Agency {
        id: remote.id.unwrap_or(0),
        name: or_default(remote.name, UNKNOWN),
        agency_type: remote.agency_type,
        country_code: remote.country_code,
        description: remote.description,
    }
}

fn agencies(remote: Option<Vec<RemoteAgency>>) -> Vec<Agency> {
    remote.unwrap_or_default().into_iter().map(agency).collect()
}

fn mission_detail(remote: RemoteMission) -> MissionDetail {
    MissionDetail {
        id: remote.id.unwrap_or(0),
        name: or_default(remote.name, UNKNOWN_MISSION),
        description: remote.description,
        mission_type: remote.mission_type,
        orbit: remote.orbit.map(|o| Orbit {
            id: o.id,
            name: o.name,
            abbreviation: o.abbrev,
        }),
        agencies: agencies(remote.agencies),
    }
}

fn rocket_detail(remote: RemoteRocket) -> RocketDetail {
    let config = remote.configuration.unwrap_or_default();
    RocketDetail {
        id: remote.id.unwrap_or(0),
        configuration: RocketConfigurationDetail {
            id: config.id.unwrap_or(0),
            name: or_default(config.name, UNKNOWN_ROCKET),
            family: config.family,
            variant: config.variant,
            full_name: config.full_name,
            description: config.description,
            launch_mass: config.launch_mass,
            length: config.length,
            diameter: config.diameter,
            image_url: config.image_url,
            info_url: config.info_url,
            wiki_url: config.wiki_url,
        },
    }
}

fn pad_detail(remote: Option<RemotePad>) -> PadDetail {
    let remote = remote.unwrap_or_default();
    let location = remote.location.unwrap_or_default();
    PadDetail {
        id: remote.id.unwrap_or(0),
        name: or_default(remote.name, UNKNOWN_PAD),
        location: LocationDetail {
            id: location.id.unwrap_or(0),
            name: or_default(location.name, UNKNOWN_LOCATION),
            country_code: or_default(location.country_code, UNKNOWN),
            description: location.description,
            map_image: location.map_image,
            total_launch_count: location.total_launch_count,
            total_landing_count: location.total_landing_count,
        },
        map_url: remote.map_url,
        total_launch_count: remote.total_launch_count,
    }
}

fn program(remote: RemoteProgram) -> Program {
    Program {
        id: remote.id.unwrap_or(0),
        name: or_default(remote.name, UNKNOWN),
        description: remote.description,
        agencies: agencies(remote.agencies),
        image_url: remote.image_url,
        wiki_url: remote.wiki_url,
    }
}

/// Map the single-launch payload
pub fn detail_from_remote(remote: RemoteLaunchDetail) -> LaunchDetail {
    LaunchDetail {
        id: or_default(remote.id, UNKNOWN_ID),
        name: or_default(remote.name, UNNAMED_LAUNCH),
        status: status(remote.status),
        launch_service_provider: provider(remote.launch_service_provider),
        mission: remote.mission.map(mission_detail),
        rocket: remote.rocket.map(rocket_detail),
        pad: pad_detail(remote.pad),
        window_start: remote.window_start.unwrap_or_default(),
        window_end: remote.window_end.unwrap_or_default(),
        net: remote.net.unwrap_or_default(),
        image: remote.image,
        infographic: remote.infographic,
        programs: remote
            .program
            .unwrap_or_default()
            .into_iter()
            .map(program)
            .collect(),
        video_urls: remote
            .vid_urls
            .unwrap_or_default()
            .iter()
            .map(RemoteVideoUrl::url)
            .map(String::from)
            .collect(),
        hold_reason: remote.hold_reason.filter(|r| !r.is_empty()),
        fail_reason: remote.fail_reason.filter(|r| !r.is_empty()),
        description: remote.mission_description,
    }
}

pub fn launcher_config_from_remote(remote: RemoteLauncherConfig) -> LauncherConfig {
    LauncherConfig {
        id: remote.id.unwrap_or(0),
        name: or_default(remote.name, UNKNOWN_ROCKET),
        family: remote.family,
        variant: remote.variant,
        full_name: remote.full_name,
        description: remote.description,
    }
}
