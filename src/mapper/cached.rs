// SPDX-License-Identifier: MPL-2.0

//! Domain ↔ cache rows.
//!
//! Rows hold a flattened subset of the domain types, so reading a row back
//! yields `None` and empty lists for everything without a column. Writing
//! what was read back produces the same row again.

use crate::cache::{CachedLaunch, CachedLaunchDetail};
use crate::model::{
    Launch, LaunchDetail, LaunchServiceProvider, LaunchStatus, Location, LocationDetail, Mission,
    MissionDetail, Pad, PadDetail, Rocket, RocketConfiguration, RocketConfigurationDetail,
    RocketDetail,
};

pub fn cached_launch_from_domain(launch: &Launch, cached_at: i64) -> CachedLaunch {
    let mission = launch.mission.as_ref();
    let config = launch.rocket.as_ref().map(|r| &r.configuration);

    CachedLaunch {
        id: launch.id.clone(),
        name: launch.name.clone(),
        status_name: launch.status.name.clone(),
        status_description: launch.status.description.clone(),
        launch_service_provider: launch.launch_service_provider.clone(),
        mission_name: mission.map(|m| m.name.clone()),
        mission_description: mission.and_then(|m| m.description.clone()),
        mission_type: mission.and_then(|m| m.mission_type.clone()),
        rocket_name: config.map(|c| c.name.clone()),
        rocket_family: config.and_then(|c| c.family.clone()),
        rocket_variant: config.and_then(|c| c.variant.clone()),
        pad_name: launch.pad.name.clone(),
        location_name: launch.pad.location.name.clone(),
        country: launch.pad.location.country.clone(),
        net: launch.net.clone(),
        image: launch.image.clone(),
        cached_at,
    }
}

pub fn launch_from_cached(row: CachedLaunch) -> Launch {
    let mission = row.mission_name.map(|name| Mission {
        name,
        description: row.mission_description,
        mission_type: row.mission_type,
    });
    let rocket = row.rocket_name.map(|name| Rocket {
        configuration: RocketConfiguration {
            name,
            family: row.rocket_family,
            variant: row.rocket_variant,
        },
    });

    Launch {
        id: row.id,
        name: row.name,
        status: LaunchStatus {
            name: row.status_name,
            description: row.status_description,
        },
        launch_service_provider: row.launch_service_provider,
        mission,
        rocket,
        pad: Pad {
            name: row.pad_name,
            location: Location {
                name: row.location_name,
                country: row.country,
            },
        },
        net: row.net,
        image: row.image,
    }
}

pub fn cached_detail_from_domain(detail: &LaunchDetail, cached_at: i64) -> CachedLaunchDetail {
    let provider = &detail.launch_service_provider;
    let mission = detail.mission.as_ref();
    let config = detail.rocket.as_ref().map(|r| &r.configuration);

    CachedLaunchDetail {
        id: detail.id.clone(),
        name: detail.name.clone(),
        status_name: detail.status.name.clone(),
        status_description: detail.status.description.clone(),
        provider_id: provider.id,
        provider_name: provider.name.clone(),
        provider_type: provider.provider_type.clone(),
        provider_country_code: provider.country_code.clone(),
        mission_name: mission.map(|m| m.name.clone()),
        mission_description: mission.and_then(|m| m.description.clone()),
        mission_type: mission.and_then(|m| m.mission_type.clone()),
        rocket_name: config.map(|c| c.name.clone()),
        rocket_family: config.and_then(|c| c.family.clone()),
        pad_name: detail.pad.name.clone(),
        location_name: detail.pad.location.name.clone(),
        country_code: detail.pad.location.country_code.clone(),
        window_start: detail.window_start.clone(),
        window_end: detail.window_end.clone(),
        net: detail.net.clone(),
        image: detail.image.clone(),
        infographic: detail.infographic.clone(),
        description: detail.description.clone(),
        cached_at,
    }
}

pub fn detail_from_cached(row: CachedLaunchDetail) -> LaunchDetail {
    let mission = row.mission_name.map(|name| MissionDetail {
        id: 0,
        name,
        description: row.mission_description,
        mission_type: row.mission_type,
        orbit: None,
        agencies: Vec::new(),
    });
    let rocket = row.rocket_name.map(|name| RocketDetail {
        id: 0,
        configuration: RocketConfigurationDetail {
            id: 0,
            name,
            family: row.rocket_family,
            variant: None,
            full_name: None,
            description: None,
            launch_mass: None,
            length: None,
            diameter: None,
            image_url: None,
            info_url: None,
            wiki_url: None,
        },
    });

    LaunchDetail {
        id: row.id,
        name: row.name,
        status: LaunchStatus {
            name: row.status_name,
            description: row.status_description,
        },
        launch_service_provider: LaunchServiceProvider {
            id: row.provider_id,
            name: row.provider_name,
            provider_type: row.provider_type,
            country_code: row.provider_country_code,
            description: None,
            website: None,
            wiki_url: None,
        },
        mission,
        rocket,
        pad: PadDetail {
            id: 0,
            name: row.pad_name,
            location: LocationDetail {
                id: 0,
                name: row.location_name,
                country_code: row.country_code,
                description: None,
                map_image: None,
                total_launch_count: None,
                total_landing_count: None,
            },
            map_url: None,
            total_launch_count: None,
        },
        window_start: row.window_start,
        window_end: row.window_end,
        net: row.net,
        image: row.image,
        infographic: row.infographic,
        programs: Vec::new(),
        video_urls: Vec::new(),
        hold_reason: None,
        fail_reason: None,
        description: row.description,
    }
}
