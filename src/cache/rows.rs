// SPDX-License-Identifier: MPL-2.0

//! Flat row types for the cache tables.
//!
//! Nested domain objects are flattened into nullable scalar columns. Lists
//! (agencies, programs, video URLs) have no columns and do not survive a
//! trip through the cache.

/// Row in `cached_launches`
#[derive(Debug, Clone, PartialEq)]
pub struct CachedLaunch {
    pub id: String,
    pub name: String,
    pub status_name: String,
    pub status_description: Option<String>,
    pub launch_service_provider: String,
    pub mission_name: Option<String>,
    pub mission_description: Option<String>,
    pub mission_type: Option<String>,
    pub rocket_name: Option<String>,
    pub rocket_family: Option<String>,
    pub rocket_variant: Option<String>,
    pub pad_name: String,
    pub location_name: String,
    pub country: String,
    pub net: String,
    pub image: Option<String>,
    /// Unix millis at write time
    pub cached_at: i64,
}

/// Row in `cached_launch_details`
#[derive(Debug, Clone, PartialEq)]
pub struct CachedLaunchDetail {
    pub id: String,
    pub name: String,
    pub status_name: String,
    pub status_description: Option<String>,
    pub provider_id: i64,
    pub provider_name: String,
    pub provider_type: Option<String>,
    pub provider_country_code: Option<String>,
    pub mission_name: Option<String>,
    pub mission_description: Option<String>,
    pub mission_type: Option<String>,
    pub rocket_name: Option<String>,
    pub rocket_family: Option<String>,
    pub pad_name: String,
    pub location_name: String,
    pub country_code: String,
    pub window_start: String,
    pub window_end: String,
    pub net: String,
    pub image: Option<String>,
    pub infographic: Option<String>,
    pub description: Option<String>,
    pub cached_at: i64,
}

/// Row in `favorite_launches`. May reference a launch that is no longer cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteMarker {
    pub launch_id: String,
    pub added_at: i64,
}
