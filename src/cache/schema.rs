// SPDX-License-Identifier: MPL-2.0

/// Current value of `PRAGMA user_version`
pub const SCHEMA_VERSION: i32 = 2;

/// Version 1: launch summaries and favorites
pub const SCHEMA_V1: &str = r#"
-- cached_launches: flattened launch summaries, replaced on every fetch
CREATE TABLE IF NOT EXISTS cached_launches (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    status_name TEXT NOT NULL,
    status_description TEXT,
    launch_service_provider TEXT NOT NULL,
    mission_name TEXT,
    mission_description TEXT,
    mission_type TEXT,
    rocket_name TEXT,
    rocket_family TEXT,
    rocket_variant TEXT,
    pad_name TEXT NOT NULL,
    location_name TEXT NOT NULL,
    country TEXT NOT NULL,
    net TEXT NOT NULL,
    image TEXT,
    cached_at INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_cached_launches_cached_at ON cached_launches(cached_at DESC);

-- favorite_launches: user markers, no foreign key so they outlive cache eviction
CREATE TABLE IF NOT EXISTS favorite_launches (
    launch_id TEXT PRIMARY KEY,
    added_at INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_favorite_launches_added_at ON favorite_launches(added_at DESC);
"#;

/// Version 2: adds launch details, existing tables untouched
pub const MIGRATION_V2: &str = r#"
CREATE TABLE IF NOT EXISTS cached_launch_details (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    status_name TEXT NOT NULL,
    status_description TEXT,
    provider_id INTEGER NOT NULL,
    provider_name TEXT NOT NULL,
    provider_type TEXT,
    provider_country_code TEXT,
    mission_name TEXT,
    mission_description TEXT,
    mission_type TEXT,
    rocket_name TEXT,
    rocket_family TEXT,
    pad_name TEXT NOT NULL,
    location_name TEXT NOT NULL,
    country_code TEXT NOT NULL,
    window_start TEXT NOT NULL,
    window_end TEXT NOT NULL,
    net TEXT NOT NULL,
    image TEXT,
    infographic TEXT,
    description TEXT,
    cached_at INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_cached_launch_details_cached_at ON cached_launch_details(cached_at);
"#;
