// SPDX-License-Identifier: MPL-2.0

//! Conversions between wire types, domain types and cache rows

mod cached;
mod remote;

pub use cached::{
    cached_detail_from_domain, cached_launch_from_domain, detail_from_cached, launch_from_cached,
};
pub use remote::{
    UNKNOWN, UNKNOWN_ID, UNKNOWN_LOCATION, UNKNOWN_MISSION, UNKNOWN_PAD, UNKNOWN_PROVIDER,
    UNKNOWN_ROCKET, UNNAMED_LAUNCH, detail_from_remote, launch_from_remote,
    launcher_config_from_remote,
};
