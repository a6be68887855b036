// SPDX-License-Identifier: MPL-2.0

//! Domain types shared by the repository and its callers.
//!
//! These are independent of both the wire format and the cache schema.

mod detail;
mod launch;
mod sort;

pub use detail::{
    Agency, LaunchDetail, LaunchServiceProvider, LauncherConfig, LocationDetail, MissionDetail,
    Orbit, PadDetail, Program, RocketConfigurationDetail, RocketDetail,
};
pub use launch::{Launch, LaunchStatus, Location, Mission, Pad, Rocket, RocketConfiguration};
pub use sort::SortOrder;
