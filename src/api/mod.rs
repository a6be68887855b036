// SPDX-License-Identifier: MPL-2.0

mod client;
mod types;

pub use client::{ClientError, LaunchApi, SpaceDevsClient};
pub use types::{
    RemoteAgency, RemoteLaunch, RemoteLaunchDetail, RemoteLaunchPage, RemoteLauncherConfig,
    RemoteLauncherConfigPage, RemoteLocation, RemoteMission, RemoteOrbit, RemotePad,
    RemoteProgram, RemoteProvider, RemoteRocket, RemoteRocketConfiguration, RemoteStatus,
    RemoteVideoUrl,
};
