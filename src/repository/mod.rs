// SPDX-License-Identifier: MPL-2.0

mod error;
mod launches;

pub use error::RepositoryError;
pub use launches::LaunchRepository;
