// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use google_cloud_gax as gax;

/// The result type for the samples in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the samples in this crate.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The syntax analysis RPC failed.
    ///
    /// This covers transport, authentication, and service errors, such as an
    /// invalid or inaccessible Cloud Storage object.
    #[error("the syntax analysis request failed")]
    Service(#[from] gax::error::Error),

    /// The service returned a part of speech tag missing from the lookup table.
    ///
    /// This usually means the service added new tags and the table is out of
    /// date.
    #[error("part of speech tag {tag} is not in the lookup table")]
    Lookup { tag: String },

    /// The Natural Language client could not be created.
    #[error("cannot create the Natural Language client")]
    Client(#[from] gax::client_builder::Error),

    /// The credentials, configured with a quota project, could not be created.
    #[error("cannot create the credentials")]
    Credentials(#[from] google_cloud_auth::build_errors::Error),

    /// Writing the report failed.
    #[error("cannot write the report")]
    Io(#[from] std::io::Error),

    /// An argument was rejected before making any request.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub(crate) fn lookup<T: std::fmt::Display>(tag: T) -> Self {
        Self::Lookup {
            tag: tag.to_string(),
        }
    }

    /// Returns true if the service call failed.
    pub fn is_service(&self) -> bool {
        matches!(self, Self::Service(_))
    }

    /// Returns true if a part of speech tag could not be resolved.
    pub fn is_lookup(&self) -> bool {
        matches!(self, Self::Lookup { .. })
    }
}
