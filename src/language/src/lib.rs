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

//! Google Cloud Client Libraries for Rust - Cloud Natural Language API
//!
//! **WARNING:** this crate is under active development. We expect multiple
//! breaking changes in the upcoming releases. Testing is also incomplete, we do
//! **not** recommend that you use this crate in production. We welcome feedback
//! about the APIs, documentation, missing features, bugs, etc.
//!
//! This crate contains traits, types, and functions to run syntax analysis
//! with the [Cloud Natural Language API].
//!
//! The client only exposes the `AnalyzeSyntax` RPC of
//! `google.cloud.language.v1.LanguageService`. The RPC breaks a document
//! into sentences and tokens, and annotates each token with its part of
//! speech and its lemma.
//!
//! # Example
//! ```no_run
//! # tokio_test::block_on(async {
//! # use google_cloud_language_v1::client::LanguageService;
//! use google_cloud_language_v1::model::{Document, document::Type};
//! let client = LanguageService::builder().build().await?;
//! let response = client
//!     .analyze_syntax()
//!     .set_document(
//!         Document::new()
//!             .set_type(Type::PlainText)
//!             .set_gcs_content_uri("gs://my-bucket/my-file.txt"),
//!     )
//!     .send()
//!     .await?;
//! for token in response.tokens {
//!     println!("{token:?}");
//! }
//! # Ok::<(), anyhow::Error>(()) });
//! ```
//!
//! [Cloud Natural Language API]: https://cloud.google.com/natural-language

pub use gax::Result;
pub use gax::error::Error;

/// The messages and enums that are part of this client library.
pub mod model;

/// Request builders.
pub mod builder;

/// Concrete implementations of this client library traits.
pub mod client;

/// Traits to mock the clients in this library.
pub mod stub;

/// The default transport for the clients in this library.
pub(crate) mod transport;

/// A decorator to instrument the client stubs.
pub(crate) mod tracing;

/// The default host used by the service.
const DEFAULT_HOST: &str = "https://language.googleapis.com";

pub(crate) mod info {
    const NAME: &str = env!("CARGO_PKG_NAME");
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    lazy_static::lazy_static! {
        pub(crate) static ref X_GOOG_API_CLIENT_HEADER: String = {
            let ac = gaxi::api_header::XGoogApiClient{
                name:          NAME,
                version:       VERSION,
                library_type:  gaxi::api_header::GAPIC,
            };
            ac.rest_header_value()
        };
    }
}
