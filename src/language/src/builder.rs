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

pub mod language_service {
    use crate::Result;
    use std::sync::Arc;

    /// A builder for [LanguageService][crate::client::LanguageService].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_cloud_language_v1::*;
    /// # use builder::language_service::ClientBuilder;
    /// # use client::LanguageService;
    /// let builder : ClientBuilder = LanguageService::builder();
    /// let client = builder
    ///     .with_endpoint("https://language.googleapis.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::LanguageService;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = LanguageService;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::LanguageService] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: Arc<dyn crate::stub::dynamic::LanguageService>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::LanguageService>) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [LanguageService::analyze_syntax][crate::client::LanguageService::analyze_syntax] calls.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_language_v1::builder::language_service::AnalyzeSyntax;
    /// # async fn sample() -> gax::Result<()> {
    /// use google_cloud_language_v1::model::{Document, document::Type};
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder
    ///     .set_document(Document::new().set_type(Type::PlainText).set_content("Hello world"))
    ///     .send()
    ///     .await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> AnalyzeSyntax {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct AnalyzeSyntax(RequestBuilder<crate::model::AnalyzeSyntaxRequest>);

    impl AnalyzeSyntax {
        pub(crate) fn new(stub: Arc<dyn crate::stub::dynamic::LanguageService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::AnalyzeSyntaxRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::AnalyzeSyntaxResponse> {
            (*self.0.stub)
                .analyze_syntax(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [document][crate::model::AnalyzeSyntaxRequest::document].
        ///
        /// This is a **required** field for requests.
        pub fn set_document<T: Into<crate::model::Document>>(mut self, v: T) -> Self {
            self.0.request.document = Some(v.into());
            self
        }

        /// Sets or clears the value of [document][crate::model::AnalyzeSyntaxRequest::document].
        ///
        /// This is a **required** field for requests.
        pub fn set_or_clear_document<T: Into<crate::model::Document>>(
            mut self,
            v: Option<T>,
        ) -> Self {
            self.0.request.document = v.map(|x| x.into());
            self
        }

        /// Sets the value of [encoding_type][crate::model::AnalyzeSyntaxRequest::encoding_type].
        pub fn set_encoding_type<T: Into<crate::model::EncodingType>>(mut self, v: T) -> Self {
            self.0.request.encoding_type = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for AnalyzeSyntax {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
