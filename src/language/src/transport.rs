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

use crate::Result;

/// Implements [LanguageService](super::stub::LanguageService) using a [gaxi::http::ReqwestClient].
#[derive(Clone, Debug)]
pub struct LanguageService {
    inner: gaxi::http::ReqwestClient,
}

impl LanguageService {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

impl super::stub::LanguageService for LanguageService {
    async fn analyze_syntax(
        &self,
        req: crate::model::AnalyzeSyntaxRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AnalyzeSyntaxResponse>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let path = "/v1/documents:analyzeSyntax".to_string();
        let builder = self
            .inner
            .builder(http::Method::POST, path)
            .query(&[("$alt", "json;enum-encoding=int")])
            .header(
                "x-goog-api-client",
                crate::info::X_GOOG_API_CLIENT_HEADER.as_str(),
            );
        self.inner.execute(builder, Some(req), options).await
    }
}
