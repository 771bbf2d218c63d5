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

/// A dyn-compatible, crate-private version of [super::LanguageService].
#[async_trait::async_trait]
pub trait LanguageService: std::fmt::Debug + Send + Sync {
    async fn analyze_syntax(
        &self,
        req: crate::model::AnalyzeSyntaxRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AnalyzeSyntaxResponse>>;
}

/// All implementations of [super::LanguageService] also implement [LanguageService].
#[async_trait::async_trait]
impl<T: super::LanguageService> LanguageService for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn analyze_syntax(
        &self,
        req: crate::model::AnalyzeSyntaxRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AnalyzeSyntaxResponse>> {
        T::analyze_syntax(self, req, options).await
    }
}
