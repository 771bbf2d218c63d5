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

// [START language_syntax_gcs]
use crate::part_of_speech::tag_label;
use crate::{Error, Result};
use google_cloud_auth::credentials::Builder as AdcCredentialsBuilder;
use google_cloud_language_v1::client::LanguageService;
use google_cloud_language_v1::model::{Document, Token, document::Type};
use std::io::Write;

/// Finds the syntax in text stored in a Cloud Storage bucket.
///
/// # Parameters
/// * `gcs_uri`: the Cloud Storage object with the text.
///   For example: `gs://my-bucket/file_with_text.txt`.
/// * `project_id`: the project billed for the request. Uses the project
///   associated with the default credentials when `None`.
pub async fn sample(gcs_uri: &str, project_id: Option<&str>) -> Result<()> {
    if gcs_uri.is_empty() {
        return Err(Error::InvalidArgument(
            "the Cloud Storage URI must not be empty".to_string(),
        ));
    }
    let client = new_client(project_id).await?;
    report(client, gcs_uri, &mut std::io::stdout()).await
}

/// Analyzes the syntax of `gcs_uri` and writes one block per token to `out`.
///
/// Takes ownership of `client`, it is released when this function returns,
/// whether the analysis succeeds or not.
pub async fn report<W>(client: LanguageService, gcs_uri: &str, out: &mut W) -> Result<()>
where
    W: Write + ?Sized,
{
    let response = client
        .analyze_syntax()
        .set_document(
            Document::new()
                .set_type(Type::PlainText)
                .set_gcs_content_uri(gcs_uri),
        )
        .send()
        .await?;
    tracing::info!(
        tokens = response.tokens.len(),
        language = %response.language,
        "syntax analysis complete"
    );
    write_tokens(&response.tokens, out)
}

/// Writes the text and part of speech of each token, followed by a blank line.
///
/// The label is resolved before anything is written for a token. A token with
/// an unknown tag fails the call without leaving a partial block.
pub fn write_tokens<W>(tokens: &[Token], out: &mut W) -> Result<()>
where
    W: Write + ?Sized,
{
    for token in tokens {
        let label = match &token.part_of_speech {
            Some(pos) => tag_label(&pos.tag)?,
            None => tag_label(&Default::default())?,
        };
        let text = token
            .text
            .as_ref()
            .map(|t| t.content.as_str())
            .unwrap_or_default();
        writeln!(out, "Token text: {text}")?;
        writeln!(out, "Token part of speech: {label}")?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

async fn new_client(project_id: Option<&str>) -> Result<LanguageService> {
    let builder = LanguageService::builder();
    let builder = match quota_project(project_id) {
        None => builder,
        Some(project_id) => {
            tracing::info!("using {project_id} as the quota project");
            let credentials = AdcCredentialsBuilder::default()
                .with_quota_project_id(project_id)
                .build()?;
            builder.with_credentials(credentials)
        }
    };
    Ok(builder.build().await?)
}

// An empty project id means "use the default project".
fn quota_project(project_id: Option<&str>) -> Option<&str> {
    project_id.filter(|p| !p.is_empty())
}
// [END language_syntax_gcs]
