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

//! Prints the part of speech of each token in a Cloud Storage text file.

use clap::Parser;
use language_samples::analyze_syntax_from_file;

const DESCRIPTION: &str = concat!(
    "Finds the syntax in text stored in a Cloud Storage bucket.",
    " Prints the text and part of speech of each token.",
    " Set GOOGLE_CLOUD_RUST_LOGGING=true and RUST_LOG=debug to trace the request."
);

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = DESCRIPTION)]
struct Args {
    /// The Cloud Storage URI of the text file, for example
    /// `gs://my-bucket/file_with_text.txt`.
    gcs_uri: String,

    /// The project billed for the request. Defaults to the project associated
    /// with the Application Default Credentials.
    project_id: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    enable_tracing()?;
    tracing::debug!("Configuration: {args:?}");

    analyze_syntax_from_file::sample(&args.gcs_uri, args.project_id.as_deref()).await?;
    Ok(())
}

// Logs go to stderr, stdout only carries the report.
fn enable_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_level(true)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command() {
        Args::command().debug_assert();
    }

    #[test]
    fn parse() -> anyhow::Result<()> {
        let args = Args::try_parse_from(["analyze_syntax_from_file", "gs://bucket/file.txt"])?;
        assert_eq!(args.gcs_uri, "gs://bucket/file.txt");
        assert_eq!(args.project_id, None);

        let args = Args::try_parse_from([
            "analyze_syntax_from_file",
            "gs://bucket/file.txt",
            "my-project",
        ])?;
        assert_eq!(args.project_id.as_deref(), Some("my-project"));
        Ok(())
    }

    #[test]
    fn missing_uri() {
        let err = Args::try_parse_from(["analyze_syntax_from_file"]).unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument,
            "{err}"
        );
    }

    #[test]
    fn long_help() {
        let help = Args::command().render_long_help().to_string();
        assert!(help.contains(DESCRIPTION), "{help}");
        assert!(help.contains("GCS_URI"), "{help}");
        assert!(help.contains("PROJECT_ID"), "{help}");
        assert!(help.contains("Application Default Credentials"), "{help}");
    }
}
