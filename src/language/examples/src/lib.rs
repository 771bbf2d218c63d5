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

//! Samples for the Cloud Natural Language API.
//!
//! The `analyze_syntax_from_file` sample reads a text file from Cloud Storage,
//! runs syntax analysis on it, and prints the part of speech of each token.

pub mod analyze_syntax_from_file;
mod error;
pub mod part_of_speech;

pub use error::{Error, Result};
