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

//! Human-readable labels for part of speech tags.

use crate::{Error, Result};
use google_cloud_language_v1::model::part_of_speech::Tag;

/// The label for each part of speech tag, indexed by the tag code.
pub static LABELS: [&str; 14] = [
    "UNKNOWN", "ADJ", "ADP", "ADV", "CONJ", "DET", "NOUN", "NUM", "PRON", "PRT", "PUNCT", "VERB",
    "X", "AFFIX",
];

/// Returns the label for a part of speech tag code.
///
/// Fails with [Error::Lookup] if `code` is not in `0..14`.
///
/// # Example
/// ```
/// # use language_samples::part_of_speech::label;
/// assert_eq!(label(11)?, "VERB");
/// assert!(label(99).is_err());
/// # language_samples::Result::<()>::Ok(())
/// ```
pub fn label(code: i32) -> Result<&'static str> {
    usize::try_from(code)
        .ok()
        .and_then(|i| LABELS.get(i))
        .copied()
        .ok_or_else(|| Error::lookup(code))
}

/// Returns the label for a tag decoded from the service.
///
/// Tags received as a name the client does not know have no code, and are
/// reported as [Error::Lookup] too.
pub fn tag_label(tag: &Tag) -> Result<&'static str> {
    match (tag.value(), tag.name()) {
        (Some(code), _) => label(code),
        (None, name) => Err(Error::lookup(name.unwrap_or_default())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, "UNKNOWN")]
    #[test_case(1, "ADJ")]
    #[test_case(2, "ADP")]
    #[test_case(3, "ADV")]
    #[test_case(4, "CONJ")]
    #[test_case(5, "DET")]
    #[test_case(6, "NOUN")]
    #[test_case(7, "NUM")]
    #[test_case(8, "PRON")]
    #[test_case(9, "PRT")]
    #[test_case(10, "PUNCT")]
    #[test_case(11, "VERB")]
    #[test_case(12, "X")]
    #[test_case(13, "AFFIX")]
    fn known(code: i32, want: &str) -> anyhow::Result<()> {
        assert_eq!(label(code)?, want);
        Ok(())
    }

    #[test_case(-1)]
    #[test_case(14)]
    #[test_case(99)]
    #[test_case(i32::MAX)]
    #[test_case(i32::MIN)]
    fn unknown(code: i32) {
        let err = label(code).unwrap_err();
        assert!(
            matches!(&err, Error::Lookup { tag } if tag == &code.to_string()),
            "{err:?}"
        );
    }

    #[test]
    fn labels_match_tag_names() {
        for (code, want) in LABELS.iter().enumerate() {
            let code = i32::try_from(code).unwrap();
            assert_eq!(Tag::from(code).name(), Some(*want), "{code}");
        }
    }

    #[test_case(Tag::Unknown, "UNKNOWN")]
    #[test_case(Tag::Noun, "NOUN")]
    #[test_case(Tag::Verb, "VERB")]
    #[test_case(Tag::Affix, "AFFIX")]
    fn tag_known(tag: Tag, want: &str) -> anyhow::Result<()> {
        assert_eq!(tag_label(&tag)?, want);
        Ok(())
    }

    #[test]
    fn tag_unknown_integer() {
        let err = tag_label(&Tag::from(99)).unwrap_err();
        assert!(
            matches!(&err, Error::Lookup { tag } if tag == "99"),
            "{err:?}"
        );
    }

    #[test]
    fn tag_unknown_name() {
        let err = tag_label(&Tag::from("INTERJECTION")).unwrap_err();
        assert!(
            matches!(&err, Error::Lookup { tag } if tag == "INTERJECTION"),
            "{err:?}"
        );
    }
}
