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

/// Defines an open enumeration.
///
/// Services add new enum values over time. The generated type keeps any value
/// it does not recognize in an `UnknownValue` variant, and preserves it on
/// serialization, instead of failing to decode the message.
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($full_name:literal) in $module:ident {
            $( $(#[$vmeta:meta])* $variant:ident = ($value:literal, $str:literal), )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        #[non_exhaustive]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// If set, the enum was initialized with an unknown value.
            ///
            /// Applications can examine the value using `value()` or `name()`.
            UnknownValue($module::UnknownValue),
        }

        #[doc(hidden)]
        pub mod $module {
            #[derive(Clone, Debug, PartialEq)]
            pub struct UnknownValue(pub(crate) wkt::internal::UnknownEnumValue);
        }

        impl $name {
            /// Gets the enum value.
            ///
            /// Returns `None` if the enum contains an unknown value deserialized from
            /// the string representation of enums.
            pub fn value(&self) -> std::option::Option<i32> {
                match self {
                    $( Self::$variant => std::option::Option::Some($value), )+
                    Self::UnknownValue(u) => u.0.value(),
                }
            }

            /// Gets the enum value as a string.
            ///
            /// Returns `None` if the enum contains an unknown value deserialized from
            /// the integer representation of enums.
            pub fn name(&self) -> std::option::Option<&str> {
                match self {
                    $( Self::$variant => std::option::Option::Some($str), )+
                    Self::UnknownValue(u) => u.0.name(),
                }
            }
        }

        impl std::default::Default for $name {
            fn default() -> Self {
                use std::convert::From;
                Self::from(0)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
                wkt::internal::display_enum(f, self.name(), self.value())
            }
        }

        impl std::convert::From<i32> for $name {
            fn from(value: i32) -> Self {
                match value {
                    $( $value => Self::$variant, )+
                    _ => Self::UnknownValue($module::UnknownValue(
                        wkt::internal::UnknownEnumValue::Integer(value),
                    )),
                }
            }
        }

        impl std::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                use std::string::ToString;
                match value {
                    $( $str => Self::$variant, )+
                    _ => Self::UnknownValue($module::UnknownValue(
                        wkt::internal::UnknownEnumValue::String(value.to_string()),
                    )),
                }
            }
        }

        impl serde::ser::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                match self.value() {
                    std::option::Option::Some(v) => serializer.serialize_i32(v),
                    std::option::Option::None => {
                        serializer.serialize_str(self.name().unwrap_or_default())
                    }
                }
            }
        }

        impl<'de> serde::de::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                deserializer.deserialize_any(wkt::internal::EnumVisitor::<$name>::new(
                    $full_name,
                ))
            }
        }
    };
}

/// Represents the input to API methods.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Document {
    /// Required. If the type is not set or is `TYPE_UNSPECIFIED`,
    /// returns an `INVALID_ARGUMENT` error.
    #[serde(rename = "type")]
    pub r#type: document::Type,

    /// The language of the document (if not specified, the language is
    /// automatically detected). Both ISO and BCP-47 language codes are
    /// accepted.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub language: String,

    /// The source of the document: a string containing the content or a
    /// Google Cloud Storage URI.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub source: Option<document::Source>,
}

impl Document {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [r#type][Document::r#type].
    pub fn set_type<T: Into<document::Type>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }

    /// Sets the value of [language][Document::language].
    pub fn set_language<T: Into<String>>(mut self, v: T) -> Self {
        self.language = v.into();
        self
    }

    /// Sets the value of [source][Document::source].
    ///
    /// Note that all the setters affecting `source` are mutually
    /// exclusive.
    pub fn set_source<T: Into<Option<document::Source>>>(mut self, v: T) -> Self {
        self.source = v.into();
        self
    }

    /// The value of [source][Document::source]
    /// if it holds a `Content`, `None` if the field is not set or
    /// holds a different branch.
    pub fn content(&self) -> Option<&String> {
        self.source.as_ref().and_then(|v| match v {
            document::Source::Content(v) => Some(v),
            _ => None,
        })
    }

    /// Sets the value of [source][Document::source]
    /// to hold a `Content`.
    ///
    /// Note that all the setters affecting `source` are
    /// mutually exclusive.
    pub fn set_content<T: Into<String>>(mut self, v: T) -> Self {
        self.source = Some(document::Source::Content(v.into()));
        self
    }

    /// The value of [source][Document::source]
    /// if it holds a `GcsContentUri`, `None` if the field is not set or
    /// holds a different branch.
    pub fn gcs_content_uri(&self) -> Option<&String> {
        self.source.as_ref().and_then(|v| match v {
            document::Source::GcsContentUri(v) => Some(v),
            _ => None,
        })
    }

    /// Sets the value of [source][Document::source]
    /// to hold a `GcsContentUri`.
    ///
    /// Note that all the setters affecting `source` are
    /// mutually exclusive.
    pub fn set_gcs_content_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.source = Some(document::Source::GcsContentUri(v.into()));
        self
    }
}

/// Defines additional types related to [Document].
pub mod document {
    open_enum! {
        /// The document types enum.
        pub enum Type (".google.cloud.language.v1.Document.Type") in r#type {
            /// The content type is not specified.
            Unspecified = (0, "TYPE_UNSPECIFIED"),
            /// Plain text
            PlainText = (1, "PLAIN_TEXT"),
            /// HTML
            Html = (2, "HTML"),
        }
    }

    /// The source of the document: a string containing the content or a
    /// Google Cloud Storage URI.
    #[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[non_exhaustive]
    pub enum Source {
        /// The content of the input in string format.
        /// Cloud audit logging exempt since it is based on user data.
        Content(String),
        /// The Google Cloud Storage URI where the file content is located.
        /// This URI must be of the form: `gs://bucket_name/object_name`. For more
        /// details, see <https://cloud.google.com/storage/docs/reference-uris>.
        /// NOTE: Cloud Storage object versioning is not supported.
        GcsContentUri(String),
    }
}

open_enum! {
    /// Represents the text encoding that the caller uses to process the output.
    /// Providing an `EncodingType` is recommended because the API provides the
    /// beginning offsets for various outputs, such as tokens and mentions, and
    /// languages that natively use different text encodings may access offsets
    /// differently.
    pub enum EncodingType (".google.cloud.language.v1.EncodingType") in encoding_type {
        /// If `EncodingType` is not specified, encoding-dependent information (such as
        /// `begin_offset`) will be set at `-1`.
        None = (0, "NONE"),
        /// Encoding-dependent information (such as `begin_offset`) is calculated based
        /// on the UTF-8 encoding of the input.
        Utf8 = (1, "UTF8"),
        /// Encoding-dependent information (such as `begin_offset`) is calculated based
        /// on the UTF-16 encoding of the input.
        Utf16 = (2, "UTF16"),
        /// Encoding-dependent information (such as `begin_offset`) is calculated based
        /// on the UTF-32 encoding of the input.
        Utf32 = (3, "UTF32"),
    }
}

/// The syntax analysis request message.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AnalyzeSyntaxRequest {
    /// Required. Input document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Document>,

    /// The encoding type used by the API to calculate offsets.
    pub encoding_type: EncodingType,
}

impl AnalyzeSyntaxRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [document][AnalyzeSyntaxRequest::document].
    pub fn set_document<T: Into<Document>>(mut self, v: T) -> Self {
        self.document = Some(v.into());
        self
    }

    /// Sets or clears the value of [document][AnalyzeSyntaxRequest::document].
    pub fn set_or_clear_document<T: Into<Document>>(mut self, v: Option<T>) -> Self {
        self.document = v.map(|x| x.into());
        self
    }

    /// Sets the value of [encoding_type][AnalyzeSyntaxRequest::encoding_type].
    pub fn set_encoding_type<T: Into<EncodingType>>(mut self, v: T) -> Self {
        self.encoding_type = v.into();
        self
    }
}

/// The syntax analysis response message.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AnalyzeSyntaxResponse {
    /// Sentences in the input document.
    pub sentences: Vec<Sentence>,

    /// Tokens, along with their syntactic information, in the input document.
    pub tokens: Vec<Token>,

    /// The language of the text, which will be the same as the language specified
    /// in the request or, if not specified, the automatically-detected language.
    pub language: String,
}

impl AnalyzeSyntaxResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [sentences][AnalyzeSyntaxResponse::sentences].
    pub fn set_sentences<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Sentence>,
    {
        self.sentences = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [tokens][AnalyzeSyntaxResponse::tokens].
    pub fn set_tokens<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Token>,
    {
        self.tokens = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [language][AnalyzeSyntaxResponse::language].
    pub fn set_language<T: Into<String>>(mut self, v: T) -> Self {
        self.language = v.into();
        self
    }
}

/// Represents a sentence in the input document.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Sentence {
    /// The sentence text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextSpan>,
}

impl Sentence {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [text][Sentence::text].
    pub fn set_text<T: Into<TextSpan>>(mut self, v: T) -> Self {
        self.text = Some(v.into());
        self
    }
}

/// Represents the smallest syntactic building block of the text.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Token {
    /// The token text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextSpan>,

    /// Parts of speech tag for this token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<PartOfSpeech>,

    /// [Lemma](https://en.wikipedia.org/wiki/Lemma_%28morphology%29) of the token.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub lemma: String,
}

impl Token {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [text][Token::text].
    pub fn set_text<T: Into<TextSpan>>(mut self, v: T) -> Self {
        self.text = Some(v.into());
        self
    }

    /// Sets the value of [part_of_speech][Token::part_of_speech].
    pub fn set_part_of_speech<T: Into<PartOfSpeech>>(mut self, v: T) -> Self {
        self.part_of_speech = Some(v.into());
        self
    }

    /// Sets the value of [lemma][Token::lemma].
    pub fn set_lemma<T: Into<String>>(mut self, v: T) -> Self {
        self.lemma = v.into();
        self
    }
}

/// Represents a text span in the input document.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TextSpan {
    /// The content of the text span, which is a substring of the document.
    pub content: String,

    /// The API calculates the beginning offset of the content in the original
    /// document according to the
    /// [EncodingType][crate::model::EncodingType] specified in the API
    /// request.
    pub begin_offset: i32,
}

impl TextSpan {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [content][TextSpan::content].
    pub fn set_content<T: Into<String>>(mut self, v: T) -> Self {
        self.content = v.into();
        self
    }

    /// Sets the value of [begin_offset][TextSpan::begin_offset].
    pub fn set_begin_offset<T: Into<i32>>(mut self, v: T) -> Self {
        self.begin_offset = v.into();
        self
    }
}

/// Represents part of speech information for a token. Parts of speech
/// are as defined in
/// <http://www.lrec-conf.org/proceedings/lrec2012/pdf/274_Paper.pdf>
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PartOfSpeech {
    /// The part of speech tag.
    pub tag: part_of_speech::Tag,
}

impl PartOfSpeech {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [tag][PartOfSpeech::tag].
    pub fn set_tag<T: Into<part_of_speech::Tag>>(mut self, v: T) -> Self {
        self.tag = v.into();
        self
    }
}

/// Defines additional types related to [PartOfSpeech].
pub mod part_of_speech {
    open_enum! {
        /// The part of speech tags enum.
        pub enum Tag (".google.cloud.language.v1.PartOfSpeech.Tag") in tag {
            /// Unknown
            Unknown = (0, "UNKNOWN"),
            /// Adjective
            Adj = (1, "ADJ"),
            /// Adposition (preposition and postposition)
            Adp = (2, "ADP"),
            /// Adverb
            Adv = (3, "ADV"),
            /// Conjunction
            Conj = (4, "CONJ"),
            /// Determiner
            Det = (5, "DET"),
            /// Noun (common and proper)
            Noun = (6, "NOUN"),
            /// Cardinal number
            Num = (7, "NUM"),
            /// Pronoun
            Pron = (8, "PRON"),
            /// Particle or other function word
            Prt = (9, "PRT"),
            /// Punctuation
            Punct = (10, "PUNCT"),
            /// Verb (all tenses and modes)
            Verb = (11, "VERB"),
            /// Other: foreign words, typos, abbreviations
            X = (12, "X"),
            /// Affix
            Affix = (13, "AFFIX"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use part_of_speech::Tag;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(0, Tag::Unknown, "UNKNOWN")]
    #[test_case(1, Tag::Adj, "ADJ")]
    #[test_case(6, Tag::Noun, "NOUN")]
    #[test_case(11, Tag::Verb, "VERB")]
    #[test_case(13, Tag::Affix, "AFFIX")]
    fn tag_known(value: i32, want: Tag, name: &str) {
        let got = Tag::from(value);
        assert_eq!(got, want);
        assert_eq!(got.value(), Some(value));
        assert_eq!(got.name(), Some(name));
        assert_eq!(Tag::from(name), want);
        assert_eq!(format!("{got}"), name);
    }

    #[test]
    fn tag_unknown_integer() {
        let got = Tag::from(99);
        assert!(matches!(got, Tag::UnknownValue(_)), "{got:?}");
        assert_eq!(got.value(), Some(99));
        assert_eq!(got.name(), None);
        assert_eq!(format!("{got}"), "99");
    }

    #[test]
    fn tag_unknown_name() {
        let got = Tag::from("TAG_FROM_THE_FUTURE");
        assert!(matches!(got, Tag::UnknownValue(_)), "{got:?}");
        assert_eq!(got.value(), None);
        assert_eq!(got.name(), Some("TAG_FROM_THE_FUTURE"));
        assert_eq!(format!("{got}"), "TAG_FROM_THE_FUTURE");
        assert_eq!(got, Tag::from("TAG_FROM_THE_FUTURE"));
        assert_ne!(got, Tag::from("ANOTHER_TAG"));
    }

    #[test]
    fn enum_defaults() {
        assert_eq!(Tag::default(), Tag::Unknown);
        assert_eq!(document::Type::default(), document::Type::Unspecified);
        assert_eq!(EncodingType::default(), EncodingType::None);
    }

    #[test_case(json!(11), Tag::Verb, json!(11))]
    #[test_case(json!("VERB"), Tag::Verb, json!(11))]
    #[test_case(json!(99), Tag::from(99), json!(99))]
    #[test_case(json!("TAG_FROM_THE_FUTURE"), Tag::from("TAG_FROM_THE_FUTURE"), json!("TAG_FROM_THE_FUTURE"))]
    fn tag_serde(input: serde_json::Value, want: Tag, serialized: serde_json::Value) -> anyhow::Result<()> {
        let got = serde_json::from_value::<Tag>(input)?;
        assert_eq!(got, want);
        assert_eq!(serde_json::to_value(&got)?, serialized);
        Ok(())
    }

    #[test_case(json!(i32::MAX as i64 + 1))]
    #[test_case(json!(-1_i64 + i32::MIN as i64))]
    #[test_case(json!({}))]
    fn tag_deserialize_invalid(input: serde_json::Value) {
        let got = serde_json::from_value::<Tag>(input);
        assert!(got.is_err(), "{got:?}");
        let msg = format!("{got:?}");
        assert!(msg.contains(".google.cloud.language.v1.PartOfSpeech.Tag"), "{msg}");
    }

    #[test]
    fn request_serialize() -> anyhow::Result<()> {
        let request = AnalyzeSyntaxRequest::new()
            .set_document(
                Document::new()
                    .set_type(document::Type::PlainText)
                    .set_gcs_content_uri("gs://bucket/object.txt"),
            )
            .set_encoding_type(EncodingType::Utf8);
        let got = serde_json::to_value(&request)?;
        let want = json!({
            "document": {
                "type": 1,
                "gcsContentUri": "gs://bucket/object.txt",
            },
            "encodingType": 1,
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn document_source_is_exclusive() {
        let document = Document::new()
            .set_content("the quick brown fox")
            .set_gcs_content_uri("gs://bucket/object.txt");
        assert_eq!(document.content(), None);
        assert_eq!(
            document.gcs_content_uri().map(String::as_str),
            Some("gs://bucket/object.txt")
        );

        let document = document.set_content("the quick brown fox");
        assert_eq!(
            document.content().map(String::as_str),
            Some("the quick brown fox")
        );
        assert_eq!(document.gcs_content_uri(), None);
    }

    #[test]
    fn document_deserialize() -> anyhow::Result<()> {
        let input = json!({
            "type": "HTML",
            "content": "<p>hello</p>",
            "language": "en",
        });
        let got = serde_json::from_value::<Document>(input)?;
        let want = Document::new()
            .set_type(document::Type::Html)
            .set_content("<p>hello</p>")
            .set_language("en");
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn response_deserialize() -> anyhow::Result<()> {
        let input = json!({
            "sentences": [{
                "text": {"content": "Hello world.", "beginOffset": 0},
                "sentiment": {"magnitude": 0.1, "score": 0.1},
            }],
            "tokens": [
                {
                    "text": {"content": "Hello", "beginOffset": 0},
                    "partOfSpeech": {"tag": 11, "mood": 3, "number": 0},
                    "dependencyEdge": {"headTokenIndex": 0, "label": 54},
                    "lemma": "Hello",
                },
                {
                    "text": {"content": "world", "beginOffset": 6},
                    "partOfSpeech": {"tag": "NOUN"},
                    "lemma": "world",
                },
                {
                    "text": {"content": ".", "beginOffset": 11},
                },
            ],
            "language": "en",
        });
        let got = serde_json::from_value::<AnalyzeSyntaxResponse>(input)?;
        assert_eq!(got.language, "en");
        assert_eq!(got.sentences.len(), 1);
        let tags = got
            .tokens
            .iter()
            .map(|t| t.part_of_speech.as_ref().map(|p| p.tag.clone()))
            .collect::<Vec<_>>();
        assert_eq!(tags, vec![Some(Tag::Verb), Some(Tag::Noun), None]);
        let offsets = got
            .tokens
            .iter()
            .filter_map(|t| t.text.as_ref().map(|s| s.begin_offset))
            .collect::<Vec<_>>();
        assert_eq!(offsets, vec![0, 6, 11]);
        Ok(())
    }

    #[test]
    fn response_deserialize_empty() -> anyhow::Result<()> {
        let got = serde_json::from_value::<AnalyzeSyntaxResponse>(json!({}))?;
        assert_eq!(got, AnalyzeSyntaxResponse::default());
        Ok(())
    }
}
