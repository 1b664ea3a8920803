//! Per-request annotation properties

use std::collections::BTreeMap;

/// Property key listing the pipeline stages to run
pub const ANNOTATORS: &str = "annotators";
/// Property key for the input format
pub const INPUT_FORMAT: &str = "inputFormat";
/// Property key for the output format
pub const OUTPUT_FORMAT: &str = "outputFormat";
/// Property key for the response serializer
pub const SERIALIZER: &str = "serializer";
/// Property key carrying the rendered tokenizer options
pub const TOKENIZE_OPTIONS: &str = "tokenize.options";

/// Requests always send plain text
pub const TEXT_INPUT: &str = "text";
/// Responses are always requested in serialized form
pub const SERIALIZED_OUTPUT: &str = "serialized";
/// Serializer the server uses to encode responses
pub const PROTOBUF_SERIALIZER: &str = "edu.stanford.nlp.pipeline.ProtobufAnnotationSerializer";

/// Word tokenization stage
pub const TOKENIZE: &str = "tokenize";
/// Sentence splitting stage
pub const SSPLIT: &str = "ssplit";

/// Property mapping sent along with one annotation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationProperties {
    inner: BTreeMap<String, String>,
}

impl AnnotationProperties {
    /// Build the properties for one request
    ///
    /// `stages` are joined with commas in the order given. `tokenize.options`
    /// is only present when `options` is non-empty.
    pub fn new(stages: &[&str], options: &str) -> Self {
        let mut inner = BTreeMap::new();
        inner.insert(ANNOTATORS.to_string(), stages.join(","));
        inner.insert(INPUT_FORMAT.to_string(), TEXT_INPUT.to_string());
        inner.insert(OUTPUT_FORMAT.to_string(), SERIALIZED_OUTPUT.to_string());
        inner.insert(SERIALIZER.to_string(), PROTOBUF_SERIALIZER.to_string());
        if !options.is_empty() {
            inner.insert(TOKENIZE_OPTIONS.to_string(), options.to_string());
        }
        Self { inner }
    }

    /// Look up a property
    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    /// Whether a property is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// The comma-joined annotator list
    pub fn annotators(&self) -> &str {
        self.get(ANNOTATORS).unwrap_or_default()
    }

    /// The rendered tokenizer options, if any
    pub fn tokenize_options(&self) -> Option<&str> {
        self.get(TOKENIZE_OPTIONS)
    }

    /// Number of properties
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Always false; every request carries the fixed properties
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate over properties in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Borrow the underlying map
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.inner
    }

    /// Render as a JSON object, the form the server takes in its
    /// `properties` request parameter
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(&self.inner)?)
    }
}

impl From<AnnotationProperties> for BTreeMap<String, String> {
    fn from(properties: AnnotationProperties) -> Self {
        properties.inner
    }
}
