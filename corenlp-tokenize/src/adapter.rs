//! Annotation request adapter
//!
//! Freezes the tokenizer options at construction, builds the property
//! mapping for each call and hands the request to the client.

use crate::client::AnnotationClient;
use crate::options::TokenizeOptions;
use crate::properties::AnnotationProperties;

/// Builds annotation requests and delegates them to a client
///
/// Holds no state besides the client and the rendered options string, so a
/// single adapter can serve any number of independent calls.
#[derive(Debug, Clone)]
pub struct AnnotationRequestAdapter<C> {
    client: C,
    options: String,
}

impl<C: AnnotationClient> AnnotationRequestAdapter<C> {
    /// Create an adapter; missing or empty options send no `tokenize.options`
    pub fn new(client: C, options: Option<&TokenizeOptions>) -> Self {
        Self {
            client,
            options: options.map(TokenizeOptions::render).unwrap_or_default(),
        }
    }

    /// The rendered `key=value,...` options string
    pub fn options(&self) -> &str {
        &self.options
    }

    /// The wrapped client
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Properties a call with `stages` would send
    pub fn properties(&self, stages: &[&str]) -> AnnotationProperties {
        AnnotationProperties::new(stages, &self.options)
    }

    /// Run `stages` over `text` and return the client's document unmodified
    ///
    /// `stages` should be non-empty. Exactly one client call is made; its
    /// error, if any, is returned as is.
    pub fn execute(&self, stages: &[&str], text: &str) -> Result<C::Document, C::Error> {
        let properties = self.properties(stages);
        log::debug!(
            "annotating {} bytes with annotators [{}]",
            text.len(),
            properties.annotators()
        );
        self.client.annotate(text, &properties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::{SSPLIT, TOKENIZE, TOKENIZE_OPTIONS};
    use corenlp_doc::Document;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        seen: RefCell<Vec<AnnotationProperties>>,
    }

    impl AnnotationClient for Recorder {
        type Document = Document;
        type Error = std::convert::Infallible;

        fn annotate(
            &self,
            _text: &str,
            properties: &AnnotationProperties,
        ) -> Result<Document, Self::Error> {
            self.seen.borrow_mut().push(properties.clone());
            Ok(Document::default())
        }
    }

    #[test]
    fn test_missing_options_render_empty() {
        let adapter = AnnotationRequestAdapter::new(Recorder::default(), None);
        assert_eq!(adapter.options(), "");
        assert!(!adapter.properties(&[TOKENIZE]).contains_key(TOKENIZE_OPTIONS));
    }

    #[test]
    fn test_empty_options_render_empty() {
        let options = TokenizeOptions::new();
        let adapter = AnnotationRequestAdapter::new(Recorder::default(), Some(&options));
        assert_eq!(adapter.options(), "");
    }

    #[test]
    fn test_execute_makes_one_call() {
        let options = TokenizeOptions::new().with("americanize", true).unwrap();
        let adapter = AnnotationRequestAdapter::new(Recorder::default(), Some(&options));

        adapter.execute(&[TOKENIZE, SSPLIT], "text").unwrap();

        let seen = adapter.client().seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].annotators(), "tokenize,ssplit");
        assert_eq!(seen[0].tokenize_options(), Some("americanize=true"));
    }
}
